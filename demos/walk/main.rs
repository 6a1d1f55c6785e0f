use clap::{App, Arg};
use recursive_iter::cursor::EntryCursor;
use recursive_iter::{Branches, Mode, RecursiveIterator};

/// A section of a document outline
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Outline {
    Text(&'static str),
    Section(Vec<(&'static str, Outline)>),
}

/// Sections are branches, text is a leaf
#[derive(Debug, Copy, Clone)]
pub struct Sections;

impl<'a> Branches<&'a Outline> for Sections {
    type Children = EntryCursor<'a, &'static str, Outline>;
    fn has_children(&mut self, value: &&'a Outline) -> bool {
        matches!(value, Outline::Section(_))
    }
    fn children(&mut self, value: &&'a Outline) -> Self::Children {
        let outline: &'a Outline = *value;
        match outline {
            Outline::Section(entries) => EntryCursor::new(&entries[..]),
            Outline::Text(_) => EntryCursor::new(&[]),
        }
    }
}

fn sample() -> Vec<(&'static str, Outline)> {
    use Outline::*;
    vec![
        ("title", Text("Nested walks")),
        (
            "intro",
            Section(vec![
                ("motivation", Text("Recursion without recursion")),
                ("scope", Section(vec![])),
            ]),
        ),
        (
            "body",
            Section(vec![
                (
                    "modes",
                    Section(vec![
                        ("self-first", Text("Branches before children")),
                        ("child-first", Text("Branches after children")),
                    ]),
                ),
                ("frames", Text("One cursor per level")),
            ]),
        ),
    ]
}

fn main() {
    let matches = App::new("walk")
        .about("Flatten a nested outline with a depth-first walk")
        .arg(
            Arg::with_name("mode")
                .short("m")
                .long("mode")
                .takes_value(true)
                .default_value("self-first")
                .help("Traversal order: self-first or child-first"),
        )
        .arg(
            Arg::with_name("paths")
                .short("p")
                .long("paths")
                .help("Print full paths instead of indented keys"),
        )
        .get_matches();
    let mode: Mode = match matches.value_of("mode").unwrap_or_default().parse() {
        Ok(mode) => mode,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(2)
        }
    };
    let paths = matches.is_present("paths");

    let outline = sample();
    let mut walk = RecursiveIterator::new(EntryCursor::new(&outline[..]), Sections, mode);
    walk.restart();
    while let Some(iteration) = walk.iteration() {
        let label = if paths {
            walk.joined_path("/").unwrap_or_default()
        } else {
            format!("{}{}", "  ".repeat(iteration.depth), iteration.key)
        };
        match iteration.value {
            Outline::Text(text) => println!("{}: {}", label, text),
            Outline::Section(_) => println!("{}/", label),
        }
        if let Err(err) = walk.advance() {
            eprintln!("{}", err);
            break;
        }
    }
}
