/*!
Walk structures built from standard containers: maps, reference-counted nodes and plain slices.
*/
use pretty_assertions::assert_eq;
use recursive_iter::cursor::{IterCursor, RcCursor, SliceCursor};
use recursive_iter::{branches, child_first, self_first, Mode, RecursiveIterator};
use std::collections::btree_map::{self, BTreeMap};
use std::rc::Rc;

/// A JSON-like document made of numbers and objects
#[derive(Debug, Clone, Eq, PartialEq)]
enum Document {
    Number(i64),
    Object(BTreeMap<String, Document>),
}

fn object(entries: Vec<(&str, Document)>) -> Document {
    Document::Object(
        entries
            .into_iter()
            .map(|(key, value)| (key.to_owned(), value))
            .collect(),
    )
}

type Fields<'a> = IterCursor<btree_map::Iter<'a, String, Document>>;

fn fields(document: &Document) -> Option<Fields<'_>> {
    match document {
        Document::Object(map) => Some(IterCursor::new(map.iter())),
        Document::Number(_) => None,
    }
}

#[test]
fn map_documents_yield_sorted_paths() {
    let document = object(vec![
        ("zeta", Document::Number(1)),
        (
            "alpha",
            object(vec![
                ("beta", object(vec![("gamma", Document::Number(2))])),
                ("delta", object(vec![])),
            ]),
        ),
    ]);
    let root = fields(&document).expect("root is an object");
    let mut walk = child_first(
        root,
        |value| fields(value).is_some(),
        |value| fields(value).expect("only objects have children"),
    );
    let mut paths = Vec::new();
    walk.restart();
    while walk.valid() {
        paths.push(walk.joined_path(".").unwrap());
        walk.advance().unwrap();
    }
    assert_eq!(
        paths,
        vec![
            "alpha.beta.gamma",
            "alpha.beta",
            "alpha.delta",
            "alpha",
            "zeta"
        ]
    );
}

/// A tree of shared nodes
#[derive(Debug)]
enum Shared {
    Leaf(u32),
    Branch(Rc<[(String, Rc<Shared>)]>),
}

impl Shared {
    fn children(&self) -> Rc<[(String, Rc<Shared>)]> {
        match self {
            Shared::Branch(children) => children.clone(),
            Shared::Leaf(_) => Rc::from(Vec::new()),
        }
    }
}

fn shared(entries: Vec<(&str, Shared)>) -> Shared {
    Shared::Branch(
        entries
            .into_iter()
            .map(|(key, node)| (key.to_owned(), Rc::new(node)))
            .collect::<Vec<_>>()
            .into(),
    )
}

#[test]
fn shared_nodes_outlive_their_walk() {
    let root = shared(vec![
        ("a", Shared::Leaf(1)),
        ("b", shared(vec![("c", Shared::Leaf(2)), ("d", Shared::Leaf(3))])),
    ]);
    let entries = root.children();
    let walk = self_first(
        RcCursor::new(entries.clone()),
        |node| matches!(**node, Shared::Branch(_)),
        |node| RcCursor::new(node.children()),
    );
    let leaves: Vec<(String, u32)> = walk
        .filter_map(|(key, node)| match *node {
            Shared::Leaf(n) => Some((key, n)),
            Shared::Branch(_) => None,
        })
        .collect();
    assert_eq!(
        leaves,
        vec![
            ("a".to_owned(), 1),
            ("c".to_owned(), 2),
            ("d".to_owned(), 3)
        ]
    );
    // The walk released every handle it took on the root level
    assert_eq!(Rc::strong_count(&entries), 2);
}

#[test]
fn flat_slices_are_walked_by_index() {
    let lists: Vec<Vec<u8>> = vec![vec![1, 2], vec![], vec![3]];
    let outer: Vec<&[u8]> = lists.iter().map(|list| &list[..]).collect();
    let capability = branches(|_: &&&[u8]| false, |_: &&&[u8]| SliceCursor::new(&outer[..]));
    let walk = RecursiveIterator::new(SliceCursor::new(&outer[..]), capability, Mode::ChildFirst);
    let keys: Vec<usize> = walk.map(|(key, _)| key).collect();
    assert_eq!(keys, vec![0, 1, 2]);
}

/// A node type which cannot be cloned, walked only through borrows
#[derive(Debug)]
enum Opaque {
    Atom(u8),
    List(Vec<Opaque>),
}

fn items(node: &Opaque) -> &[Opaque] {
    match node {
        Opaque::List(items) => items,
        Opaque::Atom(_) => &[],
    }
}

#[test]
fn uncloneable_nodes_can_be_restarted() {
    let data = vec![
        Opaque::Atom(1),
        Opaque::List(vec![Opaque::Atom(2), Opaque::Atom(3)]),
    ];
    let mut walk = self_first(
        SliceCursor::new(&data[..]),
        |node| matches!(node, Opaque::List(_)),
        |node| SliceCursor::new(items(*node)),
    );
    walk.restart();
    walk.advance().unwrap();
    assert_eq!(walk.path(), Vec::<usize>::new());
    walk.restart();
    let atoms: Vec<u8> = walk
        .filter_map(|(_, node)| match node {
            Opaque::Atom(atom) => Some(*atom),
            Opaque::List(_) => None,
        })
        .collect();
    assert_eq!(atoms, vec![1, 2, 3]);
}
