/*!
`recursive-iter` walks arbitrarily deep nested containers as a single flat sequence of `(key, value)` pairs.

The caller supplies the containers, in the form of [`Cursor`](cursor::Cursor)s, and a
[`Branches`](branches::Branches) capability telling the walker which values have children. A
[`RecursiveIterator`](iterator::RecursiveIterator) then performs a depth-first traversal using an
explicit stack of frames, so the nesting depth is bounded only by available memory, never by the native
call stack. Branch nodes are emitted either before their children ([`Mode::SelfFirst`](mode::Mode)) or
after them ([`Mode::ChildFirst`](mode::Mode)); leaves are always emitted in place.

# Example
```rust
use recursive_iter::{child_first, cursor::EntryCursor, self_first};

enum Node {
    Leaf(u32),
    Branch(Vec<(&'static str, Node)>),
}

impl Node {
    fn entries(&self) -> &[(&'static str, Node)] {
        match self {
            Node::Branch(entries) => entries,
            Node::Leaf(_) => &[],
        }
    }
}

let tree = vec![
    ("a", Node::Branch(vec![("x", Node::Leaf(10))])),
    ("b", Node::Leaf(20)),
];

let pre: Vec<&str> = self_first(
    EntryCursor::new(&tree[..]),
    |node| matches!(node, Node::Branch(_)),
    |node| EntryCursor::new(node.entries()),
)
.map(|(key, _)| *key)
.collect();
assert_eq!(pre, vec!["a", "x", "b"]);

let post: Vec<&str> = child_first(
    EntryCursor::new(&tree[..]),
    |node| matches!(node, Node::Branch(_)),
    |node| EntryCursor::new(node.entries()),
)
.map(|(key, _)| *key)
.collect();
assert_eq!(post, vec!["x", "a", "b"]);
```
*/
#![forbid(unsafe_code, missing_docs, missing_debug_implementations)]

#[macro_use]
pub mod util;

pub mod branches;
pub mod cursor;
pub mod engine;
pub mod error;
pub mod iteration;
pub mod iterator;
pub mod mode;
pub mod stack;

pub use branches::{branches, Branches, FnBranches};
pub use cursor::Cursor;
pub use engine::Engine;
pub use error::Error;
pub use iteration::Iteration;
pub use iterator::{child_first, self_first, RecursiveIterator};
pub use mode::Mode;
