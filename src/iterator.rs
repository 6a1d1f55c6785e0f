/*!
A restartable iterator over nested containers
*/
use crate::branches::{Branches, FnBranches};
use crate::cursor::Cursor;
use crate::engine::Engine;
use crate::error::Error;
use crate::iteration::Iteration;
use crate::mode::Mode;
use itertools::Itertools;
use std::fmt::{self, Debug, Display, Formatter};
use tracing::debug;

/// The state of a `RecursiveIterator`
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
enum State<K, V> {
    /// The iterator has never been restarted
    NotStarted,
    /// The iterator is positioned on an element
    At(Iteration<K, V>),
    /// The iterator has emitted every element
    Exhausted,
}

impl<K, V> From<Option<Iteration<K, V>>> for State<K, V> {
    #[inline]
    fn from(iteration: Option<Iteration<K, V>>) -> State<K, V> {
        match iteration {
            Some(iteration) => State::At(iteration),
            None => State::Exhausted,
        }
    }
}

/// A depth-first iterator over a nested structure, yielding every element, branch or leaf, exactly once.
///
/// The iterator follows a restart/advance protocol: `restart` positions it on the first element, `advance` moves it
/// to the next one, and `current`, `key` and `valid` inspect the element it is positioned on. It also implements
/// `Iterator`: `next` yields the element the iterator is positioned on if `next` has not yet yielded it, and steps
/// otherwise, restarting first if the iterator was never restarted. Restarting an exhausted iterator makes `next`
/// yield elements again, so the iterator is not fused.
///
/// Every traversal owns its frame stack and one cursor per level, so several traversals may walk the same borrowed
/// structure independently.
pub struct RecursiveIterator<C: Cursor, B> {
    /// The root container, in its initial state
    root: C,
    /// The traversal engine
    engine: Engine<C, B>,
    /// The element the iterator is positioned on
    state: State<C::Key, C::Value>,
    /// Whether the current position has yet to be yielded by `next`
    pending: bool,
}

impl<C, B> Debug for RecursiveIterator<C, B>
where
    C: Cursor + Debug,
    C::Key: Debug,
    C::Value: Debug,
    B: Debug,
{
    fn fmt(&self, fmt: &mut Formatter) -> Result<(), fmt::Error> {
        fmt.debug_struct("RecursiveIterator")
            .field("root", &self.root)
            .field("engine", &self.engine)
            .field("state", &self.state)
            .field("pending", &self.pending)
            .finish()
    }
}

impl<C, B> Clone for RecursiveIterator<C, B>
where
    C: Cursor + Clone,
    C::Key: Clone,
    C::Value: Clone,
    B: Clone,
{
    fn clone(&self) -> RecursiveIterator<C, B> {
        RecursiveIterator {
            root: self.root.clone(),
            engine: self.engine.clone(),
            state: self.state.clone(),
            pending: self.pending,
        }
    }
}

impl<C: Cursor, B> RecursiveIterator<C, B> {
    /// Create a new iterator over a root container. The iterator must be restarted before it is advanced.
    #[inline]
    pub fn new(root: C, branches: B, mode: Mode) -> RecursiveIterator<C, B> {
        RecursiveIterator {
            root,
            engine: Engine::new(branches, mode),
            state: State::NotStarted,
            pending: false,
        }
    }
    /// Get the traversal mode of this iterator
    #[inline]
    pub fn mode(&self) -> Mode {
        self.engine.mode()
    }
    /// Get the root container of this iterator
    #[inline]
    pub fn root(&self) -> &C {
        &self.root
    }
    /// Get the traversal engine driving this iterator
    #[inline]
    pub fn engine(&self) -> &Engine<C, B> {
        &self.engine
    }
    /// Replace the root container of this iterator. The iterator must be restarted before it is advanced again.
    pub fn set_root(&mut self, root: C) {
        debug!("replacing root container");
        self.root = root;
        self.engine.clear();
        self.state = State::NotStarted;
        self.pending = false;
    }
    /// Whether this iterator is positioned on an element
    #[inline]
    pub fn valid(&self) -> bool {
        self.iteration().is_some()
    }
    /// Whether this iterator has been restarted and has since emitted every element
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        matches!(self.state, State::Exhausted)
    }
    /// Get the element this iterator is positioned on, along with its key and depth
    #[inline]
    pub fn iteration(&self) -> Option<&Iteration<C::Key, C::Value>> {
        match &self.state {
            State::At(iteration) => Some(iteration),
            _ => None,
        }
    }
    /// Get the key of the element this iterator is positioned on, if any
    #[inline]
    pub fn key(&self) -> Option<&C::Key> {
        self.iteration().map(Iteration::key)
    }
    /// Get the key of the element this iterator is positioned on, failing if there is none
    #[inline]
    pub fn try_key(&self) -> Result<&C::Key, Error> {
        self.key().ok_or(Error::NoCurrentElement)
    }
    /// Get the element this iterator is positioned on, failing if there is none
    #[inline]
    pub fn current(&self) -> Result<&C::Value, Error> {
        self.iteration()
            .map(Iteration::value)
            .ok_or(Error::NoCurrentElement)
    }
    /// Get the number of branches enclosing the current element, if any
    #[inline]
    pub fn depth(&self) -> Option<usize> {
        self.iteration().map(|iteration| iteration.depth)
    }
    /// Get the keys of the branches enclosing the current element, from the outermost inwards.
    ///
    /// Together with `key`, this is the full path from the root to the current element. Empty if there is no current
    /// element.
    pub fn path(&self) -> Vec<C::Key> {
        match self.depth() {
            Some(depth) => self.engine.stack().keys(depth).collect(),
            None => Vec::new(),
        }
    }
    /// Get the full path of the current element, including its own key, joined with a separator
    pub fn joined_path(&self, separator: &str) -> Option<String>
    where
        C::Key: Display,
    {
        let key = self.key()?;
        let depth = self.depth()?;
        Some(
            self.engine
                .stack()
                .keys(depth)
                .map(|key| key.to_string())
                .chain(std::iter::once(key.to_string()))
                .join(separator),
        )
    }
}

impl<C, B> RecursiveIterator<C, B>
where
    C: Cursor,
    B: Branches<C::Value, Children = C>,
{
    /// Create a new iterator over the children of a value.
    ///
    /// Fails with `InvalidContainer` if the value has no children.
    pub fn from_value(value: &C::Value, mut branches: B, mode: Mode) -> Result<Self, Error> {
        if !branches.has_children(value) {
            return Err(Error::InvalidContainer);
        }
        let root = branches.children(value);
        Ok(Self::new(root, branches, mode))
    }
    /// Replace the root container of this iterator with the children of a value.
    ///
    /// Fails with `InvalidContainer`, leaving the iterator untouched, if the value has no children.
    pub fn set_root_value(&mut self, value: &C::Value) -> Result<(), Error> {
        let branches = self.engine.branches_mut();
        if !branches.has_children(value) {
            return Err(Error::InvalidContainer);
        }
        let root = branches.children(value);
        self.set_root(root);
        Ok(())
    }
    /// Advance this iterator to the next element.
    ///
    /// Fails with `IteratingFailure` if the iterator has never been restarted. Advancing an exhausted iterator leaves
    /// it exhausted.
    pub fn advance(&mut self) -> Result<(), Error> {
        if let State::NotStarted = self.state {
            return Err(Error::IteratingFailure);
        }
        self.state = self.engine.step().into();
        self.pending = true;
        Ok(())
    }
}

impl<C, B> RecursiveIterator<C, B>
where
    C: Cursor + Clone,
    B: Branches<C::Value, Children = C>,
{
    /// Position this iterator on the first element of its root container, discarding any traversal in progress
    pub fn restart(&mut self) {
        debug!(mode = %self.engine.mode(), "restarting traversal");
        self.state = self.engine.reset(self.root.clone()).into();
        self.pending = true;
    }
}

impl<C, B> Iterator for RecursiveIterator<C, B>
where
    C: Cursor + Clone,
    C::Key: Clone,
    C::Value: Clone,
    B: Branches<C::Value, Children = C>,
{
    type Item = (C::Key, C::Value);
    fn next(&mut self) -> Option<(C::Key, C::Value)> {
        if let State::NotStarted = self.state {
            self.restart()
        }
        if !self.pending {
            self.state = self.engine.step().into();
        }
        self.pending = false;
        self.iteration()
            .map(|iteration| (iteration.key.clone(), iteration.value.clone()))
    }
}

/// Walk a nested structure in pre-order, emitting every branch before its descendants
pub fn self_first<C, H, G>(root: C, has_children: H, children: G) -> RecursiveIterator<C, FnBranches<H, G>>
where
    C: Cursor,
    H: FnMut(&C::Value) -> bool,
    G: FnMut(&C::Value) -> C,
{
    RecursiveIterator::new(root, FnBranches::new(has_children, children), Mode::SelfFirst)
}

/// Walk a nested structure in post-order, emitting every branch after its descendants
pub fn child_first<C, H, G>(root: C, has_children: H, children: G) -> RecursiveIterator<C, FnBranches<H, G>>
where
    C: Cursor,
    H: FnMut(&C::Value) -> bool,
    G: FnMut(&C::Value) -> C,
{
    RecursiveIterator::new(root, FnBranches::new(has_children, children), Mode::ChildFirst)
}
