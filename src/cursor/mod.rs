/*!
Single-level cursors over containers.

A [`Cursor`] is a read position into one level of a nested structure. Recursive traversals are built by stacking
cursors, one per level, so a cursor only needs to know how to read its current element, step forwards and rewind.
*/
use std::rc::Rc;

mod iter;
pub use iter::IterCursor;

/// A cursor into a single, flat, ordered container.
///
/// Exhaustion is not an error: once the cursor has moved past its last element, `current_key` and `current_value`
/// both return `None`.
pub trait Cursor {
    /// The keys of this container
    type Key;
    /// The values of this container
    type Value;
    /// Get the key of the element under this cursor, or `None` if the cursor is exhausted
    fn current_key(&self) -> Option<Self::Key>;
    /// Get the element under this cursor, or `None` if the cursor is exhausted
    fn current_value(&self) -> Option<Self::Value>;
    /// Move this cursor to the next element. Does nothing if the cursor is already exhausted.
    fn advance(&mut self);
    /// Move this cursor back to the first element of its container
    fn reset(&mut self);
    /// Get the key-value pair under this cursor, if any
    #[inline]
    fn current(&self) -> Option<(Self::Key, Self::Value)> {
        Some((self.current_key()?, self.current_value()?))
    }
    /// Whether this cursor has moved past its last element
    #[inline]
    fn is_exhausted(&self) -> bool {
        self.current_key().is_none()
    }
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Key = C::Key;
    type Value = C::Value;
    #[inline]
    fn current_key(&self) -> Option<C::Key> {
        (**self).current_key()
    }
    #[inline]
    fn current_value(&self) -> Option<C::Value> {
        (**self).current_value()
    }
    #[inline]
    fn advance(&mut self) {
        (**self).advance()
    }
    #[inline]
    fn reset(&mut self) {
        (**self).reset()
    }
}

/// A cursor over a slice, keyed by index
#[derive(Debug, Eq, PartialEq, Hash)]
pub struct SliceCursor<'a, T> {
    /// The slice being iterated over
    slice: &'a [T],
    /// The index of the current element
    ix: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    /// Create a new cursor pointing to the first element of a slice
    #[inline]
    pub fn new(slice: &'a [T]) -> SliceCursor<'a, T> {
        SliceCursor { slice, ix: 0 }
    }
    /// Get the slice this cursor iterates over
    #[inline]
    pub fn slice(&self) -> &'a [T] {
        self.slice
    }
}

// Only the borrow is copied, so the elements need not be `Clone`
impl<'a, T> Clone for SliceCursor<'a, T> {
    #[inline]
    fn clone(&self) -> SliceCursor<'a, T> {
        *self
    }
}

impl<'a, T> Copy for SliceCursor<'a, T> {}

impl<'a, T> Cursor for SliceCursor<'a, T> {
    type Key = usize;
    type Value = &'a T;
    #[inline]
    fn current_key(&self) -> Option<usize> {
        if self.ix < self.slice.len() {
            Some(self.ix)
        } else {
            None
        }
    }
    #[inline]
    fn current_value(&self) -> Option<&'a T> {
        self.slice.get(self.ix)
    }
    #[inline]
    fn advance(&mut self) {
        if self.ix < self.slice.len() {
            self.ix += 1
        }
    }
    #[inline]
    fn reset(&mut self) {
        self.ix = 0
    }
}

/// A cursor over a slice of key-value entries
#[derive(Debug, Eq, PartialEq, Hash)]
pub struct EntryCursor<'a, K, V> {
    /// The entries being iterated over
    entries: &'a [(K, V)],
    /// The index of the current entry
    ix: usize,
}

impl<'a, K, V> EntryCursor<'a, K, V> {
    /// Create a new cursor pointing to the first of a slice of entries
    #[inline]
    pub fn new(entries: &'a [(K, V)]) -> EntryCursor<'a, K, V> {
        EntryCursor { entries, ix: 0 }
    }
}

impl<'a, K, V> Clone for EntryCursor<'a, K, V> {
    #[inline]
    fn clone(&self) -> EntryCursor<'a, K, V> {
        *self
    }
}

impl<'a, K, V> Copy for EntryCursor<'a, K, V> {}

impl<'a, K, V> Cursor for EntryCursor<'a, K, V> {
    type Key = &'a K;
    type Value = &'a V;
    #[inline]
    fn current_key(&self) -> Option<&'a K> {
        self.entries.get(self.ix).map(|(key, _)| key)
    }
    #[inline]
    fn current_value(&self) -> Option<&'a V> {
        self.entries.get(self.ix).map(|(_, value)| value)
    }
    #[inline]
    fn advance(&mut self) {
        if self.ix < self.entries.len() {
            self.ix += 1
        }
    }
    #[inline]
    fn reset(&mut self) {
        self.ix = 0
    }
}

/// A cursor over a reference-counted slice of key-value entries, yielding clones of its keys and values.
///
/// Useful for structures made of `Rc` nodes, where a frame must keep its level alive independently of any borrow.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct RcCursor<K, V> {
    /// The entries being iterated over
    entries: Rc<[(K, V)]>,
    /// The index of the current entry
    ix: usize,
}

impl<K, V> RcCursor<K, V> {
    /// Create a new cursor pointing to the first of a slice of entries
    #[inline]
    pub fn new(entries: Rc<[(K, V)]>) -> RcCursor<K, V> {
        RcCursor { entries, ix: 0 }
    }
    /// Get the entries this cursor iterates over
    #[inline]
    pub fn entries(&self) -> &Rc<[(K, V)]> {
        &self.entries
    }
}

impl<K: Clone, V: Clone> Cursor for RcCursor<K, V> {
    type Key = K;
    type Value = V;
    #[inline]
    fn current_key(&self) -> Option<K> {
        self.entries.get(self.ix).map(|(key, _)| key.clone())
    }
    #[inline]
    fn current_value(&self) -> Option<V> {
        self.entries.get(self.ix).map(|(_, value)| value.clone())
    }
    #[inline]
    fn advance(&mut self) {
        if self.ix < self.entries.len() {
            self.ix += 1
        }
    }
    #[inline]
    fn reset(&mut self) {
        self.ix = 0
    }
}
