/*!
Cursors wrapping ordinary Rust iterators
*/
use super::Cursor;
use std::fmt::{self, Debug, Formatter};

/// A cursor over any cloneable iterator of key-value pairs.
///
/// The cursor keeps a pristine copy of the iterator it was created from, and rewinds by cloning it again. This makes
/// maps (e.g. `btree_map::Iter`), `enumerate`d sequences and similar adaptors usable as levels of a traversal.
pub struct IterCursor<I: Iterator> {
    /// The iterator in its initial state
    source: I,
    /// The iterator being advanced
    iter: I,
    /// The item under the cursor
    current: Option<I::Item>,
}

impl<I: Iterator + Clone> IterCursor<I> {
    /// Create a new cursor positioned on the first item of an iterator
    pub fn new(source: I) -> IterCursor<I> {
        let mut iter = source.clone();
        let current = iter.next();
        IterCursor {
            source,
            iter,
            current,
        }
    }
}

impl<I: Iterator> IterCursor<I> {
    /// Get the item under this cursor, if any
    #[inline]
    pub fn item(&self) -> Option<&I::Item> {
        self.current.as_ref()
    }
}

impl<I> Clone for IterCursor<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> IterCursor<I> {
        IterCursor {
            source: self.source.clone(),
            iter: self.iter.clone(),
            current: self.current.clone(),
        }
    }
}

impl<I> Debug for IterCursor<I>
where
    I: Iterator + Debug,
    I::Item: Debug,
{
    fn fmt(&self, fmt: &mut Formatter) -> Result<(), fmt::Error> {
        fmt.debug_struct("IterCursor")
            .field("iter", &self.iter)
            .field("current", &self.current)
            .finish()
    }
}

impl<I, K, V> Cursor for IterCursor<I>
where
    I: Iterator<Item = (K, V)> + Clone,
    K: Clone,
    V: Clone,
{
    type Key = K;
    type Value = V;
    #[inline]
    fn current_key(&self) -> Option<K> {
        self.current.as_ref().map(|(key, _)| key.clone())
    }
    #[inline]
    fn current_value(&self) -> Option<V> {
        self.current.as_ref().map(|(_, value)| value.clone())
    }
    #[inline]
    fn advance(&mut self) {
        if self.current.is_some() {
            self.current = self.iter.next()
        }
    }
    fn reset(&mut self) {
        self.iter = self.source.clone();
        self.current = self.iter.next();
    }
}
