/*!
Snapshots of a traversal's position
*/

/// A single element emitted by a traversal: where the traversal currently is.
///
/// A finished traversal is represented by the absence of an `Iteration`, so a key is never present without a value.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Iteration<K, V> {
    /// The key of this element within the container which produced it
    pub key: K,
    /// The element itself
    pub value: V,
    /// The number of branch elements enclosing this element. Elements of the root container have depth 0.
    pub depth: usize,
}

impl<K, V> Iteration<K, V> {
    /// Create a new iteration
    #[inline]
    pub fn new(key: K, value: V, depth: usize) -> Iteration<K, V> {
        Iteration { key, value, depth }
    }
    /// Get the key of this iteration
    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }
    /// Get the value of this iteration
    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }
    /// Split this iteration into a key-value pair, discarding the depth
    #[inline]
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

quick_display!(
    impl<K, V> Iteration<K, V> where [K: std::fmt::Display, V: std::fmt::Display],
    s, fmt => write!(fmt, "{}: {} @ {}", s.key, s.value, s.depth)
);
