/*!
Deciding which elements of a nested structure are branches
*/
use std::fmt::{self, Debug, Formatter};

/// The capability of telling branch elements apart from leaves, and of opening a branch's children.
///
/// Supplied once per traversal, rather than per container type, so the same data can be walked with different
/// notions of what counts as a branch.
pub trait Branches<V> {
    /// The container holding the children of a branch
    type Children;
    /// Whether a value has children which a traversal should recurse into
    fn has_children(&mut self, value: &V) -> bool;
    /// Get the children of a value. Only called on values for which `has_children` returned `true`.
    fn children(&mut self, value: &V) -> Self::Children;
}

/// A pair of closures implementing `Branches`
#[derive(Copy, Clone)]
pub struct FnBranches<H, G> {
    /// Whether a value has children
    pub has_children: H,
    /// Get the children of a value
    pub children: G,
}

impl<H, G> FnBranches<H, G> {
    /// Create a new branch capability from a pair of closures
    #[inline]
    pub fn new(has_children: H, children: G) -> FnBranches<H, G> {
        FnBranches {
            has_children,
            children,
        }
    }
}

/// Create a new branch capability from a pair of closures.
///
/// The closures' argument types must be annotated when calling this directly; `self_first` and `child_first` infer
/// them from the root container instead.
#[inline]
pub fn branches<H, G>(has_children: H, children: G) -> FnBranches<H, G> {
    FnBranches::new(has_children, children)
}

impl<H, G> Debug for FnBranches<H, G> {
    fn fmt(&self, fmt: &mut Formatter) -> Result<(), fmt::Error> {
        fmt.debug_struct("FnBranches").finish()
    }
}

impl<V, C, H, G> Branches<V> for FnBranches<H, G>
where
    H: FnMut(&V) -> bool,
    G: FnMut(&V) -> C,
{
    type Children = C;
    #[inline]
    fn has_children(&mut self, value: &V) -> bool {
        (self.has_children)(value)
    }
    #[inline]
    fn children(&mut self, value: &V) -> C {
        (self.children)(value)
    }
}

impl<V, B: Branches<V> + ?Sized> Branches<V> for &mut B {
    type Children = B::Children;
    #[inline]
    fn has_children(&mut self, value: &V) -> bool {
        (**self).has_children(value)
    }
    #[inline]
    fn children(&mut self, value: &V) -> B::Children {
        (**self).children(value)
    }
}
