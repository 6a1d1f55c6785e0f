/*!
The stack of frames of a recursive traversal
*/
use crate::cursor::Cursor;
use smallvec::SmallVec;

/// The number of frames stored inline before a `FrameStack` spills onto the heap
pub const FRAME_STACK_SIZE: usize = 8;

/// An ordered stack of cursors, one per nesting level currently being visited.
///
/// The top of the stack is the innermost level. Every frame below the top points at the branch element whose
/// children are being visited one level up.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct FrameStack<C> {
    frames: SmallVec<[C; FRAME_STACK_SIZE]>,
}

impl<C> Default for FrameStack<C> {
    #[inline]
    fn default() -> FrameStack<C> {
        FrameStack {
            frames: SmallVec::new(),
        }
    }
}

impl<C> FrameStack<C> {
    /// Create a new, empty frame stack
    #[inline]
    pub fn new() -> FrameStack<C> {
        Self::default()
    }
    /// Push a frame, descending one level
    #[inline]
    pub fn push(&mut self, frame: C) {
        self.frames.push(frame)
    }
    /// Pop the innermost frame, returning to its parent level
    #[inline]
    pub fn pop(&mut self) -> Option<C> {
        self.frames.pop()
    }
    /// Get the innermost frame
    #[inline]
    pub fn top(&self) -> Option<&C> {
        self.frames.last()
    }
    /// Mutably get the innermost frame
    #[inline]
    pub fn top_mut(&mut self) -> Option<&mut C> {
        self.frames.last_mut()
    }
    /// Get the number of frames on this stack
    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }
    /// Whether this stack has no frames
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
    /// Remove every frame from this stack
    #[inline]
    pub fn clear(&mut self) {
        self.frames.clear()
    }
    /// Iterate over the frames of this stack, from the outermost to the innermost
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<C> {
        self.frames.iter()
    }
}

impl<C: Cursor> FrameStack<C> {
    /// Get the keys under the outermost `depth` frames, from the outermost inwards
    pub fn keys(&self, depth: usize) -> impl Iterator<Item = C::Key> + '_ {
        self.frames.iter().take(depth).filter_map(Cursor::current_key)
    }
}
