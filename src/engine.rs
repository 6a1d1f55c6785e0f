/*!
Depth-first traversal of nested containers using an explicit stack of frames
*/
use crate::branches::Branches;
use crate::cursor::Cursor;
use crate::iteration::Iteration;
use crate::mode::Mode;
use crate::stack::FrameStack;
use tracing::trace;

/// The single-step depth-first traversal engine.
///
/// The engine holds the frame stack of a traversal and computes, one step at a time, the next element to emit. It
/// never recurses natively, so the depth of the structure being walked is limited only by available memory.
#[derive(Debug, Clone)]
pub struct Engine<C, B> {
    /// The frames currently being visited
    stack: FrameStack<C>,
    /// The order in which to emit branches
    mode: Mode,
    /// The branch capability of this traversal
    branches: B,
}

/// What to do after backtracking out of an exhausted frame
enum Backtrack<K, V> {
    /// Emit a branch whose children have all been visited
    Emit(Iteration<K, V>),
    /// Continue the traversal at the parent level
    Resume,
    /// The outermost frame has been exhausted
    Finished,
}

impl<C, B> Engine<C, B> {
    /// Create a new engine which has not yet been started
    #[inline]
    pub fn new(branches: B, mode: Mode) -> Engine<C, B> {
        Engine {
            stack: FrameStack::new(),
            mode,
            branches,
        }
    }
    /// Get the mode of this engine
    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }
    /// Get the current frame stack of this engine
    #[inline]
    pub fn stack(&self) -> &FrameStack<C> {
        &self.stack
    }
    /// Get the branch capability of this engine
    #[inline]
    pub fn branches(&self) -> &B {
        &self.branches
    }
    /// Mutably get the branch capability of this engine
    #[inline]
    pub fn branches_mut(&mut self) -> &mut B {
        &mut self.branches
    }
    /// Whether this engine has no frames left, i.e. has not been started or has been exhausted
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.stack.is_empty()
    }
    /// Discard the traversal in progress, if any, leaving this engine idle
    #[inline]
    pub fn clear(&mut self) {
        self.stack.clear()
    }
}

impl<C, B> Engine<C, B>
where
    C: Cursor,
    B: Branches<C::Value, Children = C>,
{
    /// Restart this engine at the first element of a root container, returning the first element to emit
    pub fn reset(&mut self, mut root: C) -> Option<Iteration<C::Key, C::Value>> {
        self.stack.clear();
        root.reset();
        self.stack.push(root);
        self.step()
    }
    /// Advance this engine by one step, returning the next element to emit, or `None` if the traversal is finished.
    ///
    /// Once finished, further steps keep returning `None`.
    pub fn step(&mut self) -> Option<Iteration<C::Key, C::Value>> {
        loop {
            let top = self.stack.top_mut()?;
            let (key, value) = match top.current() {
                Some(current) => current,
                None => match self.backtrack() {
                    Backtrack::Emit(iteration) => return Some(iteration),
                    Backtrack::Resume => continue,
                    Backtrack::Finished => return None,
                },
            };
            if !self.branches.has_children(&value) {
                top.advance();
                return Some(Iteration::new(key, value, self.stack.len() - 1));
            }
            let mut children = self.branches.children(&value);
            children.reset();
            // The parent is only advanced once this subtree has been exhausted
            self.stack.push(children);
            let depth = self.stack.len() - 2;
            trace!(depth, mode = %self.mode, "descend");
            if self.mode.emits_on_descent() {
                return Some(Iteration::new(key, value, depth));
            }
        }
    }
    /// Pop an exhausted frame, and move the parent level past the branch whose children it held
    fn backtrack(&mut self) -> Backtrack<C::Key, C::Value> {
        self.stack.pop();
        let depth = self.stack.len();
        let top = match self.stack.top_mut() {
            Some(top) => top,
            None => {
                trace!("exhausted");
                return Backtrack::Finished;
            }
        };
        let branch = top.current();
        debug_assert!(
            branch.is_some(),
            "parent frame must point at the branch being backtracked out of"
        );
        top.advance();
        trace!(depth = depth - 1, mode = %self.mode, "backtrack");
        match branch {
            Some((key, value)) if self.mode.emits_on_backtrack() => {
                Backtrack::Emit(Iteration::new(key, value, depth - 1))
            }
            _ => Backtrack::Resume,
        }
    }
    /// Get the keys of the branches enclosing an element emitted at a given depth, from the outermost inwards.
    ///
    /// Only meaningful for the element most recently returned by `step` or `reset`.
    #[inline]
    pub fn path(&self, depth: usize) -> impl Iterator<Item = C::Key> + '_ {
        self.stack.keys(depth)
    }
}
