/*!
Errors raised by a recursive traversal.

All of these are precondition violations by the caller: a traversal performs no I/O and cannot fail on its own.
*/
use thiserror::Error;

/// A traversal error
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum Error {
    /// A value offered as a container has no children to iterate over
    #[error("value is not a container")]
    InvalidContainer,
    /// The current element was requested while the iterator is not positioned on one
    #[error("no current element: the iterator is exhausted or was never restarted")]
    NoCurrentElement,
    /// The iterator was advanced before being restarted
    #[error("cannot advance an iterator which has not been restarted")]
    IteratingFailure,
}
