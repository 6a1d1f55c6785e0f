/*!
Traversal orders for branch nodes
*/
use std::str::FromStr;
use thiserror::Error;

/// The order in which a branch node is emitted relative to its descendants.
///
/// Leaves are always emitted in place: the mode only affects elements which have children.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Mode {
    /// Pre-order: a branch is emitted when it is descended into, before any of its descendants
    SelfFirst,
    /// Post-order: a branch is emitted when it is backtracked out of, after all of its descendants
    ChildFirst,
}

impl Mode {
    /// Get the canonical name of this mode
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Mode::SelfFirst => "self-first",
            Mode::ChildFirst => "child-first",
        }
    }
    /// Whether branches are emitted on descent
    #[inline]
    pub fn emits_on_descent(self) -> bool {
        self == Mode::SelfFirst
    }
    /// Whether branches are emitted on backtrack
    #[inline]
    pub fn emits_on_backtrack(self) -> bool {
        self == Mode::ChildFirst
    }
}

impl Default for Mode {
    #[inline]
    fn default() -> Mode {
        Mode::SelfFirst
    }
}

quick_display!(Mode, s, fmt => write!(fmt, "{}", s.name()));

/// An error parsing a `Mode`
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("unknown traversal mode {0:?}, expected \"self-first\" or \"child-first\"")]
pub struct ParseModeError(pub String);

impl FromStr for Mode {
    type Err = ParseModeError;
    fn from_str(s: &str) -> Result<Mode, ParseModeError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "self-first" | "self_first" | "selffirst" | "pre-order" | "preorder" => {
                Ok(Mode::SelfFirst)
            }
            "child-first" | "child_first" | "childfirst" | "post-order" | "postorder" => {
                Ok(Mode::ChildFirst)
            }
            _ => Err(ParseModeError(s.to_owned())),
        }
    }
}
