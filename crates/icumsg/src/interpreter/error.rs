//! Evaluation error types.

use thiserror::Error;

use crate::formats::ConfigError;

/// An error that occurred while evaluating a compiled pattern against
/// argument bindings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The template references an argument with no binding.
    #[error("missing argument '{name}'")]
    MissingArgument {
        /// The unresolved argument name.
        name: String,
    },

    /// A binding exists but has the wrong type for its use site.
    #[error("argument '{name}' is {found}, expected {expected}")]
    TypeMismatch {
        /// The argument name.
        name: String,
        /// What the construct requires.
        expected: &'static str,
        /// What the binding actually is.
        found: &'static str,
    },

    /// A tag appears in the template with no registered handler.
    #[error("no handler registered for tag '{name}'")]
    MissingTagHandler {
        /// The tag name.
        name: String,
    },

    /// A plural `offset:` pushed the argument's value outside the integer
    /// range.
    #[error("plural offset overflows argument '{name}'")]
    OffsetOverflow {
        /// The argument the plural dispatches on.
        name: String,
    },

    /// A selection construct ran out of branches.
    ///
    /// The parser guarantees an `other` branch, but patterns built directly
    /// as AST values carry no such guarantee.
    #[error("selection on '{name}' has no 'other' branch")]
    MissingOtherBranch {
        /// The argument the selection dispatches on.
        name: String,
    },

    /// Recursion exceeded the evaluation depth bound.
    #[error("maximum evaluation depth exceeded")]
    MaxDepthExceeded,

    /// A style reference failed to resolve.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A primitive formatter failed.
    #[error("formatter error: {message}")]
    Formatter {
        /// What went wrong.
        message: String,
    },
}
