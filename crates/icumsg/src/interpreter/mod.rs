//! Pattern evaluation: bindings in, rendered nodes out.

mod context;
mod error;
mod evaluator;
mod plural;

pub use context::{DEFAULT_MAX_DEPTH, EvalContext};
pub use error::EvalError;
pub use evaluator::eval_message;
pub use plural::plural_category;
