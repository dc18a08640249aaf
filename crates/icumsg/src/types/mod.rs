//! Core value and output types shared by the parser, evaluator, and engine.

mod locale;
mod node;
mod value;

pub use locale::{InvalidLocale, Locale};
pub use node::{Node, TagHandler, TagHandlers, flatten_text};
pub use value::{Arguments, NumericValue, Value};
