//! An ICU-style message formatting engine.
//!
//! Templates interleave literal text with arguments, plural and ordinal
//! selection, enumerated selection, locale-aware number/date/time formats,
//! and rich-text tags. Templates compile once into an immutable AST and are
//! cached; evaluation binds arguments at call time.
//!
//! # Example
//!
//! ```
//! use icumsg::{Locale, MessageFormatter, args};
//!
//! let formatter = MessageFormatter::new();
//! let en = Locale::new("en-US").unwrap();
//! let out = formatter
//!     .format(
//!         &en,
//!         "You have {n, plural, one {# follower} other {# followers}}.",
//!         &args! { "n" => 3580 },
//!     )
//!     .unwrap();
//! assert_eq!(out, "You have 3,580 followers.");
//! ```

pub mod cache;
pub mod engine;
pub mod formats;
pub mod interpreter;
pub mod parser;
pub mod types;

pub use cache::PatternCache;
pub use engine::{FormatError, MessageFormatter};
pub use formats::{
    ConfigError, DateTimeOptions, DefaultFormatters, FormatRegistry, Formatters, ListOptions,
    NumberOptions,
};
pub use interpreter::{EvalContext, EvalError, eval_message, plural_category};
pub use parser::{Ast, AstNode, ParseError, PluralRuleKind, parse};
pub use types::{
    Arguments, InvalidLocale, Locale, Node, NumericValue, TagHandlers, Value, flatten_text,
};

/// Creates an [`Arguments`] map from key-value pairs.
///
/// Values are automatically converted via `Into<Value>`, so you can pass
/// integers, floats, booleans, strings, or timestamps directly.
///
/// # Example
///
/// ```
/// use icumsg::args;
///
/// let bindings = args! { "count" => 3, "name" => "Alice" };
/// assert_eq!(bindings.len(), 2);
/// assert_eq!(bindings["count"].as_number(), Some(3));
/// assert_eq!(bindings["name"].as_string(), Some("Alice"));
/// ```
#[macro_export]
macro_rules! args {
    {} => {
        ::std::collections::HashMap::<String, $crate::Value>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<String, $crate::Value>::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}
