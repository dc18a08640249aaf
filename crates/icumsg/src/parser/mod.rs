//! Template parsing: ICU-style message syntax to an immutable AST.

mod ast;
mod error;
mod message;

pub use ast::{
    Ast, AstNode, FormatterKind, PluralBranch, PluralRuleKind, PluralSelector, PresetStyle,
    SelectBranch, StyleRef,
};
pub use error::ParseError;
pub use message::{MAX_NESTING_DEPTH, parse};
