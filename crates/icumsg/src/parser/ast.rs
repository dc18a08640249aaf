//! Public AST types for compiled message patterns.
//!
//! These types are public to enable external tooling (linters, extractors,
//! translation auditors). Every node is immutable once constructed, and node
//! sequences form a tree: children are owned exclusively by their parent.

use serde::{Deserialize, Serialize};

/// A compiled message pattern: the parser's output and the evaluator's input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ast {
    /// Top-level node sequence.
    pub nodes: Vec<AstNode>,
}

/// A single node within a message pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AstNode {
    /// Verbatim text, with `'`-escape sequences already resolved.
    Literal(String),

    /// An interpolation placeholder: `{name}`.
    Argument {
        /// Argument name resolved from bindings at evaluation time.
        name: String,
    },

    /// An interpolation with an attached format: `{name, number, style}`.
    FormattedArgument {
        /// Argument name resolved from bindings at evaluation time.
        name: String,
        /// Which primitive formatter handles the value.
        kind: FormatterKind,
        /// Style reference; `None` means the engine default for the kind.
        style: Option<StyleRef>,
    },

    /// A plural or ordinal selection: `{name, plural, ...}`.
    Plural {
        /// Argument name; its binding must be numeric.
        name: String,
        /// Cardinal (`plural`) or ordinal (`selectordinal`) rules.
        rule_kind: PluralRuleKind,
        /// Offset subtracted before rule resolution and `#` substitution.
        offset: i64,
        /// Branches in source order; exactly one `other` branch is present.
        branches: Vec<PluralBranch>,
    },

    /// An enumerated selection: `{name, select, ...}`.
    Select {
        /// Argument name; its binding selects a branch by string key.
        name: String,
        /// Branches in source order; exactly one `other` branch is present.
        branches: Vec<SelectBranch>,
    },

    /// A named rich-text region: `<name>children</name>`.
    Tag {
        /// Tag name, matched against the caller's handler table.
        name: String,
        /// Child node sequence; any construct may nest here.
        children: Vec<AstNode>,
    },

    /// The `#` marker inside a plural branch: the offset-adjusted numeric
    /// value, formatted as a number.
    Pound,
}

/// Which primitive formatter a [`AstNode::FormattedArgument`] delegates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormatterKind {
    /// Locale-aware number formatting.
    Number,
    /// Locale-aware date formatting.
    Date,
    /// Locale-aware time formatting.
    Time,
}

impl std::fmt::Display for FormatterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatterKind::Number => write!(f, "number"),
            FormatterKind::Date => write!(f, "date"),
            FormatterKind::Time => write!(f, "time"),
        }
    }
}

/// Plural rule family used for branch selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PluralRuleKind {
    /// Counting rules: `{n, plural, ...}`.
    Cardinal,
    /// Ranking rules: `{n, selectordinal, ...}`.
    Ordinal,
}

/// A style reference attached to a formatted argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StyleRef {
    /// One of the four built-in style keywords.
    Preset(PresetStyle),
    /// A `::`-prefixed skeleton string, validated at parse time.
    Skeleton(String),
    /// A caller-registered named format configuration.
    Named(String),
}

/// The four built-in style keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PresetStyle {
    /// Compact form.
    Short,
    /// Default form.
    Medium,
    /// Expanded form.
    Long,
    /// Fully spelled-out form.
    Full,
}

/// One branch of a [`AstNode::Plural`] construct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluralBranch {
    /// Exact-match or category selector.
    pub selector: PluralSelector,
    /// Child node sequence evaluated when this branch is selected.
    pub body: Vec<AstNode>,
}

/// Selector of a plural branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PluralSelector {
    /// `=N`: matches the offset-adjusted value exactly, before and above
    /// category resolution.
    Exact(i64),
    /// A plural category tag (`zero`, `one`, `two`, `few`, `many`, `other`).
    Category(String),
}

/// One branch of a [`AstNode::Select`] construct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectBranch {
    /// String key matched against the binding's value.
    pub key: String,
    /// Child node sequence evaluated when this branch is selected.
    pub body: Vec<AstNode>,
}
