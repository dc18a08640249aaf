//! Output node tree for rich-mode evaluation.
//!
//! Rich mode produces a sequence of [`Node`] values instead of a flat string:
//! literal text becomes [`Node::Text`], and each rich-text tag is replaced by
//! the opaque node its handler returns. The opaque node type `N` belongs to
//! the caller (a DOM handle, a widget, a styled span), so the engine never
//! inspects it.

use std::collections::BTreeMap;

/// One element of a rich-mode output sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<N> {
    /// Plain text.
    Text(String),
    /// An opaque node produced by a tag handler.
    Opaque(N),
}

impl<N> Node<N> {
    /// Get this node's text, if it is a text node.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(s) => Some(s),
            Node::Opaque(_) => None,
        }
    }
}

/// Concatenate a node sequence whose opaque type is already `String`.
///
/// Used by text-mode formatting: tag handlers that return `String` splice
/// directly into the surrounding text.
pub fn flatten_text(nodes: Vec<Node<String>>) -> String {
    let mut out = String::new();
    for node in nodes {
        match node {
            Node::Text(s) | Node::Opaque(s) => out.push_str(&s),
        }
    }
    out
}

/// A tag-handler function: receives the evaluated children of a rich-text
/// region and returns the opaque node that replaces it.
pub type TagHandler<'a, N> = Box<dyn Fn(Vec<Node<N>>) -> N + 'a>;

/// Caller-supplied substitution functions for rich-text tags, keyed by tag
/// name.
///
/// Handlers are plain function values rather than a trait hierarchy; a tag
/// used in a template without a registered handler is an evaluation error.
///
/// # Example
///
/// ```
/// use icumsg::{Node, TagHandlers};
///
/// let mut tags: TagHandlers<'_, String> = TagHandlers::new();
/// tags.insert("b", |children| format!("*{}*", icumsg::flatten_text(children)));
/// assert!(tags.contains("b"));
/// ```
#[derive(Default)]
pub struct TagHandlers<'a, N> {
    handlers: BTreeMap<String, TagHandler<'a, N>>,
}

impl<'a, N> TagHandlers<'a, N> {
    /// Create an empty handler table.
    pub fn new() -> Self {
        Self {
            handlers: BTreeMap::new(),
        }
    }

    /// Register a handler for a tag name, replacing any previous one.
    pub fn insert(&mut self, name: impl Into<String>, handler: impl Fn(Vec<Node<N>>) -> N + 'a) {
        self.handlers.insert(name.into(), Box::new(handler));
    }

    /// Look up the handler for a tag name.
    pub fn get(&self, name: &str) -> Option<&TagHandler<'a, N>> {
        self.handlers.get(name)
    }

    /// Whether a handler is registered for `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<N> std::fmt::Debug for TagHandlers<'_, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        f.debug_struct("TagHandlers").field("tags", &names).finish()
    }
}
