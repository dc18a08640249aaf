//! The message formatting engine.

use std::sync::Arc;

use bon::Builder;
use thiserror::Error;

use crate::cache::PatternCache;
use crate::formats::{DefaultFormatters, FormatRegistry, Formatters};
use crate::interpreter::{DEFAULT_MAX_DEPTH, EvalContext, EvalError, eval_message};
use crate::parser::{Ast, ParseError};
use crate::types::{Arguments, Locale, Node, TagHandlers, flatten_text};

/// An error from a formatting call: either the template failed to compile or
/// evaluation against the bindings failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The template is not valid message syntax.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The compiled pattern could not be evaluated.
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// The formatting engine: a compile-once pattern cache, a format registry,
/// and a formatter set, shared across calls and threads.
///
/// Template-driven formatting always resolves styles through the registry's
/// precedence chain (named entry, skeleton, preset, default). The
/// highest-precedence tier, inline option overrides, has no message-syntax
/// spelling; it is exposed on [`FormatRegistry::resolve_date`] and its
/// siblings for callers that drive the registry directly, such as custom
/// [`Formatters`] implementations or tooling built on the public AST.
///
/// # Example
///
/// ```
/// use icumsg::{Locale, MessageFormatter, args};
///
/// let formatter = MessageFormatter::new();
/// let en = Locale::new("en-US").unwrap();
/// let out = formatter
///     .format(
///         &en,
///         "You have {n, plural, =0 {no followers} one {# follower} other {# followers}}.",
///         &args! { "n" => 3580 },
///     )
///     .unwrap();
/// assert_eq!(out, "You have 3,580 followers.");
/// ```
#[derive(Builder)]
pub struct MessageFormatter {
    /// Named format configurations, shared by every template.
    #[builder(default)]
    registry: FormatRegistry,

    /// Primitive value formatters.
    #[builder(default = Box::new(DefaultFormatters))]
    formatters: Box<dyn Formatters + Send + Sync>,

    /// Evaluation recursion bound.
    #[builder(default = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    #[builder(skip)]
    cache: PatternCache,
}

impl MessageFormatter {
    /// Create an engine with the built-in formatters and an empty registry.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// The format registry.
    pub fn registry(&self) -> &FormatRegistry {
        &self.registry
    }

    /// The format registry, for registering named configurations.
    pub fn registry_mut(&mut self) -> &mut FormatRegistry {
        &mut self.registry
    }

    /// Compile a template, going through the cache.
    ///
    /// `format` calls compile implicitly; this is for callers that validate
    /// templates ahead of time or inspect the AST.
    pub fn compile(&self, template: &str) -> Result<Arc<Ast>, ParseError> {
        self.cache.get_or_compile(template)
    }

    /// Format a template to plain text.
    ///
    /// Rich-text tags are errors in this mode: text output has nowhere to
    /// put a tag's meaning.
    pub fn format(
        &self,
        locale: &Locale,
        template: &str,
        args: &Arguments,
    ) -> Result<String, FormatError> {
        self.format_with_tags(locale, template, args, &TagHandlers::new())
    }

    /// Format a template to plain text, splicing tag handler output into the
    /// surrounding text.
    pub fn format_with_tags(
        &self,
        locale: &Locale,
        template: &str,
        args: &Arguments,
        tags: &TagHandlers<'_, String>,
    ) -> Result<String, FormatError> {
        Ok(flatten_text(self.format_rich(locale, template, args, tags)?))
    }

    /// Format a template to a rich node sequence.
    ///
    /// Every tag in the template must have a handler in `tags`; each handler
    /// receives its evaluated children and returns the caller's opaque node
    /// type.
    pub fn format_rich<N>(
        &self,
        locale: &Locale,
        template: &str,
        args: &Arguments,
        tags: &TagHandlers<'_, N>,
    ) -> Result<Vec<Node<N>>, FormatError> {
        let ast = self.cache.get_or_compile(template)?;
        let mut ctx = EvalContext::with_max_depth(
            args,
            locale,
            &self.registry,
            self.formatters.as_ref(),
            self.max_depth,
        );
        Ok(eval_message(&ast, &mut ctx, tags)?)
    }

    /// Format a sequence of already-formatted items as a locale-aware list,
    /// optionally under a registered named list format.
    pub fn format_list(
        &self,
        locale: &Locale,
        items: &[String],
        name: Option<&str>,
    ) -> Result<String, FormatError> {
        let options = self.registry.resolve_list(name, None).map_err(EvalError::from)?;
        Ok(self.formatters.format_list(locale, items, &options)?)
    }

    /// Number of templates in the pattern cache.
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Drop every cached pattern. Named formats stay registered.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}

impl Default for MessageFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MessageFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageFormatter")
            .field("registry", &self.registry)
            .field("max_depth", &self.max_depth)
            .field("cached_patterns", &self.cache.len())
            .finish_non_exhaustive()
    }
}
