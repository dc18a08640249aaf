//! Evaluation context: bindings, locale, and recursion state.

use crate::formats::{FormatRegistry, Formatters};
use crate::types::{Arguments, Locale, NumericValue, Value};

use super::error::EvalError;

/// Default bound on evaluation recursion depth.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Everything one evaluation pass needs: argument bindings, the target
/// locale, format resolution, and recursion bookkeeping.
///
/// A context is built per `format` call and discarded afterwards; the
/// engine's registry and formatters are borrowed, never cloned.
pub struct EvalContext<'a> {
    args: &'a Arguments,
    locale: &'a Locale,
    registry: &'a FormatRegistry,
    formatters: &'a dyn Formatters,
    depth: usize,
    max_depth: usize,
    plural_stack: Vec<NumericValue>,
}

impl<'a> EvalContext<'a> {
    /// Create a context with the default depth bound.
    pub fn new(
        args: &'a Arguments,
        locale: &'a Locale,
        registry: &'a FormatRegistry,
        formatters: &'a dyn Formatters,
    ) -> Self {
        Self::with_max_depth(args, locale, registry, formatters, DEFAULT_MAX_DEPTH)
    }

    /// Create a context with an explicit depth bound.
    pub fn with_max_depth(
        args: &'a Arguments,
        locale: &'a Locale,
        registry: &'a FormatRegistry,
        formatters: &'a dyn Formatters,
        max_depth: usize,
    ) -> Self {
        Self {
            args,
            locale,
            registry,
            formatters,
            depth: 0,
            max_depth,
            plural_stack: Vec::new(),
        }
    }

    /// Look up a binding by name. The reference borrows the bindings, not
    /// the context, so it stays usable across mutable context calls.
    pub fn arg(&self, name: &str) -> Result<&'a Value, EvalError> {
        self.args.get(name).ok_or_else(|| EvalError::MissingArgument {
            name: name.to_string(),
        })
    }

    /// The locale this evaluation renders for.
    pub fn locale(&self) -> &Locale {
        self.locale
    }

    /// The engine's format registry.
    pub fn registry(&self) -> &FormatRegistry {
        self.registry
    }

    /// The engine's primitive formatters.
    pub fn formatters(&self) -> &dyn Formatters {
        self.formatters
    }

    /// Record one level of recursion; fails at the depth bound.
    pub fn enter(&mut self) -> Result<(), EvalError> {
        if self.depth >= self.max_depth {
            return Err(EvalError::MaxDepthExceeded);
        }
        self.depth += 1;
        Ok(())
    }

    /// Unwind one level of recursion.
    pub fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Enter a plural branch body: `#` now refers to `value`.
    pub fn push_plural(&mut self, value: NumericValue) {
        self.plural_stack.push(value);
    }

    /// Leave a plural branch body.
    pub fn pop_plural(&mut self) {
        let _ = self.plural_stack.pop();
    }

    /// The offset-adjusted value of the innermost enclosing plural, if any.
    pub fn current_plural(&self) -> Option<NumericValue> {
        self.plural_stack.last().copied()
    }
}
