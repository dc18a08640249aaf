//! Concurrent compile-once pattern cache.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::trace;

use crate::parser::{Ast, ParseError, parse};

/// A concurrent cache of compiled patterns, keyed by template text.
///
/// Lookups are lock-free reads; a miss parses outside any map lock, then the
/// first writer wins so every caller observes the same `Arc`. Parse failures
/// are cached too: a template is terminally good or terminally bad, and
/// re-parsing a bad one on every call would hide that.
#[derive(Debug, Default)]
pub struct PatternCache {
    entries: DashMap<String, Result<Arc<Ast>, ParseError>>,
}

impl PatternCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the compiled pattern for a template, parsing on first sight.
    pub fn get_or_compile(&self, template: &str) -> Result<Arc<Ast>, ParseError> {
        if let Some(entry) = self.entries.get(template) {
            return entry.clone();
        }
        let compiled = parse(template).map(Arc::new);
        trace!(
            template,
            ok = compiled.is_ok(),
            "compiled message template"
        );
        self.entries
            .entry(template.to_string())
            .or_insert(compiled)
            .clone()
    }

    /// Number of cached templates, counting failures.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop a single template.
    pub fn evict(&self, template: &str) {
        let _ = self.entries.remove(template);
    }

    /// Drop every cached template.
    pub fn clear(&self) {
        self.entries.clear();
    }
}
