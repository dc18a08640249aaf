//! Errors raised while resolving format configurations.

use thiserror::Error;

/// The formatter family a configuration belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    /// Date formatting.
    Date,
    /// Time formatting.
    Time,
    /// Number formatting.
    Number,
    /// List formatting.
    List,
}

impl std::fmt::Display for FormatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatKind::Date => write!(f, "date"),
            FormatKind::Time => write!(f, "time"),
            FormatKind::Number => write!(f, "number"),
            FormatKind::List => write!(f, "list"),
        }
    }
}

/// An error resolving or registering a format configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A skeleton contained a field symbol outside the supported set.
    #[error("unknown skeleton field symbol '{symbol}'")]
    UnknownSkeletonSymbol {
        /// The rejected symbol.
        symbol: char,
    },

    /// A skeleton style was attached to a kind that does not take skeletons.
    #[error("{kind} formats do not support skeletons")]
    UnsupportedSkeleton {
        /// The kind the skeleton was attached to.
        kind: FormatKind,
    },

    /// A named format was referenced but never registered.
    #[error("unknown {kind} format '{name}'{}", format_suggestions(suggestions))]
    UnknownFormatName {
        /// The kind the name was looked up under.
        kind: FormatKind,
        /// The unresolved name.
        name: String,
        /// Registered names closest to the unresolved one.
        suggestions: Vec<String>,
    },

    /// A format was registered under an unusable name.
    #[error("invalid format name '{name}': {reason}")]
    InvalidFormatName {
        /// The rejected name.
        name: String,
        /// Why the name was rejected.
        reason: String,
    },
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean: {}?)", suggestions.join(", "))
    }
}

/// Find registered names similar to `input`, best match first.
pub fn compute_suggestions<'a>(
    input: &str,
    candidates: impl Iterator<Item = &'a str>,
) -> Vec<String> {
    let mut scored: Vec<(f64, &str)> = candidates
        .map(|candidate| (strsim::jaro_winkler(input, candidate), candidate))
        .filter(|&(score, _)| score > 0.7)
        .collect();
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    scored
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}
