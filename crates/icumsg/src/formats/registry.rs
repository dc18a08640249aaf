//! Named format configurations and style resolution.

use std::collections::BTreeMap;

use tracing::debug;

use crate::parser::{PresetStyle, StyleRef};

use super::error::{ConfigError, FormatKind, compute_suggestions};
use super::options::{DateTimeOptions, ListOptions, NumberOptions};
use super::skeleton;

/// The four built-in style keywords, reserved as format names.
const PRESET_KEYWORDS: &[&str] = &["short", "medium", "long", "full"];

/// A registry of caller-defined named format configurations.
///
/// Templates reference entries by name (`{when, date, invoice}`); resolution
/// happens at evaluation time, so a registration made after a pattern is
/// compiled still applies. Entries are engine-wide, not per locale.
///
/// # Example
///
/// ```
/// use icumsg::{DateTimeOptions, FormatRegistry};
///
/// let mut registry = FormatRegistry::new();
/// registry
///     .register_date("invoice", DateTimeOptions::FULL_DATE)
///     .unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct FormatRegistry {
    date: BTreeMap<String, DateTimeOptions>,
    time: BTreeMap<String, DateTimeOptions>,
    number: BTreeMap<String, NumberOptions>,
    list: BTreeMap<String, ListOptions>,
}

impl FormatRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a named date format, replacing any previous entry.
    pub fn register_date(
        &mut self,
        name: &str,
        options: DateTimeOptions,
    ) -> Result<(), ConfigError> {
        validate_name(name)?;
        debug!(name, "registered date format");
        self.date.insert(name.to_string(), options);
        Ok(())
    }

    /// Register a named time format, replacing any previous entry.
    pub fn register_time(
        &mut self,
        name: &str,
        options: DateTimeOptions,
    ) -> Result<(), ConfigError> {
        validate_name(name)?;
        debug!(name, "registered time format");
        self.time.insert(name.to_string(), options);
        Ok(())
    }

    /// Register a named number format, replacing any previous entry.
    pub fn register_number(&mut self, name: &str, options: NumberOptions) -> Result<(), ConfigError> {
        validate_name(name)?;
        debug!(name, "registered number format");
        self.number.insert(name.to_string(), options);
        Ok(())
    }

    /// Register a named list format, replacing any previous entry.
    pub fn register_list(&mut self, name: &str, options: ListOptions) -> Result<(), ConfigError> {
        validate_name(name)?;
        debug!(name, "registered list format");
        self.list.insert(name.to_string(), options);
        Ok(())
    }

    /// Resolve a date style to a concrete configuration.
    ///
    /// Precedence: explicit `overrides` replace everything; otherwise the
    /// template's style reference resolves against named entries, skeleton
    /// expansion, or the preset table; no style means the `medium` preset.
    pub fn resolve_date(
        &self,
        style: Option<&StyleRef>,
        overrides: Option<&DateTimeOptions>,
    ) -> Result<DateTimeOptions, ConfigError> {
        if let Some(options) = overrides {
            return Ok(*options);
        }
        match style {
            None => Ok(DateTimeOptions::MEDIUM_DATE),
            Some(StyleRef::Preset(preset)) => Ok(match preset {
                PresetStyle::Short => DateTimeOptions::SHORT_DATE,
                PresetStyle::Medium => DateTimeOptions::MEDIUM_DATE,
                PresetStyle::Long => DateTimeOptions::LONG_DATE,
                PresetStyle::Full => DateTimeOptions::FULL_DATE,
            }),
            Some(StyleRef::Skeleton(symbols)) => skeleton::expand(symbols),
            Some(StyleRef::Named(name)) => self
                .date
                .get(name)
                .copied()
                .ok_or_else(|| self.unknown_name(FormatKind::Date, name)),
        }
    }

    /// Resolve a time style to a concrete configuration.
    pub fn resolve_time(
        &self,
        style: Option<&StyleRef>,
        overrides: Option<&DateTimeOptions>,
    ) -> Result<DateTimeOptions, ConfigError> {
        if let Some(options) = overrides {
            return Ok(*options);
        }
        match style {
            None => Ok(DateTimeOptions::SHORT_TIME),
            Some(StyleRef::Preset(preset)) => Ok(match preset {
                PresetStyle::Short => DateTimeOptions::SHORT_TIME,
                PresetStyle::Medium => DateTimeOptions::MEDIUM_TIME,
                PresetStyle::Long => DateTimeOptions::LONG_TIME,
                PresetStyle::Full => DateTimeOptions::FULL_TIME,
            }),
            Some(StyleRef::Skeleton(symbols)) => skeleton::expand(symbols),
            Some(StyleRef::Named(name)) => self
                .time
                .get(name)
                .copied()
                .ok_or_else(|| self.unknown_name(FormatKind::Time, name)),
        }
    }

    /// Resolve a number style to a concrete configuration.
    pub fn resolve_number(
        &self,
        style: Option<&StyleRef>,
        overrides: Option<&NumberOptions>,
    ) -> Result<NumberOptions, ConfigError> {
        if let Some(options) = overrides {
            return Ok(*options);
        }
        match style {
            None => Ok(NumberOptions::default()),
            Some(StyleRef::Preset(preset)) => Ok(match preset {
                PresetStyle::Short => NumberOptions::SHORT,
                PresetStyle::Medium => NumberOptions::MEDIUM,
                PresetStyle::Long => NumberOptions::LONG,
                PresetStyle::Full => NumberOptions::FULL,
            }),
            Some(StyleRef::Skeleton(_)) => Err(ConfigError::UnsupportedSkeleton {
                kind: FormatKind::Number,
            }),
            Some(StyleRef::Named(name)) => self
                .number
                .get(name)
                .copied()
                .ok_or_else(|| self.unknown_name(FormatKind::Number, name)),
        }
    }

    /// Resolve a list style to a concrete configuration.
    pub fn resolve_list(
        &self,
        name: Option<&str>,
        overrides: Option<&ListOptions>,
    ) -> Result<ListOptions, ConfigError> {
        if let Some(options) = overrides {
            return Ok(*options);
        }
        match name {
            None => Ok(ListOptions::default()),
            Some(name) => self
                .list
                .get(name)
                .copied()
                .ok_or_else(|| self.unknown_name(FormatKind::List, name)),
        }
    }

    fn unknown_name(&self, kind: FormatKind, name: &str) -> ConfigError {
        let candidates: Vec<&str> = match kind {
            FormatKind::Date => self.date.keys().map(String::as_str).collect(),
            FormatKind::Time => self.time.keys().map(String::as_str).collect(),
            FormatKind::Number => self.number.keys().map(String::as_str).collect(),
            FormatKind::List => self.list.keys().map(String::as_str).collect(),
        };
        ConfigError::UnknownFormatName {
            kind,
            name: name.to_string(),
            suggestions: compute_suggestions(name, candidates.into_iter()),
        }
    }
}

/// Names must be identifiers and must not shadow a preset keyword.
fn validate_name(name: &str) -> Result<(), ConfigError> {
    if name.is_empty() {
        return Err(ConfigError::InvalidFormatName {
            name: name.to_string(),
            reason: "name is empty".to_string(),
        });
    }
    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(ConfigError::InvalidFormatName {
            name: name.to_string(),
            reason: "names may only contain letters, digits, and '_'".to_string(),
        });
    }
    if PRESET_KEYWORDS.contains(&name) {
        return Err(ConfigError::InvalidFormatName {
            name: name.to_string(),
            reason: "name shadows a built-in style keyword".to_string(),
        });
    }
    Ok(())
}
