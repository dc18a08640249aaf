//! The built-in locale-aware formatter set.

use std::cell::RefCell;

use chrono::{DateTime, Datelike, Utc};
use icu_decimal::DecimalFormatter;
use icu_decimal::input::Decimal;
use icu_decimal::options::{DecimalFormatterOptions, GroupingStrategy};
use icu_list::ListFormatter;
use icu_list::options::{ListFormatterOptions, ListLength};

use crate::interpreter::EvalError;
use crate::types::{Locale, NumericValue};

use super::options::{
    DateTimeOptions, HourCycle, ListOptions, ListStyle, ListWidth, MonthStyle, NumberOptions,
    NumericLength, TextLength,
};

/// Primitive value formatters, pluggable per engine.
///
/// The engine resolves a style to a concrete options table and hands the
/// table here together with the locale. Implementations own all rendering
/// decisions; the evaluator never inspects formatted output.
pub trait Formatters {
    /// Format a numeric value.
    fn format_number(
        &self,
        locale: &Locale,
        value: NumericValue,
        options: &NumberOptions,
    ) -> Result<String, EvalError>;

    /// Format an instant according to date and/or time fields in `options`.
    fn format_datetime(
        &self,
        locale: &Locale,
        value: &DateTime<Utc>,
        options: &DateTimeOptions,
    ) -> Result<String, EvalError>;

    /// Format a sequence of already-formatted items as a list.
    fn format_list(
        &self,
        locale: &Locale,
        items: &[String],
        options: &ListOptions,
    ) -> Result<String, EvalError>;
}

/// The built-in [`Formatters`] implementation.
///
/// Numbers and lists go through ICU4X and are fully locale-aware. Dates and
/// times use a fixed month-day-year field order with English names; engines
/// that need CLDR date layouts install their own [`Formatters`].
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultFormatters;

thread_local! {
    /// Decimal formatters are cheap to look up but not to build, so they are
    /// cached per (locale, grouping) pair for the life of the thread.
    static DECIMAL_FORMATTERS: RefCell<Vec<((String, bool), DecimalFormatter)>> =
        const { RefCell::new(Vec::new()) };
}

impl Formatters for DefaultFormatters {
    fn format_number(
        &self,
        locale: &Locale,
        value: NumericValue,
        options: &NumberOptions,
    ) -> Result<String, EvalError> {
        let mut decimal = match value {
            NumericValue::Int(n) => Decimal::from(n),
            NumericValue::Float(f) => {
                format!("{f}").parse::<Decimal>().map_err(|e| EvalError::Formatter {
                    message: format!("value {f} is not representable: {e}"),
                })?
            }
        };
        if let Some(max) = options.maximum_fraction_digits {
            decimal.round(-i16::from(max));
        }
        if let Some(min) = options.minimum_fraction_digits {
            decimal.pad_end(-i16::from(min));
        }

        let tag = locale.tag();
        DECIMAL_FORMATTERS.with(|cache| {
            let mut cache = cache.borrow_mut();
            let key = (tag, options.use_grouping);
            if let Some((_, formatter)) = cache.iter().find(|(k, _)| *k == key) {
                return Ok(formatter.format_to_string(&decimal));
            }
            let mut formatter_options = DecimalFormatterOptions::default();
            formatter_options.grouping_strategy = Some(if options.use_grouping {
                GroupingStrategy::Auto
            } else {
                GroupingStrategy::Never
            });
            let formatter = DecimalFormatter::try_new(locale.as_icu().into(), formatter_options)
                .map_err(|e| EvalError::Formatter {
                    message: format!("no number data for locale '{}': {e}", key.0),
                })?;
            let formatted = formatter.format_to_string(&decimal);
            cache.push((key, formatter));
            Ok(formatted)
        })
    }

    fn format_datetime(
        &self,
        _locale: &Locale,
        value: &DateTime<Utc>,
        options: &DateTimeOptions,
    ) -> Result<String, EvalError> {
        let mut parts = Vec::new();
        if options.has_date_fields() {
            parts.push(format_date_part(value, options));
        }
        if options.has_time_fields() {
            parts.push(format_time_part(value, options));
        }
        if parts.is_empty() {
            // A configuration with no fields still has to render something
            // deterministic.
            parts.push(format_date_part(value, &DateTimeOptions::MEDIUM_DATE));
        }
        Ok(parts.join(", "))
    }

    fn format_list(
        &self,
        locale: &Locale,
        items: &[String],
        options: &ListOptions,
    ) -> Result<String, EvalError> {
        let length = match options.width {
            ListWidth::Wide => ListLength::Wide,
            ListWidth::Short => ListLength::Short,
            ListWidth::Narrow => ListLength::Narrow,
        };
        let formatter_options = ListFormatterOptions::default().with_length(length);
        let formatter = match options.style {
            ListStyle::And => ListFormatter::try_new_and(locale.as_icu().into(), formatter_options),
            ListStyle::Or => ListFormatter::try_new_or(locale.as_icu().into(), formatter_options),
            ListStyle::Unit => {
                ListFormatter::try_new_unit(locale.as_icu().into(), formatter_options)
            }
        }
        .map_err(|e| EvalError::Formatter {
            message: format!("no list data for locale '{}': {e}", locale.tag()),
        })?;
        Ok(formatter.format_to_string(items.iter()))
    }
}

/// Render the date fields as a chrono format pass plus era handling.
fn format_date_part(value: &DateTime<Utc>, options: &DateTimeOptions) -> String {
    let pattern = date_pattern(options);
    let mut out = value.format(&pattern).to_string();
    if options.era.is_some() {
        out.push_str(if value.year() > 0 { " AD" } else { " BC" });
    }
    out
}

fn date_pattern(options: &DateTimeOptions) -> String {
    let year = match options.year {
        Some(NumericLength::TwoDigit) => "%y",
        _ => "%Y",
    };
    let day = match options.day {
        Some(NumericLength::TwoDigit) => "%d",
        _ => "%-d",
    };
    match options.month {
        Some(MonthStyle::Numeric | MonthStyle::TwoDigit) => {
            let month = if options.month == Some(MonthStyle::TwoDigit) {
                "%m"
            } else {
                "%-m"
            };
            let mut fields = Vec::new();
            if options.month.is_some() {
                fields.push(month);
            }
            if options.day.is_some() {
                fields.push(day);
            }
            if options.year.is_some() {
                fields.push(year);
            }
            fields.join("/")
        }
        _ => {
            // Textual month, or no month at all. Narrow falls back to the
            // abbreviated name; chrono has no narrow month names.
            let month = match options.month {
                Some(MonthStyle::Long) => Some("%B"),
                Some(_) => Some("%b"),
                None => None,
            };
            let mut pattern = String::new();
            if let Some(weekday) = options.weekday {
                pattern.push_str(match weekday {
                    TextLength::Long => "%A, ",
                    TextLength::Short | TextLength::Narrow => "%a, ",
                });
            }
            if let Some(month) = month {
                pattern.push_str(month);
                if options.day.is_some() {
                    pattern.push(' ');
                    pattern.push_str(day);
                }
                if options.year.is_some() {
                    pattern.push_str(", ");
                    pattern.push_str(year);
                }
            } else {
                let mut fields = Vec::new();
                if options.day.is_some() {
                    fields.push(day);
                }
                if options.year.is_some() {
                    fields.push(year);
                }
                pattern.push_str(&fields.join(", "));
            }
            pattern
        }
    }
}

fn format_time_part(value: &DateTime<Utc>, options: &DateTimeOptions) -> String {
    let twelve_hour = matches!(
        options.hour_cycle,
        Some(HourCycle::H11 | HourCycle::H12) | None
    );
    let mut pattern = String::new();
    let hour = match (twelve_hour, options.hour) {
        (true, Some(NumericLength::TwoDigit)) => "%I",
        (true, _) => "%-I",
        (false, Some(NumericLength::TwoDigit)) => "%H",
        (false, _) => "%-H",
    };
    pattern.push_str(hour);
    if options.minute.is_some() {
        pattern.push_str(match options.minute {
            Some(NumericLength::Numeric) => ":%-M",
            _ => ":%M",
        });
    }
    if options.second.is_some() {
        pattern.push_str(match options.second {
            Some(NumericLength::Numeric) => ":%-S",
            _ => ":%S",
        });
    }
    if twelve_hour && options.day_period.is_some() {
        pattern.push_str(" %p");
    }
    if options.time_zone_name.is_some() {
        pattern.push_str(" %Z");
    }
    value.format(&pattern).to_string()
}
