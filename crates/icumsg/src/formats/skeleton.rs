//! Date/time skeleton expansion.
//!
//! A skeleton is a compact field-symbol string (`yMMMd`, `hmmss`) that
//! expands into a [`DateTimeOptions`] table. Symbol repetition count selects
//! the field width, following the CLDR conventions: one symbol for the
//! minimal numeric form, two for zero-padded, three for abbreviated text,
//! four for full text, five for narrow text.

use super::error::ConfigError;
use super::options::{DateTimeOptions, HourCycle, MonthStyle, NumericLength, TextLength};

/// Field symbols accepted in a skeleton.
pub const FIELD_SYMBOLS: &[char] = &[
    'y', 'M', 'd', 'h', 'H', 'K', 'k', 'm', 's', 'E', 'e', 'c', 'a', 'z', 'G',
];

/// Whether `c` is a recognized skeleton field symbol.
pub fn is_field_symbol(c: char) -> bool {
    FIELD_SYMBOLS.contains(&c)
}

/// Expand a skeleton string into a date/time configuration.
///
/// Runs of the same symbol are one field; later runs of a symbol already
/// seen overwrite the earlier width.
pub fn expand(skeleton: &str) -> Result<DateTimeOptions, ConfigError> {
    let mut options = DateTimeOptions::default();
    let mut chars = skeleton.chars().peekable();
    while let Some(symbol) = chars.next() {
        let mut count = 1;
        while chars.peek() == Some(&symbol) {
            let _ = chars.next();
            count += 1;
        }
        apply_field(&mut options, symbol, count)?;
    }
    Ok(options)
}

fn apply_field(options: &mut DateTimeOptions, symbol: char, count: usize) -> Result<(), ConfigError> {
    match symbol {
        'y' => options.year = Some(numeric_length(count)),
        'M' => {
            options.month = Some(match count {
                1 => MonthStyle::Numeric,
                2 => MonthStyle::TwoDigit,
                3 => MonthStyle::Short,
                4 => MonthStyle::Long,
                _ => MonthStyle::Narrow,
            });
        }
        'd' => options.day = Some(numeric_length(count)),
        'h' => {
            options.hour = Some(numeric_length(count));
            options.hour_cycle = Some(HourCycle::H12);
            options.day_period = Some(TextLength::Short);
        }
        'H' => {
            options.hour = Some(numeric_length(count));
            options.hour_cycle = Some(HourCycle::H23);
        }
        'K' => {
            options.hour = Some(numeric_length(count));
            options.hour_cycle = Some(HourCycle::H11);
            options.day_period = Some(TextLength::Short);
        }
        'k' => {
            options.hour = Some(numeric_length(count));
            options.hour_cycle = Some(HourCycle::H24);
        }
        'm' => options.minute = Some(numeric_length(count)),
        's' => options.second = Some(numeric_length(count)),
        'E' | 'e' | 'c' => options.weekday = Some(text_length(count)),
        'a' => options.day_period = Some(text_length(count)),
        'z' => options.time_zone_name = Some(if count >= 4 {
            TextLength::Long
        } else {
            TextLength::Short
        }),
        'G' => options.era = Some(text_length(count)),
        _ => return Err(ConfigError::UnknownSkeletonSymbol { symbol }),
    }
    Ok(())
}

fn numeric_length(count: usize) -> NumericLength {
    if count >= 2 {
        NumericLength::TwoDigit
    } else {
        NumericLength::Numeric
    }
}

fn text_length(count: usize) -> TextLength {
    match count {
        5.. => TextLength::Narrow,
        4 => TextLength::Long,
        _ => TextLength::Short,
    }
}
