//! Format configuration options.
//!
//! Options are plain data: a configuration describes *what* to render, and
//! the [`Formatters`](crate::formats::Formatters) implementation decides how
//! each locale renders it. The built-in presets (`short`, `medium`, `long`,
//! `full`) are fixed option tables, so a preset and an equivalent explicit
//! configuration format identically.

use serde::{Deserialize, Serialize};

/// Width of a numeric date/time field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumericLength {
    /// Minimal digits: `7`.
    Numeric,
    /// Zero-padded to two digits: `07`.
    TwoDigit,
}

/// Width of a textual date/time field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextLength {
    /// Abbreviated: `Tue`.
    Short,
    /// Spelled out: `Tuesday`.
    Long,
    /// Minimal: `T`.
    Narrow,
}

/// Width of the month field, which may be numeric or textual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonthStyle {
    /// `1`
    Numeric,
    /// `01`
    TwoDigit,
    /// `Jan`
    Short,
    /// `January`
    Long,
    /// `J`
    Narrow,
}

/// Hour numbering scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HourCycle {
    /// 0-11 with a day period.
    H11,
    /// 1-12 with a day period.
    H12,
    /// 0-23.
    H23,
    /// 1-24.
    H24,
}

/// Field-by-field configuration for date and time formatting.
///
/// Every field is optional; `None` omits the field from the output. A single
/// type covers both date and time configurations, mirroring the skeleton
/// grammar where one symbol string may request fields of either flavor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateTimeOptions {
    /// Era designator width.
    pub era: Option<TextLength>,
    /// Year width. `TwoDigit` renders `26` for 2026.
    pub year: Option<NumericLength>,
    /// Month width.
    pub month: Option<MonthStyle>,
    /// Day-of-month width.
    pub day: Option<NumericLength>,
    /// Weekday name width.
    pub weekday: Option<TextLength>,
    /// Day period (AM/PM) width.
    pub day_period: Option<TextLength>,
    /// Hour width.
    pub hour: Option<NumericLength>,
    /// Hour numbering scheme; `None` defers to the formatter.
    pub hour_cycle: Option<HourCycle>,
    /// Minute width.
    pub minute: Option<NumericLength>,
    /// Second width.
    pub second: Option<NumericLength>,
    /// Time zone name width.
    pub time_zone_name: Option<TextLength>,
}

impl DateTimeOptions {
    /// `short` date preset: `1/5/26`.
    pub const SHORT_DATE: Self = Self {
        year: Some(NumericLength::TwoDigit),
        month: Some(MonthStyle::Numeric),
        day: Some(NumericLength::Numeric),
        ..Self::EMPTY
    };

    /// `medium` date preset: `Jan 5, 2026`.
    pub const MEDIUM_DATE: Self = Self {
        year: Some(NumericLength::Numeric),
        month: Some(MonthStyle::Short),
        day: Some(NumericLength::Numeric),
        ..Self::EMPTY
    };

    /// `long` date preset: `January 5, 2026`.
    pub const LONG_DATE: Self = Self {
        year: Some(NumericLength::Numeric),
        month: Some(MonthStyle::Long),
        day: Some(NumericLength::Numeric),
        ..Self::EMPTY
    };

    /// `full` date preset: `Monday, January 5, 2026`.
    pub const FULL_DATE: Self = Self {
        weekday: Some(TextLength::Long),
        ..Self::LONG_DATE
    };

    /// `short` time preset: `2:30 PM`.
    pub const SHORT_TIME: Self = Self {
        hour: Some(NumericLength::Numeric),
        hour_cycle: Some(HourCycle::H12),
        minute: Some(NumericLength::TwoDigit),
        day_period: Some(TextLength::Short),
        ..Self::EMPTY
    };

    /// `medium` time preset: `2:30:05 PM`.
    pub const MEDIUM_TIME: Self = Self {
        second: Some(NumericLength::TwoDigit),
        ..Self::SHORT_TIME
    };

    /// `long` time preset: `2:30:05 PM UTC`.
    pub const LONG_TIME: Self = Self {
        time_zone_name: Some(TextLength::Short),
        ..Self::MEDIUM_TIME
    };

    /// `full` time preset, identical to `long` for the built-in formatter.
    pub const FULL_TIME: Self = Self {
        time_zone_name: Some(TextLength::Long),
        ..Self::MEDIUM_TIME
    };

    const EMPTY: Self = Self {
        era: None,
        year: None,
        month: None,
        day: None,
        weekday: None,
        day_period: None,
        hour: None,
        hour_cycle: None,
        minute: None,
        second: None,
        time_zone_name: None,
    };

    /// Whether any date field is requested.
    pub fn has_date_fields(&self) -> bool {
        self.era.is_some()
            || self.year.is_some()
            || self.month.is_some()
            || self.day.is_some()
            || self.weekday.is_some()
    }

    /// Whether any time field is requested.
    pub fn has_time_fields(&self) -> bool {
        self.hour.is_some() || self.minute.is_some() || self.second.is_some()
    }

    /// Overlay another configuration's set fields onto this one.
    pub fn merged_with(&self, other: &Self) -> Self {
        Self {
            era: other.era.or(self.era),
            year: other.year.or(self.year),
            month: other.month.or(self.month),
            day: other.day.or(self.day),
            weekday: other.weekday.or(self.weekday),
            day_period: other.day_period.or(self.day_period),
            hour: other.hour.or(self.hour),
            hour_cycle: other.hour_cycle.or(self.hour_cycle),
            minute: other.minute.or(self.minute),
            second: other.second.or(self.second),
            time_zone_name: other.time_zone_name.or(self.time_zone_name),
        }
    }
}

/// Configuration for number formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberOptions {
    /// Insert locale grouping separators.
    pub use_grouping: bool,
    /// Pad the fraction to at least this many digits.
    pub minimum_fraction_digits: Option<u8>,
    /// Round the fraction to at most this many digits; `None` keeps the
    /// value's own precision.
    pub maximum_fraction_digits: Option<u8>,
}

impl Default for NumberOptions {
    fn default() -> Self {
        Self {
            use_grouping: true,
            minimum_fraction_digits: None,
            maximum_fraction_digits: None,
        }
    }
}

impl NumberOptions {
    /// `short` number preset: grouped, integer rounding.
    pub const SHORT: Self = Self {
        use_grouping: true,
        minimum_fraction_digits: None,
        maximum_fraction_digits: Some(0),
    };

    /// `medium` number preset: grouped, up to 3 fraction digits.
    pub const MEDIUM: Self = Self {
        use_grouping: true,
        minimum_fraction_digits: None,
        maximum_fraction_digits: Some(3),
    };

    /// `long` number preset: grouped, up to 6 fraction digits.
    pub const LONG: Self = Self {
        use_grouping: true,
        minimum_fraction_digits: None,
        maximum_fraction_digits: Some(6),
    };

    /// `full` number preset: grouped, the value's own precision.
    pub const FULL: Self = Self {
        use_grouping: true,
        minimum_fraction_digits: None,
        maximum_fraction_digits: None,
    };
}

/// Conjunction style of a formatted list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListStyle {
    /// `a, b, and c`
    #[default]
    And,
    /// `a, b, or c`
    Or,
    /// `a, b, c`
    Unit,
}

/// Width of a formatted list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListWidth {
    /// Full connective words.
    #[default]
    Wide,
    /// Abbreviated connectives where the locale has them.
    Short,
    /// Minimal connectives.
    Narrow,
}

/// Configuration for list formatting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOptions {
    /// Conjunction style.
    pub style: ListStyle,
    /// Connective width.
    pub width: ListWidth,
}
