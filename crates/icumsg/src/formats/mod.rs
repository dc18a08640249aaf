//! Format configuration: presets, skeletons, named registrations, and the
//! pluggable formatter seam.

mod default;
mod error;
mod options;
mod registry;
pub mod skeleton;

pub use default::{DefaultFormatters, Formatters};
pub use error::{ConfigError, FormatKind, compute_suggestions};
pub use options::{
    DateTimeOptions, HourCycle, ListOptions, ListStyle, ListWidth, MonthStyle, NumberOptions,
    NumericLength, TextLength,
};
pub use registry::FormatRegistry;
