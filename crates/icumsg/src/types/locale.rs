use std::str::FromStr;

use thiserror::Error;

/// Error returned when a locale identifier fails to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid locale identifier '{tag}'")]
pub struct InvalidLocale {
    /// The rejected identifier.
    pub tag: String,
}

/// An opaque locale identifier used as a lookup key for plural rules and
/// formatter defaults.
///
/// Created from a BCP-47 configuration string and immutable afterwards.
///
/// # Example
///
/// ```
/// use icumsg::Locale;
///
/// let en = Locale::new("en-US").unwrap();
/// assert_eq!(en.tag(), "en-US");
/// assert!(Locale::new("not a locale").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    inner: icu_locale_core::Locale,
}

impl Locale {
    /// Parse a locale from a BCP-47 language tag.
    pub fn new(tag: &str) -> Result<Self, InvalidLocale> {
        icu_locale_core::Locale::try_from_str(tag)
            .map(|inner| Self { inner })
            .map_err(|_| InvalidLocale {
                tag: tag.to_string(),
            })
    }

    /// The canonical language tag for this locale.
    pub fn tag(&self) -> String {
        self.inner.to_string()
    }

    /// The underlying ICU locale, for handing to locale-aware facilities.
    pub fn as_icu(&self) -> &icu_locale_core::Locale {
        &self.inner
    }
}

impl FromStr for Locale {
    type Err = InvalidLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::new(s)
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<icu_locale_core::Locale> for Locale {
    fn from(inner: icu_locale_core::Locale) -> Self {
        Self { inner }
    }
}
