//! CLDR plural category resolution.

use std::cell::RefCell;

use fixed_decimal::Decimal;
use icu_plurals::{PluralCategory, PluralOperands, PluralRuleType, PluralRules};

use crate::parser::PluralRuleKind;
use crate::types::{Locale, NumericValue};

thread_local! {
    /// Plural rules are looked up once per (locale, rule family) pair and
    /// reused for the life of the thread.
    static PLURAL_RULES: RefCell<Vec<((String, PluralRuleKind), PluralRules)>> =
        const { RefCell::new(Vec::new()) };
}

/// Resolve the CLDR plural category for a number under a locale's cardinal
/// or ordinal rules.
///
/// Floats resolve through their shortest decimal notation, so an integral
/// float selects the same category as the integer it equals.
pub fn plural_category(locale: &Locale, kind: PluralRuleKind, n: NumericValue) -> &'static str {
    let tag = locale.tag();
    PLURAL_RULES.with(|cache| {
        let mut cache = cache.borrow_mut();
        let key = (tag, kind);
        if let Some((_, rules)) = cache.iter().find(|(k, _)| *k == key) {
            return category_str(category_for(rules, n));
        }
        let rule_type = match kind {
            PluralRuleKind::Cardinal => PluralRuleType::Cardinal,
            PluralRuleKind::Ordinal => PluralRuleType::Ordinal,
        };
        let rules = PluralRules::try_new(locale.as_icu().into(), rule_type.into())
            .expect("locale should be supported by compiled plural data");
        let category = category_for(&rules, n);
        cache.push((key, rules));
        category_str(category)
    })
}

fn category_for(rules: &PluralRules, n: NumericValue) -> PluralCategory {
    match n {
        NumericValue::Int(value) => rules.category_for(value),
        NumericValue::Float(value) => match format!("{value}").parse::<Decimal>() {
            Ok(decimal) => rules.category_for(PluralOperands::from(&decimal)),
            // Non-finite floats have no plural operands.
            Err(_) => PluralCategory::Other,
        },
    }
}

fn category_str(category: PluralCategory) -> &'static str {
    match category {
        PluralCategory::Zero => "zero",
        PluralCategory::One => "one",
        PluralCategory::Two => "two",
        PluralCategory::Few => "few",
        PluralCategory::Many => "many",
        PluralCategory::Other => "other",
    }
}
