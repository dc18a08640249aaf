//! Integration tests for text-mode formatting

use chrono::{TimeZone, Utc};
use icumsg::{EvalError, FormatError, Locale, MessageFormatter, TagHandlers, args, flatten_text};

fn en() -> Locale {
    Locale::new("en-US").unwrap()
}

// ============================================================================
// Interpolation
// ============================================================================

#[test]
fn test_string_interpolation() {
    let formatter = MessageFormatter::new();
    let out = formatter
        .format(&en(), "Hello, {name}!", &args! { "name" => "Alice" })
        .unwrap();
    assert_eq!(out, "Hello, Alice!");
}

#[test]
fn test_number_interpolation_is_locale_aware() {
    let formatter = MessageFormatter::new();
    let out = formatter
        .format(&en(), "{n} points", &args! { "n" => 1_234_567 })
        .unwrap();
    assert_eq!(out, "1,234,567 points");

    let de = Locale::new("de-DE").unwrap();
    let out = formatter
        .format(&de, "{n} Punkte", &args! { "n" => 1_234_567 })
        .unwrap();
    assert_eq!(out, "1.234.567 Punkte");
}

#[test]
fn test_float_interpolation() {
    let formatter = MessageFormatter::new();
    let out = formatter
        .format(&en(), "{x}", &args! { "x" => 1234.5 })
        .unwrap();
    assert_eq!(out, "1,234.5");
}

#[test]
fn test_bool_interpolation() {
    let formatter = MessageFormatter::new();
    let out = formatter
        .format(&en(), "flag: {flag}", &args! { "flag" => true })
        .unwrap();
    assert_eq!(out, "flag: true");
}

#[test]
fn test_datetime_interpolation_uses_default_style() {
    let formatter = MessageFormatter::new();
    let when = Utc.with_ymd_and_hms(2026, 1, 5, 14, 30, 5).unwrap();
    let out = formatter
        .format(&en(), "{when}", &args! { "when" => when })
        .unwrap();
    assert_eq!(out, "Jan 5, 2026, 2:30 PM");
}

// ============================================================================
// Plural selection
// ============================================================================

const FOLLOWERS: &str =
    "You have {n, plural, =0 {no followers} one {# follower} other {# followers}}.";

#[test]
fn test_plural_exact_branch() {
    let formatter = MessageFormatter::new();
    let out = formatter.format(&en(), FOLLOWERS, &args! { "n" => 0 }).unwrap();
    assert_eq!(out, "You have no followers.");
}

#[test]
fn test_plural_one_branch() {
    let formatter = MessageFormatter::new();
    let out = formatter.format(&en(), FOLLOWERS, &args! { "n" => 1 }).unwrap();
    assert_eq!(out, "You have 1 follower.");
}

#[test]
fn test_plural_other_branch_formats_pound() {
    let formatter = MessageFormatter::new();
    let out = formatter
        .format(&en(), FOLLOWERS, &args! { "n" => 3580 })
        .unwrap();
    assert_eq!(out, "You have 3,580 followers.");
}

#[test]
fn test_plural_offset_adjusts_exact_and_pound() {
    let formatter = MessageFormatter::new();
    let template = "{n, plural, offset:1 =0 {none left} one {# left} other {# left}}";
    assert_eq!(
        formatter.format(&en(), template, &args! { "n" => 1 }).unwrap(),
        "none left"
    );
    assert_eq!(
        formatter.format(&en(), template, &args! { "n" => 2 }).unwrap(),
        "1 left"
    );
    assert_eq!(
        formatter.format(&en(), template, &args! { "n" => 3 }).unwrap(),
        "2 left"
    );
}

#[test]
fn test_plural_offset_overflow_is_an_error() {
    let formatter = MessageFormatter::new();
    let template = "{n, plural, offset:9223372036854775807 other {#}}";
    let err = formatter
        .format(&en(), template, &args! { "n" => -2 })
        .unwrap_err();
    assert!(matches!(
        err,
        FormatError::Eval(EvalError::OffsetOverflow { name }) if name == "n"
    ));
}

#[test]
fn test_plural_follows_locale_rules() {
    let formatter = MessageFormatter::new();
    let ru = Locale::new("ru").unwrap();
    let template = "{n, plural, one {товар} few {товара} many {товаров} other {товара}}";
    assert_eq!(
        formatter.format(&ru, template, &args! { "n" => 21 }).unwrap(),
        "товар"
    );
    assert_eq!(
        formatter.format(&ru, template, &args! { "n" => 3 }).unwrap(),
        "товара"
    );
    assert_eq!(
        formatter.format(&ru, template, &args! { "n" => 5 }).unwrap(),
        "товаров"
    );
}

#[test]
fn test_selectordinal() {
    let formatter = MessageFormatter::new();
    let template = "{rank, selectordinal, one {#st} two {#nd} few {#rd} other {#th}}";
    assert_eq!(
        formatter.format(&en(), template, &args! { "rank" => 1 }).unwrap(),
        "1st"
    );
    assert_eq!(
        formatter.format(&en(), template, &args! { "rank" => 22 }).unwrap(),
        "22nd"
    );
    assert_eq!(
        formatter.format(&en(), template, &args! { "rank" => 3 }).unwrap(),
        "3rd"
    );
    assert_eq!(
        formatter.format(&en(), template, &args! { "rank" => 11 }).unwrap(),
        "11th"
    );
}

#[test]
fn test_pound_in_nested_select_refers_to_plural() {
    let formatter = MessageFormatter::new();
    let template = "{n, plural, other {{g, select, other {#}}}}";
    let out = formatter
        .format(&en(), template, &args! { "n" => 7, "g" => "x" })
        .unwrap();
    assert_eq!(out, "7");
}

// ============================================================================
// Select
// ============================================================================

const REPLIED: &str = "{gender, select, female {She} male {He} other {They}} replied.";

#[test]
fn test_select_matches_key() {
    let formatter = MessageFormatter::new();
    let out = formatter
        .format(&en(), REPLIED, &args! { "gender" => "female" })
        .unwrap();
    assert_eq!(out, "She replied.");
}

#[test]
fn test_select_unknown_key_falls_back_to_other() {
    let formatter = MessageFormatter::new();
    let out = formatter
        .format(&en(), REPLIED, &args! { "gender" => "nonbinary" })
        .unwrap();
    assert_eq!(out, "They replied.");
}

#[test]
fn test_select_coerces_bool() {
    let formatter = MessageFormatter::new();
    let template = "{on, select, true {enabled} other {disabled}}";
    assert_eq!(
        formatter.format(&en(), template, &args! { "on" => true }).unwrap(),
        "enabled"
    );
    assert_eq!(
        formatter.format(&en(), template, &args! { "on" => false }).unwrap(),
        "disabled"
    );
}

#[test]
fn test_select_coerces_number() {
    let formatter = MessageFormatter::new();
    let template = "{code, select, 404 {not found} other {error}}";
    let out = formatter
        .format(&en(), template, &args! { "code" => 404 })
        .unwrap();
    assert_eq!(out, "not found");
}

#[test]
fn test_select_on_datetime_is_type_error() {
    let formatter = MessageFormatter::new();
    let when = Utc.with_ymd_and_hms(2026, 1, 5, 0, 0, 0).unwrap();
    let err = formatter
        .format(
            &en(),
            "{when, select, other {x}}",
            &args! { "when" => when },
        )
        .unwrap_err();
    assert!(matches!(
        err,
        FormatError::Eval(EvalError::TypeMismatch { expected: "a string", .. })
    ));
}

// ============================================================================
// Formatted arguments
// ============================================================================

#[test]
fn test_number_preset_rounds() {
    let formatter = MessageFormatter::new();
    let out = formatter
        .format(&en(), "{x, number, short}", &args! { "x" => 3.7 })
        .unwrap();
    assert_eq!(out, "4");
}

#[test]
fn test_number_medium_keeps_three_fraction_digits() {
    let formatter = MessageFormatter::new();
    let out = formatter
        .format(&en(), "{x, number, medium}", &args! { "x" => 2.718_281 })
        .unwrap();
    assert_eq!(out, "2.718");
}

#[test]
fn test_date_presets() {
    let formatter = MessageFormatter::new();
    let when = Utc.with_ymd_and_hms(2026, 1, 5, 14, 30, 5).unwrap();
    let bindings = args! { "when" => when };
    assert_eq!(
        formatter.format(&en(), "{when, date, short}", &bindings).unwrap(),
        "1/5/26"
    );
    assert_eq!(
        formatter.format(&en(), "{when, date, medium}", &bindings).unwrap(),
        "Jan 5, 2026"
    );
    assert_eq!(
        formatter.format(&en(), "{when, date, full}", &bindings).unwrap(),
        "Monday, January 5, 2026"
    );
}

#[test]
fn test_time_default_is_short() {
    let formatter = MessageFormatter::new();
    let when = Utc.with_ymd_and_hms(2026, 1, 5, 14, 30, 5).unwrap();
    let out = formatter
        .format(&en(), "{when, time}", &args! { "when" => when })
        .unwrap();
    assert_eq!(out, "2:30 PM");
}

#[test]
fn test_date_skeleton() {
    let formatter = MessageFormatter::new();
    let when = Utc.with_ymd_and_hms(2026, 1, 5, 14, 30, 5).unwrap();
    let out = formatter
        .format(&en(), "{when, date, ::yMMMMd}", &args! { "when" => when })
        .unwrap();
    assert_eq!(out, "January 5, 2026");
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_missing_argument() {
    let formatter = MessageFormatter::new();
    let err = formatter.format(&en(), "Hello, {name}!", &args! {}).unwrap_err();
    assert!(matches!(
        err,
        FormatError::Eval(EvalError::MissingArgument { name }) if name == "name"
    ));
}

#[test]
fn test_plural_on_string_is_type_error() {
    let formatter = MessageFormatter::new();
    let err = formatter
        .format(
            &en(),
            "{n, plural, other {#}}",
            &args! { "n" => "three" },
        )
        .unwrap_err();
    assert!(matches!(
        err,
        FormatError::Eval(EvalError::TypeMismatch {
            expected: "a number",
            found: "string",
            ..
        })
    ));
}

#[test]
fn test_date_on_number_is_type_error() {
    let formatter = MessageFormatter::new();
    let err = formatter
        .format(&en(), "{when, date}", &args! { "when" => 5 })
        .unwrap_err();
    assert!(matches!(
        err,
        FormatError::Eval(EvalError::TypeMismatch { expected: "a datetime", .. })
    ));
}

#[test]
fn test_syntax_error_surfaces_as_parse_error() {
    let formatter = MessageFormatter::new();
    let err = formatter.format(&en(), "{oops", &args! {}).unwrap_err();
    assert!(matches!(err, FormatError::Parse(_)));
}

#[test]
fn test_tag_without_handler_fails_in_text_mode() {
    let formatter = MessageFormatter::new();
    let err = formatter
        .format(&en(), "<b>bold</b>", &args! {})
        .unwrap_err();
    assert!(matches!(
        err,
        FormatError::Eval(EvalError::MissingTagHandler { name }) if name == "b"
    ));
}

// ============================================================================
// Tag splicing and invariants
// ============================================================================

#[test]
fn test_format_with_tags_splices_strings() {
    let formatter = MessageFormatter::new();
    let mut tags: TagHandlers<'_, String> = TagHandlers::new();
    tags.insert("b", |children| format!("**{}**", flatten_text(children)));
    let out = formatter
        .format_with_tags(
            &en(),
            "a <b>{word}</b> c",
            &args! { "word" => "bold" },
            &tags,
        )
        .unwrap();
    assert_eq!(out, "a **bold** c");
}

#[test]
fn test_escaped_syntax_renders_literally() {
    let formatter = MessageFormatter::new();
    let out = formatter
        .format(&en(), "Use '{name}' to interpolate", &args! {})
        .unwrap();
    assert_eq!(out, "Use {name} to interpolate");
}

#[test]
fn test_evaluation_is_idempotent() {
    let formatter = MessageFormatter::new();
    let bindings = args! { "n" => 2 };
    let first = formatter.format(&en(), FOLLOWERS, &bindings).unwrap();
    let second = formatter.format(&en(), FOLLOWERS, &bindings).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, "You have 2 followers.");
}
