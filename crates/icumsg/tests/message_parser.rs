//! Integration tests for message template parsing

use icumsg::parser::{
    AstNode, FormatterKind, PluralRuleKind, PluralSelector, PresetStyle, StyleRef, parse,
};

// ============================================================================
// Literals and escaping
// ============================================================================

#[test]
fn test_plain_text() {
    let ast = parse("Hello, world!").unwrap();
    assert_eq!(ast.nodes, vec![AstNode::Literal("Hello, world!".to_string())]);
}

#[test]
fn test_empty_template() {
    let ast = parse("").unwrap();
    assert!(ast.nodes.is_empty());
}

#[test]
fn test_doubled_apostrophe_is_literal() {
    let ast = parse("It''s here").unwrap();
    assert_eq!(ast.nodes, vec![AstNode::Literal("It's here".to_string())]);
}

#[test]
fn test_quoted_run_suppresses_syntax() {
    let ast = parse("'{name}'").unwrap();
    assert_eq!(ast.nodes, vec![AstNode::Literal("{name}".to_string())]);
}

#[test]
fn test_quote_closed_by_brace_leaves_literal_brace() {
    // The run ends at the second apostrophe; the trailing brace is plain
    // text at the root.
    let ast = parse("'{name'}").unwrap();
    assert_eq!(ast.nodes, vec![AstNode::Literal("{name}".to_string())]);
}

#[test]
fn test_doubled_apostrophe_inside_quoted_run() {
    let ast = parse("'{it''s}'").unwrap();
    assert_eq!(ast.nodes, vec![AstNode::Literal("{it's}".to_string())]);
}

#[test]
fn test_unterminated_quoted_run_extends_to_end() {
    let ast = parse("'{never closed").unwrap();
    assert_eq!(ast.nodes, vec![AstNode::Literal("{never closed".to_string())]);
}

#[test]
fn test_plain_apostrophe_is_literal() {
    let ast = parse("rock 'n roll").unwrap();
    assert_eq!(ast.nodes, vec![AstNode::Literal("rock 'n roll".to_string())]);
}

#[test]
fn test_quoted_hash() {
    let ast = parse("{n, plural, other {'#'#}}").unwrap();
    let AstNode::Plural { branches, .. } = &ast.nodes[0] else {
        panic!("expected plural");
    };
    assert_eq!(
        branches[0].body,
        vec![AstNode::Literal("#".to_string()), AstNode::Pound]
    );
}

#[test]
fn test_stray_closing_brace_is_literal_at_root() {
    let ast = parse("a } b").unwrap();
    assert_eq!(ast.nodes, vec![AstNode::Literal("a } b".to_string())]);
}

#[test]
fn test_non_tag_angle_bracket_is_literal() {
    let ast = parse("1 < 2").unwrap();
    assert_eq!(ast.nodes, vec![AstNode::Literal("1 < 2".to_string())]);
}

#[test]
fn test_hash_outside_plural_is_literal() {
    let ast = parse("issue #42").unwrap();
    assert_eq!(ast.nodes, vec![AstNode::Literal("issue #42".to_string())]);
}

#[test]
fn test_adjacent_literals_merge() {
    let ast = parse("a '' b } c").unwrap();
    assert_eq!(ast.nodes, vec![AstNode::Literal("a ' b } c".to_string())]);
}

// ============================================================================
// Arguments
// ============================================================================

#[test]
fn test_simple_argument() {
    let ast = parse("Hello, {name}!").unwrap();
    assert_eq!(
        ast.nodes,
        vec![
            AstNode::Literal("Hello, ".to_string()),
            AstNode::Argument {
                name: "name".to_string()
            },
            AstNode::Literal("!".to_string()),
        ]
    );
}

#[test]
fn test_argument_whitespace_is_insignificant() {
    let ast = parse("{ name }").unwrap();
    assert_eq!(
        ast.nodes,
        vec![AstNode::Argument {
            name: "name".to_string()
        }]
    );
}

#[test]
fn test_formatted_argument_without_style() {
    let ast = parse("{n, number}").unwrap();
    assert_eq!(
        ast.nodes,
        vec![AstNode::FormattedArgument {
            name: "n".to_string(),
            kind: FormatterKind::Number,
            style: None,
        }]
    );
}

#[test]
fn test_formatted_argument_with_preset() {
    let ast = parse("{when, date, medium}").unwrap();
    assert_eq!(
        ast.nodes,
        vec![AstNode::FormattedArgument {
            name: "when".to_string(),
            kind: FormatterKind::Date,
            style: Some(StyleRef::Preset(PresetStyle::Medium)),
        }]
    );
}

#[test]
fn test_formatted_argument_with_named_style() {
    let ast = parse("{price, number, currency_usd}").unwrap();
    assert_eq!(
        ast.nodes,
        vec![AstNode::FormattedArgument {
            name: "price".to_string(),
            kind: FormatterKind::Number,
            style: Some(StyleRef::Named("currency_usd".to_string())),
        }]
    );
}

#[test]
fn test_date_skeleton_style() {
    let ast = parse("{when, date, ::yMMMd}").unwrap();
    assert_eq!(
        ast.nodes,
        vec![AstNode::FormattedArgument {
            name: "when".to_string(),
            kind: FormatterKind::Date,
            style: Some(StyleRef::Skeleton("yMMMd".to_string())),
        }]
    );
}

#[test]
fn test_time_argument() {
    let ast = parse("{when, time, short}").unwrap();
    assert_eq!(
        ast.nodes,
        vec![AstNode::FormattedArgument {
            name: "when".to_string(),
            kind: FormatterKind::Time,
            style: Some(StyleRef::Preset(PresetStyle::Short)),
        }]
    );
}

// ============================================================================
// Plural and select
// ============================================================================

#[test]
fn test_plural_branches() {
    let ast = parse("{n, plural, =0 {none} one {# item} other {# items}}").unwrap();
    let AstNode::Plural {
        name,
        rule_kind,
        offset,
        branches,
    } = &ast.nodes[0]
    else {
        panic!("expected plural");
    };
    assert_eq!(name, "n");
    assert_eq!(*rule_kind, PluralRuleKind::Cardinal);
    assert_eq!(*offset, 0);
    assert_eq!(branches.len(), 3);
    assert_eq!(branches[0].selector, PluralSelector::Exact(0));
    assert_eq!(
        branches[1].selector,
        PluralSelector::Category("one".to_string())
    );
    assert_eq!(branches[1].body, vec![AstNode::Pound, AstNode::Literal(" item".to_string())]);
}

#[test]
fn test_plural_offset() {
    let ast = parse("{n, plural, offset:1 =0 {a} other {b}}").unwrap();
    let AstNode::Plural { offset, .. } = &ast.nodes[0] else {
        panic!("expected plural");
    };
    assert_eq!(*offset, 1);
}

#[test]
fn test_selectordinal_uses_ordinal_rules() {
    let ast = parse("{rank, selectordinal, one {#st} two {#nd} few {#rd} other {#th}}").unwrap();
    let AstNode::Plural { rule_kind, .. } = &ast.nodes[0] else {
        panic!("expected plural");
    };
    assert_eq!(*rule_kind, PluralRuleKind::Ordinal);
}

#[test]
fn test_select_branches() {
    let ast = parse("{gender, select, female {She} male {He} other {They}}").unwrap();
    let AstNode::Select { name, branches } = &ast.nodes[0] else {
        panic!("expected select");
    };
    assert_eq!(name, "gender");
    let keys: Vec<&str> = branches.iter().map(|b| b.key.as_str()).collect();
    assert_eq!(keys, vec!["female", "male", "other"]);
}

#[test]
fn test_nested_construct_in_branch() {
    let ast = parse("{n, plural, other {{gender, select, other {#}}}}").unwrap();
    let AstNode::Plural { branches, .. } = &ast.nodes[0] else {
        panic!("expected plural");
    };
    let AstNode::Select {
        branches: inner, ..
    } = &branches[0].body[0]
    else {
        panic!("expected nested select");
    };
    // `#` still refers to the enclosing plural inside a select branch.
    assert_eq!(inner[0].body, vec![AstNode::Pound]);
}

// ============================================================================
// Tags
// ============================================================================

#[test]
fn test_simple_tag() {
    let ast = parse("<b>bold</b>").unwrap();
    assert_eq!(
        ast.nodes,
        vec![AstNode::Tag {
            name: "b".to_string(),
            children: vec![AstNode::Literal("bold".to_string())],
        }]
    );
}

#[test]
fn test_nested_tags() {
    let ast = parse("<a>x<b>y</b></a>").unwrap();
    let AstNode::Tag { children, .. } = &ast.nodes[0] else {
        panic!("expected tag");
    };
    assert_eq!(children.len(), 2);
    assert!(matches!(&children[1], AstNode::Tag { name, .. } if name == "b"));
}

#[test]
fn test_tag_wrapping_argument() {
    let ast = parse("<link>{title}</link>").unwrap();
    let AstNode::Tag { children, .. } = &ast.nodes[0] else {
        panic!("expected tag");
    };
    assert_eq!(
        children,
        &vec![AstNode::Argument {
            name: "title".to_string()
        }]
    );
}

// ============================================================================
// Errors
// ============================================================================

fn parse_error(template: &str) -> String {
    parse(template).unwrap_err().message().to_string()
}

#[test]
fn test_unterminated_argument() {
    assert_eq!(parse_error("{name"), "unterminated argument: expected ',' or '}'");
}

#[test]
fn test_missing_argument_name() {
    assert_eq!(parse_error("{}"), "expected an argument name");
}

#[test]
fn test_unknown_construct_keyword() {
    assert_eq!(parse_error("{n, frobnicate, x}"), "unknown construct keyword");
}

#[test]
fn test_plural_missing_other() {
    assert_eq!(parse_error("{n, plural, one {a}}"), "missing 'other' branch");
}

#[test]
fn test_select_missing_other() {
    assert_eq!(
        parse_error("{g, select, female {a}}"),
        "missing 'other' branch"
    );
}

#[test]
fn test_duplicate_plural_selector() {
    assert_eq!(
        parse_error("{n, plural, one {a} one {b} other {c}}"),
        "duplicate branch selector"
    );
}

#[test]
fn test_duplicate_exact_selector() {
    assert_eq!(
        parse_error("{n, plural, =1 {a} =1 {b} other {c}}"),
        "duplicate branch selector"
    );
}

#[test]
fn test_unterminated_plural() {
    assert_eq!(
        parse_error("{n, plural, other {a}"),
        "unterminated plural: expected '}'"
    );
}

#[test]
fn test_unterminated_branch() {
    assert_eq!(
        parse_error("{n, plural, other {a"),
        "unterminated branch: expected '}'"
    );
}

#[test]
fn test_branch_selector_without_body() {
    assert_eq!(
        parse_error("{n, plural, other}"),
        "expected '{' after branch selector"
    );
}

#[test]
fn test_number_skeleton_rejected() {
    assert_eq!(
        parse_error("{n, number, ::yMd}"),
        "number formats do not support skeletons"
    );
}

#[test]
fn test_invalid_skeleton_symbol() {
    assert_eq!(parse_error("{d, date, ::yQd}"), "invalid skeleton field symbol");
}

#[test]
fn test_closing_tag_without_open() {
    assert_eq!(
        parse_error("orphan </b>"),
        "closing tag without a matching open tag"
    );
}

#[test]
fn test_mismatched_closing_tag() {
    assert_eq!(parse_error("<b>hi</i>"), "mismatched closing tag name");
}

#[test]
fn test_unterminated_tag() {
    assert_eq!(parse_error("<b>hi"), "unterminated tag: expected closing tag");
}

#[test]
fn test_exact_selector_requires_digits() {
    assert_eq!(
        parse_error("{n, plural, =x {a} other {b}}"),
        "expected a number"
    );
}

#[test]
fn test_exact_selector_out_of_range() {
    assert_eq!(
        parse_error("{n, plural, =99999999999999999999 {a} other {b}}"),
        "number out of range"
    );
}

#[test]
fn test_error_position() {
    let err = parse("a\n{").unwrap_err();
    assert_eq!(err.offset(), 3);
    assert_eq!(
        err.to_string(),
        "syntax error at 2:2: expected an argument name"
    );
}

#[test]
fn test_nesting_depth_is_bounded() {
    let open = "{x, select, other {".repeat(70);
    let close = "}}".repeat(70);
    let template = format!("{open}deep{close}");
    assert_eq!(parse_error(&template), "nesting depth limit exceeded");
}

#[test]
fn test_ast_serializes_for_tooling() {
    let ast = parse("{n, plural, one {# item} other {# items}}").unwrap();
    let json = serde_json::to_string(&ast).unwrap();
    let back: icumsg::Ast = serde_json::from_str(&json).unwrap();
    assert_eq!(ast, back);
}

#[test]
fn test_parsing_is_deterministic() {
    let template = "{n, plural, =0 {none} one {# item} other {# items}} in <b>{place}</b>";
    assert_eq!(parse(template).unwrap(), parse(template).unwrap());
}
