//! Message template parser using winnow.
//!
//! Compiles an ICU-style message template into an AST in a single
//! left-to-right pass. Handles:
//! - Literal text segments
//! - Apostrophe escaping: `''` and `'`-quoted runs before `{`, `}`, `#`, `<`
//! - Arguments: `{name}` and `{name, number|date|time[, style]}`
//! - Plural / ordinal selection with `offset:` and `=N` selectors
//! - Enumerated selection: `{name, select, ...}`
//! - Rich-text tags: `<name>...</name>`, nestable anywhere
//!
//! Parsing aborts at the first error with the offending offset; no partial
//! AST is returned.

use winnow::combinator::{opt, preceded};
use winnow::error::{AddContext, ContextError, ErrMode, StrContext};
use winnow::prelude::*;
use winnow::stream::Stream;
use winnow::token::{any, take_while};

use super::ast::{
    Ast, AstNode, FormatterKind, PluralBranch, PluralRuleKind, PluralSelector, PresetStyle,
    SelectBranch, StyleRef,
};
use super::error::ParseError;
use crate::formats::skeleton;

/// Maximum construct nesting depth accepted by the parser.
///
/// Converts pathologically nested templates into a reported error instead of
/// stack exhaustion.
pub const MAX_NESTING_DEPTH: usize = 64;

/// Parse a message template into an AST.
pub fn parse(template: &str) -> Result<Ast, ParseError> {
    let mut remaining = template;
    match message(&mut remaining, Scope::root()) {
        Ok(nodes) => {
            if remaining.is_empty() {
                Ok(Ast { nodes })
            } else {
                // The root scope consumes stray `}` and `<` as literals, so
                // leftovers can only come from future grammar changes.
                let found = remaining.chars().next().unwrap_or('?');
                Err(syntax_error(
                    template,
                    remaining,
                    format!("unexpected character '{found}'"),
                ))
            }
        }
        Err(e) => {
            let message = match error_label(&e) {
                Some(label) => label.to_string(),
                None => format!("parse error: {e}"),
            };
            Err(syntax_error(template, remaining, message))
        }
    }
}

/// Build a positioned `ParseError` from the unconsumed remainder.
fn syntax_error(original: &str, remaining: &str, message: String) -> ParseError {
    let offset = original.len() - remaining.len();
    let (line, column) = calculate_position(original, offset);
    ParseError::Syntax {
        offset,
        line,
        column,
        message,
    }
}

/// Calculate 1-based line and column for a byte offset.
fn calculate_position(original: &str, offset: usize) -> (usize, usize) {
    let consumed = &original[..offset];
    let line = consumed.chars().filter(|&c| c == '\n').count() + 1;
    let column = match consumed.rfind('\n') {
        Some(pos) => offset - pos,
        None => offset + 1,
    };
    (line, column)
}

/// Extract the innermost human-readable label from a winnow error.
fn error_label(err: &ErrMode<ContextError>) -> Option<&'static str> {
    let ctx = match err {
        ErrMode::Backtrack(e) | ErrMode::Cut(e) => e,
        ErrMode::Incomplete(_) => return None,
    };
    ctx.context().find_map(|c| match c {
        StrContext::Label(label) => Some(*label),
        _ => None,
    })
}

/// Raise a hard (non-backtrackable) error with a fixed reason at the current
/// input position.
fn bail<T>(input: &mut &str, label: &'static str) -> ModalResult<T> {
    let start = input.checkpoint();
    let err = ContextError::new().add_context(input, &start, StrContext::Label(label));
    Err(ErrMode::Cut(err))
}

/// Lexical scope of the message body currently being parsed.
#[derive(Debug, Clone, Copy)]
struct Scope {
    /// `}` terminates this body instead of being literal text.
    in_brace: bool,
    /// `#` is the plural number marker instead of literal text.
    in_plural: bool,
    /// `</` terminates this body (an open tag is awaiting its close).
    in_tag: bool,
    /// Construct nesting depth, bounded by [`MAX_NESTING_DEPTH`].
    depth: usize,
}

impl Scope {
    fn root() -> Self {
        Scope {
            in_brace: false,
            in_plural: false,
            in_tag: false,
            depth: 0,
        }
    }

    /// Scope of a plural/select branch body. `in_plural` is preserved across
    /// `select` branches so `#` keeps referring to the enclosing plural.
    fn branch(self, in_plural: bool) -> Self {
        Scope {
            in_brace: true,
            in_plural,
            in_tag: false,
            depth: self.depth + 1,
        }
    }

    /// Scope of a tag body: the brace and plural context pass through.
    fn tag_body(self) -> Self {
        Scope {
            in_tag: true,
            depth: self.depth + 1,
            ..self
        }
    }
}

/// Parse a message body: a node sequence terminated by the scope's
/// terminator (`}`, `</`, or end of input).
fn message(input: &mut &str, scope: Scope) -> ModalResult<Vec<AstNode>> {
    if scope.depth > MAX_NESTING_DEPTH {
        return bail(input, "nesting depth limit exceeded");
    }

    let mut nodes = Vec::new();
    loop {
        let Some(c) = input.chars().next() else {
            break;
        };
        if c == '}' && scope.in_brace {
            break;
        }
        if input.starts_with("</") {
            if scope.in_tag {
                break;
            }
            return bail(input, "closing tag without a matching open tag");
        }
        match c {
            '\'' => {
                let text = apostrophe(input)?;
                push_literal(&mut nodes, text);
            }
            '{' => nodes.push(argument(input, scope)?),
            '<' => {
                let mut rest = input.chars();
                let _ = rest.next();
                if rest.next().is_some_and(is_ident_start) {
                    nodes.push(tag(input, scope)?);
                } else {
                    // Not a tag: "<" is ordinary text (e.g. "a < b").
                    let _: char = any.parse_next(input)?;
                    push_literal(&mut nodes, "<".to_string());
                }
            }
            '#' if scope.in_plural => {
                let _: char = any.parse_next(input)?;
                nodes.push(AstNode::Pound);
            }
            _ => {
                let run = literal_run(input, scope)?;
                push_literal(&mut nodes, run.to_string());
            }
        }
    }
    Ok(nodes)
}

/// Append literal text, merging with a preceding literal node.
fn push_literal(nodes: &mut Vec<AstNode>, text: String) {
    if text.is_empty() {
        return;
    }
    if let Some(AstNode::Literal(prev)) = nodes.last_mut() {
        prev.push_str(&text);
    } else {
        nodes.push(AstNode::Literal(text));
    }
}

/// Consume a run of plain literal characters.
fn literal_run<'i>(input: &mut &'i str, scope: Scope) -> ModalResult<&'i str> {
    take_while(1.., move |c: char| {
        c != '{'
            && c != '<'
            && c != '\''
            && (c != '}' || !scope.in_brace)
            && (c != '#' || !scope.in_plural)
    })
    .parse_next(input)
}

/// Handle an apostrophe: `''` is a literal quote; a quote immediately before
/// a syntax character opens a quoted run ending at the next single quote
/// (`''` inside stays literal); otherwise the apostrophe is plain text.
/// An unterminated quoted run extends to the end of the input.
fn apostrophe(input: &mut &str) -> ModalResult<String> {
    let _: char = any.parse_next(input)?;
    match input.chars().next() {
        Some('\'') => {
            let _: char = any.parse_next(input)?;
            Ok("'".to_string())
        }
        Some('{' | '}' | '#' | '<') => {
            let mut text = String::new();
            loop {
                let chunk: &str = take_while(0.., |ch: char| ch != '\'').parse_next(input)?;
                text.push_str(chunk);
                if input.is_empty() {
                    break;
                }
                let _: char = any.parse_next(input)?;
                if input.starts_with('\'') {
                    let _: char = any.parse_next(input)?;
                    text.push('\'');
                    continue;
                }
                break;
            }
            Ok(text)
        }
        _ => Ok("'".to_string()),
    }
}

/// Parse a braced construct, starting at `{`.
fn argument(input: &mut &str, scope: Scope) -> ModalResult<AstNode> {
    let _: char = any.parse_next(input)?;
    ws(input)?;
    let Some(name) = opt(identifier).parse_next(input)? else {
        return bail(input, "expected an argument name");
    };
    let name = name.to_string();
    ws(input)?;
    if opt('}').parse_next(input)?.is_some() {
        return Ok(AstNode::Argument { name });
    }
    if opt(',').parse_next(input)?.is_none() {
        return bail(input, "unterminated argument: expected ',' or '}'");
    }
    ws(input)?;
    let keyword_start = input.checkpoint();
    let Some(keyword) = opt(identifier).parse_next(input)? else {
        return bail(input, "expected a construct keyword");
    };
    match keyword {
        "number" => formatted_argument(input, name, FormatterKind::Number),
        "date" => formatted_argument(input, name, FormatterKind::Date),
        "time" => formatted_argument(input, name, FormatterKind::Time),
        "plural" => plural_argument(input, name, PluralRuleKind::Cardinal, scope),
        "selectordinal" => plural_argument(input, name, PluralRuleKind::Ordinal, scope),
        "select" => select_argument(input, name, scope),
        _ => {
            input.reset(&keyword_start);
            bail(input, "unknown construct keyword")
        }
    }
}

/// Parse the tail of `{name, number|date|time[, style]}`.
fn formatted_argument(input: &mut &str, name: String, kind: FormatterKind) -> ModalResult<AstNode> {
    ws(input)?;
    let style = if opt(',').parse_next(input)?.is_some() {
        ws(input)?;
        Some(style_ref(input, kind)?)
    } else {
        None
    };
    ws(input)?;
    if opt('}').parse_next(input)?.is_none() {
        return bail(input, "unterminated argument: expected '}'");
    }
    Ok(AstNode::FormattedArgument { name, kind, style })
}

/// Parse a style reference: a `::`-prefixed skeleton, one of the four
/// built-in keywords, or a caller-defined format name.
fn style_ref(input: &mut &str, kind: FormatterKind) -> ModalResult<StyleRef> {
    if opt("::").parse_next(input)?.is_some() {
        if kind == FormatterKind::Number {
            return bail(input, "number formats do not support skeletons");
        }
        let symbols: &str = take_while(0.., skeleton::is_field_symbol).parse_next(input)?;
        match input.chars().next() {
            None => {}
            Some(c) if c == '}' || c.is_ascii_whitespace() => {}
            Some(_) => return bail(input, "invalid skeleton field symbol"),
        }
        if symbols.is_empty() {
            return bail(input, "expected skeleton field symbols");
        }
        return Ok(StyleRef::Skeleton(symbols.to_string()));
    }
    let Some(word) = opt(identifier).parse_next(input)? else {
        return bail(input, "expected a format style");
    };
    Ok(match word {
        "short" => StyleRef::Preset(PresetStyle::Short),
        "medium" => StyleRef::Preset(PresetStyle::Medium),
        "long" => StyleRef::Preset(PresetStyle::Long),
        "full" => StyleRef::Preset(PresetStyle::Full),
        _ => StyleRef::Named(word.to_string()),
    })
}

/// Parse the tail of `{name, plural|selectordinal, [offset:n] branches}`.
fn plural_argument(
    input: &mut &str,
    name: String,
    rule_kind: PluralRuleKind,
    scope: Scope,
) -> ModalResult<AstNode> {
    ws(input)?;
    if opt(',').parse_next(input)?.is_none() {
        return bail(input, "expected ',' before plural branches");
    }
    ws(input)?;
    let offset = opt(preceded("offset:", integer))
        .parse_next(input)?
        .unwrap_or(0);

    let mut branches = Vec::new();
    loop {
        ws(input)?;
        if input.is_empty() {
            return bail(input, "unterminated plural: expected '}'");
        }
        if input.starts_with('}') {
            break;
        }
        let selector = if opt('=').parse_next(input)?.is_some() {
            PluralSelector::Exact(integer(input)?)
        } else if let Some(id) = opt(identifier).parse_next(input)? {
            PluralSelector::Category(id.to_string())
        } else {
            return bail(input, "expected a branch selector");
        };
        let body = branch_body(input, scope.branch(true))?;
        branches.push(PluralBranch { selector, body });
    }

    for (i, branch) in branches.iter().enumerate() {
        if branches[..i].iter().any(|b| b.selector == branch.selector) {
            return bail(input, "duplicate branch selector");
        }
    }
    let has_other = branches
        .iter()
        .any(|b| matches!(&b.selector, PluralSelector::Category(c) if c == "other"));
    if !has_other {
        return bail(input, "missing 'other' branch");
    }

    let _: char = any.parse_next(input)?;
    Ok(AstNode::Plural {
        name,
        rule_kind,
        offset,
        branches,
    })
}

/// Parse the tail of `{name, select, branches}`.
fn select_argument(input: &mut &str, name: String, scope: Scope) -> ModalResult<AstNode> {
    ws(input)?;
    if opt(',').parse_next(input)?.is_none() {
        return bail(input, "expected ',' before select branches");
    }

    let mut branches = Vec::new();
    loop {
        ws(input)?;
        if input.is_empty() {
            return bail(input, "unterminated select: expected '}'");
        }
        if input.starts_with('}') {
            break;
        }
        let Some(key) = opt(identifier).parse_next(input)? else {
            return bail(input, "expected a branch selector");
        };
        let key = key.to_string();
        let body = branch_body(input, scope.branch(scope.in_plural))?;
        branches.push(SelectBranch { key, body });
    }

    for (i, branch) in branches.iter().enumerate() {
        if branches[..i].iter().any(|b| b.key == branch.key) {
            return bail(input, "duplicate branch selector");
        }
    }
    if !branches.iter().any(|b| b.key == "other") {
        return bail(input, "missing 'other' branch");
    }

    let _: char = any.parse_next(input)?;
    Ok(AstNode::Select { name, branches })
}

/// Parse a braced branch body following a selector.
fn branch_body(input: &mut &str, scope: Scope) -> ModalResult<Vec<AstNode>> {
    ws(input)?;
    if opt('{').parse_next(input)?.is_none() {
        return bail(input, "expected '{' after branch selector");
    }
    let body = message(input, scope)?;
    if opt('}').parse_next(input)?.is_none() {
        return bail(input, "unterminated branch: expected '}'");
    }
    Ok(body)
}

/// Parse a rich-text tag, starting at `<`.
fn tag(input: &mut &str, scope: Scope) -> ModalResult<AstNode> {
    let _: char = any.parse_next(input)?;
    let Some(name) = opt(identifier).parse_next(input)? else {
        return bail(input, "expected a tag name");
    };
    let name = name.to_string();
    if opt('>').parse_next(input)?.is_none() {
        return bail(input, "expected '>' after tag name");
    }
    let children = message(input, scope.tag_body())?;
    if !input.starts_with("</") {
        return bail(input, "unterminated tag: expected closing tag");
    }
    let _: char = any.parse_next(input)?;
    let _: char = any.parse_next(input)?;
    let close_start = input.checkpoint();
    let Some(close) = opt(identifier).parse_next(input)? else {
        return bail(input, "expected a tag name in closing tag");
    };
    if close != name {
        input.reset(&close_start);
        return bail(input, "mismatched closing tag name");
    }
    if opt('>').parse_next(input)?.is_none() {
        return bail(input, "expected '>' after closing tag name");
    }
    Ok(AstNode::Tag { name, children })
}

/// Parse optional ASCII whitespace.
fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., |c: char| c.is_ascii_whitespace())
        .void()
        .parse_next(input)
}

/// Parse an unsigned decimal integer.
fn integer(input: &mut &str) -> ModalResult<i64> {
    let digits: Option<&str> =
        opt(take_while(1.., |c: char| c.is_ascii_digit())).parse_next(input)?;
    let Some(digits) = digits else {
        return bail(input, "expected a number");
    };
    match digits.parse::<i64>() {
        Ok(n) => Ok(n),
        Err(_) => bail(input, "number out of range"),
    }
}

/// Parse an identifier (argument name, keyword, selector, or tag name).
fn identifier<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., is_ident_cont).parse_next(input)
}

/// Check if a character can start a tag name.
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier.
fn is_ident_cont(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
