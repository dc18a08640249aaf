//! The tree-walking evaluator.
//!
//! Evaluation walks a compiled AST against argument bindings and produces a
//! node sequence. Text mode is rich mode with `String` as the opaque node
//! type, flattened afterwards; there is exactly one evaluation path.

use crate::formats::{DateTimeOptions, NumberOptions};
use crate::parser::{Ast, AstNode, FormatterKind, PluralSelector, StyleRef};
use crate::types::{Node, NumericValue, TagHandlers, Value};

use super::context::EvalContext;
use super::error::EvalError;
use super::plural::plural_category;

/// Evaluate a compiled pattern to a rich node sequence.
///
/// Adjacent text is merged: a pattern with no tags always yields at most one
/// [`Node::Text`].
pub fn eval_message<N>(
    ast: &Ast,
    ctx: &mut EvalContext<'_>,
    tags: &TagHandlers<'_, N>,
) -> Result<Vec<Node<N>>, EvalError> {
    let mut out = Vec::new();
    eval_nodes(&ast.nodes, ctx, tags, &mut out)?;
    Ok(out)
}

fn eval_nodes<N>(
    nodes: &[AstNode],
    ctx: &mut EvalContext<'_>,
    tags: &TagHandlers<'_, N>,
    out: &mut Vec<Node<N>>,
) -> Result<(), EvalError> {
    for node in nodes {
        match node {
            AstNode::Literal(text) => push_text(out, text.clone()),

            AstNode::Pound => {
                // `#` outside a plural branch is literal; inside one it is
                // the offset-adjusted number, default-formatted.
                match ctx.current_plural() {
                    Some(value) => {
                        let text = ctx.formatters().format_number(
                            ctx.locale(),
                            value,
                            &NumberOptions::default(),
                        )?;
                        push_text(out, text);
                    }
                    None => push_text(out, "#".to_string()),
                }
            }

            AstNode::Argument { name } => {
                let text = default_render(name, ctx)?;
                push_text(out, text);
            }

            AstNode::FormattedArgument { name, kind, style } => {
                let text = formatted_render(name, *kind, style.as_ref(), ctx)?;
                push_text(out, text);
            }

            AstNode::Select { name, branches } => {
                let key = select_key(name, ctx.arg(name)?)?;
                let branch = branches
                    .iter()
                    .find(|b| b.key == key)
                    .or_else(|| branches.iter().find(|b| b.key == "other"))
                    .ok_or_else(|| EvalError::MissingOtherBranch {
                        name: name.to_string(),
                    })?;
                ctx.enter()?;
                eval_nodes(&branch.body, ctx, tags, out)?;
                ctx.leave();
            }

            AstNode::Plural {
                name,
                rule_kind,
                offset,
                branches,
            } => {
                let value = ctx.arg(name)?;
                let Some(numeric) = value.as_numeric() else {
                    return Err(EvalError::TypeMismatch {
                        name: name.to_string(),
                        expected: "a number",
                        found: value.type_name(),
                    });
                };
                let Some(adjusted) = numeric.minus(*offset) else {
                    return Err(EvalError::OffsetOverflow {
                        name: name.to_string(),
                    });
                };

                let exact = branches.iter().find(
                    |b| matches!(b.selector, PluralSelector::Exact(n) if adjusted.matches_exact(n)),
                );
                let branch = match exact {
                    Some(branch) => branch,
                    None => {
                        let category = plural_category(ctx.locale(), *rule_kind, adjusted);
                        branches
                            .iter()
                            .find(|b| {
                                matches!(&b.selector, PluralSelector::Category(c) if c == category)
                            })
                            .or_else(|| {
                                branches.iter().find(|b| {
                                    matches!(&b.selector, PluralSelector::Category(c) if c == "other")
                                })
                            })
                            .ok_or_else(|| EvalError::MissingOtherBranch {
                                name: name.to_string(),
                            })?
                    }
                };

                ctx.enter()?;
                ctx.push_plural(adjusted);
                let result = eval_nodes(&branch.body, ctx, tags, out);
                ctx.pop_plural();
                ctx.leave();
                result?;
            }

            AstNode::Tag { name, children } => {
                let Some(handler) = tags.get(name) else {
                    return Err(EvalError::MissingTagHandler {
                        name: name.to_string(),
                    });
                };
                ctx.enter()?;
                let mut inner = Vec::new();
                let result = eval_nodes(children, ctx, tags, &mut inner);
                ctx.leave();
                result?;
                out.push(Node::Opaque(handler(inner)));
            }
        }
    }
    Ok(())
}

/// Append text, merging with a preceding text node.
fn push_text<N>(out: &mut Vec<Node<N>>, text: String) {
    if text.is_empty() {
        return;
    }
    if let Some(Node::Text(prev)) = out.last_mut() {
        prev.push_str(&text);
    } else {
        out.push(Node::Text(text));
    }
}

/// Render a bare `{name}` interpolation by the binding's own type.
fn default_render(name: &str, ctx: &mut EvalContext<'_>) -> Result<String, EvalError> {
    match ctx.arg(name)? {
        Value::Number(n) => {
            let value = NumericValue::Int(*n);
            ctx.formatters()
                .format_number(ctx.locale(), value, &NumberOptions::default())
        }
        Value::Float(f) => {
            let value = NumericValue::Float(*f);
            ctx.formatters()
                .format_number(ctx.locale(), value, &NumberOptions::default())
        }
        Value::Bool(b) => Ok(if *b { "true" } else { "false" }.to_string()),
        Value::String(s) => Ok(s.clone()),
        Value::DateTime(dt) => {
            let options = DateTimeOptions::MEDIUM_DATE.merged_with(&DateTimeOptions::SHORT_TIME);
            ctx.formatters().format_datetime(ctx.locale(), dt, &options)
        }
    }
}

/// Render `{name, number|date|time[, style]}`.
fn formatted_render(
    name: &str,
    kind: FormatterKind,
    style: Option<&StyleRef>,
    ctx: &mut EvalContext<'_>,
) -> Result<String, EvalError> {
    let value = ctx.arg(name)?;
    match kind {
        FormatterKind::Number => {
            let Some(numeric) = value.as_numeric() else {
                return Err(EvalError::TypeMismatch {
                    name: name.to_string(),
                    expected: "a number",
                    found: value.type_name(),
                });
            };
            let options = ctx.registry().resolve_number(style, None)?;
            ctx.formatters()
                .format_number(ctx.locale(), numeric, &options)
        }
        FormatterKind::Date => {
            let Some(dt) = value.as_datetime() else {
                return Err(EvalError::TypeMismatch {
                    name: name.to_string(),
                    expected: "a datetime",
                    found: value.type_name(),
                });
            };
            let dt = *dt;
            let options = ctx.registry().resolve_date(style, None)?;
            ctx.formatters().format_datetime(ctx.locale(), &dt, &options)
        }
        FormatterKind::Time => {
            let Some(dt) = value.as_datetime() else {
                return Err(EvalError::TypeMismatch {
                    name: name.to_string(),
                    expected: "a datetime",
                    found: value.type_name(),
                });
            };
            let dt = *dt;
            let options = ctx.registry().resolve_time(style, None)?;
            ctx.formatters().format_datetime(ctx.locale(), &dt, &options)
        }
    }
}

/// Coerce a binding to a select key.
///
/// Datetimes have no meaningful string key, so selecting on one is a type
/// error rather than a silent `other`.
fn select_key(name: &str, value: &Value) -> Result<String, EvalError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Bool(b) => Ok(if *b { "true" } else { "false" }.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Float(f) => Ok(NumericValue::Float(*f).canonical_string()),
        Value::DateTime(_) => Err(EvalError::TypeMismatch {
            name: name.to_string(),
            expected: "a string",
            found: value.type_name(),
        }),
    }
}
