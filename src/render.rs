//! Back ends that turn a parsed [`Condition`] back into source text.
//!
//! Rendering never re-parses and never touches the compiled form, so every
//! back end sees the same AST that direct evaluation was compiled from.

use crate::{Condition, Expr, OperandKind, Range, Relation, RelationKind, SetMode};

/// A source-code back end for plural rule conditions.
pub trait Renderer {
    fn render(&self, condition: &Condition) -> String;
}

/// Canonical CLDR rule text.
///
/// Output re-parses to an equal AST for any condition the parser produced.
/// Nested `or` under `and` is distributed, since rule text has no grouping.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleText;

/// Rule text for a condition that can never hold (an empty `Or`).
const NEVER: &str = "n is 0 and n is not 0";

impl Renderer for RuleText {
    fn render(&self, condition: &Condition) -> String {
        let terms = disjunctive_form(condition);
        if terms.is_empty() {
            return NEVER.to_owned();
        }
        if terms.iter().any(Vec::is_empty) {
            return String::new();
        }
        terms
            .iter()
            .map(|conjuncts| {
                conjuncts
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" and ")
            })
            .collect::<Vec<_>>()
            .join(" or ")
    }
}

fn disjunctive_form(condition: &Condition) -> Vec<Vec<&Relation>> {
    match condition {
        // No ranges: the set test never holds, so only negation can match.
        Condition::Relation(relation) if relation.ranges.is_empty() => {
            if relation.negated {
                vec![Vec::new()]
            } else {
                Vec::new()
            }
        }
        Condition::Relation(relation) => vec![vec![relation]],
        Condition::Or(children) => children.iter().flat_map(disjunctive_form).collect(),
        Condition::And(children) => children.iter().fold(vec![Vec::new()], |acc, child| {
            let alternatives = disjunctive_form(child);
            acc.iter()
                .flat_map(|prefix| {
                    alternatives.iter().map(move |alt| {
                        let mut conjuncts = prefix.clone();
                        conjuncts.extend(alt.iter().copied());
                        conjuncts
                    })
                })
                .collect()
        }),
    }
}

/// A self-contained JavaScript `function (n)` expression.
///
/// The function derives `i v w f t` from `String(n)`, so passing a string
/// such as `"1.0"` keeps its visible fraction digits just like
/// [`Operands`](crate::Operands) parsed from text.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaScript;

const JS_PRELUDE: &str = "function (n) {
  var s = String(n).replace(/^[-+]/, \"\"), p = s.indexOf(\".\"),
      fs = p < 0 ? \"\" : s.slice(p + 1), ts = fs.replace(/0+$/, \"\");
  var i = Math.floor(Math.abs(+s)), v = fs.length, w = ts.length,
      f = fs ? +fs : 0, t = ts ? +ts : 0;
  n = Math.abs(+s);
";

impl Renderer for JavaScript {
    fn render(&self, condition: &Condition) -> String {
        format!("{JS_PRELUDE}  return {};\n}}", js_condition(condition))
    }
}

fn js_condition(condition: &Condition) -> String {
    match condition {
        Condition::Relation(relation) => js_relation(relation),
        Condition::Or(children) => js_group(children, "false", " || "),
        Condition::And(children) => js_group(children, "true", " && "),
    }
}

fn js_group(children: &[Condition], identity: &str, operator: &str) -> String {
    match children {
        [] => identity.to_owned(),
        [only] => js_condition(only),
        _ => {
            let parts: Vec<String> = children.iter().map(js_condition).collect();
            format!("({})", parts.join(operator))
        }
    }
}

fn js_expr(expr: &Expr) -> String {
    match expr.modulus {
        Some(m) => format!("{} % {m}", expr.operand),
        None => expr.operand.to_string(),
    }
}

fn js_range(x: &str, range: &Range) -> String {
    if range.is_single() {
        format!("{x} === {}", range.low())
    } else {
        format!("{x} >= {} && {x} <= {}", range.low(), range.high())
    }
}

fn js_relation(relation: &Relation) -> String {
    let x = js_expr(&relation.expr);
    let tests: Vec<String> = relation.ranges.iter().map(|r| js_range(&x, r)).collect();
    let mut body = if tests.is_empty() {
        "false".to_owned()
    } else {
        tests.join(" || ")
    };

    // Only `n` can be fractional, and `===` against an integer already
    // rejects fractions, so the explicit check is needed for spans alone.
    let needs_integral = relation.kind == RelationKind::InSet(SetMode::In)
        && relation.expr.operand == OperandKind::N
        && relation.ranges.iter().any(|r| !r.is_single());
    if needs_integral {
        body = format!("{x} % 1 === 0 && ({body})");
    }

    if relation.negated {
        format!("!({body})")
    } else {
        format!("({body})")
    }
}
