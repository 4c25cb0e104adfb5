use rust_decimal::Decimal;

use crate::{Condition, OperandKind, Predicate, Relation, RelationKind, SetMode};

/// Condition with bounds and moduli converted to [`Decimal`] ahead of time
/// and single-child groups collapsed.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum CompiledCondition {
    Any(Vec<CompiledCondition>),
    All(Vec<CompiledCondition>),
    Test(CompiledRelation),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CompiledRelation {
    pub(crate) operand: OperandKind,
    pub(crate) modulus: Option<Decimal>,
    /// `is` and `in` only match integral values; `within` does not care.
    pub(crate) integral: bool,
    pub(crate) negated: bool,
    pub(crate) bounds: Vec<(Decimal, Decimal)>,
}

/// Compile a parsed condition into an executable [`Predicate`].
///
/// Compilation cannot fail: every well-formed AST has a defined meaning.
#[must_use]
pub fn compile(condition: Condition) -> Predicate {
    let compiled = lower(&condition);
    tracing::debug!(
        relations = condition.relation_count(),
        "compiled plural rule"
    );
    Predicate {
        condition,
        compiled,
    }
}

fn lower(condition: &Condition) -> CompiledCondition {
    match condition {
        Condition::Or(children) => group(children, CompiledCondition::Any),
        Condition::And(children) => group(children, CompiledCondition::All),
        Condition::Relation(relation) => CompiledCondition::Test(lower_relation(relation)),
    }
}

fn group(
    children: &[Condition],
    wrap: fn(Vec<CompiledCondition>) -> CompiledCondition,
) -> CompiledCondition {
    match children {
        [only] => lower(only),
        _ => wrap(children.iter().map(lower).collect()),
    }
}

fn lower_relation(relation: &Relation) -> CompiledRelation {
    CompiledRelation {
        operand: relation.expr.operand,
        modulus: relation.expr.modulus.map(|m| Decimal::from(m.get())),
        integral: !matches!(relation.kind, RelationKind::InSet(SetMode::Within)),
        negated: relation.negated,
        bounds: relation
            .ranges
            .iter()
            .map(|r| (Decimal::from(r.low()), Decimal::from(r.high())))
            .collect(),
    }
}
