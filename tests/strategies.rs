use std::num::NonZeroU64;

use plurule::{Condition, OperandKind, Operands, Range, Relation, RelationKind, SetMode, operand};
use proptest::prelude::*;

// Value domain kept small so generated rules and operands actually overlap.
const MAX_VALUE: u64 = 120;
const MODULI: &[u64] = &[1, 2, 3, 7, 10, 100, 1000];

/// Generate operands from text so visible fraction digits are preserved,
/// including trailing zeros.
pub fn arb_operands() -> impl Strategy<Value = Operands> {
    (0_u64..2_500, "[0-9]{0,3}", any::<bool>()).prop_map(|(integer, fraction, negative)| {
        let sign = if negative { "-" } else { "" };
        let text = if fraction.is_empty() {
            format!("{sign}{integer}")
        } else {
            format!("{sign}{integer}.{fraction}")
        };
        text.parse().unwrap()
    })
}

fn arb_range() -> impl Strategy<Value = Range> {
    (0_u64..=MAX_VALUE, 0_u64..12).prop_map(|(low, span)| Range::new(low, low + span).unwrap())
}

fn arb_kind() -> impl Strategy<Value = RelationKind> {
    prop_oneof![
        Just(RelationKind::Is),
        Just(RelationKind::InSet(SetMode::In)),
        Just(RelationKind::InSet(SetMode::Within)),
    ]
}

/// Generate a single relation of any operand, modulus and kind.
pub fn arb_relation() -> impl Strategy<Value = Relation> {
    (
        prop::sample::select(OperandKind::ALL.to_vec()),
        prop::option::of(prop::sample::select(MODULI)),
        any::<bool>(),
        arb_kind(),
        prop::collection::vec(arb_range(), 1..4),
        0_u64..=MAX_VALUE,
    )
        .prop_map(|(kind, modulus, negated, relation_kind, ranges, value)| {
            let mut expr = operand(kind);
            if let Some(m) = modulus.and_then(NonZeroU64::new) {
                expr = expr.modulo(m);
            }
            let ranges = match relation_kind {
                RelationKind::Is => vec![Range::single(value)],
                RelationKind::InSet(_) => ranges,
            };
            Relation {
                expr,
                negated,
                kind: relation_kind,
                ranges,
            }
        })
}

/// Generate a condition shaped the way the parser produces them: an `or` of
/// `and` chains of relations, with single-child groups collapsed.
pub fn arb_condition() -> impl Strategy<Value = Condition> {
    prop::collection::vec(prop::collection::vec(arb_relation(), 1..4), 1..4).prop_map(|terms| {
        terms
            .into_iter()
            .map(|conjuncts| {
                conjuncts
                    .into_iter()
                    .map(Condition::from)
                    .reduce(Condition::and)
                    .unwrap()
            })
            .reduce(Condition::or)
            .unwrap()
    })
}
