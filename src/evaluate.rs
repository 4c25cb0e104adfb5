use crate::Operands;
use crate::compile::{CompiledCondition, CompiledRelation};

pub(crate) fn evaluate(condition: &CompiledCondition, operands: &Operands) -> bool {
    match condition {
        CompiledCondition::Any(children) => children.iter().any(|c| evaluate(c, operands)),
        CompiledCondition::All(children) => children.iter().all(|c| evaluate(c, operands)),
        CompiledCondition::Test(relation) => test(relation, operands),
    }
}

fn test(relation: &CompiledRelation, operands: &Operands) -> bool {
    let mut value = operands.get(relation.operand);
    if let Some(modulus) = relation.modulus {
        // Operands are never negative, so the remainder is not either.
        value %= modulus;
    }
    let hit = (!relation.integral || value.fract().is_zero())
        && relation
            .bounds
            .iter()
            .any(|&(low, high)| low <= value && value <= high);
    hit != relation.negated
}

#[cfg(test)]
mod tests {
    use crate::{Operands, Predicate};

    fn check(rule: &str, n: &str) -> bool {
        let predicate = Predicate::from_rule(rule).unwrap();
        predicate.matches(&n.parse::<Operands>().unwrap())
    }

    #[test]
    fn eval_is() {
        assert!(check("n is 1", "1"));
        assert!(check("n is 1", "1.0"));
        assert!(!check("n is 1", "2"));
        assert!(!check("n is 1", "1.5"));
    }

    #[test]
    fn eval_is_not() {
        assert!(!check("n is not 1", "1"));
        assert!(check("n is not 1", "2"));
        assert!(check("n is not 1", "1.5"));
    }

    #[test]
    fn eval_in_requires_integral_value() {
        assert!(check("n in 0..2", "1"));
        assert!(check("n in 0..2", "2.0"));
        assert!(!check("n in 0..2", "1.5"));
        assert!(!check("n in 0..2", "3"));
    }

    #[test]
    fn eval_within_accepts_fractions() {
        assert!(check("n within 0..2", "1.5"));
        assert!(check("n within 0..2", "0"));
        assert!(check("n within 0..2", "2"));
        assert!(!check("n within 0..2", "2.5"));
    }

    #[test]
    fn eval_not_in_and_not_within() {
        assert!(!check("n not in 0..1", "0"));
        assert!(check("n not in 0..1", "0.5"));
        assert!(!check("n not within 0..1", "0.5"));
        assert!(check("n not within 0..1", "1.5"));
    }

    #[test]
    fn eval_modulus_applies_to_operand() {
        assert!(check("n mod 10 in 2..4", "2"));
        assert!(check("n mod 10 in 2..4", "13"));
        assert!(check("n mod 10 in 2..4", "104"));
        assert!(!check("n mod 10 in 2..4", "5"));
        assert!(!check("n mod 10 in 2..4", "14.5"));
        assert!(check("n mod 10 within 2..4", "12.5"));
        assert!(check("i mod 10 is 2", "12.5"));
    }

    #[test]
    fn eval_range_list() {
        for n in ["1", "2", "5", "7", "9"] {
            assert!(check("n in 1..2,5,7..9", n), "{n} should match");
        }
        for n in ["0", "3", "4", "6", "10"] {
            assert!(!check("n in 1..2,5,7..9", n), "{n} should not match");
        }
    }

    #[test]
    fn eval_and_or() {
        assert!(check("n is 1 or n is 2", "2"));
        assert!(!check("n is 1 or n is 2", "3"));
        assert!(check("n is 11 and n mod 10 is 1", "11"));
        assert!(!check("n is 1 and n mod 10 is 1", "11"));
    }

    #[test]
    fn eval_empty_rule() {
        for n in ["0", "1", "1.5", "100000", "0.000"] {
            assert!(check("", n));
        }
    }

    #[test]
    fn eval_fraction_operands() {
        assert!(check("v is 2 and f is 20 and t is 2 and w is 1", "1.20"));
        assert!(check("i is 1 and v is 0", "1"));
        assert!(!check("i is 1 and v is 0", "1.0"));
    }
}
