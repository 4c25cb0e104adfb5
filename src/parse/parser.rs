use crate::{Condition, Operands, Predicate, Sample};

/// The result of parsing plural rule text.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRule {
    pub condition: Condition,
    /// `@integer` / `@decimal` samples, in source order.
    pub samples: Vec<Sample>,
}

impl ParsedRule {
    /// Sample values the predicate does not match. Empty when the rule's own
    /// samples agree with its condition.
    #[must_use]
    pub fn failing_samples<'a>(&'a self, predicate: &Predicate) -> Vec<&'a Operands> {
        self.samples
            .iter()
            .flat_map(Sample::endpoints)
            .filter(|operands| !predicate.matches(operands))
            .collect()
    }
}
