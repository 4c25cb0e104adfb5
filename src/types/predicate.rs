use std::fmt;

use super::error::InvalidOperand;
use super::expr::Condition;
use super::operands::Operands;
use crate::compile::CompiledCondition;
use crate::render::{JavaScript, Renderer};

/// A compiled plural rule. Immutable, `Send + Sync`, and cheap to evaluate
/// repeatedly; share it behind `Arc` when several threads need it.
///
/// # Example
///
/// ```
/// use plurule::Predicate;
///
/// let few = Predicate::from_rule("n mod 10 in 2..4 and n mod 100 not in 12..14").unwrap();
/// assert!(few.evaluate(3).unwrap());
/// assert!(few.evaluate(22).unwrap());
/// assert!(!few.evaluate(12).unwrap());
/// assert!(!few.evaluate("2.5").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub(crate) condition: Condition,
    pub(crate) compiled: CompiledCondition,
}

impl Predicate {
    /// Parse rule text and compile it in one step. Trailing sample
    /// annotations are accepted and dropped; use [`parse`](crate::parse) to
    /// keep them.
    ///
    /// # Errors
    ///
    /// Returns [`PluralError::Syntax`](crate::PluralError::Syntax) if the text
    /// is not a valid plural rule.
    pub fn from_rule(rule: &str) -> Result<Self, crate::PluralError> {
        let parsed = crate::parse::parse(rule)?;
        Ok(crate::compile::compile(parsed.condition))
    }

    /// Evaluate the rule: `true` when the number belongs to the category the
    /// rule describes.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidOperand`] if `n` cannot be decomposed into plural
    /// operands (non-finite floats, malformed text).
    pub fn evaluate<N>(&self, n: N) -> Result<bool, InvalidOperand>
    where
        N: TryInto<Operands>,
        InvalidOperand: From<N::Error>,
    {
        let operands = n.try_into()?;
        Ok(self.matches(&operands))
    }

    /// The logical complement of [`evaluate`](Self::evaluate): `true` when
    /// the number falls outside the rule's category.
    ///
    /// # Errors
    ///
    /// Same as [`evaluate`](Self::evaluate).
    pub fn rejects<N>(&self, n: N) -> Result<bool, InvalidOperand>
    where
        N: TryInto<Operands>,
        InvalidOperand: From<N::Error>,
    {
        self.evaluate(n).map(|matched| !matched)
    }

    /// Evaluate against already decomposed operands. Never fails.
    #[must_use]
    pub fn matches(&self, operands: &Operands) -> bool {
        crate::evaluate::evaluate(&self.compiled, operands)
    }

    /// The AST this predicate was compiled from.
    #[must_use]
    pub fn condition(&self) -> &Condition {
        &self.condition
    }

    #[must_use]
    pub fn into_condition(self) -> Condition {
        self.condition
    }

    /// JavaScript source of an equivalent `function (n)`.
    #[must_use]
    pub fn to_source(&self) -> String {
        self.render(&JavaScript)
    }

    /// Render the rule with any back end.
    #[must_use]
    pub fn render(&self, renderer: &impl Renderer) -> String {
        renderer.render(&self.condition)
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.condition)
    }
}
