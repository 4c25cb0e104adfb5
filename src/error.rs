use thiserror::Error;

use crate::InvalidOperand;
use crate::parse::SyntaxError;

/// Unified error type covering parsing and evaluation.
///
/// Returned by convenience methods like
/// [`Predicate::from_rule()`](crate::Predicate::from_rule).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PluralError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    InvalidOperand(#[from] InvalidOperand),
}
