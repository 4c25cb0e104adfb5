use std::convert::Infallible;

use thiserror::Error;

/// A number that cannot be decomposed into plural operands.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidOperand {
    #[error("operand is not finite: {0}")]
    NonFinite(f64),

    #[error("operand '{0}' exceeds decimal precision")]
    OutOfRange(String),

    #[error("malformed number '{0}'")]
    Malformed(String),
}

impl From<Infallible> for InvalidOperand {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
