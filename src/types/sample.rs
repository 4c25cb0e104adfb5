use std::fmt;

use super::operands::Operands;

/// Which annotation a sample was listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleKind {
    /// `@integer`
    Integer,
    /// `@decimal`
    Decimal,
}

/// One entry of a CLDR sample list: a value or a `low~high` span.
///
/// Spans are not enumerated; only their endpoints are known values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pub kind: SampleKind,
    pub low: Operands,
    pub high: Option<Operands>,
}

impl Sample {
    /// The concrete values named by this sample.
    pub fn endpoints(&self) -> impl Iterator<Item = &Operands> {
        std::iter::once(&self.low).chain(self.high.as_ref())
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.high {
            Some(high) => write!(f, "{}~{high}", self.low),
            None => write!(f, "{}", self.low),
        }
    }
}
