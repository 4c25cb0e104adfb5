use std::fmt;
use std::num::NonZeroU64;
use std::ops::Not;

/// The CLDR operands a plural rule can test.
///
/// | kind | meaning                                                        |
/// |------|----------------------------------------------------------------|
/// | `n`  | absolute value of the number                                   |
/// | `i`  | integer digits of `n`                                          |
/// | `v`  | number of visible fraction digits, with trailing zeros         |
/// | `w`  | number of visible fraction digits, without trailing zeros      |
/// | `f`  | visible fraction digits as an integer, with trailing zeros     |
/// | `t`  | visible fraction digits as an integer, without trailing zeros  |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OperandKind {
    N,
    I,
    V,
    W,
    F,
    T,
}

impl OperandKind {
    pub const ALL: [OperandKind; 6] = [
        OperandKind::N,
        OperandKind::I,
        OperandKind::V,
        OperandKind::W,
        OperandKind::F,
        OperandKind::T,
    ];

    /// The operand letter used in rule text.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            OperandKind::N => 'n',
            OperandKind::I => 'i',
            OperandKind::V => 'v',
            OperandKind::W => 'w',
            OperandKind::F => 'f',
            OperandKind::T => 't',
        }
    }

    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.symbol() == symbol)
    }
}

/// Left-hand side of a relation: an operand, optionally reduced by a modulus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Expr {
    pub operand: OperandKind,
    pub modulus: Option<NonZeroU64>,
}

/// Inclusive integer range. A single value is a range with `low == high`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RangeBounds")
)]
pub struct Range {
    low: u64,
    high: u64,
}

/// Unchecked wire form of [`Range`]; deserialization goes through
/// [`Range::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RangeBounds {
    low: u64,
    high: u64,
}

#[cfg(feature = "serde")]
impl TryFrom<RangeBounds> for Range {
    type Error = String;

    fn try_from(bounds: RangeBounds) -> Result<Self, Self::Error> {
        Range::new(bounds.low, bounds.high)
            .ok_or_else(|| format!("range {}..{} is inverted", bounds.low, bounds.high))
    }
}

impl Range {
    /// Returns `None` when `low > high`.
    #[must_use]
    pub fn new(low: u64, high: u64) -> Option<Self> {
        (low <= high).then_some(Self { low, high })
    }

    #[must_use]
    pub fn single(value: u64) -> Self {
        Self {
            low: value,
            high: value,
        }
    }

    #[must_use]
    pub fn low(&self) -> u64 {
        self.low
    }

    #[must_use]
    pub fn high(&self) -> u64 {
        self.high
    }

    #[must_use]
    pub fn is_single(&self) -> bool {
        self.low == self.high
    }
}

impl From<u64> for Range {
    fn from(value: u64) -> Self {
        Range::single(value)
    }
}

/// How a set relation treats non-integral values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SetMode {
    /// `in` (and `=`): the value must be integral and inside a range.
    In,
    /// `within`: the value only has to lie between the bounds.
    Within,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RelationKind {
    /// `is value`. The range list holds exactly one single-value range.
    Is,
    InSet(SetMode),
}

/// A single comparison between an [`Expr`] and a list of ranges.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Relation {
    pub expr: Expr,
    pub negated: bool,
    pub kind: RelationKind,
    pub ranges: Vec<Range>,
}

/// Parsed plural rule condition.
///
/// The parser only produces `Or` nodes of `And`/`Relation` children and `And`
/// nodes of `Relation` children; single-child nodes are collapsed. The empty
/// rule parses to `And(vec![])`, which is always true.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Condition {
    Or(Vec<Condition>),
    And(Vec<Condition>),
    Relation(Relation),
}

impl Expr {
    #[must_use]
    pub fn modulo(self, modulus: NonZeroU64) -> Expr {
        Expr {
            modulus: Some(modulus),
            ..self
        }
    }

    #[must_use]
    pub fn is(self, value: u64) -> Condition {
        self.relation(false, RelationKind::Is, vec![Range::single(value)])
    }

    #[must_use]
    pub fn is_not(self, value: u64) -> Condition {
        self.relation(true, RelationKind::Is, vec![Range::single(value)])
    }

    #[must_use]
    pub fn in_ranges(self, ranges: impl IntoIterator<Item = Range>) -> Condition {
        self.set(false, SetMode::In, ranges)
    }

    #[must_use]
    pub fn not_in(self, ranges: impl IntoIterator<Item = Range>) -> Condition {
        self.set(true, SetMode::In, ranges)
    }

    #[must_use]
    pub fn within(self, ranges: impl IntoIterator<Item = Range>) -> Condition {
        self.set(false, SetMode::Within, ranges)
    }

    #[must_use]
    pub fn not_within(self, ranges: impl IntoIterator<Item = Range>) -> Condition {
        self.set(true, SetMode::Within, ranges)
    }

    fn set(
        self,
        negated: bool,
        mode: SetMode,
        ranges: impl IntoIterator<Item = Range>,
    ) -> Condition {
        self.relation(negated, RelationKind::InSet(mode), ranges.into_iter().collect())
    }

    fn relation(self, negated: bool, kind: RelationKind, ranges: Vec<Range>) -> Condition {
        Condition::Relation(Relation {
            expr: self,
            negated,
            kind,
            ranges,
        })
    }
}

impl Condition {
    /// The empty condition. Matches every number.
    #[must_use]
    pub fn always() -> Condition {
        Condition::And(Vec::new())
    }

    /// Conjunction. An `or` operand is distributed so the result stays
    /// expressible in rule text (`(a or b) and c` becomes `a and c or b and c`).
    #[must_use]
    pub fn and(self, other: Condition) -> Condition {
        match (self, other) {
            (Condition::Or(alternatives), rhs) => Condition::Or(
                alternatives
                    .into_iter()
                    .map(|alt| alt.and(rhs.clone()))
                    .collect(),
            ),
            (lhs, Condition::Or(alternatives)) => Condition::Or(
                alternatives
                    .into_iter()
                    .map(|alt| lhs.clone().and(alt))
                    .collect(),
            ),
            (lhs, rhs) => {
                let mut children = lhs.into_conjuncts();
                children.extend(rhs.into_conjuncts());
                collapse(children, Condition::And)
            }
        }
    }

    #[must_use]
    pub fn or(self, other: Condition) -> Condition {
        let mut children = self.into_disjuncts();
        children.extend(other.into_disjuncts());
        collapse(children, Condition::Or)
    }

    /// Number of relations in the tree.
    #[must_use]
    pub fn relation_count(&self) -> usize {
        match self {
            Condition::Or(children) | Condition::And(children) => {
                children.iter().map(Condition::relation_count).sum()
            }
            Condition::Relation(_) => 1,
        }
    }

    fn into_conjuncts(self) -> Vec<Condition> {
        match self {
            Condition::And(children) => children,
            other => vec![other],
        }
    }

    fn into_disjuncts(self) -> Vec<Condition> {
        match self {
            Condition::Or(children) => children,
            other => vec![other],
        }
    }
}

fn collapse(mut children: Vec<Condition>, wrap: fn(Vec<Condition>) -> Condition) -> Condition {
    if children.len() == 1 {
        children.remove(0)
    } else {
        wrap(children)
    }
}

impl Not for Relation {
    type Output = Relation;

    fn not(self) -> Relation {
        Relation {
            negated: !self.negated,
            ..self
        }
    }
}

impl From<Relation> for Condition {
    fn from(relation: Relation) -> Self {
        Condition::Relation(relation)
    }
}

impl fmt::Display for OperandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.modulus {
            Some(m) => write!(f, "{} mod {m}", self.operand),
            None => write!(f, "{}", self.operand),
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single() {
            write!(f, "{}", self.low)
        } else {
            write!(f, "{}..{}", self.low, self.high)
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ranges.is_empty() {
            use crate::render::{Renderer, RuleText};
            return f.write_str(&RuleText.render(&Condition::Relation(self.clone())));
        }
        let not = if self.negated { " not" } else { "" };
        let ranges = self
            .ranges
            .iter()
            .map(Range::to_string)
            .collect::<Vec<_>>()
            .join(",");
        match self.kind {
            RelationKind::Is => write!(f, "{} is{not} {ranges}", self.expr),
            RelationKind::InSet(SetMode::In) => write!(f, "{}{not} in {ranges}", self.expr),
            RelationKind::InSet(SetMode::Within) => {
                write!(f, "{}{not} within {ranges}", self.expr)
            }
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use crate::render::{Renderer, RuleText};
        f.write_str(&RuleText.render(self))
    }
}

/// Start an expression over a single operand.
#[must_use]
pub fn operand(kind: OperandKind) -> Expr {
    Expr {
        operand: kind,
        modulus: None,
    }
}
