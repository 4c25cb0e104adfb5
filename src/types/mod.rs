mod error;
mod expr;
mod operands;
mod predicate;
mod sample;

pub use error::InvalidOperand;
pub use expr::{Condition, Expr, OperandKind, Range, Relation, RelationKind, SetMode, operand};
pub use operands::Operands;
pub use predicate::Predicate;
pub use sample::{Sample, SampleKind};
