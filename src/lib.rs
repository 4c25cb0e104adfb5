//! Compile CLDR plural rules into executable predicates.
//!
//! Rule text is parsed into a [`Condition`] tree, which [`compile`] turns into
//! a [`Predicate`] that can be evaluated against any number:
//!
//! ```
//! use plurule::{compile, parse};
//!
//! let parsed = parse("i = 1 and v = 0 @integer 1").unwrap();
//! let one = compile(parsed.condition);
//!
//! assert!(one.evaluate(1).unwrap());
//! assert!(!one.evaluate("1.0").unwrap());
//! assert!(!one.evaluate(2).unwrap());
//! ```

mod compile;
mod error;
mod evaluate;
mod parse;
pub mod render;
mod types;

pub use compile::compile;
pub use error::PluralError;
pub use parse::{ParsedRule, SyntaxError, parse};
pub use render::{JavaScript, Renderer, RuleText};
pub use types::{
    Condition, Expr, InvalidOperand, OperandKind, Operands, Predicate, Range, Relation,
    RelationKind, Sample, SampleKind, SetMode, operand,
};
