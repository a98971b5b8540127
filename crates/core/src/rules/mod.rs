//! Declarative rule evaluation over metadata
//!
//! A profile is an ordered list of `{if, raise}` rules. Each `if` is a single
//! relational comparison parsed by a fixed pest grammar; each `raise` message
//! is reported verbatim when the condition holds.

pub mod ast;
pub mod error;
pub mod evaluator;
pub mod parser;

pub use ast::{CompOp, LiteralValue, Operand, RuleExpr};
pub use error::EvaluationError;
pub use evaluator::{evaluate, evaluate_rule, EvaluationReport, RuleError, Violation};
pub use parser::parse_condition;
