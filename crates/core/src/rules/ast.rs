//! Parsed form of a rule condition
//!
//! The grammar is deliberately tiny: one relational comparison between a
//! key path and a path-or-literal operand. The parser produces this tagged
//! structure rather than a general expression tree so the rule surface stays
//! auditable and bounded.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::MetadataValue;

/// A parsed `if` condition: `<left_path> <op> <right_operand>`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleExpr {
    pub left: String,
    pub op: CompOp,
    pub right: Operand,
}

/// Relational comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompOp {
    Equal,
    NotEqual,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
}

impl CompOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompOp::Equal => "==",
            CompOp::NotEqual => "!=",
            CompOp::LessThan => "<",
            CompOp::LessThanOrEqual => "<=",
            CompOp::GreaterThan => ">",
            CompOp::GreaterThanOrEqual => ">=",
        }
    }

    /// True for `<`, `<=`, `>`, `>=` - the operators that require a numeric
    /// ordering on both operands.
    pub fn is_ordering(&self) -> bool {
        !matches!(self, CompOp::Equal | CompOp::NotEqual)
    }
}

impl fmt::Display for CompOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Right-hand side of a comparison: another key path or a literal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Operand {
    Path(String),
    Literal(LiteralValue),
}

/// Literal values expressible in a rule condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LiteralValue {
    Number(f64),
    String(String),
    Bool(bool),
    Null,
}

impl LiteralValue {
    pub fn to_metadata_value(&self) -> MetadataValue {
        match self {
            LiteralValue::Number(value) => MetadataValue::Number(*value),
            LiteralValue::String(value) => MetadataValue::String(value.clone()),
            LiteralValue::Bool(value) => MetadataValue::Bool(*value),
            LiteralValue::Null => MetadataValue::Null,
        }
    }
}
