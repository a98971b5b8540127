//! Profile evaluation against enriched metadata
//!
//! Rules are evaluated independently and unconditionally, in profile order.
//! A rule that cannot be evaluated is recorded as an evaluation error for
//! that rule alone; the rest of the profile still runs, so one run always
//! yields the complete picture.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{Metadata, MetadataValue, Profile, Rule};
use crate::rules::ast::{CompOp, Operand};
use crate::rules::error::EvaluationError;
use crate::rules::parser::parse_condition;

/// A rule whose condition evaluated true
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub rule_index: usize,
    pub message: String,
}

/// A rule that could not be evaluated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleError {
    pub rule_index: usize,
    pub error: EvaluationError,
}

/// Complete result of one profile run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub violations: Vec<Violation>,
    pub errors: Vec<RuleError>,
}

impl EvaluationReport {
    pub fn passed(&self) -> bool {
        self.violations.is_empty() && self.errors.is_empty()
    }

    /// Violation messages in profile order
    pub fn messages(&self) -> Vec<&str> {
        self.violations
            .iter()
            .map(|violation| violation.message.as_str())
            .collect()
    }
}

/// Evaluate every rule of `profile` against `metadata`.
///
/// Never short-circuits: the returned report carries all violations and all
/// per-rule evaluation errors, each tagged with the rule's position in the
/// profile.
pub fn evaluate(metadata: &Metadata, profile: &Profile) -> EvaluationReport {
    let mut report = EvaluationReport::default();

    for (rule_index, rule) in profile.rules.iter().enumerate() {
        match evaluate_rule(metadata, rule) {
            Ok(true) => {
                debug!(rule_index, condition = %rule.condition, "rule violated");
                report.violations.push(Violation {
                    rule_index,
                    message: rule.message.clone(),
                });
            }
            Ok(false) => {
                debug!(rule_index, condition = %rule.condition, "rule passed");
            }
            Err(error) => {
                debug!(rule_index, %error, "rule evaluation failed");
                report.errors.push(RuleError { rule_index, error });
            }
        }
    }

    report
}

/// Evaluate a single rule's condition. `Ok(true)` means the rule fires and
/// its message is a violation.
pub fn evaluate_rule(metadata: &Metadata, rule: &Rule) -> Result<bool, EvaluationError> {
    let expr = parse_condition(&rule.condition)?;

    let left = metadata
        .lookup(&expr.left)
        .ok_or_else(|| EvaluationError::UnresolvedPath {
            rule: rule.condition.clone(),
            path: expr.left.clone(),
        })?;

    let right = match &expr.right {
        Operand::Path(path) => metadata
            .lookup(path)
            .ok_or_else(|| EvaluationError::UnresolvedPath {
                rule: rule.condition.clone(),
                path: path.clone(),
            })?
            .clone(),
        Operand::Literal(literal) => literal.to_metadata_value(),
    };

    compare(expr.op, left, &right)
}

/// Compare two metadata values using their natural ordering.
///
/// Numbers support all six operators. Strings, booleans, and null are
/// equality-only. Mappings never compare. Mixed scalar types are unequal
/// under `==`/`!=` and unordered otherwise.
fn compare(
    op: CompOp,
    left: &MetadataValue,
    right: &MetadataValue,
) -> Result<bool, EvaluationError> {
    use MetadataValue::{Bool, Map, Null, Number, String};

    match (left, right) {
        (Number(a), Number(b)) => Ok(match op {
            CompOp::Equal => a == b,
            CompOp::NotEqual => a != b,
            CompOp::LessThan => a < b,
            CompOp::LessThanOrEqual => a <= b,
            CompOp::GreaterThan => a > b,
            CompOp::GreaterThanOrEqual => a >= b,
        }),
        (Map(_), _) | (_, Map(_)) => Err(unsupported(op, left, right)),
        (String(a), String(b)) => equality_only(op, a == b, left, right),
        (Bool(a), Bool(b)) => equality_only(op, a == b, left, right),
        (Null, Null) => equality_only(op, true, left, right),
        _ if op.is_ordering() => Err(unsupported(op, left, right)),
        _ => Ok(op == CompOp::NotEqual),
    }
}

fn equality_only(
    op: CompOp,
    equal: bool,
    left: &MetadataValue,
    right: &MetadataValue,
) -> Result<bool, EvaluationError> {
    match op {
        CompOp::Equal => Ok(equal),
        CompOp::NotEqual => Ok(!equal),
        _ => Err(unsupported(op, left, right)),
    }
}

fn unsupported(op: CompOp, left: &MetadataValue, right: &MetadataValue) -> EvaluationError {
    EvaluationError::UnsupportedComparison {
        op,
        left: left.type_name().to_string(),
        right: right.type_name().to_string(),
    }
}
