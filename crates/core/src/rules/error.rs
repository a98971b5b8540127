//! Error types for rule parsing and evaluation
//!
//! Every variant here is scoped to a single rule: the evaluator records it
//! and moves on to the next rule in the profile.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rules::ast::CompOp;

#[derive(Debug, Error, Clone, PartialEq, Serialize, Deserialize)]
pub enum EvaluationError {
    #[error("malformed rule condition '{expression}': {reason}")]
    MalformedRule { expression: String, reason: String },

    #[error("rule '{rule}' references path '{path}' which is absent from metadata")]
    UnresolvedPath { rule: String, path: String },

    #[error("operator '{op}' is not supported between {left} and {right} operands")]
    UnsupportedComparison {
        op: CompOp,
        left: String,
        right: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unresolved_path_names_rule_and_path() {
        let error = EvaluationError::UnresolvedPath {
            rule: "resolution.dx == null".to_string(),
            path: "resolution.dx".to_string(),
        };
        let rendered = error.to_string();
        assert!(rendered.contains("resolution.dx == null"));
        assert!(rendered.contains("absent from metadata"));
    }

    #[test]
    fn unsupported_comparison_names_operator_and_types() {
        let error = EvaluationError::UnsupportedComparison {
            op: CompOp::LessThan,
            left: "string".to_string(),
            right: "string".to_string(),
        };
        let rendered = error.to_string();
        assert!(rendered.contains("'<'"));
        assert!(rendered.contains("string"));
    }
}
