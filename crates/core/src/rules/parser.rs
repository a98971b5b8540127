//! Rule condition parser built on pest

use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;

use crate::rules::ast::{CompOp, LiteralValue, Operand, RuleExpr};
use crate::rules::error::EvaluationError;

#[derive(Parser)]
#[grammar = "rules/grammar.pest"]
struct ConditionParser;

/// Parse a rule condition string into its tagged comparison form.
///
/// Anything that is not exactly `<key_path> <op> <operand>` is rejected with
/// [`EvaluationError::MalformedRule`].
pub fn parse_condition(input: &str) -> Result<RuleExpr, EvaluationError> {
    let mut pairs = ConditionParser::parse(Rule::condition, input).map_err(|error| {
        let (line, column) = match error.line_col {
            pest::error::LineColLocation::Pos((line, col)) => (line, col),
            pest::error::LineColLocation::Span((line, col), _) => (line, col),
        };
        malformed(
            input,
            format!("syntax error at line {line}, column {column}: {}", error.variant),
        )
    })?;

    let condition = pairs
        .next()
        .ok_or_else(|| malformed(input, "empty parse result".to_string()))?;

    let mut inner = condition.into_inner();
    let left = inner
        .next()
        .filter(|pair| pair.as_rule() == Rule::key_path)
        .ok_or_else(|| malformed(input, "missing left-hand key path".to_string()))?;
    let comparator = inner
        .next()
        .filter(|pair| pair.as_rule() == Rule::comparator)
        .ok_or_else(|| malformed(input, "missing comparison operator".to_string()))?;
    let operand = inner
        .next()
        .filter(|pair| pair.as_rule() == Rule::operand)
        .ok_or_else(|| malformed(input, "missing right-hand operand".to_string()))?;

    Ok(RuleExpr {
        left: left.as_str().to_string(),
        op: parse_comparator(input, comparator)?,
        right: parse_operand(input, operand)?,
    })
}

fn parse_comparator(input: &str, pair: Pair<Rule>) -> Result<CompOp, EvaluationError> {
    match pair.as_str() {
        "==" => Ok(CompOp::Equal),
        "!=" => Ok(CompOp::NotEqual),
        "<" => Ok(CompOp::LessThan),
        "<=" => Ok(CompOp::LessThanOrEqual),
        ">" => Ok(CompOp::GreaterThan),
        ">=" => Ok(CompOp::GreaterThanOrEqual),
        other => Err(malformed(input, format!("unknown operator '{other}'"))),
    }
}

fn parse_operand(input: &str, pair: Pair<Rule>) -> Result<Operand, EvaluationError> {
    let inner = pair
        .into_inner()
        .next()
        .ok_or_else(|| malformed(input, "empty operand".to_string()))?;
    match inner.as_rule() {
        Rule::key_path => Ok(Operand::Path(inner.as_str().to_string())),
        Rule::literal => Ok(Operand::Literal(parse_literal(input, inner)?)),
        other => Err(malformed(input, format!("unexpected operand rule {other:?}"))),
    }
}

fn parse_literal(input: &str, pair: Pair<Rule>) -> Result<LiteralValue, EvaluationError> {
    let inner = pair
        .into_inner()
        .next()
        .ok_or_else(|| malformed(input, "empty literal".to_string()))?;
    match inner.as_rule() {
        Rule::null => Ok(LiteralValue::Null),
        Rule::boolean => Ok(LiteralValue::Bool(
            inner.as_str().eq_ignore_ascii_case("true"),
        )),
        Rule::number => inner
            .as_str()
            .parse::<f64>()
            .map(LiteralValue::Number)
            .map_err(|error| {
                malformed(input, format!("invalid number '{}': {error}", inner.as_str()))
            }),
        Rule::string => {
            let content = inner
                .into_inner()
                .next()
                .map(|quoted| quoted.as_str().to_string())
                .unwrap_or_default();
            Ok(LiteralValue::String(content))
        }
        other => Err(malformed(input, format!("unexpected literal rule {other:?}"))),
    }
}

fn malformed(expression: &str, reason: String) -> EvaluationError {
    EvaluationError::MalformedRule {
        expression: expression.to_string(),
        reason,
    }
}
