//! Declarative validation rules and profiles

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// A single declarative rule: when `if` evaluates true against the metadata,
/// the `raise` message is reported as a violation (verbatim, no
/// interpolation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    #[serde(rename = "if")]
    pub condition: String,
    #[serde(rename = "raise")]
    pub message: String,
}

impl Rule {
    pub fn new(condition: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            condition: condition.into(),
            message: message.into(),
        }
    }
}

/// An ordered sequence of rules, loaded once per validation run.
///
/// A profile with zero rules is valid and always passes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub rules: Vec<Rule>,
}

impl Profile {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Built-in sanity rules used when no profile is supplied
    pub fn fallback() -> &'static Profile {
        lazy_static! {
            static ref FALLBACK: Profile = Profile::new(vec![
                Rule::new("resolution.dx == null", "Missing dx in resolution"),
                Rule::new("resolution.dy == null", "Missing dy in resolution"),
                Rule::new("resolution.dz == null", "Missing dz in resolution"),
                Rule::new(
                    "domain_definition.max_x < domain_definition.min_x",
                    "Inverted domain bounds on x axis",
                ),
                Rule::new(
                    "domain_definition.max_y < domain_definition.min_y",
                    "Inverted domain bounds on y axis",
                ),
                Rule::new(
                    "domain_definition.max_z < domain_definition.min_z",
                    "Inverted domain bounds on z axis",
                ),
            ]);
        }
        &FALLBACK
    }
}
