//! One-call orchestration of a full run: resolve spacing, seed and enrich
//! the metadata tree, then evaluate the profile.
//!
//! Resolution failures abort the run; evaluation findings never do - they
//! come back in the report for the caller to act on.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{Metadata, Profile, ResolutionConfig, RunRequest};
use crate::resolver::{enrich, resolve, seed_domain, ResolutionOutcome};
use crate::rules::{evaluate, EvaluationReport};

/// Everything a caller needs from one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub outcome: ResolutionOutcome,
    pub metadata: Metadata,
    pub evaluation: EvaluationReport,
}

impl RunReport {
    pub fn passed(&self) -> bool {
        self.evaluation.passed()
    }
}

pub fn execute_run(
    request: &RunRequest,
    config: &ResolutionConfig,
    profile: &Profile,
) -> Result<RunReport> {
    let outcome = resolve(
        &request.spacing,
        config,
        &request.bounding_box,
        &request.grid_dimensions,
    )?;

    let mut metadata = request.metadata.clone();
    seed_domain(&mut metadata, &request.bounding_box, &request.grid_dimensions);
    enrich(&mut metadata, &outcome);

    let evaluation = evaluate(&metadata, profile);
    Ok(RunReport {
        outcome,
        metadata,
        evaluation,
    })
}
