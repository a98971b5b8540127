pub mod error;
pub mod loader;
pub mod model;
pub mod pipeline;
pub mod resolver;
pub mod rules;

pub use error::{CoreError, Result};
pub use loader::LoaderError;
pub use pipeline::{execute_run, RunReport};
pub use model::{
    Axis, BoundingBox, GridDefaults, GridDimensions, Metadata, MetadataValue, Profile,
    ResolutionConfig, Rule, RunRequest, SpacingSpec,
};
pub use resolver::{
    enrich, resolve, seed_domain, DerivedMetadata, ResolutionError, ResolutionOutcome,
    ResolvedSpacing, SpacingSource, SpacingTrace,
};
pub use rules::{evaluate, EvaluationError, EvaluationReport, RuleError, Violation};
