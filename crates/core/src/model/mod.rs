//! Data model for grid-resolution metadata derivation and validation

pub mod domain;
pub mod rule;
pub mod value;

pub use domain::{
    Axis, BoundingBox, GridDefaults, GridDimensions, ResolutionConfig, RunRequest, SpacingSpec,
};
pub use rule::{Profile, Rule};
pub use value::{Metadata, MetadataValue};
