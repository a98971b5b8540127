//! Prioritized fallback resolution of grid spacing
//!
//! Given possibly-missing spacing hints, configured defaults, and domain
//! extents, produces concrete `dx`/`dy`/`dz` values, derived metadata, and a
//! per-axis trace of which fallback tier supplied each value.

pub mod diagnostics;
pub mod engine;
pub mod enrich;

pub use diagnostics::{
    DerivedMetadata, ResolutionOutcome, ResolvedSpacing, SpacingSource, SpacingTrace,
};
pub use engine::{resolve, ResolutionError};
pub use enrich::{enrich, seed_domain};
