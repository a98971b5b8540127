// Metadata enrichment - writes resolution results and domain inputs into the
// metadata tree under the key paths that validation profiles reference.

use tracing::debug;

use crate::model::{BoundingBox, GridDimensions, Metadata};
use crate::resolver::diagnostics::ResolutionOutcome;

/// Write resolved spacing and derived fields into the metadata tree.
///
/// Enrichment happens exactly once per run, between resolution and profile
/// evaluation.
pub fn enrich(metadata: &mut Metadata, outcome: &ResolutionOutcome) {
    metadata.insert_path("resolution.dx", outcome.spacing.dx);
    metadata.insert_path("resolution.dy", outcome.spacing.dy);
    metadata.insert_path("resolution.dz", outcome.spacing.dz);
    metadata.insert_path("spacing_hint", outcome.derived.spacing_hint);
    metadata.insert_path("domain_size", outcome.derived.domain_size);
    metadata.insert_path("resolution_density", outcome.derived.resolution_density);
    debug!("metadata enriched with resolution results");
}

/// Seed the metadata tree with domain bounds and grid counts so profiles can
/// reference `domain_definition.*` and `grid_dimensions.*`.
pub fn seed_domain(metadata: &mut Metadata, bounding_box: &BoundingBox, grid: &GridDimensions) {
    metadata.insert_path("domain_definition.min_x", bounding_box.min_x);
    metadata.insert_path("domain_definition.max_x", bounding_box.max_x);
    metadata.insert_path("domain_definition.min_y", bounding_box.min_y);
    metadata.insert_path("domain_definition.max_y", bounding_box.max_y);
    metadata.insert_path("domain_definition.min_z", bounding_box.min_z);
    metadata.insert_path("domain_definition.max_z", bounding_box.max_z);
    metadata.insert_path("grid_dimensions.nx", grid.nx);
    metadata.insert_path("grid_dimensions.ny", grid.ny);
    metadata.insert_path("grid_dimensions.nz", grid.nz);
}
