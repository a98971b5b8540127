// Resolution engine - fills missing spacing values per axis and computes
// derived metadata. Pure function of its inputs; the caller decides what to
// do with the per-axis source trace.

use thiserror::Error;
use tracing::debug;

use crate::model::{Axis, BoundingBox, GridDimensions, ResolutionConfig, SpacingSpec};
use crate::resolver::diagnostics::{
    DerivedMetadata, ResolutionOutcome, ResolvedSpacing, SpacingSource, SpacingTrace,
};

/// Fatal resolution failures; the caller must abort the run rather than
/// proceed with partial spacing.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ResolutionError {
    #[error("spacing hint for axis {axis} is not a finite number: {value}")]
    InvalidHint { axis: Axis, value: f64 },

    #[error("no spacing hint or config default for axis {axis}, and no usable grid-count default for heuristic estimation")]
    MissingGridDefault { axis: Axis },

    #[error("bounding box volume is zero; cannot compute resolution density")]
    ZeroVolume,
}

/// Resolve concrete `dx`, `dy`, `dz` values and derived metadata.
///
/// Each axis is resolved independently, in strict priority order: explicit
/// hint, then config default, then heuristic estimation from the domain
/// extent. `grid` carries the authoritative per-run cell counts used for
/// `domain_size`; they are not recomputed from spacing.
pub fn resolve(
    hints: &SpacingSpec,
    config: &ResolutionConfig,
    bounding_box: &BoundingBox,
    grid: &GridDimensions,
) -> Result<ResolutionOutcome, ResolutionError> {
    let mut values = [0.0f64; 3];
    let mut sources = [SpacingSource::Heuristic; 3];

    for (slot, axis) in Axis::ALL.into_iter().enumerate() {
        let (value, source) = resolve_axis(axis, hints, config, bounding_box)?;
        debug!(axis = %axis, source = ?source, value, "resolved spacing");
        values[slot] = value;
        sources[slot] = source;
    }

    let spacing = ResolvedSpacing {
        dx: values[0],
        dy: values[1],
        dz: values[2],
    };
    let trace = SpacingTrace {
        x: sources[0],
        y: sources[1],
        z: sources[2],
    };

    let volume = bounding_box.volume();
    if volume == 0.0 {
        return Err(ResolutionError::ZeroVolume);
    }

    let domain_size = grid.cell_count();
    let derived = DerivedMetadata {
        spacing_hint: spacing.mean(),
        domain_size,
        resolution_density: domain_size as f64 / volume,
    };
    debug!(
        spacing_hint = derived.spacing_hint,
        domain_size = derived.domain_size,
        resolution_density = derived.resolution_density,
        "computed derived metadata"
    );

    Ok(ResolutionOutcome {
        spacing,
        derived,
        trace,
    })
}

fn resolve_axis(
    axis: Axis,
    hints: &SpacingSpec,
    config: &ResolutionConfig,
    bounding_box: &BoundingBox,
) -> Result<(f64, SpacingSource), ResolutionError> {
    if let Some(hint) = hints.get(axis) {
        if !hint.is_finite() {
            return Err(ResolutionError::InvalidHint { axis, value: hint });
        }
        return Ok((hint, SpacingSource::Hint));
    }

    if let Some(value) = config.default_resolution.get(axis) {
        return Ok((value, SpacingSource::ConfigDefault));
    }

    match config.default_grid_dimensions.get(axis) {
        Some(count) if count > 0 => Ok((
            bounding_box.extent(axis) / count as f64,
            SpacingSource::Heuristic,
        )),
        _ => Err(ResolutionError::MissingGridDefault { axis }),
    }
}
