// Diagnostic and outcome types for spacing resolution
// The per-axis source trace is an explicit enumerated tag so callers can
// log the decision without re-deriving it.

use serde::{Deserialize, Serialize};

use crate::model::Axis;

/// Which fallback tier produced a spacing value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpacingSource {
    /// Explicit value from the run request
    Hint,
    /// Value from `default_resolution` in the config
    ConfigDefault,
    /// Domain extent divided by the default grid count
    Heuristic,
}

/// Per-axis record of which source was selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpacingTrace {
    pub x: SpacingSource,
    pub y: SpacingSource,
    pub z: SpacingSource,
}

impl SpacingTrace {
    pub fn source(&self, axis: Axis) -> SpacingSource {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    pub fn entries(&self) -> [(Axis, SpacingSource); 3] {
        [(Axis::X, self.x), (Axis::Y, self.y), (Axis::Z, self.z)]
    }
}

/// Concrete spacing values; once resolved, never null
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedSpacing {
    pub dx: f64,
    pub dy: f64,
    pub dz: f64,
}

impl ResolvedSpacing {
    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.dx,
            Axis::Y => self.dy,
            Axis::Z => self.dz,
        }
    }

    /// Arithmetic mean of the three spacing values
    pub fn mean(&self) -> f64 {
        (self.dx + self.dy + self.dz) / 3.0
    }
}

/// Fields computed from resolved spacing, grid counts, and domain extents;
/// never directly settable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetadata {
    pub spacing_hint: f64,
    pub domain_size: u64,
    pub resolution_density: f64,
}

/// Complete result of one resolution step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolutionOutcome {
    pub spacing: ResolvedSpacing,
    pub derived: DerivedMetadata,
    pub trace: SpacingTrace,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_entries_preserve_axis_order() {
        let trace = SpacingTrace {
            x: SpacingSource::Hint,
            y: SpacingSource::ConfigDefault,
            z: SpacingSource::Heuristic,
        };
        let entries = trace.entries();
        assert_eq!(entries[0], (Axis::X, SpacingSource::Hint));
        assert_eq!(entries[1], (Axis::Y, SpacingSource::ConfigDefault));
        assert_eq!(entries[2], (Axis::Z, SpacingSource::Heuristic));
    }

    #[test]
    fn spacing_source_serializes_snake_case() {
        let json = serde_json::to_string(&SpacingSource::ConfigDefault)
            .expect("source should serialize");
        assert_eq!(json, "\"config_default\"");
    }

    #[test]
    fn spacing_mean() {
        let spacing = ResolvedSpacing {
            dx: 1.0,
            dy: 2.0,
            dz: 3.0,
        };
        assert_eq!(spacing.mean(), 2.0);
    }
}
