//! Domain geometry and resolution input structures

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::Metadata;

/// Spatial axis of the simulation domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }

    /// Spacing key for this axis (`dx`, `dy`, `dz`)
    pub fn spacing_key(&self) -> &'static str {
        match self {
            Axis::X => "dx",
            Axis::Y => "dy",
            Axis::Z => "dz",
        }
    }

    /// Grid-count key for this axis (`nx`, `ny`, `nz`)
    pub fn count_key(&self) -> &'static str {
        match self {
            Axis::X => "nx",
            Axis::Y => "ny",
            Axis::Z => "nz",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Min/max extents of the simulation domain along each axis.
///
/// `max >= min` is NOT assumed here; inverted bounds are exactly what
/// validation profiles are meant to catch downstream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub min_z: f64,
    pub max_z: f64,
}

impl BoundingBox {
    pub fn extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.max_x - self.min_x,
            Axis::Y => self.max_y - self.min_y,
            Axis::Z => self.max_z - self.min_z,
        }
    }

    pub fn volume(&self) -> f64 {
        Axis::ALL.iter().map(|axis| self.extent(*axis)).product()
    }
}

/// Optional per-axis spacing values.
///
/// Used both for caller-supplied hints in a [`RunRequest`] and for the
/// configured defaults in [`ResolutionConfig`]; absent and explicit-null
/// entries are equivalent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SpacingSpec {
    #[serde(default)]
    pub dx: Option<f64>,
    #[serde(default)]
    pub dy: Option<f64>,
    #[serde(default)]
    pub dz: Option<f64>,
}

impl SpacingSpec {
    pub fn get(&self, axis: Axis) -> Option<f64> {
        match axis {
            Axis::X => self.dx,
            Axis::Y => self.dy,
            Axis::Z => self.dz,
        }
    }
}

/// Optional per-axis grid-count defaults used by heuristic estimation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDefaults {
    #[serde(default)]
    pub nx: Option<u64>,
    #[serde(default)]
    pub ny: Option<u64>,
    #[serde(default)]
    pub nz: Option<u64>,
}

impl GridDefaults {
    pub fn get(&self, axis: Axis) -> Option<u64> {
        match axis {
            Axis::X => self.nx,
            Axis::Y => self.ny,
            Axis::Z => self.nz,
        }
    }
}

/// Resolution configuration supplied by the external config source
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolutionConfig {
    #[serde(default)]
    pub default_resolution: SpacingSpec,
    #[serde(default)]
    pub default_grid_dimensions: GridDefaults,
}

/// Authoritative per-run grid counts, supplied by the external metadata
/// source and never recomputed from spacing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDimensions {
    pub nx: u64,
    pub ny: u64,
    pub nz: u64,
}

impl GridDimensions {
    pub fn count(&self, axis: Axis) -> u64 {
        match axis {
            Axis::X => self.nx,
            Axis::Y => self.ny,
            Axis::Z => self.nz,
        }
    }

    /// Total cell count `nx * ny * nz`
    pub fn cell_count(&self) -> u64 {
        self.nx * self.ny * self.nz
    }
}

/// One run's worth of pre-parsed resolution input
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunRequest {
    #[serde(default)]
    pub spacing: SpacingSpec,
    pub bounding_box: BoundingBox,
    pub grid_dimensions: GridDimensions,
    #[serde(default)]
    pub metadata: Metadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extent_and_volume() {
        let bbox = BoundingBox {
            min_x: 0.0,
            max_x: 100.0,
            min_y: 0.0,
            max_y: 200.0,
            min_z: 0.0,
            max_z: 300.0,
        };
        assert_eq!(bbox.extent(Axis::X), 100.0);
        assert_eq!(bbox.extent(Axis::Y), 200.0);
        assert_eq!(bbox.extent(Axis::Z), 300.0);
        assert_eq!(bbox.volume(), 100.0 * 200.0 * 300.0);
    }

    #[test]
    fn spacing_spec_null_and_absent_are_equivalent() {
        let with_null: SpacingSpec =
            serde_yaml::from_str("dx: 0.5\ndy: null\n").expect("spacing should deserialize");
        assert_eq!(with_null.get(Axis::X), Some(0.5));
        assert_eq!(with_null.get(Axis::Y), None);
        assert_eq!(with_null.get(Axis::Z), None);
    }

    #[test]
    fn grid_dimensions_cell_count() {
        let grid = GridDimensions {
            nx: 10,
            ny: 20,
            nz: 30,
        };
        assert_eq!(grid.cell_count(), 6000);
        assert_eq!(grid.count(Axis::Y), 20);
    }
}
