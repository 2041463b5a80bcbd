//! Layers: radial slices of a winding.

use cs_core::{SegmentId, WindingId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConductorMaterial {
    Copper,
    Aluminum,
}

/// A radial slice of a winding, composed of axially-stacked segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub winding: WindingId,
    /// Ordered bottom-to-top along Z. Empty only transiently during builds.
    pub segments: Vec<SegmentId>,
    pub spacer_blocks: u32,
    pub spacer_width_mm: f64,
    pub material: ConductorMaterial,
    /// Current direction, +1 or -1.
    pub current_direction: i8,
    pub parallel_groups: u32,
    /// Andersen number of the owning terminal (0 = virtual).
    pub terminal_number: u32,
    /// Radial conductor build of this layer [mm].
    pub radial_build_mm: f64,
    /// Inner radius measured from the core centerline [mm].
    pub inner_radius_mm: f64,
}
