//! Segments: the smallest modeled conductor regions.

use cs_core::LayerId;
use serde::{Deserialize, Serialize};

/// Tap role of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TapType {
    None,
    Positive,
    Negative,
}

/// An axial span of conductor within a layer.
///
/// Activation is expressed through `active_turns`: a fully deactivated
/// segment carries zero active turns, never a separate flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub layer: LayerId,
    pub tap: TapType,
    pub strand_axial_mm: f64,
    pub strand_radial_mm: f64,
    pub strands_per_layer: u32,
    pub strands_per_turn: u32,
    pub active_turns: f64,
    pub total_turns: f64,
    pub min_z_mm: f64,
    pub max_z_mm: f64,
}

impl Segment {
    pub fn is_active(&self) -> bool {
        self.active_turns != 0.0
    }

    pub fn height_mm(&self) -> f64 {
        self.max_z_mm - self.min_z_mm
    }
}
