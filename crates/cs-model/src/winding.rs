//! Windings: the physical conductor structures belonging to terminals.

use cs_core::LayerId;
use serde::{Deserialize, Serialize};

use crate::turndef::TurnDefinition;

/// Winding construction style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindingType {
    Disc,
    Helix,
    Sheet,
    Layer,
    Section,
    MultiStart,
}

/// Minimum/nominal/maximum turn counts (min and max differ from nom when the
/// winding carries taps).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TurnCounts {
    pub min: f64,
    pub nom: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadialSpacer {
    pub thickness_mm: f64,
    pub width_mm: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ducts {
    pub count: u32,
    pub dim_mm: f64,
}

/// Axial gaps inside the electrical height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxialGaps {
    pub center_mm: f64,
    pub bottom_mm: f64,
    pub top_mm: f64,
}

/// A physical winding: the conductor structure of one terminal on one leg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Winding {
    pub winding_type: WindingType,
    pub is_spiral: bool,
    pub is_double_stack: bool,
    pub turns: TurnCounts,
    /// Electrical height [mm].
    pub elec_height_mm: f64,
    pub axial_sections: u32,
    pub radial_spacer: RadialSpacer,
    pub axial_columns: u32,
    pub radial_sections: u32,
    pub radial_insulation_mm: f64,
    pub ducts: Ducts,
    pub radial_supports: u32,
    pub turn_def: TurnDefinition,
    pub axial_gaps: AxialGaps,
    pub bottom_edge_pack_mm: f64,
    /// Coil inner diameter [mm].
    pub coil_id_mm: f64,
    /// Radial overbuild [%].
    pub radial_overbuild_pct: f64,
    pub ground_clearance_mm: f64,
    /// Andersen number of the owning terminal (0 = virtual).
    pub terminal_number: u32,
    /// Geometry: ordered radially, innermost first. Empty until built.
    pub layers: Vec<LayerId>,
}

impl Winding {
    /// Whether min/max turn counts depart from nominal.
    pub fn has_taps(&self) -> bool {
        self.turns.min != self.turns.nom || self.turns.max != self.turns.nom
    }

    pub fn is_multi_start(&self) -> bool {
        self.winding_type == WindingType::MultiStart
    }
}
