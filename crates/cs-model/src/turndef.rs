//! Conductor (turn) geometry: strands, cables, and overall build.

use serde::{Deserialize, Serialize};

/// Insulation shrinkage factor applied to non-CTC strand insulation.
const INSULATION_SHRINKAGE: f64 = 0.8;

/// Conductor cable construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CableType {
    Single,
    Twin,
    /// Continuously transposed cable.
    Ctc,
}

/// Overall axial/radial build of one turn's cable bundle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CableDimensions {
    pub axial_mm: f64,
    pub radial_mm: f64,
}

/// Geometry of the conductor making up one turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnDefinition {
    pub cable_type: CableType,
    /// Bare strand dimensions [mm].
    pub strand_axial_mm: f64,
    pub strand_radial_mm: f64,
    /// Strand count per CTC cable (unused for single/twin).
    pub num_ctc_strands: u32,
    /// Cables stacked per turn in each direction.
    pub num_cables_axial: u32,
    pub num_cables_radial: u32,
    /// Insulation thicknesses [mm].
    pub strand_insulation_mm: f64,
    pub cable_insulation_mm: f64,
    pub internal_insulation_mm: f64,
}

impl TurnDefinition {
    /// Strands per cable for this construction.
    pub fn strands_per_cable(&self) -> u32 {
        match self.cable_type {
            CableType::Single => 1,
            CableType::Twin => 2,
            CableType::Ctc => self.num_ctc_strands,
        }
    }

    /// Total strand count in one turn.
    pub fn strands_per_turn(&self) -> u32 {
        self.strands_per_cable() * self.num_cables_axial * self.num_cables_radial
    }

    /// Overall cable-bundle build of one turn.
    ///
    /// Non-CTC strand insulation shrinks by 0.8 under clamping pressure; CTC
    /// paper does not. CTC stacks its strands two wide axially and
    /// `(n+1)/2` deep radially, Twin stacks two strands axially with the
    /// internal spacer between them.
    pub fn dimensions(&self) -> CableDimensions {
        let (cable_axial, cable_radial) = match self.cable_type {
            CableType::Single => (
                self.strand_axial_mm + INSULATION_SHRINKAGE * self.strand_insulation_mm,
                self.strand_radial_mm + INSULATION_SHRINKAGE * self.strand_insulation_mm,
            ),
            CableType::Twin => (
                2.0 * (self.strand_axial_mm + INSULATION_SHRINKAGE * self.strand_insulation_mm)
                    + self.internal_insulation_mm,
                self.strand_radial_mm + INSULATION_SHRINKAGE * self.strand_insulation_mm,
            ),
            CableType::Ctc => {
                let radial_strands = self.num_ctc_strands.div_ceil(2) as f64;
                (
                    2.0 * self.strand_axial_mm + self.cable_insulation_mm,
                    radial_strands * self.strand_radial_mm + self.cable_insulation_mm,
                )
            }
        };

        CableDimensions {
            axial_mm: self.num_cables_axial as f64 * cable_axial,
            radial_mm: self.num_cables_radial as f64 * cable_radial,
        }
    }
}
