//! Result data types.

use serde::{Deserialize, Serialize};

pub type ResultId = String;

/// Identifies one stored result set: which project it belongs to, when it was
/// produced, and by which solver build.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultManifest {
    pub result_id: ResultId,
    pub project_name: String,
    pub timestamp: String,
    pub solver_version: String,
}

impl ResultManifest {
    /// Manifest stamped with the current UTC time.
    pub fn new(result_id: ResultId, project_name: &str, solver_version: &str) -> Self {
        Self {
            result_id,
            project_name: project_name.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            solver_version: solver_version.to_string(),
        }
    }
}

/// Impedance and short-circuit results folded onto the winding model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpedanceAndScData {
    pub base_mva: f64,
    pub base_temp_c: f64,
    pub r_pu: f64,
    pub x_pu: f64,
    pub z_pu: f64,
    pub induction_tank_t: f64,
    pub induction_leg_t: f64,
    pub total_upper_thrust_n: f64,
    pub total_lower_thrust_n: f64,
    pub segments: Vec<SegmentScData>,
    pub layers: Vec<LayerScData>,
}

/// Axial/radial bounds of the highest-loss region of a conductor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LossRect {
    pub min_z_mm: f64,
    pub max_z_mm: f64,
    pub min_r_mm: f64,
    pub max_r_mm: f64,
}

/// Per-segment short-circuit record, keyed by the external segment number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentScData {
    pub number: u32,
    pub loss_w: f64,
    pub eddy_loss_axial_w: f64,
    pub eddy_loss_radial_w: f64,
    pub force_axial_n: f64,
    pub force_radial_n: f64,
    pub max_loss_rect: LossRect,
}

/// Per-layer short-circuit record, keyed by the external layer number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerScData {
    pub number: u32,
    pub loss_w: f64,
    pub eddy_loss_axial_w: f64,
    pub eddy_loss_radial_w: f64,
    pub force_axial_n: f64,
    pub force_radial_n: f64,
    pub max_loss_rect: LossRect,
}

impl ImpedanceAndScData {
    /// Record for the external segment number, if the solver reported one.
    pub fn segment_data(&self, number: u32) -> Option<&SegmentScData> {
        self.segments.iter().find(|s| s.number == number)
    }

    /// Record for the external layer number, if the solver reported one.
    pub fn layer_data(&self, number: u32) -> Option<&LayerScData> {
        self.layers.iter().find(|l| l.number == number)
    }
}
