//! Folding an external field solution onto the model.
//!
//! The electromagnetic solver is outside this workspace; it hands back an
//! opaque bundle of transformer-level scalars plus flat per-segment and
//! per-layer rows. [`fold`] turns that into [`ImpedanceAndScData`], the shape
//! the rest of the workspace queries.

use crate::types::{ImpedanceAndScData, LayerScData, SegmentScData};

/// Raw solver output, as delivered.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSolution {
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

/// Scalars are copied verbatim; the per-segment/per-layer rows keep the
/// solver's external numbering so they can be matched back to the model.
pub fn fold(solution: FieldSolution) -> ImpedanceAndScData {
    ImpedanceAndScData {
        base_mva: solution.base_mva,
        base_temp_c: solution.base_temp_c,
        r_pu: solution.r_pu,
        x_pu: solution.x_pu,
        z_pu: solution.z_pu,
        induction_tank_t: solution.induction_tank_t,
        induction_leg_t: solution.induction_leg_t,
        total_upper_thrust_n: solution.total_upper_thrust_n,
        total_lower_thrust_n: solution.total_lower_thrust_n,
        segments: solution.segments,
        layers: solution.layers,
    }
}
