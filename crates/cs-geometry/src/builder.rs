//! Expansion of winding parameters into layers and segments.

use cs_core::{LayerId, WindingId};
use cs_model::{ANDERSEN_VIRTUAL, ConductorMaterial, Layer, Segment, TapType, Transformer, Winding};
use tracing::debug;

use crate::error::{GeometryError, GeometryResult};

/// What the geometric model should include.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeometryPrefs {
    /// Model each radial cooling duct as a layer boundary.
    pub model_radial_ducts: bool,
    /// Include windings bound to the virtual terminal (Andersen number 0).
    pub model_zero_terminals: bool,
    /// Lay out the full tapped turn count (max) rather than nominal.
    pub model_layer_taps: bool,
}

impl Default for GeometryPrefs {
    fn default() -> Self {
        Self {
            model_radial_ducts: true,
            model_zero_terminals: true,
            model_layer_taps: true,
        }
    }
}

/// Expands windings into positioned layers/segments.
pub struct GeometryBuilder {
    prefs: GeometryPrefs,
}

impl GeometryBuilder {
    pub fn new(prefs: GeometryPrefs) -> Self {
        Self { prefs }
    }

    /// Rebuild the geometry of every winding from scratch, centering each on
    /// the core window.
    pub fn build_all(&self, tx: &mut Transformer) -> GeometryResult<()> {
        tx.clear_geometry();
        let center = tx.core.window_height_mm / 2.0;
        let ids: Vec<WindingId> = tx.windings().map(|(id, _)| id).collect();
        for id in ids {
            self.build_winding(tx, id, center)?;
        }
        Ok(())
    }

    /// Lay out one winding's layers along Z, centered at `winding_center_mm`.
    ///
    /// Returns the new layer IDs (empty when the winding is suppressed by
    /// the zero-terminal preference).
    pub fn build_winding(
        &self,
        tx: &mut Transformer,
        id: WindingId,
        winding_center_mm: f64,
    ) -> GeometryResult<Vec<LayerId>> {
        let winding = tx
            .winding(id)
            .cloned()
            .ok_or(GeometryError::UnknownWinding(id))?;

        if !self.prefs.model_zero_terminals && winding.terminal_number == ANDERSEN_VIRTUAL {
            debug!(winding = %id, "virtual terminal suppressed from geometry");
            if let Some(w) = tx.winding_mut(id) {
                w.layers.clear();
            }
            return Ok(Vec::new());
        }

        let num_layers = if self.prefs.model_radial_ducts {
            winding.ducts.count + 1
        } else {
            1
        };
        let turn_basis = if self.prefs.model_layer_taps {
            winding.turns.max
        } else {
            winding.turns.nom
        };
        // Uniform distribution across layers; deliberately not load-weighted.
        let turns_per_layer = turn_basis / num_layers as f64;

        let z_lo = winding_center_mm - winding.elec_height_mm / 2.0;
        let z_hi = winding_center_mm + winding.elec_height_mm / 2.0;

        let current_direction = tx
            .terminal_by_number(winding.terminal_number)
            .map(|(_, t)| t.current_direction)
            .unwrap_or(1);

        let dims = winding.turn_def.dimensions();
        let sections_per_layer = winding.radial_sections as f64 / num_layers as f64;
        let radial_build = (dims.radial_mm * sections_per_layer + winding.radial_insulation_mm)
            * (1.0 + winding.radial_overbuild_pct / 100.0);

        let mut inner_radius = winding.coil_id_mm / 2.0;
        let mut layer_ids = Vec::with_capacity(num_layers as usize);
        for _ in 0..num_layers {
            let layer_id = tx.add_layer(Layer {
                winding: id,
                segments: Vec::new(),
                spacer_blocks: winding.axial_columns,
                spacer_width_mm: winding.radial_spacer.width_mm,
                material: ConductorMaterial::Copper,
                current_direction,
                parallel_groups: winding.axial_columns.max(1),
                terminal_number: winding.terminal_number,
                radial_build_mm: radial_build,
                inner_radius_mm: inner_radius,
            });

            let segment_ids = build_layer_segments(
                tx,
                layer_id,
                &winding,
                turns_per_layer,
                z_lo,
                z_hi,
            )?;
            if let Some(layer) = tx.layer_mut(layer_id) {
                layer.segments = segment_ids;
            }
            layer_ids.push(layer_id);

            inner_radius += radial_build;
            if self.prefs.model_radial_ducts {
                inner_radius += winding.ducts.dim_mm;
            }
        }

        debug!(
            winding = %id,
            layers = layer_ids.len(),
            turns_per_layer,
            "winding geometry built"
        );
        if let Some(w) = tx.winding_mut(id) {
            w.layers = layer_ids.clone();
        }
        Ok(layer_ids)
    }
}

/// Tile one layer's span with its axial sections, honoring edge gaps and a
/// single center gap.
fn build_layer_segments(
    tx: &mut Transformer,
    layer_id: LayerId,
    winding: &Winding,
    turns_per_layer: f64,
    z_lo: f64,
    z_hi: f64,
) -> GeometryResult<Vec<cs_core::SegmentId>> {
    let n = winding.axial_sections.max(1);
    let lo = z_lo + winding.axial_gaps.bottom_mm;
    let hi = z_hi - winding.axial_gaps.top_mm;
    let center_gap = if n >= 2 { winding.axial_gaps.center_mm } else { 0.0 };

    let conductor = hi - lo - center_gap;
    if conductor <= 0.0 {
        return Err(GeometryError::NonPositiveExtent);
    }

    let seg_height = conductor / n as f64;
    let seg_turns = turns_per_layer / n as f64;
    let gap_after = n / 2; // center gap sits after the lower half

    let mut ids = Vec::with_capacity(n as usize);
    let mut cursor = lo;
    for i in 1..=n {
        let segment = Segment {
            layer: layer_id,
            tap: TapType::None,
            strand_axial_mm: winding.turn_def.strand_axial_mm,
            strand_radial_mm: winding.turn_def.strand_radial_mm,
            strands_per_layer: winding.turn_def.strands_per_cable()
                * winding.turn_def.num_cables_radial,
            strands_per_turn: winding.turn_def.strands_per_turn(),
            active_turns: seg_turns,
            total_turns: seg_turns,
            min_z_mm: cursor,
            max_z_mm: cursor + seg_height,
        };
        cursor += seg_height;
        if i == gap_after {
            cursor += center_gap;
        }
        ids.push(tx.add_segment(segment));
    }
    Ok(ids)
}
