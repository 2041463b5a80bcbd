//! The transformer aggregate: terminals plus flat entity arenas.

use cs_core::{LayerId, NUM_TERMINAL_SLOTS, SegmentId, TermSlot, WindingId};
use serde::{Deserialize, Serialize};

use crate::layer::Layer;
use crate::segment::Segment;
use crate::terminal::{ANDERSEN_VIRTUAL, Terminal};
use crate::winding::Winding;

/// Core leg dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoreDims {
    pub diameter_mm: f64,
    pub window_height_mm: f64,
}

/// The whole design: one transformer, created per import and mutated in
/// place during an editing session.
///
/// Ownership is flat: terminals live in a fixed six-slot mapping, windings,
/// layers and segments in arenas indexed by `cs-core` IDs. Layer and segment
/// slots are tombstoned (`None`) on removal so sibling IDs survive split
/// operations; a full geometry rebuild clears both arenas wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transformer {
    pub num_phases: u32,
    pub frequency_hz: f64,
    pub temp_rise_c: f64,
    pub core: CoreDims,
    /// Transient asymmetry factor K.
    pub sc_factor: f64,
    pub system_gva: f64,
    terminals: [Option<Terminal>; NUM_TERMINAL_SLOTS],
    windings: Vec<Winding>,
    layers: Vec<Option<Layer>>,
    segments: Vec<Option<Segment>>,
}

impl Transformer {
    pub fn new(
        num_phases: u32,
        frequency_hz: f64,
        temp_rise_c: f64,
        core: CoreDims,
    ) -> Self {
        Self {
            num_phases,
            frequency_hz,
            temp_rise_c,
            core,
            sc_factor: 0.0,
            system_gva: 0.0,
            terminals: Default::default(),
            windings: Vec::new(),
            layers: Vec::new(),
            segments: Vec::new(),
        }
    }

    // ---- terminals -------------------------------------------------------

    pub fn terminal(&self, slot: TermSlot) -> Option<&Terminal> {
        self.terminals[slot.index()].as_ref()
    }

    pub fn terminal_mut(&mut self, slot: TermSlot) -> Option<&mut Terminal> {
        self.terminals[slot.index()].as_mut()
    }

    pub fn set_terminal(&mut self, slot: TermSlot, terminal: Option<Terminal>) {
        self.terminals[slot.index()] = terminal;
    }

    /// All six slots in order, empty or not.
    pub fn terminals(&self) -> impl Iterator<Item = (TermSlot, Option<&Terminal>)> {
        TermSlot::all().map(|slot| (slot, self.terminals[slot.index()].as_ref()))
    }

    /// Resolve a terminal by its Andersen number. The virtual number 0 never
    /// resolves.
    pub fn terminal_by_number(&self, number: u32) -> Option<(TermSlot, &Terminal)> {
        if number == ANDERSEN_VIRTUAL {
            return None;
        }
        self.terminals()
            .find_map(|(slot, t)| t.filter(|t| t.andersen_number == number).map(|t| (slot, t)))
    }

    // ---- windings --------------------------------------------------------

    pub fn add_winding(&mut self, winding: Winding) -> WindingId {
        let id = WindingId::from_index(self.windings.len() as u32);
        self.windings.push(winding);
        id
    }

    pub fn winding(&self, id: WindingId) -> Option<&Winding> {
        self.windings.get(id.index() as usize)
    }

    pub fn winding_mut(&mut self, id: WindingId) -> Option<&mut Winding> {
        self.windings.get_mut(id.index() as usize)
    }

    pub fn windings(&self) -> impl Iterator<Item = (WindingId, &Winding)> {
        self.windings
            .iter()
            .enumerate()
            .map(|(i, w)| (WindingId::from_index(i as u32), w))
    }

    pub fn num_windings(&self) -> usize {
        self.windings.len()
    }

    // ---- layers ----------------------------------------------------------

    pub fn add_layer(&mut self, layer: Layer) -> LayerId {
        let id = LayerId::from_index(self.layers.len() as u32);
        self.layers.push(Some(layer));
        id
    }

    pub fn layer(&self, id: LayerId) -> Option<&Layer> {
        self.layers.get(id.index() as usize)?.as_ref()
    }

    pub fn layer_mut(&mut self, id: LayerId) -> Option<&mut Layer> {
        self.layers.get_mut(id.index() as usize)?.as_mut()
    }

    /// Live layers only; tombstoned slots are skipped.
    pub fn layers(&self) -> impl Iterator<Item = (LayerId, &Layer)> {
        self.layers
            .iter()
            .enumerate()
            .filter_map(|(i, l)| Some((LayerId::from_index(i as u32), l.as_ref()?)))
    }

    // ---- segments --------------------------------------------------------

    pub fn add_segment(&mut self, segment: Segment) -> SegmentId {
        let id = SegmentId::from_index(self.segments.len() as u32);
        self.segments.push(Some(segment));
        id
    }

    pub fn segment(&self, id: SegmentId) -> Option<&Segment> {
        self.segments.get(id.index() as usize)?.as_ref()
    }

    pub fn segment_mut(&mut self, id: SegmentId) -> Option<&mut Segment> {
        self.segments.get_mut(id.index() as usize)?.as_mut()
    }

    /// Tombstone a segment, keeping every other ID valid.
    pub fn remove_segment(&mut self, id: SegmentId) -> Option<Segment> {
        self.segments.get_mut(id.index() as usize)?.take()
    }

    /// Live segments only; tombstoned slots are skipped.
    pub fn segments(&self) -> impl Iterator<Item = (SegmentId, &Segment)> {
        self.segments
            .iter()
            .enumerate()
            .filter_map(|(i, s)| Some((SegmentId::from_index(i as u32), s.as_ref()?)))
    }

    /// Segment IDs of one winding, layer by layer, bottom to top.
    pub fn winding_segments(&self, id: WindingId) -> Vec<SegmentId> {
        let Some(winding) = self.winding(id) else {
            return Vec::new();
        };
        winding
            .layers
            .iter()
            .filter_map(|&lid| self.layer(lid))
            .flat_map(|layer| layer.segments.iter().copied())
            .collect()
    }

    // ---- cross-entity sums ----------------------------------------------

    /// Sum of active turns over every segment belonging to the terminal with
    /// this Andersen number.
    pub fn terminal_active_turns(&self, terminal_number: u32) -> f64 {
        self.terminal_turns(terminal_number, |s| s.active_turns)
    }

    /// Sum of total turns over every segment belonging to the terminal.
    pub fn terminal_total_turns(&self, terminal_number: u32) -> f64 {
        self.terminal_turns(terminal_number, |s| s.total_turns)
    }

    fn terminal_turns(&self, terminal_number: u32, f: impl Fn(&Segment) -> f64) -> f64 {
        self.windings()
            .filter(|(_, w)| w.terminal_number == terminal_number)
            .flat_map(|(id, _)| self.winding_segments(id))
            .filter_map(|sid| self.segment(sid))
            .map(f)
            .sum()
    }

    /// Drop all built geometry so the builder can start over. Windings and
    /// terminals survive; every layer/segment ID is invalidated.
    pub fn clear_geometry(&mut self) {
        self.layers.clear();
        self.segments.clear();
        for winding in &mut self.windings {
            winding.layers.clear();
        }
    }
}
