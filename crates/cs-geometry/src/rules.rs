//! Guard predicates for segment editing.
//!
//! These answer "would this edit leave the model electrically meaningless"
//! without performing the edit. Callers check before invoking the operations
//! in [`crate::segment_ops`].

use cs_core::SegmentId;
use cs_model::Transformer;

use crate::error::{GeometryError, GeometryResult};

/// Whether deactivating `id` would remove the last active turns of its
/// terminal.
///
/// A terminal with zero active turns has no defined current distribution, so
/// the final active segment of a terminal cannot be switched off.
pub fn deactivation_blocked(tx: &Transformer, id: SegmentId) -> GeometryResult<bool> {
    let segment = tx.segment(id).ok_or(GeometryError::UnknownSegment(id))?;
    if !segment.is_active() {
        return Ok(false);
    }
    let terminal_number = owning_terminal(tx, id)?;
    Ok(segment.active_turns == tx.terminal_active_turns(terminal_number))
}

/// Whether reversing the current direction of `id` would flip the majority
/// of its terminal's turns.
///
/// The reference terminal sets the ampere-turn sign convention and may be
/// reversed freely; any other terminal must keep more than half of its total
/// turns in the original direction.
pub fn reversal_blocked(
    tx: &Transformer,
    id: SegmentId,
    is_reference_terminal: bool,
) -> GeometryResult<bool> {
    if is_reference_terminal {
        return Ok(false);
    }
    let segment = tx.segment(id).ok_or(GeometryError::UnknownSegment(id))?;
    let terminal_number = owning_terminal(tx, id)?;
    Ok(segment.active_turns * 2.0 >= tx.terminal_total_turns(terminal_number))
}

fn owning_terminal(tx: &Transformer, id: SegmentId) -> GeometryResult<u32> {
    let segment = tx.segment(id).ok_or(GeometryError::UnknownSegment(id))?;
    let layer = tx
        .layer(segment.layer)
        .ok_or(GeometryError::UnknownSegment(id))?;
    Ok(layer.terminal_number)
}
