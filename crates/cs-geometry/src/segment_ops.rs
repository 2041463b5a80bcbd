//! Split and activation operations on segments.
//!
//! The pure functions operate on segment values; the `*_segment_*` wrappers
//! apply them to the arena, tombstoning the original and splicing the new
//! IDs into the owning layer so sibling IDs stay valid.

use cs_core::SegmentId;
use cs_model::{Segment, Transformer};

use crate::error::{GeometryError, GeometryResult};

/// Value-level outcome of a percentage split. The boundary no-op is tagged
/// rather than silent so callers (and tests) can observe it.
#[derive(Debug, Clone, PartialEq)]
pub enum SplitOutcome {
    Split(Vec<Segment>),
    Unchanged(Segment),
}

/// Arena-level outcome of a percentage split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitIds {
    Split(Vec<SegmentId>),
    Unchanged(SegmentId),
}

/// Split a segment into `n` equal parts separated by `gap_mm`.
///
/// Every part comes back fully active (`active = total = total/n`); callers
/// that want some parts dark must deactivate them afterwards.
pub fn split_by_count(segment: &Segment, n: u32, gap_mm: f64) -> GeometryResult<Vec<Segment>> {
    if n < 1 {
        return Err(GeometryError::InvalidSplit {
            what: "split count must be at least 1",
        });
    }
    if gap_mm < 0.0 {
        return Err(GeometryError::InvalidSplit {
            what: "gap must be non-negative",
        });
    }

    let height = segment.height_mm();
    let conductor = height - (n - 1) as f64 * gap_mm;
    if conductor <= 0.0 {
        return Err(GeometryError::InvalidSplit {
            what: "gaps consume the whole segment height",
        });
    }

    let z_per_segment = conductor / n as f64;
    let turns_per_segment = segment.total_turns / n as f64;

    let mut parts = Vec::with_capacity(n as usize);
    let mut cursor = segment.min_z_mm;
    for _ in 0..n {
        parts.push(Segment {
            active_turns: turns_per_segment,
            total_turns: turns_per_segment,
            min_z_mm: cursor,
            max_z_mm: cursor + z_per_segment,
            ..segment.clone()
        });
        cursor += z_per_segment + gap_mm;
    }
    Ok(parts)
}

/// Split a segment at `pct` percent of its height (bottom piece first).
///
/// Both pieces come back fully active regardless of the original activation
/// state. Out-of-range percentages are a tagged no-op, not an error.
pub fn split_by_percentage(segment: &Segment, pct: f64) -> SplitOutcome {
    if pct <= 0.0 || pct >= 100.0 {
        return SplitOutcome::Unchanged(segment.clone());
    }

    let fraction = pct / 100.0;
    let bottom_height = segment.height_mm() * fraction;
    let bottom_turns = segment.total_turns * fraction;
    let top_turns = segment.total_turns - bottom_turns;
    let split_z = segment.min_z_mm + bottom_height;

    let bottom = Segment {
        active_turns: bottom_turns,
        total_turns: bottom_turns,
        max_z_mm: split_z,
        ..segment.clone()
    };
    let top = Segment {
        active_turns: top_turns,
        total_turns: top_turns,
        min_z_mm: split_z,
        ..segment.clone()
    };
    SplitOutcome::Split(vec![bottom, top])
}

/// Flip a segment between fully active and fully dark.
pub fn toggle_activation(segment: &mut Segment) {
    segment.active_turns = if segment.is_active() {
        0.0
    } else {
        segment.total_turns
    };
}

/// Apply [`split_by_count`] to an arena segment.
pub fn split_segment_by_count(
    tx: &mut Transformer,
    id: SegmentId,
    n: u32,
    gap_mm: f64,
) -> GeometryResult<Vec<SegmentId>> {
    let original = tx
        .segment(id)
        .cloned()
        .ok_or(GeometryError::UnknownSegment(id))?;
    let parts = split_by_count(&original, n, gap_mm)?;
    Ok(replace_in_arena(tx, id, parts))
}

/// Apply [`split_by_percentage`] to an arena segment.
pub fn split_segment_by_percentage(
    tx: &mut Transformer,
    id: SegmentId,
    pct: f64,
) -> GeometryResult<SplitIds> {
    let original = tx
        .segment(id)
        .cloned()
        .ok_or(GeometryError::UnknownSegment(id))?;
    match split_by_percentage(&original, pct) {
        SplitOutcome::Unchanged(_) => Ok(SplitIds::Unchanged(id)),
        SplitOutcome::Split(parts) => Ok(SplitIds::Split(replace_in_arena(tx, id, parts))),
    }
}

/// Toggle activation of an arena segment.
pub fn toggle_segment_activation(tx: &mut Transformer, id: SegmentId) -> GeometryResult<()> {
    let segment = tx
        .segment_mut(id)
        .ok_or(GeometryError::UnknownSegment(id))?;
    toggle_activation(segment);
    Ok(())
}

/// Tombstone `id` and splice its replacements into the owning layer at the
/// same position.
fn replace_in_arena(tx: &mut Transformer, id: SegmentId, parts: Vec<Segment>) -> Vec<SegmentId> {
    let layer_id = parts[0].layer;
    let new_ids: Vec<SegmentId> = parts.into_iter().map(|s| tx.add_segment(s)).collect();
    tx.remove_segment(id);

    if let Some(layer) = tx.layer_mut(layer_id)
        && let Some(pos) = layer.segments.iter().position(|&s| s == id)
    {
        layer.segments.splice(pos..=pos, new_ids.iter().copied());
    }
    new_ids
}
