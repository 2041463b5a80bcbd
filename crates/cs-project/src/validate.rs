//! Project validation logic.

use cs_core::{Tolerances, nearly_equal};
use cs_model::Transformer;

use crate::schema::ProjectFile;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_project(project: &ProjectFile) -> Result<(), ValidationError> {
    if project.version > crate::migrate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: project.version,
        });
    }
    validate_transformer(&project.transformer)
}

fn validate_transformer(tx: &Transformer) -> Result<(), ValidationError> {
    for (winding_id, winding) in tx.windings() {
        let turns = winding.turns;
        if !(turns.min <= turns.nom && turns.nom <= turns.max) {
            return Err(ValidationError::InvalidValue {
                field: format!("winding {winding_id} turns"),
                value: format!("{}/{}/{}", turns.min, turns.nom, turns.max),
                reason: "min/nom/max must be ordered".to_string(),
            });
        }

        if winding.terminal_number != 0
            && tx.terminal_by_number(winding.terminal_number).is_none()
        {
            return Err(ValidationError::MissingReference {
                id: winding.terminal_number.to_string(),
                context: format!("winding {winding_id} terminal number"),
            });
        }

        for &layer_id in &winding.layers {
            if tx.layer(layer_id).is_none() {
                return Err(ValidationError::MissingReference {
                    id: layer_id.to_string(),
                    context: format!("winding {winding_id} layers"),
                });
            }
        }
    }

    let tol = Tolerances::default();
    for (layer_id, layer) in tx.layers() {
        let mut prev_max: Option<f64> = None;
        for &segment_id in &layer.segments {
            let Some(segment) = tx.segment(segment_id) else {
                return Err(ValidationError::MissingReference {
                    id: segment_id.to_string(),
                    context: format!("layer {layer_id} segments"),
                });
            };

            if segment.min_z_mm >= segment.max_z_mm {
                return Err(ValidationError::InvalidValue {
                    field: format!("segment {segment_id} extent"),
                    value: format!("[{}, {}]", segment.min_z_mm, segment.max_z_mm),
                    reason: "min Z must be below max Z".to_string(),
                });
            }
            if segment.active_turns < 0.0 || segment.active_turns > segment.total_turns {
                return Err(ValidationError::InvalidValue {
                    field: format!("segment {segment_id} active turns"),
                    value: segment.active_turns.to_string(),
                    reason: format!("must lie in [0, {}]", segment.total_turns),
                });
            }

            // Siblings tile bottom-up; gaps are allowed, overlap is not.
            if let Some(prev) = prev_max
                && segment.min_z_mm < prev
                && !nearly_equal(segment.min_z_mm, prev, tol)
            {
                return Err(ValidationError::InvalidValue {
                    field: format!("layer {layer_id} segment order"),
                    value: segment.min_z_mm.to_string(),
                    reason: "segments must not overlap".to_string(),
                });
            }
            prev_max = Some(segment.max_z_mm);
        }
    }

    Ok(())
}
