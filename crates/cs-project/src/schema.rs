//! Project file schema.

use cs_model::Transformer;
use serde::{Deserialize, Serialize};

/// Top-level project container: one transformer model per project, plus the
/// schema version the file was written with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectFile {
    pub version: u32,
    pub name: String,
    pub transformer: Transformer,
}
