//! Content-based hashing for result IDs.
//!
//! A result is keyed by the exact model snapshot it was computed from plus
//! the solver version, so a stale result can never be served for an edited
//! model.

use cs_model::Transformer;
use sha2::{Digest, Sha256};

pub fn compute_result_id(transformer: &Transformer, solver_version: &str) -> String {
    let mut hasher = Sha256::new();

    let model_json = serde_json::to_string(transformer).unwrap_or_default();
    hasher.update(model_json.as_bytes());
    hasher.update(solver_version.as_bytes());

    let result = hasher.finalize();
    format!("{:x}", result)
}
