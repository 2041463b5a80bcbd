//! cs-results: impedance/short-circuit result types, the adapter that folds
//! an external field solution onto the model, and on-disk result storage.

pub mod adapter;
pub mod hash;
pub mod store;
pub mod types;

pub use adapter::{FieldSolution, fold};
pub use hash::compute_result_id;
pub use store::ResultStore;
pub use types::*;

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Result not found: {result_id}")]
    ResultNotFound { result_id: String },

    #[error("Invalid path: {message}")]
    InvalidPath { message: String },
}
