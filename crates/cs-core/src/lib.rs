//! cs-core: stable foundation for coilstack.
//!
//! Contains:
//! - ids (stable compact IDs for arena-stored model objects)
//! - slots (the fixed 1..6 terminal slot addressing)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;
pub mod slots;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CsError, CsResult};
pub use ids::*;
pub use numeric::*;
pub use slots::*;
