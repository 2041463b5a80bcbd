//! cs-geometry: axial layout of windings and segment editing operations.
//!
//! [`GeometryBuilder`] expands each winding's section/duct parameters into
//! concrete layers and segments positioned along Z. The segment operations
//! (`split_by_count`, `split_by_percentage`, activation toggling) act on the
//! live model during an editing session; the guard predicates in [`rules`]
//! back the business rules the editing layer must enforce before calling
//! them.

pub mod builder;
pub mod error;
pub mod rules;
pub mod segment_ops;

pub use builder::{GeometryBuilder, GeometryPrefs};
pub use error::{GeometryError, GeometryResult};
pub use rules::{deactivation_blocked, reversal_blocked};
pub use segment_ops::{
    SplitIds, SplitOutcome, split_by_count, split_by_percentage, split_segment_by_count,
    split_segment_by_percentage, toggle_activation, toggle_segment_activation,
};
