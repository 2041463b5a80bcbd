//! cs-model: the transformer winding-stack entity model.
//!
//! The model is a Terminal → Winding → Layer → Segment hierarchy stored
//! arena-style: the [`Transformer`] aggregate owns flat collections and all
//! cross-references are stable IDs from `cs-core`, never internal pointers.
//! Layer and segment arena slots are tombstoned on removal so IDs handed to
//! an editing session stay valid across split operations.
//!
//! All physical quantities are unit-suffixed `f64` fields (`_mm`, `_hz`,
//! `_v`); derived electrical properties live next to the entity they
//! describe.

pub mod connection;
pub mod layer;
pub mod segment;
pub mod terminal;
pub mod transformer;
pub mod turndef;
pub mod winding;

// Re-exports
pub use connection::Connection;
pub use layer::{ConductorMaterial, Layer};
pub use segment::{Segment, TapType};
pub use terminal::{ANDERSEN_VIRTUAL, Terminal};
pub use transformer::{CoreDims, Transformer};
pub use turndef::{CableDimensions, CableType, TurnDefinition};
pub use winding::{AxialGaps, Ducts, RadialSpacer, TurnCounts, Winding, WindingType};
