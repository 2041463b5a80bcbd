//! cs-design: parser for the legacy fixed-format design file.
//!
//! The file is line-oriented whitespace-delimited ASCII: an 8-token header,
//! six terminal rows, a 9-column row-map, then a field-major block with one
//! row per schema field and one token per active winding column. The parser
//! tokenizes the whole file once and walks the field block with an explicit
//! descriptor table ([`schema::WINDING_FIELDS`]), committing a
//! [`cs_model::Transformer`] only on full success.

pub mod error;
pub mod parser;
pub mod schema;
mod tokens;

pub use error::{DesignError, DesignResult};
pub use parser::{MIN_FILE_VERSION, parse};
