use cs_core::{SegmentId, WindingId};
use thiserror::Error;

pub type GeometryResult<T> = Result<T, GeometryError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("winding {0} not found")]
    UnknownWinding(WindingId),

    #[error("segment {0} not found")]
    UnknownSegment(SegmentId),

    #[error("invalid split: {what}")]
    InvalidSplit { what: &'static str },

    #[error("winding has no positive axial extent after gaps")]
    NonPositiveExtent,
}
