use thiserror::Error;

pub type DesignResult<T> = Result<T, DesignError>;

/// Import failure taxonomy. An error aborts the whole import; no partial
/// model is ever returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DesignError {
    /// Structural mismatch: wrong token counts, truncated file, or a
    /// non-integer version token.
    #[error("not a valid design file")]
    InvalidDesignFile,

    /// The file predates the oldest supported format revision.
    #[error("unsupported design file version {found} (minimum {minimum})")]
    InvalidFileVersion { found: u32, minimum: u32 },

    /// A token was present where expected but failed to parse.
    #[error("invalid value on line {line}")]
    InvalidValue { line: usize },
}
