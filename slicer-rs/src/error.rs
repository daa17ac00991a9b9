use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Coarse classification of a [`SliceError`], for callers that branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// More than two indices were supplied.
    InvalidSpec,
    /// A strict-mode index fell outside the input.
    OutOfRange,
    /// The resolved end precedes the resolved start.
    InvalidRange,
    /// A string would be cut inside a multi-byte character.
    NotCharBoundary,
    /// The value handed to the dynamic entry point is not a string or bytes.
    UnsupportedType,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidSpec => "invalid_spec",
            ErrorKind::OutOfRange => "out_of_range",
            ErrorKind::InvalidRange => "invalid_range",
            ErrorKind::NotCharBoundary => "not_char_boundary",
            ErrorKind::UnsupportedType => "unsupported_type",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Failure to slice an input. Each variant keeps the requested index as given
/// and as resolved against the input length.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "error", rename_all = "snake_case")]
pub enum SliceError {
    #[error("invalid number of indices {count}")]
    InvalidSpec { count: usize },

    #[error("when in strict mode, start index {start} ({resolved}) must be greater than or equal to zero")]
    NegativeStart { start: isize, resolved: isize },

    #[error("when in strict mode, start index {start} ({resolved}) cannot be greater than the length of the input {input:?} ({len}) minus 1")]
    StartPastEnd {
        start: isize,
        resolved: isize,
        len: usize,
        input: String,
    },

    #[error("when in strict mode, end index {end} ({resolved}) cannot be greater than the length of the input {input:?} ({len})")]
    EndPastLength {
        end: isize,
        resolved: isize,
        len: usize,
        input: String,
    },

    #[error("start index {start} ({resolved_start}) must be before end index {end} ({resolved_end})")]
    InvalidRange {
        start: isize,
        resolved_start: isize,
        end: isize,
        resolved_end: isize,
    },

    #[error("index {index} is not on a character boundary of the input {input:?}")]
    NotCharBoundary { index: usize, input: String },

    #[error("unknown type {type_name}")]
    UnsupportedType { type_name: String },
}

impl SliceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SliceError::InvalidSpec { .. } => ErrorKind::InvalidSpec,
            SliceError::NegativeStart { .. }
            | SliceError::StartPastEnd { .. }
            | SliceError::EndPastLength { .. } => ErrorKind::OutOfRange,
            SliceError::InvalidRange { .. } => ErrorKind::InvalidRange,
            SliceError::NotCharBoundary { .. } => ErrorKind::NotCharBoundary,
            SliceError::UnsupportedType { .. } => ErrorKind::UnsupportedType,
        }
    }
}

/// Renders input content for error messages. Bytes that are not valid UTF-8
/// are replaced, which is fine for a diagnostic.
pub(crate) fn describe(input: &[u8]) -> String {
    String::from_utf8_lossy(input).into_owned()
}
