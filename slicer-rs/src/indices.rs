//! Parsing of `START[:END]` index specifications.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexParseError {
    #[error("indices are missing")]
    Missing,
    #[error("error parsing string {segment:?}")]
    Invalid { segment: String },
}

/// Parses colon-separated integers such as `"6"`, `"0:-6"` or `" 1 : 3 "`.
///
/// The number of parts is not checked here; [`crate::Slicer::new`] rejects
/// more than two.
pub fn parse_indices(s: &str) -> Result<Vec<isize>, IndexParseError> {
    if s.trim().is_empty() {
        return Err(IndexParseError::Missing);
    }
    s.split(':')
        .map(|segment| {
            segment
                .trim()
                .parse()
                .map_err(|_| IndexParseError::Invalid {
                    segment: segment.to_string(),
                })
        })
        .collect()
}
