//! Opening the input source: standard input or a file.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use thiserror::Error;

/// Path that selects standard input.
pub const STDIN: &str = "-";

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("error expanding input path {path:?}: home directory not found")]
    NoHome { path: String },
    #[error("error opening input file at path {path:?}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Replaces a leading `~` with the home directory. `~user` forms are left
/// alone.
pub fn expand_home(path: &str) -> Result<PathBuf, SourceError> {
    let rest = match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => return Ok(PathBuf::from(path)),
    };
    let home = dirs::home_dir().ok_or_else(|| SourceError::NoHome {
        path: path.to_string(),
    })?;
    Ok(home.join(rest.trim_start_matches('/')))
}

/// Opens `path` for buffered reading, or standard input for [`STDIN`].
pub fn open(path: &str) -> Result<Box<dyn BufRead>, SourceError> {
    if path == STDIN {
        return Ok(Box::new(io::stdin().lock()));
    }
    let expanded = expand_home(path)?;
    let file = File::open(&expanded).map_err(|source| SourceError::Open {
        path: path.to_string(),
        source,
    })?;
    Ok(Box::new(BufReader::new(file)))
}
