//! Recoverable traversal failures

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A failure that skips one entry or one subtree without ending the walk.
#[derive(Debug, Error)]
pub enum TraverseError {
    #[error("cannot open directory: {}", reason(.source))]
    OpenDir {
        #[source]
        source: io::Error,
    },

    #[error("cannot read directory: {}", reason(.source))]
    ReadDir {
        #[source]
        source: io::Error,
    },

    #[error("cannot stat '{name}': {}", reason(.source))]
    Stat {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("{omitted} of {total} entries not shown (limit {limit})")]
    Truncated {
        omitted: usize,
        total: usize,
        limit: usize,
    },
}

impl TraverseError {
    /// Whether this is a warning rather than an error marker.
    pub fn is_warning(&self) -> bool {
        matches!(self, TraverseError::Truncated { .. })
    }
}

/// Human wording for an I/O failure, without the `(os error N)` suffix.
pub fn reason(err: &io::Error) -> String {
    match err.kind() {
        io::ErrorKind::PermissionDenied => "Permission denied".to_string(),
        io::ErrorKind::NotFound => "No such file or directory".to_string(),
        io::ErrorKind::NotADirectory => "Not a directory".to_string(),
        _ => {
            let text = err.to_string();
            match text.find(" (os error") {
                Some(idx) => text[..idx].to_string(),
                None => text,
            }
        }
    }
}

/// A [`TraverseError`] together with the path it concerns.
#[derive(Debug)]
pub struct TraversalIssue {
    pub path: PathBuf,
    pub error: TraverseError,
}

impl TraversalIssue {
    pub fn new(path: impl Into<PathBuf>, error: TraverseError) -> Self {
        Self {
            path: path.into(),
            error,
        }
    }
}
