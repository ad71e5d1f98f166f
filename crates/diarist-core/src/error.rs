//! Error types for journal operations.

use std::path::PathBuf;

/// Errors raised while folding or unfolding a journal directory.
///
/// Only [`JournalError::MissingDirectory`] aborts a whole run. The I/O
/// variants are scoped to a single file and end up in a run report.
#[derive(Debug, thiserror::Error)]
pub enum JournalError {
    /// The journal directory does not exist.
    #[error("journal directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),

    /// The journal directory could not be listed.
    #[error("failed to list {}: {source}", .path.display())]
    List {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to delete {}: {source}", .path.display())]
    Delete {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be read or parsed.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl JournalError {
    /// The file this error is about, when it concerns a single file.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            JournalError::MissingDirectory(path) => Some(path),
            JournalError::List { path, .. }
            | JournalError::Read { path, .. }
            | JournalError::Write { path, .. }
            | JournalError::Delete { path, .. } => Some(path),
            JournalError::Config(_) => None,
        }
    }
}

/// Convenience alias for journal results.
pub type JournalResult<T> = Result<T, JournalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_file() {
        let err = JournalError::Read {
            path: PathBuf::from("journals/2023-05-01.md"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            err.to_string(),
            "failed to read journals/2023-05-01.md: denied"
        );
        assert_eq!(err.path(), Some(&PathBuf::from("journals/2023-05-01.md")));

        let missing = JournalError::MissingDirectory(PathBuf::from("nowhere"));
        assert_eq!(missing.to_string(), "journal directory not found: nowhere");
    }
}
