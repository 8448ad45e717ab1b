//! Preference storage error types.

use std::path::PathBuf;

/// Errors that can occur while reading or writing preferences.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Failed to read the preferences file
    #[error("Failed to read preferences from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write the preferences file
    #[error("Failed to write preferences to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Preferences file exists but cannot be parsed
    #[error("Preferences file {path} is corrupt: {message}")]
    Corrupt { path: PathBuf, message: String },

    /// Store cannot be used at all
    #[error("Preference storage is unavailable")]
    Unavailable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_display() {
        let error = StorageError::Corrupt {
            path: PathBuf::from("/tmp/preferences.yml"),
            message: "bad yaml".to_string(),
        };
        let error_str = error.to_string();
        assert!(error_str.contains("/tmp/preferences.yml"));
        assert!(error_str.contains("bad yaml"));

        let error = StorageError::Unavailable;
        assert!(error.to_string().contains("unavailable"));
    }
}
