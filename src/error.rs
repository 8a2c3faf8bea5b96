//! Error types for the brandkit crate.
//!
//! Generation itself is infallible: unknown industries fall back to a
//! default preset and validation reports findings rather than failing.
//! Errors only arise at the serialization and file-writing edges.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by serialization and export operations.
#[derive(Debug, Error)]
pub enum Error {
    /// JSON serialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Writing an exported spec file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_includes_source_message() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(err.to_string().starts_with("serialization error:"));

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io_err.into();
        assert!(err.to_string().contains("missing"));
    }
}
