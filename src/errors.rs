//! Error types for manifest acquisition and decoding.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error while obtaining the structured manifest document.
#[derive(Debug, Error)]
pub enum AcquireError {
    /// The manifest directory does not exist or could not be resolved
    /// to an absolute path.
    #[error("invalid manifest directory: {}", path.display())]
    InvalidPath {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The `go` tool is missing, exited non-zero, or its output stream
    /// could not be read. Carries the tool's captured stderr when
    /// available.
    #[error("`{command}` failed{}", render_diagnostic(.code, .stderr))]
    ToolFailure {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
}

fn render_diagnostic(code: &Option<i32>, stderr: &str) -> String {
    let mut out = String::new();
    if let Some(code) = code {
        out.push_str(&format!(" with exit code {code}"));
    }
    if !stderr.is_empty() {
        out.push('\n');
        out.push_str(stderr.trim_end());
    }
    out
}

/// Error while decoding the structured document into a [`Manifest`].
///
/// [`Manifest`]: crate::Manifest
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The document is not well-formed JSON, or a field's shape does
    /// not match the manifest schema.
    #[error("malformed manifest document: {0}")]
    MalformedDocument(#[from] serde_json::Error),
}

/// Error returned by the composed [`load`] operation.
///
/// [`load`]: crate::load
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Acquire(#[from] AcquireError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_failure_includes_stderr_and_code() {
        let err = AcquireError::ToolFailure {
            command: "go mod edit -json".to_string(),
            code: Some(1),
            stderr: "go: no go.mod file found".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("`go mod edit -json` failed with exit code 1"));
        assert!(msg.contains("no go.mod file found"));
    }

    #[test]
    fn tool_failure_without_diagnostics() {
        let err = AcquireError::ToolFailure {
            command: "go mod edit -json".to_string(),
            code: None,
            stderr: String::new(),
        };

        assert_eq!(err.to_string(), "`go mod edit -json` failed");
    }

    #[test]
    fn invalid_path_names_the_directory() {
        let err = AcquireError::InvalidPath {
            path: PathBuf::from("/i-do-not-exist"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };

        assert!(err.to_string().contains("/i-do-not-exist"));
    }
}
