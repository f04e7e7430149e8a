//! The default document source: `go mod edit -json`.

use std::path::{Path, PathBuf};

use crate::errors::AcquireError;
use crate::sources::DocumentSource;
use crate::util::process::{find_executable, ProcessBuilder};

/// A document source backed by the `go` command.
///
/// Each call spawns exactly one `go mod edit -json` child process with
/// the resolved manifest directory as its working directory. The `go`
/// tool locates the go.mod file itself; this source never inspects the
/// directory's contents. No retries and no timeout are imposed here;
/// callers wanting a time bound must cancel externally.
#[derive(Debug, Clone)]
pub struct GoCommand {
    program: PathBuf,
}

impl GoCommand {
    /// Create a source using `go` from PATH.
    pub fn new() -> Self {
        GoCommand {
            program: find_executable("go").unwrap_or_else(|| PathBuf::from("go")),
        }
    }

    /// Create a source using a specific `go` binary.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        GoCommand {
            program: program.into(),
        }
    }
}

impl Default for GoCommand {
    fn default() -> Self {
        GoCommand::new()
    }
}

impl DocumentSource for GoCommand {
    fn produce_document(&self, dir: &Path) -> Result<Vec<u8>, AcquireError> {
        let dir = dir
            .canonicalize()
            .map_err(|source| AcquireError::InvalidPath {
                path: dir.to_path_buf(),
                source,
            })?;

        let builder = ProcessBuilder::new(&self.program)
            .args(["mod", "edit", "-json"])
            .cwd(&dir);
        let command = builder.display_command();

        let output = builder.exec().map_err(|err| AcquireError::ToolFailure {
            command: command.clone(),
            code: None,
            stderr: err.to_string(),
        })?;

        if !output.status.success() {
            return Err(AcquireError::ToolFailure {
                command,
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        tracing::debug!(
            "acquired manifest document from {} ({} bytes)",
            dir.display(),
            output.stdout.len()
        );
        Ok(output.stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nonexistent_directory_is_invalid_path() {
        let err = GoCommand::new()
            .produce_document(Path::new("/i-do-not-exist"))
            .unwrap_err();

        assert!(matches!(err, AcquireError::InvalidPath { .. }));
    }

    #[test]
    fn missing_tool_is_a_tool_failure() {
        let source = GoCommand::with_program("definitely-not-a-real-go-binary");
        let err = source.produce_document(Path::new(".")).unwrap_err();

        assert!(matches!(err, AcquireError::ToolFailure { .. }));
    }
}
