//! High-level operations: directory in, manifest out.

use std::path::Path;

use crate::core::manifest::Manifest;
use crate::errors::Error;
use crate::sources::{DocumentSource, GoCommand};

/// Load the go.mod manifest from a directory.
///
/// Acquires the structured document via the `go` command, then decodes
/// it, short-circuiting on the first error. This is the entry point
/// most callers need.
pub fn load(dir: impl AsRef<Path>) -> Result<Manifest, Error> {
    load_with(&GoCommand::new(), dir)
}

/// Load the go.mod manifest from a directory using the given document
/// source.
///
/// Useful for callers that cache documents or substitute a fake source
/// in tests.
pub fn load_with(source: &impl DocumentSource, dir: impl AsRef<Path>) -> Result<Manifest, Error> {
    let document = source.produce_document(dir.as_ref())?;
    let manifest = Manifest::decode(&document)?;
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AcquireError;

    /// A document source returning fixed bytes, no subprocess involved.
    struct FixedDocument(&'static [u8]);

    impl DocumentSource for FixedDocument {
        fn produce_document(&self, _dir: &Path) -> Result<Vec<u8>, AcquireError> {
            Ok(self.0.to_vec())
        }
    }

    struct FailingSource;

    impl DocumentSource for FailingSource {
        fn produce_document(&self, dir: &Path) -> Result<Vec<u8>, AcquireError> {
            Err(AcquireError::InvalidPath {
                path: dir.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"),
            })
        }
    }

    #[test]
    fn load_with_decodes_the_acquired_document() {
        let source = FixedDocument(
            br#"{"Module": {"Path": "example.com/m"}, "Go": "1.20",
                "Require": [{"Path": "example.com/dep", "Version": "v0.3.1"}]}"#,
        );

        let m = load_with(&source, "unused").unwrap();
        assert_eq!(m.module.path, "example.com/m");
        assert_eq!(m.go, "1.20");
        assert_eq!(m.require.len(), 1);
        assert_eq!(m.require[0].version, "v0.3.1");
    }

    #[test]
    fn acquisition_errors_short_circuit() {
        let err = load_with(&FailingSource, "/i-do-not-exist").unwrap_err();
        assert!(matches!(err, Error::Acquire(_)));
    }

    #[test]
    fn malformed_documents_surface_as_decode_errors() {
        let err = load_with(&FixedDocument(b"{ not json"), "unused").unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn repeated_loads_are_identical() {
        let source = FixedDocument(
            br#"{"Module": {"Path": "example.com/m"},
                "Retract": [{"Low": "v1.0.0", "High": "v1.0.0", "Rationale": "broken"}]}"#,
        );

        let a = load_with(&source, "unused").unwrap();
        let b = load_with(&source, "unused").unwrap();
        assert_eq!(a, b);
    }
}
