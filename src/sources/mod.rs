//! Document sources - where manifest documents come from.
//!
//! The decoder has no dependency on how its input bytes were obtained;
//! anything implementing [`DocumentSource`] can feed it. The default
//! source, [`GoCommand`], shells out to the authoritative `go` tool.
//! Tests substitute fixed-bytes fakes to avoid a subprocess dependency.

pub mod go_command;

use std::path::Path;

use crate::errors::AcquireError;

pub use go_command::GoCommand;

/// A producer of structured manifest documents.
pub trait DocumentSource {
    /// Produce the structured JSON document for the manifest found in
    /// the given directory, byte-exact and unmodified.
    fn produce_document(&self, dir: &Path) -> Result<Vec<u8>, AcquireError>;
}
