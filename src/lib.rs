//! gomod - a typed reader for `go.mod` manifests.
//!
//! This crate exposes a structured view of a Go module's manifest: its
//! module path, language-version requirement, and the require, exclude,
//! replace, and retract directive lists. It never parses go.mod text
//! itself; the `go` command is the sole authority for the manifest
//! grammar, and this crate decodes the JSON document produced by
//! `go mod edit -json` into an immutable [`Manifest`] tree.
//!
//! A Go installation is therefore required for [`load`] to work:
//!
//! ```no_run
//! let manifest = gomod::load("./testdata/default")?;
//!
//! println!("Module path: {}", manifest.module.path);
//! println!("Go version: {}", manifest.go);
//! # Ok::<(), gomod::Error>(())
//! ```
//!
//! Callers that already hold a JSON document (for example, cached from a
//! prior acquisition) can decode it directly with [`Manifest::decode`],
//! or plug any [`DocumentSource`] into [`load_with`].

pub mod core;
pub mod errors;
pub mod ops;
pub mod sources;
pub mod util;

pub use crate::core::manifest::{
    Exclude, Manifest, Module, ModuleRef, Replace, Require, Retract,
};
pub use crate::errors::{AcquireError, DecodeError, Error};
pub use crate::ops::{load, load_with};
pub use crate::sources::{DocumentSource, GoCommand};
