//! Core data structures for gomod.
//!
//! This module contains the typed manifest tree decoded from the
//! `go mod edit -json` document.

pub mod manifest;

pub use manifest::Manifest;
