//! Shared utilities

pub mod process;

pub use process::ProcessBuilder;
