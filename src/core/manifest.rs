//! Typed go.mod manifest schema and decoder.
//!
//! Field names mirror the JSON document emitted by `go mod edit -json`
//! exactly; the decoder performs a strict structural decode and never
//! repairs a malformed document. Directive semantics follow
//! <https://go.dev/ref/mod#go-mod-file>.

use serde::Deserialize;

use crate::errors::DecodeError;

/// The decoded go.mod manifest.
///
/// Sequence fields preserve the declaration order of the underlying
/// file and default to empty when the corresponding directive category
/// is absent. Version identifiers are opaque strings throughout; this
/// type applies no ordering or semver interpretation to them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Manifest {
    /// The module directive, defining the main module's path.
    #[serde(rename = "Module", default)]
    pub module: Module,

    /// The go directive: the language version the module was written
    /// against.
    #[serde(rename = "Go", default)]
    pub go: String,

    /// The toolchain directive: a suggested Go toolchain for this
    /// module.
    #[serde(rename = "Toolchain", default)]
    pub toolchain: String,

    /// Require directives: minimum required versions of dependencies.
    #[serde(rename = "Require", default)]
    pub require: Vec<Require>,

    /// Exclude directives: module versions that must not be selected.
    #[serde(rename = "Exclude", default)]
    pub exclude: Vec<Exclude>,

    /// Replace directives: substitutions of one module reference for
    /// another.
    #[serde(rename = "Replace", default)]
    pub replace: Vec<Replace>,

    /// Retract directives: version intervals of this module that
    /// should not be depended upon.
    #[serde(rename = "Retract", default)]
    pub retract: Vec<Retract>,
}

impl Manifest {
    /// Decode a `go mod edit -json` document into a manifest.
    ///
    /// The decode is all-or-nothing: any structural mismatch (invalid
    /// JSON, a scalar where a sequence was expected) fails the whole
    /// operation and no partial manifest is returned.
    pub fn decode(document: &[u8]) -> Result<Self, DecodeError> {
        tracing::trace!("decoding manifest document ({} bytes)", document.len());
        Ok(serde_json::from_slice(document)?)
    }
}

/// The module directive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Module {
    /// The main module's import path. Opaque; not validated for
    /// syntax here.
    #[serde(rename = "Path", default)]
    pub path: String,
}

/// A require directive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Require {
    /// The dependency's module path.
    #[serde(rename = "Path", default)]
    pub path: String,

    /// The minimum required version.
    #[serde(rename = "Version", default)]
    pub version: String,

    /// True when no package from the required module is directly
    /// imported by the main module's own source.
    #[serde(rename = "Indirect", default)]
    pub indirect: bool,
}

/// An exclude directive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Exclude {
    /// The path of the excluded module.
    #[serde(rename = "Path", default)]
    pub path: String,

    /// The specific excluded version.
    #[serde(rename = "Version", default)]
    pub version: String,
}

/// A replace directive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Replace {
    /// The module reference being replaced. An empty version means
    /// all versions of the path are replaced.
    #[serde(rename = "Old", default)]
    pub old: ModuleRef,

    /// The replacement. The version is empty when the path denotes a
    /// local filesystem location, and required otherwise.
    #[serde(rename = "New", default)]
    pub new: ModuleRef,
}

impl Replace {
    /// Whether this replacement points at a local filesystem path
    /// rather than a versioned module.
    pub fn is_local(&self) -> bool {
        self.new.version.is_empty()
    }
}

/// A module path plus optional version, as used by replace directives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ModuleRef {
    #[serde(rename = "Path", default)]
    pub path: String,

    #[serde(rename = "Version", default)]
    pub version: String,
}

/// A retract directive: a closed interval of this module's own
/// versions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Retract {
    /// Lower bound of the interval. Equal to `high` when a single
    /// version was retracted.
    #[serde(rename = "Low", default)]
    pub low: String,

    /// Upper bound of the interval.
    #[serde(rename = "High", default)]
    pub high: String,

    /// Free-text rationale from the directive's comment; empty when no
    /// comment was present.
    #[serde(rename = "Rationale", default)]
    pub rationale: String,
}

impl Retract {
    /// Whether the directive retracts a single version rather than a
    /// range.
    pub fn is_single(&self) -> bool {
        self.low == self.high
    }
}
