//! Conversion settings.
//!
//! Settings can be built in code, taken from a preset, or loaded from TOML
//! or JSON:
//!
//! ```toml
//! strict_indices = false
//! triangulate = true
//! skip_unknown_records = true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error loading or saving [`ConvertParams`].
#[derive(Debug, Error)]
pub enum ParamsError {
    /// I/O error reading or writing the file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parse error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Settings for reading and converting a mesh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertParams {
    /// Reject faces that reference a vertex the file never declares
    /// (default: true).
    pub strict_indices: bool,

    /// Fan-triangulate polygons before export (default: true).
    pub triangulate: bool,

    /// Ignore records other than `v` and `f` (default: true). When false,
    /// an unknown record fails the read.
    pub skip_unknown_records: bool,
}

impl Default for ConvertParams {
    fn default() -> Self {
        Self {
            strict_indices: true,
            triangulate: true,
            skip_unknown_records: true,
        }
    }
}

impl ConvertParams {
    /// Accept whatever the file says: dangling indices are written as is
    /// and unknown records are skipped.
    pub fn permissive() -> Self {
        Self {
            strict_indices: false,
            ..Self::default()
        }
    }

    /// Reject dangling indices and unknown records.
    pub fn strict() -> Self {
        Self {
            strict_indices: true,
            triangulate: true,
            skip_unknown_records: false,
        }
    }

    /// Set whether the triangulation pass runs.
    pub fn with_triangulate(mut self, triangulate: bool) -> Self {
        self.triangulate = triangulate;
        self
    }

    /// Load settings from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ParamsError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Load settings from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ParamsError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml(&contents)
    }

    /// Serialize to a TOML string.
    pub fn to_toml(&self) -> Result<String, ParamsError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load settings from a JSON string.
    pub fn from_json(json_str: &str) -> Result<Self, ParamsError> {
        Ok(serde_json::from_str(json_str)?)
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String, ParamsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let params = ConvertParams::default();
        assert!(params.strict_indices);
        assert!(params.triangulate);
        assert!(params.skip_unknown_records);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let params = ConvertParams::from_toml("strict_indices = false\n").unwrap();
        assert_eq!(params, ConvertParams::permissive());
    }

    #[test]
    fn test_toml_file() {
        let mut file = NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(file, "triangulate = false").unwrap();
        writeln!(file, "skip_unknown_records = false").unwrap();

        let params = ConvertParams::from_toml_file(file.path()).unwrap();
        assert!(!params.triangulate);
        assert!(!params.skip_unknown_records);
        assert!(params.strict_indices);
    }

    #[test]
    fn test_toml_and_json_agree() {
        let params = ConvertParams::strict().with_triangulate(false);
        let from_toml = ConvertParams::from_toml(&params.to_toml().unwrap()).unwrap();
        let from_json = ConvertParams::from_json(&params.to_json().unwrap()).unwrap();
        assert_eq!(from_toml, params);
        assert_eq!(from_json, params);
    }

    #[test]
    fn test_bad_toml() {
        let err = ConvertParams::from_toml("triangulate = \"yes\"").unwrap_err();
        assert!(matches!(err, ParamsError::TomlParse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = ConvertParams::from_toml_file("/nonexistent/params.toml").unwrap_err();
        assert!(matches!(err, ParamsError::Io(_)));
    }
}
