//! Error types for mesh conversion with rich diagnostics.
//!
//! This module provides:
//! - Machine-readable error codes for programmatic handling
//! - Rich context (which file, which line, which face)
//! - Recovery suggestions for common issues
//! - Terminal display via miette
//!
//! # Error Codes
//!
//! Each error has a unique code in the format `MESH-XXXX`:
//! - `MESH-1xxx`: I/O errors (file reading, writing, parsing)
//! - `MESH-2xxx`: Validation errors (face arity, vertex references)
//! - `MESH-3xxx`: Internal state errors (positions, statistics, bounds)
//! - `MESH-4xxx`: Format errors (unsupported or malformed data)
//!
//! # Example
//!
//! ```rust,ignore
//! use mesh_convert::{MeshError, ErrorCode};
//!
//! let err = MeshError::invalid_vertex_index(5, 100, 50);
//! println!("Error code: {}", err.code()); // MESH-2002
//! println!("Recovery: {}", err.recovery_suggestion());
//! ```

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

use crate::sequence::Position;

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;

/// Machine-readable error codes for mesh operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // I/O errors (1xxx)
    /// MESH-1001: Failed to read file
    IoRead = 1001,
    /// MESH-1002: Failed to write file
    IoWrite = 1002,
    /// MESH-1003: Token is not a number
    NumericParse = 1003,

    // Validation errors (2xxx)
    /// MESH-2001: Face has fewer than three vertices or a non-positive index
    MalformedFace = 2001,
    /// MESH-2002: Face references a vertex that does not exist
    InvalidVertexIndex = 2002,
    /// MESH-2003: Vertex record has fewer than three components
    MalformedVertex = 2003,

    // Internal state errors (3xxx)
    /// MESH-3001: Position no longer addresses a live element
    InvalidPosition = 3001,
    /// MESH-3002: Polygon statistics would drop below zero
    StatisticsUnderflow = 3002,
    /// MESH-3003: Bounding box queried before any vertex was observed
    EmptyBounds = 3003,

    // Format errors (4xxx)
    /// MESH-4001: Unsupported file extension
    UnsupportedFormat = 4001,
    /// MESH-4002: Unrecognized record type
    MalformedRecord = 4002,
}

impl ErrorCode {
    /// Returns the error code as a string in the format `MESH-XXXX`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::IoRead => "MESH-1001",
            ErrorCode::IoWrite => "MESH-1002",
            ErrorCode::NumericParse => "MESH-1003",
            ErrorCode::MalformedFace => "MESH-2001",
            ErrorCode::InvalidVertexIndex => "MESH-2002",
            ErrorCode::MalformedVertex => "MESH-2003",
            ErrorCode::InvalidPosition => "MESH-3001",
            ErrorCode::StatisticsUnderflow => "MESH-3002",
            ErrorCode::EmptyBounds => "MESH-3003",
            ErrorCode::UnsupportedFormat => "MESH-4001",
            ErrorCode::MalformedRecord => "MESH-4002",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Recovery suggestions for mesh errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecoverySuggestion {
    /// Re-export the file from the original software with different settings.
    ReexportFile { format: Option<String> },
    /// Use a different file format.
    UseDifferentFormat { suggested: Vec<String> },
    /// Check the source file for issues.
    CheckSourceFile { checks: Vec<String> },
    /// Relax conversion settings.
    AdjustParameters { parameters: Vec<(String, String)> },
    /// The failure is a bug in the caller, not in the data.
    ReportBug,
}

impl std::fmt::Display for RecoverySuggestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecoverySuggestion::ReexportFile { format } => {
                if let Some(fmt) = format {
                    write!(
                        f,
                        "Try re-exporting the mesh as {} from the original software",
                        fmt
                    )
                } else {
                    write!(f, "Try re-exporting the mesh from the original software")
                }
            }
            RecoverySuggestion::UseDifferentFormat { suggested } => {
                write!(f, "Try using a different format: {}", suggested.join(", "))
            }
            RecoverySuggestion::CheckSourceFile { checks } => {
                write!(f, "Check the source file for: {}", checks.join(", "))
            }
            RecoverySuggestion::AdjustParameters { parameters } => {
                let params: Vec<String> = parameters
                    .iter()
                    .map(|(k, v)| format!("{} = {}", k, v))
                    .collect();
                write!(f, "Try adjusting: {}", params.join(", "))
            }
            RecoverySuggestion::ReportBug => {
                write!(f, "This is an internal error; please report it")
            }
        }
    }
}

/// Location information for mesh errors.
#[derive(Debug, Clone)]
pub enum MeshLocation {
    /// Error at a specific face in sequence order.
    Face { index: usize },
    /// Error in a file at a specific line.
    File { path: PathBuf, line: Option<usize> },
}

impl std::fmt::Display for MeshLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeshLocation::Face { index } => write!(f, "face {}", index),
            MeshLocation::File { path, line } => {
                if let Some(l) = line {
                    write!(f, "{}:{}", path.display(), l)
                } else {
                    write!(f, "{}", path.display())
                }
            }
        }
    }
}

/// Misuse of a [`Position`] against a [`PositionalList`](crate::PositionalList).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PositionError {
    /// The element at this position was already deleted.
    #[error("position {0:?} was deleted")]
    Deleted(Position),

    /// The position was never issued by this list.
    #[error("position {0:?} does not belong to this list")]
    Foreign(Position),

    /// Every slot index the list can address has been handed out.
    #[error("positional list is out of slots after {slots} insertions")]
    Exhausted { slots: usize },
}

/// Errors that can occur while reading, triangulating or writing a mesh.
#[derive(Debug, Error, Diagnostic)]
pub enum MeshError {
    /// Error reading from a file.
    #[error("failed to read mesh from {path}")]
    #[diagnostic(
        code(mesh::io::read),
        help("Check that the file exists and is readable. Try: ls -la {}", path.display())
    )]
    IoRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error writing to a file.
    #[error("failed to write mesh to {path}")]
    #[diagnostic(
        code(mesh::io::write),
        help("Check that the directory exists and is writable")
    )]
    IoWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A coordinate or index token is not a number.
    #[error("{path}:{line}: cannot parse {token:?} as a number")]
    #[diagnostic(
        code(mesh::parse::numeric),
        help("Vertex coordinates must be decimal numbers and face entries plain 1-based integers")
    )]
    NumericParse {
        path: PathBuf,
        line: usize,
        token: String,
    },

    /// Unsupported file extension.
    #[error("unsupported mesh format: {extension:?}")]
    #[diagnostic(
        code(mesh::format::unsupported),
        help("Input must be a Wavefront OBJ file (.obj); output is legacy VTK (.vtk)")
    )]
    UnsupportedFormat { extension: Option<String> },

    /// Unrecognized record type in strict mode.
    #[error("{path}:{line}: unrecognized record type {keyword:?}")]
    #[diagnostic(
        code(mesh::format::record),
        help("Only `v` and `f` records are understood. Enable skip_unknown_records to ignore the rest.")
    )]
    MalformedRecord {
        path: PathBuf,
        line: usize,
        keyword: String,
    },

    /// Face record with fewer than three vertices or a non-positive index.
    #[error("{path}:{line}: malformed face: {details}")]
    #[diagnostic(
        code(mesh::validation::face),
        help("Every face needs at least three 1-based vertex references")
    )]
    MalformedFace {
        path: PathBuf,
        line: usize,
        details: String,
    },

    /// Face with fewer than three vertices handed to the mesh directly.
    #[error("face has {arity} vertices, at least 3 are required")]
    #[diagnostic(code(mesh::validation::face))]
    DegenerateFace { arity: usize },

    /// Vertex record with fewer than three components.
    #[error("{path}:{line}: vertex has {components} components, expected 3")]
    #[diagnostic(
        code(mesh::validation::vertex),
        help("Every `v` record needs x, y and z coordinates")
    )]
    MalformedVertex {
        path: PathBuf,
        line: usize,
        components: usize,
    },

    /// Face references a vertex that does not exist.
    #[error(
        "invalid vertex index: face {face_index} references vertex {vertex_index}, but mesh only has {vertex_count} vertices"
    )]
    #[diagnostic(
        code(mesh::validation::vertex_index),
        help("Check the mesh export settings, or convert with --permissive to keep the reference as is")
    )]
    InvalidVertexIndex {
        face_index: usize,
        vertex_index: u32,
        vertex_count: usize,
    },

    /// A face position was invalid or could not be allocated.
    #[error("invalid face position: {0}")]
    #[diagnostic(code(mesh::internal::position))]
    Position(#[from] PositionError),

    /// Polygon statistics were decremented below zero.
    #[error("no {arity}-sided polygon left to remove from the statistics")]
    #[diagnostic(code(mesh::internal::statistics))]
    StatisticsUnderflow { arity: usize },

    /// Bounding box queried before any vertex was observed.
    #[error("bounding box is undefined: no vertex has been observed")]
    #[diagnostic(
        code(mesh::internal::bounds),
        help("The mesh must contain at least one `v` record")
    )]
    EmptyBounds,
}

impl MeshError {
    /// Returns the machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            MeshError::IoRead { .. } => ErrorCode::IoRead,
            MeshError::IoWrite { .. } => ErrorCode::IoWrite,
            MeshError::NumericParse { .. } => ErrorCode::NumericParse,
            MeshError::UnsupportedFormat { .. } => ErrorCode::UnsupportedFormat,
            MeshError::MalformedRecord { .. } => ErrorCode::MalformedRecord,
            MeshError::MalformedFace { .. } | MeshError::DegenerateFace { .. } => {
                ErrorCode::MalformedFace
            }
            MeshError::MalformedVertex { .. } => ErrorCode::MalformedVertex,
            MeshError::InvalidVertexIndex { .. } => ErrorCode::InvalidVertexIndex,
            MeshError::Position(_) => ErrorCode::InvalidPosition,
            MeshError::StatisticsUnderflow { .. } => ErrorCode::StatisticsUnderflow,
            MeshError::EmptyBounds => ErrorCode::EmptyBounds,
        }
    }

    /// Returns a recovery suggestion for this error.
    pub fn recovery_suggestion(&self) -> RecoverySuggestion {
        match self {
            MeshError::IoRead { .. } => RecoverySuggestion::CheckSourceFile {
                checks: vec!["file exists".into(), "file permissions".into()],
            },
            MeshError::IoWrite { .. } => RecoverySuggestion::CheckSourceFile {
                checks: vec!["directory exists".into(), "write permissions".into()],
            },
            MeshError::NumericParse { .. } | MeshError::MalformedVertex { .. } => {
                RecoverySuggestion::ReexportFile {
                    format: Some("OBJ without texture or normal indices".into()),
                }
            }
            MeshError::UnsupportedFormat { .. } => RecoverySuggestion::UseDifferentFormat {
                suggested: vec!["OBJ".into()],
            },
            MeshError::MalformedRecord { .. } => RecoverySuggestion::AdjustParameters {
                parameters: vec![("skip_unknown_records".into(), "true".into())],
            },
            MeshError::MalformedFace { .. } | MeshError::DegenerateFace { .. } => {
                RecoverySuggestion::CheckSourceFile {
                    checks: vec![
                        "faces with fewer than 3 vertices".into(),
                        "zero or negative indices".into(),
                    ],
                }
            }
            MeshError::InvalidVertexIndex { .. } => RecoverySuggestion::AdjustParameters {
                parameters: vec![("strict_indices".into(), "false".into())],
            },
            MeshError::EmptyBounds => RecoverySuggestion::CheckSourceFile {
                checks: vec!["mesh has vertices".into()],
            },
            MeshError::Position(_) | MeshError::StatisticsUnderflow { .. } => {
                RecoverySuggestion::ReportBug
            }
        }
    }

    /// Returns location information if available.
    pub fn location(&self) -> Option<MeshLocation> {
        match self {
            MeshError::InvalidVertexIndex { face_index, .. } => Some(MeshLocation::Face {
                index: *face_index,
            }),
            MeshError::NumericParse { path, line, .. }
            | MeshError::MalformedRecord { path, line, .. }
            | MeshError::MalformedFace { path, line, .. }
            | MeshError::MalformedVertex { path, line, .. } => Some(MeshLocation::File {
                path: path.clone(),
                line: Some(*line),
            }),
            MeshError::IoRead { path, .. } | MeshError::IoWrite { path, .. } => {
                Some(MeshLocation::File {
                    path: path.clone(),
                    line: None,
                })
            }
            _ => None,
        }
    }

    // Constructor helpers for common error patterns

    /// Create an IoRead error.
    pub fn io_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MeshError::IoRead {
            path: path.into(),
            source,
        }
    }

    /// Create an IoWrite error.
    pub fn io_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MeshError::IoWrite {
            path: path.into(),
            source,
        }
    }

    /// Create a NumericParse error.
    pub fn numeric_parse(path: impl Into<PathBuf>, line: usize, token: impl Into<String>) -> Self {
        MeshError::NumericParse {
            path: path.into(),
            line,
            token: token.into(),
        }
    }

    /// Create a MalformedFace error.
    pub fn malformed_face(
        path: impl Into<PathBuf>,
        line: usize,
        details: impl Into<String>,
    ) -> Self {
        MeshError::MalformedFace {
            path: path.into(),
            line,
            details: details.into(),
        }
    }

    /// Create an InvalidVertexIndex error.
    pub fn invalid_vertex_index(face_index: usize, vertex_index: u32, vertex_count: usize) -> Self {
        MeshError::InvalidVertexIndex {
            face_index,
            vertex_index,
            vertex_count,
        }
    }

    /// Create an UnsupportedFormat error.
    pub fn unsupported_format(extension: Option<String>) -> Self {
        MeshError::UnsupportedFormat { extension }
    }
}
