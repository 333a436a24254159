//! Polygon mesh conversion from Wavefront OBJ to legacy VTK.
//!
//! This crate reads an OBJ file's vertices and polygon faces, fan-triangulates
//! every polygon with more than three vertices, and writes the result as
//! ASCII VTK polydata. While it does so it keeps running statistics: how many
//! faces of each arity the mesh has, and the axis-aligned bounding box of its
//! vertices.
//!
//! # Features
//!
//! - **Positional face sequence**: [`PositionalList`] lets a face be replaced
//!   by several triangles while a walk over the same sequence is in progress
//! - **Triangulation**: fan triangulation from each polygon's first vertex,
//!   preserving winding and output order
//! - **Statistics**: per-arity face counts with a named histogram, and a
//!   running bounding box
//! - **File I/O**: OBJ reader with line-accurate errors, atomic VTK writer
//!
//! # Quick Start
//!
//! ```no_run
//! use mesh_convert::{ConvertParams, MeshSummary, PolygonMesh};
//!
//! let mut mesh = PolygonMesh::load("model.obj", &ConvertParams::default()).unwrap();
//! println!("{}", MeshSummary::of(&mesh));
//!
//! mesh.triangulate().unwrap();
//! mesh.save("model.vtk", "model.obj").unwrap();
//! ```
//!
//! # Logging
//!
//! The crate logs through `tracing`. Set `RUST_LOG=mesh_convert=debug` with a
//! subscriber installed to see per-stage counts, and
//! `RUST_LOG=mesh_convert::timing=info` for stage timings.

mod bounds;
mod error;
mod model;
mod params;
mod report;
mod sequence;
mod stats;
mod triangulate;
mod types;

pub mod io;
pub mod tracing_ext;

pub use bounds::{AXES, BoundingBox};
pub use error::{
    ErrorCode, MeshError, MeshLocation, MeshResult, PositionError, RecoverySuggestion,
};
pub use io::{MeshFormat, load_mesh, save_mesh};
pub use model::PolygonMesh;
pub use params::{ConvertParams, ParamsError};
pub use report::{BoundsSummary, MeshSummary, format_float};
pub use sequence::{Iter, Position, PositionalList};
pub use stats::{PolygonCount, PolygonName, PolygonStatistics};
pub use triangulate::{TriangulationReport, triangulate_faces};
pub use types::{Face, Vertex};

use std::path::{Path, PathBuf};

impl PolygonMesh {
    /// Load a mesh from file, checking the extension first.
    pub fn load(path: impl AsRef<Path>, params: &ConvertParams) -> MeshResult<Self> {
        io::load_mesh(path.as_ref(), params)
    }

    /// Save the mesh as VTK, recording `source_name` in the header.
    pub fn save(&self, path: impl AsRef<Path>, source_name: &str) -> MeshResult<()> {
        io::save_mesh(self, path.as_ref(), source_name)
    }

    /// Snapshot counts, histogram and bounds for reporting.
    pub fn summary(&self) -> MeshSummary {
        MeshSummary::of(self)
    }
}

/// Default output location for `input`: its file name with a `.vtk`
/// extension, in the current directory.
pub fn default_output_path(input: &Path) -> MeshResult<PathBuf> {
    let stem = input
        .file_stem()
        .ok_or_else(|| MeshError::unsupported_format(None))?;
    let mut name = stem.to_os_string();
    name.push(".");
    name.push(MeshFormat::Vtk.extension());
    Ok(PathBuf::from(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("/data/meshes/bunny.obj")).unwrap(),
            PathBuf::from("bunny.vtk")
        );
        assert_eq!(
            default_output_path(Path::new("teapot.OBJ")).unwrap(),
            PathBuf::from("teapot.vtk")
        );
        assert_eq!(
            default_output_path(Path::new("scan.v2.obj")).unwrap(),
            PathBuf::from("scan.v2.vtk")
        );
        assert!(default_output_path(Path::new("/")).is_err());
    }
}
