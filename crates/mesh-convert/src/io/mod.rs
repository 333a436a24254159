//! Mesh file I/O: Wavefront OBJ in, legacy VTK out.

mod obj;
mod vtk;

use std::path::Path;

use tracing::info;

use crate::error::{MeshError, MeshResult};
use crate::params::ConvertParams;
use crate::PolygonMesh;

pub use obj::{load_obj, read_obj};
pub use vtk::{save_vtk, write_vtk};

/// Supported mesh file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshFormat {
    /// Wavefront OBJ, read only.
    Obj,
    /// Legacy ASCII VTK polydata, write only.
    Vtk,
}

impl MeshFormat {
    /// Detect format from file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .and_then(|ext| match ext.as_str() {
                "obj" => Some(MeshFormat::Obj),
                "vtk" => Some(MeshFormat::Vtk),
                _ => None,
            })
    }

    /// Canonical file extension.
    pub fn extension(&self) -> &'static str {
        match self {
            MeshFormat::Obj => "obj",
            MeshFormat::Vtk => "vtk",
        }
    }
}

fn unsupported(path: &Path) -> MeshError {
    MeshError::unsupported_format(path.extension().and_then(|e| e.to_str()).map(String::from))
}

/// Load a mesh, checking that the path names a readable format.
pub fn load_mesh(path: &Path, params: &ConvertParams) -> MeshResult<PolygonMesh> {
    match MeshFormat::from_path(path) {
        Some(MeshFormat::Obj) => {
            info!("Loading mesh from {:?} (format: Obj)", path);
            load_obj(path, params)
        }
        _ => Err(unsupported(path)),
    }
}

/// Save a mesh, checking that the path names a writable format.
///
/// `source_name` is recorded in the output header.
pub fn save_mesh(mesh: &PolygonMesh, path: &Path, source_name: &str) -> MeshResult<()> {
    match MeshFormat::from_path(path) {
        Some(MeshFormat::Vtk) => save_vtk(mesh, path, source_name),
        _ => Err(unsupported(path)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection() {
        assert_eq!(
            MeshFormat::from_path(Path::new("bunny.obj")),
            Some(MeshFormat::Obj)
        );
        assert_eq!(
            MeshFormat::from_path(Path::new("BUNNY.OBJ")),
            Some(MeshFormat::Obj)
        );
        assert_eq!(
            MeshFormat::from_path(Path::new("out/bunny.vtk")),
            Some(MeshFormat::Vtk)
        );
        assert_eq!(MeshFormat::from_path(Path::new("bunny.stl")), None);
        assert_eq!(MeshFormat::from_path(Path::new("obj")), None);
        assert_eq!(MeshFormat::Vtk.extension(), "vtk");
    }

    #[test]
    fn test_load_rejects_unknown_extension() {
        let err = load_mesh(Path::new("model.stl"), &ConvertParams::default()).unwrap_err();
        match err {
            MeshError::UnsupportedFormat { extension } => {
                assert_eq!(extension.as_deref(), Some("stl"));
            }
            other => panic!("Expected UnsupportedFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_load_rejects_output_format() {
        assert!(matches!(
            load_mesh(Path::new("model.vtk"), &ConvertParams::default()),
            Err(MeshError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_save_rejects_unknown_extension() {
        let mesh = PolygonMesh::new();
        assert!(matches!(
            save_mesh(&mesh, Path::new("model.obj"), "model.obj"),
            Err(MeshError::UnsupportedFormat { .. })
        ));
    }
}
