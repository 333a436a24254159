//! Legacy ASCII VTK polydata writer.
//!
//! ```text
//! # vtk DataFile Version 3.0
//! converted from <source>
//! ASCII
//! DATASET POLYDATA
//! POINTS <vertex count> float
//! <x y z per vertex>
//!
//! POLYGONS <face count> <connectivity size>
//! <arity i1 ... iarity per face>
//! ```

use std::io::{BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::info;

use crate::PolygonMesh;
use crate::error::{MeshError, MeshResult};

/// Save a mesh as legacy VTK.
///
/// The file is written to a temporary file next to `path` and renamed into
/// place only once it is complete, so a failed write never leaves a partial
/// file behind.
pub fn save_vtk(mesh: &PolygonMesh, path: &Path, source_name: &str) -> MeshResult<()> {
    info!("Saving mesh to {:?} (VTK format)", path);

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| MeshError::io_write(path, e))?;

    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        write_vtk(mesh, &mut writer, source_name).map_err(|e| MeshError::io_write(path, e))?;
        writer.flush().map_err(|e| MeshError::io_write(path, e))?;
    }

    tmp.persist(path).map_err(|e| MeshError::io_write(path, e.error))?;

    info!(
        "Saved {} vertices and {} faces to {:?}",
        mesh.vertex_count(),
        mesh.face_count(),
        path
    );
    Ok(())
}

/// Write a mesh as legacy VTK to any writer.
///
/// Vertex coordinates are written with the text they were read with.
pub fn write_vtk<W: Write>(
    mesh: &PolygonMesh,
    mut writer: W,
    source_name: &str,
) -> std::io::Result<()> {
    writeln!(writer, "# vtk DataFile Version 3.0")?;
    writeln!(writer, "converted from {}", source_name)?;
    writeln!(writer, "ASCII")?;
    writeln!(writer, "DATASET POLYDATA")?;
    writeln!(writer, "POINTS {} float", mesh.vertex_count())?;

    for vertex in mesh.vertices() {
        writeln!(writer, "{}", vertex.text.join(" "))?;
    }
    writeln!(writer)?;

    writeln!(
        writer,
        "POLYGONS {} {}",
        mesh.face_count(),
        mesh.connectivity_size()
    )?;
    for face in mesh.faces() {
        writeln!(writer, "{}", face)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vertex;
    use tempfile::tempdir;

    fn quad() -> PolygonMesh {
        let mut mesh = PolygonMesh::new();
        for (x, y, z) in [("0", "0", "0"), ("1", "0", "0"), ("0", "1", "0"), ("0", "0", "1")] {
            mesh.ingest_vertex(Vertex::parse(x, y, z).unwrap());
        }
        mesh.ingest_face(vec![0, 1, 2, 3]).unwrap();
        mesh
    }

    fn render(mesh: &PolygonMesh) -> String {
        let mut out = Vec::new();
        write_vtk(mesh, &mut out, "quad.obj").unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_triangulated_quad_layout() {
        let mut mesh = quad();
        mesh.triangulate().unwrap();

        let expected = "\
# vtk DataFile Version 3.0
converted from quad.obj
ASCII
DATASET POLYDATA
POINTS 4 float
0 0 0
1 0 0
0 1 0
0 0 1

POLYGONS 2 8
3 0 1 2
3 0 2 3
";
        assert_eq!(render(&mesh), expected);
    }

    #[test]
    fn test_untriangulated_polygon_header() {
        let text = render(&quad());
        assert!(text.contains("POLYGONS 1 5\n4 0 1 2 3\n"));
    }

    #[test]
    fn test_save_creates_file_without_leftovers() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("quad.vtk");

        save_vtk(&quad(), &path, "quad.obj").unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, render(&quad()));
        let entries = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("quad.vtk");
        let err = save_vtk(&quad(), &path, "quad.obj").unwrap_err();
        assert!(matches!(err, MeshError::IoWrite { .. }));
        assert!(!path.exists());
    }
}
