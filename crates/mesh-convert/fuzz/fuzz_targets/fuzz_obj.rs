#![no_main]

use libfuzzer_sys::fuzz_target;
use mesh_convert::{ConvertParams, PolygonMesh};
use std::io::Write;
use tempfile::NamedTempFile;

fuzz_target!(|data: &[u8]| {
    let mut file = match NamedTempFile::with_suffix(".obj") {
        Ok(f) => f,
        Err(_) => return,
    };

    if file.write_all(data).is_err() {
        return;
    }

    // Loading, triangulating and writing must never panic
    let Ok(mut mesh) = PolygonMesh::load(file.path(), &ConvertParams::default()) else {
        return;
    };
    if mesh.triangulate().is_err() {
        return;
    }

    let mut out = Vec::new();
    let _ = mesh_convert::io::write_vtk(&mesh, &mut out, "fuzz.obj");
});
