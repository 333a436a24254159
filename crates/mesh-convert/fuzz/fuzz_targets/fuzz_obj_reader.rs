#![no_main]

use libfuzzer_sys::fuzz_target;
use mesh_convert::ConvertParams;
use mesh_convert::io::read_obj;
use std::path::Path;

fuzz_target!(|data: &[u8]| {
    // Permissive reading keeps dangling references, so triangulation and
    // statistics must cope with them
    let params = ConvertParams::permissive();
    if let Ok(mut mesh) = read_obj(data, Path::new("fuzz.obj"), &params) {
        let before = mesh.face_count();
        if let Ok(report) = mesh.triangulate() {
            assert_eq!(report.faces_before, before);
            assert_eq!(mesh.statistics().total_faces(), mesh.face_count());
        }
    }
});
