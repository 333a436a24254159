//! Wavefront OBJ reader.
//!
//! Only `v x y z` and `f i1 i2 ... ik` records are understood. Blank lines
//! and `#` comments are skipped; other records are skipped or rejected
//! depending on [`ConvertParams::skip_unknown_records`]. Face references are
//! 1-based in the file and 0-based in memory.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, trace, warn};

use crate::error::{MeshError, MeshResult};
use crate::params::ConvertParams;
use crate::tracing_ext::{OperationTimer, log_io_operation, log_mesh_stats};
use crate::{PolygonMesh, Vertex};

/// Load a mesh from an OBJ file.
pub fn load_obj(path: &Path, params: &ConvertParams) -> MeshResult<PolygonMesh> {
    let file = File::open(path).map_err(|e| MeshError::io_read(path, e))?;
    let mesh = read_obj(BufReader::new(file), path, params)?;
    log_io_operation("read", path, "obj");
    Ok(mesh)
}

/// Read OBJ records from `reader`. `source` is only used in error messages.
pub fn read_obj<R: BufRead>(
    reader: R,
    source: &Path,
    params: &ConvertParams,
) -> MeshResult<PolygonMesh> {
    let _timer = OperationTimer::new("read_obj");
    let mut mesh = PolygonMesh::new();
    let mut skipped = 0usize;

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.map_err(|e| MeshError::io_read(source, e))?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("v") => {
                let coords: Vec<&str> = tokens.collect();
                mesh.ingest_vertex(parse_vertex(&coords, source, line_no)?);
            }
            Some("f") => {
                let indices = tokens
                    .map(|token| parse_index(token, source, line_no))
                    .collect::<MeshResult<Vec<u32>>>()?;
                let arity = indices.len();
                mesh.ingest_face(indices).map_err(|_| {
                    MeshError::malformed_face(
                        source,
                        line_no,
                        format!("face has {} vertices, at least 3 are required", arity),
                    )
                })?;
            }
            Some(keyword) => {
                if !params.skip_unknown_records {
                    return Err(MeshError::MalformedRecord {
                        path: source.to_path_buf(),
                        line: line_no,
                        keyword: keyword.to_string(),
                    });
                }
                trace!(line = line_no, keyword, "Skipping record");
                skipped += 1;
            }
            None => {}
        }
    }

    if skipped > 0 {
        warn!("Skipped {} unsupported records in {:?}", skipped, source);
    }
    debug!(
        "OBJ contains {} vertices, {} faces",
        mesh.vertex_count(),
        mesh.face_count()
    );

    if params.strict_indices {
        mesh.validate_indices()?;
    }
    log_mesh_stats(&mesh, "read_obj");

    Ok(mesh)
}

fn parse_vertex(coords: &[&str], source: &Path, line: usize) -> MeshResult<Vertex> {
    match coords {
        [x, y, z, ..] => {
            if coords.len() > 3 {
                trace!(line, extra = coords.len() - 3, "Ignoring extra vertex components");
            }
            Vertex::parse(x, y, z).map_err(|token| MeshError::numeric_parse(source, line, token))
        }
        _ => Err(MeshError::MalformedVertex {
            path: source.to_path_buf(),
            line,
            components: coords.len(),
        }),
    }
}

/// Convert one 1-based face reference to a 0-based index.
fn parse_index(token: &str, source: &Path, line: usize) -> MeshResult<u32> {
    let value: i64 = token
        .parse()
        .map_err(|_| MeshError::numeric_parse(source, line, token))?;
    if value <= 0 {
        return Err(MeshError::malformed_face(
            source,
            line,
            format!("vertex reference {} is not a positive 1-based index", value),
        ));
    }
    u32::try_from(value - 1).map_err(|_| {
        MeshError::malformed_face(
            source,
            line,
            format!("vertex reference {} is out of range", value),
        )
    })
}
