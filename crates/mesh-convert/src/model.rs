//! The polygon mesh aggregate.

use tracing::{debug, info};

use crate::bounds::BoundingBox;
use crate::error::{MeshError, MeshResult};
use crate::sequence::{Iter, Position, PositionalList};
use crate::stats::PolygonStatistics;
use crate::triangulate::{TriangulationReport, triangulate_faces};
use crate::types::{Face, Vertex};

/// A polygon mesh with running statistics.
///
/// The mesh is filled through [`ingest_vertex`](Self::ingest_vertex) and
/// [`ingest_face`](Self::ingest_face), optionally rewritten once by
/// [`triangulate`](Self::triangulate), and read for export afterwards.
/// Vertices are never removed; faces are only removed by triangulation.
///
/// # Example
///
/// ```
/// use mesh_convert::{PolygonMesh, Vertex};
///
/// let mut mesh = PolygonMesh::new();
/// for (x, y) in [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)] {
///     mesh.ingest_vertex(Vertex::from_coords(x, y, 0.0));
/// }
/// mesh.ingest_face(vec![0, 1, 2, 3]).unwrap();
///
/// mesh.triangulate().unwrap();
/// assert_eq!(mesh.face_count(), 2);
/// assert_eq!(mesh.statistics().count(3), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PolygonMesh {
    vertices: Vec<Vertex>,
    faces: PositionalList<Face>,
    statistics: PolygonStatistics,
    bounds: BoundingBox,
}

impl PolygonMesh {
    /// Create an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: PositionalList::with_capacity(face_count),
            ..Self::default()
        }
    }

    /// Append a vertex and widen the bounding box. Returns its 0-based index.
    pub fn ingest_vertex(&mut self, vertex: Vertex) -> usize {
        self.bounds.observe(&vertex.position);
        self.vertices.push(vertex);
        self.vertices.len() - 1
    }

    /// Append a face given as 0-based vertex indices.
    ///
    /// Fails with [`MeshError::DegenerateFace`] for fewer than three indices.
    /// Indices are not checked against the vertex list here, since a file may
    /// reference vertices declared further down; see
    /// [`validate_indices`](Self::validate_indices).
    pub fn ingest_face(&mut self, indices: Vec<u32>) -> MeshResult<Position> {
        let face = Face::new(indices).map_err(|indices| MeshError::DegenerateFace {
            arity: indices.len(),
        })?;
        self.statistics.increment(face.arity());
        Ok(self.faces.add_last(face)?)
    }

    /// Fan-triangulate every polygon with more than three vertices.
    ///
    /// Safe to call repeatedly: a triangulated mesh is left unchanged.
    pub fn triangulate(&mut self) -> MeshResult<TriangulationReport> {
        let report = triangulate_faces(&mut self.faces, &mut self.statistics)?;
        if report.is_noop() {
            debug!("Mesh already triangulated");
        } else {
            info!(
                "Triangulated {} polygons into {} triangles ({} -> {} faces)",
                report.faces_split,
                report.triangles_created,
                report.faces_before,
                report.faces_after
            );
        }
        Ok(report)
    }

    /// Check that every face references an existing vertex.
    ///
    /// Reports the first offending face in sequence order.
    pub fn validate_indices(&self) -> MeshResult<()> {
        let vertex_count = self.vertices.len();
        for (face_index, face) in self.faces.iter().enumerate() {
            if let Some(&bad) = face
                .indices()
                .iter()
                .find(|&&i| i as usize >= vertex_count)
            {
                return Err(MeshError::invalid_vertex_index(
                    face_index,
                    bad,
                    vertex_count,
                ));
            }
        }
        Ok(())
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of faces currently in the sequence.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// True if the mesh has no faces.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// True if every face is a triangle.
    pub fn is_triangulated(&self) -> bool {
        self.statistics.iter().all(|(arity, _)| arity == 3)
    }

    /// Vertices in ingestion order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Faces in sequence order.
    pub fn faces(&self) -> Iter<'_, Face> {
        self.faces.iter()
    }

    /// Per-arity face counts.
    pub fn statistics(&self) -> &PolygonStatistics {
        &self.statistics
    }

    /// Running bounding box over all ingested vertices.
    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    /// Integer count of the VTK `POLYGONS` section: every index plus one
    /// arity prefix per face.
    pub fn connectivity_size(&self) -> usize {
        self.statistics.connectivity_size()
    }
}
