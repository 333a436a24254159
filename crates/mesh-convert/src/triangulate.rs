//! Fan triangulation of polygon faces.
//!
//! Every face with more than three vertices is replaced, in place, by the
//! fan of triangles that share its first vertex. The triangles are inserted
//! directly before the face they replace, so output order follows input
//! order and the original winding is kept.

use serde::Serialize;
use tracing::{debug, trace};

use crate::error::MeshResult;
use crate::sequence::PositionalList;
use crate::stats::PolygonStatistics;
use crate::tracing_ext::OperationTimer;
use crate::types::Face;

/// Summary of one triangulation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TriangulationReport {
    /// Faces in the sequence before the pass.
    pub faces_before: usize,
    /// Faces in the sequence after the pass.
    pub faces_after: usize,
    /// Polygons with more than three vertices that were replaced.
    pub faces_split: usize,
    /// Triangles inserted in their place.
    pub triangles_created: usize,
}

impl TriangulationReport {
    /// True if the pass changed nothing.
    pub fn is_noop(&self) -> bool {
        self.faces_split == 0
    }
}

/// Replace every non-triangular face of `faces` by its fan triangulation.
///
/// `stats` is kept in step: each inserted triangle increments the arity-3
/// bucket, each consumed polygon decrements its own bucket, and empty buckets
/// are compacted once the whole pass is done. Running this on a sequence of
/// triangles leaves both arguments unchanged.
pub fn triangulate_faces(
    faces: &mut PositionalList<Face>,
    stats: &mut PolygonStatistics,
) -> MeshResult<TriangulationReport> {
    let _timer = OperationTimer::with_faces("triangulate", faces.len());

    let mut report = TriangulationReport {
        faces_before: faces.len(),
        ..Default::default()
    };

    let mut cursor = faces.first();
    while let Some(position) = cursor {
        let face = faces.get(position)?;
        if face.is_triangle() {
            cursor = faces.after(position)?;
            continue;
        }

        let arity = face.arity();
        let fan: Vec<Face> = face.fan().collect();
        trace!(arity, triangles = fan.len(), "splitting face");

        // The face must be counted before anything is inserted for it
        stats.decrement(arity)?;
        for triangle in fan {
            faces.add_before(position, triangle)?;
            stats.increment(3);
            report.triangles_created += 1;
        }

        cursor = faces.after(position)?;
        faces.delete(position)?;
        report.faces_split += 1;
    }

    stats.compact();
    report.faces_after = faces.len();

    debug!(
        faces_split = report.faces_split,
        triangles_created = report.triangles_created,
        faces_after = report.faces_after,
        "Triangulation pass finished"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(faces: &[&[u32]]) -> (PositionalList<Face>, PolygonStatistics) {
        let mut list = PositionalList::new();
        let mut stats = PolygonStatistics::new();
        for indices in faces {
            let face = Face::new(indices.to_vec()).unwrap();
            stats.increment(face.arity());
            list.add_last(face).unwrap();
        }
        (list, stats)
    }

    fn indices(list: &PositionalList<Face>) -> Vec<Vec<u32>> {
        list.iter().map(|f| f.indices().to_vec()).collect()
    }

    #[test]
    fn test_quad_becomes_two_triangles() {
        let (mut faces, mut stats) = build(&[&[0, 1, 2, 3]]);
        let report = triangulate_faces(&mut faces, &mut stats).unwrap();

        assert_eq!(indices(&faces), vec![vec![0, 1, 2], vec![0, 2, 3]]);
        assert_eq!(stats.iter().collect::<Vec<_>>(), vec![(3, 2)]);
        assert_eq!(report.faces_split, 1);
        assert_eq!(report.triangles_created, 2);
        assert_eq!(report.faces_after, 2);
    }

    #[test]
    fn test_pentagon_fan() {
        let (mut faces, mut stats) = build(&[&[0, 1, 2, 3, 4]]);
        triangulate_faces(&mut faces, &mut stats).unwrap();

        assert_eq!(
            indices(&faces),
            vec![vec![0, 1, 2], vec![0, 2, 3], vec![0, 3, 4]]
        );
        assert_eq!(stats.count(3), 3);
        assert!(!stats.contains(5));
    }

    #[test]
    fn test_mixed_sequence_keeps_order() {
        let (mut faces, mut stats) = build(&[&[9, 8, 7], &[0, 1, 2, 3], &[4, 5, 6], &[1, 2, 3, 4]]);
        triangulate_faces(&mut faces, &mut stats).unwrap();

        assert_eq!(
            indices(&faces),
            vec![
                vec![9, 8, 7],
                vec![0, 1, 2],
                vec![0, 2, 3],
                vec![4, 5, 6],
                vec![1, 2, 3],
                vec![1, 3, 4],
            ]
        );
        assert_eq!(stats.total_faces(), faces.len());
        assert_eq!(stats.len(), 1);
    }

    #[test]
    fn test_triangles_pass_through() {
        let (mut faces, mut stats) = build(&[&[0, 1, 2], &[2, 1, 3]]);
        let before = indices(&faces);
        let stats_before = stats.clone();

        let report = triangulate_faces(&mut faces, &mut stats).unwrap();

        assert!(report.is_noop());
        assert_eq!(indices(&faces), before);
        assert_eq!(stats, stats_before);
    }

    #[test]
    fn test_second_pass_is_noop() {
        let (mut faces, mut stats) = build(&[&[0, 1, 2, 3, 4, 5], &[0, 1, 2]]);
        triangulate_faces(&mut faces, &mut stats).unwrap();
        let once = indices(&faces);

        let report = triangulate_faces(&mut faces, &mut stats).unwrap();
        assert!(report.is_noop());
        assert_eq!(indices(&faces), once);
        assert_eq!(stats.count(3), 5);
    }

    #[test]
    fn test_empty_sequence() {
        let (mut faces, mut stats) = build(&[]);
        let report = triangulate_faces(&mut faces, &mut stats).unwrap();
        assert_eq!(report, TriangulationReport::default());
    }

    #[test]
    fn test_mismatched_statistics_fail() {
        let (mut faces, _) = build(&[&[0, 1, 2, 3]]);
        let mut stats = PolygonStatistics::new();
        assert!(triangulate_faces(&mut faces, &mut stats).is_err());

        // Nothing was inserted for the uncounted quad
        assert_eq!(indices(&faces), vec![vec![0, 1, 2, 3]]);
        assert_eq!(faces.len(), 1);
        assert!(stats.is_empty());
    }
}
