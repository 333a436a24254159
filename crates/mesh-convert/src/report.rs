//! Human-readable mesh summary.
//!
//! [`MeshSummary`] snapshots the counts, polygon histogram and bounding box
//! of a [`PolygonMesh`]. Its `Display` impl draws the 80-column framed report
//! printed by the converter before and after triangulation; it also
//! serializes for JSON output.

use std::fmt;

use serde::Serialize;

use crate::PolygonMesh;
use crate::bounds::AXES;
use crate::stats::PolygonCount;

const FRAME_WIDTH: usize = 76;

/// Axis-aligned bounds, for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundsSummary {
    pub min: [f64; 3],
    pub max: [f64; 3],
}

/// Counts, histogram and bounds of a mesh at one point in time.
#[derive(Debug, Clone, Serialize)]
pub struct MeshSummary {
    pub vertices: usize,
    pub faces: usize,
    pub polygons: Vec<PolygonCount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<BoundsSummary>,
    #[serde(skip)]
    histogram: String,
}

impl MeshSummary {
    /// Snapshot `mesh`.
    pub fn of(mesh: &PolygonMesh) -> Self {
        let bounds = mesh.bounds().corners().ok().map(|(min, max)| BoundsSummary {
            min: [min.x, min.y, min.z],
            max: [max.x, max.y, max.z],
        });
        Self {
            vertices: mesh.vertex_count(),
            faces: mesh.face_count(),
            polygons: mesh.statistics().to_entries(),
            bounds,
            histogram: mesh.statistics().render(),
        }
    }
}

impl fmt::Display for MeshSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(FRAME_WIDTH);

        writeln!(f, "{:^80}", "_".repeat(FRAME_WIDTH))?;
        writeln!(
            f,
            "||{:^17}:{:^17}|{:^29}:{:^10}||",
            "Total Vertices", self.vertices, "Total Polygon Faces", self.faces
        )?;
        writeln!(f, "||{}||", rule)?;
        writeln!(f, "||{:^76}||", "Polygon Faces")?;
        writeln!(f, "||{}||", rule)?;
        f.write_str(&self.histogram)?;
        writeln!(f, "||{}||", rule)?;
        writeln!(f, "||{:^76}||", "Boundaries")?;
        writeln!(f, "||{}||", rule)?;

        for (axis, label) in AXES.iter().enumerate() {
            let (min, max) = match &self.bounds {
                Some(b) => (format_float(b.min[axis]), format_float(b.max[axis])),
                None => ("None".to_string(), "None".to_string()),
            };
            writeln!(
                f,
                "||{:^18}|{:>13}: {:<13}|{:>13}: {:<13}||",
                label, "Minimum ", min, "Maximum ", max
            )?;
        }

        writeln!(f, "||{:^76}||", "_".repeat(FRAME_WIDTH - 2))
    }
}

/// Shortest round-trip decimal form with a mandatory fractional part, e.g.
/// `0.0`, `1.5`, `-2.25`; exponent form outside `[1e-4, 1e16)` as `1e-05`.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude == 0.0 || (1e-4..1e16).contains(&magnitude) {
        let text = value.to_string();
        return if text.contains('.') {
            text
        } else {
            format!("{}.0", text)
        };
    }

    let text = format!("{:e}", value);
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vertex;

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(0.0), "0.0");
        assert_eq!(format_float(-0.0), "-0.0");
        assert_eq!(format_float(1.0), "1.0");
        assert_eq!(format_float(-2.25), "-2.25");
        assert_eq!(format_float(0.1), "0.1");
        assert_eq!(format_float(123456.5), "123456.5");
        assert_eq!(format_float(1e-5), "1e-05");
        assert_eq!(format_float(2.5e20), "2.5e+20");
        assert_eq!(format_float(f64::INFINITY), "inf");
    }

    #[test]
    fn test_summary_frame() {
        let mut mesh = PolygonMesh::new();
        mesh.ingest_vertex(Vertex::from_coords(0.0, 0.0, 0.0));
        mesh.ingest_vertex(Vertex::from_coords(1.0, 0.0, 0.0));
        mesh.ingest_vertex(Vertex::from_coords(0.0, 1.5, 0.0));
        mesh.ingest_vertex(Vertex::from_coords(0.0, 0.0, -1.0));
        mesh.ingest_face(vec![0, 1, 2, 3]).unwrap();

        let text = MeshSummary::of(&mesh).to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 13);
        assert_eq!(lines[0], format!("  {}  ", "_".repeat(76)));
        assert_eq!(
            lines[1],
            "|| Total Vertices  :        4        |     Total Polygon Faces     :    1     ||"
        );
        assert!(lines[5].starts_with("||  Quadrilaterals  :        1         "));
        assert_eq!(
            lines[9],
            "||        X         |     Minimum : 0.0          |     Maximum : 1.0          ||"
        );
        assert!(lines[10].contains("Maximum : 1.5 "));
        assert!(lines[11].contains("Minimum : -1.0 "));
        for line in &lines {
            assert_eq!(line.len(), 80, "line {:?}", line);
        }
    }

    #[test]
    fn test_summary_without_vertices() {
        let summary = MeshSummary::of(&PolygonMesh::new());
        assert!(summary.bounds.is_none());
        assert!(summary.to_string().contains("Minimum : None"));
    }

    #[test]
    fn test_summary_json() {
        let mut mesh = PolygonMesh::new();
        mesh.ingest_vertex(Vertex::from_coords(2.0, 3.0, 4.0));
        let json = serde_json::to_value(MeshSummary::of(&mesh)).unwrap();
        assert_eq!(json["vertices"], 1);
        assert_eq!(json["bounds"]["max"][2], 4.0);
        assert!(json.get("histogram").is_none());
    }
}
