//! Core mesh data types.

use std::fmt;

use nalgebra::Point3;

/// A vertex as read from the source file.
///
/// The original coordinate tokens are kept verbatim so they can be written
/// out with exactly the precision they came in with; `position` is the
/// parsed value used for geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    /// Coordinate tokens as they appeared in the input.
    pub text: [String; 3],

    /// Parsed 3D position.
    pub position: Point3<f64>,
}

impl Vertex {
    /// Parse a vertex from three coordinate tokens.
    ///
    /// On failure, returns the first token that is not a number.
    pub fn parse<'a>(x: &'a str, y: &'a str, z: &'a str) -> Result<Self, &'a str> {
        let parse = |token: &'a str| token.parse::<f64>().map_err(|_| token);
        Ok(Self {
            position: Point3::new(parse(x)?, parse(y)?, parse(z)?),
            text: [x.to_string(), y.to_string(), z.to_string()],
        })
    }

    /// Create a vertex from raw coordinates.
    #[inline]
    pub fn from_coords(x: f64, y: f64, z: f64) -> Self {
        Self {
            text: [x.to_string(), y.to_string(), z.to_string()],
            position: Point3::new(x, y, z),
        }
    }
}

/// A polygon as an ordered list of 0-based vertex indices.
///
/// The order is the winding and is preserved when the face is split. A face
/// always has at least three indices; one with exactly three is a triangle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Face {
    indices: Vec<u32>,
}

impl Face {
    /// Wrap `indices` as a face, or give them back if there are fewer than three.
    pub fn new(indices: Vec<u32>) -> Result<Self, Vec<u32>> {
        if indices.len() < 3 {
            return Err(indices);
        }
        Ok(Self { indices })
    }

    /// Build a triangle.
    #[inline]
    pub fn triangle(a: u32, b: u32, c: u32) -> Self {
        Self {
            indices: vec![a, b, c],
        }
    }

    /// Number of vertices.
    #[inline]
    pub fn arity(&self) -> usize {
        self.indices.len()
    }

    /// True for a three-vertex face.
    #[inline]
    pub fn is_triangle(&self) -> bool {
        self.indices.len() == 3
    }

    /// The vertex indices in winding order.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Fan triangles sharing this face's first vertex, in winding order.
    ///
    /// An `n`-gon yields `n - 2` triangles `[v0, vj, vj+1]` for `j` in `1..n-1`.
    /// A triangle yields itself.
    pub fn fan(&self) -> impl Iterator<Item = Face> + '_ {
        let apex = self.indices[0];
        self.indices[1..]
            .windows(2)
            .map(move |edge| Face::triangle(apex, edge[0], edge[1]))
    }
}

impl fmt::Display for Face {
    /// Legacy VTK polygon record: arity followed by the indices.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.arity())?;
        for index in &self.indices {
            write!(f, " {}", index)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_keeps_text() {
        let v = Vertex::parse("1.500000", "-0", "2e3").unwrap();
        assert_eq!(v.text, ["1.500000", "-0", "2e3"]);
        assert_eq!(v.position, Point3::new(1.5, 0.0, 2000.0));
    }

    #[test]
    fn test_vertex_reports_bad_token() {
        assert_eq!(Vertex::parse("1", "two", "3"), Err("two"));
    }

    #[test]
    fn test_face_requires_three_indices() {
        assert_eq!(Face::new(vec![0, 1]), Err(vec![0, 1]));
        let face = Face::new(vec![0, 1, 2]).unwrap();
        assert!(face.is_triangle());
    }

    #[test]
    fn test_fan_of_hexagon() {
        let face = Face::new(vec![7, 8, 9, 10, 11, 12]).unwrap();
        let fan: Vec<Vec<u32>> = face.fan().map(|t| t.indices().to_vec()).collect();
        assert_eq!(
            fan,
            vec![
                vec![7, 8, 9],
                vec![7, 9, 10],
                vec![7, 10, 11],
                vec![7, 11, 12]
            ]
        );
    }

    #[test]
    fn test_fan_of_triangle_is_itself() {
        let face = Face::triangle(3, 1, 2);
        assert_eq!(face.fan().collect::<Vec<_>>(), vec![face.clone()]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Face::triangle(0, 2, 3).to_string(), "3 0 2 3");
    }
}
