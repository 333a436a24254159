//! Running axis-aligned bounding box.

use nalgebra::Point3;

use crate::error::{MeshError, MeshResult};

/// Axis labels, in component order.
pub const AXES: [&str; 3] = ["X", "Y", "Z"];

/// Per-axis running minimum and maximum over every observed point.
///
/// The box is undefined until the first point is observed; querying it
/// before then returns [`MeshError::EmptyBounds`] rather than a zero box.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoundingBox {
    extent: Option<(Point3<f64>, Point3<f64>)>,
}

impl BoundingBox {
    /// Create an empty, undefined box.
    pub fn new() -> Self {
        Self::default()
    }

    /// Widen the box to include `point`.
    ///
    /// The first observed point seeds both corners.
    pub fn observe(&mut self, point: &Point3<f64>) {
        let (min, max) = self.extent.get_or_insert((*point, *point));
        for axis in 0..3 {
            min[axis] = min[axis].min(point[axis]);
            max[axis] = max[axis].max(point[axis]);
        }
    }

    /// True once at least one point has been observed.
    pub fn is_defined(&self) -> bool {
        self.extent.is_some()
    }

    /// Minimum corner.
    pub fn min(&self) -> MeshResult<Point3<f64>> {
        self.corners().map(|(min, _)| min)
    }

    /// Maximum corner.
    pub fn max(&self) -> MeshResult<Point3<f64>> {
        self.corners().map(|(_, max)| max)
    }

    /// `(min, max)` along one axis (0 = x, 1 = y, 2 = z).
    pub fn axis(&self, axis: usize) -> MeshResult<(f64, f64)> {
        debug_assert!(axis < 3, "axis {} out of range", axis);
        self.corners().map(|(min, max)| (min[axis], max[axis]))
    }

    /// Both corners.
    pub fn corners(&self) -> MeshResult<(Point3<f64>, Point3<f64>)> {
        self.extent.ok_or(MeshError::EmptyBounds)
    }

    /// Edge lengths along each axis.
    pub fn dimensions(&self) -> MeshResult<[f64; 3]> {
        let (min, max) = self.corners()?;
        let dims = max - min;
        Ok([dims.x, dims.y, dims.z])
    }
}

impl<'a> Extend<&'a Point3<f64>> for BoundingBox {
    fn extend<I: IntoIterator<Item = &'a Point3<f64>>>(&mut self, points: I) {
        for p in points {
            self.observe(p);
        }
    }
}
