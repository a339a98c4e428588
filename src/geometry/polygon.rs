//! Ordered point outlines.

use serde::Serialize;

use super::bbox::BBox;
use super::point::Point;
use crate::error::GeometryError;

/// A non-empty sequence of points describing an outline.
///
/// Point order is the winding of the outline and is preserved as given.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Creates a polygon from its points.
    pub fn new(points: Vec<Point>) -> Result<Self, GeometryError> {
        if points.is_empty() {
            return Err(GeometryError::EmptyPolygon);
        }
        Ok(Self { points })
    }

    /// Returns the points in outline order.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the number of points. Always at least 1.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Consumes the polygon, returning its points.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Computes the smallest axis-aligned box enclosing every point.
    pub fn bounding_box(&self) -> BBox {
        let first = self.points[0];
        let (min, max) = self.points[1..]
            .iter()
            .fold((first, first), |(min, max), p| {
                (
                    Point::new(min.x.min(p.x), min.y.min(p.y)),
                    Point::new(max.x.max(p.x), max.y.max(p.y)),
                )
            });
        BBox::from_ordered(min, max)
    }
}
