//! Axis-aligned bounding boxes.

use serde::Serialize;

use super::point::Point;
use crate::error::GeometryError;

/// An axis-aligned box given by its top-left and bottom-right corners.
///
/// Unlike a raw pair of points, a `BBox` is always ordered:
/// `top_left.x <= bottom_right.x` and `top_left.y <= bottom_right.y`.
/// Degenerate boxes (zero width or height) are allowed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct BBox {
    top_left: Point,
    bottom_right: Point,
}

impl BBox {
    /// Creates a new box, rejecting corners that are not properly ordered.
    pub fn new(top_left: Point, bottom_right: Point) -> Result<Self, GeometryError> {
        if top_left.x > bottom_right.x || top_left.y > bottom_right.y {
            return Err(GeometryError::BoxNotOrdered {
                top_left,
                bottom_right,
            });
        }
        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    /// Builds a box from corners the caller already knows to be ordered.
    #[inline]
    pub(super) fn from_ordered(top_left: Point, bottom_right: Point) -> Self {
        debug_assert!(top_left.x <= bottom_right.x && top_left.y <= bottom_right.y);
        Self {
            top_left,
            bottom_right,
        }
    }

    /// Returns the top-left corner.
    #[inline]
    pub fn top_left(&self) -> Point {
        self.top_left
    }

    /// Returns the bottom-right corner.
    #[inline]
    pub fn bottom_right(&self) -> Point {
        self.bottom_right
    }

    /// Returns the width of the box.
    ///
    /// Unsigned, since the span between two `i64` corners can exceed `i64::MAX`.
    #[inline]
    pub fn width(&self) -> u64 {
        self.bottom_right.x.abs_diff(self.top_left.x)
    }

    /// Returns the height of the box.
    #[inline]
    pub fn height(&self) -> u64 {
        self.bottom_right.y.abs_diff(self.top_left.y)
    }

    /// Returns the area of the box.
    #[inline]
    pub fn area(&self) -> u128 {
        u128::from(self.width()) * u128::from(self.height())
    }

    /// Returns true if `point` lies inside the box or on its border.
    pub fn contains(&self, point: Point) -> bool {
        (self.top_left.x..=self.bottom_right.x).contains(&point.x)
            && (self.top_left.y..=self.bottom_right.y).contains(&point.y)
    }
}
