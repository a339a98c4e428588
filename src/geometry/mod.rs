//! Geometric primitives backing every PAGE-XML `Coords` field.
//!
//! All coordinates are integer pixel positions. The types here enforce
//! their structural invariants on construction and report violations as
//! [`GeometryError`]:
//!
//! - [`Point`]: any pair of integers, negative values included.
//! - [`BBox`]: an axis-aligned box whose top-left corner really is top-left.
//! - [`Polygon`]: a non-empty, ordered outline of points.
//!
//! # Example
//!
//! ```
//! use pagexml::geometry::{Point, Polygon};
//!
//! let polygon = Polygon::new(vec![Point::new(17, 42), Point::new(1, 2)]).unwrap();
//! let bbox = polygon.bounding_box();
//! assert_eq!(bbox.top_left(), Point::new(1, 2));
//! assert_eq!(bbox.width(), 16);
//! ```

mod bbox;
mod point;
mod polygon;

pub use bbox::BBox;
pub use point::Point;
pub use polygon::Polygon;

pub use crate::error::GeometryError;
