//! The `points` attribute codec.
//!
//! A PAGE-XML outline is written as space-separated `x,y` pairs, e.g.
//! `"0,0 10,0 10,10 0,10"`. The official grammar only allows non-negative
//! integers, but some OCR engines (notably PeroOCR) emit slightly negative
//! coordinates. Those strings are accepted under a relaxed grammar and
//! reported as [`ParseWarning::NonStrictCoords`].

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use super::report::{ParseReport, ParseWarning};
use crate::error::PageXmlError;
use crate::geometry::{BBox, Point, Polygon};

static PAGE_XML_GRAMMAR: LazyLock<CoordsGrammar> = LazyLock::new(|| CoordsGrammar {
    loose: Regex::new(r"^(-?[0-9]+,-?[0-9]+ )+(-?[0-9]+,-?[0-9]+)$")
        .expect("loose coords pattern is valid"),
    strict: Regex::new(r"^([0-9]+,[0-9]+ )+([0-9]+,[0-9]+)$")
        .expect("strict coords pattern is valid"),
});

/// The pair of anchored patterns a `points` string is checked against.
///
/// `loose` decides acceptance; `strict` decides whether a warning is raised.
#[derive(Clone, Debug)]
pub struct CoordsGrammar {
    pub loose: Regex,
    pub strict: Regex,
}

impl CoordsGrammar {
    /// The PAGE-XML grammar, relaxed to admit negative coordinates.
    pub fn page_xml() -> &'static CoordsGrammar {
        &PAGE_XML_GRAMMAR
    }

    /// Parses a `points` string, recording a warning if it is only loosely valid.
    pub fn parse(&self, points: &str, report: &mut ParseReport) -> Result<Coords, PageXmlError> {
        if !self.loose.is_match(points) {
            return Err(PageXmlError::InvalidCoords);
        }

        let parsed = points
            .split(' ')
            .map(parse_pair)
            .collect::<Result<Vec<_>, _>>()?;
        let polygon = Polygon::new(parsed).map_err(|_| PageXmlError::NotEnoughPoints)?;
        let coords = Coords::new(polygon)?;

        // Only accepted strings are reported.
        if !self.strict.is_match(points) {
            report.add(ParseWarning::NonStrictCoords {
                points: points.to_owned(),
            });
        }
        Ok(coords)
    }
}

fn parse_pair(pair: &str) -> Result<Point, PageXmlError> {
    let (x, y) = pair.split_once(',').ok_or(PageXmlError::InvalidCoords)?;
    // The grammar guarantees digits; this only fails on i64 overflow.
    let x = x.parse::<i64>().map_err(|_| PageXmlError::InvalidCoords)?;
    let y = y.parse::<i64>().map_err(|_| PageXmlError::InvalidCoords)?;
    Ok(Point::new(x, y))
}

/// The outline of a region or line: a polygon of at least two points.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Coords {
    polygon: Polygon,
}

impl Coords {
    /// Wraps an existing polygon, which must have at least two points.
    pub fn new(polygon: Polygon) -> Result<Self, PageXmlError> {
        if polygon.len() < 2 {
            return Err(PageXmlError::NotEnoughPoints);
        }
        Ok(Self { polygon })
    }

    /// Parses a `points` attribute value.
    ///
    /// A string that only matches the relaxed grammar is accepted and the
    /// warning is emitted through `tracing`. Use [`Coords::parse_with_report`]
    /// to collect it instead.
    pub fn parse(points: &str) -> Result<Self, PageXmlError> {
        let mut report = ParseReport::new();
        let coords = Self::parse_with_report(points, &mut report)?;
        report.log_warnings();
        Ok(coords)
    }

    /// Parses a `points` attribute value, collecting warnings into `report`.
    pub fn parse_with_report(points: &str, report: &mut ParseReport) -> Result<Self, PageXmlError> {
        CoordsGrammar::page_xml().parse(points, report)
    }

    /// Returns the underlying polygon.
    #[inline]
    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    /// Returns the outline points in order.
    #[inline]
    pub fn points(&self) -> &[Point] {
        self.polygon.points()
    }

    /// Returns the smallest box enclosing the outline.
    pub fn bounding_box(&self) -> BBox {
        self.polygon.bounding_box()
    }
}

/// Formats as a PAGE-XML `points` attribute value.
impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut points = self.points().iter();
        if let Some(first) = points.next() {
            write!(f, "{first}")?;
        }
        for point in points {
            write!(f, " {point}")?;
        }
        Ok(())
    }
}

impl FromStr for Coords {
    type Err = PageXmlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
