use std::path::PathBuf;
use thiserror::Error;

use crate::geometry::Point;
use crate::page::{ElementKind, ParseReport};

/// Structural invariant violations of the geometry types.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("Box: top left is not top left")]
    BoxNotOrdered { top_left: Point, bottom_right: Point },

    #[error("Polygon: points must not be empty")]
    EmptyPolygon,
}

/// A PAGE-XML document or coordinate string was rejected.
///
/// Every variant renders a fixed message naming exactly which precondition
/// failed, so callers may match on either the variant or the text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PageXmlError {
    #[error("Invalid Coords XML string")]
    InvalidCoords,

    #[error("Coords: at least 2 Points are required")]
    NotEnoughPoints,

    #[error("{expected}: wrong element given")]
    WrongElement { expected: ElementKind },

    #[error("{element}: no id found")]
    MissingId { element: ElementKind },

    #[error("{}: {}", .element, .element.missing_coords_message())]
    MissingCoords { element: ElementKind },

    #[error("{element}: Coords has no points attribute")]
    MissingPoints { element: ElementKind },

    #[error("TextLine: no text found")]
    MissingText,

    #[error("Page: no filename found")]
    MissingFilename,

    #[error("Page: no page element found")]
    MissingPageElement,

    #[error("Page: invalid XML: {0}")]
    InvalidXml(String),

    #[error("Page: input is not valid UTF-8: {0}")]
    InvalidUtf8(String),
}

/// The main error type for pagexml file and CLI operations.
#[derive(Debug, Error)]
pub enum PagexmlError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse PAGE XML from {}: {source}", .path.display())]
    PageXmlParse {
        path: PathBuf,
        #[source]
        source: PageXmlError,
    },

    #[error("Failed to write JSON report: {0}")]
    JsonWrite(#[source] serde_json::Error),

    #[error("Validation failed with {warning_count} warning(s) in strict mode")]
    ValidationFailed {
        warning_count: usize,
        report: ParseReport,
    },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}
