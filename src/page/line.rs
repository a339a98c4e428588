//! Text lines, the leaves of the document tree.

use super::coords::Coords;
use super::report::ParseReport;
use super::xml::{expect_element, find_child, required_id, required_points, ElementKind, XmlElement};
use super::Id;
use crate::error::PageXmlError;

/// A single line of recognized text with its outline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextLine {
    pub id: Id,
    pub coords: Coords,
    /// The recognized text. Empty if the producer recorded none.
    pub text: String,
}

impl TextLine {
    /// Creates a new text line.
    pub fn new(id: impl Into<Id>, coords: Coords, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            coords,
            text: text.into(),
        }
    }

    /// Parses a `TextLine` element, logging any warnings.
    pub fn from_xml<E: XmlElement>(element: &E) -> Result<Self, PageXmlError> {
        let mut report = ParseReport::new();
        let line = Self::from_xml_with_report(element, &mut report)?;
        report.log_warnings();
        Ok(line)
    }

    /// Parses a `TextLine` element, collecting warnings into `report`.
    ///
    /// Preconditions are checked in a fixed order (element name, `id`,
    /// `Coords`, `points`, `TextEquiv/Unicode`) and the first failure wins.
    /// The coordinate string itself is only parsed once all of them hold.
    pub fn from_xml_with_report<E: XmlElement>(
        element: &E,
        report: &mut ParseReport,
    ) -> Result<Self, PageXmlError> {
        const KIND: ElementKind = ElementKind::TextLine;

        expect_element(element, KIND)?;
        let id = required_id(element, KIND)?;
        let points = required_points(element, KIND)?;

        let unicode = find_child(element, "TextEquiv")
            .and_then(|text_equiv| find_child(&text_equiv, "Unicode"))
            .ok_or(PageXmlError::MissingText)?;
        let text = unicode.text().unwrap_or_default().to_owned();

        let coords = Coords::parse_with_report(&points, report)?;

        Ok(Self { id, coords, text })
    }

    /// The words of the line: whitespace-separated, non-empty tokens.
    ///
    /// Each call starts a fresh iterator over the same text.
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.text.split_whitespace()
    }
}
