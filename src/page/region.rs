//! Text regions: outlined blocks holding text lines.

use indexmap::IndexMap;

use super::coords::Coords;
use super::line::TextLine;
use super::report::{ParseReport, ParseWarning};
use super::xml::{expect_element, find_children, required_id, required_points, ElementKind, XmlElement};
use super::Id;
use crate::error::PageXmlError;
use crate::geometry::BBox;

/// A block of text lines with its own outline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextRegion {
    pub id: Id,
    pub coords: Coords,
    /// Lines keyed by id, in document order.
    pub textlines: IndexMap<Id, TextLine>,
}

impl TextRegion {
    /// Creates a new text region.
    pub fn new(id: impl Into<Id>, coords: Coords, textlines: IndexMap<Id, TextLine>) -> Self {
        Self {
            id: id.into(),
            coords,
            textlines,
        }
    }

    /// Parses a `TextRegion` element, logging any warnings.
    pub fn from_xml<E: XmlElement>(element: &E) -> Result<Self, PageXmlError> {
        let mut report = ParseReport::new();
        let region = Self::from_xml_with_report(element, &mut report)?;
        report.log_warnings();
        Ok(region)
    }

    /// Parses a `TextRegion` element and all of its `TextLine` children.
    ///
    /// Any failing line aborts the whole region. A line whose id repeats an
    /// earlier sibling replaces it and a [`ParseWarning::DuplicateId`] is
    /// recorded.
    pub fn from_xml_with_report<E: XmlElement>(
        element: &E,
        report: &mut ParseReport,
    ) -> Result<Self, PageXmlError> {
        const KIND: ElementKind = ElementKind::TextRegion;

        expect_element(element, KIND)?;
        let id = required_id(element, KIND)?;
        let points = required_points(element, KIND)?;
        let coords = Coords::parse_with_report(&points, report)?;

        let mut textlines = IndexMap::new();
        for child in find_children(element, ElementKind::TextLine.local_name()) {
            let line = TextLine::from_xml_with_report(&child, report)?;
            if let Some(previous) = textlines.insert(line.id.clone(), line) {
                report.add(ParseWarning::DuplicateId {
                    element: ElementKind::TextLine,
                    id: previous.id,
                });
            }
        }

        Ok(Self {
            id,
            coords,
            textlines,
        })
    }

    /// Looks up a line by id.
    pub fn lookup_textline(&self, id: &str) -> Option<&TextLine> {
        self.textlines.get(id)
    }

    /// The text of every line, in order.
    pub fn all_text(&self) -> impl Iterator<Item = &str> + '_ {
        self.textlines.values().map(|line| line.text.as_str())
    }

    /// The words of every line, in order.
    pub fn all_words(&self) -> impl Iterator<Item = &str> + '_ {
        self.textlines.values().flat_map(|line| line.words())
    }

    /// The bounding box of the region outline.
    pub fn bounding_box(&self) -> BBox {
        self.coords.bounding_box()
    }
}
