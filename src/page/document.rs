//! The page, root of the document tree.

use std::path::Path;

use indexmap::IndexMap;

use super::region::TextRegion;
use super::report::{ParseReport, ParseWarning};
use super::xml::{expect_element, find_child, find_children, ElementKind, XmlElement};
use super::Id;
use crate::error::{PageXmlError, PagexmlError};

/// A scanned page and the text regions found on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    /// The scanned image this page describes. Informational only.
    pub image_filename: String,
    /// Regions keyed by id, in document order.
    pub regions: IndexMap<Id, TextRegion>,
}

impl Page {
    /// Creates a new page.
    pub fn new(image_filename: impl Into<String>, regions: IndexMap<Id, TextRegion>) -> Self {
        Self {
            image_filename: image_filename.into(),
            regions,
        }
    }

    /// Parses a `Page` element, logging any warnings.
    pub fn from_xml<E: XmlElement>(element: &E) -> Result<Self, PageXmlError> {
        let mut report = ParseReport::new();
        let page = Self::from_xml_with_report(element, &mut report)?;
        report.log_warnings();
        Ok(page)
    }

    /// Parses a `Page` element and all of its `TextRegion` children.
    pub fn from_xml_with_report<E: XmlElement>(
        element: &E,
        report: &mut ParseReport,
    ) -> Result<Self, PageXmlError> {
        expect_element(element, ElementKind::Page)?;
        let image_filename = element
            .attribute("imageFilename")
            .ok_or(PageXmlError::MissingFilename)?
            .to_owned();

        let mut regions = IndexMap::new();
        for child in find_children(element, ElementKind::TextRegion.local_name()) {
            let region = TextRegion::from_xml_with_report(&child, report)?;
            if let Some(previous) = regions.insert(region.id.clone(), region) {
                report.add(ParseWarning::DuplicateId {
                    element: ElementKind::TextRegion,
                    id: previous.id,
                });
            }
        }

        tracing::debug!(
            image = %image_filename,
            regions = regions.len(),
            "parsed PAGE XML page"
        );

        Ok(Self {
            image_filename,
            regions,
        })
    }

    /// Parses a complete PAGE-XML document, logging any warnings.
    ///
    /// The `Page` element is looked up among the children of the document
    /// root (usually `PcGts`) by local name, so any namespace is accepted.
    pub fn from_xml_str(xml: &str) -> Result<Self, PageXmlError> {
        let mut report = ParseReport::new();
        let page = Self::from_xml_str_with_report(xml, &mut report)?;
        report.log_warnings();
        Ok(page)
    }

    /// Parses a complete PAGE-XML document, collecting warnings into `report`.
    pub fn from_xml_str_with_report(
        xml: &str,
        report: &mut ParseReport,
    ) -> Result<Self, PageXmlError> {
        let document = roxmltree::Document::parse(xml)
            .map_err(|source| PageXmlError::InvalidXml(source.to_string()))?;
        let page = find_child(&document.root_element(), ElementKind::Page.local_name())
            .ok_or(PageXmlError::MissingPageElement)?;
        Self::from_xml_with_report(&page, report)
    }

    /// Parses a complete PAGE-XML document from bytes.
    ///
    /// The input must be valid UTF-8.
    pub fn from_xml_slice(bytes: &[u8]) -> Result<Self, PageXmlError> {
        let xml = std::str::from_utf8(bytes)
            .map_err(|source| PageXmlError::InvalidUtf8(source.to_string()))?;
        Self::from_xml_str(xml)
    }

    /// Looks up a region by id.
    pub fn lookup_region(&self, id: &str) -> Option<&TextRegion> {
        self.regions.get(id)
    }

    /// The text of every line, region by region.
    pub fn all_text(&self) -> impl Iterator<Item = &str> + '_ {
        self.regions.values().flat_map(|region| region.all_text())
    }

    /// The words of every line, region by region.
    pub fn all_words(&self) -> impl Iterator<Item = &str> + '_ {
        self.regions.values().flat_map(|region| region.all_words())
    }

    /// The total number of lines across all regions.
    pub fn textline_count(&self) -> usize {
        self.regions
            .values()
            .map(|region| region.textlines.len())
            .sum()
    }
}

/// Read and parse a PAGE-XML file, logging any warnings.
pub fn read_page_xml(path: &Path) -> Result<Page, PagexmlError> {
    let mut report = ParseReport::new();
    let page = read_page_xml_with_report(path, &mut report)?;
    report.log_warnings();
    Ok(page)
}

/// Read and parse a PAGE-XML file, collecting warnings into `report`.
pub fn read_page_xml_with_report(
    path: &Path,
    report: &mut ParseReport,
) -> Result<Page, PagexmlError> {
    let xml = std::fs::read_to_string(path).map_err(PagexmlError::Io)?;
    Page::from_xml_str_with_report(&xml, report).map_err(|source| PagexmlError::PageXmlParse {
        path: path.to_path_buf(),
        source,
    })
}
