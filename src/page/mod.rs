//! The PAGE-XML document model.
//!
//! A [`Page`] owns its [`TextRegion`]s, which own their [`TextLine`]s; every
//! region and line carries [`Coords`], a validated outline polygon. All three
//! levels are built by walking an XML element tree through the
//! [`XmlElement`] trait, and any failing precondition aborts the whole parse
//! with a [`PageXmlError`](crate::error::PageXmlError).
//!
//! # Example
//!
//! ```
//! use pagexml::page::Page;
//!
//! let xml = r#"<PcGts xmlns="http://schema.primaresearch.org/PAGE/gts/pagecontent/2019-07-15">
//!   <Page imageFilename="scan.jpg">
//!     <TextRegion id="r1">
//!       <Coords points="0,0 100,0 100,40 0,40"/>
//!       <TextLine id="l1">
//!         <Coords points="2,2 98,2 98,38 2,38"/>
//!         <TextEquiv><Unicode>Hello  world</Unicode></TextEquiv>
//!       </TextLine>
//!     </TextRegion>
//!   </Page>
//! </PcGts>"#;
//!
//! let page = Page::from_xml_str(xml).unwrap();
//! assert_eq!(page.image_filename, "scan.jpg");
//! assert_eq!(page.all_words().collect::<Vec<_>>(), ["Hello", "world"]);
//! ```

mod coords;
mod document;
mod line;
mod region;
mod report;
mod xml;

pub use coords::{Coords, CoordsGrammar};
pub use document::{read_page_xml, read_page_xml_with_report, Page};
pub use line::TextLine;
pub use region::TextRegion;
pub use report::{ParseReport, ParseWarning, ValidateOptions};
pub use xml::{find_child, find_children, ElementKind, XmlElement};

/// Identifier of a region or line. Unique only among its siblings.
pub type Id = String;
