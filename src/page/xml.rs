//! Narrow read-only view over an XML element tree.
//!
//! The document model only ever asks four things of an element: its local
//! name, an attribute by name, its child elements in order, and its text.
//! [`XmlElement`] captures exactly that, so any XML library can back the
//! parser. An implementation for [`roxmltree::Node`] is provided.

use std::fmt;

use roxmltree::Node;
use serde::Serialize;

use crate::error::PageXmlError;

/// The capabilities the PAGE-XML parser needs from an XML element.
///
/// Names are always compared by *local* name: namespace prefixes and
/// namespace URIs are ignored.
pub trait XmlElement: Sized {
    /// The element's name without namespace prefix.
    fn local_name(&self) -> &str;

    /// Looks up an attribute by its (unprefixed) name.
    fn attribute(&self, name: &str) -> Option<&str>;

    /// The element's direct child elements, in document order.
    ///
    /// Text, comment and processing-instruction nodes are skipped.
    fn child_elements(&self) -> impl Iterator<Item = Self> + '_;

    /// The text directly inside the element, if any.
    fn text(&self) -> Option<&str>;
}

impl<'a, 'input: 'a> XmlElement for Node<'a, 'input> {
    fn local_name(&self) -> &str {
        self.tag_name().name()
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        Node::attribute(self, name)
    }

    fn child_elements(&self) -> impl Iterator<Item = Self> + '_ {
        self.children().filter(|node| node.is_element())
    }

    fn text(&self) -> Option<&str> {
        Node::text(self)
    }
}

/// The PAGE-XML elements the document model is built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Page,
    TextRegion,
    TextLine,
}

impl ElementKind {
    /// The element's local name in PAGE-XML.
    pub fn local_name(self) -> &'static str {
        match self {
            ElementKind::Page => "Page",
            ElementKind::TextRegion => "TextRegion",
            ElementKind::TextLine => "TextLine",
        }
    }

    pub(crate) fn missing_coords_message(self) -> &'static str {
        match self {
            ElementKind::TextRegion => "no Coords element found",
            ElementKind::Page | ElementKind::TextLine => "no Coords found",
        }
    }
}

impl Serialize for ElementKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.local_name())
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.local_name())
    }
}

/// Returns the first child element with the given local name.
pub fn find_child<E: XmlElement>(element: &E, name: &str) -> Option<E> {
    element
        .child_elements()
        .find(|child| child.local_name() == name)
}

/// Returns every child element with the given local name, in document order.
pub fn find_children<'e, E: XmlElement>(
    element: &'e E,
    name: &'e str,
) -> impl Iterator<Item = E> + 'e {
    element
        .child_elements()
        .filter(move |child| child.local_name() == name)
}

pub(crate) fn expect_element<E: XmlElement>(
    element: &E,
    kind: ElementKind,
) -> Result<(), PageXmlError> {
    if element.local_name() == kind.local_name() {
        Ok(())
    } else {
        Err(PageXmlError::WrongElement { expected: kind })
    }
}

pub(crate) fn required_id<E: XmlElement>(
    element: &E,
    kind: ElementKind,
) -> Result<String, PageXmlError> {
    element
        .attribute("id")
        .map(ToOwned::to_owned)
        .ok_or(PageXmlError::MissingId { element: kind })
}

/// Finds the `Coords` child and returns its raw `points` attribute.
pub(crate) fn required_points<E: XmlElement>(
    element: &E,
    kind: ElementKind,
) -> Result<String, PageXmlError> {
    let coords = find_child(element, "Coords")
        .ok_or(PageXmlError::MissingCoords { element: kind })?;
    coords
        .attribute("points")
        .map(ToOwned::to_owned)
        .ok_or(PageXmlError::MissingPoints { element: kind })
}
