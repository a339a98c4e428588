#![allow(dead_code)]

use std::fmt::Write as _;

use indexmap::IndexMap;
use pagexml::geometry::{BBox, Point, Polygon};
use pagexml::page::{Coords, Page, TextLine, TextRegion};
use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

/// Upper bound for generated coordinates; keeps widths and areas far from overflow.
pub const MAX_COORD: i64 = 1_000_000_000;

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

pub fn arb_point() -> BoxedStrategy<Point> {
    (0..=MAX_COORD, 0..=MAX_COORD)
        .prop_map(|(x, y)| Point::new(x, y))
        .boxed()
}

/// A pair of corners where the first is strictly top-left of the second.
pub fn arb_box_points() -> BoxedStrategy<(Point, Point)> {
    arb_point()
        .prop_flat_map(|tl| {
            (tl.x + 1..=MAX_COORD + 1, tl.y + 1..=MAX_COORD + 1)
                .prop_map(move |(x, y)| (tl, Point::new(x, y)))
        })
        .boxed()
}

pub fn arb_bbox() -> BoxedStrategy<BBox> {
    arb_box_points()
        .prop_map(|(tl, br)| BBox::new(tl, br).expect("ordered corners"))
        .boxed()
}

pub fn arb_polygon(min_points: usize) -> BoxedStrategy<Polygon> {
    proptest::collection::vec(arb_point(), min_points.max(1)..=16)
        .prop_map(|points| Polygon::new(points).expect("non-empty points"))
        .boxed()
}

pub fn arb_coords() -> BoxedStrategy<Coords> {
    arb_polygon(2)
        .prop_map(|polygon| Coords::new(polygon).expect("at least two points"))
        .boxed()
}

pub fn arb_coords_string() -> BoxedStrategy<String> {
    arb_coords().prop_map(|coords| coords.to_string()).boxed()
}

pub fn arb_text_line() -> BoxedStrategy<TextLine> {
    (id_strategy(), arb_coords(), text_strategy())
        .prop_map(|(id, coords, text)| TextLine::new(id, coords, text))
        .boxed()
}

pub fn arb_text_region() -> BoxedStrategy<TextRegion> {
    (
        id_strategy(),
        arb_coords(),
        proptest::collection::vec(arb_text_line(), 0..6),
    )
        .prop_map(|(id, coords, lines)| TextRegion::new(id, coords, keyed_lines(lines)))
        .boxed()
}

pub fn arb_page() -> BoxedStrategy<Page> {
    (
        image_file_name_strategy(),
        proptest::collection::vec(arb_text_region(), 0..5),
    )
        .prop_map(|(image_filename, regions)| {
            let regions: IndexMap<_, _> = regions
                .into_iter()
                .map(|region| (region.id.clone(), region))
                .collect();
            Page::new(image_filename, regions)
        })
        .boxed()
}

pub fn id_strategy() -> BoxedStrategy<String> {
    proptest::string::string_regex("[A-Za-z0-9_-]{1,12}")
        .expect("valid id regex")
        .boxed()
}

/// Line text including whitespace runs and characters that need escaping.
pub fn text_strategy() -> BoxedStrategy<String> {
    proptest::string::string_regex("[A-Za-z0-9 .,;:!?&<>'\"äöüß-]{0,40}")
        .expect("valid text regex")
        .boxed()
}

fn image_file_name_strategy() -> BoxedStrategy<String> {
    proptest::string::string_regex("[a-z0-9_]{1,12}\\.jpg")
        .expect("valid filename regex")
        .boxed()
}

pub fn keyed_lines(lines: Vec<TextLine>) -> IndexMap<String, TextLine> {
    lines
        .into_iter()
        .map(|line| (line.id.clone(), line))
        .collect()
}

/// Renders a page as a namespaced PAGE-XML document.
pub fn page_to_xml(page: &Page) -> String {
    let mut xml = String::new();

    writeln!(xml, "<?xml version=\"1.0\" encoding=\"utf-8\"?>").expect("write to string");
    writeln!(
        xml,
        "<PcGts xmlns=\"http://schema.primaresearch.org/PAGE/gts/pagecontent/2019-07-15\">"
    )
    .expect("write to string");
    writeln!(xml, "  <Metadata><Creator>proptest</Creator></Metadata>").expect("write to string");
    writeln!(
        xml,
        "  <Page imageFilename=\"{}\">",
        xml_escape(&page.image_filename)
    )
    .expect("write to string");

    for region in page.regions.values() {
        writeln!(xml, "    <TextRegion id=\"{}\">", xml_escape(&region.id)).expect("write to string");
        writeln!(xml, "      <Coords points=\"{}\"/>", region.coords).expect("write to string");
        for line in region.textlines.values() {
            writeln!(xml, "      <TextLine id=\"{}\">", xml_escape(&line.id))
                .expect("write to string");
            writeln!(xml, "        <Coords points=\"{}\"/>", line.coords).expect("write to string");
            writeln!(
                xml,
                "        <TextEquiv><Unicode>{}</Unicode></TextEquiv>",
                xml_escape(&line.text)
            )
            .expect("write to string");
            writeln!(xml, "      </TextLine>").expect("write to string");
        }
        writeln!(xml, "    </TextRegion>").expect("write to string");
    }

    writeln!(xml, "  </Page>").expect("write to string");
    writeln!(xml, "</PcGts>").expect("write to string");
    xml
}

fn xml_escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
