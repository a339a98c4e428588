use std::path::Path;

use pagexml::page::{read_page_xml, read_page_xml_with_report, Coords, Page, ParseReport, TextLine};
use pagexml::{PageXmlError, PagexmlError};

const SAMPLE: &str = include_str!("fixtures/sample.page.xml");

fn coords(points: &str) -> Coords {
    Coords::parse(points).expect("parse coords")
}

#[test]
fn page_from_namespaced_document() {
    let page = Page::from_xml_str(SAMPLE).expect("parse sample");

    assert_eq!(page.image_filename, "a.jpg");
    assert_eq!(
        page.regions.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["b", "r2"]
    );

    let b = page.lookup_region("b").expect("region b");
    assert_eq!(b.coords, coords("1,2 3,4"));
    assert_eq!(b.textlines.len(), 1);
    assert_eq!(
        b.lookup_textline("c"),
        Some(&TextLine::new("c", coords("5,6 7,8"), "d"))
    );
}

#[test]
fn page_flattening_follows_document_order() {
    let page = Page::from_xml_str(SAMPLE).expect("parse sample");
    assert_eq!(
        page.all_text().collect::<Vec<_>>(),
        vec!["d", "Lorem ipsum  dolor", "sit amet"]
    );
    assert_eq!(
        page.all_words().collect::<Vec<_>>(),
        vec!["d", "Lorem", "ipsum", "dolor", "sit", "amet"]
    );
}

#[test]
fn page_from_bytes_matches_page_from_str() {
    let from_str = Page::from_xml_str(SAMPLE).expect("parse from str");
    let from_slice = Page::from_xml_slice(SAMPLE.as_bytes()).expect("parse from slice");
    assert_eq!(from_str, from_slice);
}

#[test]
fn negative_coordinates_are_accepted_with_warnings() {
    let mut report = ParseReport::new();
    let page = read_page_xml_with_report(
        Path::new("tests/fixtures/negative_coords.page.xml"),
        &mut report,
    )
    .expect("parse negative coords fixture");

    let region = page.lookup_region("r1").expect("region r1");
    assert_eq!(region.bounding_box().top_left().x, -3);
    assert_eq!(report.warning_count(), 2);
    assert!(report.warnings[0]
        .to_string()
        .contains("does not match the PAGE XMl spec: -3,0 1200,0 1200,90 -3,90"));
}

#[test]
fn invalid_coordinates_abort_the_page() {
    let err = read_page_xml(Path::new("tests/fixtures/invalid_coords.page.xml")).unwrap_err();
    match err {
        PagexmlError::PageXmlParse { source, .. } => {
            assert_eq!(source, PageXmlError::InvalidCoords);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_file_is_an_io_error() {
    let err = read_page_xml(Path::new("tests/fixtures/does_not_exist.xml")).unwrap_err();
    assert!(matches!(err, PagexmlError::Io(_)));
}

#[test]
fn wrong_element_is_reported_at_every_level() {
    let doc = roxmltree::Document::parse("<WRONG>!!!</WRONG>").expect("parse xml");
    let root = doc.root_element();

    for err in [
        TextLine::from_xml(&root).unwrap_err(),
        pagexml::page::TextRegion::from_xml(&root).unwrap_err(),
        Page::from_xml(&root).unwrap_err(),
    ] {
        assert!(err.to_string().contains("wrong element given"), "{err}");
    }
}

#[test]
fn prefixed_elements_are_matched_by_local_name() {
    let xml = r#"<pc:PcGts xmlns:pc="http://schema.primaresearch.org/PAGE/gts/pagecontent/2013-07-15">
        <pc:Page imageFilename="p.png">
            <pc:TextRegion id="r">
                <pc:Coords points="0,0 5,5"/>
                <pc:TextLine id="l">
                    <pc:Coords points="1,1 4,4"/>
                    <pc:TextEquiv><pc:Unicode>prefixed</pc:Unicode></pc:TextEquiv>
                </pc:TextLine>
            </pc:TextRegion>
        </pc:Page>
    </pc:PcGts>"#;

    let page = Page::from_xml_str(xml).expect("parse prefixed document");
    assert_eq!(page.all_text().collect::<Vec<_>>(), vec!["prefixed"]);
}
