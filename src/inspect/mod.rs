//! Page inspection and statistics.
//!
//! This module analyzes a parsed [`Page`] and produces a structured report
//! with summary counts and per-region layout figures.

mod report;

pub use report::{InspectReport, RegionSummary, SummarySection};

use crate::page::{Page, TextRegion};

/// Options for page inspection.
#[derive(Clone, Debug)]
pub struct InspectOptions {
    /// Number of regions to list individually.
    pub max_regions: usize,
}

impl Default for InspectOptions {
    fn default() -> Self {
        Self { max_regions: 20 }
    }
}

/// Inspect a page and produce a report.
pub fn inspect_page(page: &Page, opts: &InspectOptions) -> InspectReport {
    let summary = compute_summary(page);

    let regions = page
        .regions
        .values()
        .take(opts.max_regions)
        .map(summarize_region)
        .collect();

    InspectReport { summary, regions }
}

fn compute_summary(page: &Page) -> SummarySection {
    let lines = page.regions.values().flat_map(|region| region.textlines.values());

    let mut summary = SummarySection {
        image_filename: page.image_filename.clone(),
        regions: page.regions.len(),
        ..Default::default()
    };

    for line in lines {
        summary.lines += 1;
        summary.words += line.words().count();
        summary.characters += line.text.chars().count();
        if line.text.trim().is_empty() {
            summary.empty_lines += 1;
        }
    }

    summary.lines_outside_region = page
        .regions
        .values()
        .map(lines_outside)
        .sum();

    summary
}

fn summarize_region(region: &TextRegion) -> RegionSummary {
    RegionSummary {
        id: region.id.clone(),
        lines: region.textlines.len(),
        words: region.all_words().count(),
        bbox: region.bounding_box(),
        lines_outside: lines_outside(region),
    }
}

/// Counts lines whose outline reaches past the region's bounding box.
fn lines_outside(region: &TextRegion) -> usize {
    let bbox = region.bounding_box();
    region
        .textlines
        .values()
        .filter(|line| !line.coords.points().iter().all(|p| bbox.contains(*p)))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{Coords, TextLine};

    fn coords(points: &str) -> Coords {
        Coords::parse(points).expect("parse coords")
    }

    fn make_test_page() -> Page {
        let region_a = TextRegion::new(
            "a",
            coords("0,0 100,0 100,50 0,50"),
            [
                TextLine::new("a1", coords("5,5 95,20"), "Hello  world"),
                TextLine::new("a2", coords("5,25 120,45"), "   "),
            ]
            .into_iter()
            .map(|line| (line.id.clone(), line))
            .collect(),
        );
        let region_b = TextRegion::new(
            "b",
            coords("0,60 100,90"),
            [TextLine::new("b1", coords("5,65 95,85"), "Grüße")]
                .into_iter()
                .map(|line| (line.id.clone(), line))
                .collect(),
        );
        Page::new(
            "scan.jpg",
            [region_a, region_b]
                .into_iter()
                .map(|region| (region.id.clone(), region))
                .collect(),
        )
    }

    #[test]
    fn test_summary_counts() {
        let report = inspect_page(&make_test_page(), &InspectOptions::default());
        let s = &report.summary;
        assert_eq!(s.image_filename, "scan.jpg");
        assert_eq!(s.regions, 2);
        assert_eq!(s.lines, 3);
        assert_eq!(s.words, 3);
        assert_eq!(s.characters, 12 + 3 + 5);
        assert_eq!(s.empty_lines, 1);
        assert_eq!(s.lines_outside_region, 1);
    }

    #[test]
    fn test_region_summaries() {
        let report = inspect_page(&make_test_page(), &InspectOptions::default());
        assert_eq!(report.regions.len(), 2);
        let a = &report.regions[0];
        assert_eq!(a.id, "a");
        assert_eq!(a.lines, 2);
        assert_eq!(a.words, 2);
        assert_eq!(a.bbox.width(), 100);
        assert_eq!(a.bbox.height(), 50);
        assert_eq!(a.lines_outside, 1);
        assert_eq!(report.regions[1].lines_outside, 0);
    }

    #[test]
    fn test_max_regions_limits_listing() {
        let report = inspect_page(&make_test_page(), &InspectOptions { max_regions: 1 });
        assert_eq!(report.regions.len(), 1);
        assert_eq!(report.summary.regions, 2);
    }

    #[test]
    fn test_report_display() {
        let report = inspect_page(&make_test_page(), &InspectOptions::default());
        let text = report.to_string();
        assert!(text.contains("scan.jpg"));
        assert!(text.contains("Regions:"));
        assert!(text.contains("0,0 → 100,50"));
    }
}
