//! Inspect report types and terminal formatting.

use serde::Serialize;
use std::fmt;

use crate::geometry::BBox;

/// The result of inspecting a page.
#[derive(Clone, Debug, Serialize)]
pub struct InspectReport {
    /// Summary counts for the page.
    pub summary: SummarySection,
    /// Per-region figures, in document order.
    pub regions: Vec<RegionSummary>,
}

/// Summary counts for the page.
#[derive(Clone, Debug, Default, Serialize)]
pub struct SummarySection {
    /// The scanned image the page describes.
    pub image_filename: String,
    /// Total number of text regions.
    pub regions: usize,
    /// Total number of text lines.
    pub lines: usize,
    /// Lines whose text is empty or whitespace only.
    pub empty_lines: usize,
    /// Total number of words.
    pub words: usize,
    /// Total number of characters (Unicode scalar values).
    pub characters: usize,
    /// Lines reaching outside their region's bounding box.
    pub lines_outside_region: usize,
}

/// Layout figures for a single region.
#[derive(Clone, Debug, Serialize)]
pub struct RegionSummary {
    pub id: String,
    pub lines: usize,
    pub words: usize,
    pub bbox: BBox,
    pub lines_outside: usize,
}

impl fmt::Display for InspectReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "╭─────────────────────────────────────────────────────────────╮")?;
        writeln!(f, "│                  PAGE XML Inspection Report                 │")?;
        writeln!(f, "╰─────────────────────────────────────────────────────────────╯")?;
        writeln!(f)?;

        self.fmt_summary(f)?;
        writeln!(f)?;
        self.fmt_regions(f)?;

        Ok(())
    }
}

impl InspectReport {
    fn fmt_summary(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.summary;

        writeln!(f, "┌─ Summary ─────────────────────────────────────────────────┐")?;
        writeln!(f, "   Image:         {}", s.image_filename)?;
        writeln!(f, "   Regions:       {:>8}", format_number(s.regions))?;
        writeln!(f, "   Lines:         {:>8}", format_number(s.lines))?;
        writeln!(f, "   Words:         {:>8}", format_number(s.words))?;
        writeln!(f, "   Characters:    {:>8}", format_number(s.characters))?;
        if s.empty_lines > 0 {
            writeln!(f, "   Empty lines:   {:>8}", format_number(s.empty_lines))?;
        }
        if s.lines_outside_region > 0 {
            writeln!(
                f,
                "   Lines outside their region: {}",
                format_number(s.lines_outside_region)
            )?;
        }
        writeln!(f, "└───────────────────────────────────────────────────────────┘")?;

        Ok(())
    }

    fn fmt_regions(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = if self.summary.regions > self.regions.len() {
            format!("Regions (first {} of {})", self.regions.len(), self.summary.regions)
        } else {
            format!("Regions ({})", self.summary.regions)
        };
        writeln!(f, "┌─ {} {}┐", header, "─".repeat(57usize.saturating_sub(header.len())))?;

        if self.regions.is_empty() {
            writeln!(f, "   No text regions found.")?;
        }

        for region in &self.regions {
            let tl = region.bbox.top_left();
            let br = region.bbox.bottom_right();
            write!(
                f,
                "   {:<16} {:>5} lines {:>6} words   {} → {}",
                truncate_label(&region.id, 16),
                format_number(region.lines),
                format_number(region.words),
                tl,
                br
            )?;
            if region.lines_outside > 0 {
                write!(f, "   ({} outside)", region.lines_outside)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "└───────────────────────────────────────────────────────────┘")?;

        Ok(())
    }
}

fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

fn truncate_label(label: &str, max_len: usize) -> String {
    if label.chars().count() <= max_len {
        label.to_string()
    } else {
        let head: String = label.chars().take(max_len - 1).collect();
        format!("{head}…")
    }
}
