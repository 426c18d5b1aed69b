//! # Report Layout Engine
//!
//! Turns a ranked leaderboard into a rendered PNG report through a staged
//! pipeline:
//!
//! 1. [`layout`]: pure geometry — a [`layout::Plan`] of draw ops with
//!    content-dependent canvas dimensions
//! 2. [`raster`]: execute the plan into an RGB8 framebuffer
//! 3. PNG encode
//!
//! The engine holds no state between calls and is safe to invoke
//! repeatedly (or concurrently) with different inputs; every call allocates
//! a fresh canvas.
//!
//! ## Determinism
//!
//! Identical entries, summary, period, and style produce identical
//! geometry — the plan is comparable for equality and tested that way.
//!
//! ## Degradation, not failure
//!
//! A missing or unreadable font never aborts a render; the engine falls
//! back to its built-in bitmap face (see [`font`]). [`BylinesError::Render`]
//! is reserved for genuinely unrenderable states.

use crate::error::{BylinesError, Result};
use crate::model::{LeaderboardEntry, Summary};
use chrono::NaiveDate;

pub mod font;
pub mod layout;
pub mod paint;
pub mod raster;

use font::{Font, FontSource};
use paint::Color;

/// Inclusive date range labelling a report. Both endpoints are required by
/// construction; a report without a full range carries no subtitle at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Subtitle text, e.g. `March 1, 2026 - March 31, 2026`.
    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            self.start.format("%B %-d, %Y"),
            self.end.format("%B %-d, %Y")
        )
    }

    fn filename_fragment(&self) -> String {
        format!(
            "{}_to_{}",
            self.start.format("%Y%m%d"),
            self.end.format("%Y%m%d")
        )
    }
}

/// Conventional artifact filename; the date range is embedded when present.
pub fn report_filename(period: Option<&DateRange>) -> String {
    match period {
        Some(period) => format!("writer_report_{}.png", period.filename_fragment()),
        None => "writer_report.png".to_string(),
    }
}

/// Layout constants and palette. Front-end-specific values (fonts, pixel
/// offsets) are configuration here, not engine logic, so every caller gets
/// the same geometry from the same style.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportStyle {
    pub title: String,
    pub width: u32,
    pub min_height: u32,
    pub header_height: u32,
    pub cards_section_height: u32,
    pub table_header_height: u32,
    pub row_height: u32,
    pub row_spacing: u32,
    pub bottom_padding: u32,
    pub margin: u32,
    pub card_width: u32,
    pub card_height: u32,
    pub card_spacing: u32,
    /// Absolute x of the name, articles, views, and average columns
    pub column_offsets: [u32; 4],
    pub title_px: f32,
    pub subtitle_px: f32,
    pub heading_px: f32,
    pub value_px: f32,
    pub label_px: f32,
    pub body_px: f32,
    pub background: Color,
    pub header: Color,
    pub header_text: Color,
    pub card_bg: Color,
    pub card_shadow: Color,
    pub row_alt: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub separator: Color,
    pub font: FontSource,
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self {
            title: "Writer Reports".to_string(),
            width: 1000,
            min_height: 600,
            header_height: 120,
            cards_section_height: 140,
            table_header_height: 80,
            row_height: 48,
            row_spacing: 12,
            bottom_padding: 80,
            margin: 40,
            card_width: 220,
            card_height: 100,
            card_spacing: 20,
            column_offsets: [60, 520, 660, 820],
            title_px: 36.0,
            subtitle_px: 18.0,
            heading_px: 20.0,
            value_px: 24.0,
            label_px: 14.0,
            body_px: 16.0,
            background: Color::WHITE,
            header: Color::rgb(0x4A, 0x90, 0xE2),
            header_text: Color::WHITE,
            card_bg: Color::WHITE,
            card_shadow: Color::rgb(0xE5, 0xE7, 0xEB),
            row_alt: Color::rgb(0xF8, 0xF9, 0xFA),
            text: Color::rgb(0x33, 0x33, 0x33),
            muted: Color::rgb(0x66, 0x66, 0x66),
            accent: Color::rgb(0xC9, 0x97, 0x00),
            separator: Color::rgb(0xDE, 0xE2, 0xE6),
            font: FontSource::BuiltIn,
        }
    }
}

/// The rendered artifact: PNG bytes plus the realized dimensions.
#[derive(Debug, Clone)]
pub struct ReportImage {
    pub width: u32,
    pub height: u32,
    pub png: Vec<u8>,
}

/// Render a report for the given (already ranked) leaderboard.
pub fn render(
    entries: &[LeaderboardEntry],
    summary: &Summary,
    period: Option<&DateRange>,
    style: &ReportStyle,
) -> Result<ReportImage> {
    if style.width == 0 {
        return Err(BylinesError::Render(
            "canvas width must be positive".to_string(),
        ));
    }

    let font = Font::load(&style.font);
    let plan = layout::layout(entries, summary, period, style, &font);
    let canvas = raster::Canvas::execute(&plan, &font);

    // Declared and realized dimensions must agree before any bytes leave
    // the engine; a mismatch is a layout bug, never something to clip over.
    assert_eq!(
        (canvas.width(), canvas.height()),
        (plan.width, plan.height),
        "report canvas does not match its computed dimensions"
    );

    let png = canvas.encode_png()?;
    Ok(ReportImage {
        width: plan.width,
        height: plan.height,
        png,
    })
}
