//! Pure layout: turns a ranked leaderboard and its summary into a draw-op
//! plan with content-dependent dimensions. No pixels are touched here,
//! which keeps the geometry deterministic and directly testable.

use super::font::Font;
use super::paint::DrawOp;
use super::{DateRange, ReportStyle};
use crate::model::{LeaderboardEntry, Summary};

/// The fully laid-out report: declared canvas dimensions plus every
/// primitive to draw, in paint order.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub width: u32,
    pub height: u32,
    pub ops: Vec<DrawOp>,
}

/// Canvas height for `rows` leaderboard rows, floored at the configured
/// minimum. Recomputed from the actual row count on every call; nothing is
/// cached between renders.
pub fn canvas_height(style: &ReportStyle, rows: usize) -> u32 {
    let mut height = style.header_height
        + style.cards_section_height
        + style.table_header_height
        + style.bottom_padding;
    if rows > 0 {
        height += rows as u32 * (style.row_height + style.row_spacing) - style.row_spacing;
    }
    height.max(style.min_height)
}

pub fn layout(
    entries: &[LeaderboardEntry],
    summary: &Summary,
    period: Option<&DateRange>,
    style: &ReportStyle,
    font: &Font,
) -> Plan {
    let width = style.width;
    let height = canvas_height(style, entries.len());
    let mut ops = Vec::new();

    // Background and header band
    ops.push(DrawOp::FillRect {
        x: 0,
        y: 0,
        width,
        height,
        color: style.background,
    });
    ops.push(DrawOp::FillRect {
        x: 0,
        y: 0,
        width,
        height: style.header_height,
        color: style.header,
    });

    // Title keeps its position whether or not a subtitle follows
    let title_y =
        ((style.header_height as f32 - style.title_px - style.subtitle_px - 8.0) / 2.0) as i32;
    ops.push(DrawOp::Text {
        x: style.margin as i32,
        y: title_y,
        px: style.title_px,
        color: style.header_text,
        text: style.title.clone(),
    });
    // The subtitle line exists only when BOTH dates were supplied; a
    // half-specified range suppresses the whole line, not just one end.
    if let Some(period) = period {
        ops.push(DrawOp::Text {
            x: style.margin as i32,
            y: title_y + style.title_px as i32 + 8,
            px: style.subtitle_px,
            color: style.header_text,
            text: period.label(),
        });
    }

    // Summary cards, centered as a group
    let cards = [
        ("Total Writers", summary.total_writers.to_string()),
        ("Total Articles", summary.total_articles.to_string()),
        ("Total Views", group_thousands(summary.total_views)),
        (
            "Avg Views/Article",
            summary.avg_views_per_article.to_string(),
        ),
    ];
    let group_width = 4 * style.card_width + 3 * style.card_spacing;
    let group_x = (width.saturating_sub(group_width) / 2) as i32;
    let cards_y = style.header_height as i32
        + (style.cards_section_height as i32 - style.card_height as i32) / 2;
    for (i, (label, value)) in cards.iter().enumerate() {
        let x = group_x + i as i32 * (style.card_width + style.card_spacing) as i32;
        ops.push(DrawOp::FillRect {
            x: x + 2,
            y: cards_y + 2,
            width: style.card_width,
            height: style.card_height,
            color: style.card_shadow,
        });
        ops.push(DrawOp::FillRect {
            x,
            y: cards_y,
            width: style.card_width,
            height: style.card_height,
            color: style.card_bg,
        });

        let value_width = font.text_width(value, style.value_px);
        ops.push(DrawOp::Text {
            x: x + ((style.card_width as f32 - value_width) / 2.0) as i32,
            y: cards_y + 18,
            px: style.value_px,
            color: style.text,
            text: value.clone(),
        });
        let label_width = font.text_width(label, style.label_px);
        ops.push(DrawOp::Text {
            x: x + ((style.card_width as f32 - label_width) / 2.0) as i32,
            y: cards_y + 62,
            px: style.label_px,
            color: style.muted,
            text: (*label).to_string(),
        });
    }

    // Table header: section heading, column labels, separator rule
    let table_top = (style.header_height + style.cards_section_height) as i32;
    ops.push(DrawOp::Text {
        x: style.margin as i32,
        y: table_top,
        px: style.heading_px,
        color: style.text,
        text: "Writer Leaderboard".to_string(),
    });
    let columns = ["Writer", "Articles", "Views", "Avg Views/Article"];
    for (label, x) in columns.iter().zip(style.column_offsets) {
        ops.push(DrawOp::Text {
            x: x as i32,
            y: table_top + 36,
            px: style.label_px,
            color: style.muted,
            text: (*label).to_string(),
        });
    }
    let rule_y = table_top + 60;
    ops.push(DrawOp::Line {
        x1: style.margin as i32,
        y1: rule_y,
        x2: (width - style.margin) as i32,
        y2: rule_y,
        color: style.separator,
    });

    // One row per entry, in the order given (the store already ranked them)
    let rows_top = table_top + style.table_header_height as i32;
    let step = (style.row_height + style.row_spacing) as i32;
    for (i, entry) in entries.iter().enumerate() {
        let y = rows_top + i as i32 * step;
        if i % 2 == 1 {
            ops.push(DrawOp::FillRect {
                x: style.margin as i32,
                y,
                width: width - 2 * style.margin,
                height: style.row_height,
                color: style.row_alt,
            });
        }

        let text_y = y + (style.row_height as i32 - style.body_px as i32) / 2;
        // Top three get the accent color; ranking itself is untouched
        let name_color = if i < 3 { style.accent } else { style.text };
        let cells = [
            format!("{}. {}", i + 1, entry.name),
            entry.articles.to_string(),
            group_thousands(entry.views),
            entry.avg_views.to_string(),
        ];
        for (j, (cell, x)) in cells.iter().zip(style.column_offsets).enumerate() {
            ops.push(DrawOp::Text {
                x: x as i32,
                y: text_y,
                px: style.body_px,
                color: if j == 0 { name_color } else { style.text },
                text: cell.clone(),
            });
        }
    }

    Plan { width, height, ops }
}

/// `1234567` -> `"1,234,567"`
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
