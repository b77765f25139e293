//! Print Layout Engine.
//!
//! Given a question count in 1..=99, chooses a column count, font size (mm)
//! and line height (mm) that fill a fixed A4 usable area exactly. The page's
//! vertical space is divided evenly among the rows of the tallest column, so
//! the layout fits without overflow by construction. Font size follows an
//! inverse power-law between the single-question maximum and the 99-question
//! minimum, clamped to 85% of the row height and then to the absolute bounds
//! (the absolute floor wins when the two conflict).

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Page geometry (A4, portrait)
// ────────────────────────────────────────────────────────────────────────────

pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;
pub const MARGIN_MM: f32 = 15.0;
/// Vertical space reserved for the title block below the top margin.
pub const TITLE_BLOCK_MM: f32 = 22.0;

pub const USABLE_WIDTH_MM: f32 = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;
pub const USABLE_HEIGHT_MM: f32 = PAGE_HEIGHT_MM - 2.0 * MARGIN_MM - TITLE_BLOCK_MM;

// ────────────────────────────────────────────────────────────────────────────
// Sizing constants
// ────────────────────────────────────────────────────────────────────────────

pub const MAX_FONT_MM: f32 = 20.0;
pub const MIN_FONT_MM: f32 = 9.5;
/// Glyphs never exceed this fraction of their row.
const FONT_TO_LINE_RATIO: f32 = 0.85;
/// Line-height floors for sparse sheets: up to 5 questions, and 6..=10.
const SPARSE_FLOOR_SMALL_MM: f32 = 20.0;
const SPARSE_FLOOR_MEDIUM_MM: f32 = 16.0;

/// Print plan for one worksheet. Derived, recomputed on every render request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrintLayout {
    pub columns: u8,
    /// Row count of the tallest column; the PDF adapter places question `i`
    /// at column `i / questions_per_column`, row `i % questions_per_column`.
    pub questions_per_column: u8,
    pub font_size_mm: f32,
    pub line_height_mm: f32,
}

// ────────────────────────────────────────────────────────────────────────────
// Core computation
// ────────────────────────────────────────────────────────────────────────────

/// Column count as a step function of the question count.
///
/// The 67..=99 range dips back to 3 columns at multiples of 3 and at >= 90 so
/// the bottom row stays balanced; everything else in that range takes 4.
fn column_count(count: u8) -> u8 {
    match count {
        0..=5 => 1,
        6..=20 => 2,
        21..=66 => 3,
        _ if count % 3 == 0 || count >= 90 => 3,
        _ => 4,
    }
}

fn round1(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

/// Computes the print plan for a question count in 1..=99.
///
/// Deterministic and total over the documented domain; the caller validates
/// the count before it gets here.
pub fn compute_print_layout(question_count: u8) -> PrintLayout {
    let columns = column_count(question_count);
    let questions_per_column = (question_count + columns - 1) / columns;
    let mut line_height = USABLE_HEIGHT_MM / questions_per_column as f32;

    // Inverse power-law: drops fast at low counts, flattens near the minimum.
    let t = (question_count as f32 - 1.0) / 98.0;
    let mut font = MAX_FONT_MM - (MAX_FONT_MM - MIN_FONT_MM) * t.powf(0.7);

    font = font.min(line_height * FONT_TO_LINE_RATIO);
    font = font.clamp(MIN_FONT_MM, MAX_FONT_MM);

    line_height = match question_count {
        0..=5 => line_height.max(SPARSE_FLOOR_SMALL_MM),
        6..=10 => line_height.max(SPARSE_FLOOR_MEDIUM_MM),
        _ => line_height,
    };

    PrintLayout {
        columns,
        questions_per_column,
        font_size_mm: round1(font),
        line_height_mm: round1(line_height),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
