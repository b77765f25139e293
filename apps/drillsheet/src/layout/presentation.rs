//! Presentation Layout Engine.
//!
//! Tiered columns and font size for a variable-height screen. Independent of
//! the print engine: the two tier tables serve different media and are
//! intentionally not unified, even where they look similar. There is no
//! line-height output; content past the viewport scrolls, and the font never
//! drops below the absolute minimum for readability.

#![allow(dead_code)]

use serde::{Deserialize, Serialize};

pub const MIN_FONT_PX: f32 = 18.0;
pub const MAX_FONT_PX: f32 = 48.0;
/// The viewport-derived ceiling is `viewport_height / VIEWPORT_DIVISOR`.
pub const VIEWPORT_DIVISOR: f32 = 18.0;

/// Ordering of the readability floor vs. the viewport-derived ceiling when
/// the two conflict (tiny viewports).
///
/// `FloorWins` reproduces the shipped behavior: the ceiling is applied first
/// and the floor last, so the final font may exceed the viewport ceiling.
/// `CeilingWins` applies the floor first and the ceiling last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewportClamp {
    #[default]
    FloorWins,
    CeilingWins,
}

/// Screen plan for one worksheet. Recomputed on every content change and on
/// every settled viewport resize.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PresentationLayout {
    pub columns: u8,
    pub font_size_px: f32,
}

// ────────────────────────────────────────────────────────────────────────────
// Tier tables
// ────────────────────────────────────────────────────────────────────────────

/// Monotonic step function, no upper rebound.
fn column_count(count: u32) -> u8 {
    match count {
        0..=9 => 3,
        10..=20 => 4,
        _ => 5,
    }
}

/// Base font size by count tier, before viewport clamping.
///
/// Coarser tiers than the column table; the thresholds deliberately differ
/// between the two tables.
fn base_font_px(count: u32) -> f32 {
    match count {
        0..=12 => 40.0,
        13..=24 => 32.0,
        25..=40 => 26.0,
        41..=60 => 22.0,
        _ => 18.0,
    }
}

/// Computes the screen plan for any count >= 1 and a positive viewport height.
pub fn compute_presentation_layout(
    question_count: u32,
    viewport_height_px: f32,
    clamp: ViewportClamp,
) -> PresentationLayout {
    let base = base_font_px(question_count);
    let max_allowed = MAX_FONT_PX.min(viewport_height_px / VIEWPORT_DIVISOR);

    let font_size_px = match clamp {
        ViewportClamp::FloorWins => base.min(max_allowed).max(MIN_FONT_PX),
        ViewportClamp::CeilingWins => base.max(MIN_FONT_PX).min(max_allowed),
    };

    PresentationLayout {
        columns: column_count(question_count),
        font_size_px,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// Tall enough that the viewport ceiling never binds.
    const ROOMY_VIEWPORT: f32 = 2000.0;

    fn layout(count: u32) -> PresentationLayout {
        compute_presentation_layout(count, ROOMY_VIEWPORT, ViewportClamp::FloorWins)
    }

    #[test]
    fn test_column_tiers() {
        assert_eq!(layout(1).columns, 3);
        assert_eq!(layout(9).columns, 3);
        assert_eq!(layout(10).columns, 4);
        assert_eq!(layout(20).columns, 4);
        assert_eq!(layout(21).columns, 5);
        assert_eq!(layout(100).columns, 5);
    }

    #[test]
    fn test_font_tiers_before_clamping() {
        assert_eq!(layout(12).font_size_px, 40.0);
        assert_eq!(layout(13).font_size_px, 32.0);
        assert_eq!(layout(24).font_size_px, 32.0);
        assert_eq!(layout(25).font_size_px, 26.0);
        assert_eq!(layout(40).font_size_px, 26.0);
        assert_eq!(layout(41).font_size_px, 22.0);
        assert_eq!(layout(60).font_size_px, 22.0);
        assert_eq!(layout(61).font_size_px, 18.0);
    }

    #[test]
    fn test_column_and_font_thresholds_differ() {
        // 10 questions already move to 4 columns but keep the largest font;
        // the two tier tables are independent.
        let plan = layout(10);
        assert_eq!(plan.columns, 4);
        assert_eq!(plan.font_size_px, 40.0);
    }

    #[test]
    fn test_viewport_ceiling_binds_on_short_screens() {
        // 500px viewport: ceiling is 500/18 ≈ 27.8, below the 40px base.
        let plan = compute_presentation_layout(12, 500.0, ViewportClamp::FloorWins);
        assert!(
            (plan.font_size_px - 500.0 / VIEWPORT_DIVISOR).abs() < 1e-3,
            "expected the viewport ceiling, got {}",
            plan.font_size_px
        );
    }

    #[test]
    fn test_floor_beats_ceiling_on_tiny_viewports() {
        // 100px viewport: ceiling is ~5.6, below the absolute minimum. The
        // readability floor wins and the font exceeds the ceiling.
        let plan = compute_presentation_layout(12, 100.0, ViewportClamp::FloorWins);
        assert_eq!(plan.font_size_px, MIN_FONT_PX);
    }

    #[test]
    fn test_ceiling_wins_ordering_inverts_the_conflict() {
        let plan = compute_presentation_layout(12, 100.0, ViewportClamp::CeilingWins);
        assert!(
            (plan.font_size_px - 100.0 / VIEWPORT_DIVISOR).abs() < 1e-3,
            "CeilingWins should cap at viewport/18, got {}",
            plan.font_size_px
        );
    }

    #[test]
    fn test_orderings_agree_when_no_conflict() {
        for count in [1u32, 12, 30, 61] {
            let a = compute_presentation_layout(count, ROOMY_VIEWPORT, ViewportClamp::FloorWins);
            let b = compute_presentation_layout(count, ROOMY_VIEWPORT, ViewportClamp::CeilingWins);
            assert_eq!(a, b, "orderings diverged without a floor/ceiling conflict");
        }
    }

    #[test]
    fn test_idempotent() {
        for count in [1u32, 10, 21, 55, 120] {
            let a = compute_presentation_layout(count, 768.0, ViewportClamp::FloorWins);
            let b = compute_presentation_layout(count, 768.0, ViewportClamp::FloorWins);
            assert_eq!(a, b);
        }
    }
}
