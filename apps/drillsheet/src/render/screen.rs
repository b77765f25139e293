//! Screen renderer.
//!
//! Maps a session plus a presentation plan onto a serializable view model:
//! container-level styling (columns, font) and one row per question. The
//! question data is never altered; answers appear only while the session has
//! them visible.

use serde::{Deserialize, Serialize};

use crate::layout::PresentationLayout;
use crate::session::WorksheetSession;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenRow {
    pub text: String,
    /// Populated only while the session's answers are visible.
    pub answer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenView {
    pub columns: u8,
    pub font_size_px: f32,
    pub rows: Vec<ScreenRow>,
}

pub fn render_screen(session: &WorksheetSession, plan: &PresentationLayout) -> ScreenView {
    let rows = session
        .questions
        .iter()
        .map(|q| ScreenRow {
            text: q.display_text.clone(),
            answer: session.answers_visible.then(|| q.answer_text()),
        })
        .collect();

    ScreenView {
        columns: plan.columns,
        font_size_px: plan.font_size_px,
        rows,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
