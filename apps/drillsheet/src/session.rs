//! Worksheet session: the current question set plus answer visibility.
//!
//! A session is a plain value, replaced wholesale on every generate and read
//! by one renderer at a time. No shared mutable state anywhere.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::generation::{generate_set, Question};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorksheetSession {
    pub questions: Vec<Question>,
    /// Presentation mode only; the print export always paints both pages.
    pub answers_visible: bool,
}

impl WorksheetSession {
    /// Builds a fresh session with answers hidden. Preconditions are the
    /// generator's, validated upstream.
    pub fn generate<R: Rng + ?Sized>(
        tables: &[u8],
        count: u8,
        include_division: bool,
        rng: &mut R,
    ) -> Self {
        WorksheetSession {
            questions: generate_set(tables, count, include_division, rng),
            answers_visible: false,
        }
    }

    pub fn toggle_answers(&mut self) {
        self.answers_visible = !self.answers_visible;
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::QuestionKind;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_produces_requested_set() {
        let mut rng = StdRng::seed_from_u64(1);
        let session = WorksheetSession::generate(&[2, 5, 10], 10, false, &mut rng);
        assert_eq!(session.questions.len(), 10);
        assert!(!session.answers_visible);
        for q in &session.questions {
            assert_eq!(q.kind, QuestionKind::Multiplication);
            assert!([2, 5, 10].contains(&q.base));
        }
    }

    #[test]
    fn test_regenerate_replaces_wholesale() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut session = WorksheetSession::generate(&[3], 5, false, &mut rng);
        session.toggle_answers();

        session = WorksheetSession::generate(&[4], 8, false, &mut rng);
        assert_eq!(session.questions.len(), 8);
        assert!(
            !session.answers_visible,
            "a fresh session starts with answers hidden"
        );
        assert!(session.questions.iter().all(|q| q.base == 4));
    }

    #[test]
    fn test_toggle_answers_flips() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = WorksheetSession::generate(&[6], 3, false, &mut rng);
        session.toggle_answers();
        assert!(session.answers_visible);
        session.toggle_answers();
        assert!(!session.answers_visible);
    }
}
