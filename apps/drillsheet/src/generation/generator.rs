//! Question Generator.
//!
//! `generate` draws one question: `base` uniform over the selected tables,
//! `operand` uniform over 1..=12, and, when division is enabled, a fair coin
//! deciding the kind. A division question shows the dividend `base * operand`
//! and blanks the quotient. Duplicates across a set are expected; there is no
//! memoization and no uniqueness guarantee.

#![allow(dead_code)]

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Placeholder shown where the pupil writes the answer.
pub const BLANK: &str = "____";

pub const OPERAND_MIN: u8 = 1;
pub const OPERAND_MAX: u8 = 12;

// ────────────────────────────────────────────────────────────────────────────
// Data model
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionKind {
    Multiplication,
    Division,
}

/// A single drill question.
///
/// Immutable once constructed: the constructors build `display_text` and
/// `answer` together, so the answer is always the unique value that completes
/// the blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub kind: QuestionKind,
    /// The selected table multiplier this question was drawn from (1..=20).
    pub base: u8,
    /// The second factor, drawn from 1..=12.
    pub operand: u8,
    /// Display string with the blank placeholder, e.g. `"7 × 8 = ____"`.
    pub display_text: String,
    pub answer: u16,
}

impl Question {
    fn multiplication(base: u8, operand: u8) -> Self {
        Question {
            kind: QuestionKind::Multiplication,
            base,
            operand,
            display_text: format!("{base} × {operand} = {BLANK}"),
            answer: base as u16 * operand as u16,
        }
    }

    fn division(base: u8, operand: u8) -> Self {
        let dividend = base as u16 * operand as u16;
        Question {
            kind: QuestionKind::Division,
            base,
            operand,
            display_text: format!("{dividend} ÷ {base} = {BLANK}"),
            answer: operand as u16,
        }
    }

    /// The question text up to the blank, trailing whitespace trimmed.
    pub fn prompt(&self) -> &str {
        self.display_text
            .strip_suffix(BLANK)
            .unwrap_or(&self.display_text)
            .trim_end()
    }

    pub fn answer_text(&self) -> String {
        self.answer.to_string()
    }

    /// The display text with the blank filled in, as shown on the answer key.
    pub fn solved_text(&self) -> String {
        self.display_text.replace(BLANK, &self.answer.to_string())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Generation
// ────────────────────────────────────────────────────────────────────────────

/// Draws one question.
///
/// Preconditions (validated upstream): `tables` is non-empty with members in
/// 1..=20. Bounded domains keep every product within `u16`.
pub fn generate<R: Rng + ?Sized>(tables: &[u8], include_division: bool, rng: &mut R) -> Question {
    let base = tables[rng.gen_range(0..tables.len())];
    let operand = rng.gen_range(OPERAND_MIN..=OPERAND_MAX);

    if include_division && rng.gen_bool(0.5) {
        Question::division(base, operand)
    } else {
        Question::multiplication(base, operand)
    }
}

/// Draws `count` questions by calling [`generate`] independently `count` times.
pub fn generate_set<R: Rng + ?Sized>(
    tables: &[u8],
    count: u8,
    include_division: bool,
    rng: &mut R,
) -> Vec<Question> {
    (0..count)
        .map(|_| generate(tables, include_division, rng))
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn make_rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_multiplication_only_without_division_flag() {
        let mut rng = make_rng();
        let questions = generate_set(&[2, 5, 10], 50, false, &mut rng);
        assert!(questions
            .iter()
            .all(|q| q.kind == QuestionKind::Multiplication));
    }

    #[test]
    fn test_generated_fields_within_domains() {
        let mut rng = make_rng();
        let tables = [2u8, 5, 10];
        for q in generate_set(&tables, 99, true, &mut rng) {
            assert!(tables.contains(&q.base), "base {} not in selection", q.base);
            assert!(
                (OPERAND_MIN..=OPERAND_MAX).contains(&q.operand),
                "operand {} out of range",
                q.operand
            );
        }
    }

    #[test]
    fn test_answer_completes_the_blank() {
        let mut rng = make_rng();
        for q in generate_set(&[3, 7, 12, 20], 99, true, &mut rng) {
            match q.kind {
                QuestionKind::Multiplication => {
                    assert_eq!(q.answer, q.base as u16 * q.operand as u16);
                    assert_eq!(
                        q.solved_text(),
                        format!("{} × {} = {}", q.base, q.operand, q.answer)
                    );
                }
                QuestionKind::Division => {
                    let dividend = q.base as u16 * q.operand as u16;
                    assert_eq!(q.answer, q.operand as u16);
                    assert_eq!(dividend / q.base as u16, q.answer);
                    assert_eq!(
                        q.solved_text(),
                        format!("{} ÷ {} = {}", dividend, q.base, q.answer)
                    );
                }
            }
        }
    }

    #[test]
    fn test_fair_coin_produces_both_kinds() {
        let mut rng = make_rng();
        let questions = generate_set(&[4], 80, true, &mut rng);
        let divisions = questions
            .iter()
            .filter(|q| q.kind == QuestionKind::Division)
            .count();
        assert!(
            divisions > 10 && divisions < 70,
            "80 fair flips should land well inside (10, 70), got {divisions}"
        );
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let a = generate_set(&[2, 5, 10], 20, true, &mut StdRng::seed_from_u64(7));
        let b = generate_set(&[2, 5, 10], 20, true, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_prompt_strips_blank() {
        let q = Question::multiplication(6, 9);
        assert_eq!(q.prompt(), "6 × 9 =");
        assert!(!q.prompt().contains(BLANK));
    }

    #[test]
    fn test_requested_count_is_exact() {
        let mut rng = make_rng();
        let questions = generate_set(&[2, 5, 10], 10, false, &mut rng);
        assert_eq!(questions.len(), 10);
    }
}
