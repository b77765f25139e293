// Question generation: uniform draws over the selected tables, fair coin for
// division. Pure aside from the injected RNG, which callers seed when they
// need a reproducible sheet.

pub mod generator;

pub use generator::{generate, generate_set, Question, QuestionKind, BLANK};
