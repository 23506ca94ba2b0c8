//! Answer evaluation for the three practice question kinds.
//!
//! Pure scoring against the canonical answer; all interaction state (pool
//! contents, selection, typed text) lives with the caller. Equality rules
//! are kind-specific:
//!
//! - mcq: exact string equality (options are catalog-controlled literals)
//! - fill-blank: case- and whitespace-insensitive, accent-sensitive
//! - drag-drop: exact ordered-sequence equality

use serde::{Deserialize, Serialize};

use crate::content::{CanonicalAnswer, PracticeQuestion, QuestionKind};

/// A learner's submitted answer.
///
/// Untagged on the wire: a JSON string for mcq/fill-blank, an array for
/// drag-drop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserAnswer {
    Text(String),
    Sequence(Vec<String>),
}

/// Normalize free text for fill-blank comparison: lowercase, trim, and
/// collapse internal whitespace runs to a single space. Accents and
/// punctuation are left alone on purpose ("chateau" is not "château").
pub fn normalize_text(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Score a submitted answer against a question's canonical answer.
///
/// A kind/shape mismatch (sequence submitted to an mcq, text submitted to a
/// drag-drop) scores false rather than erroring; the catalog shape contract
/// makes the canonical side reliable.
pub fn evaluate(question: &PracticeQuestion, answer: &UserAnswer) -> bool {
    match (question.kind, &question.canonical_answer, answer) {
        (QuestionKind::Mcq, CanonicalAnswer::Single(expected), UserAnswer::Text(selected)) => {
            selected == expected
        }
        (QuestionKind::FillBlank, CanonicalAnswer::Single(expected), UserAnswer::Text(typed)) => {
            normalize_text(typed) == normalize_text(expected)
        }
        (
            QuestionKind::DragDrop,
            CanonicalAnswer::Sequence(expected),
            UserAnswer::Sequence(built),
        ) => built == expected,
        _ => false,
    }
}
