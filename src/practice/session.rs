//! Per-flashcard practice session state.
//!
//! Tracks which questions of the open flashcard have been answered
//! correctly and fires the completion celebration exactly once when every
//! question is simultaneously correct. One wrong answer anywhere wipes all
//! recorded correctness and re-arms the celebration; this mirrors the
//! observed product behavior (see DESIGN.md) rather than a cumulative gate.

use std::collections::HashMap;

/// Ephemeral state scoped to one open flashcard. Created when the card is
/// opened, hard-reset when the card identity changes, never persisted.
#[derive(Debug, Clone, Default)]
pub struct PracticeSession {
    flashcard_id: String,
    total_questions: usize,
    correct: HashMap<String, bool>,
    celebration_fired: bool,
}

impl PracticeSession {
    pub fn new(flashcard_id: &str, total_questions: usize) -> Self {
        Self {
            flashcard_id: flashcard_id.to_string(),
            total_questions,
            correct: HashMap::new(),
            celebration_fired: false,
        }
    }

    pub fn flashcard_id(&self) -> &str {
        &self.flashcard_id
    }

    /// Number of questions currently recorded correct.
    pub fn correct_count(&self) -> usize {
        self.correct.len()
    }

    pub fn celebration_fired(&self) -> bool {
        self.celebration_fired
    }

    /// Hard reset for a (possibly different) flashcard. No state carries
    /// over between flashcards, even within the same category.
    pub fn reset_for(&mut self, flashcard_id: &str, total_questions: usize) {
        *self = Self::new(flashcard_id, total_questions);
    }

    /// Record an answer outcome. Returns true when this answer completes
    /// the full set and the celebration should fire now; the flag makes the
    /// trigger idempotent for the rest of the session.
    pub fn record_answer(&mut self, question_id: &str, is_correct: bool) -> bool {
        if !is_correct {
            self.correct.clear();
            self.celebration_fired = false;
            return false;
        }

        self.correct.insert(question_id.to_string(), true);

        let all_correct =
            self.total_questions > 0 && self.correct.len() == self.total_questions;
        if all_correct && !self.celebration_fired {
            self.celebration_fired = true;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_celebration_fires_when_all_correct() {
        let mut session = PracticeSession::new("card-1", 2);
        assert!(!session.record_answer("q1", true));
        assert!(session.record_answer("q2", true));
        assert!(session.celebration_fired());
    }

    #[test]
    fn test_celebration_fires_at_most_once_per_arming() {
        let mut session = PracticeSession::new("card-1", 2);
        session.record_answer("q1", true);
        assert!(session.record_answer("q2", true));
        // Re-answering after the trigger does not fire again
        assert!(!session.record_answer("q1", true));
        assert!(!session.record_answer("q2", true));
    }

    #[test]
    fn test_wrong_answer_wipes_everything_and_rearms() {
        let mut session = PracticeSession::new("card-1", 2);
        assert!(!session.record_answer("q1", true));
        assert!(session.record_answer("q2", true));

        // A wrong answer on any question, even an unrelated one, discards
        // all recorded correctness and resets the celebration flag
        assert!(!session.record_answer("q3", false));
        assert_eq!(session.correct_count(), 0);
        assert!(!session.celebration_fired());

        // Re-answering both correctly fires the celebration again
        assert!(!session.record_answer("q1", true));
        assert!(session.record_answer("q2", true));
    }

    #[test]
    fn test_repeat_correct_answer_does_not_double_count() {
        let mut session = PracticeSession::new("card-1", 2);
        session.record_answer("q1", true);
        assert!(!session.record_answer("q1", true));
        assert_eq!(session.correct_count(), 1);
    }

    #[test]
    fn test_flashcard_change_hard_resets() {
        let mut session = PracticeSession::new("card-1", 1);
        assert!(session.record_answer("q1", true));

        session.reset_for("card-2", 2);
        assert_eq!(session.flashcard_id(), "card-2");
        assert_eq!(session.correct_count(), 0);
        assert!(!session.celebration_fired());
        assert!(!session.record_answer("q1", true));
    }

    #[test]
    fn test_zero_question_flashcard_never_celebrates() {
        let mut session = PracticeSession::new("card-1", 0);
        assert!(!session.record_answer("q1", true));
        assert!(!session.celebration_fired());
    }
}
