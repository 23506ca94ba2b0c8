//! Drag-drop pool state for sequencing questions.
//!
//! The learner builds an ordered answer by moving items from an available
//! pool into an answer pool. Pointer drags and discrete click-to-move
//! gestures are both expressed as [`Gesture`] values and funnelled through
//! one state-update function, so both input modes converge on the same
//! final state.

use crate::practice::evaluate::UserAnswer;

/// A user input event against the pool, from either input mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gesture {
    /// Drag an available item into the answer pool, optionally at a slot.
    DragToAnswer { item: String, slot: Option<usize> },
    /// Drag an answer item back to the available pool.
    DragToAvailable { item: String },
    /// Reorder an item already in the answer pool to a new slot.
    DragWithinAnswer { item: String, slot: usize },
    /// Click an available item to append it to the answer.
    ClickPlace { item: String },
    /// Click an answer item to return it to the available pool.
    ClickRemove { item: String },
}

/// Mutable pool state: every option starts available exactly once; moving
/// an item to the answer removes it from the available pool and vice versa.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequencePool {
    available: Vec<String>,
    answer: Vec<String>,
}

impl SequencePool {
    pub fn new(options: &[String]) -> Self {
        Self {
            available: options.to_vec(),
            answer: Vec::new(),
        }
    }

    pub fn available(&self) -> &[String] {
        &self.available
    }

    pub fn answer(&self) -> &[String] {
        &self.answer
    }

    /// Submission is enabled once at least one item has been placed.
    pub fn can_submit(&self) -> bool {
        !self.answer.is_empty()
    }

    /// The built sequence as a submittable answer.
    pub fn user_answer(&self) -> UserAnswer {
        UserAnswer::Sequence(self.answer.clone())
    }

    /// Apply one gesture. Gestures naming an item that is not in the
    /// expected pool are ignored (stale drag events after a reset).
    pub fn apply(&mut self, gesture: Gesture) {
        match gesture {
            Gesture::DragToAnswer { item, slot } => self.place(&item, slot),
            Gesture::ClickPlace { item } => self.place(&item, None),
            Gesture::DragToAvailable { item } | Gesture::ClickRemove { item } => {
                self.remove(&item);
            }
            Gesture::DragWithinAnswer { item, slot } => self.reorder(&item, slot),
        }
    }

    fn place(&mut self, item: &str, slot: Option<usize>) {
        let Some(pos) = self.available.iter().position(|i| i == item) else {
            return;
        };
        let moved = self.available.remove(pos);
        match slot {
            Some(slot) if slot <= self.answer.len() => self.answer.insert(slot, moved),
            _ => self.answer.push(moved),
        }
    }

    fn remove(&mut self, item: &str) {
        let Some(pos) = self.answer.iter().position(|i| i == item) else {
            return;
        };
        let moved = self.answer.remove(pos);
        self.available.push(moved);
    }

    fn reorder(&mut self, item: &str, slot: usize) {
        let Some(pos) = self.answer.iter().position(|i| i == item) else {
            return;
        };
        let moved = self.answer.remove(pos);
        let slot = slot.min(self.answer.len());
        self.answer.insert(slot, moved);
    }
}
