//! Practice engine: answer evaluation, drag-drop pool state and the
//! per-flashcard practice session.

pub mod evaluate;
pub mod pool;
pub mod session;

pub use evaluate::{UserAnswer, evaluate, normalize_text};
pub use pool::{Gesture, SequencePool};
pub use session::PracticeSession;
