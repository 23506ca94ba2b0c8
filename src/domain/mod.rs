pub mod progress;

pub use progress::{ProgressRecord, StreakRecord};
