pub mod content;
pub mod map;
pub mod model;
pub mod storage;
pub mod story;

pub use map::{AnswerOutcome, GameState, MapEngine, MapProgress};
pub use storage::{FileStore, MemoryStore, ProgressStore};
pub use story::scoring::classify_performance;
pub use story::{Performance, QuestionAdvance, StoryEngine, StoryProgress};
