//! Story-Quiz Engine: linear node progression with XP, badges and
//! per-node answer counters, persisted after every transition.

use crate::model::{CutsceneFrame, StoryData, StoryNode};
use crate::storage::{self, ProgressStore};
use serde::{Deserialize, Serialize};

pub mod completion;
pub mod navigation;
pub mod resets;
pub mod scoring;

pub use navigation::QuestionAdvance;
pub use scoring::Performance;

/// Storage key of the Trạng Quỳnh game.
pub const STORAGE_KEY: &str = "trangquynh_progress";

/// XP granted per correct answer when the activity does not set a reward.
pub const DEFAULT_XP_REWARD: u32 = 10;

/// Persisted progress of one story play-through. Field names in the JSON
/// document are camelCase, matching the historical client storage layout.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct StoryProgress {
    pub current_node_index: usize,
    pub completed_nodes: Vec<String>,
    pub total_xp: u32,
    pub earned_badges: Vec<String>,
    pub current_question_index: usize,
    pub correct_answers: u32,
    pub incorrect_answers: u32,
}

/// The engine owns the story content, the mutable progress and an injected
/// store. Each instance is independent; nothing is global.
pub struct StoryEngine {
    story: StoryData,
    progress: StoryProgress,
    store: Box<dyn ProgressStore>,
    key: String,
}

impl StoryEngine {
    /// Restores progress from the default storage key, or starts fresh.
    pub fn new(story: StoryData, store: Box<dyn ProgressStore>) -> Self {
        Self::with_key(story, store, STORAGE_KEY)
    }

    /// Same as [`StoryEngine::new`] but under a caller-chosen key, so two
    /// story packs can live in one store.
    pub fn with_key(story: StoryData, store: Box<dyn ProgressStore>, key: &str) -> Self {
        let progress = storage::load_state(store.as_ref(), key);
        Self {
            story,
            progress,
            store,
            key: key.to_string(),
        }
    }

    pub fn story(&self) -> &StoryData {
        &self.story
    }

    pub fn progress(&self) -> &StoryProgress {
        &self.progress
    }

    /// Node the player is currently on, `None` once the story is finished.
    pub fn current_node(&self) -> Option<&StoryNode> {
        self.story.nodes.get(self.progress.current_node_index)
    }

    /// Cutscene of the current node, for the view layer to play.
    pub fn current_cutscene(&self) -> &[CutsceneFrame] {
        self.current_node()
            .map(|node| node.cutscene.as_slice())
            .unwrap_or(&[])
    }

    /// `completed / total` counts shown on the level-selection screen.
    pub fn completion_summary(&self) -> (usize, usize) {
        (self.progress.completed_nodes.len(), self.story.nodes.len())
    }

    pub(crate) fn persist(&mut self) {
        storage::save_state(self.store.as_mut(), &self.key, &self.progress);
    }
}
