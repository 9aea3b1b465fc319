//! Map-Unlock Engine: four independent question tracks; a section unlocks
//! once all its questions are answered correctly in order, and the
//! treasure is found when every section is unlocked.

use crate::model::{MapQuestion, MapSectionData};
use crate::storage::{self, ProgressStore};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Storage key of the Sông Hồng game.
pub const STORAGE_KEY: &str = "songhong-math-quest";

pub const SECTION_COUNT: usize = 4;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GameState {
    #[default]
    Intro,
    Playing,
    Won,
}

/// Persisted state of one treasure hunt. JSON field names are camelCase,
/// matching the historical client storage layout.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct MapProgress {
    pub game_state: GameState,
    pub section_index: usize,
    pub section_progress: Vec<usize>,
    pub unlocked: Vec<bool>,
    /// Last submitted answer per question id, right or wrong.
    pub answers: HashMap<String, String>,
}

impl Default for MapProgress {
    fn default() -> Self {
        Self {
            game_state: GameState::Intro,
            section_index: 0,
            section_progress: vec![0; SECTION_COUNT],
            unlocked: vec![false; SECTION_COUNT],
            answers: HashMap::new(),
        }
    }
}

/// Outcome of one answer submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct {
        /// The answer finished its section.
        section_unlocked: bool,
    },
    Incorrect,
    /// Unknown section id, or the section has no question left to answer.
    Ignored,
}

pub struct MapEngine {
    sections: Vec<MapSectionData>,
    progress: MapProgress,
    store: Box<dyn ProgressStore>,
    key: String,
}

impl MapEngine {
    pub fn new(sections: Vec<MapSectionData>, store: Box<dyn ProgressStore>) -> Self {
        Self::with_key(sections, store, STORAGE_KEY)
    }

    pub fn with_key(
        sections: Vec<MapSectionData>,
        store: Box<dyn ProgressStore>,
        key: &str,
    ) -> Self {
        let mut progress: MapProgress = storage::load_state(store.as_ref(), key);
        progress.section_progress.resize(sections.len(), 0);
        progress.unlocked.resize(sections.len(), false);
        Self {
            sections,
            progress,
            store,
            key: key.to_string(),
        }
    }

    pub fn sections(&self) -> &[MapSectionData] {
        &self.sections
    }

    pub fn progress(&self) -> &MapProgress {
        &self.progress
    }

    pub fn game_state(&self) -> GameState {
        self.progress.game_state
    }

    /// Entering from the class page always lands on the intro screen, even
    /// with a saved hunt in progress. Progress itself is kept.
    pub fn force_intro(&mut self) {
        if self.progress.game_state != GameState::Intro {
            self.progress.game_state = GameState::Intro;
            self.persist();
        }
    }

    pub fn start(&mut self) {
        if self.progress.game_state == GameState::Intro {
            self.progress.game_state = GameState::Playing;
            self.persist();
        }
    }

    /// Focuses a section on the map. Out-of-range indices are ignored.
    pub fn select_section(&mut self, section_index: usize) {
        if section_index < self.sections.len() {
            self.progress.section_index = section_index;
            self.persist();
        }
    }

    /// Next unanswered question of a section, `None` once it is unlocked.
    pub fn current_question(&self, section_id: &str) -> Option<&MapQuestion> {
        let index = self.section_position(section_id)?;
        self.sections[index]
            .questions
            .get(self.progress.section_progress[index])
    }

    /// Submits an answer for the section's current question. The answer is
    /// trimmed and compared verbatim to the expected string, and recorded
    /// under the question id whether or not it was right. A correct answer
    /// advances the section; finishing a section unlocks it and moves the
    /// focus to the first still-locked section in A→B→C→D order. Unlocking
    /// the last section wins the game. Wrong answers may be retried
    /// indefinitely.
    pub fn answer_section(&mut self, section_id: &str, answer: &str) -> AnswerOutcome {
        let Some(index) = self.section_position(section_id) else {
            log::debug!("answer for unknown section {section_id:?} ignored");
            return AnswerOutcome::Ignored;
        };
        let section = &self.sections[index];
        let Some(question) = section.questions.get(self.progress.section_progress[index]) else {
            return AnswerOutcome::Ignored;
        };

        let submitted = answer.trim().to_string();
        let correct = submitted == question.correct_answer.trim();
        self.progress
            .answers
            .insert(question.id.clone(), submitted);

        if !correct {
            self.persist();
            return AnswerOutcome::Incorrect;
        }

        let total = section.questions.len();
        let advanced = (self.progress.section_progress[index] + 1).min(total);
        self.progress.section_progress[index] = advanced;

        let mut section_unlocked = false;
        if advanced >= total && !self.progress.unlocked[index] {
            self.progress.unlocked[index] = true;
            section_unlocked = true;
            if let Some(next_locked) = self.progress.unlocked.iter().position(|u| !u) {
                self.progress.section_index = next_locked;
            }
            if self.progress.game_state == GameState::Playing
                && self.progress.unlocked.iter().all(|&u| u)
            {
                self.progress.game_state = GameState::Won;
            }
        }

        self.persist();
        AnswerOutcome::Correct { section_unlocked }
    }

    /// Full destructive reset, back to the intro screen.
    pub fn play_again(&mut self) {
        self.progress = MapProgress::default();
        self.progress.section_progress.resize(self.sections.len(), 0);
        self.progress.unlocked.resize(self.sections.len(), false);
        self.persist();
    }

    /// `(unlocked sections, total sections)` for the score board.
    pub fn unlock_summary(&self) -> (usize, usize) {
        let unlocked = self.progress.unlocked.iter().filter(|&&u| u).count();
        (unlocked, self.sections.len())
    }

    /// `(correctly answered, total questions)` across all sections.
    pub fn question_summary(&self) -> (usize, usize) {
        let answered: usize = self.progress.section_progress.iter().sum();
        let total: usize = self.sections.iter().map(|s| s.questions.len()).sum();
        (answered, total)
    }

    fn section_position(&self, section_id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == section_id)
    }

    fn persist(&mut self) {
        storage::save_state(self.store.as_mut(), &self.key, &self.progress);
    }
}
