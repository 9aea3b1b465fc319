use super::*;

/// Result of advancing within an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionAdvance {
    /// Moved to the next question.
    Advanced,
    /// The current question was the last one; the index did not move and
    /// the caller should evaluate the activity (see `classify_performance`).
    ActivityComplete,
}

impl StoryEngine {
    /// Advances to the next question of an activity with `total_questions`
    /// questions. The boundary lives here so callers never have to compare
    /// indices themselves.
    pub fn advance_question(&mut self, total_questions: usize) -> QuestionAdvance {
        if self.progress.current_question_index + 1 >= total_questions {
            return QuestionAdvance::ActivityComplete;
        }
        self.progress.current_question_index += 1;
        self.persist();
        QuestionAdvance::Advanced
    }

    /// Jumps to a node picked on the level-selection screen and zeroes the
    /// per-node counters. Locked or out-of-range indices are rejected and
    /// leave the state untouched.
    pub fn select_node(&mut self, node_index: usize) -> bool {
        if node_index >= self.story.nodes.len() || !self.is_node_unlocked(node_index) {
            return false;
        }
        self.progress.current_node_index = node_index;
        self.reset_node_counters();
        self.persist();
        true
    }

    pub(crate) fn reset_node_counters(&mut self) {
        self.progress.current_question_index = 0;
        self.progress.correct_answers = 0;
        self.progress.incorrect_answers = 0;
    }
}
