use super::*;

/// End-of-activity classification derived from the correct-answer ratio.
/// `Retry` gates progression: the node is not completed and no badge is
/// awarded, the activity restarts from its first question.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Performance {
    Excellent,
    Good,
    Retry,
}

/// ≥ 90% → `Excellent`, ≥ 70% → `Good`, below → `Retry`. An empty
/// activity counts as a single unanswered question.
pub fn classify_performance(correct: u32, total_questions: usize) -> Performance {
    let correct_rate = correct as f64 / total_questions.max(1) as f64 * 100.0;
    if correct_rate >= 90.0 {
        Performance::Excellent
    } else if correct_rate >= 70.0 {
        Performance::Good
    } else {
        Performance::Retry
    }
}

impl StoryEngine {
    /// Counts the answer and grants `xp_reward` when it was correct.
    /// The reward comes from the activity; see [`DEFAULT_XP_REWARD`].
    pub fn record_answer(&mut self, is_correct: bool, xp_reward: u32) {
        if is_correct {
            self.progress.correct_answers += 1;
            self.progress.total_xp += xp_reward;
        } else {
            self.progress.incorrect_answers += 1;
        }
        self.persist();
    }

    pub fn award_xp(&mut self, amount: u32) {
        self.progress.total_xp += amount;
        self.persist();
    }

    /// No-op when the badge was already earned.
    pub fn award_badge(&mut self, badge_id: &str) {
        if self.push_badge(badge_id) {
            self.persist();
        }
    }

    pub(crate) fn push_badge(&mut self, badge_id: &str) -> bool {
        if self.progress.earned_badges.iter().any(|b| b == badge_id) {
            return false;
        }
        self.progress.earned_badges.push(badge_id.to_string());
        true
    }
}
