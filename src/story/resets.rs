use super::*;

impl StoryEngine {
    /// Wipes the whole play-through and overwrites the stored state right
    /// away, not merely on the next auto-save.
    pub fn reset_progress(&mut self) {
        self.progress = StoryProgress::default();
        self.persist();
    }
}
