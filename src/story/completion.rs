use super::*;

impl StoryEngine {
    /// Marks `node_id` as completed, moves to the next node and zeroes the
    /// per-node counters. The badge, when given, is earned at most once.
    pub fn complete_node(&mut self, node_id: &str, badge_id: Option<&str>) {
        if !self.progress.completed_nodes.iter().any(|id| id == node_id) {
            self.progress.completed_nodes.push(node_id.to_string());
        }
        self.progress.current_node_index += 1;
        self.reset_node_counters();
        if let Some(badge_id) = badge_id {
            self.push_badge(badge_id);
        }
        self.persist();
    }

    /// A node is unlocked when it is the first one or its predecessor has
    /// been completed.
    pub fn is_node_unlocked(&self, node_index: usize) -> bool {
        if node_index == 0 {
            return true;
        }
        let Some(previous) = self.story.nodes.get(node_index - 1) else {
            return false;
        };
        self.progress.completed_nodes.iter().any(|id| *id == previous.id)
    }

    pub fn is_node_completed(&self, node_index: usize) -> bool {
        self.story
            .nodes
            .get(node_index)
            .is_some_and(|node| self.progress.completed_nodes.iter().any(|id| *id == node.id))
    }

    /// True once the player has advanced past the last node.
    pub fn is_game_complete(&self) -> bool {
        self.progress.current_node_index >= self.story.nodes.len()
    }
}
