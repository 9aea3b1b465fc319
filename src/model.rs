use serde::{Deserialize, Serialize};

/// One multiple-choice question inside a story activity.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Question {
    pub id: String,
    #[serde(rename = "type", default = "default_question_kind")]
    pub kind: String,
    pub question: String,
    pub options: Vec<String>,
    /// 0-based index into `options`.
    pub correct_answer: usize,
    #[serde(default)]
    pub explanation: String,
}

fn default_question_kind() -> String {
    "multiple-choice".to_string()
}

impl Question {
    pub fn is_correct_option(&self, option_index: usize) -> bool {
        option_index == self.correct_answer
    }
}

/// An ordered question set resolved from an activity reference.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Activity {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub duration: Option<u32>,
    pub questions: Vec<Question>,
    #[serde(default = "default_xp_reward")]
    pub xp_reward: u32,
    #[serde(default)]
    pub timer_sec: Option<u32>,
}

pub(crate) fn default_xp_reward() -> u32 {
    10
}

/// One line of a cutscene or prologue.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CutsceneFrame {
    pub speaker: String,
    pub text: String,
}

/// One step of the story progression: a cutscene followed by an activity.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StoryNode {
    pub id: String,
    pub order: u32,
    pub title: String,
    #[serde(default)]
    pub math_topic: String,
    #[serde(default)]
    pub objective: String,
    #[serde(default)]
    pub cutscene: Vec<CutsceneFrame>,
    /// Dotted reference like `grade0.c1.l1.a1`, resolved by the content module.
    pub activity_ref: String,
    #[serde(default)]
    pub badge_on_complete: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StoryMeta {
    pub story_pack_id: String,
    pub title: String,
    pub locale: String,
    #[serde(default)]
    pub description: String,
}

/// A full story pack: prologue plus ordered nodes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StoryData {
    pub meta: StoryMeta,
    #[serde(default)]
    pub prologue: Vec<CutsceneFrame>,
    pub nodes: Vec<StoryNode>,
}

/// Question kind for the map game: free numeric input or a choice list.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MapQuestionKind {
    Numeric,
    Choice,
}

/// One question on the treasure map. The expected answer is a string
/// compared verbatim after trimming, so "7" and "07" stay distinct.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MapQuestion {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: MapQuestionKind,
    pub prompt: String,
    #[serde(default)]
    pub choices: Vec<String>,
    pub correct_answer: String,
    #[serde(default)]
    pub hint: Option<String>,
}

/// One of the four independent question tracks of the map game.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MapSectionData {
    pub id: String,
    pub label: String,
    pub questions: Vec<MapQuestion>,
}

/// Display metadata for an earned badge.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BadgeInfo {
    pub name: String,
    pub icon: String,
    pub description: String,
}
