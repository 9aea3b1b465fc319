//! Embedded content banks and the activity reference resolver.
//!
//! Content never fails toward the caller: an unresolvable activity
//! reference degrades to a fixed single-question fallback and an unknown
//! badge id degrades to a generic badge.

use crate::model::{Activity, BadgeInfo, MapSectionData, Question, StoryData, default_xp_reward};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Curriculum {
    pub chapters: Vec<Chapter>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Chapter {
    pub title: String,
    pub lessons: Vec<Lesson>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Lesson {
    pub title: String,
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub timer_sec: Option<u32>,
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// Loads the embedded Trạng Quỳnh story pack.
pub fn load_story() -> StoryData {
    let raw = include_str!("data/story.trangquynh.yaml");
    serde_yaml::from_str(raw).expect("embedded story pack must parse")
}

/// Loads the embedded grade-0 curriculum (chapters → lessons → questions).
pub fn load_curriculum() -> Curriculum {
    let raw = include_str!("data/curriculum.grade0.yaml");
    serde_yaml::from_str(raw).expect("embedded curriculum must parse")
}

/// Loads the four Sông Hồng map sections.
pub fn load_map_sections() -> Vec<MapSectionData> {
    let raw = include_str!("data/songhong_sections.yaml");
    serde_yaml::from_str(raw).expect("embedded map sections must parse")
}

/// Resolves a dotted reference like `grade0.c1.l1.a1` (1-based) against the
/// curriculum. Missing chapters or lessons and malformed references all
/// yield the fallback activity instead of an error.
pub fn find_activity_by_ref(curriculum: &Curriculum, reference: &str) -> Activity {
    let parts: Vec<&str> = reference.split('.').collect();
    if parts.len() < 4 {
        log::debug!("activity ref {reference:?} has too few segments, using fallback");
        return fallback_activity(reference);
    }

    let chapter_index = parse_segment_index(parts[1], 'c');
    let lesson_index = parse_segment_index(parts[2], 'l');
    let (Some(chapter_index), Some(lesson_index)) = (chapter_index, lesson_index) else {
        log::debug!("activity ref {reference:?} has malformed indices, using fallback");
        return fallback_activity(reference);
    };

    let Some(lesson) = curriculum
        .chapters
        .get(chapter_index)
        .and_then(|chapter| chapter.lessons.get(lesson_index))
    else {
        log::debug!("activity ref {reference:?} points outside the curriculum, using fallback");
        return fallback_activity(reference);
    };

    Activity {
        id: reference.to_string(),
        title: lesson.title.clone(),
        duration: lesson.duration.or(Some(120)),
        questions: lesson.questions.clone(),
        xp_reward: default_xp_reward(),
        timer_sec: lesson.timer_sec,
    }
}

/// `"c3"` with prefix `'c'` → `Some(2)`. Indices in references are 1-based.
fn parse_segment_index(segment: &str, prefix: char) -> Option<usize> {
    segment
        .strip_prefix(prefix)?
        .parse::<usize>()
        .ok()?
        .checked_sub(1)
}

/// Deterministic single-question activity used whenever a reference does
/// not resolve, so missing content data never crashes the flow.
pub fn fallback_activity(reference: &str) -> Activity {
    Activity {
        id: reference.to_string(),
        title: "Đang cập nhật".to_string(),
        duration: None,
        questions: vec![Question {
            id: "fallback1".to_string(),
            kind: "multiple-choice".to_string(),
            question: "10 + 5 = ?".to_string(),
            options: vec![
                "15".to_string(),
                "20".to_string(),
                "25".to_string(),
                "30".to_string(),
            ],
            correct_answer: 0,
            explanation: "10 + 5 = 15".to_string(),
        }],
        xp_reward: default_xp_reward(),
        timer_sec: None,
    }
}

/// Badge metadata lookup with a generic default for unknown ids.
pub fn badge_info(badge_id: &str) -> BadgeInfo {
    match badge_id {
        "addition-master" => badge(
            "Huy hiệu Tính nhanh",
            "/assets/user/icon_badge.png",
            "Hoàn thành thử thách phép cộng",
        ),
        "subtraction-master" => badge(
            "Huy hiệu Tư duy",
            "/assets/user/icon_badge.png",
            "Hoàn thành thử thách phép trừ",
        ),
        "measurement-master" => badge(
            "Huy hiệu Đo lường",
            "/assets/user/icon_badge.png",
            "Hoàn thành thử thách đo lường",
        ),
        "time-master" => badge(
            "Huy hiệu Thời gian",
            "/assets/user/icon_clock.png",
            "Hoàn thành thử thách về thời gian",
        ),
        "money-master" => badge(
            "Huy hiệu Tiền tệ",
            "/assets/user/icon_money.png",
            "Hoàn thành thử thách về tiền",
        ),
        "grade2-master" => badge(
            "Huy hiệu Giỏi toán lớp 2",
            "/assets/user/icon_badge.png",
            "Hoàn thành tất cả thử thách lớp 2",
        ),
        _ => badge(
            "Huy hiệu",
            "/assets/user/icon_badge.png",
            "Hoàn thành thử thách",
        ),
    }
}

fn badge(name: &str, icon: &str, description: &str) -> BadgeInfo {
    BadgeInfo {
        name: name.to_string(),
        icon: icon.to_string(),
        description: description.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_banks_parse() {
        let story = load_story();
        assert_eq!(story.meta.story_pack_id, "grade0");
        assert!(!story.nodes.is_empty());
        assert!(!story.prologue.is_empty());

        let sections = load_map_sections();
        assert_eq!(sections.len(), 4);
        assert!(sections.iter().all(|s| s.questions.len() == 3));
    }

    #[test]
    fn every_story_node_resolves_to_a_real_activity() {
        let story = load_story();
        let curriculum = load_curriculum();
        for node in &story.nodes {
            let activity = find_activity_by_ref(&curriculum, &node.activity_ref);
            assert_ne!(activity.title, "Đang cập nhật", "ref {}", node.activity_ref);
            assert!(!activity.questions.is_empty());
        }
    }

    #[test]
    fn resolver_converts_one_based_indices() {
        let curriculum = load_curriculum();
        let activity = find_activity_by_ref(&curriculum, "grade0.c2.l1.a1");
        assert_eq!(activity.id, "grade0.c2.l1.a1");
        assert_eq!(activity.title, curriculum.chapters[1].lessons[0].title);
        assert_eq!(activity.xp_reward, 10);
    }

    #[test]
    fn malformed_references_fall_back() {
        let curriculum = load_curriculum();
        for reference in [
            "grade0.c1.l1",      // too few segments
            "grade0.x1.l1.a1",   // bad chapter prefix
            "grade0.c0.l1.a1",   // 1-based index cannot be zero
            "grade0.c9.l1.a1",   // missing chapter
            "grade0.c1.l9.a1",   // missing lesson
            "grade0.cX.l1.a1",   // non-numeric
        ] {
            let activity = find_activity_by_ref(&curriculum, reference);
            assert_eq!(activity.id, reference);
            assert_eq!(activity.questions.len(), 1);
            assert_eq!(activity.questions[0].id, "fallback1");
            assert!(activity.questions[0].is_correct_option(0));
        }
    }

    #[test]
    fn unknown_badge_gets_default_info() {
        assert_eq!(badge_info("time-master").icon, "/assets/user/icon_clock.png");
        assert_eq!(badge_info("no-such-badge").name, "Huy hiệu");
    }
}
