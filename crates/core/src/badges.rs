//! Badge award rules, evaluated by walking a fixed rule table.

use crate::model::{BadgeKind, UserProgress};

/// Counter a rule compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Threshold {
    LessonsCompleted(u32),
    CurrentStreak(u32),
    TotalQuizzes(u32),
}

impl Threshold {
    #[must_use]
    pub fn is_met(self, progress: &UserProgress) -> bool {
        match self {
            Threshold::LessonsCompleted(n) => progress.lessons_completed >= n,
            Threshold::CurrentStreak(n) => progress.current_streak >= n,
            Threshold::TotalQuizzes(n) => progress.total_quizzes >= n,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeRule {
    pub kind: BadgeKind,
    pub threshold: Threshold,
}

pub const BADGE_RULES: [BadgeRule; 4] = [
    BadgeRule {
        kind: BadgeKind::FirstLesson,
        threshold: Threshold::LessonsCompleted(1),
    },
    BadgeRule {
        kind: BadgeKind::FiveLessons,
        threshold: Threshold::LessonsCompleted(5),
    },
    BadgeRule {
        kind: BadgeKind::WeekStreak,
        threshold: Threshold::CurrentStreak(7),
    },
    BadgeRule {
        kind: BadgeKind::QuizMaster,
        threshold: Threshold::TotalQuizzes(10),
    },
];

/// Badges whose threshold is met by `progress` and that are not in `held`.
///
/// Returned in rule order.
#[must_use]
pub fn badges_to_award(progress: &UserProgress, held: &[BadgeKind]) -> Vec<BadgeKind> {
    BADGE_RULES
        .iter()
        .filter(|rule| rule.threshold.is_met(progress))
        .filter(|rule| !held.contains(&rule.kind))
        .map(|rule| rule.kind)
        .collect()
}
