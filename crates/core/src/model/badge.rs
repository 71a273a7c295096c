use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while decoding badge identifiers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BadgeError {
    #[error("unknown badge type: {0}")]
    UnknownKind(String),
}

/// Achievement markers a learner can earn once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeKind {
    FirstLesson,
    FiveLessons,
    WeekStreak,
    QuizMaster,
}

impl BadgeKind {
    /// Every badge in dashboard display order.
    pub const ALL: [BadgeKind; 4] = [
        BadgeKind::FirstLesson,
        BadgeKind::FiveLessons,
        BadgeKind::WeekStreak,
        BadgeKind::QuizMaster,
    ];

    /// Stable identifier stored by the backend.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            BadgeKind::FirstLesson => "first_lesson",
            BadgeKind::FiveLessons => "five_lessons",
            BadgeKind::WeekStreak => "week_streak",
            BadgeKind::QuizMaster => "quiz_master",
        }
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            BadgeKind::FirstLesson => "First Steps",
            BadgeKind::FiveLessons => "Dedicated Learner",
            BadgeKind::WeekStreak => "Week Warrior",
            BadgeKind::QuizMaster => "Quiz Master",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            BadgeKind::FirstLesson => "Complete your first lesson",
            BadgeKind::FiveLessons => "Complete 5 lessons",
            BadgeKind::WeekStreak => "Maintain a 7-day streak",
            BadgeKind::QuizMaster => "Complete 10 quizzes",
        }
    }
}

impl fmt::Display for BadgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BadgeKind {
    type Err = BadgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first_lesson" => Ok(BadgeKind::FirstLesson),
            "five_lessons" => Ok(BadgeKind::FiveLessons),
            "week_streak" => Ok(BadgeKind::WeekStreak),
            "quiz_master" => Ok(BadgeKind::QuizMaster),
            other => Err(BadgeError::UnknownKind(other.to_string())),
        }
    }
}

/// A badge held by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserBadge {
    pub kind: BadgeKind,
    pub earned_at: DateTime<Utc>,
}

impl UserBadge {
    #[must_use]
    pub fn new(kind: BadgeKind, earned_at: DateTime<Utc>) -> Self {
        Self { kind, earned_at }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_round_trip_through_from_str() {
        for kind in BadgeKind::ALL {
            assert_eq!(kind.as_str().parse::<BadgeKind>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_identifier_is_rejected() {
        let err = "month_streak".parse::<BadgeKind>().unwrap_err();
        assert_eq!(err, BadgeError::UnknownKind("month_streak".into()));
    }

    #[test]
    fn catalog_copy_is_present_for_every_badge() {
        for kind in BadgeKind::ALL {
            assert!(!kind.display_name().is_empty());
            assert!(!kind.description().is_empty());
        }
        assert_eq!(BadgeKind::WeekStreak.to_string(), "week_streak");
    }
}
