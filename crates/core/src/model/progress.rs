use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::model::LessonId;

//
// ─── USER PROGRESS ─────────────────────────────────────────────────────────────
//

/// Authoritative per-user learning counters.
///
/// Created lazily with all counters at zero the first time a user is fetched.
/// `longest_streak >= current_streak` holds after every update made through
/// the streak functions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProgress {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub lessons_completed: u32,
    pub total_quizzes: u32,
    pub total_quiz_score: u32,
    /// Calendar date (UTC) of the most recent recorded activity.
    pub last_activity: Option<NaiveDate>,
}

impl UserProgress {
    /// Mean quiz score per attempt, or `None` before the first quiz.
    #[must_use]
    pub fn average_quiz_score(&self) -> Option<f64> {
        if self.total_quizzes == 0 {
            return None;
        }
        Some(f64::from(self.total_quiz_score) / f64::from(self.total_quizzes))
    }
}

/// Partial update of a `UserProgress` record. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressUpdate {
    pub current_streak: Option<u32>,
    pub longest_streak: Option<u32>,
    pub lessons_completed: Option<u32>,
    pub total_quizzes: Option<u32>,
    pub total_quiz_score: Option<u32>,
    pub last_activity: Option<Option<NaiveDate>>,
}

impl ProgressUpdate {
    /// Update that only zeroes the current streak.
    #[must_use]
    pub fn reset_streak() -> Self {
        Self {
            current_streak: Some(0),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply the present fields onto `progress`.
    pub fn apply_to(&self, progress: &mut UserProgress) {
        if let Some(v) = self.current_streak {
            progress.current_streak = v;
        }
        if let Some(v) = self.longest_streak {
            progress.longest_streak = v;
        }
        if let Some(v) = self.lessons_completed {
            progress.lessons_completed = v;
        }
        if let Some(v) = self.total_quizzes {
            progress.total_quizzes = v;
        }
        if let Some(v) = self.total_quiz_score {
            progress.total_quiz_score = v;
        }
        if let Some(v) = self.last_activity {
            progress.last_activity = v;
        }
    }
}

//
// ─── COMPLETED LESSON ─────────────────────────────────────────────────────────
//

/// One recorded lesson completion. Retakes append further rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedLesson {
    pub lesson_id: LessonId,
    pub quiz_score: Option<u32>,
    pub created_at: DateTime<Utc>,
}

impl CompletedLesson {
    #[must_use]
    pub fn new(lesson_id: LessonId, quiz_score: Option<u32>, created_at: DateTime<Utc>) -> Self {
        Self {
            lesson_id,
            quiz_score,
            created_at,
        }
    }
}
