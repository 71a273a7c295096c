use chrono::{DateTime, Utc};
use eagle_core::model::{BadgeKind, UserBadge, UserProgress};

/// One catalog badge with whether the learner holds it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeStatus {
    pub kind: BadgeKind,
    pub name: &'static str,
    pub description: &'static str,
    pub earned_at: Option<DateTime<Utc>>,
}

impl BadgeStatus {
    #[must_use]
    pub fn earned(&self) -> bool {
        self.earned_at.is_some()
    }
}

/// Everything the progress tab shows.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressDashboard {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub lessons_completed: usize,
    pub total_lessons: usize,
    /// Whole-number completion percentage, rounded half up.
    pub completion_percent: u32,
    /// Mean correct answers per graded quiz.
    pub average_quiz_score: Option<f64>,
    pub total_quizzes: u32,
    pub badges: Vec<BadgeStatus>,
}

impl ProgressDashboard {
    #[must_use]
    pub fn build(
        progress: Option<&UserProgress>,
        held: &[UserBadge],
        total_lessons: usize,
        lessons_completed: usize,
    ) -> Self {
        let fallback = UserProgress::default();
        let progress = progress.unwrap_or(&fallback);
        let completion_percent = if total_lessons == 0 {
            0
        } else {
            let pct = (200 * lessons_completed.min(total_lessons) + total_lessons)
                / (2 * total_lessons);
            u32::try_from(pct).unwrap_or(100)
        };

        let badges = BadgeKind::ALL
            .iter()
            .map(|kind| BadgeStatus {
                kind: *kind,
                name: kind.display_name(),
                description: kind.description(),
                earned_at: held.iter().find(|b| b.kind == *kind).map(|b| b.earned_at),
            })
            .collect();

        Self {
            current_streak: progress.current_streak,
            longest_streak: progress.longest_streak,
            lessons_completed,
            total_lessons,
            completion_percent,
            average_quiz_score: progress.average_quiz_score(),
            total_quizzes: progress.total_quizzes,
            badges,
        }
    }

    #[must_use]
    pub fn earned_count(&self) -> usize {
        self.badges.iter().filter(|b| b.earned()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eagle_core::time::fixed_now;

    #[test]
    fn empty_progress_shows_full_catalog_unearned() {
        let dash = ProgressDashboard::build(None, &[], 124, 0);
        assert_eq!(dash.badges.len(), 4);
        assert_eq!(dash.earned_count(), 0);
        assert_eq!(dash.completion_percent, 0);
        assert_eq!(dash.average_quiz_score, None);
        assert_eq!(dash.badges[0].name, "First Steps");
    }

    #[test]
    fn reflects_progress_and_held_badges() {
        let progress = UserProgress {
            current_streak: 3,
            longest_streak: 6,
            lessons_completed: 5,
            total_quizzes: 4,
            total_quiz_score: 18,
            last_activity: None,
        };
        let held = [UserBadge::new(BadgeKind::FiveLessons, fixed_now())];
        let dash = ProgressDashboard::build(Some(&progress), &held, 8, 5);
        assert_eq!(dash.current_streak, 3);
        assert_eq!(dash.longest_streak, 6);
        assert_eq!(dash.completion_percent, 63);
        assert_eq!(dash.average_quiz_score, Some(4.5));
        assert_eq!(dash.earned_count(), 1);
        assert!(dash.badges[1].earned());
        assert_eq!(dash.badges[1].earned_at, Some(fixed_now()));
    }
}
