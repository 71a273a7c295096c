//! Pure streak derivation over calendar dates.
//!
//! Nothing here touches storage. Callers read a `UserProgress`, ask these
//! functions what the new record should be, and persist the result themselves.

use chrono::{Duration, NaiveDate};

use crate::model::UserProgress;

/// Whether a stored streak is still continuable as of `today`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakCheck {
    /// Last activity was today or yesterday, or there is no activity yet.
    Alive,
    /// Last activity is older than yesterday; the current streak must read as 0.
    Lapsed,
}

#[must_use]
pub fn yesterday(today: NaiveDate) -> NaiveDate {
    today - Duration::days(1)
}

/// Classify the stored streak against `today`.
#[must_use]
pub fn check_streak(progress: &UserProgress, today: NaiveDate) -> StreakCheck {
    match progress.last_activity {
        Some(last) if last != today && last != yesterday(today) => StreakCheck::Lapsed,
        _ => StreakCheck::Alive,
    }
}

/// Copy of `progress` with the current streak zeroed. Longest streak is kept.
#[must_use]
pub fn expire_streak(progress: &UserProgress) -> UserProgress {
    UserProgress {
        current_streak: 0,
        ..progress.clone()
    }
}

/// Record learning activity on `today`.
///
/// Same-day activity leaves the streak as is, activity the day after the last
/// one extends it, anything else starts a fresh streak of 1. The longest
/// streak never decreases and `last_activity` always becomes `today`.
#[must_use]
pub fn record_activity(progress: &UserProgress, today: NaiveDate) -> UserProgress {
    let current_streak = match progress.last_activity {
        Some(last) if last == today => progress.current_streak,
        Some(last) if last == yesterday(today) => progress.current_streak.saturating_add(1),
        _ => 1,
    };

    UserProgress {
        current_streak,
        longest_streak: progress.longest_streak.max(current_streak),
        last_activity: Some(today),
        ..progress.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_today;

    fn progress(current: u32, longest: u32, last: Option<NaiveDate>) -> UserProgress {
        UserProgress {
            current_streak: current,
            longest_streak: longest,
            last_activity: last,
            ..UserProgress::default()
        }
    }

    #[test]
    fn activity_after_yesterday_extends_streak() {
        let today = fixed_today();
        let updated = record_activity(&progress(3, 3, Some(yesterday(today))), today);
        assert_eq!(updated.current_streak, 4);
        assert_eq!(updated.longest_streak, 4);
        assert_eq!(updated.last_activity, Some(today));
    }

    #[test]
    fn first_activity_starts_at_one() {
        let today = fixed_today();
        let updated = record_activity(&UserProgress::default(), today);
        assert_eq!(updated.current_streak, 1);
        assert_eq!(updated.longest_streak, 1);
    }

    #[test]
    fn gap_resets_to_one_and_keeps_longest() {
        let today = fixed_today();
        let two_days_ago = today - Duration::days(2);
        let updated = record_activity(&progress(5, 8, Some(two_days_ago)), today);
        assert_eq!(updated.current_streak, 1);
        assert_eq!(updated.longest_streak, 8);
    }

    #[test]
    fn same_day_activity_is_idempotent() {
        let today = fixed_today();
        let once = record_activity(&progress(2, 2, Some(yesterday(today))), today);
        let twice = record_activity(&once, today);
        assert_eq!(once, twice);
        assert_eq!(twice.current_streak, 3);
    }

    #[test]
    fn future_last_activity_starts_fresh() {
        let today = fixed_today();
        let tomorrow = today + Duration::days(1);
        let updated = record_activity(&progress(6, 6, Some(tomorrow)), today);
        assert_eq!(updated.current_streak, 1);
        assert_eq!(updated.longest_streak, 6);
    }

    #[test]
    fn longest_streak_never_drops_below_current() {
        let today = fixed_today();
        for days_back in 0..5 {
            for current in 0..10 {
                for longest in 0..10 {
                    let before =
                        progress(current, longest, Some(today - Duration::days(days_back)));
                    let after = record_activity(&before, today);
                    assert!(after.longest_streak >= after.current_streak);
                    assert!(after.longest_streak >= before.longest_streak);
                }
            }
        }
    }

    #[test]
    fn check_streak_classifies_dates() {
        let today = fixed_today();
        assert_eq!(check_streak(&progress(1, 1, None), today), StreakCheck::Alive);
        assert_eq!(check_streak(&progress(1, 1, Some(today)), today), StreakCheck::Alive);
        assert_eq!(
            check_streak(&progress(1, 1, Some(yesterday(today))), today),
            StreakCheck::Alive
        );
        assert_eq!(
            check_streak(&progress(1, 1, Some(today - Duration::days(2))), today),
            StreakCheck::Lapsed
        );
    }

    #[test]
    fn expire_keeps_everything_but_current() {
        let before = UserProgress {
            current_streak: 5,
            longest_streak: 9,
            lessons_completed: 4,
            total_quizzes: 4,
            total_quiz_score: 20,
            last_activity: Some(fixed_today() - Duration::days(3)),
        };
        let after = expire_streak(&before);
        assert_eq!(after.current_streak, 0);
        assert_eq!(after.longest_streak, 9);
        assert_eq!(after.last_activity, before.last_activity);
    }
}
