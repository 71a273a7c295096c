use std::collections::HashSet;
use std::sync::Arc;

use eagle_core::badges::badges_to_award;
use eagle_core::model::{
    BadgeKind, CompletedLesson, LessonId, ProgressUpdate, UserBadge, UserId, UserProgress,
};
use eagle_core::streak::{StreakCheck, check_streak, record_activity};
use storage::repository::{
    BadgeRepository, CompletedLessonRepository, ProgressRepository, Storage, StorageError,
    held_kinds,
};

use super::dashboard::ProgressDashboard;
use crate::Clock;
use crate::error::ProgressError;

/// Last successfully fetched or written records for one learner.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgressState {
    pub progress: Option<UserProgress>,
    pub badges: Vec<UserBadge>,
    pub completed_lessons: Vec<CompletedLesson>,
}

impl ProgressState {
    /// Distinct lesson ids with at least one completion row.
    #[must_use]
    pub fn completed_lesson_ids(&self) -> HashSet<LessonId> {
        self.completed_lessons.iter().map(|c| c.lesson_id).collect()
    }

    #[must_use]
    pub fn has_badge(&self, kind: BadgeKind) -> bool {
        self.badges.iter().any(|b| b.kind == kind)
    }
}

/// What a successful `complete_lesson` changed.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionOutcome {
    pub progress: UserProgress,
    /// `false` when the lesson had been completed before.
    pub first_completion: bool,
    pub awarded: Vec<BadgeKind>,
}

/// Keeps progress, streak, completions and badges in step with the record store.
///
/// Each step is a separate call against the store. When one fails the error is
/// returned, earlier steps stay applied and `state` reflects the last success.
pub struct ProgressReconciler {
    clock: Clock,
    user: UserId,
    progress_repo: Arc<dyn ProgressRepository>,
    badge_repo: Arc<dyn BadgeRepository>,
    completed_repo: Arc<dyn CompletedLessonRepository>,
    state: ProgressState,
}

impl ProgressReconciler {
    #[must_use]
    pub fn new(
        clock: Clock,
        user: UserId,
        progress_repo: Arc<dyn ProgressRepository>,
        badge_repo: Arc<dyn BadgeRepository>,
        completed_repo: Arc<dyn CompletedLessonRepository>,
    ) -> Self {
        Self {
            clock,
            user,
            progress_repo,
            badge_repo,
            completed_repo,
            state: ProgressState::default(),
        }
    }

    #[must_use]
    pub fn from_storage(clock: Clock, user: UserId, storage: &Storage) -> Self {
        Self::new(
            clock,
            user,
            Arc::clone(&storage.progress),
            Arc::clone(&storage.badges),
            Arc::clone(&storage.completed_lessons),
        )
    }

    #[must_use]
    pub fn user(&self) -> UserId {
        self.user
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Replace the clock, e.g. to step a fixed clock across days in tests.
    pub fn set_clock(&mut self, clock: Clock) {
        self.clock = clock;
    }

    #[must_use]
    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    #[must_use]
    pub fn progress(&self) -> Option<&UserProgress> {
        self.state.progress.as_ref()
    }

    #[must_use]
    pub fn badges(&self) -> &[UserBadge] {
        &self.state.badges
    }

    #[must_use]
    pub fn completed_lessons(&self) -> &[CompletedLesson] {
        &self.state.completed_lessons
    }

    /// Session bootstrap: progress (created if missing), lapsed-streak
    /// expiry, badges and completed lessons.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError` from the first failing step.
    pub async fn load(&mut self) -> Result<&ProgressState, ProgressError> {
        self.fetch_progress().await?;
        self.expire_lapsed_streak().await?;
        self.fetch_badges().await?;
        self.fetch_completed_lessons().await?;
        Ok(&self.state)
    }

    /// Read the progress record, creating the default one on first access.
    ///
    /// Never changes stored values of an existing record.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Storage` if the read or the create fails.
    pub async fn fetch_progress(&mut self) -> Result<UserProgress, ProgressError> {
        let progress = match self.progress_repo.get_progress(self.user).await {
            Ok(progress) => progress,
            Err(StorageError::NotFound) => {
                tracing::info!(user = %self.user, "creating progress record");
                match self.progress_repo.create_progress(self.user).await {
                    Ok(created) => created,
                    // Created concurrently by another client; read theirs.
                    Err(StorageError::Conflict) => self.progress_repo.get_progress(self.user).await?,
                    Err(e) => {
                        tracing::error!(user = %self.user, error = %e, "create progress failed");
                        return Err(e.into());
                    }
                }
            }
            Err(e) => {
                tracing::error!(user = %self.user, error = %e, "fetch progress failed");
                return Err(e.into());
            }
        };
        self.state.progress = Some(progress.clone());
        Ok(progress)
    }

    /// Persist `current_streak = 0` when the last activity is older than yesterday.
    ///
    /// Returns whether a reset was written.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Storage` if the read or the reset fails.
    pub async fn expire_lapsed_streak(&mut self) -> Result<bool, ProgressError> {
        let progress = self.current_or_fetch().await?;
        let lapsed = check_streak(&progress, self.clock.today()) == StreakCheck::Lapsed;
        if !lapsed || progress.current_streak == 0 {
            return Ok(false);
        }

        let stored = self
            .progress_repo
            .update_progress(self.user, &ProgressUpdate::reset_streak())
            .await
            .inspect_err(|e| tracing::error!(user = %self.user, error = %e, "streak reset failed"))?;
        tracing::info!(
            user = %self.user,
            last_activity = ?progress.last_activity,
            "streak lapsed; reset to 0"
        );
        self.state.progress = Some(stored);
        Ok(true)
    }

    /// # Errors
    ///
    /// Returns `ProgressError::Storage` if the read fails.
    pub async fn fetch_badges(&mut self) -> Result<&[UserBadge], ProgressError> {
        let badges = self
            .badge_repo
            .list_badges(self.user)
            .await
            .inspect_err(|e| tracing::error!(user = %self.user, error = %e, "fetch badges failed"))?;
        self.state.badges = badges;
        Ok(&self.state.badges)
    }

    /// # Errors
    ///
    /// Returns `ProgressError::Storage` if the read fails.
    pub async fn fetch_completed_lessons(&mut self) -> Result<&[CompletedLesson], ProgressError> {
        let rows = self
            .completed_repo
            .list_completed(self.user)
            .await
            .inspect_err(|e| {
                tracing::error!(user = %self.user, error = %e, "fetch completed lessons failed");
            })?;
        self.state.completed_lessons = rows;
        Ok(&self.state.completed_lessons)
    }

    /// Record activity today on top of `base` and persist the streak fields.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Storage` if the write fails.
    pub async fn update_streak(&mut self, base: &UserProgress) -> Result<UserProgress, ProgressError> {
        let next = record_activity(base, self.clock.today());
        let update = ProgressUpdate {
            current_streak: Some(next.current_streak),
            longest_streak: Some(next.longest_streak),
            last_activity: Some(next.last_activity),
            ..ProgressUpdate::default()
        };
        let stored = self
            .progress_repo
            .update_progress(self.user, &update)
            .await
            .inspect_err(|e| tracing::error!(user = %self.user, error = %e, "streak update failed"))?;
        tracing::debug!(
            user = %self.user,
            current = stored.current_streak,
            longest = stored.longest_streak,
            "streak updated"
        );
        self.state.progress = Some(stored.clone());
        Ok(stored)
    }

    /// Record a completed lesson, bump counters and streak, then award badges.
    ///
    /// Badge rules are checked against the counter snapshot taken before the
    /// streak write, so a streak badge lands on the completion after the one
    /// that reached the threshold.
    ///
    /// A failed completion insert aborts before any counter changes. Badge
    /// inserts fail independently and are only logged.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Storage` from the first failing required step.
    pub async fn complete_lesson(
        &mut self,
        lesson_id: LessonId,
        quiz_score: Option<u32>,
    ) -> Result<CompletionOutcome, ProgressError> {
        if self.state.progress.is_none() {
            self.load().await?;
        }
        let base = self.current_or_fetch().await?;
        let first_completion = !self.state.completed_lesson_ids().contains(&lesson_id);

        let row = CompletedLesson::new(lesson_id, quiz_score, self.clock.now());
        self.completed_repo
            .insert_completed(self.user, &row)
            .await
            .inspect_err(|e| {
                tracing::error!(user = %self.user, lesson = %lesson_id, error = %e, "completion insert failed");
            })?;

        let mut counters = ProgressUpdate::default();
        if first_completion {
            counters.lessons_completed = Some(base.lessons_completed.saturating_add(1));
        }
        if let Some(score) = quiz_score {
            counters.total_quizzes = Some(base.total_quizzes.saturating_add(1));
            counters.total_quiz_score = Some(base.total_quiz_score.saturating_add(score));
        }
        let updated = if counters.is_empty() {
            base
        } else {
            let stored = self
                .progress_repo
                .update_progress(self.user, &counters)
                .await
                .inspect_err(|e| {
                    tracing::error!(user = %self.user, error = %e, "counter update failed");
                })?;
            self.state.progress = Some(stored.clone());
            stored
        };

        let progress = self.update_streak(&updated).await?;
        self.fetch_completed_lessons().await?;
        // Badges see the bumped counters but the streak from before today.
        let awarded = self.award_badges(&updated).await?;

        tracing::info!(
            user = %self.user,
            lesson = %lesson_id,
            score = ?quiz_score,
            first_completion,
            awarded = awarded.len(),
            "lesson completed"
        );

        Ok(CompletionOutcome {
            progress,
            first_completion,
            awarded,
        })
    }

    /// Insert every qualifying badge not yet held. Returns the kinds stored.
    async fn award_badges(&mut self, progress: &UserProgress) -> Result<Vec<BadgeKind>, ProgressError> {
        let due = badges_to_award(progress, &held_kinds(&self.state.badges));
        if due.is_empty() {
            return Ok(Vec::new());
        }

        let earned_at = self.clock.now();
        let mut awarded = Vec::with_capacity(due.len());
        for kind in due {
            match self
                .badge_repo
                .insert_badge(self.user, &UserBadge::new(kind, earned_at))
                .await
            {
                Ok(()) => {
                    tracing::info!(user = %self.user, badge = %kind, "badge awarded");
                    awarded.push(kind);
                }
                Err(StorageError::Conflict) => {
                    tracing::warn!(user = %self.user, badge = %kind, "badge already held");
                }
                Err(e) => {
                    tracing::error!(user = %self.user, badge = %kind, error = %e, "badge insert failed");
                }
            }
        }

        if !awarded.is_empty() {
            self.fetch_badges().await?;
        }
        Ok(awarded)
    }

    /// Dashboard view over the current state.
    #[must_use]
    pub fn dashboard(&self, total_lessons: usize, completed_lessons: usize) -> ProgressDashboard {
        ProgressDashboard::build(
            self.state.progress.as_ref(),
            &self.state.badges,
            total_lessons,
            completed_lessons,
        )
    }

    async fn current_or_fetch(&mut self) -> Result<UserProgress, ProgressError> {
        match &self.state.progress {
            Some(progress) => Ok(progress.clone()),
            None => self.fetch_progress().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use eagle_core::time::{fixed_clock, fixed_now, fixed_today};
    use storage::repository::InMemoryRepository;

    fn reconciler(repo: &InMemoryRepository, user: UserId) -> ProgressReconciler {
        ProgressReconciler::new(
            fixed_clock(),
            user,
            Arc::new(repo.clone()),
            Arc::new(repo.clone()),
            Arc::new(repo.clone()),
        )
    }

    #[tokio::test]
    async fn first_fetch_creates_default_record() {
        let repo = InMemoryRepository::new();
        let user = UserId::random();
        let mut rec = reconciler(&repo, user);

        let progress = rec.fetch_progress().await.unwrap();
        assert_eq!(progress, UserProgress::default());
        assert_eq!(repo.get_progress(user).await.unwrap(), progress);
    }

    #[tokio::test]
    async fn fetch_alone_never_resets_streak() {
        let repo = InMemoryRepository::new();
        let user = UserId::random();
        repo.create_progress(user).await.unwrap();
        let stale = ProgressUpdate {
            current_streak: Some(4),
            longest_streak: Some(4),
            last_activity: Some(Some(fixed_today() - Duration::days(5))),
            ..ProgressUpdate::default()
        };
        repo.update_progress(user, &stale).await.unwrap();

        let mut rec = reconciler(&repo, user);
        assert_eq!(rec.fetch_progress().await.unwrap().current_streak, 4);

        assert!(rec.expire_lapsed_streak().await.unwrap());
        assert_eq!(repo.get_progress(user).await.unwrap().current_streak, 0);
        assert_eq!(repo.get_progress(user).await.unwrap().longest_streak, 4);
        // Already zero: nothing more to write.
        assert!(!rec.expire_lapsed_streak().await.unwrap());
    }

    #[tokio::test]
    async fn load_keeps_streak_when_active_yesterday() {
        let repo = InMemoryRepository::new();
        let user = UserId::random();
        repo.create_progress(user).await.unwrap();
        let update = ProgressUpdate {
            current_streak: Some(2),
            longest_streak: Some(2),
            last_activity: Some(Some(fixed_today() - Duration::days(1))),
            ..ProgressUpdate::default()
        };
        repo.update_progress(user, &update).await.unwrap();

        let mut rec = reconciler(&repo, user);
        let state = rec.load().await.unwrap();
        assert_eq!(state.progress.as_ref().unwrap().current_streak, 2);
    }

    #[tokio::test]
    async fn completing_a_lesson_updates_everything() {
        let repo = InMemoryRepository::new();
        let user = UserId::random();
        let mut rec = reconciler(&repo, user);
        rec.load().await.unwrap();

        let outcome = rec.complete_lesson(LessonId::new(1), Some(5)).await.unwrap();
        assert!(outcome.first_completion);
        assert_eq!(outcome.awarded, vec![BadgeKind::FirstLesson]);
        assert_eq!(outcome.progress.lessons_completed, 1);
        assert_eq!(outcome.progress.total_quizzes, 1);
        assert_eq!(outcome.progress.total_quiz_score, 5);
        assert_eq!(outcome.progress.current_streak, 1);
        assert_eq!(outcome.progress.last_activity, Some(fixed_today()));
        assert_eq!(rec.completed_lessons().len(), 1);
        assert!(rec.state().has_badge(BadgeKind::FirstLesson));
    }

    #[tokio::test]
    async fn retake_counts_quiz_but_not_lesson() {
        let repo = InMemoryRepository::new();
        let user = UserId::random();
        let mut rec = reconciler(&repo, user);
        rec.load().await.unwrap();

        rec.complete_lesson(LessonId::new(3), Some(5)).await.unwrap();
        let again = rec.complete_lesson(LessonId::new(3), Some(4)).await.unwrap();
        assert!(!again.first_completion);
        assert!(again.awarded.is_empty());
        assert_eq!(again.progress.lessons_completed, 1);
        assert_eq!(again.progress.total_quizzes, 2);
        assert_eq!(again.progress.total_quiz_score, 9);
        assert_eq!(rec.completed_lessons().len(), 2);
        assert_eq!(rec.state().completed_lesson_ids().len(), 1);
    }

    #[tokio::test]
    async fn week_streak_lands_the_day_after_the_seventh() {
        let repo = InMemoryRepository::new();
        let user = UserId::random();
        let mut rec = reconciler(&repo, user);
        rec.load().await.unwrap();

        let mut clock = fixed_clock();
        for day in 1..=7 {
            rec.set_clock(clock);
            rec.complete_lesson(LessonId::new(day), None).await.unwrap();
            clock.advance_days(1);
        }
        let progress = rec.progress().unwrap();
        assert_eq!(progress.current_streak, 7);
        assert_eq!(progress.longest_streak, 7);
        assert!(!rec.state().has_badge(BadgeKind::WeekStreak));
        assert!(rec.state().has_badge(BadgeKind::FiveLessons));

        rec.set_clock(clock);
        let eighth = rec.complete_lesson(LessonId::new(8), None).await.unwrap();
        assert_eq!(eighth.progress.current_streak, 8);
        assert_eq!(eighth.awarded, vec![BadgeKind::WeekStreak]);
        assert!(!rec.state().has_badge(BadgeKind::QuizMaster));
    }

    //
    // ─── FAILING STORES ────────────────────────────────────────────────────────
    //

    struct BrokenCompletions;

    #[async_trait::async_trait]
    impl CompletedLessonRepository for BrokenCompletions {
        async fn list_completed(
            &self,
            _user: UserId,
        ) -> Result<Vec<CompletedLesson>, StorageError> {
            Ok(Vec::new())
        }

        async fn insert_completed(
            &self,
            _user: UserId,
            _lesson: &CompletedLesson,
        ) -> Result<(), StorageError> {
            Err(StorageError::Connection("database is locked".into()))
        }
    }

    /// Records every insert attempt and rejects the `failing` kind.
    #[derive(Clone, Default)]
    struct TrackedBadges {
        inner: InMemoryRepository,
        failing: Option<BadgeKind>,
        attempts: Arc<std::sync::Mutex<Vec<BadgeKind>>>,
    }

    impl TrackedBadges {
        fn attempts(&self) -> Vec<BadgeKind> {
            self.attempts.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl BadgeRepository for TrackedBadges {
        async fn list_badges(&self, user: UserId) -> Result<Vec<UserBadge>, StorageError> {
            self.inner.list_badges(user).await
        }

        async fn insert_badge(&self, user: UserId, badge: &UserBadge) -> Result<(), StorageError> {
            self.attempts.lock().unwrap().push(badge.kind);
            if self.failing == Some(badge.kind) {
                return Err(StorageError::Connection("badge write rejected".into()));
            }
            self.inner.insert_badge(user, badge).await
        }
    }

    #[tokio::test]
    async fn failed_completion_insert_changes_nothing_else() {
        let repo = InMemoryRepository::new();
        let badges = TrackedBadges::default();
        let user = UserId::random();
        let mut rec = ProgressReconciler::new(
            fixed_clock(),
            user,
            Arc::new(repo.clone()),
            Arc::new(badges.clone()),
            Arc::new(BrokenCompletions),
        );
        rec.load().await.unwrap();

        let err = rec.complete_lesson(LessonId::new(1), Some(5)).await.unwrap_err();
        assert!(matches!(err, ProgressError::Storage(StorageError::Connection(_))));

        assert_eq!(repo.get_progress(user).await.unwrap(), UserProgress::default());
        assert_eq!(rec.progress(), Some(&UserProgress::default()));
        assert!(badges.attempts().is_empty());
        assert!(rec.badges().is_empty());
    }

    #[tokio::test]
    async fn one_failing_badge_does_not_block_the_rest() {
        let repo = InMemoryRepository::new();
        let badges = TrackedBadges {
            failing: Some(BadgeKind::FirstLesson),
            ..TrackedBadges::default()
        };
        let user = UserId::random();
        let mut rec = ProgressReconciler::new(
            fixed_clock(),
            user,
            Arc::new(repo.clone()),
            Arc::new(badges.clone()),
            Arc::new(repo.clone()),
        );
        rec.load().await.unwrap();

        let mut last = None;
        for id in 1..=5 {
            last = Some(rec.complete_lesson(LessonId::new(id), None).await.unwrap());
        }
        let fifth = last.unwrap();
        assert_eq!(fifth.progress.lessons_completed, 5);
        assert_eq!(fifth.awarded, vec![BadgeKind::FiveLessons]);

        let mut expected = vec![BadgeKind::FirstLesson; 5];
        expected.push(BadgeKind::FiveLessons);
        assert_eq!(badges.attempts(), expected);
        assert!(rec.state().has_badge(BadgeKind::FiveLessons));
        assert!(!rec.state().has_badge(BadgeKind::FirstLesson));
    }

    #[tokio::test]
    async fn held_badges_are_never_inserted_again() {
        let badges = TrackedBadges::default();
        let user = UserId::random();
        badges
            .inner
            .insert_badge(user, &UserBadge::new(BadgeKind::FirstLesson, fixed_now()))
            .await
            .unwrap();
        let repo = InMemoryRepository::new();
        let mut rec = ProgressReconciler::new(
            fixed_clock(),
            user,
            Arc::new(repo.clone()),
            Arc::new(badges.clone()),
            Arc::new(repo.clone()),
        );
        rec.load().await.unwrap();

        let outcome = rec.complete_lesson(LessonId::new(1), Some(5)).await.unwrap();
        assert!(outcome.awarded.is_empty());
        assert!(badges.attempts().is_empty());
        assert_eq!(badges.inner.list_badges(user).await.unwrap().len(), 1);
    }
}
