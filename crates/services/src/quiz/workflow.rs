use std::sync::Arc;

use eagle_core::curriculum::FlattenedLessonItem;
use eagle_core::model::LessonId;

use super::session::{ActiveQuiz, AnswerOutcome, QuizSession};
use crate::error::QuizFlowError;
use crate::progress::{CompletionOutcome, ProgressReconciler};

/// Result of answering one question through the workflow.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizStep {
    pub outcome: AnswerOutcome,
    /// Set when this answer finished a passing quiz and the completion was stored.
    pub completion: Option<CompletionOutcome>,
}

impl QuizStep {
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.outcome.result().is_some()
    }

    #[must_use]
    pub fn is_passing(&self) -> bool {
        self.outcome.result().is_some_and(|r| r.is_passing())
    }
}

/// Drives a `QuizSession` and records passing attempts through the reconciler.
#[derive(Clone)]
pub struct QuizLoopService {
    lessons: Arc<[FlattenedLessonItem]>,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(lessons: Arc<[FlattenedLessonItem]>) -> Self {
        Self { lessons }
    }

    /// Start the quiz for `lesson_id` on `session`.
    ///
    /// # Errors
    ///
    /// Returns `QuizFlowError::Quiz` if no questions resolve.
    pub fn start_quiz<'s>(
        &self,
        session: &'s mut QuizSession,
        lesson_id: LessonId,
    ) -> Result<&'s ActiveQuiz, QuizFlowError> {
        tracing::debug!(lesson = %lesson_id, "starting quiz");
        Ok(session.start_quiz(&self.lessons, lesson_id)?)
    }

    /// Answer the current question. A passing finish stores the completion
    /// with the raw score; a failing one stores nothing.
    ///
    /// The session has already moved to its finished state when persistence
    /// fails, so the result stays viewable and the error is returned.
    ///
    /// # Errors
    ///
    /// Returns `QuizFlowError::Quiz` for state or option errors and
    /// `QuizFlowError::Progress` if recording the completion fails.
    pub async fn submit_answer(
        &self,
        session: &mut QuizSession,
        progress: &mut ProgressReconciler,
        selected: usize,
    ) -> Result<QuizStep, QuizFlowError> {
        let outcome = session.submit_answer(selected)?;

        let completion = match outcome.result() {
            Some(result) if result.is_passing() => {
                tracing::info!(
                    lesson = %result.lesson_id,
                    score = result.score,
                    total = result.total,
                    "quiz passed"
                );
                Some(
                    progress
                        .complete_lesson(result.lesson_id, Some(result.score))
                        .await?,
                )
            }
            Some(result) => {
                tracing::info!(
                    lesson = %result.lesson_id,
                    score = result.score,
                    total = result.total,
                    "quiz not passed"
                );
                None
            }
            None => None,
        };

        Ok(QuizStep {
            outcome,
            completion,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eagle_core::curriculum::flatten_curriculum;
    use eagle_core::model::UserId;
    use eagle_core::time::fixed_clock;
    use storage::repository::{CompletedLessonRepository, InMemoryRepository, ProgressRepository};

    fn setup() -> (InMemoryRepository, UserId, ProgressReconciler, QuizLoopService) {
        let repo = InMemoryRepository::new();
        let user = UserId::random();
        let rec = ProgressReconciler::new(
            fixed_clock(),
            user,
            Arc::new(repo.clone()),
            Arc::new(repo.clone()),
            Arc::new(repo.clone()),
        );
        let service = QuizLoopService::new(flatten_curriculum().into());
        (repo, user, rec, service)
    }

    fn correct_answers(session: &QuizSession) -> Vec<usize> {
        session
            .active()
            .map(|a| a.questions.iter().map(|q| q.correct_answer).collect())
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn passing_quiz_records_completion() {
        let (repo, user, mut rec, service) = setup();
        let mut session = QuizSession::new();
        service.start_quiz(&mut session, LessonId::new(1)).unwrap();

        let answers = correct_answers(&session);
        let mut last = None;
        for pick in answers {
            last = Some(service.submit_answer(&mut session, &mut rec, pick).await.unwrap());
        }
        let step = last.unwrap();
        assert!(step.is_finished());
        assert!(step.is_passing());
        let completion = step.completion.unwrap();
        assert!(completion.first_completion);
        assert_eq!(completion.progress.total_quiz_score, 5);

        let rows = repo.list_completed(user).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].quiz_score, Some(5));
    }

    #[tokio::test]
    async fn failing_quiz_persists_nothing() {
        let (repo, user, mut rec, service) = setup();
        let mut session = QuizSession::new();
        service.start_quiz(&mut session, LessonId::new(1)).unwrap();

        let questions = session.active().unwrap().questions.clone();
        let total = questions.len();
        let mut last = None;
        for (i, q) in questions.iter().enumerate() {
            let wrong = (q.correct_answer + 1) % q.options.len();
            let choice = if i + 1 == total { wrong } else { q.correct_answer };
            last = Some(service.submit_answer(&mut session, &mut rec, choice).await.unwrap());
        }
        let step = last.unwrap();
        assert!(step.is_finished());
        assert!(!step.is_passing());
        assert!(step.completion.is_none());
        assert!(repo.list_completed(user).await.unwrap().is_empty());
        assert!(matches!(
            repo.get_progress(user).await,
            Err(storage::repository::StorageError::NotFound)
        ));
    }

    #[tokio::test]
    async fn mid_quiz_answers_do_not_touch_the_store() {
        let (repo, user, mut rec, service) = setup();
        let mut session = QuizSession::new();
        service.start_quiz(&mut session, LessonId::new(3)).unwrap();

        let step = service.submit_answer(&mut session, &mut rec, 0).await.unwrap();
        assert!(!step.is_finished());
        assert!(step.completion.is_none());
        assert!(repo.list_completed(user).await.unwrap().is_empty());
    }
}
