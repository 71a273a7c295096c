use std::collections::HashSet;
use std::sync::Arc;

use chrono::Duration;
use eagle_core::model::{BadgeKind, LessonId, ProgressUpdate, UserBadge, UserId};
use eagle_core::time::{fixed_clock, fixed_now, fixed_today};
use services::{
    AppServices, LessonCatalog, MainScreen, MainTab, ProgressReconciler, QuizLoopService,
    QuizSession,
};
use storage::repository::{
    BadgeRepository, CompletedLessonRepository, InMemoryRepository, ProgressRepository,
};

fn reconciler(repo: &InMemoryRepository, user: UserId) -> ProgressReconciler {
    ProgressReconciler::new(
        fixed_clock(),
        user,
        Arc::new(repo.clone()),
        Arc::new(repo.clone()),
        Arc::new(repo.clone()),
    )
}

/// Answer every question, getting the ones at `wrong` (0-based) wrong.
async fn play(
    service: &QuizLoopService,
    session: &mut QuizSession,
    progress: &mut ProgressReconciler,
    wrong: &[usize],
) -> services::QuizStep {
    let questions = session.active().expect("quiz running").questions.clone();
    let mut last = None;
    for (i, q) in questions.iter().enumerate() {
        let pick = if wrong.contains(&i) {
            (q.correct_answer + 1) % q.options.len()
        } else {
            q.correct_answer
        };
        last = Some(service.submit_answer(session, progress, pick).await.unwrap());
    }
    last.expect("at least one question")
}

#[tokio::test]
async fn three_of_five_scores_sixty_and_records_nothing() {
    let repo = InMemoryRepository::new();
    let user = UserId::random();
    let mut progress = reconciler(&repo, user);
    progress.load().await.unwrap();

    let catalog = LessonCatalog::builtin();
    let service = QuizLoopService::new(catalog.shared());
    let mut session = QuizSession::new();
    service.start_quiz(&mut session, LessonId::new(1)).unwrap();

    let step = play(&service, &mut session, &mut progress, &[1, 3]).await;
    let result = step.outcome.result().unwrap();
    assert_eq!(result.score, 3);
    assert_eq!(result.percentage, 60);
    assert!(!result.is_passing());
    assert!(step.completion.is_none());
    assert!(repo.list_completed(user).await.unwrap().is_empty());
    assert_eq!(repo.get_progress(user).await.unwrap().lessons_completed, 0);
}

#[tokio::test]
async fn eighty_percent_is_not_enough_but_full_marks_pass() {
    let repo = InMemoryRepository::new();
    let user = UserId::random();
    let mut progress = reconciler(&repo, user);
    let service = QuizLoopService::new(LessonCatalog::builtin().shared());
    let mut session = QuizSession::new();

    service.start_quiz(&mut session, LessonId::new(1)).unwrap();
    let step = play(&service, &mut session, &mut progress, &[4]).await;
    assert_eq!(step.outcome.result().unwrap().percentage, 80);
    assert!(step.completion.is_none());

    session.retry().unwrap();
    let step = play(&service, &mut session, &mut progress, &[]).await;
    let completion = step.completion.expect("passing attempt recorded");
    assert_eq!(completion.progress.lessons_completed, 1);
    assert_eq!(completion.awarded, vec![BadgeKind::FirstLesson]);
    assert_eq!(repo.list_completed(user).await.unwrap().len(), 1);
}

#[tokio::test]
async fn lapsed_streak_restarts_at_one() {
    let repo = InMemoryRepository::new();
    let user = UserId::random();
    repo.create_progress(user).await.unwrap();
    repo.update_progress(
        user,
        &ProgressUpdate {
            current_streak: Some(5),
            longest_streak: Some(5),
            last_activity: Some(Some(fixed_today() - Duration::days(2))),
            ..ProgressUpdate::default()
        },
    )
    .await
    .unwrap();

    let mut progress = reconciler(&repo, user);
    progress.load().await.unwrap();
    let outcome = progress.complete_lesson(LessonId::new(2), Some(5)).await.unwrap();
    assert_eq!(outcome.progress.current_streak, 1);
    assert_eq!(outcome.progress.longest_streak, 5);
    assert_eq!(outcome.progress.last_activity, Some(fixed_today()));
}

#[tokio::test]
async fn held_badge_is_not_inserted_again() {
    let repo = InMemoryRepository::new();
    let user = UserId::random();
    repo.insert_badge(user, &UserBadge::new(BadgeKind::FirstLesson, fixed_now()))
        .await
        .unwrap();

    let mut progress = reconciler(&repo, user);
    progress.load().await.unwrap();
    let outcome = progress.complete_lesson(LessonId::new(1), Some(5)).await.unwrap();
    assert!(outcome.awarded.is_empty());

    let badges = repo.list_badges(user).await.unwrap();
    assert_eq!(
        badges.iter().filter(|b| b.kind == BadgeKind::FirstLesson).count(),
        1
    );
}

#[tokio::test]
async fn passing_quiz_moves_the_learner_forward() {
    let services = AppServices::in_memory(fixed_clock(), UserId::random());
    let mut progress = services.load_progress().await.unwrap();
    let mut screen = MainScreen::new();
    let mut session = QuizSession::new();
    let quiz_loop = services.quiz_loop();

    let today = services
        .catalog()
        .effective(&progress.state().completed_lesson_ids(), screen.local_completed())
        .next_incomplete()
        .map(|l| l.id)
        .unwrap();
    assert_eq!(today, LessonId::new(1));

    screen.select_lesson(today);
    quiz_loop.start_quiz(&mut session, today).unwrap();
    screen.quiz_started();
    let step = play(&quiz_loop, &mut session, &mut progress, &[]).await;
    assert!(step.is_passing());
    screen.mark_completed_locally(today);

    let change = screen.continue_from_results(step.is_passing());
    session.go_back();
    assert_eq!(change.tab, MainTab::Progress);
    assert!(change.refresh);

    progress.load().await.unwrap();
    let view = services
        .catalog()
        .effective(&progress.state().completed_lesson_ids(), &HashSet::new());
    assert_eq!(view.next_incomplete().unwrap().id, LessonId::new(2));

    let dashboard = progress.dashboard(services.catalog().len(), view.completed_count());
    assert_eq!(dashboard.lessons_completed, 1);
    assert_eq!(dashboard.current_streak, 1);
    assert_eq!(dashboard.earned_count(), 1);
}
