use chrono::Duration;
use eagle_core::model::{
    BadgeKind, CompletedLesson, LessonId, PostContent, Profile, ProgressUpdate, UserBadge, UserId,
};
use eagle_core::time::{fixed_now, fixed_today};
use storage::repository::{
    BadgeRepository, CompletedLessonRepository, FollowRepository, PostRepository,
    ProfileRepository, ProgressRepository, Storage, StorageError,
};
use storage::sqlite::SqliteRepository;

async fn connect(name: &str) -> SqliteRepository {
    let url = format!("sqlite:file:{name}?mode=memory&cache=shared");
    let repo = SqliteRepository::connect(&url).await.expect("connect");
    repo.migrate().await.expect("migrate");
    repo
}

#[tokio::test]
async fn sqlite_progress_lifecycle() {
    let repo = connect("memdb_progress").await;
    let user = UserId::random();

    assert!(matches!(
        repo.get_progress(user).await,
        Err(StorageError::NotFound)
    ));
    repo.create_progress(user).await.unwrap();
    assert!(matches!(
        repo.create_progress(user).await,
        Err(StorageError::Conflict)
    ));

    let update = ProgressUpdate {
        current_streak: Some(3),
        longest_streak: Some(4),
        last_activity: Some(Some(fixed_today())),
        ..ProgressUpdate::default()
    };
    let stored = repo.update_progress(user, &update).await.unwrap();
    assert_eq!(stored.current_streak, 3);
    assert_eq!(stored.longest_streak, 4);
    assert_eq!(stored.lessons_completed, 0);
    assert_eq!(stored.last_activity, Some(fixed_today()));

    // Only the streak changes; last activity is left alone.
    let stored = repo
        .update_progress(user, &ProgressUpdate::reset_streak())
        .await
        .unwrap();
    assert_eq!(stored.current_streak, 0);
    assert_eq!(stored.longest_streak, 4);
    assert_eq!(stored.last_activity, Some(fixed_today()));

    let fetched = repo.get_progress(user).await.unwrap();
    assert_eq!(fetched, stored);

    assert!(matches!(
        repo.update_progress(UserId::random(), &update).await,
        Err(StorageError::NotFound)
    ));
}

#[tokio::test]
async fn sqlite_badges_are_unique_per_kind() {
    let repo = connect("memdb_badges").await;
    let user = UserId::random();
    let first = UserBadge::new(BadgeKind::FirstLesson, fixed_now());
    let streak = UserBadge::new(BadgeKind::WeekStreak, fixed_now() + Duration::seconds(1));

    repo.insert_badge(user, &first).await.unwrap();
    repo.insert_badge(user, &streak).await.unwrap();
    assert!(matches!(
        repo.insert_badge(user, &first).await,
        Err(StorageError::Conflict)
    ));

    let held = repo.list_badges(user).await.unwrap();
    assert_eq!(held, vec![first, streak]);
    assert!(repo.list_badges(UserId::random()).await.unwrap().is_empty());
}

#[tokio::test]
async fn sqlite_completed_lessons_keep_scores() {
    let repo = connect("memdb_completed").await;
    let user = UserId::random();
    let graded = CompletedLesson::new(LessonId::new(7), Some(5), fixed_now());
    let ungraded = CompletedLesson::new(LessonId::new(8), None, fixed_now() + Duration::minutes(5));

    repo.insert_completed(user, &graded).await.unwrap();
    repo.insert_completed(user, &ungraded).await.unwrap();

    let rows = repo.list_completed(user).await.unwrap();
    assert_eq!(rows, vec![graded, ungraded]);
}

#[tokio::test]
async fn sqlite_like_counters_and_feed_order() {
    let repo = connect("memdb_posts").await;
    let (author, viewer) = (UserId::random(), UserId::random());
    let mut profile = Profile::new(author);
    profile.username = Some("pm_jane".into());
    repo.upsert_profile(&profile).await.unwrap();
    assert_eq!(repo.get_profile(author).await.unwrap(), Some(profile.clone()));
    assert_eq!(repo.get_profile(viewer).await.unwrap(), None);

    let older = repo
        .insert_post(author, &PostContent::new("first").unwrap(), fixed_now())
        .await
        .unwrap();
    let newer = repo
        .insert_post(
            viewer,
            &PostContent::new("second").unwrap(),
            fixed_now() + Duration::minutes(1),
        )
        .await
        .unwrap();

    repo.insert_like(viewer, older.id).await.unwrap();
    repo.increment_likes(older.id).await.unwrap();
    assert!(repo.has_like(viewer, older.id).await.unwrap());
    assert!(matches!(
        repo.insert_like(viewer, older.id).await,
        Err(StorageError::Conflict)
    ));

    let posts = repo.list_posts().await.unwrap();
    assert_eq!(posts[0].id, newer.id);
    assert!(posts[0].author.is_none());
    assert_eq!(posts[1].id, older.id);
    assert_eq!(posts[1].likes_count, 1);
    assert_eq!(posts[1].author.as_ref().unwrap().label(), "@pm_jane");

    let liked = repo
        .liked_post_ids(viewer, &[older.id, newer.id])
        .await
        .unwrap();
    assert!(liked.contains(&older.id));
    assert!(!liked.contains(&newer.id));

    repo.delete_like(viewer, older.id).await.unwrap();
    repo.decrement_likes(older.id).await.unwrap();
    repo.decrement_likes(older.id).await.unwrap();
    let posts = repo.list_posts().await.unwrap();
    assert_eq!(posts[1].likes_count, 0);
    assert!(!repo.has_like(viewer, older.id).await.unwrap());
}

#[tokio::test]
async fn sqlite_follow_graph() {
    let repo = connect("memdb_follows").await;
    let (a, b, c) = (UserId::random(), UserId::random(), UserId::random());
    for user in [a, b, c] {
        repo.upsert_profile(&Profile::new(user)).await.unwrap();
    }

    repo.follow(a, b).await.unwrap();
    repo.follow(c, b).await.unwrap();
    assert!(matches!(repo.follow(a, b).await, Err(StorageError::Conflict)));

    let followers = repo.list_followers(b).await.unwrap();
    assert_eq!(followers.len(), 2);
    assert!(followers.iter().all(|f| f.following_id == b));
    assert_eq!(
        followers
            .iter()
            .map(|f| f.profile.as_ref().unwrap().user_id)
            .collect::<Vec<_>>(),
        followers.iter().map(|f| f.follower_id).collect::<Vec<_>>()
    );

    let following = repo.list_following(a).await.unwrap();
    assert_eq!(following.len(), 1);
    assert_eq!(following[0].profile.as_ref().unwrap().user_id, b);

    repo.unfollow(a, b).await.unwrap();
    assert!(repo.list_following(a).await.unwrap().is_empty());

    let others = repo.list_profiles_except(a).await.unwrap();
    assert_eq!(others.len(), 2);
    assert!(others.iter().all(|p| p.user_id != a));
}

#[tokio::test]
async fn storage_sqlite_wires_every_store() {
    let storage = Storage::sqlite("sqlite:file:memdb_storage?mode=memory&cache=shared")
        .await
        .expect("storage");
    let user = UserId::random();
    storage.progress.create_progress(user).await.unwrap();
    assert_eq!(storage.progress.get_progress(user).await.unwrap().current_streak, 0);
    assert!(storage.badges.list_badges(user).await.unwrap().is_empty());
}
