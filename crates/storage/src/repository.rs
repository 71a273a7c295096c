use async_trait::async_trait;
use chrono::{DateTime, Utc};
use eagle_core::model::{
    BadgeKind, CommunityPost, CompletedLesson, Follow, PostContent, PostId, Profile,
    ProgressUpdate, UserBadge, UserId, UserProgress,
};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("conflict")]
    Conflict,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

//
// ─── CONTRACTS ─────────────────────────────────────────────────────────────────
//

/// One progress record per user.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Fetch the user's progress record.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the user has no record yet.
    async fn get_progress(&self, user: UserId) -> Result<UserProgress, StorageError>;

    /// Create the default (all-zero) record for `user`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Conflict` if a record already exists.
    async fn create_progress(&self, user: UserId) -> Result<UserProgress, StorageError>;

    /// Apply the set fields of `update` and return the stored record.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the user has no record.
    async fn update_progress(
        &self,
        user: UserId,
        update: &ProgressUpdate,
    ) -> Result<UserProgress, StorageError>;
}

#[async_trait]
pub trait BadgeRepository: Send + Sync {
    /// Badges held by `user`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on adapter failure.
    async fn list_badges(&self, user: UserId) -> Result<Vec<UserBadge>, StorageError>;

    /// Record a newly earned badge.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Conflict` if `user` already holds this kind.
    async fn insert_badge(&self, user: UserId, badge: &UserBadge) -> Result<(), StorageError>;
}

#[async_trait]
pub trait CompletedLessonRepository: Send + Sync {
    /// Completion rows for `user`, oldest first. A retaken lesson appears once per pass.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on adapter failure.
    async fn list_completed(&self, user: UserId) -> Result<Vec<CompletedLesson>, StorageError>;

    /// Append a completion row.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the row cannot be stored.
    async fn insert_completed(
        &self,
        user: UserId,
        lesson: &CompletedLesson,
    ) -> Result<(), StorageError>;
}

/// Community feed storage. Like counters are adjusted by dedicated atomic calls.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts, newest first, with author profiles attached and `is_liked` unset.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on adapter failure.
    async fn list_posts(&self) -> Result<Vec<CommunityPost>, StorageError>;

    /// Which of `posts` the user has liked.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on adapter failure.
    async fn liked_post_ids(
        &self,
        user: UserId,
        posts: &[PostId],
    ) -> Result<HashSet<PostId>, StorageError>;

    /// Store a new post authored by `author`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the post cannot be stored.
    async fn insert_post(
        &self,
        author: UserId,
        content: &PostContent,
        created_at: DateTime<Utc>,
    ) -> Result<CommunityPost, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` on adapter failure.
    async fn has_like(&self, user: UserId, post: PostId) -> Result<bool, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError::Conflict` if the like already exists.
    async fn insert_like(&self, user: UserId, post: PostId) -> Result<(), StorageError>;

    /// Remove a like. Removing a missing like is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on adapter failure.
    async fn delete_like(&self, user: UserId, post: PostId) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the post does not exist.
    async fn increment_likes(&self, post: PostId) -> Result<(), StorageError>;

    /// Decrement the like counter, never below zero.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the post does not exist.
    async fn decrement_likes(&self, post: PostId) -> Result<(), StorageError>;
}

#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Users following `user`, each with the follower's profile.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on adapter failure.
    async fn list_followers(&self, user: UserId) -> Result<Vec<Follow>, StorageError>;

    /// Users `user` follows, each with the followed user's profile.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on adapter failure.
    async fn list_following(&self, user: UserId) -> Result<Vec<Follow>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError::Conflict` if the edge already exists.
    async fn follow(&self, follower: UserId, following: UserId) -> Result<(), StorageError>;

    /// Remove a follow edge. Removing a missing edge is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on adapter failure.
    async fn unfollow(&self, follower: UserId, following: UserId) -> Result<(), StorageError>;
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError` if the profile cannot be stored.
    async fn upsert_profile(&self, profile: &Profile) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` on adapter failure.
    async fn get_profile(&self, user: UserId) -> Result<Option<Profile>, StorageError>;

    /// Every profile except `user`'s own.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on adapter failure.
    async fn list_profiles_except(&self, user: UserId) -> Result<Vec<Profile>, StorageError>;
}

//
// ─── IN-MEMORY ADAPTER ─────────────────────────────────────────────────────────
//

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    progress: Arc<Mutex<HashMap<UserId, UserProgress>>>,
    badges: Arc<Mutex<HashMap<UserId, Vec<UserBadge>>>>,
    completed: Arc<Mutex<HashMap<UserId, Vec<CompletedLesson>>>>,
    profiles: Arc<Mutex<HashMap<UserId, Profile>>>,
    posts: Arc<Mutex<Vec<CommunityPost>>>,
    likes: Arc<Mutex<HashSet<(UserId, PostId)>>>,
    follows: Arc<Mutex<Vec<(UserId, UserId)>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, StorageError> {
    mutex
        .lock()
        .map_err(|e| StorageError::Connection(e.to_string()))
}

#[async_trait]
impl ProgressRepository for InMemoryRepository {
    async fn get_progress(&self, user: UserId) -> Result<UserProgress, StorageError> {
        let guard = lock(&self.progress)?;
        guard.get(&user).cloned().ok_or(StorageError::NotFound)
    }

    async fn create_progress(&self, user: UserId) -> Result<UserProgress, StorageError> {
        let mut guard = lock(&self.progress)?;
        if guard.contains_key(&user) {
            return Err(StorageError::Conflict);
        }
        let fresh = UserProgress::default();
        guard.insert(user, fresh.clone());
        Ok(fresh)
    }

    async fn update_progress(
        &self,
        user: UserId,
        update: &ProgressUpdate,
    ) -> Result<UserProgress, StorageError> {
        let mut guard = lock(&self.progress)?;
        let record = guard.get_mut(&user).ok_or(StorageError::NotFound)?;
        update.apply_to(record);
        Ok(record.clone())
    }
}

#[async_trait]
impl BadgeRepository for InMemoryRepository {
    async fn list_badges(&self, user: UserId) -> Result<Vec<UserBadge>, StorageError> {
        let guard = lock(&self.badges)?;
        Ok(guard.get(&user).cloned().unwrap_or_default())
    }

    async fn insert_badge(&self, user: UserId, badge: &UserBadge) -> Result<(), StorageError> {
        let mut guard = lock(&self.badges)?;
        let held = guard.entry(user).or_default();
        if held.iter().any(|b| b.kind == badge.kind) {
            return Err(StorageError::Conflict);
        }
        held.push(badge.clone());
        Ok(())
    }
}

#[async_trait]
impl CompletedLessonRepository for InMemoryRepository {
    async fn list_completed(&self, user: UserId) -> Result<Vec<CompletedLesson>, StorageError> {
        let guard = lock(&self.completed)?;
        Ok(guard.get(&user).cloned().unwrap_or_default())
    }

    async fn insert_completed(
        &self,
        user: UserId,
        lesson: &CompletedLesson,
    ) -> Result<(), StorageError> {
        let mut guard = lock(&self.completed)?;
        guard.entry(user).or_default().push(lesson.clone());
        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryRepository {
    async fn list_posts(&self) -> Result<Vec<CommunityPost>, StorageError> {
        let profiles = lock(&self.profiles)?;
        let posts = lock(&self.posts)?;
        // Later inserts win ties on created_at.
        let mut out: Vec<CommunityPost> = posts
            .iter()
            .rev()
            .map(|post| CommunityPost {
                author: profiles.get(&post.author_id).cloned(),
                is_liked: false,
                ..post.clone()
            })
            .collect();
        out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(out)
    }

    async fn liked_post_ids(
        &self,
        user: UserId,
        posts: &[PostId],
    ) -> Result<HashSet<PostId>, StorageError> {
        let guard = lock(&self.likes)?;
        Ok(posts
            .iter()
            .copied()
            .filter(|post| guard.contains(&(user, *post)))
            .collect())
    }

    async fn insert_post(
        &self,
        author: UserId,
        content: &PostContent,
        created_at: DateTime<Utc>,
    ) -> Result<CommunityPost, StorageError> {
        let post = CommunityPost {
            id: PostId::random(),
            author_id: author,
            content: content.as_str().to_owned(),
            likes_count: 0,
            comments_count: 0,
            created_at,
            author: None,
            is_liked: false,
        };
        lock(&self.posts)?.push(post.clone());
        Ok(post)
    }

    async fn has_like(&self, user: UserId, post: PostId) -> Result<bool, StorageError> {
        Ok(lock(&self.likes)?.contains(&(user, post)))
    }

    async fn insert_like(&self, user: UserId, post: PostId) -> Result<(), StorageError> {
        if !lock(&self.posts)?.iter().any(|p| p.id == post) {
            return Err(StorageError::NotFound);
        }
        if !lock(&self.likes)?.insert((user, post)) {
            return Err(StorageError::Conflict);
        }
        Ok(())
    }

    async fn delete_like(&self, user: UserId, post: PostId) -> Result<(), StorageError> {
        lock(&self.likes)?.remove(&(user, post));
        Ok(())
    }

    async fn increment_likes(&self, post: PostId) -> Result<(), StorageError> {
        let mut guard = lock(&self.posts)?;
        let record = guard
            .iter_mut()
            .find(|p| p.id == post)
            .ok_or(StorageError::NotFound)?;
        record.likes_count = record.likes_count.saturating_add(1);
        Ok(())
    }

    async fn decrement_likes(&self, post: PostId) -> Result<(), StorageError> {
        let mut guard = lock(&self.posts)?;
        let record = guard
            .iter_mut()
            .find(|p| p.id == post)
            .ok_or(StorageError::NotFound)?;
        record.likes_count = record.likes_count.saturating_sub(1);
        Ok(())
    }
}

#[async_trait]
impl FollowRepository for InMemoryRepository {
    async fn list_followers(&self, user: UserId) -> Result<Vec<Follow>, StorageError> {
        let profiles = lock(&self.profiles)?;
        let follows = lock(&self.follows)?;
        Ok(follows
            .iter()
            .filter(|(_, following)| *following == user)
            .map(|(follower, following)| Follow {
                follower_id: *follower,
                following_id: *following,
                profile: profiles.get(follower).cloned(),
            })
            .collect())
    }

    async fn list_following(&self, user: UserId) -> Result<Vec<Follow>, StorageError> {
        let profiles = lock(&self.profiles)?;
        let follows = lock(&self.follows)?;
        Ok(follows
            .iter()
            .filter(|(follower, _)| *follower == user)
            .map(|(follower, following)| Follow {
                follower_id: *follower,
                following_id: *following,
                profile: profiles.get(following).cloned(),
            })
            .collect())
    }

    async fn follow(&self, follower: UserId, following: UserId) -> Result<(), StorageError> {
        let mut guard = lock(&self.follows)?;
        if guard.contains(&(follower, following)) {
            return Err(StorageError::Conflict);
        }
        guard.push((follower, following));
        Ok(())
    }

    async fn unfollow(&self, follower: UserId, following: UserId) -> Result<(), StorageError> {
        lock(&self.follows)?.retain(|edge| *edge != (follower, following));
        Ok(())
    }
}

#[async_trait]
impl ProfileRepository for InMemoryRepository {
    async fn upsert_profile(&self, profile: &Profile) -> Result<(), StorageError> {
        lock(&self.profiles)?.insert(profile.user_id, profile.clone());
        Ok(())
    }

    async fn get_profile(&self, user: UserId) -> Result<Option<Profile>, StorageError> {
        Ok(lock(&self.profiles)?.get(&user).cloned())
    }

    async fn list_profiles_except(&self, user: UserId) -> Result<Vec<Profile>, StorageError> {
        let guard = lock(&self.profiles)?;
        let mut out: Vec<Profile> = guard
            .values()
            .filter(|p| p.user_id != user)
            .cloned()
            .collect();
        out.sort_by_key(|p| p.user_id);
        Ok(out)
    }
}

//
// ─── AGGREGATE ─────────────────────────────────────────────────────────────────
//

/// Aggregates the record stores behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub progress: Arc<dyn ProgressRepository>,
    pub badges: Arc<dyn BadgeRepository>,
    pub completed_lessons: Arc<dyn CompletedLessonRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub follows: Arc<dyn FollowRepository>,
    pub profiles: Arc<dyn ProfileRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_repository(InMemoryRepository::new())
    }

    /// Use one adapter value for every store.
    #[must_use]
    pub fn from_repository<R>(repo: R) -> Self
    where
        R: ProgressRepository
            + BadgeRepository
            + CompletedLessonRepository
            + PostRepository
            + FollowRepository
            + ProfileRepository
            + Clone
            + 'static,
    {
        Self {
            progress: Arc::new(repo.clone()),
            badges: Arc::new(repo.clone()),
            completed_lessons: Arc::new(repo.clone()),
            posts: Arc::new(repo.clone()),
            follows: Arc::new(repo.clone()),
            profiles: Arc::new(repo),
        }
    }
}

/// Kinds already held, for feeding badge rules.
#[must_use]
pub fn held_kinds(badges: &[UserBadge]) -> Vec<BadgeKind> {
    badges.iter().map(|b| b.kind).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use eagle_core::model::LessonId;
    use eagle_core::time::{fixed_now, fixed_today};

    #[tokio::test]
    async fn progress_is_not_found_until_created() {
        let repo = InMemoryRepository::new();
        let user = UserId::random();
        assert!(matches!(
            repo.get_progress(user).await,
            Err(StorageError::NotFound)
        ));

        let created = repo.create_progress(user).await.unwrap();
        assert_eq!(created, UserProgress::default());
        assert!(matches!(
            repo.create_progress(user).await,
            Err(StorageError::Conflict)
        ));
    }

    #[tokio::test]
    async fn update_applies_only_set_fields() {
        let repo = InMemoryRepository::new();
        let user = UserId::random();
        repo.create_progress(user).await.unwrap();

        let update = ProgressUpdate {
            lessons_completed: Some(3),
            last_activity: Some(Some(fixed_today())),
            ..ProgressUpdate::default()
        };
        let stored = repo.update_progress(user, &update).await.unwrap();
        assert_eq!(stored.lessons_completed, 3);
        assert_eq!(stored.last_activity, Some(fixed_today()));
        assert_eq!(stored.total_quizzes, 0);
    }

    #[tokio::test]
    async fn duplicate_badge_is_a_conflict() {
        let repo = InMemoryRepository::new();
        let user = UserId::random();
        let badge = UserBadge::new(BadgeKind::FirstLesson, fixed_now());
        repo.insert_badge(user, &badge).await.unwrap();
        assert!(matches!(
            repo.insert_badge(user, &badge).await,
            Err(StorageError::Conflict)
        ));
        assert_eq!(repo.list_badges(user).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn completed_lessons_keep_every_pass() {
        let repo = InMemoryRepository::new();
        let user = UserId::random();
        let row = CompletedLesson::new(LessonId::new(2), Some(5), fixed_now());
        repo.insert_completed(user, &row).await.unwrap();
        repo.insert_completed(user, &row).await.unwrap();
        assert_eq!(repo.list_completed(user).await.unwrap().len(), 2);
        assert!(repo.list_completed(UserId::random()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn posts_are_newest_first_with_authors() {
        let repo = InMemoryRepository::new();
        let alice = UserId::random();
        let mut profile = Profile::new(alice);
        profile.display_name = Some("Alice".into());
        repo.upsert_profile(&profile).await.unwrap();

        let older = repo
            .insert_post(alice, &PostContent::new("first").unwrap(), fixed_now())
            .await
            .unwrap();
        let newer = repo
            .insert_post(
                alice,
                &PostContent::new("second").unwrap(),
                fixed_now() + Duration::minutes(1),
            )
            .await
            .unwrap();

        let posts = repo.list_posts().await.unwrap();
        assert_eq!(
            posts.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![newer.id, older.id]
        );
        assert_eq!(posts[0].author.as_ref().unwrap().label(), "Alice");
    }

    #[tokio::test]
    async fn like_counter_never_goes_negative() {
        let repo = InMemoryRepository::new();
        let author = UserId::random();
        let post = repo
            .insert_post(author, &PostContent::new("hi").unwrap(), fixed_now())
            .await
            .unwrap();

        repo.decrement_likes(post.id).await.unwrap();
        repo.increment_likes(post.id).await.unwrap();
        repo.increment_likes(post.id).await.unwrap();
        repo.decrement_likes(post.id).await.unwrap();
        assert_eq!(repo.list_posts().await.unwrap()[0].likes_count, 1);
        assert!(matches!(
            repo.increment_likes(PostId::random()).await,
            Err(StorageError::NotFound)
        ));
    }

    #[tokio::test]
    async fn follow_edges_carry_counterpart_profiles() {
        let repo = InMemoryRepository::new();
        let (a, b) = (UserId::random(), UserId::random());
        let mut pb = Profile::new(b);
        pb.username = Some("bee".into());
        repo.upsert_profile(&Profile::new(a)).await.unwrap();
        repo.upsert_profile(&pb).await.unwrap();

        repo.follow(a, b).await.unwrap();
        assert!(matches!(repo.follow(a, b).await, Err(StorageError::Conflict)));

        let following = repo.list_following(a).await.unwrap();
        assert_eq!(following.len(), 1);
        assert_eq!(following[0].profile.as_ref().unwrap().label(), "@bee");

        let followers = repo.list_followers(b).await.unwrap();
        assert_eq!(followers[0].follower_id, a);

        repo.unfollow(a, b).await.unwrap();
        repo.unfollow(a, b).await.unwrap();
        assert!(repo.list_following(a).await.unwrap().is_empty());
        assert_eq!(repo.list_profiles_except(a).await.unwrap(), vec![pb]);
    }
}
