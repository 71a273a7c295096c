use std::sync::Arc;

use eagle_core::model::{CommunityPost, Follow, PostContent, PostId, Profile, UserId};
use storage::repository::{FollowRepository, PostRepository, ProfileRepository, Storage};

use crate::Clock;
use crate::error::SocialError;

/// Community feed and follow graph for one signed-in viewer.
///
/// Keeps the last fetched lists so the caller can render without another
/// round trip. Mutations re-fetch the list they affect.
pub struct SocialService {
    clock: Clock,
    viewer: UserId,
    posts_repo: Arc<dyn PostRepository>,
    follows_repo: Arc<dyn FollowRepository>,
    profiles_repo: Arc<dyn ProfileRepository>,
    posts: Vec<CommunityPost>,
    followers: Vec<Follow>,
    following: Vec<Follow>,
    users: Vec<Profile>,
}

impl SocialService {
    #[must_use]
    pub fn new(
        clock: Clock,
        viewer: UserId,
        posts_repo: Arc<dyn PostRepository>,
        follows_repo: Arc<dyn FollowRepository>,
        profiles_repo: Arc<dyn ProfileRepository>,
    ) -> Self {
        Self {
            clock,
            viewer,
            posts_repo,
            follows_repo,
            profiles_repo,
            posts: Vec::new(),
            followers: Vec::new(),
            following: Vec::new(),
            users: Vec::new(),
        }
    }

    #[must_use]
    pub fn from_storage(clock: Clock, viewer: UserId, storage: &Storage) -> Self {
        Self::new(
            clock,
            viewer,
            Arc::clone(&storage.posts),
            Arc::clone(&storage.follows),
            Arc::clone(&storage.profiles),
        )
    }

    #[must_use]
    pub fn viewer(&self) -> UserId {
        self.viewer
    }

    #[must_use]
    pub fn posts(&self) -> &[CommunityPost] {
        &self.posts
    }

    #[must_use]
    pub fn followers(&self) -> &[Follow] {
        &self.followers
    }

    #[must_use]
    pub fn following(&self) -> &[Follow] {
        &self.following
    }

    #[must_use]
    pub fn users(&self) -> &[Profile] {
        &self.users
    }

    /// Load the feed, newest first, marking the posts the viewer likes.
    ///
    /// # Errors
    ///
    /// Returns `SocialError::Storage` if either read fails.
    pub async fn fetch_posts(&mut self) -> Result<&[CommunityPost], SocialError> {
        let mut posts = self.posts_repo.list_posts().await.inspect_err(|e| {
            tracing::error!(viewer = %self.viewer, error = %e, "fetching posts failed");
        })?;
        let ids: Vec<PostId> = posts.iter().map(|p| p.id).collect();
        let liked = self.posts_repo.liked_post_ids(self.viewer, &ids).await?;
        for post in &mut posts {
            post.is_liked = liked.contains(&post.id);
        }
        self.posts = posts;
        Ok(&self.posts)
    }

    /// Publish a post as the viewer and reload the feed.
    ///
    /// # Errors
    ///
    /// Returns `SocialError::Post` for blank content, with nothing stored.
    /// Returns `SocialError::Storage` if the insert or reload fails.
    pub async fn create_post(&mut self, raw: &str) -> Result<CommunityPost, SocialError> {
        let content = PostContent::new(raw)?;
        let post = self
            .posts_repo
            .insert_post(self.viewer, &content, self.clock.now())
            .await
            .inspect_err(|e| {
                tracing::error!(viewer = %self.viewer, error = %e, "creating post failed");
            })?;
        tracing::info!(viewer = %self.viewer, post = %post.id, "post created");
        self.fetch_posts().await?;
        Ok(post)
    }

    /// Like or unlike `post` depending on the stored like, then reload the
    /// feed. Returns whether the viewer now likes the post.
    ///
    /// # Errors
    ///
    /// Returns `SocialError::Storage` from the first failing step.
    pub async fn toggle_like(&mut self, post: PostId) -> Result<bool, SocialError> {
        let liked = self.posts_repo.has_like(self.viewer, post).await?;
        if liked {
            self.posts_repo.delete_like(self.viewer, post).await?;
            self.posts_repo.decrement_likes(post).await?;
        } else {
            self.posts_repo.insert_like(self.viewer, post).await?;
            self.posts_repo.increment_likes(post).await?;
        }
        tracing::debug!(viewer = %self.viewer, post = %post, liked = !liked, "like toggled");
        self.fetch_posts().await?;
        Ok(!liked)
    }

    /// # Errors
    ///
    /// Returns `SocialError::Storage` if the read fails.
    pub async fn fetch_followers(&mut self) -> Result<&[Follow], SocialError> {
        self.followers = self.follows_repo.list_followers(self.viewer).await?;
        Ok(&self.followers)
    }

    /// # Errors
    ///
    /// Returns `SocialError::Storage` if the read fails.
    pub async fn fetch_following(&mut self) -> Result<&[Follow], SocialError> {
        self.following = self.follows_repo.list_following(self.viewer).await?;
        Ok(&self.following)
    }

    /// Every other user's profile.
    ///
    /// # Errors
    ///
    /// Returns `SocialError::Storage` if the read fails.
    pub async fn fetch_all_users(&mut self) -> Result<&[Profile], SocialError> {
        self.users = self.profiles_repo.list_profiles_except(self.viewer).await?;
        Ok(&self.users)
    }

    /// # Errors
    ///
    /// Returns `SocialError::Storage` if the edge already exists or the
    /// write fails.
    pub async fn follow(&mut self, target: UserId) -> Result<(), SocialError> {
        self.follows_repo
            .follow(self.viewer, target)
            .await
            .inspect_err(|e| {
                tracing::error!(viewer = %self.viewer, target = %target, error = %e, "follow failed");
            })?;
        tracing::info!(viewer = %self.viewer, target = %target, "followed");
        self.fetch_following().await?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `SocialError::Storage` if the write fails.
    pub async fn unfollow(&mut self, target: UserId) -> Result<(), SocialError> {
        self.follows_repo
            .unfollow(self.viewer, target)
            .await
            .inspect_err(|e| {
                tracing::error!(viewer = %self.viewer, target = %target, error = %e, "unfollow failed");
            })?;
        tracing::info!(viewer = %self.viewer, target = %target, "unfollowed");
        self.fetch_following().await?;
        Ok(())
    }

    /// Checks the last fetched following list.
    #[must_use]
    pub fn is_following(&self, target: UserId) -> bool {
        self.following.iter().any(|f| f.following_id == target)
    }

    /// Returns whether the viewer follows `target` afterwards.
    ///
    /// # Errors
    ///
    /// Returns `SocialError::Storage` from `follow` or `unfollow`.
    pub async fn toggle_follow(&mut self, target: UserId) -> Result<bool, SocialError> {
        if self.is_following(target) {
            self.unfollow(target).await?;
            Ok(false)
        } else {
            self.follow(target).await?;
            Ok(true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use eagle_core::model::PostError;
    use eagle_core::time::fixed_clock;
    use storage::repository::InMemoryRepository;

    fn service(repo: &InMemoryRepository, viewer: UserId) -> SocialService {
        SocialService::from_storage(fixed_clock(), viewer, &Storage::from_repository(repo.clone()))
    }

    #[tokio::test]
    async fn blank_post_is_rejected_without_a_write() {
        let repo = InMemoryRepository::new();
        let mut social = service(&repo, UserId::random());
        let err = social.create_post("   ").await.unwrap_err();
        assert!(matches!(err, SocialError::Post(PostError::Empty)));
        assert!(repo.list_posts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn feed_is_newest_first_with_like_flags() {
        let repo = InMemoryRepository::new();
        let viewer = UserId::random();
        let mut social = service(&repo, viewer);

        let first = social.create_post("first").await.unwrap();
        social.clock.advance(Duration::minutes(5));
        let second = social.create_post("second").await.unwrap();

        assert!(social.toggle_like(first.id).await.unwrap());
        let posts = social.posts();
        assert_eq!(posts[0].id, second.id);
        assert_eq!(posts[1].id, first.id);
        assert!(posts[1].is_liked);
        assert_eq!(posts[1].likes_count, 1);
        assert!(!posts[0].is_liked);
    }

    #[tokio::test]
    async fn toggling_a_like_twice_restores_the_count() {
        let repo = InMemoryRepository::new();
        let mut social = service(&repo, UserId::random());
        let post = social.create_post("hello").await.unwrap();

        assert!(social.toggle_like(post.id).await.unwrap());
        assert!(!social.toggle_like(post.id).await.unwrap());
        assert_eq!(social.posts()[0].likes_count, 0);
        assert!(!social.posts()[0].is_liked);
    }

    #[tokio::test]
    async fn toggle_follow_flips_the_edge() {
        let repo = InMemoryRepository::new();
        let viewer = UserId::random();
        let other = UserId::random();
        repo.upsert_profile(&Profile::new(other)).await.unwrap();
        let mut social = service(&repo, viewer);

        assert!(social.toggle_follow(other).await.unwrap());
        assert!(social.is_following(other));
        assert_eq!(social.following()[0].profile, Some(Profile::new(other)));

        let mut theirs = service(&repo, other);
        assert_eq!(theirs.fetch_followers().await.unwrap()[0].follower_id, viewer);

        assert!(!social.toggle_follow(other).await.unwrap());
        assert!(!social.is_following(other));
        assert!(social.following().is_empty());
    }

    #[tokio::test]
    async fn all_users_excludes_the_viewer() {
        let repo = InMemoryRepository::new();
        let viewer = UserId::random();
        let other = UserId::random();
        repo.upsert_profile(&Profile::new(viewer)).await.unwrap();
        repo.upsert_profile(&Profile::new(other)).await.unwrap();

        let mut social = service(&repo, viewer);
        let users = social.fetch_all_users().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].user_id, other);
    }
}
