use std::collections::HashSet;

use chrono::{DateTime, Utc};
use eagle_core::model::{CommunityPost, PostContent, PostId, UserId};
use sqlx::Row;

use super::SqliteRepository;
use super::mapping::{map_post_row, post_id_from_str, read_err, ser, write_err};
use crate::repository::{PostRepository, StorageError};

#[async_trait::async_trait]
impl PostRepository for SqliteRepository {
    async fn list_posts(&self) -> Result<Vec<CommunityPost>, StorageError> {
        let rows = sqlx::query(
            r"
            SELECT
                p.id, p.user_id, p.content, p.likes_count, p.comments_count, p.created_at,
                pr.user_id AS profile_user_id,
                pr.display_name AS profile_display_name,
                pr.avatar_url AS profile_avatar_url,
                pr.username AS profile_username
            FROM community_posts p
            LEFT JOIN profiles pr ON pr.user_id = p.user_id
            ORDER BY p.created_at DESC, p.rowid DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(read_err)?;

        rows.iter().map(map_post_row).collect()
    }

    async fn liked_post_ids(
        &self,
        user: UserId,
        posts: &[PostId],
    ) -> Result<HashSet<PostId>, StorageError> {
        if posts.is_empty() {
            return Ok(HashSet::new());
        }
        let rows = sqlx::query("SELECT post_id FROM post_likes WHERE user_id = ?1")
            .bind(user.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(read_err)?;

        let wanted: HashSet<PostId> = posts.iter().copied().collect();
        let mut liked = HashSet::new();
        for row in rows {
            let raw: String = row.try_get("post_id").map_err(ser)?;
            let id = post_id_from_str(&raw)?;
            if wanted.contains(&id) {
                liked.insert(id);
            }
        }
        Ok(liked)
    }

    async fn insert_post(
        &self,
        author: UserId,
        content: &PostContent,
        created_at: DateTime<Utc>,
    ) -> Result<CommunityPost, StorageError> {
        let id = PostId::random();
        sqlx::query(
            r"
            INSERT INTO community_posts (id, user_id, content, created_at)
            VALUES (?1, ?2, ?3, ?4)
            ",
        )
        .bind(id.to_string())
        .bind(author.to_string())
        .bind(content.as_str())
        .bind(created_at)
        .execute(&self.pool)
        .await
        .map_err(write_err)?;

        Ok(CommunityPost {
            id,
            author_id: author,
            content: content.as_str().to_owned(),
            likes_count: 0,
            comments_count: 0,
            created_at,
            author: None,
            is_liked: false,
        })
    }

    async fn has_like(&self, user: UserId, post: PostId) -> Result<bool, StorageError> {
        let row = sqlx::query("SELECT 1 FROM post_likes WHERE user_id = ?1 AND post_id = ?2")
            .bind(user.to_string())
            .bind(post.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(read_err)?;
        Ok(row.is_some())
    }

    async fn insert_like(&self, user: UserId, post: PostId) -> Result<(), StorageError> {
        sqlx::query("INSERT INTO post_likes (user_id, post_id) VALUES (?1, ?2)")
            .bind(user.to_string())
            .bind(post.to_string())
            .execute(&self.pool)
            .await
            .map_err(write_err)?;
        Ok(())
    }

    async fn delete_like(&self, user: UserId, post: PostId) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM post_likes WHERE user_id = ?1 AND post_id = ?2")
            .bind(user.to_string())
            .bind(post.to_string())
            .execute(&self.pool)
            .await
            .map_err(write_err)?;
        Ok(())
    }

    async fn increment_likes(&self, post: PostId) -> Result<(), StorageError> {
        let res = sqlx::query(
            "UPDATE community_posts SET likes_count = likes_count + 1 WHERE id = ?1",
        )
        .bind(post.to_string())
        .execute(&self.pool)
        .await
        .map_err(write_err)?;
        if res.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }

    async fn decrement_likes(&self, post: PostId) -> Result<(), StorageError> {
        let res = sqlx::query(
            "UPDATE community_posts SET likes_count = MAX(likes_count - 1, 0) WHERE id = ?1",
        )
        .bind(post.to_string())
        .execute(&self.pool)
        .await
        .map_err(write_err)?;
        if res.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }
}
