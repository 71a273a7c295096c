use chrono::Utc;
use eagle_core::model::{Follow, UserId};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use super::SqliteRepository;
use super::mapping::{map_profile_columns, read_err, ser, user_id_from_str, write_err};
use crate::repository::{FollowRepository, StorageError};

fn map_follow_row(row: &SqliteRow) -> Result<Follow, StorageError> {
    let follower: String = row.try_get("follower_id").map_err(ser)?;
    let following: String = row.try_get("following_id").map_err(ser)?;
    Ok(Follow {
        follower_id: user_id_from_str(&follower)?,
        following_id: user_id_from_str(&following)?,
        profile: map_profile_columns(row, "profile_")?,
    })
}

impl SqliteRepository {
    /// Follow edges matching `filter_column = user`, joined to the profile in `join_column`.
    async fn follow_edges(
        &self,
        user: UserId,
        filter_column: &str,
        join_column: &str,
    ) -> Result<Vec<Follow>, StorageError> {
        let sql = format!(
            r"
            SELECT
                f.follower_id, f.following_id,
                pr.user_id AS profile_user_id,
                pr.display_name AS profile_display_name,
                pr.avatar_url AS profile_avatar_url,
                pr.username AS profile_username
            FROM user_followers f
            LEFT JOIN profiles pr ON pr.user_id = f.{join_column}
            WHERE f.{filter_column} = ?1
            ORDER BY f.created_at ASC
            "
        );
        let rows = sqlx::query(&sql)
            .bind(user.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(read_err)?;
        rows.iter().map(map_follow_row).collect()
    }
}

#[async_trait::async_trait]
impl FollowRepository for SqliteRepository {
    async fn list_followers(&self, user: UserId) -> Result<Vec<Follow>, StorageError> {
        self.follow_edges(user, "following_id", "follower_id").await
    }

    async fn list_following(&self, user: UserId) -> Result<Vec<Follow>, StorageError> {
        self.follow_edges(user, "follower_id", "following_id").await
    }

    async fn follow(&self, follower: UserId, following: UserId) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO user_followers (follower_id, following_id, created_at)
            VALUES (?1, ?2, ?3)
            ",
        )
        .bind(follower.to_string())
        .bind(following.to_string())
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(write_err)?;
        Ok(())
    }

    async fn unfollow(&self, follower: UserId, following: UserId) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM user_followers WHERE follower_id = ?1 AND following_id = ?2")
            .bind(follower.to_string())
            .bind(following.to_string())
            .execute(&self.pool)
            .await
            .map_err(write_err)?;
        Ok(())
    }
}
