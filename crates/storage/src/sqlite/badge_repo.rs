use eagle_core::model::{UserBadge, UserId};

use super::SqliteRepository;
use super::mapping::{map_badge_row, read_err, write_err};
use crate::repository::{BadgeRepository, StorageError};

#[async_trait::async_trait]
impl BadgeRepository for SqliteRepository {
    async fn list_badges(&self, user: UserId) -> Result<Vec<UserBadge>, StorageError> {
        let rows = sqlx::query(
            r"
            SELECT badge_type, earned_at
            FROM user_badges
            WHERE user_id = ?1
            ORDER BY earned_at ASC, id ASC
            ",
        )
        .bind(user.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(read_err)?;

        rows.iter().map(map_badge_row).collect()
    }

    async fn insert_badge(&self, user: UserId, badge: &UserBadge) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO user_badges (user_id, badge_type, earned_at)
            VALUES (?1, ?2, ?3)
            ",
        )
        .bind(user.to_string())
        .bind(badge.kind.as_str())
        .bind(badge.earned_at)
        .execute(&self.pool)
        .await
        .map_err(write_err)?;
        Ok(())
    }
}
