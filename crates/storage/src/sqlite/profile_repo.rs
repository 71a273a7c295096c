use eagle_core::model::{Profile, UserId};

use super::SqliteRepository;
use super::mapping::{map_profile_columns, read_err, write_err};
use crate::repository::{ProfileRepository, StorageError};

#[async_trait::async_trait]
impl ProfileRepository for SqliteRepository {
    async fn upsert_profile(&self, profile: &Profile) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO profiles (user_id, display_name, avatar_url, username)
            VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT(user_id) DO UPDATE SET
                display_name = excluded.display_name,
                avatar_url = excluded.avatar_url,
                username = excluded.username
            ",
        )
        .bind(profile.user_id.to_string())
        .bind(profile.display_name.as_deref())
        .bind(profile.avatar_url.as_deref())
        .bind(profile.username.as_deref())
        .execute(&self.pool)
        .await
        .map_err(write_err)?;
        Ok(())
    }

    async fn get_profile(&self, user: UserId) -> Result<Option<Profile>, StorageError> {
        let row = sqlx::query(
            "SELECT user_id, display_name, avatar_url, username FROM profiles WHERE user_id = ?1",
        )
        .bind(user.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(read_err)?;

        match row {
            Some(row) => map_profile_columns(&row, ""),
            None => Ok(None),
        }
    }

    async fn list_profiles_except(&self, user: UserId) -> Result<Vec<Profile>, StorageError> {
        let rows = sqlx::query(
            r"
            SELECT user_id, display_name, avatar_url, username
            FROM profiles
            WHERE user_id <> ?1
            ORDER BY user_id ASC
            ",
        )
        .bind(user.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(read_err)?;

        let mut out = Vec::with_capacity(rows.len());
        for row in &rows {
            if let Some(profile) = map_profile_columns(row, "")? {
                out.push(profile);
            }
        }
        Ok(out)
    }
}
