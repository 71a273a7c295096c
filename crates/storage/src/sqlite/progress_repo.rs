use chrono::Utc;
use eagle_core::model::{ProgressUpdate, UserId, UserProgress};

use super::SqliteRepository;
use super::mapping::{map_progress_row, opt_u32_to_i64, read_err, write_err};
use crate::repository::{ProgressRepository, StorageError};

const PROGRESS_COLUMNS: &str = "current_streak, longest_streak, lessons_completed, \
     total_quizzes, total_quiz_score, last_activity_date";

#[async_trait::async_trait]
impl ProgressRepository for SqliteRepository {
    async fn get_progress(&self, user: UserId) -> Result<UserProgress, StorageError> {
        let row = sqlx::query(&format!(
            "SELECT {PROGRESS_COLUMNS} FROM user_progress WHERE user_id = ?1"
        ))
        .bind(user.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(read_err)?;

        match row {
            Some(row) => map_progress_row(&row),
            None => Err(StorageError::NotFound),
        }
    }

    async fn create_progress(&self, user: UserId) -> Result<UserProgress, StorageError> {
        sqlx::query(
            r"
            INSERT INTO user_progress (user_id, updated_at)
            VALUES (?1, ?2)
            ",
        )
        .bind(user.to_string())
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(write_err)?;

        Ok(UserProgress::default())
    }

    async fn update_progress(
        &self,
        user: UserId,
        update: &ProgressUpdate,
    ) -> Result<UserProgress, StorageError> {
        // Unset fields bind NULL and keep the stored value.
        let row = sqlx::query(&format!(
            r"
            UPDATE user_progress SET
                current_streak = COALESCE(?2, current_streak),
                longest_streak = COALESCE(?3, longest_streak),
                lessons_completed = COALESCE(?4, lessons_completed),
                total_quizzes = COALESCE(?5, total_quizzes),
                total_quiz_score = COALESCE(?6, total_quiz_score),
                last_activity_date = CASE WHEN ?7 THEN ?8 ELSE last_activity_date END,
                updated_at = ?9
            WHERE user_id = ?1
            RETURNING {PROGRESS_COLUMNS}
            "
        ))
        .bind(user.to_string())
        .bind(opt_u32_to_i64(update.current_streak))
        .bind(opt_u32_to_i64(update.longest_streak))
        .bind(opt_u32_to_i64(update.lessons_completed))
        .bind(opt_u32_to_i64(update.total_quizzes))
        .bind(opt_u32_to_i64(update.total_quiz_score))
        .bind(update.last_activity.is_some())
        .bind(update.last_activity.flatten())
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(write_err)?;

        match row {
            Some(row) => map_progress_row(&row),
            None => Err(StorageError::NotFound),
        }
    }
}
