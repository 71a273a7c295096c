use eagle_core::model::{CompletedLesson, UserId};

use super::SqliteRepository;
use super::mapping::{map_completed_row, opt_u32_to_i64, read_err, write_err};
use crate::repository::{CompletedLessonRepository, StorageError};

#[async_trait::async_trait]
impl CompletedLessonRepository for SqliteRepository {
    async fn list_completed(&self, user: UserId) -> Result<Vec<CompletedLesson>, StorageError> {
        let rows = sqlx::query(
            r"
            SELECT lesson_id, quiz_score, created_at
            FROM completed_lessons
            WHERE user_id = ?1
            ORDER BY created_at ASC, id ASC
            ",
        )
        .bind(user.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(read_err)?;

        rows.iter().map(map_completed_row).collect()
    }

    async fn insert_completed(
        &self,
        user: UserId,
        lesson: &CompletedLesson,
    ) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO completed_lessons (user_id, lesson_id, quiz_score, created_at)
            VALUES (?1, ?2, ?3, ?4)
            ",
        )
        .bind(user.to_string())
        .bind(i64::from(lesson.lesson_id.value()))
        .bind(opt_u32_to_i64(lesson.quiz_score))
        .bind(lesson.created_at)
        .execute(&self.pool)
        .await
        .map_err(write_err)?;
        Ok(())
    }
}
