use eagle_core::model::{
    BadgeKind, CommunityPost, CompletedLesson, LessonId, PostId, Profile, UserBadge, UserId,
    UserProgress,
};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use crate::repository::StorageError;

pub(crate) fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

/// Classify a failed write: unique/primary-key violations become `Conflict`.
pub(crate) fn write_err(e: sqlx::Error) -> StorageError {
    match e.as_database_error() {
        Some(db) if db.is_unique_violation() => StorageError::Conflict,
        Some(db) if db.is_foreign_key_violation() => StorageError::NotFound,
        _ => StorageError::Connection(e.to_string()),
    }
}

pub(crate) fn read_err(e: sqlx::Error) -> StorageError {
    StorageError::Connection(e.to_string())
}

fn u32_from_i64(field: &'static str, v: i64) -> Result<u32, StorageError> {
    u32::try_from(v).map_err(|_| StorageError::Serialization(format!("invalid {field}: {v}")))
}

pub(crate) fn user_id_from_str(raw: &str) -> Result<UserId, StorageError> {
    raw.parse().map_err(ser)
}

pub(crate) fn post_id_from_str(raw: &str) -> Result<PostId, StorageError> {
    raw.parse().map_err(ser)
}

fn counter(row: &SqliteRow, field: &'static str) -> Result<u32, StorageError> {
    u32_from_i64(field, row.try_get::<i64, _>(field).map_err(ser)?)
}

pub(crate) fn map_progress_row(row: &SqliteRow) -> Result<UserProgress, StorageError> {
    Ok(UserProgress {
        current_streak: counter(row, "current_streak")?,
        longest_streak: counter(row, "longest_streak")?,
        lessons_completed: counter(row, "lessons_completed")?,
        total_quizzes: counter(row, "total_quizzes")?,
        total_quiz_score: counter(row, "total_quiz_score")?,
        last_activity: row.try_get("last_activity_date").map_err(ser)?,
    })
}

pub(crate) fn map_badge_row(row: &SqliteRow) -> Result<UserBadge, StorageError> {
    let kind: String = row.try_get("badge_type").map_err(ser)?;
    Ok(UserBadge {
        kind: kind.parse::<BadgeKind>().map_err(ser)?,
        earned_at: row.try_get("earned_at").map_err(ser)?,
    })
}

pub(crate) fn map_completed_row(row: &SqliteRow) -> Result<CompletedLesson, StorageError> {
    let lesson_id = u32_from_i64("lesson_id", row.try_get::<i64, _>("lesson_id").map_err(ser)?)?;
    let quiz_score = row
        .try_get::<Option<i64>, _>("quiz_score")
        .map_err(ser)?
        .map(|v| u32_from_i64("quiz_score", v))
        .transpose()?;
    Ok(CompletedLesson {
        lesson_id: LessonId::new(lesson_id),
        quiz_score,
        created_at: row.try_get("created_at").map_err(ser)?,
    })
}

/// Profile columns prefixed by `prefix`. Absent when the joined user id is NULL.
pub(crate) fn map_profile_columns(
    row: &SqliteRow,
    prefix: &str,
) -> Result<Option<Profile>, StorageError> {
    let col = |name: &str| format!("{prefix}{name}");
    let Some(user_id) = row
        .try_get::<Option<String>, _>(col("user_id").as_str())
        .map_err(ser)?
    else {
        return Ok(None);
    };
    Ok(Some(Profile {
        user_id: user_id_from_str(&user_id)?,
        display_name: row.try_get(col("display_name").as_str()).map_err(ser)?,
        avatar_url: row.try_get(col("avatar_url").as_str()).map_err(ser)?,
        username: row.try_get(col("username").as_str()).map_err(ser)?,
    }))
}

pub(crate) fn map_post_row(row: &SqliteRow) -> Result<CommunityPost, StorageError> {
    let id: String = row.try_get("id").map_err(ser)?;
    let author: String = row.try_get("user_id").map_err(ser)?;
    Ok(CommunityPost {
        id: post_id_from_str(&id)?,
        author_id: user_id_from_str(&author)?,
        content: row.try_get("content").map_err(ser)?,
        likes_count: counter(row, "likes_count")?,
        comments_count: counter(row, "comments_count")?,
        created_at: row.try_get("created_at").map_err(ser)?,
        author: map_profile_columns(row, "profile_")?,
        is_liked: false,
    })
}

pub(crate) fn opt_u32_to_i64(v: Option<u32>) -> Option<i64> {
    v.map(i64::from)
}
