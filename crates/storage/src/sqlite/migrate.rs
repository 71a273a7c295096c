use chrono::Utc;
use sqlx::SqlitePool;

use super::SqliteInitError;

const SCHEMA_V1: &[&str] = &[
    r"
        CREATE TABLE IF NOT EXISTS user_progress (
            user_id TEXT PRIMARY KEY,
            current_streak INTEGER NOT NULL DEFAULT 0 CHECK (current_streak >= 0),
            longest_streak INTEGER NOT NULL DEFAULT 0 CHECK (longest_streak >= 0),
            lessons_completed INTEGER NOT NULL DEFAULT 0 CHECK (lessons_completed >= 0),
            total_quizzes INTEGER NOT NULL DEFAULT 0 CHECK (total_quizzes >= 0),
            total_quiz_score INTEGER NOT NULL DEFAULT 0 CHECK (total_quiz_score >= 0),
            last_activity_date TEXT,
            updated_at TEXT NOT NULL
        );
    ",
    r"
        CREATE TABLE IF NOT EXISTS user_badges (
            id INTEGER PRIMARY KEY,
            user_id TEXT NOT NULL,
            badge_type TEXT NOT NULL,
            earned_at TEXT NOT NULL,
            UNIQUE (user_id, badge_type)
        );
    ",
    r"
        CREATE TABLE IF NOT EXISTS completed_lessons (
            id INTEGER PRIMARY KEY,
            user_id TEXT NOT NULL,
            lesson_id INTEGER NOT NULL CHECK (lesson_id > 0),
            quiz_score INTEGER CHECK (quiz_score >= 0),
            created_at TEXT NOT NULL
        );
    ",
    r"
        CREATE TABLE IF NOT EXISTS profiles (
            user_id TEXT PRIMARY KEY,
            display_name TEXT,
            avatar_url TEXT,
            username TEXT
        );
    ",
    r"
        CREATE TABLE IF NOT EXISTS community_posts (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL,
            content TEXT NOT NULL CHECK (length(trim(content)) > 0),
            likes_count INTEGER NOT NULL DEFAULT 0 CHECK (likes_count >= 0),
            comments_count INTEGER NOT NULL DEFAULT 0 CHECK (comments_count >= 0),
            created_at TEXT NOT NULL
        );
    ",
    r"
        CREATE TABLE IF NOT EXISTS post_likes (
            id INTEGER PRIMARY KEY,
            user_id TEXT NOT NULL,
            post_id TEXT NOT NULL,
            UNIQUE (user_id, post_id),
            FOREIGN KEY (post_id) REFERENCES community_posts(id) ON DELETE CASCADE
        );
    ",
    r"
        CREATE TABLE IF NOT EXISTS user_followers (
            follower_id TEXT NOT NULL,
            following_id TEXT NOT NULL,
            created_at TEXT NOT NULL,
            PRIMARY KEY (follower_id, following_id)
        );
    ",
    r"
        CREATE INDEX IF NOT EXISTS idx_completed_lessons_user_created
            ON completed_lessons (user_id, created_at);
    ",
    r"
        CREATE INDEX IF NOT EXISTS idx_community_posts_created
            ON community_posts (created_at);
    ",
    r"
        CREATE INDEX IF NOT EXISTS idx_user_followers_following
            ON user_followers (following_id);
    ",
];

/// Schema versions in application order.
const MIGRATIONS: &[(i64, &[&str])] = &[(1, SCHEMA_V1)];

const BOOKKEEPING: &str = r"
    CREATE TABLE IF NOT EXISTS schema_migrations (
        version INTEGER PRIMARY KEY,
        applied_at TEXT NOT NULL
    );
";

/// Runs every pending schema migration.
///
/// Version 1 creates the progress, badge, completion and social tables.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), SqliteInitError> {
    for &(version, statements) in MIGRATIONS {
        let applied = apply(pool, version, statements)
            .await
            .map_err(|source| SqliteInitError::Migration { version, source })?;
        if applied {
            tracing::info!(version, "applied schema migration");
        } else {
            tracing::debug!(version, "schema already applied");
        }
    }
    Ok(())
}

/// Apply one version in a transaction. Returns `false` if it was already recorded.
async fn apply(pool: &SqlitePool, version: i64, statements: &[&str]) -> Result<bool, sqlx::Error> {
    sqlx::query(BOOKKEEPING).execute(pool).await?;

    let mut tx = pool.begin().await?;
    let recorded = sqlx::query("SELECT 1 FROM schema_migrations WHERE version = ?1")
        .bind(version)
        .fetch_optional(&mut *tx)
        .await?;
    if recorded.is_some() {
        return Ok(false);
    }

    for statement in statements {
        sqlx::query(*statement).execute(&mut *tx).await?;
    }
    sqlx::query("INSERT INTO schema_migrations (version, applied_at) VALUES (?1, ?2)")
        .bind(version)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;
    Ok(true)
}
