//! Shared error types for the services crate.

use thiserror::Error;

use eagle_core::model::PostError;
use eagle_core::quiz::QuizError;
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `ProgressReconciler`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by the quiz state machine and its persisting workflow.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizFlowError {
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Progress(#[from] ProgressError),
}

/// Errors emitted by `SocialService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SocialError {
    #[error(transparent)]
    Post(#[from] PostError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by the auth provider and password-reset flow.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AuthError {
    #[error("auth provider is not configured")]
    Disabled,
    #[error("email must not be empty")]
    EmptyEmail,
    #[error("passwords do not match")]
    PasswordMismatch,
    #[error("password must not be empty")]
    EmptyPassword,
    #[error("reset link is invalid or has expired")]
    InvalidSession,
    #[error("auth request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Url(#[from] url::ParseError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Progress(#[from] ProgressError),
}
