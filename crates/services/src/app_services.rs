use std::sync::Arc;

use eagle_core::model::{Profile, UserId};
use storage::repository::{ProfileRepository, Storage};

use crate::Clock;
use crate::auth::{AuthProvider, HttpAuthProvider, PasswordResetFlow};
use crate::catalog::LessonCatalog;
use crate::error::AppServicesError;
use crate::progress::ProgressReconciler;
use crate::quiz::QuizLoopService;
use crate::social::SocialService;

/// Assembles app-facing services for one signed-in learner.
///
/// Stateless services are shared. Stateful controllers (progress, social,
/// password reset) are built fresh per screen through the accessor methods.
#[derive(Clone)]
pub struct AppServices {
    clock: Clock,
    user: UserId,
    storage: Storage,
    catalog: LessonCatalog,
    quiz_loop: Arc<QuizLoopService>,
    auth: Arc<dyn AuthProvider>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage, with auth configured from
    /// the environment.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        user: UserId,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        ensure_profile(storage.profiles.as_ref(), user).await?;
        tracing::debug!(user = %user, "sqlite services ready");
        Ok(Self::from_storage(storage, clock, user))
    }

    /// Services over a fresh in-memory store.
    #[must_use]
    pub fn in_memory(clock: Clock, user: UserId) -> Self {
        Self::from_storage(Storage::in_memory(), clock, user)
    }

    #[must_use]
    pub fn from_storage(storage: Storage, clock: Clock, user: UserId) -> Self {
        let catalog = LessonCatalog::builtin();
        let quiz_loop = Arc::new(QuizLoopService::new(catalog.shared()));
        Self {
            clock,
            user,
            storage,
            catalog,
            quiz_loop,
            auth: Arc::new(HttpAuthProvider::from_env()),
        }
    }

    /// Swap the auth backend, e.g. for a fake in tests.
    #[must_use]
    pub fn with_auth_provider(mut self, auth: Arc<dyn AuthProvider>) -> Self {
        self.auth = auth;
        self
    }

    #[must_use]
    pub fn user(&self) -> UserId {
        self.user
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    #[must_use]
    pub fn catalog(&self) -> &LessonCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }

    /// A reconciler with nothing loaded yet.
    #[must_use]
    pub fn progress(&self) -> ProgressReconciler {
        ProgressReconciler::from_storage(self.clock, self.user, &self.storage)
    }

    /// A reconciler after session bootstrap.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Progress` if any bootstrap read or write fails.
    pub async fn load_progress(&self) -> Result<ProgressReconciler, AppServicesError> {
        let mut progress = self.progress();
        progress.load().await?;
        Ok(progress)
    }

    #[must_use]
    pub fn social(&self) -> SocialService {
        SocialService::from_storage(self.clock, self.user, &self.storage)
    }

    #[must_use]
    pub fn password_reset(&self) -> PasswordResetFlow {
        PasswordResetFlow::new(Arc::clone(&self.auth))
    }
}

/// Give a first-time learner a blank profile so they show up in the
/// community. Existing profiles are left alone.
async fn ensure_profile(
    profiles: &dyn ProfileRepository,
    user: UserId,
) -> Result<(), AppServicesError> {
    if profiles.get_profile(user).await?.is_some() {
        return Ok(());
    }
    profiles.upsert_profile(&Profile::new(user)).await?;
    tracing::info!(user = %user, "created learner profile");
    Ok(())
}
