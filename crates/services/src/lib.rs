#![forbid(unsafe_code)]

pub mod app_services;
pub mod auth;
pub mod catalog;
pub mod error;
pub mod navigation;
pub mod progress;
pub mod quiz;
pub mod social;

pub use eagle_core::Clock;

pub use app_services::AppServices;
pub use catalog::{LessonCatalog, LessonListEntry, LessonView, page_label};
pub use error::{AppServicesError, AuthError, ProgressError, QuizFlowError, SocialError};
pub use navigation::{MainScreen, MainTab, Screen, TabChange};
pub use progress::{
    BadgeStatus, CompletionOutcome, ProgressDashboard, ProgressReconciler, ProgressState,
};
pub use quiz::{ActiveQuiz, AnswerOutcome, QuizLoopService, QuizSession, QuizState, QuizStep};
pub use social::SocialService;
