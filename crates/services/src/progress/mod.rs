mod dashboard;
mod reconciler;

pub use dashboard::{BadgeStatus, ProgressDashboard};
pub use reconciler::{CompletionOutcome, ProgressReconciler, ProgressState};
