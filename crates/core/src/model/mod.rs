mod badge;
mod ids;
mod progress;
mod social;

pub use ids::{LessonId, ModuleId, ParseIdError, PostId, TrackId, UserId};

pub use badge::{BadgeError, BadgeKind, UserBadge};
pub use progress::{CompletedLesson, ProgressUpdate, UserProgress};
pub use social::{CommunityPost, Follow, PostContent, PostError, Profile};
