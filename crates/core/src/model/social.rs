use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{PostId, UserId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PostError {
    #[error("post content is empty")]
    Empty,
}

/// Public profile shown next to posts and in follower lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: UserId,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub username: Option<String>,
}

impl Profile {
    #[must_use]
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            display_name: None,
            avatar_url: None,
            username: None,
        }
    }

    /// Best label for rendering: display name, then `@username`, then "Anonymous".
    #[must_use]
    pub fn label(&self) -> String {
        if let Some(name) = self.display_name.as_deref().filter(|s| !s.trim().is_empty()) {
            return name.to_string();
        }
        if let Some(username) = self.username.as_deref().filter(|s| !s.trim().is_empty()) {
            return format!("@{username}");
        }
        "Anonymous".to_string()
    }
}

/// Validated, trimmed body of a new community post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostContent(String);

impl PostContent {
    /// # Errors
    ///
    /// Returns `PostError::Empty` when the text is blank after trimming.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, PostError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(PostError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A post in the community feed as seen by one viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityPost {
    pub id: PostId,
    pub author_id: UserId,
    pub content: String,
    pub likes_count: u32,
    pub comments_count: u32,
    pub created_at: DateTime<Utc>,
    pub author: Option<Profile>,
    /// Whether the viewing user has liked this post.
    pub is_liked: bool,
}

/// Directed follow edge with the profile of the other side attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Follow {
    pub follower_id: UserId,
    pub following_id: UserId,
    pub profile: Option<Profile>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_content_is_trimmed() {
        let content = PostContent::new("  shipped my first PRD  \n").unwrap();
        assert_eq!(content.as_str(), "shipped my first PRD");
    }

    #[test]
    fn blank_post_is_rejected() {
        assert_eq!(PostContent::new(" \t\n").unwrap_err(), PostError::Empty);
    }

    #[test]
    fn profile_label_falls_back() {
        let mut profile = Profile::new(UserId::random());
        assert_eq!(profile.label(), "Anonymous");
        profile.username = Some("pm_jane".into());
        assert_eq!(profile.label(), "@pm_jane");
        profile.display_name = Some("Jane".into());
        assert_eq!(profile.label(), "Jane");
    }
}
