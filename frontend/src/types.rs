//! Wire and view types shared by pages, components and services.
//!
//! Content types mirror the backend JSON (camelCase).
//!
//! # Categories
//!
//! - **Content Types** - Ideas, sub-ideas, proposals, prototypes, comments
//! - **Vote Types** - Wire format of the vote endpoints
//! - **Form Types** - Payloads submitted by the dialogs
//! - **Showcase Types** - Static hackathon and leaderboard data
//! - **Toast Types** - Transient notifications
//! - **Error Types** - [`AppError`] and [`AppResult`]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Content Types
// =============================================================================

/// The authenticated user, from `/api/profile/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl User {
    /// Up to two initials for the avatar placeholder.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Author reference embedded in content.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub name: String,
}

/// A top-level idea.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub id: String,
    pub title: String,
    pub description: String,
    pub author: Author,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// A community idea nested under an [`Idea`]. Votable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubIdea {
    pub id: String,
    pub idea_id: String,
    pub title: String,
    pub description: String,
    pub author: Author,
    pub created_at: DateTime<Utc>,
}

/// A proposed solution for a [`SubIdea`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    pub id: String,
    pub sub_idea_id: String,
    pub title: String,
    pub description: String,
    pub author: Author,
    pub created_at: DateTime<Utc>,
}

/// An implementation artifact tied to a [`Proposal`]. Votable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prototype {
    pub id: String,
    pub proposal_id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub repository_url: Option<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
    pub author: Author,
    pub created_at: DateTime<Utc>,
}

/// A comment on any content item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub subject_id: String,
    pub body: String,
    pub author: Author,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Vote Types
// =============================================================================

/// Kind of votable content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VoteSubjectKind {
    SubIdea,
    Prototype,
}

impl VoteSubjectKind {
    /// Path segment under `/api/votes/`.
    pub fn path_segment(&self) -> &'static str {
        match self {
            Self::SubIdea => "subideas",
            Self::Prototype => "prototypes",
        }
    }

    /// Query key naming the subject on the read endpoint.
    pub fn query_key(&self) -> &'static str {
        match self {
            Self::SubIdea => "subIdeaId",
            Self::Prototype => "prototypeId",
        }
    }
}

/// One votable item.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VoteSubject {
    pub kind: VoteSubjectKind,
    pub id: String,
}

impl VoteSubject {
    pub fn sub_idea(id: impl Into<String>) -> Self {
        Self {
            kind: VoteSubjectKind::SubIdea,
            id: id.into(),
        }
    }

    pub fn prototype(id: impl Into<String>) -> Self {
        Self {
            kind: VoteSubjectKind::Prototype,
            id: id.into(),
        }
    }
}

/// Aggregate tally.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VoteCounts {
    pub total: i64,
}

/// Response of `GET /api/votes/...`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteSummary {
    pub vote_counts: VoteCounts,
    /// `-1`, `0` or `1`
    #[serde(default)]
    pub user_vote: i8,
}

/// Body of `POST /api/votes/...`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VoteRequest {
    pub value: i8,
}

// =============================================================================
// Form Types
// =============================================================================

/// Payload of the "New idea" dialog.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewIdea {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

/// Payload of the sub-idea and proposal dialogs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewEntry {
    pub title: String,
    pub description: String,
}

/// Payload of the "Submit prototype" dialog.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPrototype {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
}

/// Payload of the comment box.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewComment {
    pub body: String,
}

/// Request of the title suggestion action.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TitleSuggestionRequest {
    pub content: String,
}

/// Response of the title suggestion action.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TitleSuggestionResponse {
    #[serde(default)]
    pub suggestions: Vec<String>,
}

// =============================================================================
// Showcase Types
// =============================================================================

/// Status of a hackathon relative to today.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HackathonStatus {
    Upcoming,
    Live,
    Finished,
}

impl HackathonStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Upcoming => "Upcoming",
            Self::Live => "Live",
            Self::Finished => "Finished",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Upcoming => "status-upcoming",
            Self::Live => "status-live",
            Self::Finished => "status-finished",
        }
    }
}

/// A hackathon card.
#[derive(Clone, Debug, PartialEq)]
pub struct Hackathon {
    pub id: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub location: &'static str,
    pub starts_on: &'static str,
    pub ends_on: &'static str,
    pub prize: &'static str,
    pub participants: u32,
}

/// A leaderboard row.
#[derive(Clone, Debug, PartialEq)]
pub struct LeaderboardEntry {
    pub name: &'static str,
    pub points: u32,
    pub prototypes: u32,
    pub proposals: u32,
}

// =============================================================================
// Toast Types
// =============================================================================

/// Toast severity level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    /// Informational message
    Info,
    /// Success/completion message
    Success,
    /// Warning message
    Warning,
    /// Error message
    Error,
}

impl ToastLevel {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastLevel::Info => "toast-info",
            ToastLevel::Success => "toast-success",
            ToastLevel::Warning => "toast-warning",
            ToastLevel::Error => "toast-error",
        }
    }

    /// Get emoji prefix for display.
    pub fn emoji(&self) -> &'static str {
        match self {
            ToastLevel::Info => "ℹ️",
            ToastLevel::Success => "✅",
            ToastLevel::Warning => "⚠️",
            ToastLevel::Error => "❌",
        }
    }
}

/// A transient notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend operations.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Request could not be built or sent.
    Network(String),
    /// Backend answered with a non-success status.
    Server { status: u16, message: String },
    /// Response body could not be decoded.
    Decode(String),
    /// Form input rejected before sending.
    Validation(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Server { status, message } => {
                write!(f, "Server error ({}): {}", status, message)
            }
            AppError::Decode(msg) => write!(f, "Invalid response: {}", msg),
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

// =============================================================================
// Display helpers
// =============================================================================

/// Human-readable age such as "3 days ago".
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds();
    if seconds < 60 {
        return "just now".to_string();
    }

    let (value, unit) = match seconds {
        s if s < 3_600 => (s / 60, "minute"),
        s if s < 86_400 => (s / 3_600, "hour"),
        s if s < 2_592_000 => (s / 86_400, "day"),
        s if s < 31_536_000 => (s / 2_592_000, "month"),
        s => (s / 31_536_000, "year"),
    };

    if value == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", value, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_vote_summary_deserialization() {
        let json = r#"{ "voteCounts": { "total": 10 }, "userVote": 1 }"#;
        let summary: VoteSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.vote_counts.total, 10);
        assert_eq!(summary.user_vote, 1);
    }

    #[test]
    fn test_prototype_payload_omits_empty_links() {
        let payload = NewPrototype {
            title: "Board".into(),
            description: String::new(),
            repository_url: None,
            demo_url: Some("https://demo.dev".into()),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("repositoryUrl").is_none());
        assert_eq!(json["demoUrl"], "https://demo.dev");
    }

    #[test]
    fn test_sub_idea_deserialization() {
        let json = r#"{
            "id": "subidea-1",
            "ideaId": "idea-1",
            "title": "Bike pooling",
            "description": "Shared e-bikes",
            "author": { "id": "user-2", "name": "Ada Lovelace" },
            "createdAt": "2025-03-01T11:00:00Z"
        }"#;
        let sub: SubIdea = serde_json::from_str(json).unwrap();
        assert_eq!(sub.idea_id, "idea-1");
        assert_eq!(sub.author.name, "Ada Lovelace");
    }

    #[test]
    fn test_user_initials() {
        let user = User {
            id: "u".into(),
            name: "grace brewster hopper".into(),
            email: "g@h.dev".into(),
            avatar_url: None,
        };
        assert_eq!(user.initials(), "GB");
    }

    #[test]
    fn test_time_ago_units() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        assert_eq!(time_ago(now - Duration::seconds(5), now), "just now");
        assert_eq!(time_ago(now - Duration::minutes(1), now), "1 minute ago");
        assert_eq!(time_ago(now - Duration::hours(5), now), "5 hours ago");
        assert_eq!(time_ago(now - Duration::days(3), now), "3 days ago");
        assert_eq!(time_ago(now - Duration::days(400), now), "1 year ago");
    }

    #[test]
    fn test_error_display() {
        let err = AppError::Server {
            status: 404,
            message: "Idea not found".into(),
        };
        assert_eq!(err.to_string(), "Server error (404): Idea not found");
    }
}
