//! REST API request/response types.
//!
//! Field names are camelCase on the wire to match the frontend.

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::ServerError;

use crate::models::{VoteCounts, VoteSummary};
use crate::store::{NewEntry, NewIdea, NewPrototype};

/// JSON body extractor. Every rejection (malformed JSON, missing or mistyped
/// fields, wrong content type) becomes a `400` with an [`error_response`] body.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = axum::extract::rejection::JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

/// Body of `POST /api/ideas`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIdeaRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<CreateIdeaRequest> for NewIdea {
    fn from(req: CreateIdeaRequest) -> Self {
        NewIdea {
            title: req.title,
            description: req.description,
            tags: req.tags,
        }
    }
}

/// Body for creating sub-ideas and proposals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEntryRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl From<CreateEntryRequest> for NewEntry {
    fn from(req: CreateEntryRequest) -> Self {
        NewEntry {
            title: req.title,
            description: req.description,
        }
    }
}

/// Body of `POST /api/prototypes/{proposalId}/prototypes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePrototypeRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub repository_url: Option<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
}

impl From<CreatePrototypeRequest> for NewPrototype {
    fn from(req: CreatePrototypeRequest) -> Self {
        NewPrototype {
            title: req.title,
            description: req.description,
            repository_url: req.repository_url,
            demo_url: req.demo_url,
        }
    }
}

/// Body of `POST /api/comments/{subjectId}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCommentRequest {
    pub body: String,
}

/// Body of `POST /api/votes/{kind}/{id}`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VoteRequest {
    /// `1` or `-1`
    pub value: i64,
}

/// Acknowledgement of a vote write. Clients re-fetch instead of reading it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteAck {
    pub success: bool,
    pub vote_counts: VoteCounts,
    pub user_vote: i8,
}

impl From<VoteSummary> for VoteAck {
    fn from(summary: VoteSummary) -> Self {
        Self {
            success: true,
            vote_counts: summary.vote_counts,
            user_vote: summary.user_vote,
        }
    }
}

/// Body of `POST /api/ai/title-suggestions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitleSuggestionRequest {
    pub content: String,
}

/// Response of `POST /api/ai/title-suggestions`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TitleSuggestionResponse {
    pub suggestions: Vec<String>,
}

/// Create an error response
pub fn error_response(error: &str) -> Value {
    json!({
        "success": false,
        "error": error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prototype_request_optional_fields() {
        let req: CreatePrototypeRequest =
            serde_json::from_str(r#"{"title": "Board", "demoUrl": "https://x.dev"}"#).unwrap();
        let new: NewPrototype = req.into();
        assert_eq!(new.title, "Board");
        assert_eq!(new.description, "");
        assert_eq!(new.repository_url, None);
        assert_eq!(new.demo_url.as_deref(), Some("https://x.dev"));
    }

    #[test]
    fn test_error_response_shape() {
        let value = error_response("nope");
        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "nope");
    }
}
