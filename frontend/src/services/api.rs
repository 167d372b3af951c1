//! REST client for the ideation backend.
//!
//! Every request carries the session cookie (`credentials: include`).
//! Methods return [`AppResult`]; callers decide whether a failure becomes a
//! toast or a silent fallback.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use web_sys::RequestCredentials;

use crate::types::{
    AppError, AppResult, Comment, Idea, NewComment, NewEntry, NewIdea, NewPrototype, Prototype,
    Proposal, SubIdea, TitleSuggestionRequest, TitleSuggestionResponse, User, VoteRequest,
    VoteSubject, VoteSummary,
};
use crate::vote::VoteSource;

/// HTTP client bound to one backend.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // -------------------------------------------------------------------------
    // Transport
    // -------------------------------------------------------------------------

    fn get(&self, path: &str) -> RequestBuilder {
        Request::get(&self.url(path)).credentials(RequestCredentials::Include)
    }

    fn post(&self, path: &str) -> RequestBuilder {
        Request::post(&self.url(path)).credentials(RequestCredentials::Include)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let response = self
            .get(path)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;
        decode(response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> AppResult<T> {
        let response = self.send_post(path, body).await?;
        decode(response).await
    }

    async fn send_post<B: Serialize>(&self, path: &str, body: &B) -> AppResult<Response> {
        let request = self
            .post(path)
            .json(body)
            .map_err(|e| AppError::Network(format!("Failed to build request: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        ensure_ok(response).await
    }

    // -------------------------------------------------------------------------
    // Profile
    // -------------------------------------------------------------------------

    pub async fn me(&self) -> AppResult<User> {
        self.get_json("/api/profile/me").await
    }

    // -------------------------------------------------------------------------
    // Content
    // -------------------------------------------------------------------------

    pub async fn ideas(&self) -> AppResult<Vec<Idea>> {
        self.get_json("/api/ideas").await
    }

    pub async fn idea(&self, id: &str) -> AppResult<Idea> {
        self.get_json(&format!("/api/ideas/{}", id)).await
    }

    pub async fn create_idea(&self, idea: &NewIdea) -> AppResult<Idea> {
        self.post_json("/api/ideas", idea).await
    }

    pub async fn sub_ideas(&self, idea_id: &str) -> AppResult<Vec<SubIdea>> {
        self.get_json(&sub_ideas_path(idea_id)).await
    }

    pub async fn sub_idea(&self, id: &str) -> AppResult<SubIdea> {
        self.get_json(&format!("/api/subidea/{}", id)).await
    }

    pub async fn create_sub_idea(&self, idea_id: &str, entry: &NewEntry) -> AppResult<SubIdea> {
        self.post_json(&sub_ideas_path(idea_id), entry).await
    }

    pub async fn proposals(&self, sub_idea_id: &str) -> AppResult<Vec<Proposal>> {
        self.get_json(&proposals_path(sub_idea_id)).await
    }

    pub async fn proposal(&self, id: &str) -> AppResult<Proposal> {
        self.get_json(&format!("/api/proposals/{}", id)).await
    }

    pub async fn create_proposal(&self, sub_idea_id: &str, entry: &NewEntry) -> AppResult<Proposal> {
        self.post_json(&proposals_path(sub_idea_id), entry).await
    }

    pub async fn prototypes(&self, proposal_id: &str) -> AppResult<Vec<Prototype>> {
        self.get_json(&prototypes_path(proposal_id)).await
    }

    pub async fn create_prototype(
        &self,
        proposal_id: &str,
        prototype: &NewPrototype,
    ) -> AppResult<Prototype> {
        self.post_json(&prototypes_path(proposal_id), prototype).await
    }

    pub async fn comments(&self, subject_id: &str) -> AppResult<Vec<Comment>> {
        self.get_json(&comments_path(subject_id)).await
    }

    pub async fn create_comment(&self, subject_id: &str, body: &str) -> AppResult<Comment> {
        let comment = NewComment {
            body: body.to_string(),
        };
        self.post_json(&comments_path(subject_id), &comment).await
    }

    // -------------------------------------------------------------------------
    // AI
    // -------------------------------------------------------------------------

    /// Title suggestions for free text; any failure yields an empty list.
    pub async fn suggest_titles(&self, content: &str) -> Vec<String> {
        let request = TitleSuggestionRequest {
            content: content.to_string(),
        };
        match self
            .post_json::<_, TitleSuggestionResponse>("/api/ai/title-suggestions", &request)
            .await
        {
            Ok(response) => response.suggestions,
            Err(e) => {
                log::warn!("Title suggestions unavailable: {}", e);
                Vec::new()
            }
        }
    }
}

impl VoteSource for ApiClient {
    async fn fetch_votes(&self, subject: &VoteSubject) -> AppResult<VoteSummary> {
        self.get_json(&votes_query_path(subject)).await
    }

    async fn submit_vote(&self, subject: &VoteSubject, value: i8) -> AppResult<()> {
        // Acknowledgement body is not used
        self.send_post(&votes_write_path(subject), &VoteRequest { value })
            .await
            .map(|_| ())
    }
}

// =============================================================================
// Paths
// =============================================================================

fn sub_ideas_path(idea_id: &str) -> String {
    format!("/api/subidea/{}/subideas", idea_id)
}

fn proposals_path(sub_idea_id: &str) -> String {
    format!("/api/proposals/{}/proposals", sub_idea_id)
}

fn prototypes_path(proposal_id: &str) -> String {
    format!("/api/prototypes/{}/prototypes", proposal_id)
}

fn comments_path(subject_id: &str) -> String {
    format!("/api/comments/{}", subject_id)
}

fn votes_query_path(subject: &VoteSubject) -> String {
    format!(
        "/api/votes/{}?{}={}",
        subject.kind.path_segment(),
        subject.kind.query_key(),
        subject.id
    )
}

fn votes_write_path(subject: &VoteSubject) -> String {
    format!("/api/votes/{}/{}", subject.kind.path_segment(), subject.id)
}

// =============================================================================
// Responses
// =============================================================================

async fn ensure_ok(response: Response) -> AppResult<Response> {
    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(AppError::Server {
        status,
        message: error_message(&body),
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> AppResult<T> {
    let response = ensure_ok(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| AppError::Decode(e.to_string()))
}

/// Pull `error` out of a JSON error body, or return the body as-is.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vote_paths() {
        let sub = VoteSubject::sub_idea("subidea-1");
        assert_eq!(votes_query_path(&sub), "/api/votes/subideas?subIdeaId=subidea-1");
        assert_eq!(votes_write_path(&sub), "/api/votes/subideas/subidea-1");

        let proto = VoteSubject::prototype("prototype-2");
        assert_eq!(
            votes_query_path(&proto),
            "/api/votes/prototypes?prototypeId=prototype-2"
        );
        assert_eq!(votes_write_path(&proto), "/api/votes/prototypes/prototype-2");
    }

    #[test]
    fn test_content_paths() {
        assert_eq!(sub_ideas_path("idea-1"), "/api/subidea/idea-1/subideas");
        assert_eq!(proposals_path("subidea-1"), "/api/proposals/subidea-1/proposals");
        assert_eq!(prototypes_path("proposal-1"), "/api/prototypes/proposal-1/prototypes");
        assert_eq!(comments_path("proposal-1"), "/api/comments/proposal-1");
    }

    #[test]
    fn test_base_url_is_normalized() {
        let client = ApiClient::new("http://localhost:3000/");
        assert_eq!(client.url("/api/ideas"), "http://localhost:3000/api/ideas");
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(
            error_message(r#"{"success": false, "error": "Idea not found: x"}"#),
            "Idea not found: x"
        );
        assert_eq!(error_message("  Bad Gateway \n"), "Bad Gateway");
    }
}
