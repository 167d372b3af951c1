//! HTTP Server for the ideation API.
//!
//! # API Endpoints
//!
//! | Method   | Path                                   | Description                       |
//! |----------|----------------------------------------|-----------------------------------|
//! | GET      | `/health`                              | Health check                      |
//! | GET      | `/api/profile/me`                      | Current user                      |
//! | GET/POST | `/api/ideas`                           | List / create ideas               |
//! | GET      | `/api/ideas/{id}`                      | Single idea                       |
//! | GET/POST | `/api/subidea/{ideaId}/subideas`       | List / create sub-ideas           |
//! | GET      | `/api/subidea/{id}`                    | Single sub-idea                   |
//! | GET/POST | `/api/proposals/{subIdeaId}/proposals` | List / create proposals           |
//! | GET      | `/api/proposals/{id}`                  | Single proposal                   |
//! | GET/POST | `/api/prototypes/{proposalId}/prototypes` | List / create prototypes       |
//! | GET/POST | `/api/comments/{subjectId}`            | List / create comments            |
//! | GET      | `/api/votes/{kind}?{key}={id}`         | Vote summary for the current user |
//! | POST     | `/api/votes/{kind}/{id}`               | Cast / toggle a vote              |
//! | POST     | `/api/ai/title-suggestions`            | Title suggestions (never fails)   |

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderValue, Method, StatusCode},
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use std::{collections::HashMap, net::SocketAddr, sync::Arc};
use tower_http::cors::CorsLayer;

use super::types::{
    ApiJson, CreateCommentRequest, CreateEntryRequest, CreateIdeaRequest, CreatePrototypeRequest,
    TitleSuggestionRequest, TitleSuggestionResponse, VoteAck, VoteRequest,
};
use crate::ai::{suggest_titles_or_empty, AiClient};
use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::models::{
    Comment, Idea, Prototype, Proposal, SubIdea, User, VoteSubjectKind, VoteSummary, VoteValue,
};
use crate::store::Store;

/// Shared state of all handlers.
pub struct AppState {
    pub store: Store,
    pub ai: Option<AiClient>,
    /// User every request acts as
    pub current_user_id: String,
}

impl AppState {
    pub fn new(store: Store, ai: Option<AiClient>, current_user_id: impl Into<String>) -> Self {
        Self {
            store,
            ai,
            current_user_id: current_user_id.into(),
        }
    }

    async fn current_user(&self) -> ServerResult<User> {
        Ok(self.store.user(&self.current_user_id).await?)
    }
}

type SharedState = Arc<AppState>;

/// Build the router with all API routes.
pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/health", get(health))
        .route("/api/profile/me", get(profile_me))
        .route("/api/ideas", get(list_ideas).post(create_idea))
        .route("/api/ideas/{id}", get(get_idea))
        .route("/api/subidea/{id}", get(get_sub_idea))
        .route(
            "/api/subidea/{id}/subideas",
            get(list_sub_ideas).post(create_sub_idea),
        )
        .route("/api/proposals/{id}", get(get_proposal))
        .route(
            "/api/proposals/{id}/proposals",
            get(list_proposals).post(create_proposal),
        )
        .route(
            "/api/prototypes/{id}/prototypes",
            get(list_prototypes).post(create_prototype),
        )
        .route("/api/comments/{id}", get(list_comments).post(create_comment))
        .route("/api/votes/{kind}", get(get_votes))
        .route("/api/votes/{kind}/{id}", post(cast_vote))
        .route("/api/ai/title-suggestions", post(title_suggestions))
        .with_state(state)
}

/// Start the HTTP server
pub async fn start_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let store = match &config.seed {
        Some(path) => {
            println!("🌱 Loading seed from {}", path.display());
            Store::load_seed(path).await?
        }
        None => Store::demo(),
    };

    if store.user(&config.dev_user_id).await.is_err() {
        println!("👤 Creating development user {}", config.dev_user_id);
        store
            .upsert_user(User {
                id: config.dev_user_id.clone(),
                name: "Dev User".to_string(),
                email: "dev@ideation.dev".to_string(),
                avatar_url: None,
            })
            .await;
    }

    let ai = match AiClient::from_env() {
        Ok(client) => Some(match &config.model {
            Some(model) => client.with_model(model),
            None => client,
        }),
        Err(e) => {
            println!("⚠️  {} - title suggestions will be empty", e);
            None
        }
    };

    // Credentialed requests need an explicit origin
    let origin: HeaderValue = config.frontend_origin.parse()?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::CONTENT_TYPE]);

    let state = Arc::new(AppState::new(store, ai, config.dev_user_id.clone()));
    let app = build_router(state).layer(cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    println!("🚀 Ideation server running on http://localhost:{}", config.port);
    println!("   CORS origin:   {}", config.frontend_origin);
    println!("   Acting as:     {}", config.dev_user_id);
    println!("   GET  /health   - Health check");
    println!();

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check endpoint
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "ideation",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn profile_me(State(state): State<SharedState>) -> ServerResult<Json<User>> {
    Ok(Json(state.current_user().await?))
}

// =============================================================================
// Content
// =============================================================================

async fn list_ideas(State(state): State<SharedState>) -> Json<Vec<Idea>> {
    Json(state.store.ideas().await)
}

async fn get_idea(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> ServerResult<Json<Idea>> {
    Ok(Json(state.store.idea(&id).await?))
}

async fn create_idea(
    State(state): State<SharedState>,
    ApiJson(body): ApiJson<CreateIdeaRequest>,
) -> ServerResult<(StatusCode, Json<Idea>)> {
    let author = state.current_user().await?;
    let idea = state.store.create_idea(&author, body.into()).await?;
    println!("💡 New idea {} \"{}\"", idea.id, idea.title);
    Ok((StatusCode::CREATED, Json(idea)))
}

async fn list_sub_ideas(
    State(state): State<SharedState>,
    Path(idea_id): Path<String>,
) -> ServerResult<Json<Vec<SubIdea>>> {
    Ok(Json(state.store.sub_ideas(&idea_id).await?))
}

async fn get_sub_idea(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> ServerResult<Json<SubIdea>> {
    Ok(Json(state.store.sub_idea(&id).await?))
}

async fn create_sub_idea(
    State(state): State<SharedState>,
    Path(idea_id): Path<String>,
    ApiJson(body): ApiJson<CreateEntryRequest>,
) -> ServerResult<(StatusCode, Json<SubIdea>)> {
    let author = state.current_user().await?;
    let sub_idea = state
        .store
        .create_sub_idea(&idea_id, &author, body.into())
        .await?;
    println!("💡 New sub-idea {} under {}", sub_idea.id, idea_id);
    Ok((StatusCode::CREATED, Json(sub_idea)))
}

async fn list_proposals(
    State(state): State<SharedState>,
    Path(sub_idea_id): Path<String>,
) -> ServerResult<Json<Vec<Proposal>>> {
    Ok(Json(state.store.proposals(&sub_idea_id).await?))
}

async fn get_proposal(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> ServerResult<Json<Proposal>> {
    Ok(Json(state.store.proposal(&id).await?))
}

async fn create_proposal(
    State(state): State<SharedState>,
    Path(sub_idea_id): Path<String>,
    ApiJson(body): ApiJson<CreateEntryRequest>,
) -> ServerResult<(StatusCode, Json<Proposal>)> {
    let author = state.current_user().await?;
    let proposal = state
        .store
        .create_proposal(&sub_idea_id, &author, body.into())
        .await?;
    println!("📝 New proposal {} for {}", proposal.id, sub_idea_id);
    Ok((StatusCode::CREATED, Json(proposal)))
}

async fn list_prototypes(
    State(state): State<SharedState>,
    Path(proposal_id): Path<String>,
) -> ServerResult<Json<Vec<Prototype>>> {
    Ok(Json(state.store.prototypes(&proposal_id).await?))
}

async fn create_prototype(
    State(state): State<SharedState>,
    Path(proposal_id): Path<String>,
    ApiJson(body): ApiJson<CreatePrototypeRequest>,
) -> ServerResult<(StatusCode, Json<Prototype>)> {
    let author = state.current_user().await?;
    let prototype = state
        .store
        .create_prototype(&proposal_id, &author, body.into())
        .await?;
    println!("🛠️  New prototype {} for {}", prototype.id, proposal_id);
    Ok((StatusCode::CREATED, Json(prototype)))
}

async fn list_comments(
    State(state): State<SharedState>,
    Path(subject_id): Path<String>,
) -> ServerResult<Json<Vec<Comment>>> {
    Ok(Json(state.store.comments(&subject_id).await?))
}

async fn create_comment(
    State(state): State<SharedState>,
    Path(subject_id): Path<String>,
    ApiJson(body): ApiJson<CreateCommentRequest>,
) -> ServerResult<(StatusCode, Json<Comment>)> {
    let author = state.current_user().await?;
    let comment = state
        .store
        .create_comment(&subject_id, &author, &body.body)
        .await?;
    Ok((StatusCode::CREATED, Json(comment)))
}

// =============================================================================
// Votes
// =============================================================================

fn subject_kind(segment: &str) -> ServerResult<VoteSubjectKind> {
    VoteSubjectKind::from_path_segment(segment)
        .ok_or_else(|| ServerError::BadRequest(format!("Unknown vote subject: {}", segment)))
}

async fn get_votes(
    State(state): State<SharedState>,
    Path(segment): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> ServerResult<Json<VoteSummary>> {
    let kind = subject_kind(&segment)?;
    let id = query.get(kind.query_key()).ok_or_else(|| {
        ServerError::BadRequest(format!("Missing query parameter {}", kind.query_key()))
    })?;

    let summary = state
        .store
        .vote_summary(kind, id, &state.current_user_id)
        .await?;
    Ok(Json(summary))
}

async fn cast_vote(
    State(state): State<SharedState>,
    Path((segment, id)): Path<(String, String)>,
    ApiJson(body): ApiJson<VoteRequest>,
) -> ServerResult<Json<VoteAck>> {
    let kind = subject_kind(&segment)?;
    let value = VoteValue::try_from(body.value).map_err(|v| {
        ServerError::BadRequest(format!("Vote value must be 1 or -1, got {}", v))
    })?;

    let summary = state
        .store
        .cast_vote(kind, &id, &state.current_user_id, value)
        .await?;
    println!(
        "🗳️  {} {} {:+} → total {} (user vote {})",
        segment,
        id,
        value.as_i8(),
        summary.vote_counts.total,
        summary.user_vote
    );
    Ok(Json(summary.into()))
}

// =============================================================================
// AI
// =============================================================================

async fn title_suggestions(
    State(state): State<SharedState>,
    ApiJson(body): ApiJson<TitleSuggestionRequest>,
) -> Json<TitleSuggestionResponse> {
    let suggestions = suggest_titles_or_empty(state.ai.as_ref(), &body.content).await;
    Json(TitleSuggestionResponse { suggestions })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    fn app() -> Router {
        build_router(Arc::new(AppState::new(Store::demo(), None, "user-1")))
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        send_raw(app, method, uri, body.map(|json| json.to_string())).await
    }

    async fn send_raw(
        app: &Router,
        method: &str,
        uri: &str,
        body: Option<String>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(text) => builder
                .header("content-type", "application/json")
                .body(Body::from(text))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_profile_me_returns_dev_user() {
        let app = app();
        let (status, body) = send(&app, "GET", "/api/profile/me", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], "user-1");
    }

    #[tokio::test]
    async fn test_vote_read_write_cycle() {
        let app = app();

        let (status, before) = send(&app, "GET", "/api/votes/subideas?subIdeaId=subidea-1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(before["userVote"], 0);
        let total = before["voteCounts"]["total"].as_i64().unwrap();

        let (status, _) = send(
            &app,
            "POST",
            "/api/votes/subideas/subidea-1",
            Some(json!({ "value": 1 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (_, after) = send(&app, "GET", "/api/votes/subideas?subIdeaId=subidea-1", None).await;
        assert_eq!(after["userVote"], 1);
        assert_eq!(after["voteCounts"]["total"].as_i64().unwrap(), total + 1);

        // Same value again clears the vote
        send(
            &app,
            "POST",
            "/api/votes/subideas/subidea-1",
            Some(json!({ "value": 1 })),
        )
        .await;
        let (_, cleared) = send(&app, "GET", "/api/votes/subideas?subIdeaId=subidea-1", None).await;
        assert_eq!(cleared["userVote"], 0);
        assert_eq!(cleared["voteCounts"]["total"].as_i64().unwrap(), total);
    }

    #[tokio::test]
    async fn test_vote_rejects_bad_input() {
        let app = app();

        let (status, _) = send(
            &app,
            "POST",
            "/api/votes/prototypes/prototype-1",
            Some(json!({ "value": 0 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, "GET", "/api/votes/ideas?ideaId=idea-1", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, "GET", "/api/votes/prototypes?subIdeaId=prototype-1", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = send(&app, "GET", "/api/votes/prototypes?prototypeId=missing", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_incomplete_body_is_json_bad_request() {
        let app = app();
        let (status, body) = send(&app, "POST", "/api/ideas", Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("title"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_json_bad_request() {
        let app = app();
        let (status, body) = send_raw(
            &app,
            "POST",
            "/api/subidea/idea-1/subideas",
            Some("not json".to_string()),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);

        let (_, list) = send(&app, "GET", "/api/subidea/idea-1/subideas", None).await;
        assert!(list.as_array().unwrap().iter().all(|s| s["title"] != "not json"));
    }

    #[tokio::test]
    async fn test_vote_with_non_integer_value_is_bad_request() {
        let app = app();
        let (_, before) = send(&app, "GET", "/api/votes/subideas?subIdeaId=subidea-1", None).await;

        for value in [json!("up"), json!(1.5), Value::Null] {
            let (status, body) = send(
                &app,
                "POST",
                "/api/votes/subideas/subidea-1",
                Some(json!({ "value": value })),
            )
            .await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "value {}", value);
            assert_eq!(body["success"], false);
        }

        let (_, after) = send(&app, "GET", "/api/votes/subideas?subIdeaId=subidea-1", None).await;
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_create_and_list_sub_ideas() {
        let app = app();

        let (status, created) = send(
            &app,
            "POST",
            "/api/subidea/idea-2/subideas",
            Some(json!({ "title": "Budget explorer", "description": "Treemap of spending" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["ideaId"], "idea-2");
        assert_eq!(created["author"]["id"], "user-1");

        let (status, list) = send(&app, "GET", "/api/subidea/idea-2/subideas", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(list
            .as_array()
            .unwrap()
            .iter()
            .any(|s| s["title"] == "Budget explorer"));
    }

    #[tokio::test]
    async fn test_unknown_parent_is_not_found() {
        let app = app();
        let (status, _) = send(&app, "GET", "/api/prototypes/missing/prototypes", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_comments_round_trip() {
        let app = app();
        let (status, _) = send(
            &app,
            "POST",
            "/api/comments/prototype-1",
            Some(json!({ "body": "Nice demo" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (_, comments) = send(&app, "GET", "/api/comments/prototype-1", None).await;
        assert_eq!(comments[0]["body"], "Nice demo");
    }

    #[tokio::test]
    async fn test_title_suggestions_without_ai_are_empty() {
        let app = app();
        let (status, body) = send(
            &app,
            "POST",
            "/api/ai/title-suggestions",
            Some(json!({ "content": "Shared bikes at every dorm" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["suggestions"], json!([]));
    }
}
