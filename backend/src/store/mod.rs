//! In-memory content and vote store.
//!
//! Holds the whole ideation hierarchy plus the vote table behind a single
//! `tokio::sync::RwLock`. Content is seeded from [`SeedData`] (demo data or a
//! JSON file) and mutated through the API handlers.
//!
//! # Vote semantics
//!
//! One vote per (subject, user). Sending the same value the user already has
//! removes the vote; sending the opposite value flips it. The aggregate is
//! always recomputed from the table, never stored.

pub mod seed;

use chrono::Utc;
use std::collections::HashMap;
use std::path::Path;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::models::{
    Author, Comment, Idea, Prototype, Proposal, SubIdea, User, VoteCounts, VoteSubjectKind,
    VoteSummary, VoteValue,
};

pub use seed::{SeedData, SeedVote};

/// Key of one vote subject in the vote table.
type SubjectKey = (VoteSubjectKind, String);

/// Submitted fields for a new idea.
#[derive(Debug, Clone, Default)]
pub struct NewIdea {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

/// Submitted fields shared by sub-ideas and proposals.
#[derive(Debug, Clone, Default)]
pub struct NewEntry {
    pub title: String,
    pub description: String,
}

/// Submitted fields for a new prototype.
#[derive(Debug, Clone, Default)]
pub struct NewPrototype {
    pub title: String,
    pub description: String,
    pub repository_url: Option<String>,
    pub demo_url: Option<String>,
}

#[derive(Debug, Default)]
struct StoreData {
    users: HashMap<String, User>,
    ideas: Vec<Idea>,
    sub_ideas: Vec<SubIdea>,
    proposals: Vec<Proposal>,
    prototypes: Vec<Prototype>,
    comments: Vec<Comment>,
    votes: HashMap<SubjectKey, HashMap<String, VoteValue>>,
}

impl StoreData {
    fn subject_exists(&self, kind: VoteSubjectKind, id: &str) -> bool {
        match kind {
            VoteSubjectKind::SubIdea => self.sub_ideas.iter().any(|s| s.id == id),
            VoteSubjectKind::Prototype => self.prototypes.iter().any(|p| p.id == id),
        }
    }

    fn content_exists(&self, id: &str) -> bool {
        self.ideas.iter().any(|i| i.id == id)
            || self.sub_ideas.iter().any(|s| s.id == id)
            || self.proposals.iter().any(|p| p.id == id)
            || self.prototypes.iter().any(|p| p.id == id)
    }

    fn summary(&self, kind: VoteSubjectKind, subject_id: &str, user_id: &str) -> VoteSummary {
        let Some(table) = self.votes.get(&(kind, subject_id.to_string())) else {
            return VoteSummary::default();
        };

        VoteSummary {
            vote_counts: VoteCounts {
                total: table.values().map(|v| i64::from(v.as_i8())).sum(),
            },
            user_vote: table.get(user_id).map(VoteValue::as_i8).unwrap_or(0),
        }
    }
}

/// Thread-safe store shared by all request handlers.
#[derive(Debug, Default)]
pub struct Store {
    data: RwLock<StoreData>,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from seed data.
    pub fn from_seed(seed: SeedData) -> Self {
        let mut data = StoreData {
            users: seed.users.into_iter().map(|u| (u.id.clone(), u)).collect(),
            ideas: seed.ideas,
            sub_ideas: seed.sub_ideas,
            proposals: seed.proposals,
            prototypes: seed.prototypes,
            comments: seed.comments,
            votes: HashMap::new(),
        };

        for vote in seed.votes {
            match VoteValue::try_from(vote.value) {
                Ok(value) => {
                    data.votes
                        .entry((vote.kind, vote.subject_id))
                        .or_default()
                        .insert(vote.user_id, value);
                }
                Err(v) => eprintln!("   ⚠️  Skipping seed vote with value {}", v),
            }
        }

        Self {
            data: RwLock::new(data),
        }
    }

    /// Create a store from a JSON seed file.
    pub async fn load_seed(path: impl AsRef<Path>) -> StoreResult<Self> {
        let content = tokio::fs::read_to_string(path.as_ref()).await?;
        let seed: SeedData = serde_json::from_str(&content)?;
        Ok(Self::from_seed(seed))
    }

    /// Store populated with the built-in demo content.
    pub fn demo() -> Self {
        Self::from_seed(SeedData::demo())
    }

    // -------------------------------------------------------------------------
    // Users
    // -------------------------------------------------------------------------

    pub async fn user(&self, id: &str) -> StoreResult<User> {
        self.data
            .read()
            .await
            .users
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("User", id))
    }

    /// Insert or replace a user record.
    pub async fn upsert_user(&self, user: User) {
        self.data.write().await.users.insert(user.id.clone(), user);
    }

    // -------------------------------------------------------------------------
    // Ideas
    // -------------------------------------------------------------------------

    /// All ideas, newest first.
    pub async fn ideas(&self) -> Vec<Idea> {
        let mut ideas = self.data.read().await.ideas.clone();
        ideas.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        ideas
    }

    pub async fn idea(&self, id: &str) -> StoreResult<Idea> {
        self.data
            .read()
            .await
            .ideas
            .iter()
            .find(|i| i.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("Idea", id))
    }

    pub async fn create_idea(&self, author: &User, input: NewIdea) -> StoreResult<Idea> {
        let title = required("title", &input.title)?;
        let idea = Idea {
            id: Uuid::new_v4().to_string(),
            title,
            description: input.description.trim().to_string(),
            author: Author::from(author),
            tags: input
                .tags
                .into_iter()
                .map(|t| t.trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
            created_at: Utc::now(),
        };
        self.data.write().await.ideas.push(idea.clone());
        Ok(idea)
    }

    // -------------------------------------------------------------------------
    // Sub-ideas
    // -------------------------------------------------------------------------

    /// Sub-ideas of one idea, oldest first.
    pub async fn sub_ideas(&self, idea_id: &str) -> StoreResult<Vec<SubIdea>> {
        let data = self.data.read().await;
        if !data.ideas.iter().any(|i| i.id == idea_id) {
            return Err(StoreError::not_found("Idea", idea_id));
        }
        Ok(data
            .sub_ideas
            .iter()
            .filter(|s| s.idea_id == idea_id)
            .cloned()
            .collect())
    }

    pub async fn sub_idea(&self, id: &str) -> StoreResult<SubIdea> {
        self.data
            .read()
            .await
            .sub_ideas
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("SubIdea", id))
    }

    pub async fn create_sub_idea(
        &self,
        idea_id: &str,
        author: &User,
        input: NewEntry,
    ) -> StoreResult<SubIdea> {
        let title = required("title", &input.title)?;
        let mut data = self.data.write().await;
        if !data.ideas.iter().any(|i| i.id == idea_id) {
            return Err(StoreError::not_found("Idea", idea_id));
        }
        let sub_idea = SubIdea {
            id: Uuid::new_v4().to_string(),
            idea_id: idea_id.to_string(),
            title,
            description: input.description.trim().to_string(),
            author: Author::from(author),
            created_at: Utc::now(),
        };
        data.sub_ideas.push(sub_idea.clone());
        Ok(sub_idea)
    }

    // -------------------------------------------------------------------------
    // Proposals
    // -------------------------------------------------------------------------

    pub async fn proposals(&self, sub_idea_id: &str) -> StoreResult<Vec<Proposal>> {
        let data = self.data.read().await;
        if !data.sub_ideas.iter().any(|s| s.id == sub_idea_id) {
            return Err(StoreError::not_found("SubIdea", sub_idea_id));
        }
        Ok(data
            .proposals
            .iter()
            .filter(|p| p.sub_idea_id == sub_idea_id)
            .cloned()
            .collect())
    }

    pub async fn proposal(&self, id: &str) -> StoreResult<Proposal> {
        self.data
            .read()
            .await
            .proposals
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("Proposal", id))
    }

    pub async fn create_proposal(
        &self,
        sub_idea_id: &str,
        author: &User,
        input: NewEntry,
    ) -> StoreResult<Proposal> {
        let title = required("title", &input.title)?;
        let mut data = self.data.write().await;
        if !data.sub_ideas.iter().any(|s| s.id == sub_idea_id) {
            return Err(StoreError::not_found("SubIdea", sub_idea_id));
        }
        let proposal = Proposal {
            id: Uuid::new_v4().to_string(),
            sub_idea_id: sub_idea_id.to_string(),
            title,
            description: input.description.trim().to_string(),
            author: Author::from(author),
            created_at: Utc::now(),
        };
        data.proposals.push(proposal.clone());
        Ok(proposal)
    }

    // -------------------------------------------------------------------------
    // Prototypes
    // -------------------------------------------------------------------------

    pub async fn prototypes(&self, proposal_id: &str) -> StoreResult<Vec<Prototype>> {
        let data = self.data.read().await;
        if !data.proposals.iter().any(|p| p.id == proposal_id) {
            return Err(StoreError::not_found("Proposal", proposal_id));
        }
        Ok(data
            .prototypes
            .iter()
            .filter(|p| p.proposal_id == proposal_id)
            .cloned()
            .collect())
    }

    pub async fn create_prototype(
        &self,
        proposal_id: &str,
        author: &User,
        input: NewPrototype,
    ) -> StoreResult<Prototype> {
        let title = required("title", &input.title)?;
        let mut data = self.data.write().await;
        if !data.proposals.iter().any(|p| p.id == proposal_id) {
            return Err(StoreError::not_found("Proposal", proposal_id));
        }
        let prototype = Prototype {
            id: Uuid::new_v4().to_string(),
            proposal_id: proposal_id.to_string(),
            title,
            description: input.description.trim().to_string(),
            repository_url: optional(input.repository_url),
            demo_url: optional(input.demo_url),
            author: Author::from(author),
            created_at: Utc::now(),
        };
        data.prototypes.push(prototype.clone());
        Ok(prototype)
    }

    // -------------------------------------------------------------------------
    // Comments
    // -------------------------------------------------------------------------

    /// Comments on one content item, oldest first.
    pub async fn comments(&self, subject_id: &str) -> StoreResult<Vec<Comment>> {
        let data = self.data.read().await;
        if !data.content_exists(subject_id) {
            return Err(StoreError::not_found("Content", subject_id));
        }
        let mut comments: Vec<Comment> = data
            .comments
            .iter()
            .filter(|c| c.subject_id == subject_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(comments)
    }

    pub async fn create_comment(
        &self,
        subject_id: &str,
        author: &User,
        body: &str,
    ) -> StoreResult<Comment> {
        let body = required("body", body)?;
        let mut data = self.data.write().await;
        if !data.content_exists(subject_id) {
            return Err(StoreError::not_found("Content", subject_id));
        }
        let comment = Comment {
            id: Uuid::new_v4().to_string(),
            subject_id: subject_id.to_string(),
            body,
            author: Author::from(author),
            created_at: Utc::now(),
        };
        data.comments.push(comment.clone());
        Ok(comment)
    }

    // -------------------------------------------------------------------------
    // Votes
    // -------------------------------------------------------------------------

    /// Aggregate and the given user's own vote for a subject.
    pub async fn vote_summary(
        &self,
        kind: VoteSubjectKind,
        subject_id: &str,
        user_id: &str,
    ) -> StoreResult<VoteSummary> {
        let data = self.data.read().await;
        if !data.subject_exists(kind, subject_id) {
            return Err(StoreError::not_found(subject_label(kind), subject_id));
        }
        Ok(data.summary(kind, subject_id, user_id))
    }

    /// Record a vote with toggle semantics and return the new summary.
    pub async fn cast_vote(
        &self,
        kind: VoteSubjectKind,
        subject_id: &str,
        user_id: &str,
        value: VoteValue,
    ) -> StoreResult<VoteSummary> {
        let mut data = self.data.write().await;
        if !data.subject_exists(kind, subject_id) {
            return Err(StoreError::not_found(subject_label(kind), subject_id));
        }

        let table = data
            .votes
            .entry((kind, subject_id.to_string()))
            .or_default();
        if table.get(user_id) == Some(&value) {
            table.remove(user_id);
        } else {
            table.insert(user_id.to_string(), value);
        }

        Ok(data.summary(kind, subject_id, user_id))
    }
}

fn subject_label(kind: VoteSubjectKind) -> &'static str {
    match kind {
        VoteSubjectKind::SubIdea => "SubIdea",
        VoteSubjectKind::Prototype => "Prototype",
    }
}

fn required(field: &str, value: &str) -> StoreResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(StoreError::InvalidInput(format!("{} must not be empty", field)));
    }
    Ok(trimmed.to_string())
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn user(id: &str) -> User {
        User {
            id: id.to_string(),
            name: id.to_uppercase(),
            email: format!("{}@example.org", id),
            avatar_url: None,
        }
    }

    #[tokio::test]
    async fn test_repeated_vote_toggles_off() {
        let store = Store::demo();
        let kind = VoteSubjectKind::SubIdea;
        let before = store.vote_summary(kind, "subidea-1", "tester").await.unwrap();

        let up = store
            .cast_vote(kind, "subidea-1", "tester", VoteValue::Up)
            .await
            .unwrap();
        assert_eq!(up.user_vote, 1);
        assert_eq!(up.vote_counts.total, before.vote_counts.total + 1);

        let cleared = store
            .cast_vote(kind, "subidea-1", "tester", VoteValue::Up)
            .await
            .unwrap();
        assert_eq!(cleared.user_vote, 0);
        assert_eq!(cleared.vote_counts.total, before.vote_counts.total);
    }

    #[tokio::test]
    async fn test_opposite_vote_flips() {
        let store = Store::demo();
        let kind = VoteSubjectKind::Prototype;
        let base = store
            .vote_summary(kind, "prototype-1", "tester")
            .await
            .unwrap()
            .vote_counts
            .total;

        store
            .cast_vote(kind, "prototype-1", "tester", VoteValue::Down)
            .await
            .unwrap();
        let flipped = store
            .cast_vote(kind, "prototype-1", "tester", VoteValue::Up)
            .await
            .unwrap();
        assert_eq!(flipped.user_vote, 1);
        assert_eq!(flipped.vote_counts.total, base + 1);
    }

    #[tokio::test]
    async fn test_vote_on_unknown_subject_is_not_found() {
        let store = Store::demo();
        let err = store
            .cast_vote(VoteSubjectKind::SubIdea, "nope", "tester", VoteValue::Up)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_create_requires_title_and_parent() {
        let store = Store::demo();
        let author = user("ada");

        let err = store
            .create_sub_idea("idea-1", &author, NewEntry::default())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidInput(_)));

        let err = store
            .create_sub_idea(
                "missing",
                &author,
                NewEntry {
                    title: "Something".into(),
                    description: String::new(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));

        let created = store
            .create_sub_idea(
                "idea-1",
                &author,
                NewEntry {
                    title: "  Solar benches  ".into(),
                    description: "Charge phones in parks".into(),
                },
            )
            .await
            .unwrap();
        assert_eq!(created.title, "Solar benches");
        assert_eq!(created.author.id, "ada");

        let listed = store.sub_ideas("idea-1").await.unwrap();
        assert!(listed.iter().any(|s| s.id == created.id));
    }

    #[tokio::test]
    async fn test_comments_are_oldest_first() {
        let store = Store::demo();
        let author = user("ada");
        store
            .create_comment("proposal-1", &author, "first")
            .await
            .unwrap();
        store
            .create_comment("proposal-1", &author, "second")
            .await
            .unwrap();

        let comments = store.comments("proposal-1").await.unwrap();
        let bodies: Vec<&str> = comments.iter().map(|c| c.body.as_str()).collect();
        let first = bodies.iter().position(|b| *b == "first").unwrap();
        let second = bodies.iter().position(|b| *b == "second").unwrap();
        assert!(first < second);
    }

    #[tokio::test]
    async fn test_load_seed_file() {
        let seed = SeedData::demo();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", serde_json::to_string(&seed).unwrap()).unwrap();

        let store = Store::load_seed(file.path()).await.unwrap();
        assert_eq!(store.ideas().await.len(), seed.ideas.len());
    }

    #[tokio::test]
    async fn test_load_seed_rejects_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = Store::load_seed(file.path()).await.unwrap_err();
        assert!(matches!(err, StoreError::JsonError(_)));
    }
}
