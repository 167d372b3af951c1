//! Domain models for the ideation portal.
//!
//! This module contains the content hierarchy and the vote primitives:
//!
//! - [`Idea`] - Top-level project/challenge
//! - [`SubIdea`] - Community idea nested under an [`Idea`], votable
//! - [`Proposal`] - Proposed solution for a [`SubIdea`]
//! - [`Prototype`] - Implementation artifact tied to a [`Proposal`], votable
//! - [`Comment`] - Discussion entry attached to any content item
//! - [`VoteSubjectKind`] / [`VoteValue`] / [`VoteSummary`] - Voting

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Users
// =============================================================================

/// An authenticated portal user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Author reference embedded in content items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: String,
    pub name: String,
}

impl From<&User> for Author {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
        }
    }
}

// =============================================================================
// Content Hierarchy
// =============================================================================

/// A top-level idea (project or challenge) that collects sub-ideas.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
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

/// A community-submitted idea nested under a parent [`Idea`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
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
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    pub id: String,
    pub sub_idea_id: String,
    pub title: String,
    pub description: String,
    pub author: Author,
    pub created_at: DateTime<Utc>,
}

/// An implementation artifact built for an accepted [`Proposal`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
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

/// A comment attached to any content item by id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub subject_id: String,
    pub body: String,
    pub author: Author,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Votes
// =============================================================================

/// Kind of content a vote can be attached to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum VoteSubjectKind {
    #[serde(rename = "subidea")]
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

    /// Query parameter naming the subject on the read endpoint.
    pub fn query_key(&self) -> &'static str {
        match self {
            Self::SubIdea => "subIdeaId",
            Self::Prototype => "prototypeId",
        }
    }

    /// Parse from a path segment (`subideas` / `prototypes`).
    pub fn from_path_segment(segment: &str) -> Option<Self> {
        match segment {
            "subideas" => Some(Self::SubIdea),
            "prototypes" => Some(Self::Prototype),
            _ => None,
        }
    }
}

/// A single directional vote as sent on the wire (`1` or `-1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoteValue {
    Up,
    Down,
}

impl VoteValue {
    /// Signed contribution to the aggregate.
    pub fn as_i8(&self) -> i8 {
        match self {
            Self::Up => 1,
            Self::Down => -1,
        }
    }
}

impl TryFrom<i64> for VoteValue {
    type Error = i64;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Up),
            -1 => Ok(Self::Down),
            other => Err(other),
        }
    }
}

/// Aggregate tally for one subject.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct VoteCounts {
    pub total: i64,
}

/// Read-side vote payload: aggregate plus the requesting user's own vote.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct VoteSummary {
    pub vote_counts: VoteCounts,
    /// `-1`, `0` or `1`
    pub user_vote: i8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vote_value_accepts_only_unit_values() {
        assert_eq!(VoteValue::try_from(1), Ok(VoteValue::Up));
        assert_eq!(VoteValue::try_from(-1), Ok(VoteValue::Down));
        assert_eq!(VoteValue::try_from(0), Err(0));
        assert_eq!(VoteValue::try_from(2), Err(2));
    }

    #[test]
    fn test_vote_summary_wire_format() {
        let summary = VoteSummary {
            vote_counts: VoteCounts { total: 10 },
            user_vote: 1,
        };
        let json = serde_json::to_value(summary).unwrap();
        assert_eq!(json["voteCounts"]["total"], 10);
        assert_eq!(json["userVote"], 1);
    }

    #[test]
    fn test_subject_kind_segments() {
        assert_eq!(VoteSubjectKind::SubIdea.path_segment(), "subideas");
        assert_eq!(VoteSubjectKind::Prototype.query_key(), "prototypeId");
        assert_eq!(
            VoteSubjectKind::from_path_segment("prototypes"),
            Some(VoteSubjectKind::Prototype)
        );
        assert_eq!(VoteSubjectKind::from_path_segment("ideas"), None);
    }
}
