//! Seed data for the in-memory store.
//!
//! `ideation seed > seed.json` prints the built-in demo content so it can be
//! edited and loaded back with `ideation serve --seed seed.json`.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{
    Author, Comment, Idea, Prototype, Proposal, SubIdea, User, VoteSubjectKind,
};

/// Id of the user every request acts as in development.
pub const DEV_USER_ID: &str = "user-1";

/// A single seeded vote.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedVote {
    pub kind: VoteSubjectKind,
    pub subject_id: String,
    pub user_id: String,
    /// `1` or `-1`; anything else is skipped on load
    pub value: i64,
}

/// Complete store snapshot used to populate a [`super::Store`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedData {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub ideas: Vec<Idea>,
    #[serde(default)]
    pub sub_ideas: Vec<SubIdea>,
    #[serde(default)]
    pub proposals: Vec<Proposal>,
    #[serde(default)]
    pub prototypes: Vec<Prototype>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub votes: Vec<SeedVote>,
}

fn user(id: &str, name: &str) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@ideation.dev", name.to_lowercase().replace(' ', ".")),
        avatar_url: None,
    }
}

fn at(base: DateTime<Utc>, hours: i64) -> DateTime<Utc> {
    base + Duration::hours(hours)
}

impl SeedData {
    /// Deterministic demo content with stable ids (`idea-1`, `subidea-1`, ...).
    pub fn demo() -> Self {
        let base = Utc
            .with_ymd_and_hms(2025, 3, 1, 9, 0, 0)
            .single()
            .unwrap_or_else(Utc::now);

        let users = vec![
            user(DEV_USER_ID, "Dev User"),
            user("user-2", "Ada Lovelace"),
            user("user-3", "Grace Hopper"),
            user("user-4", "Alan Turing"),
        ];
        let author = |idx: usize| Author::from(&users[idx]);

        let ideas = vec![
            Idea {
                id: "idea-1".into(),
                title: "Greener campus commutes".into(),
                description: "How can we cut car trips to campus by half within two years?"
                    .into(),
                author: author(1),
                tags: vec!["mobility".into(), "sustainability".into()],
                created_at: base,
            },
            Idea {
                id: "idea-2".into(),
                title: "Open data for local councils".into(),
                description: "Make council spending and planning data easy to explore.".into(),
                author: author(2),
                tags: vec!["civic-tech".into(), "data".into()],
                created_at: at(base, 24),
            },
        ];

        let sub_ideas = vec![
            SubIdea {
                id: "subidea-1".into(),
                idea_id: "idea-1".into(),
                title: "Bike pooling with shared e-bikes".into(),
                description: "Dock e-bikes at dorms and let students book rides in groups."
                    .into(),
                author: author(2),
                created_at: at(base, 2),
            },
            SubIdea {
                id: "subidea-2".into(),
                idea_id: "idea-1".into(),
                title: "Carpool matching by timetable".into(),
                description: "Match drivers and riders using their lecture schedules.".into(),
                author: author(3),
                created_at: at(base, 3),
            },
            SubIdea {
                id: "subidea-3".into(),
                idea_id: "idea-2".into(),
                title: "Spending map".into(),
                description: "Plot every council purchase on a city map.".into(),
                author: author(1),
                created_at: at(base, 26),
            },
        ];

        let proposals = vec![
            Proposal {
                id: "proposal-1".into(),
                sub_idea_id: "subidea-1".into(),
                title: "Booking app with group rides".into(),
                description: "A PWA that reserves a bike per rider and groups departures."
                    .into(),
                author: author(3),
                created_at: at(base, 5),
            },
            Proposal {
                id: "proposal-2".into(),
                sub_idea_id: "subidea-2".into(),
                title: "Timetable import and matching service".into(),
                description: "Import iCal timetables and compute overlapping commutes.".into(),
                author: author(1),
                created_at: at(base, 6),
            },
        ];

        let prototypes = vec![
            Prototype {
                id: "prototype-1".into(),
                proposal_id: "proposal-1".into(),
                title: "RideTogether alpha".into(),
                description: "Booking flow with a fake bike fleet.".into(),
                repository_url: Some("https://example.org/ridetogether".into()),
                demo_url: None,
                author: author(3),
                created_at: at(base, 48),
            },
            Prototype {
                id: "prototype-2".into(),
                proposal_id: "proposal-1".into(),
                title: "Dock status board".into(),
                description: "Live availability of docked bikes per dorm.".into(),
                repository_url: None,
                demo_url: Some("https://example.org/dock-board".into()),
                author: author(2),
                created_at: at(base, 50),
            },
        ];

        let comments = vec![
            Comment {
                id: "comment-1".into(),
                subject_id: "subidea-1".into(),
                body: "Would love this for the north dorms.".into(),
                author: author(3),
                created_at: at(base, 4),
            },
            Comment {
                id: "comment-2".into(),
                subject_id: "proposal-1".into(),
                body: "Group rides could also unlock a discount.".into(),
                author: author(1),
                created_at: at(base, 7),
            },
        ];

        let vote = |kind, subject: &str, user: &str, value| SeedVote {
            kind,
            subject_id: subject.to_string(),
            user_id: user.to_string(),
            value,
        };
        let votes = vec![
            vote(VoteSubjectKind::SubIdea, "subidea-1", "user-2", 1),
            vote(VoteSubjectKind::SubIdea, "subidea-1", "user-3", 1),
            vote(VoteSubjectKind::SubIdea, "subidea-1", "user-4", 1),
            vote(VoteSubjectKind::SubIdea, "subidea-2", "user-2", -1),
            vote(VoteSubjectKind::SubIdea, "subidea-3", "user-4", 1),
            vote(VoteSubjectKind::Prototype, "prototype-1", "user-2", 1),
            vote(VoteSubjectKind::Prototype, "prototype-1", "user-4", 1),
            vote(VoteSubjectKind::Prototype, "prototype-2", "user-3", 1),
        ];

        Self {
            users,
            ideas,
            sub_ideas,
            proposals,
            prototypes,
            comments,
            votes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_references_are_consistent() {
        let seed = SeedData::demo();
        assert!(seed.users.iter().any(|u| u.id == DEV_USER_ID));
        for sub in &seed.sub_ideas {
            assert!(seed.ideas.iter().any(|i| i.id == sub.idea_id));
        }
        for proposal in &seed.proposals {
            assert!(seed.sub_ideas.iter().any(|s| s.id == proposal.sub_idea_id));
        }
        for prototype in &seed.prototypes {
            assert!(seed.proposals.iter().any(|p| p.id == prototype.proposal_id));
        }
    }
}
