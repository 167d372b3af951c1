//! Static showcase data for the hackathon and leaderboard pages.

use chrono::NaiveDate;

use crate::types::{Hackathon, HackathonStatus, LeaderboardEntry};

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn hackathons() -> Vec<Hackathon> {
    vec![
        Hackathon {
            id: "hack-mobility",
            title: "Urban Mobility Sprint",
            summary: "48 hours to prototype greener ways of moving through the city.",
            location: "Lyon",
            starts_on: "2025-04-12",
            ends_on: "2025-04-13",
            prize: "€5,000",
            participants: 86,
        },
        Hackathon {
            id: "hack-health",
            title: "Open Health Data",
            summary: "Build tools that make public health datasets usable by everyone.",
            location: "Remote",
            starts_on: "2025-06-20",
            ends_on: "2025-06-22",
            prize: "€3,000",
            participants: 142,
        },
        Hackathon {
            id: "hack-rust",
            title: "Rust for Good",
            summary: "Systems programming for civic tech, from embedded sensors to web services.",
            location: "Berlin",
            starts_on: "2025-10-03",
            ends_on: "2025-10-05",
            prize: "€8,000",
            participants: 64,
        },
        Hackathon {
            id: "hack-climate",
            title: "Climate Hack",
            summary: "Measure, visualize and reduce the footprint of local communities.",
            location: "Amsterdam",
            starts_on: "2026-03-14",
            ends_on: "2026-03-15",
            prize: "€10,000",
            participants: 120,
        },
    ]
}

impl Hackathon {
    /// Status on `today`. Unparseable dates count as upcoming.
    pub fn status(&self, today: NaiveDate) -> HackathonStatus {
        let start = NaiveDate::parse_from_str(self.starts_on, DATE_FORMAT);
        let end = NaiveDate::parse_from_str(self.ends_on, DATE_FORMAT);
        match (start, end) {
            (Ok(start), _) if today < start => HackathonStatus::Upcoming,
            (Ok(_), Ok(end)) if today > end => HackathonStatus::Finished,
            (Ok(_), Ok(_)) => HackathonStatus::Live,
            _ => HackathonStatus::Upcoming,
        }
    }
}

pub fn leaderboard() -> Vec<LeaderboardEntry> {
    ranked(vec![
        LeaderboardEntry { name: "Ada Lovelace", points: 1280, prototypes: 6, proposals: 11 },
        LeaderboardEntry { name: "Grace Hopper", points: 1175, prototypes: 5, proposals: 9 },
        LeaderboardEntry { name: "Alan Turing", points: 1175, prototypes: 4, proposals: 12 },
        LeaderboardEntry { name: "Dev User", points: 640, prototypes: 2, proposals: 5 },
        LeaderboardEntry { name: "Katherine Johnson", points: 905, prototypes: 3, proposals: 8 },
        LeaderboardEntry { name: "Linus Torvalds", points: 410, prototypes: 1, proposals: 3 },
    ])
}

/// Sort by points descending, ties by name.
pub fn ranked(mut entries: Vec<LeaderboardEntry>) -> Vec<LeaderboardEntry> {
    entries.sort_by(|a, b| b.points.cmp(&a.points).then_with(|| a.name.cmp(b.name)));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    #[test]
    fn test_leaderboard_order() {
        let board = leaderboard();
        let names: Vec<_> = board.iter().map(|e| e.name).collect();
        assert_eq!(names[0], "Ada Lovelace");
        // Equal points fall back to name order
        assert_eq!(names[1], "Alan Turing");
        assert_eq!(names[2], "Grace Hopper");
        assert!(board.windows(2).all(|w| w[0].points >= w[1].points));
    }

    #[test]
    fn test_hackathon_status() {
        let hack = &hackathons()[0];
        assert_eq!(hack.status(date("2025-04-01")), HackathonStatus::Upcoming);
        assert_eq!(hack.status(date("2025-04-12")), HackathonStatus::Live);
        assert_eq!(hack.status(date("2025-04-13")), HackathonStatus::Live);
        assert_eq!(hack.status(date("2025-04-14")), HackathonStatus::Finished);
    }

    #[test]
    fn test_hackathon_ids_are_unique() {
        let hacks = hackathons();
        let mut ids: Vec<_> = hacks.iter().map(|h| h.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), hacks.len());
    }
}
