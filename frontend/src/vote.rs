//! Optimistic voting with server reconciliation.
//!
//! A vote widget shows a tally and two directional controls. Clicks are
//! applied locally right away ([`VoteState::apply`]), the raw vote value is
//! written to the backend, and then the authoritative summary is fetched
//! again ([`VoteController::cast`]). The fetched summary always replaces the
//! optimistic state, so the displayed tally converges to the server's.
//!
//! ```text
//!            click               write settled            fetch settled
//!   Idle ─────────────▶ Optimistic ─────────────▶ Reconciling ─────────▶ Idle
//! ```
//!
//! Write failures are logged and swallowed; the reconciling fetch is the only
//! correction. Overlapping clicks are not cancelled: whichever fetch resolves
//! last wins.
//!
//! The controller is independent of the UI framework: it talks to a
//! [`VoteSource`] (the REST client in production) and publishes state through
//! a [`VoteCell`] (a Leptos signal in the widget).

use std::cell::RefCell;

use crate::types::{AppResult, VoteSubject, VoteSummary};

// =============================================================================
// State machine
// =============================================================================

/// Direction of the current user's vote.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoteDirection {
    Up,
    Down,
}

impl VoteDirection {
    /// Raw value sent to the backend.
    pub fn value(&self) -> i8 {
        match self {
            Self::Up => 1,
            Self::Down => -1,
        }
    }

    /// Direction from the backend's `userVote` (sign only; `0` is none).
    pub fn from_user_vote(user_vote: i8) -> Option<Self> {
        match user_vote.signum() {
            1 => Some(Self::Up),
            -1 => Some(Self::Down),
            _ => None,
        }
    }
}

/// Where the widget is in the optimistic/reconcile cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum VotePhase {
    #[default]
    Idle,
    /// Local delta applied, write in flight
    Optimistic,
    /// Write settled, authoritative fetch in flight
    Reconciling,
}

/// Result of one click: the new direction and the tally delta.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub direction: Option<VoteDirection>,
    pub delta: i64,
}

/// Transition table shared by both controls.
///
/// | current  | clicked | new      | delta        |
/// |----------|---------|----------|--------------|
/// | none     | d       | d        | +sign(d)     |
/// | d        | d       | none     | -sign(d)     |
/// | opposite | d       | d        | +2 * sign(d) |
pub fn transition(current: Option<VoteDirection>, clicked: VoteDirection) -> Transition {
    let sign = i64::from(clicked.value());
    match current {
        None => Transition {
            direction: Some(clicked),
            delta: sign,
        },
        Some(dir) if dir == clicked => Transition {
            direction: None,
            delta: -sign,
        },
        Some(_) => Transition {
            direction: Some(clicked),
            delta: 2 * sign,
        },
    }
}

/// Local state of one vote widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VoteState {
    pub votes: i64,
    pub direction: Option<VoteDirection>,
    /// True until the first fetch settles; controls are disabled meanwhile
    pub loading: bool,
    pub phase: VotePhase,
}

impl Default for VoteState {
    fn default() -> Self {
        Self::new(0)
    }
}

impl VoteState {
    /// Initial (loading) state showing the hint tally.
    pub fn new(initial_votes: i64) -> Self {
        Self {
            votes: initial_votes,
            direction: None,
            loading: true,
            phase: VotePhase::Idle,
        }
    }

    /// Apply a click optimistically and return the raw value to write.
    pub fn apply(&mut self, clicked: VoteDirection) -> i8 {
        let step = transition(self.direction, clicked);
        self.votes += step.delta;
        self.direction = step.direction;
        self.phase = VotePhase::Optimistic;
        clicked.value()
    }

    pub fn upvote(&mut self) -> i8 {
        self.apply(VoteDirection::Up)
    }

    pub fn downvote(&mut self) -> i8 {
        self.apply(VoteDirection::Down)
    }

    pub fn begin_reconcile(&mut self) {
        self.phase = VotePhase::Reconciling;
    }

    /// Replace local state with the server's.
    pub fn reconcile(&mut self, summary: VoteSummary) {
        self.votes = summary.vote_counts.total;
        self.direction = VoteDirection::from_user_vote(summary.user_vote);
        self.loading = false;
        self.phase = VotePhase::Idle;
    }

    /// Fetch failed: show the hint tally and no direction.
    pub fn fallback(&mut self, initial_votes: i64) {
        self.votes = initial_votes;
        self.direction = None;
        self.loading = false;
        self.phase = VotePhase::Idle;
    }

    pub fn is_up_active(&self) -> bool {
        self.direction == Some(VoteDirection::Up)
    }

    pub fn is_down_active(&self) -> bool {
        self.direction == Some(VoteDirection::Down)
    }
}

// =============================================================================
// Seams
// =============================================================================

/// Remote side of voting.
#[allow(async_fn_in_trait)]
pub trait VoteSource {
    /// Authoritative summary for the current user.
    async fn fetch_votes(&self, subject: &VoteSubject) -> AppResult<VoteSummary>;

    /// Write a raw vote value (`1` or `-1`). Repeating a value removes the vote.
    async fn submit_vote(&self, subject: &VoteSubject, value: i8) -> AppResult<()>;
}

/// Where the controller publishes state.
pub trait VoteCell {
    fn get(&self) -> VoteState;
    fn set(&self, state: VoteState);

    fn update(&self, f: impl FnOnce(&mut VoteState)) {
        let mut state = self.get();
        f(&mut state);
        self.set(state);
    }
}

impl VoteCell for RefCell<VoteState> {
    fn get(&self) -> VoteState {
        *self.borrow()
    }

    fn set(&self, state: VoteState) {
        *self.borrow_mut() = state;
    }
}

// =============================================================================
// Controller
// =============================================================================

/// Drives one widget's optimistic/reconcile cycle against a [`VoteSource`].
#[derive(Clone, Debug)]
pub struct VoteController<S> {
    source: S,
    subject: VoteSubject,
    initial_votes: i64,
}

impl<S: VoteSource> VoteController<S> {
    pub fn new(source: S, subject: VoteSubject, initial_votes: i64) -> Self {
        Self {
            source,
            subject,
            initial_votes,
        }
    }

    /// Fetch the authoritative summary; fall back silently on error.
    pub async fn initialize(&self, cell: &impl VoteCell) {
        match self.source.fetch_votes(&self.subject).await {
            Ok(summary) => cell.update(|s| s.reconcile(summary)),
            Err(e) => {
                log::warn!(
                    "Could not load votes for {} {}: {}",
                    self.subject.kind.path_segment(),
                    self.subject.id,
                    e
                );
                let hint = self.initial_votes;
                cell.update(|s| s.fallback(hint));
            }
        }
    }

    /// Optimistic click, write, then exactly one reconciling fetch.
    pub async fn cast(&self, clicked: VoteDirection, cell: &impl VoteCell) {
        let mut value = 0;
        cell.update(|s| value = s.apply(clicked));

        if let Err(e) = self.source.submit_vote(&self.subject, value).await {
            log::error!(
                "Vote {:+} on {} {} failed: {}",
                value,
                self.subject.kind.path_segment(),
                self.subject.id,
                e
            );
        }

        cell.update(VoteState::begin_reconcile);
        self.initialize(cell).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AppError, VoteCounts};
    use futures::executor::block_on;
    use std::cell::Cell;
    use std::collections::VecDeque;

    fn summary(total: i64, user_vote: i8) -> VoteSummary {
        VoteSummary {
            vote_counts: VoteCounts { total },
            user_vote,
        }
    }

    /// Scripted source that records every call.
    #[derive(Default)]
    struct FakeSource {
        fetches: RefCell<VecDeque<AppResult<VoteSummary>>>,
        fail_writes: bool,
        fetch_calls: Cell<usize>,
        writes: RefCell<Vec<i8>>,
    }

    impl FakeSource {
        fn with_fetches(fetches: Vec<AppResult<VoteSummary>>) -> Self {
            Self {
                fetches: RefCell::new(fetches.into()),
                ..Self::default()
            }
        }
    }

    impl VoteSource for &FakeSource {
        async fn fetch_votes(&self, _subject: &VoteSubject) -> AppResult<VoteSummary> {
            self.fetch_calls.set(self.fetch_calls.get() + 1);
            self.fetches
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(AppError::Network("no scripted response".into())))
        }

        async fn submit_vote(&self, _subject: &VoteSubject, value: i8) -> AppResult<()> {
            self.writes.borrow_mut().push(value);
            if self.fail_writes {
                Err(AppError::Network("offline".into()))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_upvote_table() {
        assert_eq!(
            transition(None, VoteDirection::Up),
            Transition { direction: Some(VoteDirection::Up), delta: 1 }
        );
        assert_eq!(
            transition(Some(VoteDirection::Up), VoteDirection::Up),
            Transition { direction: None, delta: -1 }
        );
        assert_eq!(
            transition(Some(VoteDirection::Down), VoteDirection::Up),
            Transition { direction: Some(VoteDirection::Up), delta: 2 }
        );
    }

    #[test]
    fn test_downvote_table_mirrors_upvote() {
        assert_eq!(
            transition(None, VoteDirection::Down),
            Transition { direction: Some(VoteDirection::Down), delta: -1 }
        );
        assert_eq!(
            transition(Some(VoteDirection::Down), VoteDirection::Down),
            Transition { direction: None, delta: 1 }
        );
        assert_eq!(
            transition(Some(VoteDirection::Up), VoteDirection::Down),
            Transition { direction: Some(VoteDirection::Down), delta: -2 }
        );
    }

    #[test]
    fn test_upvote_twice_from_neutral() {
        let mut state = VoteState::new(5);
        assert_eq!(state.upvote(), 1);
        assert_eq!(state.votes, 6);
        assert!(state.is_up_active());
        assert_eq!(state.phase, VotePhase::Optimistic);

        assert_eq!(state.upvote(), 1);
        assert_eq!(state.votes, 5);
        assert_eq!(state.direction, None);
    }

    #[test]
    fn test_downvote_while_up() {
        let mut state = VoteState::new(0);
        state.reconcile(summary(7, 1));
        assert_eq!(state.downvote(), -1);
        assert_eq!(state.votes, 5);
        assert!(state.is_down_active());
    }

    #[test]
    fn test_click_sequences_follow_table() {
        use VoteDirection::{Down, Up};
        let cases: [(&[VoteDirection], i64, Option<VoteDirection>); 5] = [
            (&[Up, Up, Up], 11, Some(Up)),
            (&[Down, Up, Down, Down], 10, None),
            (&[Up, Down, Up, Down, Up], 11, Some(Up)),
            (&[Down, Down, Down, Down], 10, None),
            (&[Up, Down, Down, Up, Up, Down], 9, Some(Down)),
        ];

        for (clicks, votes, direction) in cases {
            let mut state = VoteState::new(10);
            for &click in clicks {
                state.apply(click);
            }
            assert_eq!((state.votes, state.direction), (votes, direction), "clicks {:?}", clicks);
        }
    }

    #[test]
    fn test_server_state_renders_active_upvote() {
        let source = FakeSource::with_fetches(vec![Ok(summary(10, 1))]);
        let controller = VoteController::new(&source, VoteSubject::sub_idea("s1"), 0);
        let cell = RefCell::new(VoteState::new(0));

        block_on(controller.initialize(&cell));

        let state = cell.get();
        assert_eq!(state.votes, 10);
        assert!(state.is_up_active());
        assert!(!state.loading);
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let source = FakeSource::with_fetches(vec![Ok(summary(3, -1)), Ok(summary(3, -1))]);
        let controller = VoteController::new(&source, VoteSubject::prototype("p1"), 0);
        let cell = RefCell::new(VoteState::new(0));

        block_on(controller.initialize(&cell));
        let first = cell.get();
        block_on(controller.initialize(&cell));
        let second = cell.get();

        assert_eq!((first.votes, first.direction), (second.votes, second.direction));
        assert_eq!(second.direction, Some(VoteDirection::Down));
    }

    #[test]
    fn test_fetch_failure_falls_back_to_hint() {
        let source = FakeSource::with_fetches(vec![Err(AppError::Network("down".into()))]);
        let controller = VoteController::new(&source, VoteSubject::sub_idea("s1"), 4);
        let cell = RefCell::new(VoteState::new(4));

        block_on(controller.initialize(&cell));

        let state = cell.get();
        assert_eq!(state.votes, 4);
        assert_eq!(state.direction, None);
        assert!(!state.loading);
    }

    #[test]
    fn test_cast_writes_raw_value_then_reconciles() {
        let source = FakeSource::with_fetches(vec![Ok(summary(2, 0)), Ok(summary(9, 1))]);
        let controller = VoteController::new(&source, VoteSubject::sub_idea("s1"), 0);
        let cell = RefCell::new(VoteState::new(0));

        block_on(controller.initialize(&cell));
        block_on(controller.cast(VoteDirection::Up, &cell));

        assert_eq!(*source.writes.borrow(), vec![1]);
        assert_eq!(source.fetch_calls.get(), 2);
        // Server value wins over the optimistic 3
        let state = cell.get();
        assert_eq!(state.votes, 9);
        assert_eq!(state.phase, VotePhase::Idle);
    }

    #[test]
    fn test_toggle_off_resends_same_value() {
        let source = FakeSource::with_fetches(vec![Ok(summary(1, 1)), Ok(summary(0, 0))]);
        let controller = VoteController::new(&source, VoteSubject::prototype("p1"), 0);
        let cell = RefCell::new(VoteState::new(0));

        block_on(controller.initialize(&cell));
        block_on(controller.cast(VoteDirection::Up, &cell));

        assert_eq!(*source.writes.borrow(), vec![1]);
        assert_eq!(cell.get().direction, None);
    }

    #[test]
    fn test_write_failure_still_reconciles_once() {
        let source = FakeSource {
            fetches: RefCell::new(vec![Ok(summary(5, 0))].into()),
            fail_writes: true,
            ..FakeSource::default()
        };
        let controller = VoteController::new(&source, VoteSubject::sub_idea("s1"), 0);
        let cell = RefCell::new(VoteState::new(0));
        cell.update(|s| s.reconcile(summary(5, 0)));

        block_on(controller.cast(VoteDirection::Down, &cell));

        assert_eq!(source.fetch_calls.get(), 1);
        let state = cell.get();
        assert_eq!(state.votes, 5);
        assert_eq!(state.direction, None);
    }
}
