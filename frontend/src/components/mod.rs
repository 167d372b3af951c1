//! UI Components for the ideation portal.
//!
//! # Layout Components
//! - [`Header`] - Navigation bar with the current user
//! - [`Hero`] - Title, pitch and icon cloud
//! - [`Footer`] - Page footer
//! - [`Toasts`] - Transient notifications
//!
//! # Feature Components
//! - [`VoteWidget`] - Optimistic up/down voting
//! - [`IconSphere`] - Rotating icon cloud
//! - Cards ([`IdeaCard`], [`SubIdeaCard`], [`ProposalCard`], [`PrototypeCard`])
//! - Dialogs ([`NewIdeaDialog`], [`EntryDialog`], [`PrototypeDialog`])
//! - [`CommentThread`] - Comments on a sub-idea or proposal

mod header;
mod hero;
mod footer;
mod toasts;
mod vote;
mod icon_cloud;
mod cards;
mod dialogs;
mod comments;

pub use header::*;
pub use hero::*;
pub use footer::*;
pub use toasts::*;
pub use vote::*;
pub use icon_cloud::*;
pub use cards::*;
pub use dialogs::*;
pub use comments::*;
