//! Verification interaction handling.
//!
//! `handler.rs` converts each gateway interaction into an [`event::InteractionEvent`]
//! and a [`reply::PendingReply`], then hands both to the [`controller::VerifyController`].
//! Flows return an [`outcome::Outcome`]; only [`report`] writes to the reply.

pub mod api;
pub mod controller;
pub mod event;
pub mod fault;
pub mod ids;
pub mod outcome;
pub mod panel;
pub mod reply;
pub mod report;
