#![warn(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Turn handling for the Nina assistant.
//!
//! The `Router` classifies each inbound message, drives the check-in and
//! diary flows, and falls back to the `ConversationEngine` for free text.
//!
//! # Key Features
//! - Slash commands with static educational replies
//! - Multi-step check-in and diary flows per chat
//! - Bounded conversation memory fed to the completion backend
//! - Summary of recent check-ins and diary entries

mod checkin;
mod command;
mod engine;
mod router;
mod summary;
mod turn;

pub use checkin::{CheckinParseError, parse_scores};
pub use command::Command;
pub use engine::{ConversationEngine, ConversationError, EngineConfig};
pub use router::{DEFAULT_SUMMARY_LIMIT, Router};
pub use summary::render_summary;
pub use turn::run_turn;
