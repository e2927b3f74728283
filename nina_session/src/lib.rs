#![deny(
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

//! Per-chat session state kept in process memory.
//!
//! A session bundles the short conversation memory, the structured flow the
//! user is currently in, and the logs of completed check-ins and diary
//! entries. Nothing here survives a restart.

mod flow;
mod memory;
mod records;
mod store;

pub use flow::{DiaryStep, FlowState};
pub use memory::{DEFAULT_MEMORY_LIMIT, MemoryWindow};
pub use records::{CheckIn, DiaryEntry, RecordLog};
pub use store::{Session, SessionStore};
