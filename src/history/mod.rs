//! Bounded session history.
//!
//! Session boundaries are recorded in a small JSON file that keeps only the
//! most recent [`MAX_SESSIONS`] events. Every invocation is an independent
//! read-modify-write of that file; nothing is held in memory between runs.

mod event;
mod store;

pub use event::{SessionEvent, SESSION_END};
pub use store::{record_event, record_event_best_effort, SessionHistory, MAX_SESSIONS};
