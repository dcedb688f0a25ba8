//! Session-end hook: record the session end in the history.

use std::path::Path;

use super::HookOutcome;
use crate::history::{record_event_best_effort, SESSION_END};

/// Run the session-end hook against the history store at `store_path`.
///
/// Always continues; a failed write is reported on stderr only.
pub fn run(store_path: &Path) -> HookOutcome {
    record_event_best_effort(store_path, SESSION_END);
    HookOutcome::Continue
}
