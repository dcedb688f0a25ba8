//! JSON-backed session history store.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::SessionEvent;
use crate::error::HookError;
use crate::Result;

/// Maximum number of events retained in the history.
pub const MAX_SESSIONS: usize = 100;

/// Ordered session events, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionHistory {
    /// Recorded events.
    pub sessions: Vec<SessionEvent>,
    /// Other top-level keys, preserved across rewrites.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SessionHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the history stored at `path`.
    ///
    /// A missing file yields an empty history. A file that exists but does
    /// not parse, including empty files and invalid UTF-8, yields
    /// [`HookError::InvalidStore`].
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = std::fs::read(path)?;
        serde_json::from_slice(&content).map_err(|e| HookError::InvalidStore {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Write the full history to `path`, replacing any prior content.
    ///
    /// Parent directories are created as needed. The content is written to
    /// a sibling temp file first and renamed into place.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let tmp_path = sibling_path(path, ".tmp");
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&tmp_path, &content)?;
        std::fs::rename(&tmp_path, path)?;
        Ok(())
    }

    /// Append an event, evicting the oldest entries beyond [`MAX_SESSIONS`].
    pub fn push(&mut self, event: SessionEvent) {
        self.sessions.push(event);
        if self.sessions.len() > MAX_SESSIONS {
            let excess = self.sessions.len() - MAX_SESSIONS;
            self.sessions.drain(..excess);
        }
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether the history has no events.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Most recently recorded event.
    pub fn latest(&self) -> Option<&SessionEvent> {
        self.sessions.last()
    }
}

/// `path` with `suffix` appended to its file name.
fn sibling_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from("session_history.json"));
    name.push(suffix);
    path.with_file_name(name)
}

/// Load the history, moving an unparseable store aside to `<name>.corrupt`.
fn load_or_recover(path: &Path) -> Result<SessionHistory> {
    match SessionHistory::load(path) {
        Err(HookError::InvalidStore { reason, .. }) => {
            let backup = sibling_path(path, ".corrupt");
            std::fs::rename(path, &backup)?;
            warn!(
                store = %path.display(),
                backup = %backup.display(),
                %reason,
                "session history was unreadable, starting a new one"
            );
            Ok(SessionHistory::new())
        }
        other => other,
    }
}

/// Append an event of type `event_type` to the history stored at
/// `store_location`.
///
/// The store and its parent directories are created if absent. After a
/// successful call the store holds at most [`MAX_SESSIONS`] events, the
/// newest being the one just recorded.
pub fn record_event(store_location: &Path, event_type: &str) -> Result<()> {
    let mut history = load_or_recover(store_location)?;
    history.push(SessionEvent::now(event_type));
    history.save(store_location)?;

    debug!(
        store = %store_location.display(),
        event = event_type,
        entries = history.len(),
        "session event recorded"
    );
    Ok(())
}

/// Like [`record_event`], but failures are only reported on the diagnostic
/// stream. Used where telemetry must never block the host workflow.
///
/// Returns whether the event was recorded.
pub fn record_event_best_effort(store_location: &Path, event_type: &str) -> bool {
    match record_event(store_location, event_type) {
        Ok(()) => true,
        Err(e) => {
            debug!(store = %store_location.display(), error = %e, "session event not recorded");
            eprintln!("Warning: Cleanup failed: {}", e);
            false
        }
    }
}
