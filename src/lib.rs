//! # moai-hooks
//!
//! Lifecycle hooks for AI coding assistant sessions.
//!
//! The host tool runs the `moai-hook` binary at well-defined moments: before
//! a file-editing tool runs, at session start and at session end. Each
//! invocation is short-lived and never blocks the host workflow.
//!
//! ## Features
//!
//! - **Pre-tool check**: inspects the target path of Edit/Write operations
//! - **Config check**: validates `.moai/config/config.json` at session start
//! - **Session history**: bounded JSON log of the last 100 session events
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//!
//! fn main() -> moai_hooks::Result<()> {
//!     moai_hooks::logging::try_init(None).ok();
//!
//!     let store = Path::new(".moai/logs/session_history.json");
//!     moai_hooks::record_event(store, moai_hooks::history::SESSION_END)?;
//!
//!     let history = moai_hooks::SessionHistory::load(store)?;
//!     println!("{} sessions recorded", history.len());
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod history;
pub mod hooks;
pub mod logging;

// Re-export commonly used types
pub use config::{ProjectConfig, Settings};
pub use error::{HookError, Result};
pub use history::{record_event, record_event_best_effort, SessionEvent, SessionHistory};
pub use hooks::{Hook, HookOutcome};
