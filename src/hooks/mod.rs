//! Lifecycle hook entry points.
//!
//! Each hook is a short-lived, synchronous invocation by the host tool.
//! Hooks never block the host workflow: every failure is contained here and
//! mapped to the hook's exit status, with details on stderr.
//!
//! ## Hooks
//!
//! - **pre-tool**: inspects the file path of an Edit/Write operation; always allows
//! - **session-start**: validates the project configuration
//! - **session-end**: appends to the bounded session history

pub mod pre_tool;
pub mod session_start;
pub mod session_end;

use std::panic::{self, AssertUnwindSafe};
use std::str::FromStr;

use tracing::debug;

use crate::config::Settings;

/// A lifecycle hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hook {
    /// Before a file-editing tool runs.
    PreTool,
    /// At session start.
    SessionStart,
    /// At session end.
    SessionEnd,
}

impl Hook {
    /// Name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::PreTool => "pre-tool",
            Self::SessionStart => "session-start",
            Self::SessionEnd => "session-end",
        }
    }

    /// Outcome reported when the hook fails unexpectedly.
    pub fn fallback(&self) -> HookOutcome {
        match self {
            Self::SessionStart => HookOutcome::Warning,
            Self::PreTool | Self::SessionEnd => HookOutcome::Continue,
        }
    }
}

impl std::fmt::Display for Hook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Hook {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pre-tool" => Ok(Self::PreTool),
            "session-start" => Ok(Self::SessionStart),
            "session-end" => Ok(Self::SessionEnd),
            other => Err(other.to_string()),
        }
    }
}

/// Result of running a hook, as seen by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookOutcome {
    /// Proceed with the host workflow.
    Continue,
    /// Proceed, but a warning was written to stderr.
    Warning,
}

impl HookOutcome {
    /// Process exit status for this outcome.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Continue => 0,
            Self::Warning => 1,
        }
    }
}

/// Run a hook, containing any panic raised by it.
pub fn run(hook: Hook, settings: &Settings) -> HookOutcome {
    debug!(hook = %hook, root = %settings.project_root.display(), "running hook");
    contain(hook, || dispatch(hook, settings))
}

/// Run `f`, mapping a panic to the hook's fallback outcome.
fn contain<F>(hook: Hook, f: F) -> HookOutcome
where
    F: FnOnce() -> HookOutcome,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(outcome) => outcome,
        Err(_) => {
            eprintln!("Warning: {} hook failed unexpectedly", hook);
            hook.fallback()
        }
    }
}

fn dispatch(hook: Hook, settings: &Settings) -> HookOutcome {
    match hook {
        Hook::PreTool => pre_tool::run(&settings.tool_input),
        Hook::SessionStart => session_start::run(&settings.project_config_path()),
        Hook::SessionEnd => session_end::run(&settings.session_history_path()),
    }
}
