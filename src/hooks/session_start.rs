//! Session-start hook: project configuration check.

use std::path::Path;

use tracing::debug;

use super::HookOutcome;
use crate::config::{ConfigError, ProjectConfig};

/// Run the session-start hook against the project config at `config_path`.
///
/// A missing config means the project is not initialized and is accepted
/// silently. A config that cannot be read or parsed yields a warning.
pub fn run(config_path: &Path) -> HookOutcome {
    match ProjectConfig::load(config_path) {
        Ok(None) => {
            debug!(path = %config_path.display(), "no project config, project not initialized");
            HookOutcome::Continue
        }
        Ok(Some(config)) => {
            debug!(
                name = %config.project.name,
                mode = %config.project.mode,
                language = %config.language.conversation_language,
                "project config is valid"
            );
            HookOutcome::Continue
        }
        Err(e) => {
            report(&e);
            HookOutcome::Warning
        }
    }
}

fn report(err: &ConfigError) {
    if err.is_syntax() {
        eprintln!("Warning: Invalid config.json format");
    } else {
        eprintln!("Warning: {}", err);
    }
}
