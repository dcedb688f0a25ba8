//! Configuration for moai-hooks.
//!
//! Two kinds of configuration live here:
//!
//! - [`ProjectConfig`]: the read-only project file at
//!   `.moai/config/config.json`, owned by the project tooling.
//! - [`Settings`]: runtime settings for one hook invocation, resolved with
//!   the following priority (highest to lowest):
//!   1. Command-line arguments
//!   2. Environment variables
//!   3. Default values

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::cli::Args;

/// Project configuration file, relative to the project root.
pub const PROJECT_CONFIG_PATH: &str = ".moai/config/config.json";

/// Session history store, relative to the project root.
pub const SESSION_HISTORY_PATH: &str = ".moai/logs/session_history.json";

/// Environment variable carrying the host tool's operation metadata.
pub const TOOL_INPUT_ENV: &str = "CLAUDE_TOOL_INPUT";

/// Project configuration.
///
/// The file belongs to other tooling, so it is read leniently: the top level
/// and the `project`/`language` sections must be objects, but leaf values of
/// any type are accepted and `null` falls back to the default.
#[derive(Debug, Clone, Default)]
pub struct ProjectConfig {
    /// Project section.
    pub project: ProjectSection,
    /// Language section.
    pub language: LanguageSection,
}

/// Project configuration section.
#[derive(Debug, Clone)]
pub struct ProjectSection {
    /// Project name.
    pub name: String,
    /// Project mode (personal, team).
    pub mode: String,
}

impl Default for ProjectSection {
    fn default() -> Self {
        Self {
            name: "Unknown".to_string(),
            mode: "personal".to_string(),
        }
    }
}

/// Language configuration section.
#[derive(Debug, Clone)]
pub struct LanguageSection {
    /// Language used in conversation with the user.
    pub conversation_language: String,
}

impl Default for LanguageSection {
    fn default() -> Self {
        Self {
            conversation_language: "en".to_string(),
        }
    }
}

impl ProjectConfig {
    /// Load the project configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        let value: Value = serde_json::from_str(&content).map_err(ConfigError::Json)?;
        Self::from_value(&value)
    }

    /// Build the configuration from parsed JSON.
    pub fn from_value(value: &Value) -> Result<Self, ConfigError> {
        let root = value
            .as_object()
            .ok_or_else(|| ConfigError::Shape("top level is not an object".to_string()))?;
        let project = section(root, "project")?;
        let language = section(root, "language")?;

        let defaults = Self::default();
        Ok(Self {
            project: ProjectSection {
                name: leaf(project, "name").unwrap_or(defaults.project.name),
                mode: leaf(project, "mode").unwrap_or(defaults.project.mode),
            },
            language: LanguageSection {
                conversation_language: leaf(language, "conversation_language")
                    .unwrap_or(defaults.language.conversation_language),
            },
        })
    }

    /// Load the project configuration if the file exists.
    ///
    /// Returns `Ok(None)` when it does not, which means the project has not
    /// been initialized.
    pub fn load(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }
        Self::from_file(path).map(Some)
    }
}

fn section<'a>(
    root: &'a Map<String, Value>,
    name: &str,
) -> Result<Option<&'a Map<String, Value>>, ConfigError> {
    match root.get(name) {
        None => Ok(None),
        Some(Value::Object(map)) => Ok(Some(map)),
        Some(_) => Err(ConfigError::Shape(format!("`{}` is not an object", name))),
    }
}

fn leaf(section: Option<&Map<String, Value>>, key: &str) -> Option<String> {
    match section?.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Runtime settings for a single hook invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory the well-known relative paths are resolved against.
    pub project_root: PathBuf,
    /// Log filter directive, if one was configured.
    pub log_level: Option<String>,
    /// Raw JSON blob from the host tool.
    pub tool_input: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            project_root: PathBuf::from("."),
            log_level: None,
            tool_input: "{}".to_string(),
        }
    }
}

impl Settings {
    /// Apply environment variable overrides.
    pub fn apply_env(&mut self) {
        self.apply_env_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary variable lookup (for testing).
    pub fn apply_env_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup("MOAI_PROJECT_DIR").filter(|d| !d.is_empty()) {
            self.project_root = PathBuf::from(dir);
        }

        if let Some(level) = lookup("MOAI_HOOK_LOG_LEVEL") {
            self.log_level = Some(level);
        } else if let Some(level) = lookup("RUST_LOG") {
            self.log_level = Some(level);
        }

        if let Some(input) = lookup(TOOL_INPUT_ENV) {
            self.tool_input = input;
        }
    }

    /// Apply CLI argument overrides.
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(ref dir) = args.project_dir {
            self.project_root = dir.clone();
        }

        if let Some(ref level) = args.log_level {
            self.log_level = Some(level.clone());
        }
    }

    /// Resolve settings with full priority chain.
    ///
    /// Priority: CLI args > env vars > defaults
    pub fn load(args: &Args) -> Self {
        let mut settings = Settings::default();
        settings.apply_env();
        settings.apply_args(args);
        settings
    }

    /// Path to the project configuration file.
    pub fn project_config_path(&self) -> PathBuf {
        self.project_root.join(PROJECT_CONFIG_PATH)
    }

    /// Path to the session history store.
    pub fn session_history_path(&self) -> PathBuf {
        self.project_root.join(SESSION_HISTORY_PATH)
    }
}

/// Configuration errors.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error reading config file.
    Io(std::io::Error),
    /// JSON parsing error.
    Json(serde_json::Error),
    /// Valid JSON with an unexpected structure.
    Shape(String),
}

impl ConfigError {
    /// Whether the file was read but is not valid JSON.
    pub fn is_syntax(&self) -> bool {
        matches!(self, Self::Json(e) if e.is_syntax() || e.is_eof())
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read config file: {}", e),
            Self::Json(e) => write!(f, "failed to parse config file: {}", e),
            Self::Shape(msg) => write!(f, "unexpected config structure: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}
