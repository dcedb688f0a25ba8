//! Pre-tool hook: file operation check before Edit/Write/MultiEdit.
//!
//! This is not a security boundary. Paths that look sensitive are reported
//! on the diagnostic stream and the operation is still allowed; the host's
//! own permission system decides.

use serde::Deserialize;
use tracing::{debug, warn};

use super::HookOutcome;

/// Path fragments that mark a file as sensitive.
pub const PROTECTED_PATTERNS: &[&str] = &[".env", "secrets/", ".ssh/", ".aws/", "credentials"];

/// Operation metadata passed by the host tool.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolInput {
    /// Target file of the operation.
    #[serde(default)]
    pub file_path: Option<String>,
}

impl ToolInput {
    /// Parse the host's JSON blob.
    ///
    /// Returns `None` for anything that is not a JSON object.
    pub fn parse(raw: &str) -> Option<Self> {
        let value: serde_json::Value = serde_json::from_str(raw).ok()?;
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value).ok()
    }

    /// Target file path, if present and non-empty.
    pub fn file_path(&self) -> Option<&str> {
        self.file_path.as_deref().filter(|p| !p.is_empty())
    }
}

/// Return the first protected pattern found in `file_path`, ignoring case.
pub fn protected_pattern(file_path: &str) -> Option<&'static str> {
    let lower = file_path.to_lowercase();
    PROTECTED_PATTERNS
        .iter()
        .copied()
        .find(|pattern| lower.contains(pattern))
}

/// Run the pre-tool hook against the host's raw tool input.
pub fn run(raw_input: &str) -> HookOutcome {
    let Some(input) = ToolInput::parse(raw_input) else {
        debug!("tool input is not a JSON object, allowing");
        return HookOutcome::Continue;
    };

    let Some(file_path) = input.file_path() else {
        debug!("tool input has no file_path, allowing");
        return HookOutcome::Continue;
    };

    if let Some(pattern) = protected_pattern(file_path) {
        warn!(
            file_path,
            pattern, "operation targets a protected path, deferring to host permissions"
        );
    }

    HookOutcome::Continue
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tool_input() {
        let input = ToolInput::parse(r#"{"file_path": "src/main.rs", "content": "fn main() {}"}"#)
            .unwrap();
        assert_eq!(input.file_path(), Some("src/main.rs"));
    }

    #[test]
    fn test_parse_rejects_non_objects() {
        assert!(ToolInput::parse("not json").is_none());
        assert!(ToolInput::parse(r#"["src/main.rs"]"#).is_none());
        assert!(ToolInput::parse("42").is_none());
    }

    #[test]
    fn test_empty_file_path() {
        let input = ToolInput::parse(r#"{"file_path": ""}"#).unwrap();
        assert_eq!(input.file_path(), None);

        let input = ToolInput::parse("{}").unwrap();
        assert_eq!(input.file_path(), None);
    }

    #[test]
    fn test_protected_patterns() {
        assert_eq!(protected_pattern("/app/.env.local"), Some(".env"));
        assert_eq!(protected_pattern("config/SECRETS/api.json"), Some("secrets/"));
        assert_eq!(protected_pattern("/home/me/.ssh/id_ed25519"), Some(".ssh/"));
        assert_eq!(protected_pattern("/home/me/.aws/config"), Some(".aws/"));
        assert_eq!(protected_pattern("db/Credentials.yml"), Some("credentials"));
        assert_eq!(protected_pattern("src/lib.rs"), None);
    }

    #[test]
    fn test_always_allows() {
        assert_eq!(run("{"), HookOutcome::Continue);
        assert_eq!(run("{}"), HookOutcome::Continue);
        assert_eq!(run(r#"{"file_path": "src/lib.rs"}"#), HookOutcome::Continue);
        assert_eq!(run(r#"{"file_path": ".env"}"#), HookOutcome::Continue);
    }
}
