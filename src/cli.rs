//! Command-line interface for moai-hook.
//!
//! Uses lexopt for minimal binary size overhead.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::hooks::Hook;

/// Command-line arguments.
#[derive(Debug, Clone, Default)]
pub struct Args {
    /// Hook to run.
    pub hook: Option<Hook>,
    /// Project root (defaults to the current directory).
    pub project_dir: Option<PathBuf>,
    /// Log level (error, warn, info, debug, trace).
    pub log_level: Option<String>,
    /// Show version and exit.
    pub version: bool,
    /// Show help and exit.
    pub help: bool,
}

/// Parse command-line arguments.
pub fn parse_args() -> Result<Args, ArgsError> {
    parse_args_from(std::env::args_os())
}

/// Parse arguments from an iterator (for testing).
pub fn parse_args_from<I>(args: I) -> Result<Args, ArgsError>
where
    I: IntoIterator<Item = OsString>,
{
    use lexopt::prelude::*;

    let mut result = Args::default();
    let mut parser = lexopt::Parser::from_iter(args);

    while let Some(arg) = parser.next()? {
        match arg {
            Short('h') | Long("help") => {
                result.help = true;
            }
            Short('V') | Long("version") => {
                result.version = true;
            }
            Short('C') | Long("project-dir") => {
                result.project_dir = Some(parser.value()?.parse()?);
            }
            Short('l') | Long("log-level") => {
                result.log_level = Some(parser.value()?.parse()?);
            }
            Value(val) if result.hook.is_none() => {
                let name = val.to_string_lossy().into_owned();
                let hook = name
                    .parse()
                    .map_err(|_| ArgsError::UnknownHook(name.clone()))?;
                result.hook = Some(hook);
            }
            Value(val) => {
                return Err(ArgsError::UnexpectedArgument(val.to_string_lossy().into()));
            }
            _ => return Err(arg.unexpected().into()),
        }
    }

    Ok(result)
}

/// Print help message.
pub fn print_help() {
    let version = env!("CARGO_PKG_VERSION");
    println!(
        r#"moai-hook {version}
Lifecycle hooks for AI coding assistant sessions

USAGE:
    moai-hook [OPTIONS] <HOOK>

HOOKS:
    pre-tool        Validate a file operation before Edit/Write/MultiEdit
    session-start   Validate the project configuration
    session-end     Record the session end in the session history

OPTIONS:
    -C, --project-dir <DIR>  Project root [default: current directory]
    -l, --log-level <LVL>    Log level (error, warn, info, debug, trace)
    -h, --help               Print help
    -V, --version            Print version

ENVIRONMENT VARIABLES:
    CLAUDE_TOOL_INPUT        Tool input JSON passed by the host (pre-tool)
    MOAI_PROJECT_DIR         Project root (overridden by --project-dir)
    MOAI_HOOK_LOG_LEVEL      Log level (overridden by --log-level)
    RUST_LOG                 Alternative log level setting

FILES:
    .moai/config/config.json         Project configuration (read-only)
    .moai/logs/session_history.json  Last 100 session events
"#
    );
}

/// Print version.
pub fn print_version() {
    println!("moai-hook {}", env!("CARGO_PKG_VERSION"));
}

/// Argument parsing errors.
#[derive(Debug)]
pub enum ArgsError {
    /// Lexopt parsing error.
    Lexopt(lexopt::Error),
    /// Hook name is not recognized.
    UnknownHook(String),
    /// Unexpected positional argument.
    UnexpectedArgument(String),
}

impl std::fmt::Display for ArgsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lexopt(e) => write!(f, "{}", e),
            Self::UnknownHook(name) => {
                write!(
                    f,
                    "unknown hook: '{}' (expected pre-tool, session-start or session-end)",
                    name
                )
            }
            Self::UnexpectedArgument(arg) => {
                write!(f, "unexpected argument: '{}'", arg)
            }
        }
    }
}

impl std::error::Error for ArgsError {}

impl From<lexopt::Error> for ArgsError {
    fn from(e: lexopt::Error) -> Self {
        Self::Lexopt(e)
    }
}
