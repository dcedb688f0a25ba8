//! moai-hook binary entry point.

use std::process::ExitCode;

use moai_hooks::{cli, hooks, logging, Settings};
use tracing::debug;

/// Exit status for an invocation the binary could not make sense of.
///
/// Kept at 1: hosts treat 2 as "block the operation".
const USAGE_ERROR: u8 = 1;

fn main() -> ExitCode {
    let args = match cli::parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Run 'moai-hook --help' for usage.");
            return ExitCode::from(USAGE_ERROR);
        }
    };

    if args.help {
        cli::print_help();
        return ExitCode::SUCCESS;
    }

    if args.version {
        cli::print_version();
        return ExitCode::SUCCESS;
    }

    let Some(hook) = args.hook else {
        eprintln!("Error: missing hook name");
        eprintln!("Run 'moai-hook --help' for usage.");
        return ExitCode::from(USAGE_ERROR);
    };

    let settings = Settings::load(&args);
    logging::init(settings.log_level.as_deref());
    debug!("moai-hook v{}", env!("CARGO_PKG_VERSION"));

    let outcome = hooks::run(hook, &settings);
    debug!(hook = %hook, ?outcome, "hook finished");

    ExitCode::from(outcome.exit_code())
}
