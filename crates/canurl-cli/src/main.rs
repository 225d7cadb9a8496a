use canurl_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Logging goes to the state-dir file; stderr if that cannot be opened.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable: {:#}", err);
    }

    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("canurl error: {:#}", err);
        std::process::exit(1);
    }
}
