use std::process::ExitCode;

use clap::Parser;
use fluentclip::bootstrap::{self, tracing::LogProfile, AppContext};
use fluentclip::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match bootstrap::load_app_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("fluentclip: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    let ctx = match AppContext::from_config(&config) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("fluentclip: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let command = cli.command();
    let profile = LogProfile::for_command(&command);
    let logs_dir = (ctx.file_logging && profile == LogProfile::Daemon)
        .then_some(ctx.paths.logs_dir.as_path());
    // Keeps the file writer flushing until main returns.
    let _log_guard = match bootstrap::tracing::init_tracing_subscriber(logs_dir, profile) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("fluentclip: failed to initialize logging: {e:#}");
            None
        }
    };

    let mut stdout = std::io::stdout();
    match fluentclip::execute(command, &ctx, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "Command failed");
            eprintln!("fluentclip: {e:#}");
            ExitCode::FAILURE
        }
    }
}
