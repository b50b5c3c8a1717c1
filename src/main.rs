// Start of file: src/main.rs

use std::process::ExitCode;
use tracing::error;

use ping_service::config::environment::EnvironmentVariables;
use ping_service::core::{logging::init_tracing, server};

#[tokio::main]
async fn main() -> ExitCode {
    // set up logging
    init_tracing();

    let result: anyhow::Result<()> = match EnvironmentVariables::instance() {
        Ok(env) => server::run(env).await,
        Err(err) => Err(err),
    };

    // Startup failures are fatal; nothing is retried
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("Failed to start server: {err:#}");
            ExitCode::FAILURE
        }
    }
}

// End of file: src/main.rs
