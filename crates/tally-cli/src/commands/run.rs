//! Interactive shell run loop.

use tracing::info;

use tally_core::config::AppConfig;
use tally_core::error::AppError;

use crate::shell::Shell;

/// Start the shell, then shut it down in order on Ctrl-C.
pub async fn execute(config: &AppConfig) -> Result<(), AppError> {
    let shell = Shell::start(config);
    info!("Press Ctrl-C to exit");

    let waited = tokio::signal::ctrl_c().await;

    shell.shutdown();

    waited?;
    Ok(())
}
