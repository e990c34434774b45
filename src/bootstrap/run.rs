use std::sync::Arc;

use ohp_core::config::AppConfig;
use tokio::io::BufReader;
use tracing::info;

use crate::bootstrap::build_runtime;
use crate::shell::Console;

/// Run the console app on stdin/stdout until input ends.
pub async fn run_app(config: AppConfig) -> anyhow::Result<()> {
    let console = Arc::new(Console::stdout());
    let runtime = build_runtime(&config, console)?;

    info!("app started");
    runtime
        .session
        .run(BufReader::new(tokio::io::stdin()))
        .await
}
