use std::path::PathBuf;

use ohp_platform::app_dirs::PlatformAppDirs;
use onehousing_signin_lib::bootstrap::{self, config::CONFIG_ENV, tracing::init_tracing_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = bootstrap::resolve_config(
        &PlatformAppDirs::from_env(),
        std::env::var_os(CONFIG_ENV).map(PathBuf::from),
    )?;

    if let Err(err) = init_tracing_subscriber(&config.logs_dir) {
        eprintln!("Failed to initialize tracing: {err}");
    }

    bootstrap::run_app(config).await
}
