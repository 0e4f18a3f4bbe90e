//! Backfill command - one-off creation of missing public profiles

use tracing::info;

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// Run the profile backfill over the whole user directory
///
/// A directory or store fault aborts the run with a nonzero exit; profiles
/// created before the fault remain, so rerunning is safe.
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_else(|e| {
        // Logging is not initialized yet, so stderr is all we have.
        eprintln!("Failed to load configuration, using defaults: {}", e);
        AppConfig::default()
    });
    logging::init_logging(&config.logging);

    let state = crate::create_app_state();

    let summary = state.profile_service.backfill().await?;

    info!(
        scanned = summary.scanned,
        created = summary.created,
        existing = summary.existing,
        "Backfill finished"
    );

    Ok(())
}
