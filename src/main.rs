// Alliance board entry point.
//
// Startup sequence:
// 1. Initialize tracing (log to file, not terminal)
// 2. Load config
// 3. Load the roster snapshot (embedded default or configured export)
// 4. Run the TUI event loop until the user quits

use alliance_board::config;
use alliance_board::data;
use alliance_board::tui;

use anyhow::Context;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;
    info!("Alliance board starting up");

    let config = config::load_config().context("failed to load configuration")?;
    info!(
        "Config loaded: locale={:?}, chart_top_n={}, squad target {:.0}%±{:.0}%",
        config.locale,
        config.chart_top_n,
        config.squads.target_ratio * 100.0,
        config.squads.tolerance * 100.0
    );

    let snapshot = data::load_snapshot(config.roster_path.as_deref())
        .context("failed to load roster snapshot")?;
    info!(
        "Roster loaded: {} players, snapshot date {:?}",
        snapshot.players.len(),
        snapshot.generated_at
    );

    tui::run(snapshot, config).await?;

    info!("Alliance board shut down cleanly");
    Ok(())
}

/// Initialize tracing to log to a file (not the terminal, which is used by the TUI).
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = std::env::current_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::File::create(log_dir.join("allyboard.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("alliance_board=info,warn")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
