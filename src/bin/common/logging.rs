//! Tracing setup shared by the demo binaries.

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Installs a stderr subscriber at INFO, or DEBUG when `verbose` is set.
pub fn setup_logging(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
