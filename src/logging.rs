use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber.  Logs go to stderr so stdout stays clean
/// for the hand-off and `fmt` output.
///
/// `RUST_LOG` overrides `level` when set.
pub fn init(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
