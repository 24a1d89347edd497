use tracing_subscriber::EnvFilter;

use crate::ScoringConfig;

/// Installs the global subscriber. `RUST_LOG` wins over `logging.level` when set.
pub fn setup_logging(config: &ScoringConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);
    let installed = if config.logging.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    match installed {
        Ok(()) => tracing::debug!(
            level = %config.logging.level,
            json = config.logging.json,
            "logging initialized"
        ),
        Err(err) => eprintln!("logging already initialized: {err}"),
    }
}
