use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::ConstructionError;
use crate::settings::SETTINGS_FILE;

pub const DEFAULT_FILTER: &str = "creational_idioms=info";

/// `RUST_LOG` wins; otherwise `filter` must parse.
pub fn build_filter(filter: &str) -> Result<EnvFilter, ConstructionError> {
    if let Ok(from_env) = EnvFilter::try_from_default_env() {
        return Ok(from_env);
    }
    parse_filter(filter)
}

fn parse_filter(filter: &str) -> Result<EnvFilter, ConstructionError> {
    EnvFilter::try_new(filter).map_err(|err| {
        ConstructionError::settings(SETTINGS_FILE, format!("invalid log_filter {:?}: {}", filter, err))
    })
}

/// Installs the global subscriber.
///
/// Calling it twice is harmless: the second install is ignored.
pub fn init(filter: &str) -> Result<(), ConstructionError> {
    let filter = build_filter(filter)?;

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
    Ok(())
}
