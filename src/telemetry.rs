//! Logging initialisation
//!
//! Events go to stderr so stdout only ever carries blobs and plaintext.

use tracing_subscriber::EnvFilter;

use crate::config::LogFormat;
use crate::error::{SealError, SealResult};

/// Environment variable holding a log filter that overrides the settings
pub const LOG_ENV: &str = "XSEAL_LOG";

/// Initialise the tracing subscriber.
///
/// # Errors
///
/// Returns an error if the subscriber has already been set.
pub fn init(log_level: &str, format: LogFormat) -> SealResult<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    result.map_err(|e| SealError::Config(format!("Failed to initialise logging: {}", e)))
}
