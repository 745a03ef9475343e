//! Logging setup and request tracing middleware.

use thiserror::Error;

use crate::config::ServerConfig;

mod logging;
mod request;
mod settings;

pub(crate) use request::request_logging;

/// Errors raised while initialising observability.
#[derive(Debug, Error)]
pub(crate) enum ObservabilityError {
    /// Failed to initialise tracing subscriber.
    #[error("failed to initialise tracing subscriber: {0}")]
    TracingSubscriber(#[from] tracing_subscriber::util::TryInitError),
}

/// Install the global subscriber and hand the slow-request threshold to the request hoop.
pub(crate) fn init(config: &ServerConfig) -> Result<(), ObservabilityError> {
    logging::init_subscriber(&config.logging)?;

    settings::apply(&config.logging);

    Ok(())
}
