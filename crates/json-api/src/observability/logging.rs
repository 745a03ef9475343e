//! Subscriber installation.

use tracing_subscriber::{
    EnvFilter, Registry,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

use crate::config::logging::{LogFormat, LoggingConfig};

use super::ObservabilityError;

pub(super) fn init_subscriber(config: &LoggingConfig) -> Result<(), ObservabilityError> {
    let base = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_ansi(config.log_ansi);

    let layer = match config.log_format {
        LogFormat::Compact => base
            .compact()
            .with_file(true)
            .with_line_number(true)
            .boxed(),
        LogFormat::Pretty => base.pretty().boxed(),
        LogFormat::Json => base
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .boxed(),
    };

    install(config, layer)
}

fn install(
    config: &LoggingConfig,
    layer: Box<dyn Layer<Registry> + Send + Sync>,
) -> Result<(), ObservabilityError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.filter_directives()));

    tracing_subscriber::registry()
        .with(layer)
        .with(filter)
        .try_init()?;

    Ok(())
}
