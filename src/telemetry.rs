use std::env::{self, VarError};

use anyhow::{Context, Result};
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, fmt, prelude::*};

use crate::config::{Config, LogFormat};

/// Installs the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise the configured `LOG_LEVEL` directive
/// decides which records reach the sink.
pub fn init_tracing(config: &Config) -> Result<()> {
    let filter = resolve_filter(env::var(EnvFilter::DEFAULT_ENV), &config.log_level)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(format_layer(config.log_format, std::io::stdout))
        .try_init()
        .context("failed to install tracing subscriber")
}

/// An unset or blank `RUST_LOG` falls back to `log_level`; anything else
/// must parse.
fn resolve_filter(rust_log: Result<String, VarError>, log_level: &str) -> Result<EnvFilter> {
    match rust_log {
        Ok(directives) if !directives.trim().is_empty() => EnvFilter::try_new(&directives)
            .with_context(|| format!("RUST_LOG is not a valid filter directive: '{}'", directives)),
        Ok(_) | Err(VarError::NotPresent) => EnvFilter::try_new(log_level)
            .with_context(|| format!("LOG_LEVEL is not a valid filter directive: '{}'", log_level)),
        Err(err) => Err(err).context("RUST_LOG is not valid unicode"),
    }
}

fn format_layer<S, W>(format: LogFormat, writer: W) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    match format {
        LogFormat::Json => fmt::layer().json().with_writer(writer).boxed(),
        LogFormat::Text => fmt::layer().with_writer(writer).boxed(),
    }
}
