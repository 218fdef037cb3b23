//! Logging for the orderdesk CLI
//!
//! Console output is always on. With `--otel` (and the `telemetry`
//! feature) spans are also exported over OTLP; the exporter reads
//! `OTEL_EXPORTER_OTLP_ENDPOINT` and defaults to `http://localhost:4317`.
//!
//!   orderdesk --debug serve              # debug level unless RUST_LOG is set
//!   RUST_LOG=orderdesk_server=debug ...  # per-target control

use anyhow::{anyhow, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Default to `debug` instead of `info` when RUST_LOG is unset
    pub debug: bool,
    /// Export spans over OTLP
    pub otel: bool,
}

fn env_filter(debug: bool) -> EnvFilter {
    let fallback = if debug { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Install the global subscriber.
pub fn init(config: &TracingConfig) -> Result<()> {
    let console = tracing_subscriber::fmt::layer()
        .with_target(config.debug)
        .compact();
    let registry = tracing_subscriber::registry()
        .with(env_filter(config.debug))
        .with(console);

    #[cfg(feature = "telemetry")]
    let registry = registry.with(if config.otel {
        Some(otel::layer()?)
    } else {
        None
    });

    #[cfg(not(feature = "telemetry"))]
    if config.otel {
        eprintln!("warning: --otel ignored, orderdesk was built without the `telemetry` feature");
    }

    registry.try_init().map_err(|err| anyhow!(err))?;

    if config.otel && cfg!(feature = "telemetry") {
        tracing::info!("OTLP span export enabled");
    }
    Ok(())
}

#[cfg(feature = "telemetry")]
mod otel {
    use anyhow::{anyhow, Result};
    use opentelemetry::trace::TracerProvider as _;
    use opentelemetry::KeyValue;
    use opentelemetry_sdk::trace::{Tracer, TracerProvider};
    use opentelemetry_sdk::Resource;
    use tracing::Subscriber;
    use tracing_opentelemetry::OpenTelemetryLayer;
    use tracing_subscriber::registry::LookupSpan;

    pub(super) fn layer<S>() -> Result<OpenTelemetryLayer<S, Tracer>>
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        let exporter = opentelemetry_otlp::SpanExporter::builder()
            .with_tonic()
            .build()
            .map_err(|e| anyhow!("Failed to create OTLP exporter: {}", e))?;

        let provider = TracerProvider::builder()
            .with_batch_exporter(exporter, opentelemetry_sdk::runtime::Tokio)
            .with_resource(Resource::new(vec![KeyValue::new("service.name", "orderdesk")]))
            .build();
        let tracer = provider.tracer("orderdesk");

        // Dropping the provider stops export
        let _ = opentelemetry::global::set_tracer_provider(provider);

        Ok(tracing_opentelemetry::layer().with_tracer(tracer))
    }
}

/// Flush spans still queued for export.
pub fn shutdown_otel() {
    #[cfg(feature = "telemetry")]
    opentelemetry::global::shutdown_tracer_provider();
}
