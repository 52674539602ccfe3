//! Subscriber installation: `EnvFilter`, a JSON or pretty formatter on
//! stderr, and an OTLP span exporter when an endpoint is configured.

use anyhow::{Context, Result};
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::runtime;
use opentelemetry_sdk::trace::TracerProvider;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer, Registry};

use crate::config::{LogFormat, TelemetrySection};

const TRACER_NAME: &str = "connectsafely";

/// Keeps the tracer provider alive until [`Telemetry::shutdown`].
pub struct Telemetry {
    provider: Option<TracerProvider>,
}

impl Telemetry {
    /// `RUST_LOG` selects the filter (default `info`); `verbose` forces `debug`.
    pub fn init(settings: &TelemetrySection, verbose: bool) -> Result<Self> {
        let filter = if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
        };

        let output: Box<dyn Layer<Registry> + Send + Sync> = match settings.format {
            LogFormat::Json => fmt::layer().json().with_writer(std::io::stderr).boxed(),
            LogFormat::Pretty => fmt::layer().with_writer(std::io::stderr).boxed(),
        };

        let provider = settings
            .otlp_endpoint
            .as_deref()
            .map(otlp_provider)
            .transpose()?;
        let otel = provider
            .as_ref()
            .map(|p| tracing_opentelemetry::layer().with_tracer(p.tracer(TRACER_NAME)));

        tracing_subscriber::registry()
            .with(output)
            .with(otel)
            .with(filter)
            .try_init()
            .context("failed to install tracing subscriber")?;

        if let Some(endpoint) = &settings.otlp_endpoint {
            tracing::info!(%endpoint, "exporting spans over OTLP");
        }
        Ok(Self { provider })
    }

    /// Flushes pending spans.
    pub fn shutdown(self) {
        if let Some(provider) = self.provider {
            if let Err(e) = provider.shutdown() {
                tracing::warn!(error = %e, "failed to flush OpenTelemetry spans");
            }
        }
    }
}

fn otlp_provider(endpoint: &str) -> Result<TracerProvider> {
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()
        .context("failed to build OTLP span exporter")?;
    let provider = TracerProvider::builder()
        .with_batch_exporter(exporter, runtime::Tokio)
        .build();
    opentelemetry::global::set_tracer_provider(provider.clone());
    Ok(provider)
}
