use opentelemetry_appender_tracing::layer::OpenTelemetryTracingBridge;
use opentelemetry_sdk::logs::SdkLoggerProvider;
use tracing_appender::{
    non_blocking,
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const QUIET_CRATES: [&str; 4] = ["hyper=off", "opentelemetry=off", "h2=off", "sqlx=warn"];

/// Keeps the file writer and the OpenTelemetry provider alive; drop it last.
pub struct Logger {
    _guard: WorkerGuard,
    provider: Option<SdkLoggerProvider>,
}

impl Logger {
    pub fn new(component: &str, is_dev: bool) -> Self {
        let log_dir = if is_dev { "./logs" } else { "/var/log/seller-crm" };
        let file_name = format!("seller_crm_{component}.log");
        let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, file_name);
        let (file_writer, guard) = non_blocking(file_appender);

        let file_layer = fmt::layer()
            .with_writer(file_writer)
            .with_ansi(false)
            .json()
            .with_filter(EnvFilter::new("info"));

        let console_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(if is_dev { "debug" } else { "off" }));

        let console_layer = fmt::layer()
            .pretty()
            .with_thread_names(true)
            .with_ansi(is_dev)
            .with_filter(console_filter);

        let provider = (!is_dev).then(|| SdkLoggerProvider::builder().build());

        let otel_layer = provider.as_ref().map(|provider| {
            let otel_filter = QUIET_CRATES
                .iter()
                .filter_map(|directive| directive.parse().ok())
                .fold(EnvFilter::new("info"), |filter, directive| {
                    filter.add_directive(directive)
                });

            OpenTelemetryTracingBridge::new(provider).with_filter(otel_filter)
        });

        let installed = tracing_subscriber::registry()
            .with(file_layer)
            .with(console_layer)
            .with(otel_layer)
            .try_init();

        if let Err(e) = installed {
            eprintln!("tracing subscriber already installed for {component}: {e}");
        }

        Self {
            _guard: guard,
            provider,
        }
    }

    pub fn shutdown(&self) {
        if let Some(provider) = &self.provider {
            if let Err(e) = provider.shutdown() {
                eprintln!("failed to shut down log provider: {e}");
            }
        }
    }
}
