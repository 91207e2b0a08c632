use crate::error::BizErrorEnum;
use tracing::{subscriber, Subscriber};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Registry};

/// Install the bunyan JSON logger for the whole process, writing to `sink`.
///
/// `RUST_LOG` wins over `default_filter` when it is set. Call this once: the binary calls
/// it with stdout, the tests with stdout or `std::io::sink` depending on `TEST_LOG`.
pub fn init_telemetry<Sink>(
    name: impl Into<String>,
    default_filter: impl Into<String>,
    sink: Sink,
) -> Result<(), BizErrorEnum>
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    init_subscriber(get_subscriber(name.into(), default_filter.into(), sink))
}

/// Stack the env filter, the span storage and the bunyan formatter on a `Registry`.
fn get_subscriber<Sink>(
    name: String,
    default_filter: String,
    sink: Sink,
) -> impl Subscriber + Send + Sync
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(BunyanFormattingLayer::new(name, sink))
}

/// Make `subscriber` the global default and route `log` records (actix-web's) into it.
fn init_subscriber(subscriber: impl Subscriber + Send + Sync) -> Result<(), BizErrorEnum> {
    LogTracer::init().map_err(|e| {
        tracing::error!("Failed to redirect log records");
        BizErrorEnum::SetLoggerError(e)
    })?;
    subscriber::set_global_default(subscriber).map_err(|e| {
        tracing::error!("Failed to install the global subscriber");
        BizErrorEnum::SetSubscriberError(e)
    })?;
    Ok(())
}
