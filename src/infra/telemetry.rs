use std::io::{self, IsTerminal};

use tracing::{Dispatch, Level, dispatcher, error};
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, fmt},
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

use crate::{
    application::redact::redact,
    config::{LogFormat, LoggingSettings},
};

use super::error::InfraError;

/// Install a global tracing subscriber writing to stderr.
///
/// Stdout is reserved for reports and rendered markup.
pub fn init(logging: &LoggingSettings) -> Result<(), InfraError> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(logging.level.into())
        .from_env_lossy();

    let fmt_layer = match logging.format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .with_target(true)
            .with_writer(io::stderr)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(true)
            .with_ansi(io::stderr().is_terminal())
            .with_writer(io::stderr)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(ErrorLayer::default())
        .with(fmt_layer)
        .try_init()
        .map_err(|err| {
            InfraError::telemetry(format!("failed to install tracing subscriber: {err}"))
        })
}

/// Log a fatal error with credentials scrubbed, falling back to an ERROR-only
/// stderr subscriber when none has been installed yet.
pub fn report_failure(tool: &str, error: &dyn std::error::Error) {
    let error = redact(&error.to_string());
    if dispatcher::has_been_set() {
        error!(tool, error = %error, "invocation failed");
        return;
    }

    let subscriber = fmt()
        .with_max_level(Level::ERROR)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(tool, error = %error, "invocation failed");
    });
}
