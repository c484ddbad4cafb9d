//! Configuration layer: command-line arguments resolved into validated settings.

mod cli;

use std::{path::PathBuf, str::FromStr, time::Duration};

use thiserror::Error;
use tracing::level_filters::LevelFilter;
use url::Url;

pub use cli::{
    DEFAULT_BASE_URL, DEFAULT_OUTPUT_FORMAT, DEFAULT_SMOKE_PATH, DEFAULT_SMOKE_SEED, LintArgs,
    LoggingOverrides, RendererArgs, SmokeArgs,
};

pub const RENDER_API_PATH: &str = "render-api";
pub const DEFAULT_LINT_TIMEOUT: Duration = Duration::from_secs(60);
pub const DEFAULT_SMOKE_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_THROTTLE_MS: u64 = 1_000;
const MAX_THROTTLE_MS: u64 = 10_000;

/// Resolved settings for `pg-lint`.
#[derive(Debug, Clone)]
pub struct LintSettings {
    pub input: PathBuf,
    pub seed: Option<i64>,
    pub render_html: bool,
    pub renderer: RendererSettings,
    pub logging: LoggingSettings,
}

/// Resolved settings for `pg-smoke`.
#[derive(Debug, Clone)]
pub struct SmokeSettings {
    pub source_file_path: String,
    pub seed: i64,
    pub renderer: RendererSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone)]
pub struct RendererSettings {
    pub endpoint: Url,
    pub output_format: String,
    pub timeout: Duration,
    pub throttle: Duration,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub level: LevelFilter,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy)]
pub enum LogFormat {
    Json,
    Compact,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid configuration for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl LoadError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

impl LintSettings {
    pub fn from_args(args: &LintArgs) -> Result<Self, LoadError> {
        Ok(Self {
            input: args.input.clone(),
            seed: args.seed,
            render_html: args.render_html(),
            renderer: build_renderer_settings(&args.renderer, DEFAULT_LINT_TIMEOUT)?,
            logging: build_logging_settings(&args.logging)?,
        })
    }
}

impl SmokeSettings {
    pub fn from_args(args: &SmokeArgs) -> Result<Self, LoadError> {
        if args.source_file_path.trim().is_empty() {
            return Err(LoadError::invalid("smoke.path", "must not be empty"));
        }

        Ok(Self {
            source_file_path: args.source_file_path.clone(),
            seed: args.seed,
            renderer: build_renderer_settings(&args.renderer, DEFAULT_SMOKE_TIMEOUT)?,
            logging: build_logging_settings(&args.logging)?,
        })
    }
}

/// Parse `pg-lint` arguments from the process and resolve them.
pub fn load_lint() -> Result<LintSettings, LoadError> {
    use clap::Parser;
    LintSettings::from_args(&LintArgs::parse())
}

/// Parse `pg-smoke` arguments from the process and resolve them.
pub fn load_smoke() -> Result<SmokeSettings, LoadError> {
    use clap::Parser;
    SmokeSettings::from_args(&SmokeArgs::parse())
}

/// `{base}/render-api`, with trailing slashes on the base dropped first.
pub fn render_endpoint(base_url: &str) -> Result<Url, LoadError> {
    let base = base_url.trim().trim_end_matches('/');
    if base.is_empty() {
        return Err(LoadError::invalid("renderer.base_url", "must not be empty"));
    }

    let endpoint = Url::parse(&format!("{base}/{RENDER_API_PATH}")).map_err(|err| {
        LoadError::invalid("renderer.base_url", format!("invalid URL `{base}`: {err}"))
    })?;
    match endpoint.scheme() {
        "http" | "https" => Ok(endpoint),
        other => Err(LoadError::invalid(
            "renderer.base_url",
            format!("unsupported scheme `{other}`"),
        )),
    }
}

fn build_renderer_settings(
    args: &RendererArgs,
    default_timeout: Duration,
) -> Result<RendererSettings, LoadError> {
    let endpoint = render_endpoint(&args.base_url)?;

    if args.output_format.trim().is_empty() {
        return Err(LoadError::invalid(
            "renderer.output_format",
            "must not be empty",
        ));
    }

    let timeout = match args.timeout_seconds {
        Some(0) => {
            return Err(LoadError::invalid(
                "renderer.timeout_seconds",
                "must be greater than zero",
            ));
        }
        Some(seconds) => Duration::from_secs(seconds),
        None => default_timeout,
    };

    let throttle_ms = args.throttle_ms.unwrap_or(DEFAULT_THROTTLE_MS);
    if throttle_ms > MAX_THROTTLE_MS {
        return Err(LoadError::invalid(
            "renderer.throttle_ms",
            format!("must be at most {MAX_THROTTLE_MS}"),
        ));
    }

    Ok(RendererSettings {
        endpoint,
        output_format: args.output_format.clone(),
        timeout,
        throttle: Duration::from_millis(throttle_ms),
    })
}

fn build_logging_settings(logging: &LoggingOverrides) -> Result<LoggingSettings, LoadError> {
    let level = match logging.log_level.as_deref() {
        Some(level) => LevelFilter::from_str(level).map_err(|err| {
            LoadError::invalid("logging.level", format!("failed to parse: {err}"))
        })?,
        None => LevelFilter::WARN,
    };

    let format = if logging.log_json.unwrap_or(false) {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };

    Ok(LoggingSettings { level, format })
}
