use std::path::PathBuf;

use clap::{Args, Parser, ValueHint, builder::BoolishValueParser};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_OUTPUT_FORMAT: &str = "classic";
pub const DEFAULT_SMOKE_PATH: &str = "private/myproblem.pg";
pub const DEFAULT_SMOKE_SEED: i64 = 1234;

/// Command-line arguments for `pg-lint`.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "pg-lint",
    version,
    about = "Lint a PG/PGML file via the renderer API."
)]
pub struct LintArgs {
    /// Local PG/PGML file to send as problemSource.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        value_hint = ValueHint::FilePath
    )]
    pub input: PathBuf,

    /// Problem seed (default: random).
    #[arg(short = 's', long = "seed", allow_negative_numbers = true)]
    pub seed: Option<i64>,

    /// Print rendered HTML instead of lint findings.
    #[arg(short = 'r', long = "render", overrides_with = "no_render")]
    pub render: bool,

    /// Print lint findings instead of rendered HTML (default).
    #[arg(short = 'n', long = "no-render", overrides_with = "render")]
    pub no_render: bool,

    #[command(flatten)]
    pub renderer: RendererArgs,

    #[command(flatten)]
    pub logging: LoggingOverrides,
}

impl LintArgs {
    /// Whether rendered HTML was requested; the later of `-r`/`-n` wins.
    pub fn render_html(&self) -> bool {
        self.render && !self.no_render
    }
}

/// Command-line arguments for `pg-smoke`.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "pg-smoke",
    version,
    about = "Post a render request to the renderer API and verify output."
)]
pub struct SmokeArgs {
    /// Problem file path to render, relative to the renderer host.
    #[arg(
        short = 'p',
        long = "path",
        value_name = "PATH",
        default_value = DEFAULT_SMOKE_PATH
    )]
    pub source_file_path: String,

    /// Problem seed.
    #[arg(
        short = 's',
        long = "seed",
        default_value_t = DEFAULT_SMOKE_SEED,
        allow_negative_numbers = true
    )]
    pub seed: i64,

    #[command(flatten)]
    pub renderer: RendererArgs,

    #[command(flatten)]
    pub logging: LoggingOverrides,
}

/// Renderer connection flags shared by both tools.
#[derive(Debug, Args, Clone)]
pub struct RendererArgs {
    /// Renderer base URL.
    #[arg(
        short = 'b',
        long = "base-url",
        value_name = "URL",
        default_value = DEFAULT_BASE_URL,
        value_hint = ValueHint::Url
    )]
    pub base_url: String,

    /// Output format template id.
    #[arg(
        short = 'o',
        long = "output-format",
        value_name = "ID",
        default_value = DEFAULT_OUTPUT_FORMAT
    )]
    pub output_format: String,

    /// Override the request timeout.
    #[arg(long = "timeout-seconds", value_name = "SECONDS")]
    pub timeout_seconds: Option<u64>,

    /// Override the upper bound of the random pre-request delay (0 disables it).
    #[arg(long = "throttle-ms", value_name = "MILLIS")]
    pub throttle_ms: Option<u64>,
}

#[derive(Debug, Args, Default, Clone)]
pub struct LoggingOverrides {
    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new()
    )]
    pub log_json: Option<bool>,
}
