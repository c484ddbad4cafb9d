//! pg-lint: post a local PG/PGML file to the renderer and report lint findings or HTML.

use std::{
    io::{self, Write},
    process,
};

use pg_render_probe::{
    application::{error::ProbeError, lint},
    config,
    infra::{entropy::RngEntropy, telemetry},
};

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        telemetry::report_failure("pg-lint", &error);
        process::exit(1);
    }
}

async fn run() -> Result<(), ProbeError> {
    let settings = config::load_lint()?;
    telemetry::init(&settings.logging)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = lint::run(&settings, &mut RngEntropy::from_os(), &mut out).await;
    out.flush()?;
    result
}
