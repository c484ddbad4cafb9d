//! pg-smoke: smoke-check the renderer by rendering a server-side problem.

use std::{
    io::{self, Write},
    process,
};

use pg_render_probe::{
    application::{error::ProbeError, smoke},
    config,
    infra::{entropy::RngEntropy, telemetry},
};

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        telemetry::report_failure("pg-smoke", &error);
        process::exit(1);
    }
}

async fn run() -> Result<(), ProbeError> {
    let settings = config::load_smoke()?;
    telemetry::init(&settings.logging)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = smoke::run(&settings, &mut RngEntropy::from_os(), &mut out).await;
    out.flush()?;
    result
}
