//! `pg-lint`: post a local problem file and report what the renderer said.

use std::{fs, io::Write, path::Path};

use tracing::debug;

use crate::{
    application::{error::ProbeError, interpret::Interpreter},
    config::LintSettings,
    domain::RenderRequest,
    infra::{client::RenderClient, entropy::Entropy},
    presentation::report::{write_lint_report, write_random_seed, write_rendered_html},
};

/// Run one lint (or render) invocation, writing tool output to `out`.
///
/// In lint mode the report is always printed first; a renderer-flagged error
/// then surfaces as [`ProbeError::RendererReported`], even when the report
/// had no messages.
pub async fn run<W, E>(
    settings: &LintSettings,
    entropy: &mut E,
    out: &mut W,
) -> Result<(), ProbeError>
where
    W: Write,
    E: Entropy + ?Sized,
{
    let source_text = read_source(&settings.input)?;
    let seed = match settings.seed {
        Some(seed) => seed,
        None => {
            let seed = entropy.problem_seed();
            write_random_seed(out, seed)?;
            seed
        }
    };

    let request = RenderRequest::inline(source_text, seed, &settings.renderer.output_format);
    let client = RenderClient::new(&settings.renderer)?;
    let response = client.render(&request, entropy).await?;

    if settings.render_html {
        return write_rendered_html(out, &response);
    }

    let report = Interpreter::default().report(&response);
    debug!(
        messages = report.messages().len(),
        is_error = report.is_error(),
        "interpreted renderer response"
    );
    write_lint_report(out, report.messages())?;
    if report.is_error() {
        return Err(ProbeError::RendererReported);
    }
    Ok(())
}

/// Read the local PG/PGML source file.
pub fn read_source(path: &Path) -> Result<String, ProbeError> {
    fs::read_to_string(path)
        .map_err(|source| ProbeError::input_file(path.display().to_string(), source))
}
