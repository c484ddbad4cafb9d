//! `pg-smoke`: render a server-side problem and check the page looks like one.

use std::io::Write;

use crate::{
    application::error::ProbeError,
    config::SmokeSettings,
    domain::RenderRequest,
    infra::{client::RenderClient, entropy::Entropy},
    presentation::report::write_smoke_ok,
};

/// Substring every successfully rendered problem page contains.
pub const RENDERED_PROBLEM_MARKER: &str = "Problem";

pub async fn run<W, E>(
    settings: &SmokeSettings,
    entropy: &mut E,
    out: &mut W,
) -> Result<(), ProbeError>
where
    W: Write,
    E: Entropy + ?Sized,
{
    let request = RenderRequest::server_path(
        settings.source_file_path.as_str(),
        settings.seed,
        &settings.renderer.output_format,
    );
    let client = RenderClient::new(&settings.renderer)?;
    let response = client.render(&request, entropy).await?;

    let rendered = response
        .rendered_html()
        .is_some_and(|html| html.contains(RENDERED_PROBLEM_MARKER));
    if !rendered {
        return Err(ProbeError::smoke_failed(&settings.source_file_path));
    }

    write_smoke_ok(out, &settings.source_file_path, settings.seed)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use httpmock::MockServer;
    use tracing::level_filters::LevelFilter;

    use super::*;
    use crate::{
        config::{LogFormat, LoggingSettings, RendererSettings, render_endpoint},
        infra::entropy::FixedEntropy,
    };

    fn settings(server: &MockServer) -> SmokeSettings {
        SmokeSettings {
            source_file_path: "private/myproblem.pg".into(),
            seed: 1234,
            renderer: RendererSettings {
                endpoint: render_endpoint(&server.base_url()).expect("endpoint"),
                output_format: "classic".into(),
                timeout: Duration::from_secs(5),
                throttle: Duration::ZERO,
            },
            logging: LoggingSettings {
                level: LevelFilter::WARN,
                format: LogFormat::Compact,
            },
        }
    }

    #[tokio::test]
    async fn rendered_problem_passes() -> Result<(), ProbeError> {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("POST").path("/render-api").json_body_includes(
                r#"{"sourceFilePath":"private/myproblem.pg","problemSeed":1234,"outputFormat":"classic"}"#,
            );
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"renderedHTML":"<div>Problem 1</div>"}"#);
        });

        let mut out = Vec::new();
        run(&settings(&server), &mut FixedEntropy::new(1), &mut out).await?;

        mock.assert();
        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "[OK] private/myproblem.pg seed=1234\npg-smoke complete\n"
        );
        Ok(())
    }

    #[tokio::test]
    async fn page_without_marker_fails() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method("POST").path("/render-api");
            then.status(200).body(r#"{"renderedHTML":"<div>empty</div>"}"#);
        });

        let mut out = Vec::new();
        let err = run(&settings(&server), &mut FixedEntropy::new(1), &mut out)
            .await
            .expect_err("missing marker");

        assert_eq!(
            err.to_string(),
            "[FAIL] private/myproblem.pg missing expected content"
        );
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn missing_rendered_html_fails() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method("POST").path("/render-api");
            then.status(200).body(r#"{"errors":["Problem not found"]}"#);
        });

        let mut out = Vec::new();
        let err = run(&settings(&server), &mut FixedEntropy::new(1), &mut out)
            .await
            .expect_err("no html");

        assert!(matches!(err, ProbeError::SmokeFailed { .. }));
    }

    #[tokio::test]
    async fn raw_html_body_is_accepted() -> Result<(), ProbeError> {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method("POST").path("/render-api");
            then.status(200)
                .header("content-type", "text/html")
                .body("<html><body>Problem 3</body></html>");
        });

        let mut out = Vec::new();
        run(&settings(&server), &mut FixedEntropy::new(1), &mut out).await?;
        assert!(String::from_utf8(out).expect("utf8").starts_with("[OK]"));
        Ok(())
    }
}
