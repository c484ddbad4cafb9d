//! Render request payloads.
//!
//! A [`RenderRequest`] is built once per invocation and serialized straight
//! into the JSON body posted to `/render-api`.

use serde::Serialize;

/// Where the renderer should read the problem from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ProblemSource {
    /// Problem text sent inline with the request.
    #[serde(rename = "problemSource")]
    Inline(String),
    /// Path to a problem file on the renderer host.
    #[serde(rename = "sourceFilePath")]
    ServerPath(String),
}

/// Immutable request body for one render call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderRequest {
    #[serde(flatten)]
    source: ProblemSource,
    #[serde(rename = "problemSeed")]
    seed: i64,
    #[serde(rename = "outputFormat")]
    output_format: String,
}

impl RenderRequest {
    pub fn new(source: ProblemSource, seed: i64, output_format: impl Into<String>) -> Self {
        Self {
            source,
            seed,
            output_format: output_format.into(),
        }
    }

    pub fn inline(source_text: impl Into<String>, seed: i64, output_format: &str) -> Self {
        Self::new(ProblemSource::Inline(source_text.into()), seed, output_format)
    }

    pub fn server_path(path: impl Into<String>, seed: i64, output_format: &str) -> Self {
        Self::new(ProblemSource::ServerPath(path.into()), seed, output_format)
    }

    pub fn source(&self) -> &ProblemSource {
        &self.source
    }

    pub fn seed(&self) -> i64 {
        self.seed
    }

    pub fn output_format(&self) -> &str {
        &self.output_format
    }
}
