use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

use crate::{config::LoadError, infra::error::InfraError};

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("failed to read input file {path}: {source}")]
    InputFile {
        path: String,
        source: std::io::Error,
    },
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("renderer did not answer within {after:?}")]
    Timeout { after: Duration },
    #[error("renderer returned status {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("renderedHTML missing from response")]
    MissingRenderedHtml,
    #[error("renderer reported errors")]
    RendererReported,
    #[error("[FAIL] {path} missing expected content")]
    SmokeFailed { path: String },
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] LoadError),
    #[error(transparent)]
    Infra(#[from] InfraError),
}

impl ProbeError {
    pub fn input_file(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::InputFile {
            path: path.into(),
            source,
        }
    }

    pub fn smoke_failed(path: impl Into<String>) -> Self {
        Self::SmokeFailed { path: path.into() }
    }
}
