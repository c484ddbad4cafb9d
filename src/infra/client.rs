use std::time::Duration;

use reqwest::{Client, Response};
use tracing::{debug, info, warn};
use url::Url;

use crate::{
    application::{error::ProbeError, redact::redact},
    config::RendererSettings,
    domain::{RenderRequest, RenderResponse},
    infra::entropy::Entropy,
};

/// HTTP client for the renderer's `/render-api` endpoint.
///
/// One request per call, no retries. The pre-request delay is a courtesy to
/// the shared renderer and never exceeds the configured throttle.
#[derive(Clone, Debug)]
pub struct RenderClient {
    http: Client,
    endpoint: Url,
    timeout: Duration,
    throttle: Duration,
}

impl RenderClient {
    pub fn new(settings: &RendererSettings) -> Result<Self, ProbeError> {
        let http = Client::builder()
            .user_agent(Self::user_agent())
            .timeout(settings.timeout)
            .build()?;
        Ok(Self {
            http,
            endpoint: settings.endpoint.clone(),
            timeout: settings.timeout,
            throttle: settings.throttle,
        })
    }

    pub fn user_agent() -> &'static str {
        concat!("pg-render-probe/", env!("CARGO_PKG_VERSION"))
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Post `request` and decode the reply.
    ///
    /// A 2xx body that is not a JSON object comes back as rendered markup
    /// carrying a synthetic warning instead of failing.
    pub async fn render<E: Entropy + ?Sized>(
        &self,
        request: &RenderRequest,
        entropy: &mut E,
    ) -> Result<RenderResponse, ProbeError> {
        let delay = entropy.throttle_delay(self.throttle);
        if !delay.is_zero() {
            debug!(delay = ?delay, "throttling before render request");
            tokio::time::sleep(delay).await;
        }

        info!(
            endpoint = %self.endpoint,
            seed = request.seed(),
            output_format = request.output_format(),
            "posting render request"
        );
        let resp = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|err| self.transport_error(err))?;

        self.handle(resp).await
    }

    async fn handle(&self, resp: Response) -> Result<RenderResponse, ProbeError> {
        let status = resp.status();
        let bytes = resp
            .bytes()
            .await
            .map_err(|err| self.transport_error(err))?;
        let body = String::from_utf8_lossy(&bytes);
        info!(%status, bytes = bytes.len(), "renderer responded");

        if !status.is_success() {
            return Err(ProbeError::Status {
                status,
                body: redact(&body),
            });
        }

        match RenderResponse::from_json(&body) {
            Ok(response) => Ok(response),
            Err(err) => {
                warn!(error = %err, "renderer returned non-JSON response; parsing HTML only");
                Ok(RenderResponse::from_markup(body.into_owned()))
            }
        }
    }

    fn transport_error(&self, err: reqwest::Error) -> ProbeError {
        if err.is_timeout() {
            ProbeError::Timeout {
                after: self.timeout,
            }
        } else {
            ProbeError::Http(err)
        }
    }
}
