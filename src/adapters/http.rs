use crate::domain::model::{SimilarityRequest, UpstreamReply};
use crate::domain::ports::SimilarityUpstream;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

/// Reason text for statuses without a canonical phrase, as browser-side fetch reports it.
pub const UNKNOWN_STATUS_TEXT: &str = "<unknown status code>";

/// Similarity endpoint reached over HTTP. Redirects follow reqwest's default policy.
#[derive(Debug, Clone)]
pub struct ReqwestUpstream {
    endpoint: String,
    client: Client,
}

impl ReqwestUpstream {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SimilarityUpstream for ReqwestUpstream {
    async fn compare(&self, request: &SimilarityRequest) -> Result<UpstreamReply> {
        tracing::debug!("POST {} with {:?}", self.endpoint, request);

        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(serde_json::to_vec(request)?)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Similarity API response status: {}", status);

        if !status.is_success() {
            return Ok(UpstreamReply::Failure {
                status: status.as_u16(),
                status_text: status
                    .canonical_reason()
                    .unwrap_or(UNKNOWN_STATUS_TEXT)
                    .to_string(),
            });
        }

        let bytes = response.bytes().await?;
        let payload: serde_json::Value = serde_json::from_slice(&bytes)?;
        Ok(UpstreamReply::Success(payload))
    }
}
