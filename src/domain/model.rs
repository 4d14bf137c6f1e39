use serde::{Deserialize, Serialize};

pub const ALLOW_ORIGIN: (&str, &str) = ("Access-Control-Allow-Origin", "*");
pub const ALLOW_HEADERS: (&str, &str) = ("Access-Control-Allow-Headers", "content-type");
pub const JSON_CONTENT_TYPE: (&str, &str) = ("Content-Type", "application/json");

/// Body POSTed to the similarity endpoint. A missing guess serializes as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityRequest {
    pub word1: Option<String>,
    pub word2: String,
}

/// Outcome of a completed call to the similarity endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum UpstreamReply {
    Success(serde_json::Value),
    Failure { status: u16, status_text: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct BridgeResponse {
    pub status: u16,
    pub body: String,
    pub headers: Vec<(&'static str, &'static str)>,
}

impl BridgeResponse {
    pub fn header(&self, name: &str) -> Option<&'static str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| *value)
    }

    pub fn has_cors_headers(&self) -> bool {
        self.header(ALLOW_ORIGIN.0).is_some() && self.header(ALLOW_HEADERS.0).is_some()
    }
}
