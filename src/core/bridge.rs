use crate::core::{BridgeResponse, SimilarityRequest, SimilarityUpstream, UpstreamReply};
use crate::domain::model::{ALLOW_HEADERS, ALLOW_ORIGIN, JSON_CONTENT_TYPE};
use serde_json::{Number, Value};

pub const GUESS_PARAM: &str = "wordGuess";
pub const DEFAULT_REFERENCE_WORD: &str = "supelec";
pub const PREFLIGHT_BODY: &str = "Preflight OK!";

/// Largest magnitude at which every whole f64 is still exact (2^53).
const MAX_SAFE_WHOLE: f64 = 9_007_199_254_740_992.0;

/// Turns one inbound request into at most one call to the similarity endpoint.
pub struct BridgeHandler<U: SimilarityUpstream> {
    upstream: U,
    reference_word: String,
}

impl<U: SimilarityUpstream> BridgeHandler<U> {
    pub fn new(upstream: U, reference_word: impl Into<String>) -> Self {
        Self {
            upstream,
            reference_word: reference_word.into(),
        }
    }

    pub fn upstream(&self) -> &U {
        &self.upstream
    }

    pub async fn handle(&self, method: &str, query: Option<&str>) -> BridgeResponse {
        if method == "OPTIONS" {
            return preflight();
        }

        let request = self.build_request(query);

        match self.upstream.compare(&request).await {
            Ok(UpstreamReply::Failure {
                status,
                status_text,
            }) => {
                tracing::error!("Error: {} (upstream status {})", status_text, status);
                BridgeResponse {
                    status: 200,
                    body: format!("Error: {}", status_text),
                    headers: json_cors_headers(),
                }
            }
            Ok(UpstreamReply::Success(result)) => {
                let result = normalize_numbers(result);
                tracing::info!("{}", result);
                BridgeResponse {
                    status: 200,
                    body: result.to_string(),
                    headers: json_cors_headers(),
                }
            }
            Err(e) => {
                tracing::error!("Fetch error: {}", e);
                // No CORS headers here: browsers see this as an opaque failure.
                BridgeResponse {
                    status: 500,
                    body: format!("Error: {}", e),
                    headers: Vec::new(),
                }
            }
        }
    }

    pub fn build_request(&self, query: Option<&str>) -> SimilarityRequest {
        SimilarityRequest {
            word1: extract_guess(query),
            word2: self.reference_word.clone(),
        }
    }
}

pub fn preflight() -> BridgeResponse {
    BridgeResponse {
        status: 200,
        body: PREFLIGHT_BODY.to_string(),
        headers: vec![ALLOW_ORIGIN, ALLOW_HEADERS],
    }
}

/// First `wordGuess` value in a raw query string, percent-decoded.
pub fn extract_guess(query: Option<&str>) -> Option<String> {
    let query = query?;
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == GUESS_PARAM)
        .map(|(_, value)| value.into_owned())
}

/// Rewrites whole-number floats as integers, so `1.0` and `1e2` relay as `1` and `100`.
pub fn normalize_numbers(value: Value) -> Value {
    match value {
        Value::Number(n) if n.is_f64() => match n.as_f64() {
            Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() <= MAX_SAFE_WHOLE => {
                Value::Number(Number::from(f as i64))
            }
            _ => Value::Number(n),
        },
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_numbers).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key, normalize_numbers(value)))
                .collect(),
        ),
        other => other,
    }
}

fn json_cors_headers() -> Vec<(&'static str, &'static str)> {
    vec![JSON_CONTENT_TYPE, ALLOW_ORIGIN, ALLOW_HEADERS]
}
