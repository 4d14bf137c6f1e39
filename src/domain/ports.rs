use crate::domain::model::{SimilarityRequest, UpstreamReply};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::net::SocketAddr;

pub trait ConfigProvider: Send + Sync {
    fn listen_addr(&self) -> SocketAddr;
    fn upstream_endpoint(&self) -> &str;
    fn reference_word(&self) -> &str;
}

#[async_trait]
pub trait SimilarityUpstream: Send + Sync {
    /// `Err` only when the call could not complete or the reply was not JSON.
    async fn compare(&self, request: &SimilarityRequest) -> Result<UpstreamReply>;
}
