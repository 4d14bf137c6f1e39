pub mod bridge;
pub mod server;

pub use crate::domain::model::{BridgeResponse, SimilarityRequest, UpstreamReply};
pub use crate::domain::ports::{ConfigProvider, SimilarityUpstream};
pub use crate::utils::error::Result;
