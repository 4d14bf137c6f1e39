use crate::core::bridge::BridgeHandler;
use crate::core::{BridgeResponse, SimilarityUpstream};
use crate::utils::error::Result;
use axum::{
    extract::State,
    http::{HeaderName, HeaderValue, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;

/// Every method on every path goes to the bridge.
pub fn router<U: SimilarityUpstream + 'static>(handler: BridgeHandler<U>) -> Router {
    Router::new()
        .fallback(relay::<U>)
        .with_state(Arc::new(handler))
}

pub async fn serve<U: SimilarityUpstream + 'static>(
    listener: TcpListener,
    handler: BridgeHandler<U>,
) -> Result<()> {
    tracing::info!("Similarity bridge listening on {}", listener.local_addr()?);

    axum::serve(listener, router(handler))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Similarity bridge stopped");
    Ok(())
}

async fn relay<U: SimilarityUpstream + 'static>(
    State(bridge): State<Arc<BridgeHandler<U>>>,
    method: Method,
    uri: Uri,
) -> Response {
    tracing::debug!("{} {}", method, uri);
    into_http_response(bridge.handle(method.as_str(), uri.query()).await)
}

fn into_http_response(reply: BridgeResponse) -> Response {
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let mut response = (status, reply.body).into_response();

    let headers = response.headers_mut();
    for (name, value) in reply.headers {
        match HeaderName::from_bytes(name.as_bytes()) {
            Ok(name) => {
                headers.insert(name, HeaderValue::from_static(value));
            }
            Err(e) => tracing::warn!("Skipping invalid header name {}: {}", name, e),
        }
    }

    response
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining in-flight requests");
}
