//! Liveness endpoint for external uptime monitors
//!
//! Answers `GET /` with a constant body, whatever the gateway is doing.

use std::net::SocketAddr;

use axum::{http::StatusCode, routing::get, Router};
use tokio::net::TcpListener;

use crate::application::errors::BotError;

pub const ALIVE_BODY: &str = "I'm alive";

async fn alive() -> (StatusCode, &'static str) {
    (StatusCode::OK, ALIVE_BODY)
}

/// Create the liveness router
pub fn router() -> Router {
    Router::new().route("/", get(alive))
}

/// Serve on an already bound listener until the process exits
pub async fn serve(listener: TcpListener) -> Result<(), BotError> {
    axum::serve(listener, router())
        .await
        .map_err(|e| BotError::Liveness(e.to_string()))
}

/// Bind `addr` and serve. A bind failure is fatal to this component only.
pub async fn start_liveness_server(addr: SocketAddr) -> Result<(), BotError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| BotError::Liveness(format!("failed to bind {}: {}", addr, e)))?;
    tracing::info!("Liveness endpoint listening on {}", addr);
    serve(listener).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt as _;

    async fn get_root() -> (StatusCode, String) {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_root_returns_alive() {
        let (status, body) = get_root().await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "I'm alive");
    }

    #[tokio::test]
    async fn test_root_is_constant() {
        for _ in 0..3 {
            assert_eq!(get_root().await, (StatusCode::OK, ALIVE_BODY.to_string()));
        }
    }

    #[tokio::test]
    async fn test_other_paths_not_found() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_bind_conflict_is_an_error() {
        let held = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = held.local_addr().unwrap();
        let err = start_liveness_server(addr).await.unwrap_err();
        assert!(matches!(err, BotError::Liveness(_)));
    }
}
