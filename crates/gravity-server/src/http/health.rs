use axum::Json;
use chrono::{SecondsFormat, Utc};
use gravity_core::api::HealthResponse;

/// Handler for GET /api/health
pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

#[cfg(test)]
mod tests {
    use crate::http::router;
    use crate::http::test_support::{call, test_state};
    use axum::http::{Method, StatusCode};

    #[tokio::test]
    async fn test_health() {
        let app = router(test_state());
        let (status, body) = call(&app, Method::GET, "/api/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert!(chrono::DateTime::parse_from_rfc3339(body["timestamp"].as_str().unwrap()).is_ok());
    }

    #[tokio::test]
    async fn test_routes_live_under_api() {
        let app = router(test_state());
        let (status, _) = call(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
