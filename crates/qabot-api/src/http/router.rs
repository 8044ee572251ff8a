//! Axum router configuration with middleware.
//!
//! `/` serves the UI page, `/api/v1/ask` answers questions, `/health`
//! reports liveness. Middleware: CORS, tracing.

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new().route("/ask", post(handlers::ask::ask));

    Router::new()
        .route("/", get(handlers::ui::index))
        .nest("/api/v1", api_routes)
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::response::{IntoResponse, Response};
    use http_body_util::BodyExt;
    use qabot_infra::sqlite::pool::{DatabasePool, database_url};
    use qabot_types::config::QaConfig;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::ServiceExt;

    const TWO_PLUS_TWO_BODY: &str =
        "{\"response\":\"4\",\"done\":false}\n{\"response\":\"\",\"done\":true}\n";

    /// Stand-in generation endpoint on an ephemeral port. Returns its
    /// `/api/generate` URL and a counter of requests received.
    async fn spawn_generator(status: StatusCode, body: &'static str) -> (String, Arc<AtomicUsize>) {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let router = Router::new().route(
            "/api/generate",
            post(move || {
                let counter = counter.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    (status, body).into_response()
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        (format!("http://{addr}/api/generate"), hits)
    }

    async fn test_state(endpoint: String) -> (AppState, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let config = QaConfig {
            endpoint,
            ..QaConfig::default()
        };
        let pool = DatabasePool::new(&database_url(dir.path(), "test.db"))
            .await
            .unwrap();
        (AppState::new(config, dir.path().to_path_buf(), pool), dir)
    }

    fn ask_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/ask")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(resp: Response) -> serde_json::Value {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn stored_records(state: &AppState) -> Vec<(String, String)> {
        sqlx::query_as("SELECT question, answer FROM qa_records ORDER BY id")
            .fetch_all(&state.db_pool.writer)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (endpoint, _) = spawn_generator(StatusCode::OK, "").await;
        let (state, _dir) = test_state(endpoint).await;

        let resp = build_router(state)
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_index_serves_ui() {
        let (endpoint, _) = spawn_generator(StatusCode::OK, "").await;
        let (state, _dir) = test_state(endpoint).await;

        let resp = build_router(state)
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("Question Answer Bot"));
        assert!(html.contains("Ask me any question, and I'll get an answer for you!"));
        assert!(html.contains("What is your question"));
    }

    #[tokio::test]
    async fn test_ask_two_plus_two_end_to_end() {
        let (endpoint, hits) = spawn_generator(StatusCode::OK, TWO_PLUS_TWO_BODY).await;
        let (state, _dir) = test_state(endpoint).await;

        let resp = build_router(state.clone())
            .oneshot(ask_request(r#"{"question":"What is 2+2?"}"#))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(json["data"]["question"], "What is 2+2?");
        assert_eq!(json["data"]["answer"], "4");
        assert_eq!(json["data"]["outcome"]["status"], "generated");
        assert_eq!(json["data"]["persisted"], true);

        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(
            stored_records(&state).await,
            vec![("What is 2+2?".to_string(), "4".to_string())]
        );
    }

    #[tokio::test]
    async fn test_ask_upstream_500_stores_error_text() {
        let (endpoint, hits) =
            spawn_generator(StatusCode::INTERNAL_SERVER_ERROR, "upstream failure").await;
        let (state, _dir) = test_state(endpoint).await;

        let resp = build_router(state.clone())
            .oneshot(ask_request(r#"{"question":"What is 2+2?"}"#))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        let answer = json["data"]["answer"].as_str().unwrap().to_string();
        assert!(answer.starts_with("Error:"), "{answer}");
        assert_eq!(json["data"]["outcome"]["status"], "generation_failed");
        assert_eq!(json["data"]["outcome"]["kind"], "status");

        assert_eq!(hits.load(Ordering::SeqCst), 1);
        let records = stored_records(&state).await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].0, "What is 2+2?");
        assert_eq!(records[0].1, answer);
    }

    #[tokio::test]
    async fn test_ask_missing_question_is_validation_error() {
        let (endpoint, hits) = spawn_generator(StatusCode::OK, TWO_PLUS_TWO_BODY).await;
        let (state, _dir) = test_state(endpoint).await;

        let resp = build_router(state.clone())
            .oneshot(ask_request("{}"))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json = body_json(resp).await;
        assert!(json["data"].is_null());
        assert_eq!(json["errors"][0]["code"], "VALIDATION_ERROR");
        assert_eq!(hits.load(Ordering::SeqCst), 0);
        assert!(stored_records(&state).await.is_empty());
    }

    #[tokio::test]
    async fn test_ask_store_failure_is_500() {
        let (endpoint, hits) = spawn_generator(StatusCode::OK, TWO_PLUS_TWO_BODY).await;
        let (state, _dir) = test_state(endpoint).await;
        state.shutdown().await;

        let resp = build_router(state)
            .oneshot(ask_request(r#"{"question":"What is 2+2?"}"#))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(resp).await;
        assert_eq!(json["errors"][0]["code"], "STORE_ERROR");
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }
}
