pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::counsel::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::handle_root))
        .route("/health", get(health::health_handler))
        .route("/statements", get(handlers::handle_statements))
        .route("/submit_answers", post(handlers::handle_submit_answers))
        .route("/upload_resume", post(handlers::handle_upload_resume))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::util::ServiceExt;

    use super::*;
    use crate::llm_client::LlmClient;

    fn test_router() -> Router {
        let state = AppState {
            llm: LlmClient::new("test-key".to_string()),
        };
        build_router(state)
    }

    async fn body_json(body: Body) -> Value {
        let bytes = body.collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_root_returns_welcome_message() {
        let response = test_router()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response.into_body()).await;
        assert_eq!(
            json["message"],
            "Welcome to Interactive Career Counselor AI Agent!"
        );
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let response = test_router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response.into_body()).await;
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_statements_served_in_catalog_order() {
        let response = test_router()
            .oneshot(Request::get("/statements").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response.into_body()).await;
        let items = json.as_array().unwrap();
        assert_eq!(items.len(), 10);
        assert_eq!(items[0]["id"], 1);
        assert_eq!(items[0]["category"], "Data");
        assert_eq!(items[9]["category"], "Guardrails");
    }

    #[tokio::test]
    async fn test_unsupported_upload_returns_error_payload() {
        let boundary = "X-COUNSELOR-TEST-BOUNDARY";
        let body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"resume.txt\"\r\n\
             Content-Type: text/plain\r\n\r\n\
             just some plain text\r\n\
             --{boundary}--\r\n"
        );
        let request = Request::post("/upload_resume")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response.into_body()).await;
        assert_eq!(json["error"]["code"], "UNSUPPORTED_FILE_TYPE");
    }

    #[tokio::test]
    async fn test_upload_without_file_field_is_rejected() {
        let boundary = "X-COUNSELOR-TEST-BOUNDARY";
        let body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"other\"\r\n\r\n\
             value\r\n\
             --{boundary}--\r\n"
        );
        let request = Request::post("/upload_resume")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response.into_body()).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }
}
