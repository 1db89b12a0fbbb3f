#[cfg(test)]
mod tests {
    use crate::helpers::app::make_test_app;
    use axum::{
        body::Body as AxumBody,
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use serial_test::serial;
    use tower::ServiceExt;
    use util::config::AppConfig;

    #[tokio::test]
    #[serial]
    async fn health_check_returns_ok_json() {
        let (app, _) = make_test_app().await;

        let req = Request::builder()
            .method("GET")
            .uri("/api/health")
            .body(AxumBody::empty())
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["status"], "OK");
        assert_eq!(json["message"], "Health check passed");
    }

    #[tokio::test]
    #[serial]
    async fn unknown_route_is_not_found() {
        let (app, _) = make_test_app().await;

        let req = Request::builder()
            .uri("/api/nothing-here")
            .body(AxumBody::empty())
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    #[serial]
    async fn cors_allows_only_configured_origins() {
        AppConfig::set_cors_allowed_origins("http://localhost:5173");
        let (app, _) = make_test_app().await;

        let preflight = |origin: &str| {
            Request::builder()
                .method("OPTIONS")
                .uri("/api/modules")
                .header("origin", origin)
                .header("access-control-request-method", "POST")
                .body(AxumBody::empty())
                .unwrap()
        };

        let response = app.clone().oneshot(preflight("http://localhost:5173")).await.unwrap();
        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "http://localhost:5173"
        );

        let response = app.oneshot(preflight("http://evil.example")).await.unwrap();
        assert!(response.headers().get("access-control-allow-origin").is_none());

        AppConfig::reset();
    }
}
