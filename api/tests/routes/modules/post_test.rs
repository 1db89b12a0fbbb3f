#[cfg(test)]
mod tests {
    use super::super::common::{PNG, create_form, get, json_body};
    use crate::helpers::{MultipartBody, make_test_app};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use base64::{Engine, engine::general_purpose::STANDARD};
    use db::test_utils::{seed_course, seed_department};
    use db::{ModuleFilter, ModuleRepository};
    use serial_test::serial;
    use tower::ServiceExt;
    use util::config::AppConfig;

    #[tokio::test]
    #[serial]
    async fn create_module_success_is_listed() {
        let (app, app_state) = make_test_app().await;
        let dept = seed_department(app_state.db(), "Engineering").await;

        let req = create_form(dept.id).into_request("POST", "/api/modules");
        let response = app.clone().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let json = json_body(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Module created successfully");

        let response = app.oneshot(get("/api/modules")).await.unwrap();
        let json = json_body(response).await;
        let modules = json["modules"].as_array().unwrap();
        assert_eq!(modules.len(), 1);
        assert_eq!(modules[0]["title"], "Lab Manual");
        assert_eq!(modules[0]["quantity"], 10);
        assert_eq!(modules[0]["department"], "Engineering");
        let preview = modules[0]["preview"].as_str().unwrap();
        assert_eq!(STANDARD.decode(preview).unwrap(), PNG);
    }

    #[tokio::test]
    #[serial]
    async fn create_module_with_course_and_legacy_names() {
        let (app, app_state) = make_test_app().await;
        let dept = seed_department(app_state.db(), "Engineering").await;
        let course = seed_course(app_state.db(), dept.id, "Civil Engineering").await;

        let req = MultipartBody::new()
            .text("moduleName", "Surveying Notes")
            .text("semester", "2")
            .text("department", &dept.id.to_string())
            .text("course", &course.id.to_string())
            .text("quantity", "0")
            .file("moduleImage", "notes.jpg", "image/jpeg", b"\xff\xd8\xff")
            .into_request("POST", "/api/modules");

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let stored = ModuleRepository::list(app_state.db(), &ModuleFilter::new())
            .await
            .unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].title, "Surveying Notes");
        assert_eq!(stored[0].quantity, 0);
        assert_eq!(stored[0].course_name.as_deref(), Some("Civil Engineering"));
    }

    #[tokio::test]
    #[serial]
    async fn create_module_non_numeric_quantity_is_rejected() {
        let (app, app_state) = make_test_app().await;
        let dept = seed_department(app_state.db(), "Engineering").await;

        let req = create_form(dept.id)
            .text("quantity", "abc")
            .into_request("POST", "/api/modules");
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = json_body(response).await;
        assert_eq!(json["success"], false);
        assert!(json["message"].as_str().unwrap().contains("quantity"));

        let stored = ModuleRepository::list(app_state.db(), &ModuleFilter::new())
            .await
            .unwrap();
        assert!(stored.is_empty());
    }

    #[tokio::test]
    #[serial]
    async fn create_module_missing_fields_are_all_reported() {
        let (app, _) = make_test_app().await;

        let req = MultipartBody::new()
            .text("semester", "1")
            .into_request("POST", "/api/modules");
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = json_body(response).await;
        assert_eq!(
            json["message"],
            "Missing required field(s): title, departmentId, quantity, image"
        );
    }

    #[tokio::test]
    #[serial]
    async fn create_module_without_multipart_body_is_bad_request() {
        let (app, _) = make_test_app().await;

        let req = Request::builder()
            .method("POST")
            .uri("/api/modules")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"title":"Lab Manual"}"#))
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = json_body(response).await;
        assert_eq!(json["success"], false);
    }

    #[tokio::test]
    #[serial]
    async fn create_module_over_upload_limit_is_payload_too_large() {
        AppConfig::set_max_upload_bytes(16);
        let (app, app_state) = make_test_app().await;
        let dept = seed_department(app_state.db(), "Engineering").await;

        let req = create_form(dept.id).into_request("POST", "/api/modules");
        let response = app.oneshot(req).await.unwrap();
        AppConfig::reset();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

        let json = json_body(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Upload exceeds the 16 byte limit");

        let stored = ModuleRepository::list(app_state.db(), &ModuleFilter::new())
            .await
            .unwrap();
        assert!(stored.is_empty());
    }
}
