#[cfg(test)]
mod tests {
    use super::super::common::{PNG, json_body, seed_module};
    use crate::helpers::{MultipartBody, make_test_app};
    use axum::http::StatusCode;
    use db::ModuleRepository;
    use db::test_utils::seed_department;
    use serial_test::serial;
    use tower::ServiceExt;

    #[tokio::test]
    #[serial]
    async fn update_without_image_keeps_preview() {
        let (app, app_state) = make_test_app().await;
        let dept = seed_department(app_state.db(), "Engineering").await;
        let id = seed_module(&app_state, dept.id, "Lab Manual").await;

        let req = MultipartBody::new()
            .text("moduleId", &id.to_string())
            .text("quantity", "3")
            .into_request("POST", "/api/modules/update");
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = json_body(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Module updated successfully");

        let stored = ModuleRepository::get(app_state.db(), id).await.unwrap().unwrap();
        assert_eq!(stored.quantity, 3);
        assert_eq!(stored.preview, Some(PNG.to_vec()));
    }

    #[tokio::test]
    #[serial]
    async fn put_with_image_replaces_preview() {
        let (app, app_state) = make_test_app().await;
        let dept = seed_department(app_state.db(), "Engineering").await;
        let id = seed_module(&app_state, dept.id, "Lab Manual").await;

        let req = MultipartBody::new()
            .text("quantity", "7")
            .file("image", "new.gif", "image/gif", b"GIF89a")
            .into_request("PUT", &format!("/api/modules/{id}"));
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let stored = ModuleRepository::get(app_state.db(), id).await.unwrap().unwrap();
        assert_eq!(stored.quantity, 7);
        assert_eq!(stored.preview, Some(b"GIF89a".to_vec()));
        assert_eq!(stored.title, "Lab Manual");
    }

    #[tokio::test]
    #[serial]
    async fn put_with_empty_upload_keeps_preview() {
        let (app, app_state) = make_test_app().await;
        let dept = seed_department(app_state.db(), "Engineering").await;
        let id = seed_module(&app_state, dept.id, "Lab Manual").await;

        let req = MultipartBody::new()
            .text("quantity", "5")
            .file("image", "", "application/octet-stream", b"")
            .into_request("PUT", &format!("/api/modules/{id}"));
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let stored = ModuleRepository::get(app_state.db(), id).await.unwrap().unwrap();
        assert_eq!(stored.preview, Some(PNG.to_vec()));
    }

    #[tokio::test]
    #[serial]
    async fn update_with_unsupported_image_type_is_rejected() {
        let (app, app_state) = make_test_app().await;
        let dept = seed_department(app_state.db(), "Engineering").await;
        let id = seed_module(&app_state, dept.id, "Lab Manual").await;

        let req = MultipartBody::new()
            .text("quantity", "4")
            .file("image", "logo.svg", "image/svg+xml", b"<svg/>")
            .into_request("PUT", &format!("/api/modules/{id}"));
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

        let stored = ModuleRepository::get(app_state.db(), id).await.unwrap().unwrap();
        assert_eq!(stored.quantity, 10);
    }

    #[tokio::test]
    #[serial]
    async fn update_missing_module_is_not_found() {
        let (app, _) = make_test_app().await;

        let req = MultipartBody::new()
            .text("quantity", "4")
            .into_request("PUT", "/api/modules/9999");
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = json_body(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Module not found");
    }

    #[tokio::test]
    #[serial]
    async fn update_without_quantity_is_bad_request() {
        let (app, app_state) = make_test_app().await;
        let dept = seed_department(app_state.db(), "Engineering").await;
        let id = seed_module(&app_state, dept.id, "Lab Manual").await;

        let req = MultipartBody::new()
            .text("moduleId", &id.to_string())
            .into_request("POST", "/api/modules/update");
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = json_body(response).await;
        assert_eq!(json["message"], "Missing required field(s): quantity");
    }
}
