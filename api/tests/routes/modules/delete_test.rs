#[cfg(test)]
mod tests {
    use super::super::common::{json_body, json_request, seed_module};
    use crate::helpers::make_test_app;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use db::ModuleRepository;
    use db::test_utils::seed_department;
    use serial_test::serial;
    use tower::ServiceExt;

    fn delete(uri: &str) -> Request<Body> {
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    #[serial]
    async fn delete_module_twice_is_not_found_the_second_time() {
        let (app, app_state) = make_test_app().await;
        let dept = seed_department(app_state.db(), "Engineering").await;
        let id = seed_module(&app_state, dept.id, "Lab Manual").await;
        let uri = format!("/api/modules/{id}");

        let response = app.clone().oneshot(delete(&uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["message"], "Module deleted successfully");
        assert!(!ModuleRepository::exists(app_state.db(), id).await.unwrap());

        let response = app.oneshot(delete(&uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    #[serial]
    async fn post_delete_accepts_number_string_and_alias() {
        let (app, app_state) = make_test_app().await;
        let dept = seed_department(app_state.db(), "Engineering").await;
        let first = seed_module(&app_state, dept.id, "Lab Manual").await;
        let second = seed_module(&app_state, dept.id, "Workbook").await;
        let third = seed_module(&app_state, dept.id, "Study Guide").await;

        for body in [
            format!(r#"{{"moduleId": {first}}}"#),
            format!(r#"{{"moduleId": "{second}"}}"#),
            format!(r#"{{"id": {third}}}"#),
        ] {
            let req = json_request("POST", "/api/modules/delete", &body);
            let response = app.clone().oneshot(req).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK, "body {body}");
        }

        for id in [first, second, third] {
            assert!(!ModuleRepository::exists(app_state.db(), id).await.unwrap());
        }
    }

    #[tokio::test]
    #[serial]
    async fn post_delete_rejects_bad_bodies() {
        let (app, _) = make_test_app().await;

        for body in ["{}", r#"{"moduleId": "abc"}"#, r#"{"moduleId": true}"#, "not json"] {
            let req = json_request("POST", "/api/modules/delete", body);
            let response = app.clone().oneshot(req).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body {body}");

            let json = json_body(response).await;
            assert_eq!(json["success"], false);
        }
    }

    #[tokio::test]
    #[serial]
    async fn delete_missing_module_leaves_others_untouched() {
        let (app, app_state) = make_test_app().await;
        let dept = seed_department(app_state.db(), "Engineering").await;
        let id = seed_module(&app_state, dept.id, "Lab Manual").await;

        let req = json_request("POST", "/api/modules/delete", r#"{"moduleId": 9999}"#);
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(ModuleRepository::exists(app_state.db(), id).await.unwrap());
    }
}
