#[cfg(test)]
mod tests {
    use super::super::common::{get, json_body, seed_module};
    use crate::helpers::make_test_app;
    use axum::http::StatusCode;
    use db::test_utils::{seed_course, seed_department};
    use db::{ModuleChanges, ModuleRepository};
    use serial_test::serial;
    use tower::ServiceExt;

    #[tokio::test]
    #[serial]
    async fn list_modules_empty() {
        let (app, _) = make_test_app().await;

        let response = app.oneshot(get("/api/modules")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = json_body(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["modules"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    #[serial]
    async fn list_modules_filters_by_department_and_query() {
        let (app, app_state) = make_test_app().await;
        let engineering = seed_department(app_state.db(), "Engineering").await;
        let science = seed_department(app_state.db(), "Science").await;
        seed_module(&app_state, engineering.id, "Lab Manual").await;
        seed_module(&app_state, science.id, "Chemistry Workbook").await;
        seed_module(&app_state, science.id, "Physics Lab Guide").await;

        let uri = format!("/api/modules?departmentId={}", science.id);
        let json = json_body(app.clone().oneshot(get(&uri)).await.unwrap()).await;
        assert_eq!(json["modules"].as_array().unwrap().len(), 2);

        let json = json_body(app.clone().oneshot(get("/api/modules?query=LAB")).await.unwrap()).await;
        let titles: Vec<&str> = json["modules"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, vec!["Lab Manual", "Physics Lab Guide"]);

        let response = app.oneshot(get("/api/modules?departmentId=abc")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    #[serial]
    async fn list_modules_reports_unmatched_names_as_null() {
        let (app, app_state) = make_test_app().await;
        let science = seed_department(app_state.db(), "Science").await;
        let physics = seed_course(app_state.db(), science.id, "Physics").await;
        let engineering = seed_department(app_state.db(), "Engineering").await;

        // Course from another department, and no preview stored.
        ModuleRepository::insert(
            app_state.db(),
            ModuleChanges {
                title: Some("Mismatched".into()),
                preview: Some(None),
                semester: Some("1".into()),
                quantity: Some(1),
                department_id: Some(engineering.id),
                course_id: Some(Some(physics.id)),
            },
        )
        .await
        .unwrap();

        let json = json_body(app.oneshot(get("/api/modules")).await.unwrap()).await;
        let module = &json["modules"][0];
        assert_eq!(module["department"], "Engineering");
        assert_eq!(module["courseId"], physics.id);
        assert!(module["course"].is_null());
        assert!(module.get("preview").is_some_and(|p| p.is_null()));
    }

    #[tokio::test]
    #[serial]
    async fn get_module_success() {
        let (app, app_state) = make_test_app().await;
        let dept = seed_department(app_state.db(), "Engineering").await;
        let id = seed_module(&app_state, dept.id, "Lab Manual").await;

        let response = app.oneshot(get(&format!("/api/modules/{id}"))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = json_body(response).await;
        assert_eq!(json["module"]["id"], id);
        assert_eq!(json["module"]["title"], "Lab Manual");
        assert_eq!(json["module"]["departmentId"], dept.id);
    }

    #[tokio::test]
    #[serial]
    async fn get_module_not_found_and_bad_id() {
        let (app, _) = make_test_app().await;

        let response = app.clone().oneshot(get("/api/modules/9999")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = json_body(response).await;
        assert_eq!(json["message"], "Module not found");

        let response = app.oneshot(get("/api/modules/abc")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
