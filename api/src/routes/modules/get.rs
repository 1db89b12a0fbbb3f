use crate::response::{ApiError, ApiResponse};
use crate::routes::modules::common::{ListQuery, ModuleDetail, ModuleList, ModuleResponse};
use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    response::IntoResponse,
};
use services::{ModuleService, validation::parse_module_id};
use util::state::AppState;

/// GET /api/modules
///
/// List modules with their department and course names, ordered by id.
///
/// ### Query Parameters (all optional)
/// - `departmentId` (i64): only modules of this department
/// - `courseId` (i64): only modules of this course
/// - `semester` (string): exact semester match
/// - `query` (string): case-insensitive substring of the title
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "message": "Modules retrieved successfully",
///   "modules": [
///     {
///       "id": 1,
///       "title": "Lab Manual",
///       "preview": "iVBORw0KGgo...",
///       "semester": "1",
///       "quantity": 10,
///       "departmentId": 2,
///       "department": "Engineering",
///       "courseId": null,
///       "course": null
///     }
///   ]
/// }
/// ```
///
/// - `400 Bad Request` (malformed id filter)
/// - `500 Internal Server Error`
pub async fn list_modules(
    State(app_state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query?;
    let filter = query.into_filter()?;

    let service = ModuleService::new(app_state.db_clone());
    let modules = service
        .list(&filter)
        .await?
        .into_iter()
        .map(ModuleResponse::from)
        .collect();

    Ok(Json(ApiResponse::success(
        ModuleList { modules },
        "Modules retrieved successfully",
    )))
}

/// GET /api/modules/{module_id}
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "message": "Module retrieved successfully",
///   "module": { "id": 1, "title": "Lab Manual", ... }
/// }
/// ```
///
/// - `400 Bad Request` (id is not a positive integer)
/// - `404 Not Found`
pub async fn get_module(
    State(app_state): State<AppState>,
    Path(module_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_module_id(&module_id)?;
    let module = ModuleService::new(app_state.db_clone()).get(id).await?;

    Ok(Json(ApiResponse::success(
        ModuleDetail {
            module: module.into(),
        },
        "Module retrieved successfully",
    )))
}
