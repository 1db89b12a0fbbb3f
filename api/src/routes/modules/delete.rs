use crate::response::{ApiError, ApiResponse};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::Value;
use services::{AppError, ModuleService, validation::ModuleForm};
use util::state::AppState;

/// Body of `POST /modules/delete`. The id may be sent as a number or a string.
#[derive(Debug, Deserialize)]
pub struct DeleteModuleRequest {
    #[serde(rename = "moduleId", alias = "module_id", alias = "id")]
    pub module_id: Option<Value>,
}

impl DeleteModuleRequest {
    fn into_form(self) -> Result<ModuleForm, AppError> {
        let mut form = ModuleForm::default();
        match self.module_id {
            None => {}
            Some(Value::Number(n)) => {
                form.set_text("moduleId", n.to_string());
            }
            Some(Value::String(s)) => {
                form.set_text("moduleId", s);
            }
            Some(other) => {
                return Err(AppError::Validation(format!(
                    "moduleId must be a number or a numeric string, got {other}"
                )));
            }
        }
        Ok(form)
    }
}

/// DELETE /api/modules/{module_id}
///
/// Permanently remove a module.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "message": "Module deleted successfully"
/// }
/// ```
///
/// - `400 Bad Request` (id is not a positive integer)
/// - `404 Not Found`
/// ```json
/// {
///   "success": false,
///   "message": "Module not found"
/// }
/// ```
pub async fn delete_module_by_path(
    State(app_state): State<AppState>,
    Path(module_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let form = ModuleForm::default().with_text("moduleId", module_id);
    remove(app_state, form).await
}

/// POST /api/modules/delete
///
/// ### Request Body
/// ```json
/// { "moduleId": 12 }
/// ```
/// `id` is accepted in place of `moduleId`, and the value may be a string.
///
/// Responses match [`delete_module_by_path`]; an unreadable body is a `400`.
pub async fn delete_module(
    State(app_state): State<AppState>,
    body: Result<Json<DeleteModuleRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body?;
    remove(app_state, body.into_form()?).await
}

async fn remove(app_state: AppState, form: ModuleForm) -> Result<impl IntoResponse, ApiError> {
    ModuleService::new(app_state.db_clone()).delete(form).await?;
    Ok(Json(ApiResponse::ok("Module deleted successfully")))
}
