use crate::response::{ApiError, ApiResponse};
use crate::routes::modules::common::read_module_form;
use axum::{
    Json,
    extract::{Multipart, State, multipart::MultipartRejection},
    http::StatusCode,
    response::IntoResponse,
};
use services::ModuleService;
use util::state::AppState;

/// POST /api/modules
///
/// Create a new module.
///
/// ### Request Body (Multipart Form Data)
/// - `title` (string, required, max 255 chars), alias `moduleName`
/// - `semester` (string, required, max 32 chars)
/// - `departmentId` (integer, required), alias `department`
/// - `quantity` (integer ≥ 0, required)
/// - `image` (file, required, non-empty), alias `moduleImage`
/// - `courseId` (integer, optional), alias `course`
///
/// ### Responses
///
/// - `201 Created`
/// ```json
/// {
///   "success": true,
///   "message": "Module created successfully"
/// }
/// ```
///
/// - `400 Bad Request`
/// ```json
/// {
///   "success": false,
///   "message": "Missing required field(s): title, image"
/// }
/// ```
///
/// - `413 Payload Too Large` (body over `MAX_UPLOAD_BYTES`)
///
/// - `500 Internal Server Error`
/// ```json
/// {
///   "success": false,
///   "message": "A storage error occurred"
/// }
/// ```
pub async fn create_module(
    State(app_state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let form = read_module_form(multipart?).await?;
    ModuleService::new(app_state.db_clone()).create(form).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("Module created successfully")),
    ))
}
