use crate::response::{ApiError, ApiResponse, Empty};
use crate::routes::modules::common::read_module_form;
use axum::{
    Json,
    extract::{Multipart, Path, State, multipart::MultipartRejection},
    response::IntoResponse,
};
use services::{ModuleService, validation::ModuleForm};
use util::state::AppState;

/// PUT /api/modules/{module_id}
///
/// Set a module's quantity and optionally replace its preview image. Any
/// `moduleId` field in the body is ignored in favour of the path.
///
/// ### Request Body (Multipart Form Data)
/// - `quantity` (integer ≥ 0, required)
/// - `image` (file, optional): `image/jpeg`, `image/png` or `image/gif`.
///   Leaving it out, or sending an empty file, keeps the stored preview.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "message": "Module updated successfully"
/// }
/// ```
///
/// - `400 Bad Request` (missing or malformed field)
/// - `404 Not Found` (no module with this id)
/// - `413 Payload Too Large` (body over `MAX_UPLOAD_BYTES`)
/// - `415 Unsupported Media Type`
/// ```json
/// {
///   "success": false,
///   "message": "Invalid image format \"image/svg+xml\": expected one of image/jpeg, image/png, image/gif"
/// }
/// ```
pub async fn edit_module(
    State(app_state): State<AppState>,
    Path(module_id): Path<String>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let mut form = read_module_form(multipart?).await?;
    form.set_text("moduleId", module_id);
    apply_update(app_state, form).await
}

/// POST /api/modules/update
///
/// Form-friendly variant of [`edit_module`]; the target is named by the
/// `moduleId` field (alias `module_id`).
pub async fn update_module(
    State(app_state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let form = read_module_form(multipart?).await?;
    apply_update(app_state, form).await
}

async fn apply_update(
    app_state: AppState,
    form: ModuleForm,
) -> Result<Json<ApiResponse<Empty>>, ApiError> {
    ModuleService::new(app_state.db_clone()).update(form).await?;
    Ok(Json(ApiResponse::ok("Module updated successfully")))
}
