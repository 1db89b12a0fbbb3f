use axum::extract::{Multipart, multipart::MultipartError};
use axum::http::StatusCode;
use base64::{Engine, engine::general_purpose::STANDARD};
use db::{ModuleFilter, ModuleListing};
use serde::{Deserialize, Serialize};
use services::AppError;
use services::validation::{ImageUpload, ModuleForm};
use util::config;

/// A module as returned to clients.
///
/// `preview` is the stored image encoded as standard base64. It is always
/// present in the JSON, as `null` when no image is stored.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ModuleResponse {
    pub id: i64,
    pub title: String,
    pub preview: Option<String>,
    pub semester: String,
    pub quantity: i32,
    pub department_id: i64,
    pub department: Option<String>,
    pub course_id: Option<i64>,
    pub course: Option<String>,
}

impl From<ModuleListing> for ModuleResponse {
    fn from(listing: ModuleListing) -> Self {
        Self {
            id: listing.id,
            title: listing.title,
            preview: listing
                .preview
                .filter(|bytes| !bytes.is_empty())
                .map(|bytes| STANDARD.encode(bytes)),
            semester: listing.semester,
            quantity: listing.quantity,
            department_id: listing.department_id,
            department: listing.department_name,
            course_id: listing.course_id,
            course: listing.course_name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ModuleList {
    pub modules: Vec<ModuleResponse>,
}

#[derive(Debug, Serialize)]
pub struct ModuleDetail {
    pub module: ModuleResponse,
}

/// Query string accepted by `GET /modules`.
///
/// Values stay textual here so a malformed id is reported in the usual
/// envelope instead of as a bare extractor rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub department_id: Option<String>,
    pub course_id: Option<String>,
    pub semester: Option<String>,
    pub query: Option<String>,
}

impl ListQuery {
    pub fn into_filter(self) -> Result<ModuleFilter, AppError> {
        let mut filter = ModuleFilter::new();
        if let Some(id) = parse_id_param(self.department_id.as_deref(), "departmentId")? {
            filter = filter.with_department_id(id);
        }
        if let Some(id) = parse_id_param(self.course_id.as_deref(), "courseId")? {
            filter = filter.with_course_id(id);
        }
        filter.semester = self.semester;
        filter.query = self.query;
        Ok(filter)
    }
}

fn parse_id_param(raw: Option<&str>, name: &str) -> Result<Option<i64>, AppError> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(value) => value
            .parse::<i64>()
            .map(Some)
            .map_err(|_| AppError::Validation(format!("{name} must be a whole number, got {value:?}"))),
    }
}

/// Drains a multipart body into a [`ModuleForm`].
///
/// The `image` (or `moduleImage`) part is kept as raw bytes with its declared
/// content type. Unknown text fields are ignored.
pub async fn read_module_form(mut multipart: Multipart) -> Result<ModuleForm, AppError> {
    let mut form = ModuleForm::default();

    while let Some(field) = multipart.next_field().await.map_err(malformed)? {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };

        if ModuleForm::is_image_field(&name) {
            let file_name = field.file_name().map(str::to_owned);
            let content_type = field.content_type().map(str::to_owned);
            let data = field.bytes().await.map_err(malformed)?.to_vec();
            form.image = Some(ImageUpload {
                file_name,
                content_type,
                data,
            });
        } else {
            let value = field.text().await.map_err(malformed)?;
            if !form.set_text(&name, value) {
                tracing::debug!(field = %name, "Ignoring unknown form field");
            }
        }
    }

    Ok(form)
}

fn malformed(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(format!(
            "Upload exceeds the {} byte limit",
            config::max_upload_bytes()
        ))
    } else {
        AppError::Validation(format!("Malformed multipart body: {}", err.body_text()))
    }
}
