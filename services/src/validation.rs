//! Input Validator.
//!
//! Turns a loosely typed [`ModuleForm`] into one of the typed commands
//! ([`CreateModule`], [`UpdateModule`], [`DeleteModule`]). Nothing here
//! touches the database.

use crate::error::AppError;
use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;
use validator::{Validate, ValidationErrors};

/// Content types accepted for a replacement preview image.
pub const ACCEPTED_IMAGE_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/gif"];

/// An uploaded file as received from the client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

impl ImageUpload {
    pub fn new(content_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            file_name: None,
            content_type: Some(content_type.into()),
            data,
        }
    }

    /// A file input left blank still produces an upload part, just without bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn has_accepted_type(&self) -> bool {
        self.content_type
            .as_deref()
            .and_then(|ct| ct.split(';').next())
            .map(|mime| mime.trim().to_ascii_lowercase())
            .is_some_and(|mime| ACCEPTED_IMAGE_TYPES.contains(&mime.as_str()))
    }
}

/// Raw request fields, exactly as submitted. Every value is optional text
/// until validation decides otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleForm {
    pub module_id: Option<String>,
    pub title: Option<String>,
    pub semester: Option<String>,
    pub department_id: Option<String>,
    pub course_id: Option<String>,
    pub quantity: Option<String>,
    pub image: Option<ImageUpload>,
}

impl ModuleForm {
    /// Stores a text field under its canonical slot.
    ///
    /// Also accepts the field names used by the legacy admin page. Returns
    /// `false` for names that are not module fields.
    pub fn set_text(&mut self, name: &str, value: impl Into<String>) -> bool {
        let slot = match name {
            "moduleId" | "module_id" | "id" => &mut self.module_id,
            "title" | "moduleName" => &mut self.title,
            "semester" => &mut self.semester,
            "departmentId" | "department_id" | "department" => &mut self.department_id,
            "courseId" | "course_id" | "course" => &mut self.course_id,
            "quantity" => &mut self.quantity,
            _ => return false,
        };
        *slot = Some(value.into());
        true
    }

    pub fn is_image_field(name: &str) -> bool {
        matches!(name, "image" | "moduleImage")
    }

    pub fn with_text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_text(name, value);
        self
    }

    pub fn with_image(mut self, image: ImageUpload) -> Self {
        self.image = Some(image);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct CreateModule {
    #[validate(length(min = 1, max = 255, message = "title must be between 1 and 255 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 32, message = "semester must be between 1 and 32 characters"))]
    pub semester: String,

    #[validate(range(min = 1, message = "departmentId must be a positive integer"))]
    pub department_id: i64,

    #[validate(range(min = 1, message = "courseId must be a positive integer"))]
    pub course_id: Option<i64>,

    #[validate(range(min = 0, message = "quantity must be a non-negative integer"))]
    pub quantity: i32,

    pub preview: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct UpdateModule {
    #[validate(range(min = 1, message = "moduleId must be a positive integer"))]
    pub id: i64,

    #[validate(range(min = 0, message = "quantity must be a non-negative integer"))]
    pub quantity: i32,

    /// Replacement image; `None` keeps the stored preview.
    pub preview: Option<Vec<u8>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Validate)]
pub struct DeleteModule {
    #[validate(range(min = 1, message = "moduleId must be a positive integer"))]
    pub id: i64,
}

/// Joins validator messages into one line, ordered by field name.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(message) => message.to_string(),
                None => format!("{field} is invalid"),
            })
        })
        .collect::<Vec<_>>()
        .join("; ")
}

pub fn validate_create(form: ModuleForm) -> Result<CreateModule, AppError> {
    let mut missing = Vec::new();
    let title = required(&form.title, "title", &mut missing);
    let semester = required(&form.semester, "semester", &mut missing);
    let department_id = required(&form.department_id, "departmentId", &mut missing);
    let quantity = required(&form.quantity, "quantity", &mut missing);
    let image = form.image.filter(|image| !image.is_empty());
    if image.is_none() {
        missing.push("image");
    }
    reject_missing(&missing)?;

    let mut invalid = Vec::new();
    let department_id = parse_integer::<i64>(department_id, "departmentId", &mut invalid);
    let quantity = parse_integer::<i32>(quantity, "quantity", &mut invalid);
    let course_id = parse_integer::<i64>(optional(&form.course_id), "courseId", &mut invalid);
    reject_invalid(&invalid)?;

    let command = CreateModule {
        title: title.unwrap_or_default().to_string(),
        semester: semester.unwrap_or_default().to_string(),
        department_id: department_id.unwrap_or_default(),
        course_id,
        quantity: quantity.unwrap_or_default(),
        preview: image.map(|image| image.data).unwrap_or_default(),
    };
    check(&command)?;
    Ok(command)
}

pub fn validate_update(form: ModuleForm) -> Result<UpdateModule, AppError> {
    let mut missing = Vec::new();
    let module_id = required(&form.module_id, "moduleId", &mut missing);
    let quantity = required(&form.quantity, "quantity", &mut missing);
    reject_missing(&missing)?;

    let mut invalid = Vec::new();
    let module_id = parse_integer::<i64>(module_id, "moduleId", &mut invalid);
    let quantity = parse_integer::<i32>(quantity, "quantity", &mut invalid);
    reject_invalid(&invalid)?;

    let preview = match form.image.filter(|image| !image.is_empty()) {
        Some(image) if image.has_accepted_type() => Some(image.data),
        Some(image) => {
            return Err(AppError::UnsupportedMedia(format!(
                "Invalid image format {:?}: expected one of {}",
                image.content_type.unwrap_or_default(),
                ACCEPTED_IMAGE_TYPES.join(", ")
            )));
        }
        None => None,
    };

    let command = UpdateModule {
        id: module_id.unwrap_or_default(),
        quantity: quantity.unwrap_or_default(),
        preview,
    };
    check(&command)?;
    Ok(command)
}

pub fn validate_delete(form: ModuleForm) -> Result<DeleteModule, AppError> {
    let mut missing = Vec::new();
    let module_id = required(&form.module_id, "moduleId", &mut missing);
    reject_missing(&missing)?;

    Ok(DeleteModule {
        id: parse_module_id(module_id.unwrap_or_default())?,
    })
}

/// Parses a module id taken from a path segment or query string.
pub fn parse_module_id(raw: &str) -> Result<i64, AppError> {
    let mut invalid = Vec::new();
    let id = parse_integer::<i64>(Some(raw), "moduleId", &mut invalid);
    reject_invalid(&invalid)?;

    let command = DeleteModule { id: id.unwrap_or_default() };
    check(&command)?;
    Ok(command.id)
}

fn optional(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn required<'a>(
    value: &'a Option<String>,
    name: &'static str,
    missing: &mut Vec<&'static str>,
) -> Option<&'a str> {
    let value = optional(value);
    if value.is_none() {
        missing.push(name);
    }
    value
}

// Strict: "12abc", "1.5" and "" are all rejected rather than coerced. An
// absent value yields `None` without recording an error.
fn parse_integer<T>(raw: Option<&str>, name: &str, invalid: &mut Vec<String>) -> Option<T>
where
    T: FromStr<Err = ParseIntError>,
{
    let raw = raw?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(err) => {
            let message = match err.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    format!("{name} is out of range, got {raw:?}")
                }
                _ => format!("{name} must be a whole number, got {raw:?}"),
            };
            invalid.push(message);
            None
        }
    }
}

fn reject_missing(missing: &[&str]) -> Result<(), AppError> {
    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "Missing required field(s): {}",
            missing.join(", ")
        )))
    }
}

fn reject_invalid(invalid: &[String]) -> Result<(), AppError> {
    if invalid.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(invalid.join("; ")))
    }
}

fn check<T: Validate>(command: &T) -> Result<(), AppError> {
    command
        .validate()
        .map_err(|errors| AppError::Validation(format_validation_errors(&errors)))
}
