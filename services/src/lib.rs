pub mod error;
pub mod executor;
pub mod module_service;
pub mod planner;
pub mod validation;

pub use error::AppError;
pub use module_service::ModuleService;
