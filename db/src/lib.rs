pub mod filters;
pub mod models;
pub mod repositories;
pub mod test_utils;

pub use filters::ModuleFilter;
pub use repositories::module_repository::{ModuleChanges, ModuleListing, ModuleRepository};

use sea_orm::{Database, DatabaseConnection, DbErr};
use util::{config, paths};

/// Connects to the database configured by `DATABASE_PATH`.
///
/// A plain file path is treated as a SQLite database whose parent directory
/// is created if needed; a `sqlite:` DSN is used as-is.
pub async fn connect() -> Result<DatabaseConnection, DbErr> {
    let path_or_url = config::database_path();

    if !path_or_url.starts_with("sqlite:") {
        paths::ensure_parent_dir(&path_or_url).map_err(|err| {
            DbErr::Custom(format!("Failed to create database directory for {path_or_url}: {err}"))
        })?;
    }

    let url = paths::database_url(&path_or_url);
    tracing::info!("Connecting to database at {url}");
    Database::connect(&url).await
}
