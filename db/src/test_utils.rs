//! Helpers for tests in this and downstream crates.

use crate::models::{course, department};
use migration::Migrator;
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, Set};
use sea_orm_migration::MigratorTrait;

/// Opens a fresh, fully migrated in-memory SQLite database.
///
/// The pool is pinned to a single connection, since every SQLite in-memory
/// connection would otherwise see its own empty database.
pub async fn setup_test_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("Failed to connect to in-memory db");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

pub async fn seed_department(db: &DatabaseConnection, name: &str) -> department::Model {
    department::ActiveModel {
        name: Set(name.to_owned()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to seed department")
}

pub async fn seed_course(db: &DatabaseConnection, department_id: i64, name: &str) -> course::Model {
    course::ActiveModel {
        department_id: Set(department_id),
        name: Set(name.to_owned()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to seed course")
}
