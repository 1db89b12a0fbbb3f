use crate::seed::{Seeder, run_seeder};
use crate::seeds::{course::CourseSeeder, department::DepartmentSeeder, module::ModuleSeeder};
use colored::*;
use migration::Migrator;
use sea_orm_migration::MigratorTrait;

mod seed;
mod seeds;

#[tokio::main]
async fn main() {
    let db = match db::connect().await {
        Ok(db) => db,
        Err(err) => {
            eprintln!("{} {}", "Failed to connect to database:".red().bold(), err);
            std::process::exit(1);
        }
    };

    if let Err(err) = Migrator::up(&db, None).await {
        eprintln!("{} {}", "Failed to apply migrations:".red().bold(), err);
        std::process::exit(1);
    }

    for (seeder, name) in [
        (Box::new(DepartmentSeeder) as Box<dyn Seeder + Send + Sync>, "Department"),
        (Box::new(CourseSeeder), "Course"),
        (Box::new(ModuleSeeder), "Module"),
    ] {
        run_seeder(&*seeder, name, &db).await;
    }
}
