use crate::seed::{SeedFuture, Seeder};
use db::models::department;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

pub const DEPARTMENTS: [&str; 4] = ["Engineering", "Science", "Humanities", "Economics"];

pub struct DepartmentSeeder;

impl Seeder for DepartmentSeeder {
    fn seed<'a>(&'a self, db: &'a DatabaseConnection) -> SeedFuture<'a> {
        Box::pin(async move {
            for name in DEPARTMENTS {
                let existing = department::Entity::find()
                    .filter(department::Column::Name.eq(name))
                    .one(db)
                    .await?;
                if existing.is_some() {
                    continue;
                }

                department::ActiveModel {
                    name: Set(name.to_string()),
                    ..Default::default()
                }
                .insert(db)
                .await?;
            }
            Ok(())
        })
    }
}
