use crate::seed::{SeedFuture, Seeder};
use db::models::{course, department};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

const COURSES: [(&str, &[&str]); 4] = [
    ("Engineering", &["Civil Engineering", "Electrical Engineering"]),
    ("Science", &["Physics", "Chemistry", "Biology"]),
    ("Humanities", &["History"]),
    ("Economics", &["Accounting", "Econometrics"]),
];

pub struct CourseSeeder;

impl Seeder for CourseSeeder {
    fn seed<'a>(&'a self, db: &'a DatabaseConnection) -> SeedFuture<'a> {
        Box::pin(async move {
            for (department_name, courses) in COURSES {
                let Some(dept) = department::Entity::find()
                    .filter(department::Column::Name.eq(department_name))
                    .one(db)
                    .await?
                else {
                    continue;
                };

                for name in courses {
                    let existing = course::Entity::find()
                        .filter(course::Column::DepartmentId.eq(dept.id))
                        .filter(course::Column::Name.eq(*name))
                        .one(db)
                        .await?;
                    if existing.is_some() {
                        continue;
                    }

                    course::ActiveModel {
                        department_id: Set(dept.id),
                        name: Set(name.to_string()),
                        ..Default::default()
                    }
                    .insert(db)
                    .await?;
                }
            }
            Ok(())
        })
    }
}
