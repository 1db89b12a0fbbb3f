use crate::seed::{SeedFuture, Seeder};
use db::models::course;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use services::ModuleService;
use services::validation::{ImageUpload, ModuleForm};

/// A 1x1 transparent PNG.
const PREVIEW_PNG: [u8; 67] = [
    0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1f,
    0x15, 0xc4, 0x89, 0x00, 0x00, 0x00, 0x0a, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9c, 0x63, 0x00,
    0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0d, 0x0a, 0x2d, 0xb4, 0x00, 0x00, 0x00, 0x00, 0x49,
    0x45, 0x4e, 0x44, 0xae, 0x42, 0x60, 0x82,
];

const TITLES: [&str; 6] = [
    "Lab Manual",
    "Study Guide",
    "Workbook",
    "Past Papers",
    "Practical Notes",
    "Reader",
];

pub struct ModuleSeeder;

impl Seeder for ModuleSeeder {
    fn seed<'a>(&'a self, db: &'a DatabaseConnection) -> SeedFuture<'a> {
        Box::pin(async move {
            if db::models::module::Entity::find().count(db).await? > 0 {
                return Ok(());
            }

            let service = ModuleService::new(db.clone());
            let courses = course::Entity::find().all(db).await?;

            for course in courses {
                let title = TITLES[fastrand::usize(..TITLES.len())];
                let form = ModuleForm::default()
                    .with_text("title", format!("{} {title}", course.name))
                    .with_text("semester", fastrand::u8(1..=2).to_string())
                    .with_text("departmentId", course.department_id.to_string())
                    .with_text("courseId", course.id.to_string())
                    .with_text("quantity", fastrand::u32(0..50).to_string())
                    .with_image(ImageUpload::new("image/png", PREVIEW_PNG.to_vec()));

                service.create(form).await?;
            }
            Ok(())
        })
    }
}
