use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A course-material inventory item in the `modules` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "modules")]
pub struct Model {
    /// Primary key ID (auto-incremented).
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    /// Raw image bytes. `None` when no image was ever stored.
    #[sea_orm(column_type = "Blob", nullable)]
    pub preview: Option<Vec<u8>>,
    pub semester: String,
    /// Units in stock.
    pub quantity: i32,
    pub department_id: i64,
    pub course_id: Option<i64>,
}

// Neither relation is backed by a foreign key. They exist for the read-side
// joins only.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::department::Entity",
        from = "Column::DepartmentId",
        to = "super::department::Column::Id"
    )]
    Department,

    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id"
    )]
    Course,
}

impl Related<super::department::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
