//! Module Record Store.
//!
//! Every function is generic over [`ConnectionTrait`], so the same primitives
//! run against the pooled connection for reads and against an open
//! transaction for writes.

use crate::filters::ModuleFilter;
use crate::models::{course, department, module};
use sea_orm::sea_query::{Expr, IntoCondition};
use sea_orm::{
    ActiveValue::{NotSet, Set},
    ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, FromQueryResult, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select,
};
use serde::Serialize;

/// The columns a single write touches, with their new values.
///
/// A `None` field is left out of the statement entirely. For the nullable
/// columns the inner `Option` is the value written, so `Some(None)` stores NULL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleChanges {
    pub title: Option<String>,
    pub preview: Option<Option<Vec<u8>>>,
    pub semester: Option<String>,
    pub quantity: Option<i32>,
    pub department_id: Option<i64>,
    pub course_id: Option<Option<i64>>,
}

impl ModuleChanges {
    /// Names of the columns this change set writes, in table order.
    pub fn columns(&self) -> Vec<&'static str> {
        let mut columns = Vec::new();
        if self.title.is_some() {
            columns.push("title");
        }
        if self.preview.is_some() {
            columns.push("preview");
        }
        if self.semester.is_some() {
            columns.push("semester");
        }
        if self.quantity.is_some() {
            columns.push("quantity");
        }
        if self.department_id.is_some() {
            columns.push("department_id");
        }
        if self.course_id.is_some() {
            columns.push("course_id");
        }
        columns
    }

    pub fn is_empty(&self) -> bool {
        self.columns().is_empty()
    }

    fn into_active_model(self) -> module::ActiveModel {
        fn set_or_skip<T: Into<sea_orm::Value>>(value: Option<T>) -> sea_orm::ActiveValue<T> {
            match value {
                Some(v) => Set(v),
                None => NotSet,
            }
        }

        module::ActiveModel {
            id: NotSet,
            title: set_or_skip(self.title),
            preview: set_or_skip(self.preview),
            semester: set_or_skip(self.semester),
            quantity: set_or_skip(self.quantity),
            department_id: set_or_skip(self.department_id),
            course_id: set_or_skip(self.course_id),
        }
    }
}

/// A module row with its department and course names resolved for display.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult, Serialize)]
pub struct ModuleListing {
    pub id: i64,
    pub title: String,
    pub preview: Option<Vec<u8>>,
    pub semester: String,
    pub quantity: i32,
    pub department_id: i64,
    pub department_name: Option<String>,
    pub course_id: Option<i64>,
    pub course_name: Option<String>,
}

pub struct ModuleRepository;

impl ModuleRepository {
    /// Inserts a new module and returns its freshly assigned id.
    pub async fn insert<C>(conn: &C, changes: ModuleChanges) -> Result<i64, DbErr>
    where
        C: ConnectionTrait,
    {
        let result = module::Entity::insert(changes.into_active_model())
            .exec(conn)
            .await?;
        Ok(result.last_insert_id)
    }

    /// Writes `changes` to the module with `id` and returns the affected row count.
    ///
    /// A count of zero is not an error at this level; callers decide what it means.
    pub async fn update<C>(conn: &C, id: i64, changes: ModuleChanges) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        if changes.is_empty() {
            return Err(DbErr::Custom(format!(
                "Refusing to update module {id} with an empty change set"
            )));
        }

        let result = module::Entity::update_many()
            .set(changes.into_active_model())
            .filter(module::Column::Id.eq(id))
            .exec(conn)
            .await?;
        Ok(result.rows_affected)
    }

    /// Hard-deletes a module and returns the affected row count.
    pub async fn delete<C>(conn: &C, id: i64) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        let result = module::Entity::delete_by_id(id).exec(conn).await?;
        Ok(result.rows_affected)
    }

    pub async fn get<C>(conn: &C, id: i64) -> Result<Option<module::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        module::Entity::find_by_id(id).one(conn).await
    }

    pub async fn exists<C>(conn: &C, id: i64) -> Result<bool, DbErr>
    where
        C: ConnectionTrait,
    {
        let count = module::Entity::find_by_id(id).count(conn).await?;
        Ok(count > 0)
    }

    /// Lists modules with department and course names joined in.
    ///
    /// Both joins are LEFT joins, so a dangling `department_id` or `course_id`
    /// yields a `None` name rather than dropping the row. A course only
    /// matches when it belongs to the module's department.
    pub async fn list<C>(conn: &C, filter: &ModuleFilter) -> Result<Vec<ModuleListing>, DbErr>
    where
        C: ConnectionTrait,
    {
        let query = module::Entity::find()
            .select_only()
            .columns([
                module::Column::Id,
                module::Column::Title,
                module::Column::Preview,
                module::Column::Semester,
                module::Column::Quantity,
                module::Column::DepartmentId,
                module::Column::CourseId,
            ])
            .column_as(department::Column::Name, "department_name")
            .column_as(course::Column::Name, "course_name")
            .join(JoinType::LeftJoin, module::Relation::Department.def())
            .join(
                JoinType::LeftJoin,
                module::Relation::Course.def().on_condition(|_left, right| {
                    Expr::col((right, course::Column::DepartmentId))
                        .equals((department::Entity, department::Column::Id))
                        .into_condition()
                }),
            );

        Self::apply_filter(query, filter)
            .order_by_asc(module::Column::Id)
            .into_model::<ModuleListing>()
            .all(conn)
            .await
    }

    fn apply_filter(query: Select<module::Entity>, filter: &ModuleFilter) -> Select<module::Entity> {
        let mut condition = Condition::all();
        if let Some(id) = filter.id {
            condition = condition.add(module::Column::Id.eq(id));
        }
        if let Some(department_id) = filter.department_id {
            condition = condition.add(module::Column::DepartmentId.eq(department_id));
        }
        if let Some(course_id) = filter.course_id {
            condition = condition.add(module::Column::CourseId.eq(course_id));
        }
        if let Some(semester) = filter.semester.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            condition = condition.add(module::Column::Semester.eq(semester));
        }
        // SQLite LIKE is case-insensitive for ASCII.
        if let Some(query_str) = filter.query.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            condition = condition.add(module::Column::Title.contains(query_str));
        }
        query.filter(condition)
    }
}
