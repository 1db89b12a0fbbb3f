use serde::Deserialize;

/// Optional criteria applied when listing modules. Every field narrows the
/// result set; an empty filter returns every module.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModuleFilter {
    pub id: Option<i64>,
    pub department_id: Option<i64>,
    pub course_id: Option<i64>,
    pub semester: Option<String>,
    /// Case-insensitive substring match on the title.
    pub query: Option<String>,
}

impl ModuleFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_department_id(mut self, department_id: i64) -> Self {
        self.department_id = Some(department_id);
        self
    }

    pub fn with_course_id(mut self, course_id: i64) -> Self {
        self.course_id = Some(course_id);
        self
    }

    pub fn with_semester(mut self, semester: impl Into<String>) -> Self {
        self.semester = Some(semester.into());
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }
}
