pub mod m202510190001_create_departments;
pub mod m202510190002_create_courses;
pub mod m202510190003_create_modules;
