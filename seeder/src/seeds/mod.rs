pub mod course;
pub mod department;
pub mod module;
