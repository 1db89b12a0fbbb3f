pub mod course;
pub mod department;
pub mod module;

pub use course::Entity as Course;
pub use department::Entity as Department;
pub use module::Entity as Module;
