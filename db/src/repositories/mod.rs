pub mod module_repository;
