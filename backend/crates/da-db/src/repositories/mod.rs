pub mod seed_importer;
pub mod user_repository;
