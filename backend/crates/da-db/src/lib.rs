pub mod connection;
pub mod error;
pub mod repositories;
pub mod schema;

pub use connection::connect::{connect, connect_in_memory};
pub use error::{DbError, Result};
pub use repositories::seed_importer::SeedImporter;
pub use repositories::user_repository::UserRepository;
pub use schema::USERS_TABLE;
