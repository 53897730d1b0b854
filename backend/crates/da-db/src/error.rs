use da_core::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    /// The database could not be opened or reached. Fatal for the session.
    #[error("Database connection failed: {source} {location}")]
    Connection {
        #[source]
        source: sqlx::Error,
        location: ErrorLocation,
    },

    /// A statement was rejected. The enclosing transaction is rolled back.
    #[error("Query failed: {source} {location}")]
    Query {
        #[source]
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Invalid record: {source}")]
    Validation {
        #[source]
        source: CoreError,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },
}

impl DbError {
    #[track_caller]
    pub fn connection(source: sqlx::Error) -> Self {
        Self::Connection {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection { .. })
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Query {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for DbError {
    fn from(source: CoreError) -> Self {
        Self::Validation { source }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
