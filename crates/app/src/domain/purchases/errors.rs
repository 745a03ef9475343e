//! Purchase store errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("purchase with this payment id already exists")]
    AlreadyExists(#[source] Error),

    #[error("purchase not found")]
    NotFound,

    #[error("related resource not found")]
    InvalidReference(#[source] Error),

    #[error("missing required data")]
    MissingRequiredData(#[source] Error),

    #[error("invalid data")]
    InvalidData(#[source] Error),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for PersistenceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists(error),
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference(error),
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData(error),
            Some(ErrorKind::CheckViolation) => Self::InvalidData(error),
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

impl PersistenceError {
    /// Name of the violated constraint, when the database reported one.
    #[must_use]
    pub fn constraint(&self) -> Option<&str> {
        match self {
            Self::AlreadyExists(source)
            | Self::InvalidReference(source)
            | Self::MissingRequiredData(source)
            | Self::InvalidData(source)
            | Self::Sql(source) => source
                .as_database_error()
                .and_then(DatabaseError::constraint),
            Self::NotFound => None,
        }
    }
}
