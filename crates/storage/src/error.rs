use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("{resource} not found with id: {id}")]
    NotFound { resource: &'static str, id: Uuid },

    #[error("{resource} already registered with the name: {name}")]
    DuplicateName { resource: &'static str, name: String },

    #[error("Athlete already registered with the CPF: {cpf}")]
    DuplicateCpf { cpf: String },

    #[error("{resource} not found with the name: {name}")]
    ReferenceNotFound { resource: &'static str, name: String },

    #[error("{resource} is still referenced by registered athletes")]
    StillReferenced { resource: &'static str },
}

pub type Result<T> = std::result::Result<T, StorageError>;

pub(crate) fn is_unique_violation(error: &sqlx::Error) -> bool {
    matches!(
        error,
        sqlx::Error::Database(e)
            if matches!(e.kind(), sqlx::error::ErrorKind::UniqueViolation)
    )
}

pub(crate) fn is_foreign_key_violation(error: &sqlx::Error) -> bool {
    matches!(
        error,
        sqlx::Error::Database(e)
            if matches!(e.kind(), sqlx::error::ErrorKind::ForeignKeyViolation)
    )
}
