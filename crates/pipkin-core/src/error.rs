use thiserror::Error;

/// Errors surfaced by the persistence layer and care rules.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("sickness {0} refers to unknown medicine {1}")]
    UnknownMedicine(i64, i64),
}

pub type Result<T> = std::result::Result<T, CoreError>;
