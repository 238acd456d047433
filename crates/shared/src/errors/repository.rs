use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Not found")]
    NotFound,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Foreign key violation: {0}")]
    ForeignKey(String),

    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Custom error: {0}")]
    Custom(String),
}

impl RepositoryError {
    /// Classifies constraint violations reported by Postgres; everything else stays `Sqlx`.
    pub fn from_constraint(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_foreign_key_violation() {
                return RepositoryError::ForeignKey(db_err.message().to_string());
            }
            if db_err.is_unique_violation() {
                return RepositoryError::Conflict(db_err.message().to_string());
            }
        }
        RepositoryError::Sqlx(err)
    }
}
