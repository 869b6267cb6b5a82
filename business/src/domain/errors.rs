/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.storage_unavailable")]
    StorageUnavailable,
    #[error("repository.database_error")]
    DatabaseError,
}

impl RepositoryError {
    pub fn not_found() -> Self {
        RepositoryError::NotFound
    }
    pub fn storage_unavailable() -> Self {
        RepositoryError::StorageUnavailable
    }
    pub fn database_error() -> Self {
        RepositoryError::DatabaseError
    }
}
