/// Storage errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.read_failed")]
    ReadFailed,
    #[error("repository.write_failed")]
    WriteFailed,
    #[error("repository.database_error")]
    DatabaseError,
}
