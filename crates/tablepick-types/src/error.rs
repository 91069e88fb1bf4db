use thiserror::Error;

/// Errors from repository operations (used by trait definitions in tablepick-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("invalid stored record: {0}")]
    InvalidRecord(String),

    #[error("invalid collection identifier: '{0}'")]
    InvalidIdentifier(String),
}

/// Errors surfaced by a recommendation request.
///
/// "Nothing matched" is not an error; it is a normal 404 outcome.
#[derive(Debug, Error)]
pub enum RecommendationError {
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
}

impl From<RepositoryError> for RecommendationError {
    fn from(e: RepositoryError) -> Self {
        RecommendationError::StoreUnavailable(e.to_string())
    }
}

/// Errors from seeding the restaurant collection.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read seed file: {0}")]
    Io(String),

    #[error("failed to parse seed file: {0}")]
    Parse(String),

    #[error("storage error: {0}")]
    Store(String),
}

impl From<RepositoryError> for LoadError {
    fn from(e: RepositoryError) -> Self {
        LoadError::Store(e.to_string())
    }
}
