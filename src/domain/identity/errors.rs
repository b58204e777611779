use thiserror::Error;

/// Main identity error type.
///
/// Business-rule failures never surface here; they are reported through the
/// notification collector with sentinel command results. Errors of this type
/// mean the infrastructure underneath a port misbehaved, and they propagate
/// past the handlers to the transport layer untouched.
#[derive(Debug, Error)]
pub enum IdentityError {
  #[error("Repository error: {0}")]
  Repository(#[from] RepositoryError),
}

/// Repository-related errors
#[derive(Debug, Error)]
pub enum RepositoryError {
  #[error("Database connection failed: {0}")]
  ConnectionFailed(String),

  #[error("Query execution failed: {0}")]
  QueryFailed(String),

  #[error("Transaction failed: {0}")]
  TransactionFailed(String),

  #[error("Record not found")]
  NotFound,

  #[error("Duplicate key violation: {0}")]
  DuplicateKey(String),

  #[error("Database error: {0}")]
  DatabaseError(String),
}

/// Value object construction errors
#[derive(Debug, Error)]
pub enum ValueObjectError {
  #[error("Invalid email format: {0}")]
  InvalidEmail(String),
}
