pub mod movie;

pub use movie::{Movie, MovieRepository};

// Re-export error types from support for convenience
pub use crate::support::errors::{DomainError, DomainResult, FieldError, InfraError};
