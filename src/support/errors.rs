use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Structured field-level validation failure.
///
/// Serialized as `{"loc": [...], "msg": "...", "type": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    /// Location of the offending value, e.g. `["query", "page"]`
    pub loc: Vec<String>,
    /// Human-readable message
    pub msg: String,
    /// Machine-readable error code
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldError {
    pub fn new(loc: &[&str], msg: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            loc: loc.iter().map(|s| s.to_string()).collect(),
            msg: msg.into(),
            kind: kind.into(),
        }
    }

    /// Value at `loc` could not be parsed as an integer.
    pub fn not_integer(loc: &[&str]) -> Self {
        Self::new(loc, "value is not a valid integer", "type_error.integer")
    }

    /// Value of a query parameter is below its lower bound.
    pub fn not_ge(field: &str, bound: impl std::fmt::Display) -> Self {
        Self::new(
            &["query", field],
            format!("ensure this value is greater than or equal to {}", bound),
            "value_error.number.not_ge",
        )
    }

    /// Value of a query parameter is above its upper bound.
    pub fn not_le(field: &str, bound: impl std::fmt::Display) -> Self {
        Self::new(
            &["query", field],
            format!("ensure this value is less than or equal to {}", bound),
            "value_error.number.not_le",
        )
    }
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {}", summarize(.0))]
    Validation(Vec<FieldError>),

    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Infrastructure(#[from] InfraError),
}

impl DomainError {
    /// Requested page lies past the last page.
    ///
    /// The lower-bound wording is kept as-is: clients match on this exact payload.
    pub fn page_out_of_range() -> Self {
        Self::Validation(vec![FieldError::not_ge("page", 1)])
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        Self::Infrastructure(InfraError::Database(e))
    }
}

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for InfraError {
    fn from(e: toml::de::Error) -> Self {
        Self::Config(e.to_string())
    }
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.loc.join("."), e.msg))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
