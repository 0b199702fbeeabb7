//! Shared HTTP plumbing: error bodies and validating extractors
//!
//! Error bodies follow the `{"detail": ...}` shape: a list of field errors
//! for 422, a plain message otherwise.

pub mod validated_query;

pub use validated_query::ValidatedQuery;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;
use utoipa::ToSchema;
use validator::{ValidationError, ValidationErrors};

use crate::domain::{DomainError, FieldError};

/// 422 body: every field that failed validation
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub detail: Vec<FieldError>,
}

/// 404 / 500 body: a human-readable message
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub detail: String,
}

impl MessageResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(detail) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationErrorResponse { detail }),
            )
                .into_response(),
            Self::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(MessageResponse::new(message))).into_response()
            }
            Self::Infrastructure(e) => {
                error!("Request failed on the movie store: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(MessageResponse::new("Internal Server Error")),
                )
                    .into_response()
            }
        }
    }
}

/// Convert `validator` failures on query parameters into field errors,
/// ordered by parameter name.
pub fn query_field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = field.to_string();
            errs.iter()
                .map(|e| to_field_error(&field, e))
                .collect::<Vec<_>>()
        })
        .collect();
    out.sort_by(|a, b| a.loc.cmp(&b.loc));
    out
}

fn to_field_error(field: &str, e: &ValidationError) -> FieldError {
    if e.code == "range" {
        let param = |key: &str| e.params.get(key).and_then(Value::as_f64);
        match (param("value"), param("min"), param("max")) {
            (Some(value), Some(min), _) if value < min => {
                return FieldError::not_ge(field, fmt_bound(min))
            }
            (_, _, Some(max)) => return FieldError::not_le(field, fmt_bound(max)),
            (_, Some(min), None) => return FieldError::not_ge(field, fmt_bound(min)),
            _ => {}
        }
    }

    let msg = e
        .message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| format!("invalid value ({})", e.code));
    FieldError::new(&["query", field], msg, format!("value_error.{}", e.code))
}

fn fmt_bound(bound: f64) -> String {
    if bound.fract() == 0.0 {
        format!("{}", bound as i64)
    } else {
        bound.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Params {
        #[validate(range(min = 1))]
        page: Option<i64>,
        #[validate(range(min = 1, max = 100))]
        per_page: Option<i64>,
    }

    fn errors_for(page: Option<i64>, per_page: Option<i64>) -> Vec<FieldError> {
        let errors = Params { page, per_page }.validate().unwrap_err();
        query_field_errors(&errors)
    }

    #[test]
    fn below_minimum_is_not_ge() {
        assert_eq!(errors_for(Some(0), None), vec![FieldError::not_ge("page", 1)]);
        assert_eq!(
            errors_for(None, Some(-5)),
            vec![FieldError::not_ge("per_page", 1)]
        );
    }

    #[test]
    fn above_maximum_is_not_le() {
        assert_eq!(
            errors_for(Some(1), Some(101)),
            vec![FieldError::not_le("per_page", 100)]
        );
    }

    #[test]
    fn errors_are_sorted_by_field() {
        assert_eq!(
            errors_for(Some(0), Some(0)),
            vec![FieldError::not_ge("page", 1), FieldError::not_ge("per_page", 1)]
        );
    }

    #[test]
    fn bounds_print_without_fraction() {
        assert_eq!(fmt_bound(100.0), "100");
        assert_eq!(fmt_bound(0.5), "0.5");
    }

    #[tokio::test]
    async fn status_codes_follow_error_kind() {
        let validation = DomainError::page_out_of_range().into_response();
        assert_eq!(validation.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let not_found = DomainError::not_found("No movies found.").into_response();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);
        let body = axum::body::to_bytes(not_found.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(
            serde_json::from_slice::<Value>(&body).unwrap(),
            serde_json::json!({"detail": "No movies found."})
        );

        let infra: DomainError = sea_orm::DbErr::Custom("secret dsn".into()).into();
        let response = infra.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(!String::from_utf8_lossy(&body).contains("secret"));
    }
}
