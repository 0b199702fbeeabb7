//! Validated query-string extractor for Axum
//!
//! `ValidatedQuery<T>` works like `axum::extract::Query<T>`, but additionally
//! runs `validator::Validate::validate()` on the deserialized value. Both
//! parse and validation failures are rejected with a 422 carrying
//! field-level details.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use axum::http::Uri;
use serde::de::DeserializeOwned;
use validator::Validate;

use super::query_field_errors;
use crate::domain::{DomainError, FieldError};

/// An extractor that deserializes the query string and validates it.
///
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct Paging {
///     #[validate(range(min = 1))]
///     page: Option<i64>,
/// }
///
/// async fn handler(ValidatedQuery(paging): ValidatedQuery<Paging>) {
///     // `paging` is guaranteed to pass validation
/// }
/// ```
pub struct ValidatedQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = DomainError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let value = match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => value,
            Err(rejection) => {
                let mut errors = unparsable_params::<T>(&parts.uri);
                if errors.is_empty() {
                    errors.push(FieldError::new(&["query"], rejection.body_text(), "type_error"));
                }
                return Err(DomainError::Validation(errors));
            }
        };

        value
            .validate()
            .map_err(|errors| DomainError::Validation(query_field_errors(&errors)))?;

        Ok(ValidatedQuery(value))
    }
}

/// Parameters that fail to deserialize into `T` on their own, ordered by name.
///
/// Only meaningful when every field of `T` is optional; otherwise nothing is
/// reported and the caller falls back to the whole-query error.
fn unparsable_params<T: DeserializeOwned>(uri: &Uri) -> Vec<FieldError> {
    if Query::<T>::try_from_uri(&Uri::from_static("/")).is_err() {
        return Vec::new();
    }

    let mut errors: Vec<FieldError> = uri
        .query()
        .unwrap_or_default()
        .split('&')
        .filter(|segment| !segment.is_empty())
        .filter_map(|segment| {
            let single: Uri = format!("/?{}", segment).parse().ok()?;
            if Query::<T>::try_from_uri(&single).is_ok() {
                return None;
            }
            let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&single).ok()?;
            let (name, _) = pairs.into_iter().next()?;
            Some(FieldError::not_integer(&["query", name.as_str()]))
        })
        .collect();

    errors.sort_by(|a, b| a.loc.cmp(&b.loc));
    errors.dedup();
    errors
}

// ── Tests ──────────────────────────────────────────────────────
