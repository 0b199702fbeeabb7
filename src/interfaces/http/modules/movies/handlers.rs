//! Movie REST API handlers

use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};

use super::dto::{ListMoviesQuery, MovieListResponse, MovieResponse};
use crate::application::MovieCatalogService;
use crate::domain::{DomainError, FieldError};
use crate::interfaces::http::common::{MessageResponse, ValidatedQuery, ValidationErrorResponse};
use crate::shared::{PageRequest, DEFAULT_PAGE};

/// State for movie routes
#[derive(Clone)]
pub struct MoviesState {
    pub catalog: Arc<MovieCatalogService>,
    /// Page size used when `per_page` is omitted
    pub default_per_page: u64,
}

#[utoipa::path(
    get,
    path = "/movies/",
    tag = "Movies",
    params(ListMoviesQuery),
    responses(
        (status = 200, description = "Page of movies", body = MovieListResponse),
        (status = 404, description = "No movies on this page", body = MessageResponse),
        (status = 422, description = "Invalid page or page size", body = ValidationErrorResponse)
    )
)]
pub async fn list_movies(
    State(state): State<MoviesState>,
    ValidatedQuery(query): ValidatedQuery<ListMoviesQuery>,
) -> Result<Json<MovieListResponse>, DomainError> {
    let request = PageRequest::new(
        query.page.unwrap_or(DEFAULT_PAGE as i64),
        query.per_page.unwrap_or(state.default_per_page as i64),
    )?;

    let page = state.catalog.list_page(request).await?;
    Ok(Json(page.into()))
}

#[utoipa::path(
    get,
    path = "/movies/{movie_id}/",
    tag = "Movies",
    params(("movie_id" = i64, Path, description = "Movie ID")),
    responses(
        (status = 200, description = "Movie details", body = MovieResponse),
        (status = 404, description = "Not found", body = MessageResponse),
        (status = 422, description = "Movie ID is not an integer", body = ValidationErrorResponse)
    )
)]
pub async fn get_movie(
    State(state): State<MoviesState>,
    movie_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<MovieResponse>, DomainError> {
    let Path(movie_id) = movie_id.map_err(|_| {
        DomainError::Validation(vec![FieldError::not_integer(&["path", "movie_id"])])
    })?;

    let movie = state.catalog.get_by_id(movie_id).await?;
    Ok(Json(movie.into()))
}
