//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{extract::FromRef, middleware, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::common::{MessageResponse, ValidationErrorResponse};
use super::modules::health::{self, HealthState};
use super::modules::movies::{self, MoviesState};
use super::modules::request_id::request_id_middleware;
use crate::application::MovieCatalogService;
use crate::config::AppConfig;
use crate::domain::FieldError;

/// Unified router state. Each handler extracts its own slice via `FromRef`.
#[derive(Clone)]
pub struct ApiState {
    pub catalog: Arc<MovieCatalogService>,
    pub default_per_page: u64,
    pub started_at: Arc<Instant>,
}

impl FromRef<ApiState> for MoviesState {
    fn from_ref(s: &ApiState) -> Self {
        MoviesState {
            catalog: Arc::clone(&s.catalog),
            default_per_page: s.default_per_page,
        }
    }
}

impl FromRef<ApiState> for HealthState {
    fn from_ref(s: &ApiState) -> Self {
        HealthState {
            movies: s.catalog.repository(),
            started_at: Arc::clone(&s.started_at),
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        movies::list_movies,
        movies::get_movie,
    ),
    components(
        schemas(
            movies::MovieResponse,
            movies::MovieListResponse,
            health::HealthResponse,
            health::ComponentHealth,
            FieldError,
            ValidationErrorResponse,
            MessageResponse,
        )
    ),
    tags(
        (name = "Health", description = "Service health check"),
        (name = "Movies", description = "Read-only movie catalog: paginated listing and details"),
    ),
    info(
        title = "Movie Catalog API",
        version = "1.0.0",
        description = "Paginated read-only access to the movie catalog",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(catalog: Arc<MovieCatalogService>, config: &AppConfig) -> Router {
    let state = ApiState {
        catalog,
        default_per_page: config.pagination.default_per_page,
        started_at: Arc::new(Instant::now()),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        .merge(swagger_routes)
        .route("/health", get(health::health_check))
        .route("/movies/", get(movies::list_movies))
        .route("/movies/{movie_id}/", get(movies::get_movie))
        .with_state(state)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

// ── Tests ──────────────────────────────────────────────────────
