//! # Movie Catalog
//!
//! Read-only REST service over a movie catalog: a paginated listing with
//! navigation links and a lookup by id.
//!
//! ## Architecture
//!
//! - **domain**: the `Movie` entity and the `MovieRepository` query gateway
//! - **application**: the catalog service (page bounds, range checks, links)
//! - **shared**: pagination primitives
//! - **infrastructure**: SeaORM storage, migrations, seeding, in-memory store
//! - **interfaces**: axum HTTP API with Swagger documentation
//! - **support**: error taxonomy and graceful shutdown

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;
pub mod support;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, InMemoryMovieRepository, SeaOrmMovieRepository};

// Re-export API router
pub use interfaces::http::create_api_router;
