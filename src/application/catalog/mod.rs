//! Movie catalog use cases: paginated listing and detail lookup

pub mod service;

pub use service::{MovieCatalogService, MOVIES_PATH};
