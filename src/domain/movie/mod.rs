//! Movie aggregate

pub mod model;
pub mod repository;

pub use model::Movie;
pub use repository::MovieRepository;
