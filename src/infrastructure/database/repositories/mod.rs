//! Database repository implementations

pub mod movie_repository;

pub use movie_repository::SeaOrmMovieRepository;
