//! In-memory movie storage

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::{DomainResult, Movie, MovieRepository};

/// In-memory movie store for development and testing
pub struct InMemoryMovieRepository {
    movies: DashMap<i64, Movie>,
}

impl InMemoryMovieRepository {
    pub fn new() -> Self {
        Self {
            movies: DashMap::new(),
        }
    }

    pub fn with_movies(movies: impl IntoIterator<Item = Movie>) -> Self {
        let repo = Self::new();
        for movie in movies {
            repo.insert(movie);
        }
        repo
    }

    /// Insert or replace a movie by id.
    pub fn insert(&self, movie: Movie) {
        self.movies.insert(movie.id, movie);
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

impl Default for InMemoryMovieRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MovieRepository for InMemoryMovieRepository {
    async fn count(&self) -> DomainResult<u64> {
        Ok(self.movies.len() as u64)
    }

    async fn fetch(&self, offset: u64, limit: u64) -> DomainResult<Vec<Movie>> {
        // DashMap has no ordering; sort ids first so pages are stable.
        let mut ids: Vec<i64> = self.movies.iter().map(|entry| *entry.key()).collect();
        ids.sort_unstable();

        let page = ids
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .filter_map(|id| self.movies.get(&id).map(|m| m.value().clone()))
            .collect();

        Ok(page)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Movie>> {
        Ok(self.movies.get(&id).map(|m| m.value().clone()))
    }
}

/// `count` deterministic movies with ids `1..=count`.
#[cfg(test)]
pub(crate) fn sample_movies(count: usize) -> Vec<Movie> {
    use chrono::NaiveDate;

    (1..=count as i64)
        .map(|id| Movie {
            id,
            name: format!("Movie {}", id),
            date: NaiveDate::from_ymd_opt(2000 + (id % 25) as i32, 1 + (id % 12) as u32, 15)
                .unwrap(),
            score: 50.0 + (id % 50) as f64,
            genre: "Drama".to_string(),
            overview: format!("Overview of movie {}", id),
            crew: "Director, Actor".to_string(),
            orig_title: format!("Original {}", id),
            status: "Released".to_string(),
            orig_lang: "English".to_string(),
            budget: 1_000_000.0 * id as f64,
            revenue: 2_500_000.0 * id as f64,
            country: "US".to_string(),
        })
        .collect()
}
