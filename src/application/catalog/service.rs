//! Movie catalog service
//!
//! Computes page bounds over the movie store, rejects pages past the end and
//! builds navigation links. The store is reached only through
//! [`MovieRepository`], so every backend shares the same paging rules.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::domain::{DomainError, DomainResult, Movie, MovieRepository};
use crate::shared::{total_pages, PageRequest, PageResult};

/// Base path used when building `prev`/`next` links.
pub const MOVIES_PATH: &str = "/movies/";

pub const NO_MOVIES_FOUND: &str = "No movies found.";
pub const MOVIE_NOT_FOUND: &str = "Movie with the given ID was not found.";

pub struct MovieCatalogService {
    movies: Arc<dyn MovieRepository>,
}

impl MovieCatalogService {
    pub fn new(movies: Arc<dyn MovieRepository>) -> Self {
        Self { movies }
    }

    pub fn repository(&self) -> Arc<dyn MovieRepository> {
        Arc::clone(&self.movies)
    }

    /// Load one page of movies.
    ///
    /// Fails with a validation error when `page` is past the last page (only
    /// if any pages exist) and with not-found when the page comes back empty,
    /// which is how an empty store is reported.
    #[instrument(skip(self), fields(page = request.page(), per_page = request.per_page()))]
    pub async fn list_page(&self, request: PageRequest) -> DomainResult<PageResult<Movie>> {
        let total_items = self.movies.count().await?;
        let pages = total_pages(total_items, request.per_page());

        if request.page() > pages && pages > 0 {
            debug!(total_pages = pages, "Requested page is out of range");
            return Err(DomainError::page_out_of_range());
        }

        // Nothing stored at or past this offset; skip the round-trip.
        if request.offset() >= total_items {
            return Err(DomainError::not_found(NO_MOVIES_FOUND));
        }

        let items = self
            .movies
            .fetch(request.offset(), request.per_page())
            .await?;

        if items.is_empty() {
            return Err(DomainError::not_found(NO_MOVIES_FOUND));
        }

        debug!(total_items, returned = items.len(), "Movie page loaded");
        Ok(PageResult::new(items, request, total_items, MOVIES_PATH))
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i64) -> DomainResult<Movie> {
        self.movies
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(MOVIE_NOT_FOUND))
    }
}
