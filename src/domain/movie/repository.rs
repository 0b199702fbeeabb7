//! Movie query gateway

use async_trait::async_trait;

use super::model::Movie;
use crate::domain::DomainResult;

/// Read-only access to the movie store.
///
/// Any backend (relational, document, in-memory) can serve the catalog by
/// implementing these three queries.
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Total number of movies currently stored.
    async fn count(&self) -> DomainResult<u64>;

    /// Movies ordered by ascending `id`, skipping `offset` and taking at most `limit`.
    async fn fetch(&self, offset: u64, limit: u64) -> DomainResult<Vec<Movie>>;

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Movie>>;
}
