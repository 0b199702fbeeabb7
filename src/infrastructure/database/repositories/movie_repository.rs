//! SeaORM implementation of MovieRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect};

use crate::domain::{DomainResult, Movie, MovieRepository};
use crate::infrastructure::database::entities::movie;

fn entity_to_domain(m: movie::Model) -> Movie {
    Movie {
        id: m.id,
        name: m.name,
        date: m.date,
        score: m.score,
        genre: m.genre,
        overview: m.overview,
        crew: m.crew,
        orig_title: m.orig_title,
        status: m.status,
        orig_lang: m.orig_lang,
        budget: m.budget,
        revenue: m.revenue,
        country: m.country,
    }
}

pub struct SeaOrmMovieRepository {
    db: DatabaseConnection,
}

impl SeaOrmMovieRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MovieRepository for SeaOrmMovieRepository {
    async fn count(&self) -> DomainResult<u64> {
        let total = movie::Entity::find().count(&self.db).await?;
        Ok(total)
    }

    async fn fetch(&self, offset: u64, limit: u64) -> DomainResult<Vec<Movie>> {
        // SQLite binds LIMIT/OFFSET as i64; no row can sit past i64::MAX.
        if i64::try_from(offset).is_err() {
            return Ok(Vec::new());
        }
        let limit = limit.min(i64::MAX as u64);

        let models = movie::Entity::find()
            .order_by_asc(movie::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await?;
        debug!("Fetched {} movies (offset={}, limit={})", models.len(), offset, limit);
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Movie>> {
        let model = movie::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(entity_to_domain))
    }
}

#[cfg(test)]
fn domain_to_entity(m: Movie) -> movie::Model {
    movie::Model {
        id: m.id,
        name: m.name,
        date: m.date,
        score: m.score,
        genre: m.genre,
        overview: m.overview,
        crew: m.crew,
        orig_title: m.orig_title,
        status: m.status,
        orig_lang: m.orig_lang,
        budget: m.budget,
        revenue: m.revenue,
        country: m.country,
    }
}

/// Migrated in-memory database holding `sample_movies(count)`, inserted out of id order.
#[cfg(test)]
pub(crate) async fn repo_with(count: usize) -> SeaOrmMovieRepository {
    use crate::infrastructure::database::seed::insert_movies;
    use crate::infrastructure::database::test_database;
    use crate::infrastructure::storage::memory::sample_movies;

    let db = test_database().await;
    let models = sample_movies(count)
        .into_iter()
        .rev()
        .map(domain_to_entity)
        .collect();
    insert_movies(&db, models).await.unwrap();
    SeaOrmMovieRepository::new(db)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use crate::infrastructure::database::test_database;
    use crate::infrastructure::storage::memory::sample_movies;


    #[tokio::test]
    async fn count_empty_table() {
        let repo = SeaOrmMovieRepository::new(test_database().await);
        assert_eq!(repo.count().await.unwrap(), 0);
        assert!(repo.fetch(0, 10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn fetch_is_ordered_by_id() {
        let repo = repo_with(12).await;
        assert_eq!(repo.count().await.unwrap(), 12);

        let ids: Vec<i64> = repo
            .fetch(5, 4)
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(ids, vec![6, 7, 8, 9]);

        assert_eq!(repo.fetch(10, 4).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn find_by_id_round_trips_all_fields() {
        let repo = repo_with(3).await;
        let expected = sample_movies(3).remove(1);
        assert_eq!(repo.find_by_id(2).await.unwrap(), Some(expected));
        assert_eq!(repo.find_by_id(42).await.unwrap(), None);
    }

    #[tokio::test]
    async fn closed_connection_is_infrastructure_error() {
        let db = test_database().await;
        let repo = SeaOrmMovieRepository::new(db.clone());
        db.close().await.unwrap();
        assert!(matches!(
            repo.count().await,
            Err(DomainError::Infrastructure(_))
        ));
    }

    #[tokio::test]
    async fn offset_beyond_sql_range_is_empty() {
        let repo = repo_with(3).await;
        assert!(repo.fetch(u64::MAX, 10).await.unwrap().is_empty());
        assert!(repo.fetch(i64::MAX as u64 + 1, 10).await.unwrap().is_empty());
        assert_eq!(repo.fetch(0, u64::MAX).await.unwrap().len(), 3);
    }
}
