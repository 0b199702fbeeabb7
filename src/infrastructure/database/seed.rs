//! Initial data import
//!
//! Loads a JSON array of movies into an empty `movies` table. A table that
//! already holds rows is left untouched, so restarts never duplicate data.

use std::path::Path;

use log::info;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, TransactionTrait};

use crate::domain::InfraError;
use crate::infrastructure::database::entities::movie;

/// Rows per INSERT; keeps bound parameters well under SQLite's limit.
const INSERT_CHUNK: usize = 200;

/// Parse a movie seed file.
pub fn read_seed_file(path: &Path) -> Result<Vec<movie::Model>, InfraError> {
    let raw = std::fs::read_to_string(path)?;
    let movies = serde_json::from_str(&raw)?;
    Ok(movies)
}

/// Seed the catalog from `path` if the table is empty.
///
/// Returns the number of movies inserted.
pub async fn seed_movies(db: &DatabaseConnection, path: &Path) -> Result<u64, InfraError> {
    let existing = movie::Entity::find().count(db).await?;
    if existing > 0 {
        info!(
            "Movies table already holds {} rows, skipping seed {}",
            existing,
            path.display()
        );
        return Ok(0);
    }

    let movies = read_seed_file(path)?;
    let inserted = insert_movies(db, movies).await?;
    info!("Seeded {} movies from {}", inserted, path.display());
    Ok(inserted)
}

/// Insert movies in one transaction.
pub async fn insert_movies(
    db: &DatabaseConnection,
    movies: Vec<movie::Model>,
) -> Result<u64, InfraError> {
    if movies.is_empty() {
        return Ok(0);
    }

    let total = movies.len() as u64;
    let txn = db.begin().await?;
    for chunk in movies.chunks(INSERT_CHUNK) {
        let rows = chunk.iter().cloned().map(movie::ActiveModel::from);
        movie::Entity::insert_many(rows).exec(&txn).await?;
    }
    txn.commit().await?;

    Ok(total)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::infrastructure::database::test_database;

    const SEED: &str = r#"[
        {
            "id": 7,
            "name": "Creed III",
            "date": "2023-03-02",
            "score": 73.0,
            "genre": "Drama, Action",
            "overview": "After dominating the boxing world...",
            "crew": "Michael B. Jordan, Adonis Creed",
            "orig_title": "Creed III",
            "status": "Released",
            "orig_lang": "English",
            "budget": 75000000.0,
            "revenue": 271616668.0,
            "country": "AU"
        },
        {
            "id": 3,
            "name": "Avatar: The Way of Water",
            "date": "2022-12-15",
            "score": 78.0,
            "genre": "Science Fiction, Adventure, Action",
            "overview": "Set more than a decade after the events of the first film...",
            "crew": "Sam Worthington, Jake Sully",
            "orig_title": "Avatar: The Way of Water",
            "status": "Released",
            "orig_lang": "English",
            "budget": 460000000.0,
            "revenue": 2316794914.0,
            "country": "AU"
        }
    ]"#;

    fn seed_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn seeds_empty_table_once() {
        let db = test_database().await;
        let file = seed_file(SEED);

        assert_eq!(seed_movies(&db, file.path()).await.unwrap(), 2);
        assert_eq!(seed_movies(&db, file.path()).await.unwrap(), 0);
        assert_eq!(movie::Entity::find().count(&db).await.unwrap(), 2);

        let creed = movie::Entity::find_by_id(7i64).one(&db).await.unwrap().unwrap();
        assert_eq!(creed.name, "Creed III");
        assert_eq!(creed.date.to_string(), "2023-03-02");
    }

    #[tokio::test]
    async fn malformed_seed_is_serialization_error() {
        let db = test_database().await;
        let file = seed_file("[{\"id\": 1}]");
        assert!(matches!(
            seed_movies(&db, file.path()).await,
            Err(InfraError::Serialization(_))
        ));
    }

    #[tokio::test]
    async fn missing_seed_is_io_error() {
        let db = test_database().await;
        let result = seed_movies(&db, Path::new("/nonexistent/movies.json")).await;
        assert!(matches!(result, Err(InfraError::Io(_))));
    }

    #[tokio::test]
    async fn insert_spans_multiple_chunks() {
        let db = test_database().await;
        let movies: Vec<movie::Model> = serde_json::from_str::<Vec<movie::Model>>(SEED)
            .unwrap()
            .into_iter()
            .cycle()
            .take(INSERT_CHUNK + 5)
            .enumerate()
            .map(|(i, mut m)| {
                m.id = i as i64 + 1;
                m
            })
            .collect();

        let inserted = insert_movies(&db, movies).await.unwrap();
        assert_eq!(inserted, (INSERT_CHUNK + 5) as u64);
        assert_eq!(
            movie::Entity::find().count(&db).await.unwrap(),
            (INSERT_CHUNK + 5) as u64
        );
    }
}
