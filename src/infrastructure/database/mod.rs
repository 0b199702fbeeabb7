pub mod entities;
pub mod migrator;
pub mod repositories;
pub mod seed;

pub use repositories::SeaOrmMovieRepository;
pub use seed::seed_movies;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://./movies.db?mode=rwc";

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database URL (e.g., "sqlite://./movies.db?mode=rwc")
    pub url: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
        }
    }
}

impl DatabaseConfig {
    pub fn is_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }
}

/// Initialize database connection
pub async fn init_database(config: &DatabaseConfig) -> Result<DatabaseConnection, sea_orm::DbErr> {
    info!("Connecting to database: {}", config.url);
    let mut options = ConnectOptions::new(config.url.clone());
    options.sqlx_logging(false);
    if config.is_memory() {
        // Every SQLite memory connection is its own database; keep exactly one.
        options.max_connections(1).min_connections(1);
    }
    let db = Database::connect(options).await?;
    info!("Database connected successfully");
    Ok(db)
}

/// Fresh in-memory SQLite database with all migrations applied.
#[cfg(test)]
pub(crate) async fn test_database() -> DatabaseConnection {
    use sea_orm_migration::MigratorTrait;

    let db = init_database(&DatabaseConfig {
        url: "sqlite::memory:".to_string(),
    })
    .await
    .unwrap();
    migrator::Migrator::up(&db, None).await.unwrap();
    db
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_memory_urls() {
        assert!(DatabaseConfig { url: "sqlite::memory:".into() }.is_memory());
        assert!(!DatabaseConfig::default().is_memory());
    }

    #[tokio::test]
    async fn migrations_create_movies_table() {
        use sea_orm::{EntityTrait, PaginatorTrait};

        let db = test_database().await;
        let count = entities::Movie::find().count(&db).await.unwrap();
        assert_eq!(count, 0);
    }
}
