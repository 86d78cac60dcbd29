use std::sync::Arc;

use sqlx::{PgPool, postgres::PgPoolOptions};
use tracing::{info, warn};

use crate::data::memory_repository::MemoryPostRepository;
use crate::data::post_repository::{PostRepository, PostgresPostRepository};
use crate::infrastructure::config::AppConfig;

pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .min_connections(1)
        .acquire_timeout(std::time::Duration::from_secs(5))
        .connect(database_url)
        .await?;
    info!("connected to PostgreSQL");
    Ok(pool)
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    info!("running database migrations");
    sqlx::migrate!().run(pool).await?;
    info!("migrations completed");
    Ok(())
}

/// The process-wide store handle, created once at startup.
pub enum Store {
    Postgres(PgPool),
    Memory(Arc<MemoryPostRepository>),
}

impl Store {
    pub async fn connect(config: &AppConfig) -> anyhow::Result<Self> {
        match &config.database_url {
            Some(url) => {
                let pool = create_pool(url, config.database_max_connections).await?;
                run_migrations(&pool).await?;
                Ok(Store::Postgres(pool))
            }
            None => {
                warn!("DATABASE_URL not set, posts are kept in memory only");
                Ok(Store::Memory(Arc::new(MemoryPostRepository::new())))
            }
        }
    }

    pub fn post_repository(&self) -> Arc<dyn PostRepository> {
        match self {
            Store::Postgres(pool) => Arc::new(PostgresPostRepository::new(pool.clone())),
            Store::Memory(repo) => repo.clone(),
        }
    }

    pub async fn close(self) {
        if let Store::Postgres(pool) = self {
            pool.close().await;
            info!("database pool closed");
        }
    }
}
