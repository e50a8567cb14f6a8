//! Repository layer for database operations

pub mod equipment;
pub mod schema;

use sqlx::{any::AnyPoolOptions, AnyPool};

use crate::{
    config::DatabaseConfig,
    error::{AppError, AppResult},
};

/// Relational engine behind the connection string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Postgres,
    Sqlite,
}

impl Backend {
    pub fn from_url(url: &str) -> AppResult<Self> {
        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Ok(Backend::Postgres)
        } else if url.starts_with("sqlite:") {
            Ok(Backend::Sqlite)
        } else {
            Err(AppError::Internal(format!(
                "Unsupported database URL scheme: {}",
                url.split(':').next().unwrap_or_default()
            )))
        }
    }
}

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: AnyPool,
    pub backend: Backend,
    pub equipment: equipment::EquipmentRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: AnyPool, backend: Backend) -> Self {
        Self {
            equipment: equipment::EquipmentRepository::new(pool.clone()),
            pool,
            backend,
        }
    }

    /// Open the pool described by `config` and make sure the tables exist
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        sqlx::any::install_default_drivers();

        let backend = Backend::from_url(&config.url)?;
        let pool = AnyPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect(&config.url)
            .await?;

        schema::ensure_tables(&pool, backend).await?;

        Ok(Self::new(pool, backend))
    }
}
