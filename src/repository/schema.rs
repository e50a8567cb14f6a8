//! Table definitions, applied idempotently at startup

use sqlx::AnyPool;

use super::Backend;
use crate::error::AppResult;

const POSTGRES_TABLES: [&str; 2] = [
    r#"
    CREATE TABLE IF NOT EXISTS equipos (
        id BIGSERIAL PRIMARY KEY,
        nombre TEXT NOT NULL,
        tipo TEXT NOT NULL,
        serial TEXT UNIQUE,
        ubicacion TEXT NOT NULL,
        estado TEXT NOT NULL DEFAULT 'Operativo',
        observaciones TEXT NOT NULL DEFAULT ''
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id BIGSERIAL PRIMARY KEY,
        username TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL
    )
    "#,
];

const SQLITE_TABLES: [&str; 2] = [
    r#"
    CREATE TABLE IF NOT EXISTS equipos (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        nombre TEXT NOT NULL,
        tipo TEXT NOT NULL,
        serial TEXT UNIQUE,
        ubicacion TEXT NOT NULL,
        estado TEXT NOT NULL DEFAULT 'Operativo',
        observaciones TEXT NOT NULL DEFAULT ''
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL
    )
    "#,
];

/// Create the `equipos` and `users` tables if they do not exist yet
pub async fn ensure_tables(pool: &AnyPool, backend: Backend) -> AppResult<()> {
    let statements = match backend {
        Backend::Postgres => POSTGRES_TABLES,
        Backend::Sqlite => SQLITE_TABLES,
    };

    for statement in statements {
        sqlx::query(statement).execute(pool).await?;
    }

    tracing::debug!(?backend, "Schema ready");
    Ok(())
}
