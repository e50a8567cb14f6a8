//! Equipment repository

use sqlx::{Any, AnyPool, Transaction};

use crate::{
    error::{AppError, AppResult},
    models::equipment::{Equipo, EquipoChanges, NewEquipo},
};

const COLUMNS: &str = "id, nombre, tipo, serial, ubicacion, estado, observaciones";

/// Result of the demo-data initialization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Seeded(usize),
    AlreadySeeded,
}

#[derive(Clone)]
pub struct EquipmentRepository {
    pool: AnyPool,
}

/// Abort the transaction, keeping the original error as the cause
async fn abort(tx: Transaction<'_, Any>, cause: &sqlx::Error) {
    if let Err(e) = tx.rollback().await {
        tracing::error!("Rollback failed after {:?}: {:?}", cause, e);
    }
}

impl EquipmentRepository {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }

    /// List all equipment in insertion order
    pub async fn list(&self) -> AppResult<Vec<Equipo>> {
        let rows = sqlx::query_as::<_, Equipo>(&format!(
            "SELECT {} FROM equipos ORDER BY id",
            COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM equipos")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Get equipment by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Equipo> {
        sqlx::query_as::<_, Equipo>(&format!("SELECT {} FROM equipos WHERE id = $1", COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipo {} no encontrado", id)))
    }

    /// Insert one record. Any store failure, duplicate serial included,
    /// rolls back and is reported as a conflict.
    pub async fn create(&self, data: &NewEquipo) -> AppResult<Equipo> {
        let mut tx = self.pool.begin().await?;

        let inserted = sqlx::query_as::<_, Equipo>(&format!(
            r#"
            INSERT INTO equipos (nombre, tipo, serial, ubicacion, estado, observaciones)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(&data.nombre)
        .bind(&data.tipo)
        .bind(&data.serial)
        .bind(&data.ubicacion)
        .bind(&data.estado)
        .bind(&data.observaciones)
        .fetch_one(&mut *tx)
        .await;

        let row = match inserted {
            Ok(row) => row,
            Err(e) => {
                abort(tx, &e).await;
                return Err(conflict(&data.serial, &e));
            }
        };

        if let Err(e) = tx.commit().await {
            return Err(conflict(&data.serial, &e));
        }
        Ok(row)
    }

    /// Overwrite every field of an existing record; `estado` only when supplied
    pub async fn update(&self, id: i64, data: &EquipoChanges) -> AppResult<Equipo> {
        let mut tx = self.pool.begin().await?;

        let exists: Option<i64> = sqlx::query_scalar("SELECT id FROM equipos WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if exists.is_none() {
            return Err(AppError::NotFound(format!("Equipo {} no encontrado", id)));
        }

        let mut sets = vec![
            "nombre = $1".to_string(),
            "tipo = $2".to_string(),
            "serial = $3".to_string(),
            "ubicacion = $4".to_string(),
            "observaciones = $5".to_string(),
        ];
        let mut idx = 6;
        if data.estado.is_some() {
            sets.push(format!("estado = ${}", idx));
            idx += 1;
        }
        let query = format!(
            "UPDATE equipos SET {} WHERE id = ${} RETURNING {}",
            sets.join(", "),
            idx,
            COLUMNS
        );

        let mut builder = sqlx::query_as::<_, Equipo>(&query)
            .bind(&data.nombre)
            .bind(&data.tipo)
            .bind(&data.serial)
            .bind(&data.ubicacion)
            .bind(&data.observaciones);
        if let Some(ref estado) = data.estado {
            builder = builder.bind(estado);
        }
        builder = builder.bind(id);

        let row = match builder.fetch_one(&mut *tx).await {
            Ok(row) => row,
            Err(e) => {
                abort(tx, &e).await;
                tracing::warn!(id, "Update rejected by the store: {:?}", e);
                return Err(AppError::Update("Error al actualizar el equipo".to_string()));
            }
        };

        if let Err(e) = tx.commit().await {
            tracing::warn!(id, "Update commit failed: {:?}", e);
            return Err(AppError::Update("Error al actualizar el equipo".to_string()));
        }
        Ok(row)
    }

    /// Permanently remove a record
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let exists: Option<i64> = sqlx::query_scalar("SELECT id FROM equipos WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if exists.is_none() {
            return Err(AppError::NotFound(format!("Equipo {} no encontrado", id)));
        }

        if let Err(e) = sqlx::query("DELETE FROM equipos WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
        {
            abort(tx, &e).await;
            tracing::warn!(id, "Delete rejected by the store: {:?}", e);
            return Err(AppError::Delete("Error al eliminar el equipo".to_string()));
        }

        if let Err(e) = tx.commit().await {
            tracing::warn!(id, "Delete commit failed: {:?}", e);
            return Err(AppError::Delete("Error al eliminar el equipo".to_string()));
        }
        Ok(())
    }

    /// Insert `records` in one transaction, unless the table already has rows
    pub async fn seed(&self, records: &[NewEquipo]) -> AppResult<SeedOutcome> {
        let mut tx = self.pool.begin().await?;

        let existing: Option<i64> = sqlx::query_scalar("SELECT id FROM equipos LIMIT 1")
            .fetch_optional(&mut *tx)
            .await?;
        if existing.is_some() {
            return Ok(SeedOutcome::AlreadySeeded);
        }

        for data in records {
            let inserted = sqlx::query(
                r#"
                INSERT INTO equipos (nombre, tipo, serial, ubicacion, estado, observaciones)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(&data.nombre)
            .bind(&data.tipo)
            .bind(&data.serial)
            .bind(&data.ubicacion)
            .bind(&data.estado)
            .bind(&data.observaciones)
            .execute(&mut *tx)
            .await;
            if let Err(e) = inserted {
                abort(tx, &e).await;
                return seed_conflict(e);
            }
        }

        if let Err(e) = tx.commit().await {
            return seed_conflict(e);
        }
        Ok(SeedOutcome::Seeded(records.len()))
    }
}

/// A concurrent seed that committed first shows up as a duplicate serial
fn seed_conflict(cause: sqlx::Error) -> AppResult<SeedOutcome> {
    match &cause {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            tracing::info!("Seed lost to a concurrent one, keeping its data");
            Ok(SeedOutcome::AlreadySeeded)
        }
        _ => Err(cause.into()),
    }
}

fn conflict(serial: &str, cause: &sqlx::Error) -> AppError {
    match cause {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            tracing::warn!(serial, "Duplicate serial rejected");
            AppError::Conflict(format!("Error: El serial {} ya existe", serial))
        }
        other => {
            tracing::warn!(serial, "Insert rejected by the store: {:?}", other);
            AppError::Conflict("Error: El serial ya existe o los datos son inválidos".to_string())
        }
    }
}
