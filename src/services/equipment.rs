//! Equipment service

use crate::{
    error::AppResult,
    models::equipment::{Equipo, EquipoChanges, NewEquipo, ESTADO_FALLA, ESTADO_OPERATIVO},
    repository::{equipment::SeedOutcome, Repository},
};

/// Demo inventory loaded by the initial setup
pub fn demo_inventory() -> Vec<NewEquipo> {
    let record = |nombre: &str, tipo: &str, serial: &str, ubicacion: &str, estado: &str, obs: &str| {
        NewEquipo {
            nombre: nombre.to_string(),
            tipo: tipo.to_string(),
            serial: serial.to_string(),
            ubicacion: ubicacion.to_string(),
            estado: estado.to_string(),
            observaciones: obs.to_string(),
        }
    };

    vec![
        record(
            "Panel Principal Fike",
            "Panel Control",
            "FK-001",
            "Sótano 1 - Cuarto Control",
            ESTADO_OPERATIVO,
            "Revisión anual completada",
        ),
        record(
            "Sensor Humo Servidores",
            "Sensor Fotoeléctrico",
            "SH-102",
            "Piso 2 - Data Center",
            ESTADO_FALLA,
            "Requiere limpieza de cámara óptica",
        ),
        record(
            "Estación Manual Lobby",
            "Palanca",
            "EM-005",
            "Lobby Principal",
            ESTADO_OPERATIVO,
            "",
        ),
    ]
}

#[derive(Clone)]
pub struct EquipmentService {
    repository: Repository,
}

impl EquipmentService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Equipo>> {
        self.repository.equipment.list().await
    }

    pub async fn count(&self) -> AppResult<i64> {
        self.repository.equipment.count().await
    }

    /// Load the demo inventory into an empty store
    pub async fn seed(&self) -> AppResult<SeedOutcome> {
        let outcome = self.repository.equipment.seed(&demo_inventory()).await?;
        match outcome {
            SeedOutcome::Seeded(n) => tracing::info!(records = n, "Initial inventory loaded"),
            SeedOutcome::AlreadySeeded => tracing::info!("Inventory already has data, seed skipped"),
        }
        Ok(outcome)
    }

    pub async fn create(&self, data: &NewEquipo) -> AppResult<Equipo> {
        let equipo = self.repository.equipment.create(data).await?;
        tracing::info!(id = equipo.id, serial = %data.serial, "Equipment created");
        Ok(equipo)
    }

    pub async fn update(&self, id: i64, data: &EquipoChanges) -> AppResult<Equipo> {
        let equipo = self.repository.equipment.update(id, data).await?;
        tracing::info!(id, estado = %equipo.estado, "Equipment updated");
        Ok(equipo)
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.equipment.delete(id).await?;
        tracing::info!(id, "Equipment deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_inventory_shape() {
        let records = demo_inventory();
        assert_eq!(records.len(), 3);
        assert_eq!(records.iter().filter(|r| r.estado == ESTADO_FALLA).count(), 1);

        let mut serials: Vec<_> = records.iter().map(|r| r.serial.as_str()).collect();
        serials.sort();
        serials.dedup();
        assert_eq!(serials, vec!["EM-005", "FK-001", "SH-102"]);
    }
}
