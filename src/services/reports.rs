//! Report service

use chrono::Local;

use crate::{
    error::{AppError, AppResult},
    reports::{label_layout, pdf, table_layout},
    repository::Repository,
};

#[derive(Clone)]
pub struct ReportService {
    repository: Repository,
}

impl ReportService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Tabular inventory report as PDF bytes
    pub async fn inventory_table(&self) -> AppResult<Vec<u8>> {
        let equipos = self.repository.equipment.list().await?;
        let generated_at = Local::now().format("%d/%m/%Y %H:%M").to_string();
        tracing::debug!(records = equipos.len(), "Rendering inventory table");

        tokio::task::spawn_blocking(move || pdf::render_table(&table_layout(&equipos), &generated_at))
            .await
            .map_err(|e| AppError::Internal(format!("Report task failed: {}", e)))?
    }

    /// QR label sheet as PDF bytes
    pub async fn asset_labels(&self) -> AppResult<Vec<u8>> {
        let equipos = self.repository.equipment.list().await?;
        tracing::debug!(records = equipos.len(), "Rendering asset labels");

        tokio::task::spawn_blocking(move || pdf::render_labels(&label_layout(&equipos)))
            .await
            .map_err(|e| AppError::Internal(format!("Report task failed: {}", e)))?
    }
}
