//! PDF export endpoints

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::{
    error::AppResult,
    reports::{LABELS_FILENAME, TABLE_FILENAME},
};

fn pdf_attachment(bytes: Vec<u8>, filename: &str) -> Response {
    (
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, format!("attachment; filename={}", filename)),
        ],
        bytes,
    )
        .into_response()
}

/// Tabular inventory report
#[utoipa::path(
    get,
    path = "/exportar-pdf",
    tag = "reportes",
    responses(
        (status = 200, description = "Inventory table", content_type = "application/pdf", body = Vec<u8>)
    )
)]
pub async fn exportar_pdf(State(state): State<crate::AppState>) -> AppResult<Response> {
    let bytes = state.services.reports.inventory_table().await?;
    Ok(pdf_attachment(bytes, TABLE_FILENAME))
}

/// QR label sheet, one label per asset
#[utoipa::path(
    get,
    path = "/exportar-qr",
    tag = "reportes",
    responses(
        (status = 200, description = "Asset labels", content_type = "application/pdf", body = Vec<u8>)
    )
)]
pub async fn exportar_qr(State(state): State<crate::AppState>) -> AppResult<Response> {
    let bytes = state.services.reports.asset_labels().await?;
    Ok(pdf_attachment(bytes, LABELS_FILENAME))
}
