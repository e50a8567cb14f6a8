//! Equipment API endpoints

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::equipment::{Equipo, EquipoPayload, MensajeResponse},
};

/// Unwrap a JSON body, turning a missing or malformed one into a validation error
fn payload(body: Result<Json<EquipoPayload>, JsonRejection>) -> AppResult<EquipoPayload> {
    body.map(|Json(p)| p).map_err(|rejection| {
        tracing::debug!("Rejected body: {}", rejection.body_text());
        let mensaje = match rejection {
            JsonRejection::JsonDataError(_) => "Datos inválidos: revise el tipo de cada campo",
            JsonRejection::JsonSyntaxError(_) => "Datos inválidos: el cuerpo no es JSON válido",
            _ => "No se recibieron datos",
        };
        AppError::Validation(mensaje.to_string())
    })
}

fn equipo_id(path: Result<Path<i64>, PathRejection>) -> AppResult<i64> {
    path.map(|Path(id)| id).map_err(|rejection| {
        tracing::debug!("Rejected id: {}", rejection.body_text());
        AppError::Validation("Id de equipo inválido".to_string())
    })
}

/// List all equipment
#[utoipa::path(
    get,
    path = "/api/equipos",
    tag = "equipos",
    responses(
        (status = 200, description = "Equipment list in insertion order", body = Vec<Equipo>)
    )
)]
pub async fn list_equipos(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Equipo>>> {
    let equipos = state.services.equipment.list().await?;
    Ok(Json(equipos))
}

/// Create equipment
#[utoipa::path(
    post,
    path = "/api/equipos",
    tag = "equipos",
    request_body = EquipoPayload,
    responses(
        (status = 200, description = "Equipment saved", body = MensajeResponse),
        (status = 400, description = "Missing fields or duplicate serial", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_equipo(
    State(state): State<crate::AppState>,
    body: Result<Json<EquipoPayload>, JsonRejection>,
) -> AppResult<Json<MensajeResponse>> {
    let data = payload(body)?.into_new()?;
    state.services.equipment.create(&data).await?;
    Ok(Json(MensajeResponse::new("Equipo guardado correctamente")))
}

/// Update equipment
#[utoipa::path(
    put,
    path = "/api/equipos/{id}",
    tag = "equipos",
    params(("id" = i64, Path, description = "Equipment ID")),
    request_body = EquipoPayload,
    responses(
        (status = 200, description = "Equipment updated", body = MensajeResponse),
        (status = 400, description = "Missing fields or malformed id", body = crate::error::ErrorResponse),
        (status = 404, description = "Equipment not found", body = crate::error::ErrorResponse),
        (status = 500, description = "Update rejected by the store", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_equipo(
    State(state): State<crate::AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<EquipoPayload>, JsonRejection>,
) -> AppResult<Json<MensajeResponse>> {
    let id = equipo_id(id)?;
    let changes = payload(body)?.into_changes()?;
    state.services.equipment.update(id, &changes).await?;
    Ok(Json(MensajeResponse::new("Equipo actualizado correctamente")))
}

/// Delete equipment
#[utoipa::path(
    delete,
    path = "/api/equipos/{id}",
    tag = "equipos",
    params(("id" = i64, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Equipment deleted", body = MensajeResponse),
        (status = 400, description = "Id is not a number", body = crate::error::ErrorResponse),
        (status = 404, description = "Equipment not found", body = crate::error::ErrorResponse),
        (status = 500, description = "Delete rejected by the store", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_equipo(
    State(state): State<crate::AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<MensajeResponse>> {
    let id = equipo_id(id)?;
    state.services.equipment.delete(id).await?;
    Ok(Json(MensajeResponse::new("Equipo eliminado correctamente")))
}
