//! Equipment (equipo) model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Status assigned when a record does not say otherwise
pub const ESTADO_OPERATIVO: &str = "Operativo";
/// Status of a faulty asset; rendered in red on reports
pub const ESTADO_FALLA: &str = "Falla";

/// Equipment record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Equipo {
    pub id: i64,
    /// Display name
    pub nombre: String,
    /// Equipment category (panel, sensor, pull station...)
    pub tipo: String,
    /// Unique asset serial. Only legacy rows may lack it.
    pub serial: Option<String>,
    /// Physical location
    pub ubicacion: String,
    /// Free-form status, "Operativo" or "Falla" in practice
    pub estado: String,
    pub observaciones: String,
}

impl Equipo {
    pub fn is_faulty(&self) -> bool {
        self.estado == ESTADO_FALLA
    }

    pub fn serial_or_empty(&self) -> &str {
        self.serial.as_deref().unwrap_or("")
    }
}

/// Body accepted by create and update.
///
/// Everything is optional at the wire level so that a missing field turns
/// into a clean validation message instead of a deserialization rejection.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct EquipoPayload {
    #[validate(length(max = 100, message = "nombre admite hasta 100 caracteres"))]
    pub nombre: Option<String>,
    #[validate(length(max = 50, message = "tipo admite hasta 50 caracteres"))]
    pub tipo: Option<String>,
    #[validate(length(max = 50, message = "serial admite hasta 50 caracteres"))]
    pub serial: Option<String>,
    #[validate(length(max = 100, message = "ubicacion admite hasta 100 caracteres"))]
    pub ubicacion: Option<String>,
    #[validate(length(min = 1, max = 20, message = "estado debe tener entre 1 y 20 caracteres"))]
    pub estado: Option<String>,
    pub observaciones: Option<String>,
}

/// Validated field set written by create and update
#[derive(Debug, Clone, PartialEq)]
pub struct EquipoChanges {
    pub nombre: String,
    pub tipo: String,
    pub serial: String,
    pub ubicacion: String,
    pub observaciones: String,
    /// Only overwritten when the caller sent it
    pub estado: Option<String>,
}

/// Validated record ready for insertion
#[derive(Debug, Clone, PartialEq)]
pub struct NewEquipo {
    pub nombre: String,
    pub tipo: String,
    pub serial: String,
    pub ubicacion: String,
    pub estado: String,
    pub observaciones: String,
}

fn required(value: Option<String>, field: &str) -> AppResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::Validation(format!("Falta el campo {}", field))),
    }
}

impl EquipoPayload {
    /// Check the payload and extract the fields every write needs.
    /// The serial is checked first; it is the one field the API has always required.
    pub fn into_changes(self) -> AppResult<EquipoChanges> {
        if self.serial.as_deref().map_or(true, |s| s.trim().is_empty()) {
            return Err(AppError::Validation("Falta el serial".to_string()));
        }
        self.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        Ok(EquipoChanges {
            serial: required(self.serial, "serial")?,
            nombre: required(self.nombre, "nombre")?,
            tipo: required(self.tipo, "tipo")?,
            ubicacion: required(self.ubicacion, "ubicacion")?,
            observaciones: self.observaciones.unwrap_or_default(),
            estado: self.estado,
        })
    }

    pub fn into_new(self) -> AppResult<NewEquipo> {
        self.into_changes().map(NewEquipo::from)
    }
}

impl From<EquipoChanges> for NewEquipo {
    fn from(c: EquipoChanges) -> Self {
        Self {
            nombre: c.nombre,
            tipo: c.tipo,
            serial: c.serial,
            ubicacion: c.ubicacion,
            estado: c.estado.unwrap_or_else(|| ESTADO_OPERATIVO.to_string()),
            observaciones: c.observaciones,
        }
    }
}

/// Generic `{mensaje}` body returned by the write endpoints
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MensajeResponse {
    pub mensaje: String,
}

impl MensajeResponse {
    pub fn new(mensaje: impl Into<String>) -> Self {
        Self { mensaje: mensaje.into() }
    }
}
