//! Data models for the inventory

pub mod equipment;
pub mod user;

// Re-export commonly used types
pub use equipment::{Equipo, EquipoChanges, EquipoPayload, MensajeResponse, NewEquipo};
pub use user::User;
