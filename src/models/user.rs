//! User model (login scaffold)
//!
//! The `users` table is created at startup so a future login flow has a
//! place to live; no route reads or writes it yet.

use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}
