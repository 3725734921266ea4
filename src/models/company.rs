//! Modelo de Company
//!
//! Empresa dueña de la flota y credenciales de su administrador.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Empresa registrada en el sistema
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Company {
    pub id: Uuid,
    pub name: String,
    pub ruc: Option<String>,
    pub admin_full_name: String,
    pub admin_email: String,
    pub admin_password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl Company {
    pub fn new(
        name: String,
        ruc: Option<String>,
        admin_full_name: String,
        admin_email: String,
        admin_password_hash: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            ruc,
            admin_full_name,
            admin_email,
            admin_password_hash,
            created_at: Utc::now(),
        }
    }
}
