use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::service_entry::ServiceEntry;

/// Request para registrar un servicio en el historial.
///
/// `kind` es "service" o "grease". Si no se indica `service_km` se toma el
/// odómetro actual del vehículo; si no se indica `performed_at` se usa el
/// momento de la petición.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateServiceEntryRequest {
    pub kind: String,

    #[validate(range(min = 0))]
    pub service_km: Option<i64>,

    pub performed_at: Option<String>,

    #[validate(length(max = 500))]
    pub notes: Option<String>,
}

// Response de entrada del historial
#[derive(Debug, Serialize)]
pub struct ServiceEntryResponse {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub kind: String,
    pub service_km: i64,
    pub performed_at: DateTime<Utc>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<ServiceEntry> for ServiceEntryResponse {
    fn from(entry: ServiceEntry) -> Self {
        Self {
            id: entry.id,
            vehicle_id: entry.vehicle_id,
            kind: entry.kind,
            service_km: entry.service_km,
            performed_at: entry.performed_at,
            notes: entry.notes,
            created_at: entry.created_at,
        }
    }
}
