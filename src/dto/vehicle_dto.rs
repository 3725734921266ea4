use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::vehicle::Vehicle;
use crate::services::status_service::StatusReport;

/// Request para crear un vehículo.
///
/// Las fechas viajan como strings y se parsean en el borde: una fecha
/// malformada responde 400 nombrando el campo. En los documentos, string
/// vacío significa "sin registrar".
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 5, max = 20))]
    pub license_plate: String,

    #[validate(length(max = 100))]
    pub brand: Option<String>,

    #[validate(length(max = 100))]
    pub model: Option<String>,

    #[validate(range(min = 0))]
    pub current_km: i64,

    // Si se omite, se asume que el alta coincide con el último servicio
    pub last_service_km: Option<i64>,
    pub last_service_date: Option<String>,

    pub afocat_date: Option<String>,
    pub review_date: Option<String>,
}

/// Request para actualizar un vehículo (todos los campos opcionales).
///
/// En los campos de documento, `Some("")` limpia la fecha registrada.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 5, max = 20))]
    pub license_plate: Option<String>,

    #[validate(length(max = 100))]
    pub brand: Option<String>,

    #[validate(length(max = 100))]
    pub model: Option<String>,

    #[validate(range(min = 0))]
    pub current_km: Option<i64>,

    #[validate(range(min = 0))]
    pub last_service_km: Option<i64>,
    pub last_service_date: Option<String>,

    pub afocat_date: Option<String>,
    pub review_date: Option<String>,
}

// Request para actualizar solo el kilometraje
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateMileageRequest {
    #[validate(range(min = 0))]
    pub current_km: i64,
}

// Filtro de listado por estado general
#[derive(Debug, Deserialize, Default)]
pub struct VehicleFilters {
    pub status: Option<String>,
}

/// Response de vehículo con su estado derivado
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: Uuid,
    pub company_id: Uuid,
    pub license_plate: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub current_km: i64,
    pub last_service_km: i64,
    pub last_service_date: DateTime<Utc>,
    pub afocat_date: Option<NaiveDate>,
    pub review_date: Option<NaiveDate>,
    pub changes_since_grease: i32,
    pub created_at: DateTime<Utc>,
    pub status: StatusReport,
}

impl VehicleResponse {
    /// Construir la response calculando el estado en el instante `now`
    pub fn from_vehicle(vehicle: Vehicle, now: DateTime<Utc>) -> Self {
        let status = vehicle.status_at(now);
        Self {
            id: vehicle.id,
            company_id: vehicle.company_id,
            license_plate: vehicle.license_plate,
            brand: vehicle.brand,
            model: vehicle.model,
            current_km: vehicle.current_km,
            last_service_km: vehicle.last_service_km,
            last_service_date: vehicle.last_service_date,
            afocat_date: vehicle.afocat_date,
            review_date: vehicle.review_date,
            changes_since_grease: vehicle.changes_since_grease,
            created_at: vehicle.created_at,
            status,
        }
    }
}
