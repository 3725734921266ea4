//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle de la flota. Mapea exactamente
//! a la tabla vehicles con primary key 'id'; los mismos campos viven en el
//! backend en memoria.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::services::status_service::{compute_status, StatusReport};

/// Vehículo de la flota con sus datos de mantenimiento y documentos
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
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
}

impl Vehicle {
    /// Crear un vehículo nuevo. Si nunca fue servido, el kilometraje de
    /// último servicio es el del alta.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        company_id: Uuid,
        license_plate: String,
        brand: Option<String>,
        model: Option<String>,
        current_km: i64,
        last_service_km: i64,
        last_service_date: DateTime<Utc>,
        afocat_date: Option<NaiveDate>,
        review_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            company_id,
            license_plate,
            brand,
            model,
            current_km,
            last_service_km,
            last_service_date,
            afocat_date,
            review_date,
            changes_since_grease: 0,
            created_at: Utc::now(),
        }
    }

    /// Estado derivado del vehículo en el instante `now`.
    ///
    /// Vista efímera: se recalcula en cada lectura, nunca se persiste.
    pub fn status_at(&self, now: DateTime<Utc>) -> StatusReport {
        compute_status(
            self.current_km,
            self.last_service_km,
            self.last_service_date,
            self.afocat_date,
            self.review_date,
            now,
        )
    }
}
