//! Controller del historial de servicios
//!
//! Registrar un servicio actualiza el vehículo: kilometraje y fecha de
//! último servicio, y el contador de servicios desde el último engrase.

use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::dto::company_dto::ApiResponse;
use crate::dto::service_log_dto::{CreateServiceEntryRequest, ServiceEntryResponse};
use crate::models::service_entry::{ServiceEntry, ServiceKind};
use crate::models::vehicle::Vehicle;
use crate::repositories::store::{ServiceLogStore, VehicleStore};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::parse_service_datetime;

pub struct ServiceLogController {
    vehicles: Arc<dyn VehicleStore>,
    service_log: Arc<dyn ServiceLogStore>,
}

impl ServiceLogController {
    pub fn new(vehicles: Arc<dyn VehicleStore>, service_log: Arc<dyn ServiceLogStore>) -> Self {
        Self {
            vehicles,
            service_log,
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(state.stores.vehicles.clone(), state.stores.service_log.clone())
    }

    pub async fn list(
        &self,
        vehicle_id: Uuid,
        company_id: Uuid,
    ) -> Result<Vec<ServiceEntryResponse>, AppError> {
        self.owned_vehicle(vehicle_id, company_id).await?;

        let entries = self.service_log.list_by_vehicle(vehicle_id).await?;
        Ok(entries.into_iter().map(ServiceEntryResponse::from).collect())
    }

    pub async fn register(
        &self,
        vehicle_id: Uuid,
        company_id: Uuid,
        request: CreateServiceEntryRequest,
    ) -> Result<ApiResponse<ServiceEntryResponse>, AppError> {
        request.validate()?;

        let mut vehicle = self.owned_vehicle(vehicle_id, company_id).await?;

        let kind = ServiceKind::from_str(&request.kind).ok_or_else(|| {
            AppError::ValidationError(format!(
                "Tipo de servicio desconocido '{}': use service o grease",
                request.kind
            ))
        })?;

        let performed_at = match request.performed_at.as_deref() {
            Some(raw) => parse_service_datetime(raw, "performed_at")?,
            None => Utc::now(),
        };
        let service_km = request.service_km.unwrap_or(vehicle.current_km);

        let entry = ServiceEntry::new(vehicle_id, kind, service_km, performed_at, request.notes);
        let saved = self.service_log.create(&entry).await?;

        // Bookkeeping sobre el vehículo; el estado derivado nunca se guarda
        vehicle.last_service_km = service_km;
        vehicle.last_service_date = performed_at;
        vehicle.current_km = vehicle.current_km.max(service_km);
        vehicle.changes_since_grease = match kind {
            ServiceKind::Grease => 0,
            ServiceKind::Service => vehicle.changes_since_grease + 1,
        };
        self.vehicles.update(&vehicle).await?;

        Ok(ApiResponse::success_with_message(
            ServiceEntryResponse::from(saved),
            "Servicio registrado exitosamente".to_string(),
        ))
    }

    /// Eliminar una entrada del historial. No recalcula los campos de
    /// último servicio del vehículo.
    pub async fn delete(
        &self,
        vehicle_id: Uuid,
        entry_id: Uuid,
        company_id: Uuid,
    ) -> Result<(), AppError> {
        self.owned_vehicle(vehicle_id, company_id).await?;

        let entry = self
            .service_log
            .find_by_id(entry_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Entrada de historial no encontrada".to_string()))?;

        if entry.vehicle_id != vehicle_id {
            return Err(AppError::NotFound(
                "Entrada de historial no encontrada".to_string(),
            ));
        }

        self.service_log.delete(entry_id).await?;
        Ok(())
    }

    async fn owned_vehicle(&self, id: Uuid, company_id: Uuid) -> Result<Vehicle, AppError> {
        let vehicle = self
            .vehicles
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        if vehicle.company_id != company_id {
            return Err(AppError::Forbidden(
                "No tienes permiso para acceder a este vehículo".to_string(),
            ));
        }

        Ok(vehicle)
    }
}
