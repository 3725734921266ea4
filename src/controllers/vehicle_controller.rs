//! Controller de vehículos
//!
//! CRUD de la flota. El estado (mantenimiento/documentos) nunca se guarda:
//! se calcula con el motor de estado al armar cada response.

use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::dto::company_dto::ApiResponse;
use crate::dto::vehicle_dto::{
    CreateVehicleRequest, UpdateMileageRequest, UpdateVehicleRequest, VehicleFilters,
    VehicleResponse,
};
use crate::models::vehicle::Vehicle;
use crate::repositories::store::{ServiceLogStore, VehicleStore};
use crate::services::status_service::{Severity, StatusReport};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::{
    parse_document_date, parse_service_datetime, validate_license_plate, validate_non_negative,
};

pub struct VehicleController {
    vehicles: Arc<dyn VehicleStore>,
    service_log: Arc<dyn ServiceLogStore>,
}

impl VehicleController {
    pub fn new(vehicles: Arc<dyn VehicleStore>, service_log: Arc<dyn ServiceLogStore>) -> Self {
        Self {
            vehicles,
            service_log,
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(state.stores.vehicles.clone(), state.stores.service_log.clone())
    }

    pub async fn create(
        &self,
        company_id: Uuid,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;

        validate_license_plate(&request.license_plate)
            .map_err(|_| AppError::ValidationError("Matrícula inválida".to_string()))?;

        // Verificar que la matrícula no exista para esta empresa
        if self
            .vehicles
            .plate_exists(&request.license_plate, company_id)
            .await?
        {
            return Err(AppError::Conflict(
                "La matrícula ya está registrada para esta empresa".to_string(),
            ));
        }

        let last_service_date = match request.last_service_date.as_deref() {
            Some(raw) => parse_service_datetime(raw, "last_service_date")?,
            None => Utc::now(),
        };
        let afocat_date = parse_document_date(request.afocat_date.as_deref(), "afocat_date")?;
        let review_date = parse_document_date(request.review_date.as_deref(), "review_date")?;

        // Si nunca fue servido, el último servicio coincide con el alta
        let last_service_km = request.last_service_km.unwrap_or(request.current_km);
        validate_non_negative(last_service_km).map_err(|_| {
            AppError::ValidationError("last_service_km no puede ser negativo".to_string())
        })?;

        let vehicle = Vehicle::new(
            company_id,
            request.license_plate,
            request.brand,
            request.model,
            request.current_km,
            last_service_km,
            last_service_date,
            afocat_date,
            review_date,
        );

        let saved = self.vehicles.create(&vehicle).await?;

        Ok(ApiResponse::success_with_message(
            VehicleResponse::from_vehicle(saved, Utc::now()),
            "Vehículo creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(
        &self,
        id: Uuid,
        company_id: Uuid,
    ) -> Result<VehicleResponse, AppError> {
        let vehicle = self.owned_vehicle(id, company_id).await?;
        Ok(VehicleResponse::from_vehicle(vehicle, Utc::now()))
    }

    /// Estado derivado del vehículo, sin el resto del registro
    pub async fn get_status(&self, id: Uuid, company_id: Uuid) -> Result<StatusReport, AppError> {
        let vehicle = self.owned_vehicle(id, company_id).await?;
        Ok(vehicle.status_at(Utc::now()))
    }

    pub async fn list(
        &self,
        company_id: Uuid,
        filters: VehicleFilters,
    ) -> Result<Vec<VehicleResponse>, AppError> {
        let status_filter = match filters.status.as_deref() {
            None | Some("") => None,
            Some(raw) => Some(Severity::from_str(raw).ok_or_else(|| {
                AppError::ValidationError(format!(
                    "Estado desconocido '{}': use ok, warning o danger",
                    raw
                ))
            })?),
        };

        let vehicles = self.vehicles.list(company_id).await?;

        // "now" se captura una sola vez para que el lote sea consistente
        let now = Utc::now();
        let response = vehicles
            .into_iter()
            .map(|v| VehicleResponse::from_vehicle(v, now))
            .filter(|r| status_filter.map_or(true, |s| r.status.general_status == s))
            .collect();

        Ok(response)
    }

    pub async fn update(
        &self,
        id: Uuid,
        company_id: Uuid,
        request: UpdateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;

        let mut vehicle = self.owned_vehicle(id, company_id).await?;

        if let Some(plate) = request.license_plate {
            validate_license_plate(&plate)
                .map_err(|_| AppError::ValidationError("Matrícula inválida".to_string()))?;
            if plate != vehicle.license_plate
                && self.vehicles.plate_exists(&plate, company_id).await?
            {
                return Err(AppError::Conflict(
                    "La matrícula ya está registrada para esta empresa".to_string(),
                ));
            }
            vehicle.license_plate = plate;
        }
        if let Some(brand) = request.brand {
            vehicle.brand = Some(brand);
        }
        if let Some(model) = request.model {
            vehicle.model = Some(model);
        }
        if let Some(km) = request.current_km {
            vehicle.current_km = km;
        }
        if let Some(km) = request.last_service_km {
            vehicle.last_service_km = km;
        }
        if let Some(raw) = request.last_service_date.as_deref() {
            vehicle.last_service_date = parse_service_datetime(raw, "last_service_date")?;
        }
        // String vacío limpia el documento (queda "sin registrar")
        if let Some(raw) = request.afocat_date.as_deref() {
            vehicle.afocat_date = parse_document_date(Some(raw), "afocat_date")?;
        }
        if let Some(raw) = request.review_date.as_deref() {
            vehicle.review_date = parse_document_date(Some(raw), "review_date")?;
        }

        let updated = self.vehicles.update(&vehicle).await?;

        Ok(ApiResponse::success_with_message(
            VehicleResponse::from_vehicle(updated, Utc::now()),
            "Vehículo actualizado exitosamente".to_string(),
        ))
    }

    pub async fn update_mileage(
        &self,
        id: Uuid,
        company_id: Uuid,
        request: UpdateMileageRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;

        let mut vehicle = self.owned_vehicle(id, company_id).await?;

        if request.current_km < vehicle.current_km {
            return Err(AppError::ValidationError(format!(
                "El kilometraje no puede retroceder (actual: {})",
                vehicle.current_km
            )));
        }

        vehicle.current_km = request.current_km;
        let updated = self.vehicles.update(&vehicle).await?;

        Ok(ApiResponse::success_with_message(
            VehicleResponse::from_vehicle(updated, Utc::now()),
            "Kilometraje actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid, company_id: Uuid) -> Result<(), AppError> {
        let vehicle = self.owned_vehicle(id, company_id).await?;

        // El historial no sobrevive al vehículo
        self.service_log.delete_by_vehicle(vehicle.id).await?;
        self.vehicles.delete(vehicle.id).await?;

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
