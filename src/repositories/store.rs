//! Abstracción de almacenamiento
//!
//! Las dos colecciones del dominio (vehículos e historial de servicios)
//! se acceden a través de traits async con backends intercambiables:
//! PostgreSQL (durable) o mapas en memoria (almacenamiento local). La
//! selección es configuración explícita que se inyecta en el estado de la
//! aplicación; no hay singletons globales.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::config::environment::StorageBackend;
use crate::models::service_entry::ServiceEntry;
use crate::models::vehicle::Vehicle;
use crate::repositories::memory_store::{MemoryServiceLogStore, MemoryVehicleStore};
use crate::repositories::service_log_repository::ServiceLogRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;

/// Colección de vehículos
#[async_trait]
pub trait VehicleStore: Send + Sync {
    async fn list(&self, company_id: Uuid) -> Result<Vec<Vehicle>, AppError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError>;
    async fn create(&self, vehicle: &Vehicle) -> Result<Vehicle, AppError>;
    async fn update(&self, vehicle: &Vehicle) -> Result<Vehicle, AppError>;
    async fn delete(&self, id: Uuid) -> Result<(), AppError>;
    async fn plate_exists(&self, license_plate: &str, company_id: Uuid) -> Result<bool, AppError>;
}

/// Colección de historial de servicios por vehículo
#[async_trait]
pub trait ServiceLogStore: Send + Sync {
    async fn list_by_vehicle(&self, vehicle_id: Uuid) -> Result<Vec<ServiceEntry>, AppError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ServiceEntry>, AppError>;
    async fn create(&self, entry: &ServiceEntry) -> Result<ServiceEntry, AppError>;
    async fn delete(&self, id: Uuid) -> Result<(), AppError>;
    async fn delete_by_vehicle(&self, vehicle_id: Uuid) -> Result<(), AppError>;
}

/// Stores activos de la aplicación, uno por colección
#[derive(Clone)]
pub struct Stores {
    pub vehicles: Arc<dyn VehicleStore>,
    pub service_log: Arc<dyn ServiceLogStore>,
}

impl Stores {
    /// Construir los stores para el backend configurado
    pub fn for_backend(backend: StorageBackend, pool: &PgPool) -> Self {
        match backend {
            StorageBackend::Postgres => Self::postgres(pool.clone()),
            StorageBackend::Memory => Self::memory(),
        }
    }

    pub fn postgres(pool: PgPool) -> Self {
        Self {
            vehicles: Arc::new(VehicleRepository::new(pool.clone())),
            service_log: Arc::new(ServiceLogRepository::new(pool)),
        }
    }

    pub fn memory() -> Self {
        Self {
            vehicles: Arc::new(MemoryVehicleStore::new()),
            service_log: Arc::new(MemoryServiceLogStore::new()),
        }
    }
}
