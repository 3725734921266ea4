//! Backend de almacenamiento local en memoria
//!
//! Implementación de los stores sobre mapas protegidos por RwLock. Se usa
//! como almacenamiento de dispositivo local (demos, entornos sin base de
//! datos) y en las pruebas de los controllers.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::service_entry::ServiceEntry;
use crate::models::vehicle::Vehicle;
use crate::repositories::store::{ServiceLogStore, VehicleStore};
use crate::utils::errors::AppError;

/// Store de vehículos en memoria
#[derive(Clone, Default)]
pub struct MemoryVehicleStore {
    vehicles: Arc<RwLock<HashMap<Uuid, Vehicle>>>,
}

impl MemoryVehicleStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VehicleStore for MemoryVehicleStore {
    async fn list(&self, company_id: Uuid) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = self.vehicles.read().await;
        let mut result: Vec<Vehicle> = vehicles
            .values()
            .filter(|v| v.company_id == company_id)
            .cloned()
            .collect();
        // Mismo orden que el backend durable
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(result)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError> {
        Ok(self.vehicles.read().await.get(&id).cloned())
    }

    async fn create(&self, vehicle: &Vehicle) -> Result<Vehicle, AppError> {
        let mut vehicles = self.vehicles.write().await;
        log::info!("💾 Almacenando vehículo '{}' en memoria", vehicle.license_plate);
        vehicles.insert(vehicle.id, vehicle.clone());
        Ok(vehicle.clone())
    }

    async fn update(&self, vehicle: &Vehicle) -> Result<Vehicle, AppError> {
        let mut vehicles = self.vehicles.write().await;
        if !vehicles.contains_key(&vehicle.id) {
            return Err(AppError::NotFound("Vehículo no encontrado".to_string()));
        }
        vehicles.insert(vehicle.id, vehicle.clone());
        Ok(vehicle.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.vehicles.write().await.remove(&id);
        Ok(())
    }

    async fn plate_exists(&self, license_plate: &str, company_id: Uuid) -> Result<bool, AppError> {
        let vehicles = self.vehicles.read().await;
        Ok(vehicles
            .values()
            .any(|v| v.company_id == company_id && v.license_plate == license_plate))
    }
}

/// Store del historial de servicios en memoria
#[derive(Clone, Default)]
pub struct MemoryServiceLogStore {
    entries: Arc<RwLock<HashMap<Uuid, ServiceEntry>>>,
}

impl MemoryServiceLogStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ServiceLogStore for MemoryServiceLogStore {
    async fn list_by_vehicle(&self, vehicle_id: Uuid) -> Result<Vec<ServiceEntry>, AppError> {
        let entries = self.entries.read().await;
        let mut result: Vec<ServiceEntry> = entries
            .values()
            .filter(|e| e.vehicle_id == vehicle_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| b.performed_at.cmp(&a.performed_at));
        Ok(result)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ServiceEntry>, AppError> {
        Ok(self.entries.read().await.get(&id).cloned())
    }

    async fn create(&self, entry: &ServiceEntry) -> Result<ServiceEntry, AppError> {
        let mut entries = self.entries.write().await;
        entries.insert(entry.id, entry.clone());
        Ok(entry.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.entries.write().await.remove(&id);
        Ok(())
    }

    async fn delete_by_vehicle(&self, vehicle_id: Uuid) -> Result<(), AppError> {
        self.entries
            .write()
            .await
            .retain(|_, entry| entry.vehicle_id != vehicle_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::service_entry::ServiceKind;
    use chrono::{Duration, Utc};

    fn sample_vehicle(company_id: Uuid, plate: &str) -> Vehicle {
        Vehicle::new(
            company_id,
            plate.to_string(),
            None,
            None,
            1000,
            1000,
            Utc::now(),
            None,
            None,
        )
    }

    #[tokio::test]
    async fn test_vehicle_crud_round_trip() {
        let store = MemoryVehicleStore::new();
        let company_id = Uuid::new_v4();

        let vehicle = sample_vehicle(company_id, "ABC-123");
        store.create(&vehicle).await.unwrap();

        let found = store.find_by_id(vehicle.id).await.unwrap().unwrap();
        assert_eq!(found.license_plate, "ABC-123");

        let mut updated = found.clone();
        updated.current_km = 2500;
        store.update(&updated).await.unwrap();
        let found = store.find_by_id(vehicle.id).await.unwrap().unwrap();
        assert_eq!(found.current_km, 2500);

        store.delete(vehicle.id).await.unwrap();
        assert!(store.find_by_id(vehicle.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_is_scoped_to_company() {
        let store = MemoryVehicleStore::new();
        let company_a = Uuid::new_v4();
        let company_b = Uuid::new_v4();

        store.create(&sample_vehicle(company_a, "AAA-111")).await.unwrap();
        store.create(&sample_vehicle(company_b, "BBB-222")).await.unwrap();

        let listed = store.list(company_a).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].license_plate, "AAA-111");
    }

    #[tokio::test]
    async fn test_plate_exists_per_company() {
        let store = MemoryVehicleStore::new();
        let company_a = Uuid::new_v4();
        let company_b = Uuid::new_v4();

        store.create(&sample_vehicle(company_a, "AAA-111")).await.unwrap();

        assert!(store.plate_exists("AAA-111", company_a).await.unwrap());
        assert!(!store.plate_exists("AAA-111", company_b).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_missing_vehicle_is_not_found() {
        let store = MemoryVehicleStore::new();
        let vehicle = sample_vehicle(Uuid::new_v4(), "ZZZ-999");
        let err = store.update(&vehicle).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_service_log_ordered_newest_first() {
        let store = MemoryServiceLogStore::new();
        let vehicle_id = Uuid::new_v4();
        let now = Utc::now();

        let older = ServiceEntry::new(
            vehicle_id,
            ServiceKind::Service,
            1000,
            now - Duration::days(10),
            None,
        );
        let newer = ServiceEntry::new(vehicle_id, ServiceKind::Grease, 2000, now, None);
        store.create(&older).await.unwrap();
        store.create(&newer).await.unwrap();

        let entries = store.list_by_vehicle(vehicle_id).await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, newer.id);
        assert_eq!(entries[1].id, older.id);
    }

    #[tokio::test]
    async fn test_delete_by_vehicle_clears_history() {
        let store = MemoryServiceLogStore::new();
        let vehicle_id = Uuid::new_v4();
        let other_vehicle = Uuid::new_v4();

        let entry = ServiceEntry::new(vehicle_id, ServiceKind::Service, 1000, Utc::now(), None);
        let keep = ServiceEntry::new(other_vehicle, ServiceKind::Service, 500, Utc::now(), None);
        store.create(&entry).await.unwrap();
        store.create(&keep).await.unwrap();

        store.delete_by_vehicle(vehicle_id).await.unwrap();
        assert!(store.list_by_vehicle(vehicle_id).await.unwrap().is_empty());
        assert_eq!(store.list_by_vehicle(other_vehicle).await.unwrap().len(), 1);
    }
}
