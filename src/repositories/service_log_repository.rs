//! Repositorio PostgreSQL del historial de servicios

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::service_entry::ServiceEntry;
use crate::repositories::store::ServiceLogStore;
use crate::utils::errors::AppError;

pub struct ServiceLogRepository {
    pool: PgPool,
}

impl ServiceLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ServiceLogStore for ServiceLogRepository {
    async fn list_by_vehicle(&self, vehicle_id: Uuid) -> Result<Vec<ServiceEntry>, AppError> {
        let entries = sqlx::query_as::<_, ServiceEntry>(
            "SELECT * FROM service_entries WHERE vehicle_id = $1 ORDER BY performed_at DESC",
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing service entries: {}", e)))?;

        Ok(entries)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ServiceEntry>, AppError> {
        let entry = sqlx::query_as::<_, ServiceEntry>("SELECT * FROM service_entries WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error finding service entry: {}", e)))?;

        Ok(entry)
    }

    async fn create(&self, entry: &ServiceEntry) -> Result<ServiceEntry, AppError> {
        let created = sqlx::query_as::<_, ServiceEntry>(
            r#"
            INSERT INTO service_entries (id, vehicle_id, kind, service_km, performed_at, notes, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(entry.id)
        .bind(entry.vehicle_id)
        .bind(&entry.kind)
        .bind(entry.service_km)
        .bind(entry.performed_at)
        .bind(&entry.notes)
        .bind(entry.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating service entry: {}", e)))?;

        Ok(created)
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM service_entries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error deleting service entry: {}", e)))?;

        Ok(())
    }

    async fn delete_by_vehicle(&self, vehicle_id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM service_entries WHERE vehicle_id = $1")
            .bind(vehicle_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::DatabaseError(format!("Error deleting vehicle history: {}", e))
            })?;

        Ok(())
    }
}
