//! Modelo de ServiceEntry
//!
//! Historial de mantenimiento por vehículo: cada entrada registra un
//! servicio de intervalo ('service') o un engrase de caja ('grease').

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Tipo de intervención registrada en el historial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    /// Servicio de mantenimiento de intervalo (aceite)
    Service,
    /// Cambio de grasa de caja; reinicia el contador de servicios
    Grease,
}

impl ServiceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceKind::Service => "service",
            ServiceKind::Grease => "grease",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "service" => Some(ServiceKind::Service),
            "grease" => Some(ServiceKind::Grease),
            _ => None,
        }
    }
}

/// Entrada del historial de servicios de un vehículo
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ServiceEntry {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub kind: String,
    pub service_km: i64,
    pub performed_at: DateTime<Utc>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ServiceEntry {
    pub fn new(
        vehicle_id: Uuid,
        kind: ServiceKind,
        service_km: i64,
        performed_at: DateTime<Utc>,
        notes: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            vehicle_id,
            kind: kind.as_str().to_string(),
            service_km,
            performed_at,
            notes,
            created_at: Utc::now(),
        }
    }

    /// Tipo tipado de la entrada; las filas siempre se escriben vía
    /// `ServiceKind::as_str`, por lo que un valor desconocido es un bug.
    pub fn kind(&self) -> Option<ServiceKind> {
        ServiceKind::from_str(&self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_kind_round_trip() {
        for kind in [ServiceKind::Service, ServiceKind::Grease] {
            assert_eq!(ServiceKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(ServiceKind::from_str("paint"), None);
    }

    #[test]
    fn test_entry_exposes_typed_kind() {
        let entry = ServiceEntry::new(
            Uuid::new_v4(),
            ServiceKind::Grease,
            12000,
            Utc::now(),
            None,
        );
        assert_eq!(entry.kind(), Some(ServiceKind::Grease));
    }
}
