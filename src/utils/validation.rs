//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos y el
//! parseo de fechas en el borde de la API: una fecha malformada falla la
//! request nombrando el campo ofensivo, nunca se propaga silenciosamente.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use validator::ValidationError;

use crate::utils::errors::AppError;

/// Validar y convertir string a fecha
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        let mut error = ValidationError::new("date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

/// Validar y convertir string a datetime
pub fn validate_datetime(value: &str) -> Result<DateTime<Utc>, ValidationError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            let mut error = ValidationError::new("datetime");
            error.add_param("value".into(), &value.to_string());
            error.add_param("format".into(), &"RFC3339".to_string());
            error
        })
}

/// Parsear la fecha de vencimiento de un documento (AFOCAT / revisión).
///
/// `None` o string vacío significan "documento sin registrar" y se
/// normalizan a `None`; cualquier otro valor debe ser YYYY-MM-DD.
pub fn parse_document_date(
    value: Option<&str>,
    field: &'static str,
) -> Result<Option<NaiveDate>, AppError> {
    match value {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => validate_date(raw.trim()).map(Some).map_err(|_| {
            AppError::ValidationError(format!(
                "Fecha inválida en '{}': se espera formato YYYY-MM-DD",
                field
            ))
        }),
    }
}

/// Parsear una fecha-hora de servicio (RFC3339).
pub fn parse_service_datetime(value: &str, field: &'static str) -> Result<DateTime<Utc>, AppError> {
    validate_datetime(value.trim()).map_err(|_| {
        AppError::ValidationError(format!(
            "Fecha inválida en '{}': se espera formato RFC3339",
            field
        ))
    })
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea no negativo
pub fn validate_non_negative<T: PartialOrd + std::fmt::Display + num_traits::Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value < T::zero() {
        let mut error = ValidationError::new("non_negative");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar formato de matrícula de vehículo
pub fn validate_license_plate(value: &str) -> Result<(), ValidationError> {
    // Formato básico: XX-123 / ABC-123 o similar
    let clean_plate = value.replace([' ', '-', '_'], "");
    if clean_plate.len() < 5 || clean_plate.len() > 10 {
        let mut error = ValidationError::new("license_plate");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}
