//! Controllers de la aplicación
//!
//! Lógica de negocio de cada recurso; los handlers de rutas delegan aquí.

pub mod company_controller;
pub mod service_log_controller;
pub mod vehicle_controller;
