//! Rutas de la API
//!
//! Un router por recurso, anidados bajo /api en main.

pub mod company_routes;
pub mod service_log_routes;
pub mod vehicle_routes;
