//! DTOs de la API
//!
//! Requests y responses que viajan por HTTP.

pub mod auth_dto;
pub mod company_dto;
pub mod service_log_dto;
pub mod vehicle_dto;
