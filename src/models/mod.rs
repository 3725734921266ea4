//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL y al backend en memoria.

pub mod company;
pub mod service_entry;
pub mod vehicle;
