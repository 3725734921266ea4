//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación. El motor de
//! estado es la pieza central: los controllers lo invocan en cada lectura.

pub mod status_service;

pub use status_service::*;
