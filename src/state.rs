//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. Los stores se construyen una sola vez a
//! partir de la configuración; no hay singletons globales.

use sqlx::PgPool;

use crate::config::environment::EnvironmentConfig;
use crate::repositories::store::Stores;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
    pub stores: Stores,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        let stores = Stores::for_backend(config.storage_backend, &pool);
        Self {
            pool,
            config,
            stores,
        }
    }
}
