//! Extractor de autenticación
//!
//! Extrae la empresa autenticada del token Bearer. Los handlers que lo
//! reciben quedan protegidos: sin token válido la request se rechaza con
//! 401 antes de tocar el controller.

use axum::{async_trait, extract::FromRequestParts, http::header, http::request::Parts};
use uuid::Uuid;

use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::{extract_token_from_header, verify_token, JwtConfig};

/// Empresa autenticada por JWT
#[derive(Debug, Clone, Copy)]
pub struct AuthCompany(pub Uuid);

#[async_trait]
impl FromRequestParts<AppState> for AuthCompany {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| {
                AppError::Unauthorized("Falta el header Authorization".to_string())
            })?;

        let token = extract_token_from_header(auth_header)?;
        let claims = verify_token(token, &JwtConfig::from(&state.config))?;

        let company_id = Uuid::parse_str(&claims.company_id)
            .map_err(|_| AppError::Unauthorized("Token inválido".to_string()))?;

        Ok(AuthCompany(company_id))
    }
}
