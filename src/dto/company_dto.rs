use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use uuid::Uuid;

// Request para registrar una empresa
#[derive(Debug, Deserialize)]
pub struct RegisterCompanyRequest {
    pub company_name: String,
    pub company_ruc: Option<String>,
    pub admin_full_name: String,
    pub admin_email: String,
    pub admin_password: String,
}

// Response de empresa (sin password)
#[derive(Debug, Serialize)]
pub struct CompanyResponse {
    pub id: Uuid,
    pub name: String,
    pub ruc: Option<String>,
    pub admin_full_name: String,
    pub admin_email: String,
    pub created_at: DateTime<Utc>,
}

// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn error(message: String) -> Self {
        Self {
            success: false,
            message: Some(message),
            data: None,
        }
    }
}

impl From<crate::models::company::Company> for CompanyResponse {
    fn from(company: crate::models::company::Company) -> Self {
        Self {
            id: company.id,
            name: company.name,
            ruc: company.ruc,
            admin_full_name: company.admin_full_name,
            admin_email: company.admin_email,
            created_at: company.created_at,
        }
    }
}
