//! Controller de empresas y autenticación

use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::dto::company_dto::{ApiResponse, CompanyResponse, RegisterCompanyRequest};
use crate::models::company::Company;
use crate::repositories::company_repository::CompanyRepository;
use crate::utils::errors::AppError;
use crate::utils::jwt::{generate_token, JwtConfig};

pub struct CompanyController {
    repository: CompanyRepository,
}

impl CompanyController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CompanyRepository::new(pool),
        }
    }

    pub async fn register(
        &self,
        request: RegisterCompanyRequest,
    ) -> Result<ApiResponse<CompanyResponse>, AppError> {
        // Validar campos
        if request.company_name.trim().is_empty() {
            return Err(AppError::ValidationError(
                "El nombre de la empresa es requerido".to_string(),
            ));
        }

        if request.admin_full_name.trim().is_empty() {
            return Err(AppError::ValidationError(
                "El nombre del administrador es requerido".to_string(),
            ));
        }

        if request.admin_email.trim().is_empty() || !request.admin_email.contains('@') {
            return Err(AppError::ValidationError("Email inválido".to_string()));
        }

        if request.admin_password.len() < 8 {
            return Err(AppError::ValidationError(
                "La contraseña debe tener al menos 8 caracteres".to_string(),
            ));
        }

        // Validar RUC si existe
        if let Some(ref ruc) = request.company_ruc {
            if !ruc.is_empty() && (ruc.len() != 11 || !ruc.chars().all(char::is_numeric)) {
                return Err(AppError::ValidationError(
                    "El RUC debe tener 11 dígitos".to_string(),
                ));
            }
        }

        // Verificar que el email no exista
        if self.repository.email_exists(&request.admin_email).await? {
            return Err(AppError::Conflict("El email ya está registrado".to_string()));
        }

        // Hash de la contraseña
        let password_hash = hash(&request.admin_password, DEFAULT_COST)
            .map_err(|e| AppError::Internal(format!("Error hashing password: {}", e)))?;

        let company = Company::new(
            request.company_name,
            request.company_ruc.filter(|s| !s.is_empty()),
            request.admin_full_name,
            request.admin_email,
            password_hash,
        );

        let saved = self.repository.create(&company).await?;

        Ok(ApiResponse::success_with_message(
            CompanyResponse::from(saved),
            "Empresa registrada exitosamente".to_string(),
        ))
    }

    pub async fn login(
        &self,
        request: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        let company = self
            .repository
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Credenciales inválidas".to_string()))?;

        let valid = verify(&request.password, &company.admin_password_hash)
            .map_err(|e| AppError::Internal(format!("Error verifying password: {}", e)))?;

        if !valid {
            return Err(AppError::Unauthorized("Credenciales inválidas".to_string()));
        }

        let token = generate_token(company.id, company.id, jwt_config)?;

        Ok(LoginResponse::success(
            token,
            company.id.to_string(),
            company.name,
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<CompanyResponse, AppError> {
        let company = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Empresa no encontrada".to_string()))?;

        Ok(CompanyResponse::from(company))
    }
}
