use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::company_controller::CompanyController;
use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::dto::company_dto::{ApiResponse, CompanyResponse, RegisterCompanyRequest};
use crate::middleware::auth::AuthCompany;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::JwtConfig;

pub fn create_company_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_company))
        .route("/login", post(login_company))
        .route("/me", get(get_current_company))
}

async fn register_company(
    State(state): State<AppState>,
    Json(request): Json<RegisterCompanyRequest>,
) -> Result<Json<ApiResponse<CompanyResponse>>, AppError> {
    let controller = CompanyController::new(state.pool.clone());
    let response = controller.register(request).await?;
    Ok(Json(response))
}

async fn login_company(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let controller = CompanyController::new(state.pool.clone());
    let response = controller
        .login(request, &JwtConfig::from(&state.config))
        .await?;
    Ok(Json(response))
}

async fn get_current_company(
    State(state): State<AppState>,
    AuthCompany(company_id): AuthCompany,
) -> Result<Json<CompanyResponse>, AppError> {
    let controller = CompanyController::new(state.pool.clone());
    let response = controller.get_by_id(company_id).await?;
    Ok(Json(response))
}
