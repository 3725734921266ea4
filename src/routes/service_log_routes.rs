use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::service_log_controller::ServiceLogController;
use crate::dto::company_dto::ApiResponse;
use crate::dto::service_log_dto::{CreateServiceEntryRequest, ServiceEntryResponse};
use crate::middleware::auth::AuthCompany;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_service_log_router() -> Router<AppState> {
    Router::new()
        .route("/:id/history", get(list_history))
        .route("/:id/history", post(register_service))
        .route("/:id/history/:entry_id", delete(delete_entry))
}

async fn list_history(
    State(state): State<AppState>,
    AuthCompany(company_id): AuthCompany,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<ServiceEntryResponse>>, AppError> {
    let controller = ServiceLogController::from_state(&state);
    let response = controller.list(id, company_id).await?;
    Ok(Json(response))
}

async fn register_service(
    State(state): State<AppState>,
    AuthCompany(company_id): AuthCompany,
    Path(id): Path<Uuid>,
    Json(request): Json<CreateServiceEntryRequest>,
) -> Result<Json<ApiResponse<ServiceEntryResponse>>, AppError> {
    let controller = ServiceLogController::from_state(&state);
    let response = controller.register(id, company_id, request).await?;
    Ok(Json(response))
}

async fn delete_entry(
    State(state): State<AppState>,
    AuthCompany(company_id): AuthCompany,
    Path((id, entry_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = ServiceLogController::from_state(&state);
    controller.delete(id, entry_id, company_id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Entrada de historial eliminada exitosamente"
    })))
}
