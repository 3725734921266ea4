use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::company_dto::ApiResponse;
use crate::dto::vehicle_dto::{
    CreateVehicleRequest, UpdateMileageRequest, UpdateVehicleRequest, VehicleFilters,
    VehicleResponse,
};
use crate::middleware::auth::AuthCompany;
use crate::routes::service_log_routes;
use crate::services::status_service::StatusReport;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_vehicle))
        .route("/", get(list_vehicles))
        .route("/:id", get(get_vehicle))
        .route("/:id", put(update_vehicle))
        .route("/:id", delete(delete_vehicle))
        .route("/:id/status", get(get_vehicle_status))
        .route("/:id/mileage", put(update_vehicle_mileage))
        .merge(service_log_routes::create_service_log_router())
}

async fn create_vehicle(
    State(state): State<AppState>,
    AuthCompany(company_id): AuthCompany,
    Json(request): Json<CreateVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = VehicleController::from_state(&state);
    let response = controller.create(company_id, request).await?;
    Ok(Json(response))
}

async fn list_vehicles(
    State(state): State<AppState>,
    AuthCompany(company_id): AuthCompany,
    Query(filters): Query<VehicleFilters>,
) -> Result<Json<Vec<VehicleResponse>>, AppError> {
    let controller = VehicleController::from_state(&state);
    let response = controller.list(company_id, filters).await?;
    Ok(Json(response))
}

async fn get_vehicle(
    State(state): State<AppState>,
    AuthCompany(company_id): AuthCompany,
    Path(id): Path<Uuid>,
) -> Result<Json<VehicleResponse>, AppError> {
    let controller = VehicleController::from_state(&state);
    let response = controller.get_by_id(id, company_id).await?;
    Ok(Json(response))
}

async fn get_vehicle_status(
    State(state): State<AppState>,
    AuthCompany(company_id): AuthCompany,
    Path(id): Path<Uuid>,
) -> Result<Json<StatusReport>, AppError> {
    let controller = VehicleController::from_state(&state);
    let response = controller.get_status(id, company_id).await?;
    Ok(Json(response))
}

async fn update_vehicle(
    State(state): State<AppState>,
    AuthCompany(company_id): AuthCompany,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = VehicleController::from_state(&state);
    let response = controller.update(id, company_id, request).await?;
    Ok(Json(response))
}

async fn update_vehicle_mileage(
    State(state): State<AppState>,
    AuthCompany(company_id): AuthCompany,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateMileageRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = VehicleController::from_state(&state);
    let response = controller.update_mileage(id, company_id, request).await?;
    Ok(Json(response))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    AuthCompany(company_id): AuthCompany,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = VehicleController::from_state(&state);
    controller.delete(id, company_id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Vehículo eliminado exitosamente"
    })))
}
