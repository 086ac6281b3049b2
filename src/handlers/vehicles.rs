use crate::error::ApiError;
use crate::schemas::{ApiResponse, AppState, ErrorResponse};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use model::entities::{prelude::Vehicle, vehicle};
use sea_orm::{ActiveModelTrait, EntityTrait, Set, SqlErr};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};
use utoipa::ToSchema;

/// Request body for creating a vehicle
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateVehicleRequest {
    /// Vehicle name (must be unique)
    pub name: String,
    pub model: String,
    pub manufacturer: String,
    pub cost_in_credits: i32,
    /// Length in meters, rounded
    pub length: i32,
}

/// Request body for updating a vehicle; only provided fields change
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdateVehicleRequest {
    pub name: Option<String>,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub cost_in_credits: Option<i32>,
    pub length: Option<i32>,
}

/// Vehicle response model
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VehicleResponse {
    pub id: i32,
    pub name: String,
    pub model: String,
    pub manufacturer: String,
    pub cost_in_credits: i32,
    pub length: i32,
}

impl From<vehicle::Model> for VehicleResponse {
    fn from(model: vehicle::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            model: model.model,
            manufacturer: model.manufacturer,
            cost_in_credits: model.cost_in_credits,
            length: model.length,
        }
    }
}

fn classify_unique_name(db_error: sea_orm::DbErr, name: &str) -> ApiError {
    if let Some(SqlErr::UniqueConstraintViolation(_)) = db_error.sql_err() {
        return ApiError::conflict(
            format!("Vehicle '{}' already exists", name),
            "VEHICLE_NAME_ALREADY_EXISTS",
        );
    }
    db_error.into()
}

/// Create a new vehicle
#[utoipa::path(
    post,
    path = "/api/v1/vehicles",
    tag = "vehicles",
    request_body = CreateVehicleRequest,
    responses(
        (status = 201, description = "Vehicle created successfully", body = ApiResponse<VehicleResponse>),
        (status = 409, description = "Vehicle name already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_vehicle(
    State(state): State<AppState>,
    Json(request): Json<CreateVehicleRequest>,
) -> Result<(StatusCode, Json<ApiResponse<VehicleResponse>>), ApiError> {
    debug!("Creating vehicle with name: {}", request.name);
    let name = request.name.clone();

    let vehicle = vehicle::ActiveModel {
        name: Set(request.name),
        model: Set(request.model),
        manufacturer: Set(request.manufacturer),
        cost_in_credits: Set(request.cost_in_credits),
        length: Set(request.length),
        ..Default::default()
    }
    .insert(&state.db)
    .await
    .map_err(|db_error| classify_unique_name(db_error, &name))?;

    info!("Vehicle created successfully with ID: {}", vehicle.id);
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse {
            data: VehicleResponse::from(vehicle),
            message: "Vehicle created successfully".to_string(),
            success: true,
        }),
    ))
}

/// Get all vehicles
#[utoipa::path(
    get,
    path = "/api/v1/vehicles",
    tag = "vehicles",
    responses(
        (status = 200, description = "Vehicles retrieved successfully", body = ApiResponse<Vec<VehicleResponse>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_vehicles(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<VehicleResponse>>>, ApiError> {
    let vehicles = Vehicle::find().all(&state.db).await?;
    debug!("Retrieved {} vehicles from database", vehicles.len());

    Ok(Json(ApiResponse {
        data: vehicles.into_iter().map(VehicleResponse::from).collect(),
        message: "Vehicles retrieved successfully".to_string(),
        success: true,
    }))
}

/// Get a specific vehicle by ID
#[utoipa::path(
    get,
    path = "/api/v1/vehicles/{vehicle_id}",
    tag = "vehicles",
    params(
        ("vehicle_id" = i32, Path, description = "Vehicle ID"),
    ),
    responses(
        (status = 200, description = "Vehicle retrieved successfully", body = ApiResponse<VehicleResponse>),
        (status = 404, description = "Vehicle not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_vehicle(
    Path(vehicle_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<VehicleResponse>>, ApiError> {
    let vehicle = Vehicle::find_by_id(vehicle_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| {
            warn!("Vehicle with ID {} not found", vehicle_id);
            ApiError::NotFound(format!("Vehicle {} not found", vehicle_id))
        })?;

    Ok(Json(ApiResponse {
        data: VehicleResponse::from(vehicle),
        message: "Vehicle retrieved successfully".to_string(),
        success: true,
    }))
}

/// Update a vehicle
#[utoipa::path(
    put,
    path = "/api/v1/vehicles/{vehicle_id}",
    tag = "vehicles",
    params(
        ("vehicle_id" = i32, Path, description = "Vehicle ID"),
    ),
    request_body = UpdateVehicleRequest,
    responses(
        (status = 200, description = "Vehicle updated successfully", body = ApiResponse<VehicleResponse>),
        (status = 404, description = "Vehicle not found", body = ErrorResponse),
        (status = 409, description = "Vehicle name already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_vehicle(
    Path(vehicle_id): Path<i32>,
    State(state): State<AppState>,
    Json(request): Json<UpdateVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, ApiError> {
    let existing = Vehicle::find_by_id(vehicle_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| {
            warn!("Vehicle with ID {} not found for update", vehicle_id);
            ApiError::NotFound(format!("Vehicle {} not found", vehicle_id))
        })?;

    let mut vehicle_active: vehicle::ActiveModel = existing.into();
    let mut renamed_to = None;
    if let Some(name) = request.name {
        renamed_to = Some(name.clone());
        vehicle_active.name = Set(name);
    }
    if let Some(model) = request.model {
        vehicle_active.model = Set(model);
    }
    if let Some(manufacturer) = request.manufacturer {
        vehicle_active.manufacturer = Set(manufacturer);
    }
    if let Some(cost_in_credits) = request.cost_in_credits {
        vehicle_active.cost_in_credits = Set(cost_in_credits);
    }
    if let Some(length) = request.length {
        vehicle_active.length = Set(length);
    }

    let updated = vehicle_active
        .update(&state.db)
        .await
        .map_err(|db_error| classify_unique_name(db_error, renamed_to.as_deref().unwrap_or("")))?;

    info!("Vehicle with ID {} updated successfully", vehicle_id);
    Ok(Json(ApiResponse {
        data: VehicleResponse::from(updated),
        message: "Vehicle updated successfully".to_string(),
        success: true,
    }))
}

/// Delete a vehicle
#[utoipa::path(
    delete,
    path = "/api/v1/vehicles/{vehicle_id}",
    tag = "vehicles",
    params(
        ("vehicle_id" = i32, Path, description = "Vehicle ID"),
    ),
    responses(
        (status = 200, description = "Vehicle deleted successfully", body = ApiResponse<String>),
        (status = 404, description = "Vehicle not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_vehicle(
    Path(vehicle_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<String>>, ApiError> {
    let delete_result = Vehicle::delete_by_id(vehicle_id).exec(&state.db).await?;
    if delete_result.rows_affected == 0 {
        warn!("Vehicle with ID {} not found for deletion", vehicle_id);
        return Err(ApiError::NotFound(format!(
            "Vehicle {} not found",
            vehicle_id
        )));
    }

    info!("Vehicle with ID {} deleted successfully", vehicle_id);
    Ok(Json(ApiResponse {
        data: format!("Vehicle {} deleted", vehicle_id),
        message: "Vehicle deleted successfully".to_string(),
        success: true,
    }))
}
