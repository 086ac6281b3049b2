use crate::error::ApiError;
use crate::schemas::{ApiResponse, AppState, ErrorResponse};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use model::entities::{planet, prelude::Planet};
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};
use utoipa::ToSchema;

/// Request body for creating a planet
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreatePlanetRequest {
    pub name: String,
    /// Diameter in kilometers
    pub diameter: i32,
    pub gravity: String,
    pub terrain: String,
    /// Orbital period in days, kept as a string per the source dataset
    pub orbital_period: String,
}

/// Request body for updating a planet; only provided fields change
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdatePlanetRequest {
    pub name: Option<String>,
    pub diameter: Option<i32>,
    pub gravity: Option<String>,
    pub terrain: Option<String>,
    pub orbital_period: Option<String>,
}

/// Planet response model
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PlanetResponse {
    pub id: i32,
    pub name: String,
    pub diameter: i32,
    pub gravity: String,
    pub terrain: String,
    pub orbital_period: String,
}

impl From<planet::Model> for PlanetResponse {
    fn from(model: planet::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            diameter: model.diameter,
            gravity: model.gravity,
            terrain: model.terrain,
            orbital_period: model.orbital_period,
        }
    }
}

/// Create a new planet
#[utoipa::path(
    post,
    path = "/api/v1/planets",
    tag = "planets",
    request_body = CreatePlanetRequest,
    responses(
        (status = 201, description = "Planet created successfully", body = ApiResponse<PlanetResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_planet(
    State(state): State<AppState>,
    Json(request): Json<CreatePlanetRequest>,
) -> Result<(StatusCode, Json<ApiResponse<PlanetResponse>>), ApiError> {
    debug!("Creating planet with name: {}", request.name);

    let planet = planet::ActiveModel {
        name: Set(request.name),
        diameter: Set(request.diameter),
        gravity: Set(request.gravity),
        terrain: Set(request.terrain),
        orbital_period: Set(request.orbital_period),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    info!("Planet created successfully with ID: {}", planet.id);
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse {
            data: PlanetResponse::from(planet),
            message: "Planet created successfully".to_string(),
            success: true,
        }),
    ))
}

/// Get all planets
#[utoipa::path(
    get,
    path = "/api/v1/planets",
    tag = "planets",
    responses(
        (status = 200, description = "Planets retrieved successfully", body = ApiResponse<Vec<PlanetResponse>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_planets(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<PlanetResponse>>>, ApiError> {
    let planets = Planet::find().all(&state.db).await?;
    debug!("Retrieved {} planets from database", planets.len());

    Ok(Json(ApiResponse {
        data: planets.into_iter().map(PlanetResponse::from).collect(),
        message: "Planets retrieved successfully".to_string(),
        success: true,
    }))
}

/// Get a specific planet by ID
#[utoipa::path(
    get,
    path = "/api/v1/planets/{planet_id}",
    tag = "planets",
    params(
        ("planet_id" = i32, Path, description = "Planet ID"),
    ),
    responses(
        (status = 200, description = "Planet retrieved successfully", body = ApiResponse<PlanetResponse>),
        (status = 404, description = "Planet not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_planet(
    Path(planet_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<PlanetResponse>>, ApiError> {
    let planet = Planet::find_by_id(planet_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| {
            warn!("Planet with ID {} not found", planet_id);
            ApiError::NotFound(format!("Planet {} not found", planet_id))
        })?;

    Ok(Json(ApiResponse {
        data: PlanetResponse::from(planet),
        message: "Planet retrieved successfully".to_string(),
        success: true,
    }))
}

/// Update a planet
#[utoipa::path(
    put,
    path = "/api/v1/planets/{planet_id}",
    tag = "planets",
    params(
        ("planet_id" = i32, Path, description = "Planet ID"),
    ),
    request_body = UpdatePlanetRequest,
    responses(
        (status = 200, description = "Planet updated successfully", body = ApiResponse<PlanetResponse>),
        (status = 404, description = "Planet not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_planet(
    Path(planet_id): Path<i32>,
    State(state): State<AppState>,
    Json(request): Json<UpdatePlanetRequest>,
) -> Result<Json<ApiResponse<PlanetResponse>>, ApiError> {
    let existing = Planet::find_by_id(planet_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| {
            warn!("Planet with ID {} not found for update", planet_id);
            ApiError::NotFound(format!("Planet {} not found", planet_id))
        })?;

    let mut planet_active: planet::ActiveModel = existing.into();
    if let Some(name) = request.name {
        planet_active.name = Set(name);
    }
    if let Some(diameter) = request.diameter {
        planet_active.diameter = Set(diameter);
    }
    if let Some(gravity) = request.gravity {
        planet_active.gravity = Set(gravity);
    }
    if let Some(terrain) = request.terrain {
        planet_active.terrain = Set(terrain);
    }
    if let Some(orbital_period) = request.orbital_period {
        planet_active.orbital_period = Set(orbital_period);
    }

    let updated = planet_active.update(&state.db).await?;

    info!("Planet with ID {} updated successfully", planet_id);
    Ok(Json(ApiResponse {
        data: PlanetResponse::from(updated),
        message: "Planet updated successfully".to_string(),
        success: true,
    }))
}

/// Delete a planet
#[utoipa::path(
    delete,
    path = "/api/v1/planets/{planet_id}",
    tag = "planets",
    params(
        ("planet_id" = i32, Path, description = "Planet ID"),
    ),
    responses(
        (status = 200, description = "Planet deleted successfully", body = ApiResponse<String>),
        (status = 404, description = "Planet not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_planet(
    Path(planet_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<String>>, ApiError> {
    let delete_result = Planet::delete_by_id(planet_id).exec(&state.db).await?;
    if delete_result.rows_affected == 0 {
        warn!("Planet with ID {} not found for deletion", planet_id);
        return Err(ApiError::NotFound(format!(
            "Planet {} not found",
            planet_id
        )));
    }

    info!("Planet with ID {} deleted successfully", planet_id);
    Ok(Json(ApiResponse {
        data: format!("Planet {} deleted", planet_id),
        message: "Planet deleted successfully".to_string(),
        success: true,
    }))
}
