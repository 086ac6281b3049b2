use crate::error::ApiError;
use crate::schemas::{ApiResponse, AppState, ErrorResponse};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use model::entities::{people, prelude::People};
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};
use utoipa::ToSchema;

/// Request body for creating a person.
/// Height and mass stay strings; the source dataset records values like
/// "unknown" alongside numbers.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreatePersonRequest {
    pub name: String,
    pub height: String,
    pub mass: String,
    pub hair_color: String,
}

/// Request body for updating a person; only provided fields change
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdatePersonRequest {
    pub name: Option<String>,
    pub height: Option<String>,
    pub mass: Option<String>,
    pub hair_color: Option<String>,
}

/// Person response model
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PersonResponse {
    pub id: i32,
    pub name: String,
    pub height: String,
    pub mass: String,
    pub hair_color: String,
}

impl From<people::Model> for PersonResponse {
    fn from(model: people::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            height: model.height,
            mass: model.mass,
            hair_color: model.hair_color,
        }
    }
}

/// Create a new person
#[utoipa::path(
    post,
    path = "/api/v1/people",
    tag = "people",
    request_body = CreatePersonRequest,
    responses(
        (status = 201, description = "Person created successfully", body = ApiResponse<PersonResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_person(
    State(state): State<AppState>,
    Json(request): Json<CreatePersonRequest>,
) -> Result<(StatusCode, Json<ApiResponse<PersonResponse>>), ApiError> {
    debug!("Creating person with name: {}", request.name);

    let person = people::ActiveModel {
        name: Set(request.name),
        height: Set(request.height),
        mass: Set(request.mass),
        hair_color: Set(request.hair_color),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    info!("Person created successfully with ID: {}", person.id);
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse {
            data: PersonResponse::from(person),
            message: "Person created successfully".to_string(),
            success: true,
        }),
    ))
}

/// Get all people
#[utoipa::path(
    get,
    path = "/api/v1/people",
    tag = "people",
    responses(
        (status = 200, description = "People retrieved successfully", body = ApiResponse<Vec<PersonResponse>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_people(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<PersonResponse>>>, ApiError> {
    let people_rows = People::find().all(&state.db).await?;
    debug!("Retrieved {} people from database", people_rows.len());

    Ok(Json(ApiResponse {
        data: people_rows.into_iter().map(PersonResponse::from).collect(),
        message: "People retrieved successfully".to_string(),
        success: true,
    }))
}

/// Get a specific person by ID
#[utoipa::path(
    get,
    path = "/api/v1/people/{person_id}",
    tag = "people",
    params(
        ("person_id" = i32, Path, description = "Person ID"),
    ),
    responses(
        (status = 200, description = "Person retrieved successfully", body = ApiResponse<PersonResponse>),
        (status = 404, description = "Person not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_person(
    Path(person_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<PersonResponse>>, ApiError> {
    let person = People::find_by_id(person_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| {
            warn!("Person with ID {} not found", person_id);
            ApiError::NotFound(format!("Person {} not found", person_id))
        })?;

    Ok(Json(ApiResponse {
        data: PersonResponse::from(person),
        message: "Person retrieved successfully".to_string(),
        success: true,
    }))
}

/// Update a person
#[utoipa::path(
    put,
    path = "/api/v1/people/{person_id}",
    tag = "people",
    params(
        ("person_id" = i32, Path, description = "Person ID"),
    ),
    request_body = UpdatePersonRequest,
    responses(
        (status = 200, description = "Person updated successfully", body = ApiResponse<PersonResponse>),
        (status = 404, description = "Person not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_person(
    Path(person_id): Path<i32>,
    State(state): State<AppState>,
    Json(request): Json<UpdatePersonRequest>,
) -> Result<Json<ApiResponse<PersonResponse>>, ApiError> {
    let existing = People::find_by_id(person_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| {
            warn!("Person with ID {} not found for update", person_id);
            ApiError::NotFound(format!("Person {} not found", person_id))
        })?;

    let mut person_active: people::ActiveModel = existing.into();
    if let Some(name) = request.name {
        person_active.name = Set(name);
    }
    if let Some(height) = request.height {
        person_active.height = Set(height);
    }
    if let Some(mass) = request.mass {
        person_active.mass = Set(mass);
    }
    if let Some(hair_color) = request.hair_color {
        person_active.hair_color = Set(hair_color);
    }

    let updated = person_active.update(&state.db).await?;

    info!("Person with ID {} updated successfully", person_id);
    Ok(Json(ApiResponse {
        data: PersonResponse::from(updated),
        message: "Person updated successfully".to_string(),
        success: true,
    }))
}

/// Delete a person
#[utoipa::path(
    delete,
    path = "/api/v1/people/{person_id}",
    tag = "people",
    params(
        ("person_id" = i32, Path, description = "Person ID"),
    ),
    responses(
        (status = 200, description = "Person deleted successfully", body = ApiResponse<String>),
        (status = 404, description = "Person not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_person(
    Path(person_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<String>>, ApiError> {
    let delete_result = People::delete_by_id(person_id).exec(&state.db).await?;
    if delete_result.rows_affected == 0 {
        warn!("Person with ID {} not found for deletion", person_id);
        return Err(ApiError::NotFound(format!(
            "Person {} not found",
            person_id
        )));
    }

    info!("Person with ID {} deleted successfully", person_id);
    Ok(Json(ApiResponse {
        data: format!("Person {} deleted", person_id),
        message: "Person deleted successfully".to_string(),
        success: true,
    }))
}
