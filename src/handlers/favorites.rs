use crate::error::ApiError;
use crate::schemas::{ApiResponse, AppState, ErrorResponse};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use model::entities::{
    favorite_people, favorite_planet, favorite_vehicle,
    prelude::{
        FavoritePeople, FavoritePlanet, FavoriteVehicle, People, Planet, User, Vehicle,
    },
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};
use utoipa::ToSchema;

/// The three kinds of catalog entity a user can favorite.
/// Appears as the `{kind}` path segment, lowercased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteKind {
    People,
    Planets,
    Vehicles,
}

impl FavoriteKind {
    fn singular(&self) -> &'static str {
        match self {
            FavoriteKind::People => "person",
            FavoriteKind::Planets => "planet",
            FavoriteKind::Vehicles => "vehicle",
        }
    }
}

/// Request body for adding a favorite
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct AddFavoriteRequest {
    /// ID of the person/planet/vehicle being favorited
    pub entity_id: i32,
}

/// A favorite join row, uniform across the three kinds
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FavoriteResponse {
    pub id: i32,
    pub user_id: i32,
    pub kind: FavoriteKind,
    pub entity_id: i32,
}

async fn ensure_user_exists(state: &AppState, user_id: i32) -> Result<(), ApiError> {
    let user = User::find_by_id(user_id).one(&state.db).await?;
    if user.is_none() {
        warn!("User with ID {} not found", user_id);
        return Err(ApiError::NotFound(format!("User {} not found", user_id)));
    }
    Ok(())
}

fn duplicate_favorite(kind: FavoriteKind, user_id: i32, entity_id: i32) -> ApiError {
    ApiError::conflict(
        format!(
            "User {} already favorited {} {}",
            user_id,
            kind.singular(),
            entity_id
        ),
        "FAVORITE_ALREADY_EXISTS",
    )
}

fn entity_not_found(kind: FavoriteKind, entity_id: i32) -> ApiError {
    ApiError::NotFound(format!(
        "{} {} not found",
        kind.singular(),
        entity_id
    ))
}

/// Add a favorite for a user
#[utoipa::path(
    post,
    path = "/api/v1/users/{user_id}/favorites/{kind}",
    tag = "favorites",
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("kind" = FavoriteKind, Path, description = "Favorite kind: people, planets or vehicles"),
    ),
    request_body = AddFavoriteRequest,
    responses(
        (status = 201, description = "Favorite added successfully", body = ApiResponse<FavoriteResponse>),
        (status = 404, description = "User or entity not found", body = ErrorResponse),
        (status = 409, description = "Favorite already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn add_favorite(
    Path((user_id, kind)): Path<(i32, FavoriteKind)>,
    State(state): State<AppState>,
    Json(request): Json<AddFavoriteRequest>,
) -> Result<(StatusCode, Json<ApiResponse<FavoriteResponse>>), ApiError> {
    let entity_id = request.entity_id;
    debug!(
        "Adding {} favorite for user {}: entity {}",
        kind.singular(),
        user_id,
        entity_id
    );

    ensure_user_exists(&state, user_id).await?;

    // Duplicate pairs are kept out by this explicit check, not by a
    // database constraint
    let favorite = match kind {
        FavoriteKind::People => {
            if People::find_by_id(entity_id).one(&state.db).await?.is_none() {
                return Err(entity_not_found(kind, entity_id));
            }
            let existing = FavoritePeople::find()
                .filter(favorite_people::Column::UserId.eq(user_id))
                .filter(favorite_people::Column::PeopleId.eq(entity_id))
                .one(&state.db)
                .await?;
            if existing.is_some() {
                return Err(duplicate_favorite(kind, user_id, entity_id));
            }
            let row = favorite_people::ActiveModel {
                user_id: Set(user_id),
                people_id: Set(entity_id),
                ..Default::default()
            }
            .insert(&state.db)
            .await?;
            FavoriteResponse {
                id: row.id,
                user_id: row.user_id,
                kind,
                entity_id: row.people_id,
            }
        }
        FavoriteKind::Planets => {
            if Planet::find_by_id(entity_id).one(&state.db).await?.is_none() {
                return Err(entity_not_found(kind, entity_id));
            }
            let existing = FavoritePlanet::find()
                .filter(favorite_planet::Column::UserId.eq(user_id))
                .filter(favorite_planet::Column::PlanetId.eq(entity_id))
                .one(&state.db)
                .await?;
            if existing.is_some() {
                return Err(duplicate_favorite(kind, user_id, entity_id));
            }
            let row = favorite_planet::ActiveModel {
                user_id: Set(user_id),
                planet_id: Set(entity_id),
                ..Default::default()
            }
            .insert(&state.db)
            .await?;
            FavoriteResponse {
                id: row.id,
                user_id: row.user_id,
                kind,
                entity_id: row.planet_id,
            }
        }
        FavoriteKind::Vehicles => {
            if Vehicle::find_by_id(entity_id).one(&state.db).await?.is_none() {
                return Err(entity_not_found(kind, entity_id));
            }
            let existing = FavoriteVehicle::find()
                .filter(favorite_vehicle::Column::UserId.eq(user_id))
                .filter(favorite_vehicle::Column::VehicleId.eq(entity_id))
                .one(&state.db)
                .await?;
            if existing.is_some() {
                return Err(duplicate_favorite(kind, user_id, entity_id));
            }
            let row = favorite_vehicle::ActiveModel {
                user_id: Set(user_id),
                vehicle_id: Set(entity_id),
                ..Default::default()
            }
            .insert(&state.db)
            .await?;
            FavoriteResponse {
                id: row.id,
                user_id: row.user_id,
                kind,
                entity_id: row.vehicle_id,
            }
        }
    };

    info!(
        "User {} favorited {} {} (favorite ID {})",
        user_id,
        kind.singular(),
        entity_id,
        favorite.id
    );
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse {
            data: favorite,
            message: "Favorite added successfully".to_string(),
            success: true,
        }),
    ))
}

/// List all favorites of a user, across all three kinds
#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}/favorites",
    tag = "favorites",
    params(
        ("user_id" = i32, Path, description = "User ID"),
    ),
    responses(
        (status = 200, description = "Favorites retrieved successfully", body = ApiResponse<Vec<FavoriteResponse>>),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_favorites(
    Path(user_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<FavoriteResponse>>>, ApiError> {
    ensure_user_exists(&state, user_id).await?;

    let mut favorites = Vec::new();

    for row in FavoritePeople::find()
        .filter(favorite_people::Column::UserId.eq(user_id))
        .all(&state.db)
        .await?
    {
        favorites.push(FavoriteResponse {
            id: row.id,
            user_id: row.user_id,
            kind: FavoriteKind::People,
            entity_id: row.people_id,
        });
    }

    for row in FavoritePlanet::find()
        .filter(favorite_planet::Column::UserId.eq(user_id))
        .all(&state.db)
        .await?
    {
        favorites.push(FavoriteResponse {
            id: row.id,
            user_id: row.user_id,
            kind: FavoriteKind::Planets,
            entity_id: row.planet_id,
        });
    }

    for row in FavoriteVehicle::find()
        .filter(favorite_vehicle::Column::UserId.eq(user_id))
        .all(&state.db)
        .await?
    {
        favorites.push(FavoriteResponse {
            id: row.id,
            user_id: row.user_id,
            kind: FavoriteKind::Vehicles,
            entity_id: row.vehicle_id,
        });
    }

    debug!("User {} has {} favorites", user_id, favorites.len());
    Ok(Json(ApiResponse {
        data: favorites,
        message: "Favorites retrieved successfully".to_string(),
        success: true,
    }))
}

/// Remove a favorite
#[utoipa::path(
    delete,
    path = "/api/v1/users/{user_id}/favorites/{kind}/{entity_id}",
    tag = "favorites",
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("kind" = FavoriteKind, Path, description = "Favorite kind: people, planets or vehicles"),
        ("entity_id" = i32, Path, description = "Favorited entity ID"),
    ),
    responses(
        (status = 200, description = "Favorite removed successfully", body = ApiResponse<String>),
        (status = 404, description = "Favorite not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn remove_favorite(
    Path((user_id, kind, entity_id)): Path<(i32, FavoriteKind, i32)>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<String>>, ApiError> {
    debug!(
        "Removing {} favorite for user {}: entity {}",
        kind.singular(),
        user_id,
        entity_id
    );

    let rows_affected = match kind {
        FavoriteKind::People => {
            FavoritePeople::delete_many()
                .filter(favorite_people::Column::UserId.eq(user_id))
                .filter(favorite_people::Column::PeopleId.eq(entity_id))
                .exec(&state.db)
                .await?
                .rows_affected
        }
        FavoriteKind::Planets => {
            FavoritePlanet::delete_many()
                .filter(favorite_planet::Column::UserId.eq(user_id))
                .filter(favorite_planet::Column::PlanetId.eq(entity_id))
                .exec(&state.db)
                .await?
                .rows_affected
        }
        FavoriteKind::Vehicles => {
            FavoriteVehicle::delete_many()
                .filter(favorite_vehicle::Column::UserId.eq(user_id))
                .filter(favorite_vehicle::Column::VehicleId.eq(entity_id))
                .exec(&state.db)
                .await?
                .rows_affected
        }
    };

    if rows_affected == 0 {
        warn!(
            "No {} favorite for user {} and entity {}",
            kind.singular(),
            user_id,
            entity_id
        );
        return Err(ApiError::NotFound(format!(
            "User {} has no favorite {} {}",
            user_id,
            kind.singular(),
            entity_id
        )));
    }

    info!(
        "User {} unfavorited {} {}",
        user_id,
        kind.singular(),
        entity_id
    );
    Ok(Json(ApiResponse {
        data: format!("Favorite {} {} removed", kind.singular(), entity_id),
        message: "Favorite removed successfully".to_string(),
        success: true,
    }))
}
