use crate::auth::token::JwtConfig;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi, ToSchema};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection
    pub db: DatabaseConnection,
    /// Access-token signing configuration
    pub jwt: JwtConfig,
}

/// API response wrapper
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success status
    pub success: bool,
}

/// Error response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::auth::register,
        crate::handlers::auth::login,
        crate::handlers::auth::logout,
        crate::handlers::auth::protected,
        crate::handlers::users::get_users,
        crate::handlers::users::get_user,
        crate::handlers::users::update_user,
        crate::handlers::users::delete_user,
        crate::handlers::people::create_person,
        crate::handlers::people::get_people,
        crate::handlers::people::get_person,
        crate::handlers::people::update_person,
        crate::handlers::people::delete_person,
        crate::handlers::planets::create_planet,
        crate::handlers::planets::get_planets,
        crate::handlers::planets::get_planet,
        crate::handlers::planets::update_planet,
        crate::handlers::planets::delete_planet,
        crate::handlers::vehicles::create_vehicle,
        crate::handlers::vehicles::get_vehicles,
        crate::handlers::vehicles::get_vehicle,
        crate::handlers::vehicles::update_vehicle,
        crate::handlers::vehicles::delete_vehicle,
        crate::handlers::favorites::add_favorite,
        crate::handlers::favorites::list_favorites,
        crate::handlers::favorites::remove_favorite,
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse,
            crate::handlers::auth::RegisterRequest,
            crate::handlers::auth::LoginRequest,
            crate::handlers::auth::TokenResponse,
            crate::handlers::auth::ProtectedResponse,
            crate::handlers::users::UserResponse,
            crate::handlers::users::UpdateUserRequest,
            crate::handlers::people::CreatePersonRequest,
            crate::handlers::people::UpdatePersonRequest,
            crate::handlers::people::PersonResponse,
            crate::handlers::planets::CreatePlanetRequest,
            crate::handlers::planets::UpdatePlanetRequest,
            crate::handlers::planets::PlanetResponse,
            crate::handlers::vehicles::CreateVehicleRequest,
            crate::handlers::vehicles::UpdateVehicleRequest,
            crate::handlers::vehicles::VehicleResponse,
            crate::handlers::favorites::FavoriteKind,
            crate::handlers::favorites::AddFavoriteRequest,
            crate::handlers::favorites::FavoriteResponse,
            ApiResponse<crate::handlers::users::UserResponse>,
            ApiResponse<crate::handlers::auth::TokenResponse>,
            ApiResponse<crate::handlers::favorites::FavoriteResponse>,
            ApiResponse<String>,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Registration, login and token lifecycle endpoints"),
        (name = "users", description = "User management endpoints"),
        (name = "people", description = "People catalog endpoints"),
        (name = "planets", description = "Planet catalog endpoints"),
        (name = "vehicles", description = "Vehicle catalog endpoints"),
        (name = "favorites", description = "Per-user favorites endpoints"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Holocron API",
        description = "Star Wars catalog API - user accounts, JWT sessions and per-user favorites",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;

/// Registers the bearer-token scheme referenced by the protected paths
pub struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_token",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}
