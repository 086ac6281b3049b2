use crate::auth::extractor::AuthUser;
use crate::auth::password::{hash_password, verify_password};
use crate::auth::token::issue_access_token;
use crate::error::ApiError;
use crate::handlers::users::UserResponse;
use crate::schemas::{ApiResponse, AppState, ErrorResponse};
use axum::{extract::State, http::StatusCode, response::Json};
use chrono::Utc;
use model::entities::{prelude::User, token_blocklist, user};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set, SqlErr};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};
use utoipa::ToSchema;
use validator::Validate;

/// Request body for registering a new user
#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
pub struct RegisterRequest {
    /// Email address (must be unique)
    #[validate(required(message = "email is required"), email(message = "email is invalid"))]
    pub email: Option<String>,
    /// Display name
    #[validate(
        required(message = "name is required"),
        length(min = 1, message = "name must not be empty")
    )]
    pub name: Option<String>,
    /// Plaintext password; only its Argon2id hash is stored
    #[validate(
        required(message = "password is required"),
        length(min = 1, message = "password must not be empty")
    )]
    pub password: Option<String>,
    /// Account active flag, defaults to true
    pub is_active: Option<bool>,
}

/// Request body for logging in
#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// Email address
    #[validate(required(message = "email is required"))]
    pub email: Option<String>,
    /// Plaintext password
    #[validate(required(message = "password is required"))]
    pub password: Option<String>,
}

/// Response body carrying a freshly issued access token
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    /// Signed access token (JWT)
    pub token: String,
}

/// Response body for the protected greeting endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProtectedResponse {
    /// Greeting for the authenticated user
    pub greeting: String,
    /// Authenticated email
    pub email: String,
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    tag = "auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered successfully", body = ApiResponse<UserResponse>),
        (status = 400, description = "Missing or invalid field", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, request))]
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserResponse>>), ApiError> {
    request.validate()?;

    // validate() guarantees these are present
    let email = request.email.unwrap_or_default();
    let name = request.name.unwrap_or_default();
    let password = request.password.unwrap_or_default();
    let is_active = request.is_active.unwrap_or(true);

    debug!("Registering user with email: {}", email);

    // Friendly pre-check; the unique constraint below backstops the race
    let existing = User::find()
        .filter(user::Column::Email.eq(email.as_str()))
        .one(&state.db)
        .await?;
    if existing.is_some() {
        warn!("Registration rejected, email already taken: {}", email);
        return Err(ApiError::conflict(
            format!("Email '{}' is already registered", email),
            "EMAIL_ALREADY_REGISTERED",
        ));
    }

    let password_hash = hash_password(&password)?;

    let new_user = user::ActiveModel {
        email: Set(email.clone()),
        password_hash: Set(password_hash),
        is_active: Set(is_active),
        name: Set(name),
        ..Default::default()
    };

    let user_model = match new_user.insert(&state.db).await {
        Ok(model) => model,
        Err(db_error) => {
            // Two concurrent registrations can both pass the pre-check;
            // classify the constraint violation as the same conflict
            if let Some(SqlErr::UniqueConstraintViolation(_)) = db_error.sql_err() {
                warn!("Registration lost a duplicate-email race: {}", email);
                return Err(ApiError::conflict(
                    format!("Email '{}' is already registered", email),
                    "EMAIL_ALREADY_REGISTERED",
                ));
            }
            return Err(db_error.into());
        }
    };

    info!(
        "User registered successfully with ID: {}, email: {}",
        user_model.id, user_model.email
    );
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse {
            data: UserResponse::from(user_model),
            message: "User registered successfully".to_string(),
            success: true,
        }),
    ))
}

/// Log in with email and password
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<TokenResponse>),
        (status = 400, description = "Missing field", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, request))]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<ApiResponse<TokenResponse>>, ApiError> {
    request.validate()?;

    let email = request.email.unwrap_or_default();
    let password = request.password.unwrap_or_default();

    debug!("Login attempt for email: {}", email);

    // One message for unknown email and wrong password alike
    let invalid_credentials =
        || ApiError::Unauthorized("invalid email or password".to_string());

    let user_model = User::find()
        .filter(user::Column::Email.eq(email.as_str()))
        .one(&state.db)
        .await?
        .ok_or_else(|| {
            warn!("Login failed, unknown email: {}", email);
            invalid_credentials()
        })?;

    if !verify_password(&password, &user_model.password_hash)? {
        warn!("Login failed, wrong password for email: {}", email);
        return Err(invalid_credentials());
    }

    let token = issue_access_token(&user_model, &state.jwt)?;

    info!("User {} logged in successfully", user_model.id);
    Ok(Json(ApiResponse {
        data: TokenResponse { token },
        message: "Login successful".to_string(),
        success: true,
    }))
}

/// Log out, revoking the presented access token
#[utoipa::path(
    post,
    path = "/api/v1/auth/logout",
    tag = "auth",
    security(("bearer_token" = [])),
    responses(
        (status = 200, description = "Token revoked", body = ApiResponse<String>),
        (status = 401, description = "Invalid or revoked token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn logout(
    auth_user: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<String>>, ApiError> {
    debug!("Revoking token {} for {}", auth_user.jti, auth_user.email);

    // The token stays structurally valid until expiry; recording its jti
    // is what locks it out of every protected route
    token_blocklist::ActiveModel {
        jti: Set(auth_user.jti.clone()),
        email: Set(auth_user.email.clone()),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    info!("Token {} revoked for {}", auth_user.jti, auth_user.email);
    Ok(Json(ApiResponse {
        data: format!("Token for {} revoked", auth_user.email),
        message: "Logged out successfully".to_string(),
        success: true,
    }))
}

/// Protected greeting, demonstrating blocklist-aware authentication
#[utoipa::path(
    get,
    path = "/api/v1/auth/protected",
    tag = "auth",
    security(("bearer_token" = [])),
    responses(
        (status = 200, description = "Caller is authenticated", body = ApiResponse<ProtectedResponse>),
        (status = 401, description = "Invalid, expired or revoked token", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn protected(auth_user: AuthUser) -> Json<ApiResponse<ProtectedResponse>> {
    Json(ApiResponse {
        data: ProtectedResponse {
            greeting: format!("Hello, {}!", auth_user.email),
            email: auth_user.email,
        },
        message: "Access granted".to_string(),
        success: true,
    })
}
