use crate::auth::token::decode_access_token;
use crate::error::ApiError;
use crate::schemas::AppState;
use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use model::entities::{prelude::TokenBlocklist, token_blocklist};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use tracing::{debug, warn};

/// The authenticated caller of a protected route.
///
/// Extraction reads the `Authorization: Bearer <token>` header, validates
/// the token's signature and expiry, then rejects it if its `jti` has been
/// recorded in the blocklist. Every failure is a 401.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: i32,
    pub email: String,
    pub jti: String,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("missing authorization header".to_string()))?;

        let token = header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                ApiError::Unauthorized("authorization header is not a bearer token".to_string())
            })?;

        let claims = decode_access_token(token, &state.jwt)?;

        // A structurally valid token may still have been revoked by logout
        let revoked = TokenBlocklist::find()
            .filter(token_blocklist::Column::Jti.eq(claims.jti.as_str()))
            .one(&state.db)
            .await?;

        if revoked.is_some() {
            warn!("Rejected revoked token with jti {}", claims.jti);
            return Err(ApiError::Unauthorized("token has been revoked".to_string()));
        }

        debug!("Authenticated user {} ({})", claims.sub, claims.email);
        Ok(AuthUser {
            user_id: claims.sub,
            email: claims.email,
            jti: claims.jti,
        })
    }
}
