use crate::auth::token::JwtConfig;
use crate::schemas::AppState;
use anyhow::Result;
use sea_orm::Database;

/// Default token lifetime: one hour.
const DEFAULT_ACCESS_TOKEN_TTL_SECS: i64 = 3600;

/// Initialize application state against an explicit database URL
pub async fn initialize_app_state_with_url(database_url: &str) -> Result<AppState> {
    let database_url = normalize_database_url(database_url);

    // Connect to database
    tracing::info!("Connecting to database: {}", database_url);
    let db = Database::connect(&database_url).await?;

    let jwt = jwt_config_from_env();

    Ok(AppState { db, jwt })
}

/// Rewrite the deprecated `postgres://` scheme that some platforms
/// (e.g. Heroku) still hand out to the `postgresql://` form the driver
/// expects. Other URLs pass through untouched.
pub fn normalize_database_url(database_url: &str) -> String {
    match database_url.strip_prefix("postgres://") {
        Some(rest) => format!("postgresql://{}", rest),
        None => database_url.to_string(),
    }
}

/// Build the token signing configuration from the environment
pub fn jwt_config_from_env() -> JwtConfig {
    let secret = match std::env::var("JWT_SECRET") {
        Ok(secret) if !secret.is_empty() => secret,
        _ => {
            tracing::warn!(
                "JWT_SECRET is not set; using an insecure development key. \
                 Set JWT_SECRET in production."
            );
            "holocron-dev-secret".to_string()
        }
    };

    let ttl_secs = std::env::var("ACCESS_TOKEN_TTL_SECS")
        .ok()
        .and_then(|ttl| ttl.parse::<i64>().ok())
        .unwrap_or(DEFAULT_ACCESS_TOKEN_TTL_SECS);

    JwtConfig::new(&secret, ttl_secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postgres_scheme_is_rewritten() {
        assert_eq!(
            normalize_database_url("postgres://user:pw@localhost/holocron"),
            "postgresql://user:pw@localhost/holocron"
        );
    }

    #[test]
    fn test_other_schemes_pass_through() {
        assert_eq!(
            normalize_database_url("postgresql://user:pw@localhost/holocron"),
            "postgresql://user:pw@localhost/holocron"
        );
        assert_eq!(
            normalize_database_url("sqlite://holocron.db"),
            "sqlite://holocron.db"
        );
    }
}
