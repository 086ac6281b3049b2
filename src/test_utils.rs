#[cfg(test)]
pub mod test_utils {
    use crate::auth::token::JwtConfig;
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::Router;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ActiveModelTrait, ConnectionTrait, Database, DatabaseConnection, Set};
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    /// Create an in-memory SQLite database for testing
    pub async fn setup_test_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to connect to in-memory database");

        // SQLite needs this for the cascade rules on the favorite tables
        db.execute_unprepared("PRAGMA foreign_keys = ON;")
            .await
            .expect("Failed to enable foreign keys");

        // Run migrations
        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        db
    }

    /// Create AppState for testing, with one catalog row of each kind
    /// already present for the favorites tests to reference
    pub async fn setup_test_app_state() -> AppState {
        let db = setup_test_db().await;

        model::entities::people::ActiveModel {
            name: Set("Luke Skywalker".to_string()),
            height: Set("172".to_string()),
            mass: Set("77".to_string()),
            hair_color: Set("blond".to_string()),
            ..Default::default()
        }
        .insert(&db)
        .await
        .expect("Failed to seed test person");

        model::entities::planet::ActiveModel {
            name: Set("Tatooine".to_string()),
            diameter: Set(10465),
            gravity: Set("1 standard".to_string()),
            terrain: Set("desert".to_string()),
            orbital_period: Set("304".to_string()),
            ..Default::default()
        }
        .insert(&db)
        .await
        .expect("Failed to seed test planet");

        model::entities::vehicle::ActiveModel {
            name: Set("X-34 landspeeder".to_string()),
            model: Set("X-34".to_string()),
            manufacturer: Set("SoroSuub Corporation".to_string()),
            cost_in_credits: Set(10550),
            length: Set(3),
            ..Default::default()
        }
        .insert(&db)
        .await
        .expect("Failed to seed test vehicle");

        let jwt = JwtConfig::new("test-secret", 3600);

        AppState { db, jwt }
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Create axum app for testing
    pub async fn setup_test_app() -> Router {
        let _ = init_test_tracing();

        let state = setup_test_app_state().await;
        create_router(state)
    }
}
