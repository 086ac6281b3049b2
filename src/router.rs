use crate::handlers::{
    auth::{login, logout, protected, register},
    favorites::{add_favorite, list_favorites, remove_favorite},
    health::health_check,
    people::{create_person, delete_person, get_people, get_person, update_person},
    planets::{create_planet, delete_planet, get_planet, get_planets, update_planet},
    users::{delete_user, get_user, get_users, update_user},
    vehicles::{create_vehicle, delete_vehicle, get_vehicle, get_vehicles, update_vehicle},
};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let router = Router::new()
        // Health check
        .route("/health", get(health_check))
        // Auth routes
        .route("/api/v1/auth/register", post(register))
        .route("/api/v1/auth/login", post(login))
        .route("/api/v1/auth/logout", post(logout))
        .route("/api/v1/auth/protected", get(protected))
        // User CRUD routes
        .route("/api/v1/users", get(get_users))
        .route("/api/v1/users/:user_id", get(get_user))
        .route("/api/v1/users/:user_id", put(update_user))
        .route("/api/v1/users/:user_id", delete(delete_user))
        // People catalog routes
        .route("/api/v1/people", post(create_person))
        .route("/api/v1/people", get(get_people))
        .route("/api/v1/people/:person_id", get(get_person))
        .route("/api/v1/people/:person_id", put(update_person))
        .route("/api/v1/people/:person_id", delete(delete_person))
        // Planet catalog routes
        .route("/api/v1/planets", post(create_planet))
        .route("/api/v1/planets", get(get_planets))
        .route("/api/v1/planets/:planet_id", get(get_planet))
        .route("/api/v1/planets/:planet_id", put(update_planet))
        .route("/api/v1/planets/:planet_id", delete(delete_planet))
        // Vehicle catalog routes
        .route("/api/v1/vehicles", post(create_vehicle))
        .route("/api/v1/vehicles", get(get_vehicles))
        .route("/api/v1/vehicles/:vehicle_id", get(get_vehicle))
        .route("/api/v1/vehicles/:vehicle_id", put(update_vehicle))
        .route("/api/v1/vehicles/:vehicle_id", delete(delete_vehicle))
        // Favorites routes
        .route("/api/v1/users/:user_id/favorites", get(list_favorites))
        .route("/api/v1/users/:user_id/favorites/:kind", post(add_favorite))
        .route(
            "/api/v1/users/:user_id/favorites/:kind/:entity_id",
            delete(remove_favorite),
        )
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    // Prometheus metrics are disabled under test to avoid global recorder
    // conflicts between parallel test binaries
    #[cfg(not(test))]
    let router = {
        let (prometheus_layer, metric_handle) =
            axum_prometheus::PrometheusMetricLayer::pair();
        router
            .route("/metrics", get(|| async move { metric_handle.render() }))
            .layer(prometheus_layer)
    };

    router
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
