//! HTTP handlers and router

pub mod equipment;
pub mod health;
pub mod openapi;
pub mod pages;
pub mod reports;

use axum::{
    routing::{get, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = Router::new()
        // Pages
        .route("/", get(pages::dashboard))
        .route("/setup-inicial", get(pages::setup_inicial))
        // Equipment
        .route(
            "/api/equipos",
            get(equipment::list_equipos).post(equipment::create_equipo),
        )
        .route(
            "/api/equipos/:id",
            put(equipment::update_equipo).delete(equipment::delete_equipo),
        )
        // Reports
        .route("/exportar-pdf", get(reports::exportar_pdf))
        .route("/exportar-qr", get(reports::exportar_qr))
        // Health check
        .route("/health", get(health::health_check))
        .with_state(state);

    Router::new()
        .merge(routes)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
