//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{equipment, health, reports};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "GNB Inventario API",
        version = "0.1.0",
        description = "Fire-safety equipment inventory and PDF reports"
    ),
    paths(
        health::health_check,
        equipment::list_equipos,
        equipment::create_equipo,
        equipment::update_equipo,
        equipment::delete_equipo,
        reports::exportar_pdf,
        reports::exportar_qr,
    ),
    components(
        schemas(
            crate::models::equipment::Equipo,
            crate::models::equipment::EquipoPayload,
            crate::models::equipment::MensajeResponse,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check"),
        (name = "equipos", description = "Equipment inventory"),
        (name = "reportes", description = "PDF exports")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
