pub mod api;

pub use api::create_api_routes;

use crate::{
    config::{Config, ConfigError},
    docs::ApiDoc,
    handlers::{handle_panic, health_check, not_found, root},
};
use axum::{http::HeaderName, routing::get, Router};
use std::sync::Arc;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Build the complete application from its configuration
pub fn create_app(config: Config) -> Result<Router, ConfigError> {
    let config = Arc::new(config);
    let router = create_router().with_state(config.clone());
    with_middleware(router, &config)
}

/// All routes, without state or middleware.
///
/// Unmatched paths, including those under `/api`, fall through to the
/// envelope 404. So does a known path requested with the wrong method.
pub fn create_router() -> Router<Arc<Config>> {
    Router::new()
        .route("/", get(root).fallback(not_found))
        .route("/health", get(health_check).fallback(not_found))
        // Mount API routes
        .nest("/api", create_api_routes())
        // Mount Swagger UI and ReDoc
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
        .fallback(not_found)
}

/// Wrap a router in panic recovery, tracing, request ids and CORS
pub fn with_middleware(router: Router, config: &Config) -> Result<Router, ConfigError> {
    let request_id_header = HeaderName::from_static(REQUEST_ID_HEADER);

    Ok(router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(build_cors_layer(config)?))
}

/// CORS for the local frontend.
///
/// Wildcards are not allowed together with credentials, so methods and
/// headers are mirrored from the preflight request instead.
pub fn build_cors_layer(config: &Config) -> Result<CorsLayer, ConfigError> {
    let origins = config.cors_origin_list()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}
