// File: crates/services/gymbook_backend/src/lib.rs
pub mod app_state;

use axum::{routing::get, Json, Router};
use http::{header, HeaderValue, Method};
use serde_json::{json, Value};
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub use app_state::AppState;

async fn welcome_handler() -> Json<Value> {
    Json(json!({
        "message": "Welcome to the gym reservation API",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// CORS policy from `server.allowed_origins`. An empty list or `"*"` allows
/// any origin.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE]);

    if allowed_origins.is_empty() || allowed_origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();
    layer.allow_origin(origins)
}

/// Build the complete application router.
pub fn build_app(state: &AppState) -> Router {
    let config = &state.config;

    #[allow(unused_mut)] // for the features it needs to be mutable
    let mut api_router = Router::new();
    #[cfg(feature = "users")]
    {
        api_router = api_router.merge(gymbook_users::routes::routes(
            config.clone(),
            state.store.clone(),
        ));
    }
    #[cfg(feature = "reservations")]
    {
        api_router = api_router.merge(gymbook_reservations::routes::routes(
            config.clone(),
            state.store.clone(),
        ));
    }

    let mut app = Router::new()
        .route("/", get(welcome_handler))
        .merge(gymbook_common::routes())
        .nest("/api", api_router);

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Gymbook API",
                version = "0.1.0",
                description = "Gym reservation service API docs"
            ),
            paths(gymbook_common::handlers::health_handler),
            components(schemas(gymbook_common::handlers::HealthResponse)),
            tags((name = "Health", description = "Service status")),
        )]
        struct ApiDoc;

        #[allow(unused_mut)] // for the features it needs to be mutable
        let mut openapi_doc = ApiDoc::openapi();
        #[cfg(feature = "users")]
        openapi_doc.merge(gymbook_users::doc::UsersApiDoc::openapi());
        #[cfg(feature = "reservations")]
        openapi_doc.merge(gymbook_reservations::doc::ReservationsApiDoc::openapi());
        info!("Adding Swagger UI at /api/docs");

        let swagger_ui =
            SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc);
        app = app.merge(swagger_ui);
    }

    // Serve the built web client for every unmatched path
    if let Some(dir) = config.server.static_dir.as_deref() {
        let index = Path::new(dir).join("index.html");
        info!("Serving static files from {}", dir);
        app = app.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)));
    }

    app.layer(cors_layer(&config.server.allowed_origins))
        .layer(TraceLayer::new_for_http())
}
