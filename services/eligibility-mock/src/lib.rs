use std::sync::Arc;

use axum::{extract::State, middleware as axum_middleware, routing::get, Json, Router};

pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod middleware;
pub mod model;
pub mod openapi;
pub mod resolver;
pub mod routes;
pub mod variant;

use catalog::FixtureCatalog;
use config::AllowedOrigins;
use domain::Domain;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<FixtureCatalog>,
}

impl AppState {
    pub fn new(catalog: FixtureCatalog) -> Self {
        Self { catalog: Arc::new(catalog) }
    }
}

/// Builds the HTTP surface. Lookup routes come from `Domain::ALL`, so the route
/// table and the catalog cannot drift apart.
pub fn router(state: AppState, origins: &AllowedOrigins, enable_openapi: bool) -> Router {
    let mut app = Router::new()
        .route("/", get(routes::index::get))
        .route("/health", get(routes::health::get));

    for domain in Domain::ALL {
        app = app.route(&domain.route_pattern(), routes::search::route(domain));
    }

    if enable_openapi {
        app = app.route(
            "/openapi.json",
            get(|State(state): State<AppState>| async move {
                Json(openapi::spec::openapi_spec(&state.catalog))
            }),
        );
    }

    app.fallback(routes::fallback::not_found)
        .layer(origins.cors_layer())
        .layer(axum_middleware::from_fn(middleware::tracing::trace))
        .layer(axum_middleware::from_fn(middleware::request_id::request_id))
        .with_state(state)
}
