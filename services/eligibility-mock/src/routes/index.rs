use axum::{extract::State, response::{IntoResponse, Response}, Json};
use serde::Serialize;

use crate::domain::Domain;
use crate::variant::VariantKind;
use crate::AppState;

#[derive(Debug, Serialize)]
struct Endpoint<'a> {
    path: String,
    methods: [&'static str; 1],
    domain: Domain,
    identifier: &'a str,
    variant: VariantKind,
    description: &'a str,
}

#[derive(Debug, Serialize)]
struct Index<'a> {
    message: &'static str,
    version: &'static str,
    endpoints: Vec<Endpoint<'a>>,
}

/// Lists every catalogued lookup route in registration order.
pub async fn get(State(state): State<AppState>) -> Response {
    let endpoints = state
        .catalog
        .fixtures()
        .map(|f| Endpoint {
            path: f.path(),
            methods: ["GET"],
            domain: f.domain,
            identifier: &f.id,
            variant: f.kind(),
            description: &f.description,
        })
        .collect();
    Json(Index {
        message: "Healthcare Mock API Service",
        version: env!("CARGO_PKG_VERSION"),
        endpoints,
    })
    .into_response()
}
