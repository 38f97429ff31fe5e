use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    routing::{get, MethodRouter},
};
use tracing::{debug, info};

use crate::domain::Domain;
use crate::error::ApiError;
use crate::resolver::{resolve, Resolution};
use crate::AppState;

/// `GET` handler for one domain's `/{segment}/:id` route.
pub fn route(domain: Domain) -> MethodRouter<AppState> {
    get(move |State(state): State<AppState>, Path(id): Path<String>| async move { lookup(&state, domain, id) })
}

pub fn lookup(state: &AppState, domain: Domain, id: String) -> Result<Response, ApiError> {
    match resolve(&state.catalog, domain, &id) {
        Resolution::Found(fixture) => {
            debug!(%domain, id = %fixture.id, variant = fixture.kind().name(), "fixture resolved");
            Ok((
                fixture.payload.status(),
                [(header::CONTENT_TYPE, "application/json")],
                fixture.body(),
            )
                .into_response())
        }
        Resolution::NotFound => {
            info!(%domain, %id, "no fixture for identifier");
            Err(ApiError::FixtureNotFound { domain, id })
        }
    }
}
