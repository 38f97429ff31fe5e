use axum::{http::StatusCode, response::{IntoResponse, Response}, Json};
use serde::Serialize;

use crate::domain::Domain;

/// Client-facing errors. Simulated upstream failures are fixtures, not errors,
/// and never pass through here.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("no {domain} fixture registered for id '{id}'")]
    FixtureNotFound { domain: Domain, id: String },
    #[error("no route for {path}")]
    RouteNotFound { path: String },
}

#[derive(Debug, Serialize)]
struct ErrBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = match self {
            ApiError::FixtureNotFound { .. } | ApiError::RouteNotFound { .. } => StatusCode::NOT_FOUND,
        };
        (code, Json(ErrBody { error: self.to_string() })).into_response()
    }
}

/// Raised while assembling the fixture catalog. Any of these stops startup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate {domain} fixture '{id}'")]
    Duplicate { domain: Domain, id: String },
    #[error("{domain} fixture id '{id}' is not a usable path segment")]
    InvalidIdentifier { domain: Domain, id: String },
    #[error("{domain} fixture '{id}' is an omission variant but documents no omitted field")]
    OmissionUndocumented { domain: Domain, id: String },
    #[error("{domain} fixture '{id}' documents {pointer} as omitted but it is present")]
    OmittedFieldPresent { domain: Domain, id: String, pointer: String },
    #[error("{domain} fixture '{id}' omits {pointer} but its parent object is missing")]
    OmissionParentMissing { domain: Domain, id: String, pointer: String },
    #[error("{domain} fixture '{id}' is a failure variant with no outcome issues")]
    EmptyOutcome { domain: Domain, id: String },
    #[error("{domain} fixture '{id}' could not be serialized: {reason}")]
    Unserializable { domain: Domain, id: String, reason: String },
}
