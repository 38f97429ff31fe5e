use axum::http::Uri;

use crate::domain::Domain;
use crate::error::ApiError;

/// Anything the route table does not match. A known lookup prefix with a
/// malformed tail (`/searchMemberById/`, `/searchAccums/a/b`) is still reported
/// as a missing fixture for that domain.
pub async fn not_found(uri: Uri) -> ApiError {
    let path = uri.path();
    let mut parts = path.trim_start_matches('/').splitn(2, '/');
    match (parts.next().and_then(Domain::from_segment), parts.next()) {
        (Some(domain), Some(id)) => ApiError::FixtureNotFound { domain, id: id.to_string() },
        _ => ApiError::RouteNotFound { path: path.to_string() },
    }
}
