use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use uuid::Uuid;

pub const REQUEST_ID: &str = "x-request-id";

/// Echoes the caller's `x-request-id`, or mints one, on both request and response.
pub async fn request_id(mut req: Request, next: Next) -> Response {
    let incoming = req.headers().get(REQUEST_ID).filter(|v| !v.is_empty()).cloned();
    let rid = match incoming {
        Some(v) => v,
        None => match HeaderValue::from_str(&Uuid::new_v4().to_string()) {
            Ok(v) => v,
            Err(_) => return next.run(req).await,
        },
    };
    req.headers_mut().insert(REQUEST_ID, rid.clone());
    let mut res = next.run(req).await;
    res.headers_mut().insert(REQUEST_ID, rid);
    res
}
