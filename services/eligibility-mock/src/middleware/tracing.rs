use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::{info, info_span, Instrument};

use super::request_id::REQUEST_ID;

pub async fn trace(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().to_string();
    let rid = req
        .headers()
        .get(REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();
    let span = info_span!("http", %method, %uri, request_id = %rid);
    async move {
        let started = Instant::now();
        let res = next.run(req).await;
        info!(status = res.status().as_u16(), elapsed_us = started.elapsed().as_micros() as u64, "request served");
        res
    }
    .instrument(span)
    .await
}
