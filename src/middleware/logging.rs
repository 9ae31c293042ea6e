//! Logging middleware
//!
//! Logs one line per request with its outcome and duration.

use axum::body::Body;
use axum::extract::ConnectInfo;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use log::{error, info, warn};
use std::net::SocketAddr;
use std::time::Instant;

pub async fn logging_middleware(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let client = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "unknown".to_string());
    let start = Instant::now();

    let response = next.run(req).await;

    let status = response.status();
    let elapsed_ms = start.elapsed().as_millis();

    if status.is_server_error() {
        error!(
            "{} {} {} from {} in {}ms",
            method,
            path,
            status.as_u16(),
            client,
            elapsed_ms
        );
    } else if status.is_client_error() {
        warn!(
            "{} {} {} from {} in {}ms",
            method,
            path,
            status.as_u16(),
            client,
            elapsed_ms
        );
    } else {
        info!(
            "{} {} {} from {} in {}ms",
            method,
            path,
            status.as_u16(),
            client,
            elapsed_ms
        );
    }

    response
}
