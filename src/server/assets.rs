//! Static asset serving
//!
//! Serves the form page and its companion files from the static root.
//! Requests can only name plain relative paths below the root.

use axum::extract::{Path as UrlPath, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use log::error;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use crate::server::state::AppState;

/// Handles `GET /`.
pub async fn handle_index(State(state): State<Arc<AppState>>) -> Response {
    serve_file(&state.static_root, &state.index_file).await
}

/// Handles `GET /{*path}`.
pub async fn handle_asset(
    State(state): State<Arc<AppState>>,
    UrlPath(path): UrlPath<String>,
) -> Response {
    serve_file(&state.static_root, &path).await
}

/// Map a requested path onto the static root, refusing traversal.
pub fn resolve_asset_path(root: &Path, requested: &str) -> Option<PathBuf> {
    if requested.is_empty() || requested.contains('\\') {
        return None;
    }

    let relative = Path::new(requested);
    let is_plain = relative
        .components()
        .all(|component| matches!(component, Component::Normal(_)));

    is_plain.then(|| root.join(relative))
}

pub fn content_type(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("js" | "mjs") => "text/javascript; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("json") => "application/json",
        Some("txt") => "text/plain; charset=utf-8",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}

async fn serve_file(root: &Path, requested: &str) -> Response {
    let Some(path) = resolve_asset_path(root, requested) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    match tokio::fs::metadata(&path).await {
        Ok(meta) if meta.is_file() => {}
        Ok(_) => return StatusCode::NOT_FOUND.into_response(),
        Err(e) if e.kind() == ErrorKind::NotFound => return StatusCode::NOT_FOUND.into_response(),
        Err(e) => {
            error!("Failed to stat {}: {}", path.display(), e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    }

    match tokio::fs::read(&path).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, content_type(&path))], bytes).into_response(),
        Err(e) => {
            error!("Failed to read {}: {}", path.display(), e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
