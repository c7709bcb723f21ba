use axum::http::{header, Method};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::{handlers, system};

/// Конфигурация всех роутов приложения
///
/// Everything outside `/api` and `/health` is the frontend bundle; unknown
/// paths get `index.html` so client-side routes survive a reload.
pub fn configure_routes(static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let index = static_dir.join("index.html");
    let bundle = ServeDir::new(static_dir).fallback(ServeFile::new(index));

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/contact", post(handlers::contact::submit))
        .fallback_service(bundle)
        .layer(middleware::from_fn(system::middleware::request_logger))
        .layer(cors)
}
