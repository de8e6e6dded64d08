//! Route configuration.

use std::path::Path;

use axum::routing::{get, post};
use axum::Router;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::server::handlers;
use crate::server::ApiState;

/// Creates the facade router.
///
/// JSON endpoints cover bookmarks, folders, and history. The internal pages
/// are served as static files from `pages_dir`, with unmatched paths falling
/// back to asset lookup in the same directory.
pub fn create_router(state: ApiState, pages_dir: &Path) -> Router {
    let index = ServeFile::new(pages_dir.join("index.html"));

    Router::new()
        .route("/get_folders", get(handlers::get_folders))
        .route("/get_bookmarks", get(handlers::get_bookmarks))
        .route("/add_folder", post(handlers::add_folder))
        .route("/remove_folder", post(handlers::remove_folder))
        .route("/add_bookmark", post(handlers::add_bookmark))
        .route("/remove_bookmark", post(handlers::remove_bookmark))
        .route("/get_history", get(handlers::get_history))
        .route("/add_history", post(handlers::add_history))
        .route("/remove_history", post(handlers::remove_history))
        .route("/clear_history", post(handlers::clear_history))
        .route("/about", get(handlers::about))
        .route_service("/", index.clone())
        .route_service("/home", index)
        .route_service("/bookmark", ServeFile::new(pages_dir.join("bookmark.html")))
        .route_service("/history", ServeFile::new(pages_dir.join("history.html")))
        .route_service("/setting", ServeFile::new(pages_dir.join("setting.html")))
        .fallback_service(ServeDir::new(pages_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
