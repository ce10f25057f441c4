//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser mounts the canvas component with the setup served under
//! `/api/pages`, then posts each snapshot it produces to the matching
//! `/api/canvas/{page}` endpoint. Exported PNGs are served back from the
//! scratch directory at `/scratch`.

pub mod pages;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    let scratch = ServeDir::new(&state.config.scratch_dir);

    Router::new()
        .route("/api/pages", get(pages::list_pages))
        .route("/api/pages/{slug}", get(pages::get_page))
        .route("/api/pages/{slug}/background", get(pages::page_background))
        .route("/api/canvas/basic", post(pages::submit_basic))
        .route("/api/canvas/circles", post(pages::submit_circles))
        .route("/api/canvas/circles/initial-drawing", get(pages::circles_initial_drawing))
        .route("/api/canvas/annotation", post(pages::submit_annotation))
        .route("/api/canvas/annotation/labels", get(pages::annotation_labels))
        .route("/api/canvas/png-export", post(pages::submit_png_export))
        .route("/api/canvas/arc-length", post(pages::submit_arc_length))
        .route("/healthz", get(healthz))
        .nest_service("/scratch", scratch)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
