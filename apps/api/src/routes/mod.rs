pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
    Router,
};

use crate::preview::handlers;
use crate::state::AppState;

/// Headroom for multipart framing around the photo itself.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let photo_limit = state.config.max_photo_bytes + MULTIPART_OVERHEAD;

    Router::new()
        .route("/health", get(health::health_handler))
        // Session lifecycle
        .route("/api/v1/sessions", post(handlers::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            delete(handlers::handle_delete_session),
        )
        // Preview
        .route(
            "/api/v1/sessions/:id/preview",
            get(handlers::handle_get_preview),
        )
        .route(
            "/api/v1/sessions/:id/preview.html",
            get(handlers::handle_get_preview_html),
        )
        .route("/api/v1/sessions/:id/focus", post(handlers::handle_focus))
        // Editing
        .route("/api/v1/sessions/:id/edits", post(handlers::handle_edit))
        .route(
            "/api/v1/sessions/:id/entries/:section",
            post(handlers::handle_add_entry),
        )
        .route(
            "/api/v1/sessions/:id/entries/:section/:index",
            delete(handlers::handle_remove_entry),
        )
        .route(
            "/api/v1/sessions/:id/photo",
            post(handlers::handle_upload_photo).layer(DefaultBodyLimit::max(photo_limit)),
        )
        // Selection
        .route(
            "/api/v1/sessions/:id/variant",
            put(handlers::handle_select_variant),
        )
        .route(
            "/api/v1/sessions/:id/theme-color",
            put(handlers::handle_set_theme_color),
        )
        .route(
            "/api/v1/sessions/:id/scheme/toggle",
            post(handlers::handle_toggle_scheme),
        )
        // Finalization
        .route(
            "/api/v1/sessions/:id/finalize",
            post(handlers::handle_finalize),
        )
        .route(
            "/api/v1/sessions/:id/edit",
            post(handlers::handle_return_to_editing),
        )
        .route("/api/v1/sessions/:id/export", get(handlers::handle_export))
        .with_state(state)
}
