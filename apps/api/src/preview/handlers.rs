//! Axum route handlers for the Preview Session API.

use axum::{
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::form::{Field, RepeatedSection};
use crate::preview::controller::{FinalizedResume, PreviewSnapshot, Schedule};
use crate::preview::scroll::{scroll_target, ScrollTarget};
use crate::preview::session::{spawn_session, EntryAdded, SessionHandle};
use crate::selection::ColorScheme;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SessionCreatedResponse {
    pub id: Uuid,
    pub snapshot: PreviewSnapshot,
}

#[derive(Debug, Deserialize)]
pub struct EditRequest {
    pub field: Field,
    #[serde(default)]
    pub entry: Option<usize>,
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct EditAccepted {
    pub schedule: Schedule,
}

#[derive(Debug, Deserialize)]
pub struct VariantRequest {
    pub variant: String,
}

#[derive(Debug, Deserialize)]
pub struct ThemeColorRequest {
    pub color: String,
}

#[derive(Debug, Serialize)]
pub struct SchemeResponse {
    pub color_scheme: ColorScheme,
}

#[derive(Debug, Deserialize)]
pub struct FocusRequest {
    pub field: Field,
    pub scroll_height: f64,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionCreatedResponse>), AppError> {
    let handle = spawn_session(state.config.session_settings(), state.scheme_store.clone()).await;
    let id = handle.id();
    let snapshot = handle.snapshot();
    state.sessions.insert(handle).await;

    Ok((
        StatusCode::CREATED,
        Json(SessionCreatedResponse { id, snapshot }),
    ))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    match state.sessions.remove(id).await {
        Some(_) => {
            info!(session_id = %id, "Preview session closed");
            Ok(StatusCode::NO_CONTENT)
        }
        None => Err(session_not_found(id)),
    }
}

/// GET /api/v1/sessions/:id/preview
pub async fn handle_get_preview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PreviewSnapshot>, AppError> {
    let session = find_session(&state, id).await?;
    Ok(Json(session.snapshot()))
}

/// GET /api/v1/sessions/:id/preview.html
///
/// The bare document fragment, for swapping straight into the preview pane.
pub async fn handle_get_preview_html(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Html<String>, AppError> {
    let session = find_session(&state, id).await?;
    Ok(Html(session.snapshot().document.into_string()))
}

/// POST /api/v1/sessions/:id/edits
///
/// Returns 202: text edits are rendered once the debounce timer fires.
pub async fn handle_edit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<EditRequest>,
) -> Result<(StatusCode, Json<EditAccepted>), AppError> {
    let session = find_session(&state, id).await?;
    let schedule = session.edit(req.field, req.entry, req.value).await?;
    Ok((StatusCode::ACCEPTED, Json(EditAccepted { schedule })))
}

/// POST /api/v1/sessions/:id/entries/:section
pub async fn handle_add_entry(
    State(state): State<AppState>,
    Path((id, section)): Path<(Uuid, RepeatedSection)>,
) -> Result<(StatusCode, Json<EntryAdded>), AppError> {
    let session = find_session(&state, id).await?;
    let added = session.add_entry(section).await?;
    Ok((StatusCode::CREATED, Json(added)))
}

/// DELETE /api/v1/sessions/:id/entries/:section/:index
pub async fn handle_remove_entry(
    State(state): State<AppState>,
    Path((id, section, index)): Path<(Uuid, RepeatedSection, usize)>,
) -> Result<Json<PreviewSnapshot>, AppError> {
    let session = find_session(&state, id).await?;
    Ok(Json(session.remove_entry(section, index).await?))
}

/// PUT /api/v1/sessions/:id/variant
pub async fn handle_select_variant(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<VariantRequest>,
) -> Result<Json<PreviewSnapshot>, AppError> {
    let session = find_session(&state, id).await?;
    Ok(Json(session.select_variant(req.variant).await?))
}

/// PUT /api/v1/sessions/:id/theme-color
pub async fn handle_set_theme_color(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ThemeColorRequest>,
) -> Result<Json<PreviewSnapshot>, AppError> {
    let session = find_session(&state, id).await?;
    Ok(Json(session.set_theme_color(req.color).await?))
}

/// POST /api/v1/sessions/:id/scheme/toggle
pub async fn handle_toggle_scheme(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SchemeResponse>, AppError> {
    let session = find_session(&state, id).await?;
    let color_scheme = session.toggle_scheme().await?;
    Ok(Json(SchemeResponse { color_scheme }))
}

/// POST /api/v1/sessions/:id/photo
///
/// Multipart upload; the image is read from the `photo` part.
pub async fn handle_upload_photo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<PreviewSnapshot>, AppError> {
    let session = find_session(&state, id).await?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        if field.name() == Some("photo") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("could not read photo: {e}")))?;
            return Ok(Json(session.upload_photo(bytes).await?));
        }
    }

    Err(AppError::Validation(
        "multipart body has no 'photo' part".to_string(),
    ))
}

/// POST /api/v1/sessions/:id/focus
pub async fn handle_focus(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<FocusRequest>,
) -> Result<Json<ScrollTarget>, AppError> {
    find_session(&state, id).await?;
    Ok(Json(scroll_target(req.field, req.scroll_height)))
}

/// POST /api/v1/sessions/:id/finalize
pub async fn handle_finalize(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FinalizedResume>, AppError> {
    let session = find_session(&state, id).await?;
    Ok(Json(session.finalize().await?))
}

/// POST /api/v1/sessions/:id/edit
pub async fn handle_return_to_editing(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PreviewSnapshot>, AppError> {
    let session = find_session(&state, id).await?;
    Ok(Json(session.return_to_editing().await?))
}

/// GET /api/v1/sessions/:id/export
pub async fn handle_export(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let session = find_session(&state, id).await?;
    let exported = session.export().await?;
    let disposition = content_disposition(&exported.filename);

    Ok((
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        exported.html,
    ))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

async fn find_session(state: &AppState, id: Uuid) -> Result<SessionHandle, AppError> {
    state
        .sessions
        .touch(id)
        .await
        .ok_or_else(|| session_not_found(id))
}

fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("preview session {id} does not exist"))
}

/// `attachment` header with an ASCII fallback name and the exact UTF-8 name
/// in `filename*`.
fn content_disposition(filename: &str) -> String {
    let fallback: String = filename
        .chars()
        .map(|c| {
            if c.is_ascii_graphic() && c != '"' && c != '\\' {
                c
            } else {
                '_'
            }
        })
        .collect();

    format!(
        "attachment; filename=\"{fallback}\"; filename*=UTF-8''{}",
        urlencoding::encode(filename)
    )
}
