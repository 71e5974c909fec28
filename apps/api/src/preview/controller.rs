//! Reactive preview controller: the per-session state machine.
//!
//! Owns the form, the selection, and the latest snapshot. Every operation is
//! synchronous and leaves state untouched on error; timing (the debounce) is
//! the session task's concern. An operation either renders immediately or
//! tells the caller to debounce.

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::export::{self, ExportedResume};
use crate::form::{collect, EditingSurface, Field, FormError, FormState, RepeatedSection};
use crate::photo::{EmbeddedImage, PhotoError};
use crate::render::{self, Document};
use crate::selection::{ColorScheme, Selection, SelectionError, ThemeColor, Variant};

#[derive(Debug, Error, PartialEq)]
pub enum PreviewError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Photo(#[from] PhotoError),

    #[error("a photo upload is already in progress")]
    UploadInProgress,

    #[error("resume is finalized; return to editing first")]
    Finalized,

    #[error("resume has not been finalized")]
    NotFinalized,

    #[error("preview session has shut down")]
    SessionClosed,
}

/// What the caller must do after an edit was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Schedule {
    /// Nothing rendered yet; (re)arm the debounce timer.
    Debounced,
    /// Already rendered; any pending timer is now redundant.
    Immediate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Editing,
    /// The finalized document is shown and the form is frozen.
    Document,
}

/// The latest swapped-in rendering. Replaced whole on every render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewSnapshot {
    pub revision: u64,
    pub mode: ViewMode,
    pub variant: Variant,
    pub theme_color: ThemeColor,
    pub color_scheme: ColorScheme,
    pub document: Document,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinalizedResume {
    pub document: Document,
    pub full_name: String,
    pub variant: Variant,
    pub finalized_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct PreviewController {
    form: FormState,
    selection: Selection,
    photo: Option<EmbeddedImage>,
    upload_in_flight: bool,
    mode: ViewMode,
    finalized: Option<FinalizedResume>,
    snapshot: PreviewSnapshot,
}

impl PreviewController {
    /// Starts with an empty form and renders it once (revision 0).
    pub fn new(selection: Selection) -> Self {
        let form = FormState::new();
        let document = render_form(&form, None, &selection);
        let snapshot = PreviewSnapshot {
            revision: 0,
            mode: ViewMode::Editing,
            variant: selection.variant,
            theme_color: selection.theme_color.clone(),
            color_scheme: selection.color_scheme,
            document,
        };
        PreviewController {
            form,
            selection,
            photo: None,
            upload_in_flight: false,
            mode: ViewMode::Editing,
            finalized: None,
            snapshot,
        }
    }

    pub fn snapshot(&self) -> &PreviewSnapshot {
        &self.snapshot
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Collects, renders, and swaps in a new snapshot.
    pub fn refresh(&mut self) -> &PreviewSnapshot {
        let document = render_form(&self.form, self.photo.as_ref(), &self.selection);
        self.snapshot = PreviewSnapshot {
            revision: self.snapshot.revision + 1,
            mode: self.mode,
            variant: self.selection.variant,
            theme_color: self.selection.theme_color.clone(),
            color_scheme: self.selection.color_scheme,
            document,
        };
        debug!(revision = self.snapshot.revision, variant = %self.selection.variant, "Preview swapped");
        &self.snapshot
    }

    // ────────────────────────────────────────────────────────────────────────
    // Edits
    // ────────────────────────────────────────────────────────────────────────

    /// Applies one field value. Text fields debounce; checkbox and skill
    /// level changes render at once.
    pub fn apply_edit(
        &mut self,
        field: Field,
        entry: Option<usize>,
        value: &str,
    ) -> Result<Schedule, PreviewError> {
        self.ensure_editing()?;
        self.form.set_value(field, entry, value).map_err(|e| {
            warn!(?field, ?entry, "Rejected edit: {e}");
            e
        })?;

        if field.is_discrete() {
            self.refresh();
            Ok(Schedule::Immediate)
        } else {
            Ok(Schedule::Debounced)
        }
    }

    pub fn add_entry(&mut self, section: RepeatedSection) -> Result<usize, PreviewError> {
        self.ensure_editing()?;
        let index = self.form.add_entry(section);
        debug!(section = section.as_str(), index, "Entry added");
        self.refresh();
        Ok(index)
    }

    pub fn remove_entry(
        &mut self,
        section: RepeatedSection,
        index: usize,
    ) -> Result<&PreviewSnapshot, PreviewError> {
        self.ensure_editing()?;
        self.form.remove_entry(section, index)?;
        debug!(section = section.as_str(), index, "Entry removed");
        Ok(self.refresh())
    }

    pub fn select_variant(&mut self, name: &str) -> Result<&PreviewSnapshot, PreviewError> {
        self.ensure_editing()?;
        let variant = self.selection.select_variant(name).map_err(|e| {
            error!("Template switch failed: {e}");
            e
        })?;
        info!(%variant, "Template variant selected");
        Ok(self.refresh())
    }

    pub fn set_theme_color(&mut self, raw: &str) -> Result<&PreviewSnapshot, PreviewError> {
        self.ensure_editing()?;
        self.selection.set_theme_color(raw).map_err(|e| {
            error!("Theme color change failed: {e}");
            e
        })?;
        Ok(self.refresh())
    }

    /// Flips light/dark. Allowed in either view mode; the document itself
    /// does not depend on the scheme.
    pub fn toggle_scheme(&mut self) -> ColorScheme {
        let scheme = self.selection.toggle_scheme();
        self.refresh();
        scheme
    }

    // ────────────────────────────────────────────────────────────────────────
    // Photo
    // ────────────────────────────────────────────────────────────────────────

    /// Claims the single upload slot.
    pub fn begin_photo_upload(&mut self) -> Result<(), PreviewError> {
        self.ensure_editing()?;
        if self.upload_in_flight {
            return Err(PreviewError::UploadInProgress);
        }
        self.upload_in_flight = true;
        Ok(())
    }

    /// Releases the upload slot without touching the photo.
    pub fn cancel_photo_upload(&mut self) {
        if std::mem::take(&mut self.upload_in_flight) {
            debug!("Photo upload abandoned");
        }
    }

    /// Releases the upload slot and, on success, swaps in the new photo.
    /// On any failure the previous photo stays.
    pub fn finish_photo_upload(
        &mut self,
        result: Result<EmbeddedImage, PhotoError>,
    ) -> Result<&PreviewSnapshot, PreviewError> {
        self.upload_in_flight = false;
        let image = result.map_err(|e| {
            warn!("Photo upload rejected: {e}");
            e
        })?;
        self.ensure_editing()?;
        info!(photo = ?image, "Photo replaced");
        self.photo = Some(image);
        Ok(self.refresh())
    }

    // ────────────────────────────────────────────────────────────────────────
    // Finalization
    // ────────────────────────────────────────────────────────────────────────

    /// Renders synchronously, commits the result, and freezes the form.
    pub fn finalize(&mut self) -> FinalizedResume {
        self.mode = ViewMode::Document;
        self.refresh();
        let snapshot = &self.snapshot;
        let finalized = FinalizedResume {
            document: snapshot.document.clone(),
            full_name: self
                .form
                .identity_value(Field::FullName)
                .unwrap_or_default()
                .to_string(),
            variant: snapshot.variant,
            finalized_at: Utc::now(),
        };
        info!(revision = snapshot.revision, variant = %finalized.variant, "Resume finalized");
        self.finalized = Some(finalized.clone());
        finalized
    }

    pub fn return_to_editing(&mut self) -> &PreviewSnapshot {
        self.mode = ViewMode::Editing;
        self.finalized = None;
        self.refresh()
    }

    pub fn export(&self) -> Result<ExportedResume, PreviewError> {
        let finalized = self.finalized.as_ref().ok_or(PreviewError::NotFinalized)?;
        Ok(export::standalone(finalized))
    }

    fn ensure_editing(&self) -> Result<(), PreviewError> {
        match self.mode {
            ViewMode::Editing => Ok(()),
            ViewMode::Document => Err(PreviewError::Finalized),
        }
    }
}

fn render_form(form: &FormState, photo: Option<&EmbeddedImage>, selection: &Selection) -> Document {
    let model = collect(form, photo);
    render::render(&model, selection.variant, &selection.theme_color)
}
