//! Preview session: one tokio task per editor.
//!
//! The task owns a `PreviewController` and the debounce timer and processes
//! commands one at a time, so renders within a session never overlap.
//! Callers talk to it through a cloneable `SessionHandle`; the latest snapshot
//! is published on a `watch` channel and can be read without a round trip.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use serde::Serialize;
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::export::ExportedResume;
use crate::form::{Field, RepeatedSection};
use crate::photo::{EmbeddedImage, PhotoError};
use crate::preview::controller::{
    FinalizedResume, PreviewController, PreviewError, PreviewSnapshot, Schedule,
};
use crate::preview::debounce::Debouncer;
use crate::selection::{ColorScheme, SchemeStore, Selection, ThemeColor};

const COMMAND_BUFFER: usize = 64;

/// Per-session settings taken from `Config`.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub debounce: Duration,
    pub default_theme_color: ThemeColor,
    pub max_photo_bytes: usize,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct EntryAdded {
    pub index: usize,
    pub revision: u64,
}

type Reply<T> = oneshot::Sender<Result<T, PreviewError>>;

enum Command {
    Edit {
        field: Field,
        entry: Option<usize>,
        value: String,
        reply: Reply<Schedule>,
    },
    AddEntry {
        section: RepeatedSection,
        reply: Reply<EntryAdded>,
    },
    RemoveEntry {
        section: RepeatedSection,
        index: usize,
        reply: Reply<PreviewSnapshot>,
    },
    SelectVariant {
        name: String,
        reply: Reply<PreviewSnapshot>,
    },
    SetThemeColor {
        color: String,
        reply: Reply<PreviewSnapshot>,
    },
    ToggleScheme {
        reply: Reply<ColorScheme>,
    },
    BeginUpload {
        reply: Reply<()>,
    },
    FinishUpload {
        result: Result<EmbeddedImage, PhotoError>,
        reply: Reply<PreviewSnapshot>,
    },
    Finalize {
        reply: Reply<FinalizedResume>,
    },
    ReturnToEditing {
        reply: Reply<PreviewSnapshot>,
    },
    Export {
        reply: Reply<ExportedResume>,
    },
}

// ────────────────────────────────────────────────────────────────────────────
// Handle
// ────────────────────────────────────────────────────────────────────────────

/// Cloneable front door to a running session. The session task exits once
/// every handle is dropped.
#[derive(Clone)]
pub struct SessionHandle {
    id: Uuid,
    commands: mpsc::Sender<Command>,
    snapshots: watch::Receiver<PreviewSnapshot>,
    max_photo_bytes: usize,
}

impl SessionHandle {
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The most recently swapped-in snapshot.
    pub fn snapshot(&self) -> PreviewSnapshot {
        self.snapshots.borrow().clone()
    }

    #[cfg(test)]
    pub(crate) fn watch_snapshots(&self) -> watch::Receiver<PreviewSnapshot> {
        self.snapshots.clone()
    }

    pub async fn edit(
        &self,
        field: Field,
        entry: Option<usize>,
        value: String,
    ) -> Result<Schedule, PreviewError> {
        self.request(|reply| Command::Edit {
            field,
            entry,
            value,
            reply,
        })
        .await
    }

    pub async fn add_entry(&self, section: RepeatedSection) -> Result<EntryAdded, PreviewError> {
        self.request(|reply| Command::AddEntry { section, reply }).await
    }

    pub async fn remove_entry(
        &self,
        section: RepeatedSection,
        index: usize,
    ) -> Result<PreviewSnapshot, PreviewError> {
        self.request(|reply| Command::RemoveEntry {
            section,
            index,
            reply,
        })
        .await
    }

    pub async fn select_variant(&self, name: String) -> Result<PreviewSnapshot, PreviewError> {
        self.request(|reply| Command::SelectVariant { name, reply })
            .await
    }

    pub async fn set_theme_color(&self, color: String) -> Result<PreviewSnapshot, PreviewError> {
        self.request(|reply| Command::SetThemeColor { color, reply })
            .await
    }

    pub async fn toggle_scheme(&self) -> Result<ColorScheme, PreviewError> {
        self.request(|reply| Command::ToggleScheme { reply }).await
    }

    /// Validates and embeds an uploaded photo.
    ///
    /// Claiming the upload slot, encoding and releasing the slot all run in
    /// one detached task, so a caller that goes away mid-upload cannot leave
    /// the slot claimed. A concurrent upload fails fast with `UploadInProgress`.
    pub async fn upload_photo(&self, bytes: Bytes) -> Result<PreviewSnapshot, PreviewError> {
        let handle = self.clone();
        let task = tokio::spawn(async move {
            handle.request(|reply| Command::BeginUpload { reply }).await?;
            let result = EmbeddedImage::from_upload_blocking(bytes, handle.max_photo_bytes).await;
            handle
                .request(|reply| Command::FinishUpload { result, reply })
                .await
        });

        task.await.map_err(|_| PreviewError::SessionClosed)?
    }

    pub async fn finalize(&self) -> Result<FinalizedResume, PreviewError> {
        self.request(|reply| Command::Finalize { reply }).await
    }

    pub async fn return_to_editing(&self) -> Result<PreviewSnapshot, PreviewError> {
        self.request(|reply| Command::ReturnToEditing { reply }).await
    }

    pub async fn export(&self) -> Result<ExportedResume, PreviewError> {
        self.request(|reply| Command::Export { reply }).await
    }

    async fn request<T>(
        &self,
        make: impl FnOnce(Reply<T>) -> Command,
    ) -> Result<T, PreviewError> {
        let (reply, rx) = oneshot::channel();
        self.commands
            .send(make(reply))
            .await
            .map_err(|_| PreviewError::SessionClosed)?;
        rx.await.map_err(|_| PreviewError::SessionClosed)?
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Task
// ────────────────────────────────────────────────────────────────────────────

/// Starts a session task and returns its handle.
///
/// The stored color scheme is loaded first; a store failure falls back to
/// light rather than failing session creation.
pub async fn spawn_session(
    settings: SessionSettings,
    store: Arc<dyn SchemeStore>,
) -> SessionHandle {
    let scheme = match store.load().await {
        Ok(scheme) => scheme.unwrap_or_default(),
        Err(e) => {
            warn!("Could not load color scheme, using default: {e}");
            ColorScheme::default()
        }
    };

    let id = Uuid::new_v4();
    let controller =
        PreviewController::new(Selection::new(settings.default_theme_color.clone(), scheme));
    let (snapshot_tx, snapshot_rx) = watch::channel(controller.snapshot().clone());
    let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);

    let task = SessionTask {
        id,
        controller,
        debouncer: Debouncer::new(settings.debounce),
        commands: command_rx,
        snapshots: snapshot_tx,
        store,
    };
    tokio::spawn(task.run());

    info!(session_id = %id, scheme = scheme.as_str(), "Preview session started");

    SessionHandle {
        id,
        commands: command_tx,
        snapshots: snapshot_rx,
        max_photo_bytes: settings.max_photo_bytes,
    }
}

struct SessionTask {
    id: Uuid,
    controller: PreviewController,
    debouncer: Debouncer,
    commands: mpsc::Receiver<Command>,
    snapshots: watch::Sender<PreviewSnapshot>,
    store: Arc<dyn SchemeStore>,
}

impl SessionTask {
    async fn run(mut self) {
        loop {
            tokio::select! {
                command = self.commands.recv() => match command {
                    Some(command) => self.handle(command).await,
                    None => break,
                },
                _ = self.debouncer.fired() => {
                    self.controller.refresh();
                    self.publish();
                }
            }
        }
        debug!(session_id = %self.id, "Preview session stopped");
    }

    async fn handle(&mut self, command: Command) {
        match command {
            Command::Edit {
                field,
                entry,
                value,
                reply,
            } => {
                let result = self.controller.apply_edit(field, entry, &value);
                match result {
                    Ok(Schedule::Debounced) => self.debouncer.schedule(),
                    Ok(Schedule::Immediate) => self.rendered(),
                    Err(_) => {}
                }
                let _ = reply.send(result);
            }
            Command::AddEntry { section, reply } => {
                let result = self.controller.add_entry(section).map(|index| EntryAdded {
                    index,
                    revision: self.controller.snapshot().revision,
                });
                if result.is_ok() {
                    self.rendered();
                }
                let _ = reply.send(result);
            }
            Command::RemoveEntry {
                section,
                index,
                reply,
            } => {
                let result = self
                    .controller
                    .remove_entry(section, index)
                    .cloned();
                self.finish_render(result, reply);
            }
            Command::SelectVariant { name, reply } => {
                let result = self.controller.select_variant(&name).cloned();
                self.finish_render(result, reply);
            }
            Command::SetThemeColor { color, reply } => {
                let result = self.controller.set_theme_color(&color).cloned();
                self.finish_render(result, reply);
            }
            Command::ToggleScheme { reply } => {
                let scheme = self.controller.toggle_scheme();
                self.rendered();
                if let Err(e) = self.store.save(scheme).await {
                    warn!(session_id = %self.id, "Could not persist color scheme: {e}");
                }
                let _ = reply.send(Ok(scheme));
            }
            Command::BeginUpload { reply } => {
                let claimed = self.controller.begin_photo_upload();
                let was_claimed = claimed.is_ok();
                if reply.send(claimed).is_err() && was_claimed {
                    // Nobody will finish this upload.
                    self.controller.cancel_photo_upload();
                }
            }
            Command::FinishUpload { result, reply } => {
                let result = self
                    .controller
                    .finish_photo_upload(result)
                    .cloned();
                self.finish_render(result, reply);
            }
            Command::Finalize { reply } => {
                let finalized = self.controller.finalize();
                self.rendered();
                let _ = reply.send(Ok(finalized));
            }
            Command::ReturnToEditing { reply } => {
                let snapshot = self.controller.return_to_editing().clone();
                self.rendered();
                let _ = reply.send(Ok(snapshot));
            }
            Command::Export { reply } => {
                let _ = reply.send(self.controller.export());
            }
        }
    }

    fn finish_render(
        &mut self,
        result: Result<PreviewSnapshot, PreviewError>,
        reply: Reply<PreviewSnapshot>,
    ) {
        if result.is_ok() {
            self.rendered();
        }
        let _ = reply.send(result);
    }

    /// An immediate render already covers every applied edit, so the pending
    /// timer is dropped along with publishing.
    fn rendered(&mut self) {
        self.debouncer.cancel();
        self.publish();
    }

    fn publish(&self) {
        self.snapshots.send_replace(self.controller.snapshot().clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::{MemorySchemeStore, Variant};
    use tokio::time::{sleep, timeout};

    const DEBOUNCE: Duration = Duration::from_millis(500);
    const PNG: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 13];

    fn settings() -> SessionSettings {
        SessionSettings {
            debounce: DEBOUNCE,
            default_theme_color: ThemeColor::default(),
            max_photo_bytes: 1024,
        }
    }

    async fn session() -> SessionHandle {
        spawn_session(settings(), Arc::new(MemorySchemeStore::default())).await
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_edits_coalesce_into_one_render() {
        let handle = session().await;
        for value in ["A", "Ad", "Ada", "Ada L", "Ada Lovelace"] {
            let schedule = handle.edit(Field::FullName, None, value.to_string()).await.unwrap();
            assert_eq!(schedule, Schedule::Debounced);
            sleep(Duration::from_millis(100)).await;
        }
        assert_eq!(handle.snapshot().revision, 0);

        sleep(DEBOUNCE).await;
        let snapshot = handle.snapshot();
        assert_eq!(snapshot.revision, 1);
        assert!(snapshot.document.as_str().contains("Ada Lovelace"));

        // No further renders once the timer has fired.
        sleep(DEBOUNCE * 4).await;
        assert_eq!(handle.snapshot().revision, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_structural_edit_renders_now_and_cancels_pending() {
        let handle = session().await;
        handle.edit(Field::FullName, None, "Ada".to_string()).await.unwrap();

        let added = handle.add_entry(RepeatedSection::Skills).await.unwrap();
        assert_eq!(added.index, 0);
        assert_eq!(added.revision, 1);
        assert_eq!(handle.snapshot().revision, 1);
        assert!(handle.snapshot().document.as_str().contains("Ada"));

        sleep(DEBOUNCE * 2).await;
        assert_eq!(handle.snapshot().revision, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_variant_switch_is_immediate() {
        let handle = session().await;
        let snapshot = handle.select_variant("creative".to_string()).await.unwrap();
        assert_eq!(snapshot.variant, Variant::Creative);
        assert_eq!(handle.snapshot(), snapshot);

        let err = handle.select_variant("nope".to_string()).await.unwrap_err();
        assert!(matches!(err, PreviewError::Selection(_)));
        assert_eq!(handle.snapshot().variant, Variant::Creative);
    }

    #[tokio::test(start_paused = true)]
    async fn test_scheme_is_persisted_and_restored() {
        let store: Arc<dyn SchemeStore> = Arc::new(MemorySchemeStore::default());
        let first = spawn_session(settings(), store.clone()).await;
        assert_eq!(first.snapshot().color_scheme, ColorScheme::Light);
        assert_eq!(first.toggle_scheme().await.unwrap(), ColorScheme::Dark);
        assert_eq!(store.load().await.unwrap(), Some(ColorScheme::Dark));

        let second = spawn_session(settings(), store).await;
        assert_eq!(second.snapshot().color_scheme, ColorScheme::Dark);
    }

    #[tokio::test]
    async fn test_photo_upload_updates_preview() {
        let handle = session().await;
        let snapshot = handle.upload_photo(Bytes::from_static(PNG)).await.unwrap();
        assert!(snapshot.document.as_str().contains("data:image/png;base64,"));

        let err = handle
            .upload_photo(Bytes::from_static(b"not an image"))
            .await
            .unwrap_err();
        assert_eq!(err, PreviewError::Photo(PhotoError::UnsupportedFormat));
        assert!(handle.snapshot().document.as_str().contains("data:image/png;base64,"));
    }

    #[tokio::test]
    async fn test_abandoned_upload_still_releases_slot() {
        let handle = session().await;
        let mut snapshots = handle.snapshots.clone();

        // The caller gives up right after the upload starts.
        let abandoned = timeout(Duration::ZERO, handle.upload_photo(Bytes::from_static(PNG))).await;
        assert!(abandoned.is_err());

        // The detached upload still completes and publishes the photo.
        timeout(Duration::from_secs(5), snapshots.changed())
            .await
            .unwrap()
            .unwrap();
        assert!(handle.snapshot().document.as_str().contains("data:image/png;base64,"));

        let snapshot = handle.upload_photo(Bytes::from_static(PNG)).await.unwrap();
        assert!(snapshot.document.as_str().contains("data:image/png;base64,"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_finalize_cancels_pending_and_freezes() {
        let handle = session().await;
        handle.edit(Field::FullName, None, "Ada Lovelace".to_string()).await.unwrap();

        let finalized = handle.finalize().await.unwrap();
        assert!(finalized.document.as_str().contains("Ada Lovelace"));
        let revision = handle.snapshot().revision;

        sleep(DEBOUNCE * 2).await;
        assert_eq!(handle.snapshot().revision, revision);

        let err = handle.edit(Field::Email, None, "a@b.c".to_string()).await.unwrap_err();
        assert_eq!(err, PreviewError::Finalized);

        let exported = handle.export().await.unwrap();
        assert_eq!(exported.filename, "Resume_Ada_Lovelace.html");

        handle.return_to_editing().await.unwrap();
        handle.edit(Field::Email, None, "a@b.c".to_string()).await.unwrap();
    }

    #[tokio::test]
    async fn test_dropping_handles_stops_the_task() {
        let handle = session().await;
        let mut rx = handle.snapshots.clone();
        drop(handle);
        // The sender lives in the task; once the task exits, changed() errors.
        assert!(rx.changed().await.is_err());
    }
}
