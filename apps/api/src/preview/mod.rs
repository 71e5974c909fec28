//! Reactive preview: per-editor sessions that keep a rendered resume in step
//! with the form.
//!
//! Pipeline per session:
//!   1. Edit arrives → form updated (validated at this boundary)
//!   2. Text edit → debounce timer (re)armed; structural edit → render now
//!   3. Render = collect → template → swap snapshot (revision + 1)
//!   4. Finalize → one synchronous render, form frozen until "edit" again

pub mod controller;
pub mod debounce;
pub mod handlers;
pub mod registry;
pub mod scroll;
pub mod session;

pub use controller::PreviewError;
pub use registry::SessionRegistry;
pub use session::{SessionHandle, SessionSettings};
