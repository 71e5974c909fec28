//! Template rendering: resume model plus theme color in, HTML fragment out.
//!
//! Five variants implement one `Template` trait. The provided
//! `Template::render` builds the shared `ResumeView` (suppression, ordering,
//! photo fallback) before handing off to the variant's `layout`, so a new
//! variant only decides structure and styling.
//!
//! Markup is generated with maud; all interpolated text is escaped. Rendering
//! is total and deterministic: the same inputs always give the same bytes.

pub mod classic;
pub mod content;
pub mod creative;
pub mod minimal;
pub mod modern;
pub mod professional;

use std::fmt;

use maud::{html, Markup};
use serde::Serialize;

use crate::models::resume::ResumeModel;
use crate::selection::{ThemeColor, Variant};

pub use content::ResumeView;

/// A rendered, self-contained HTML fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Document(String);

impl Document {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One resume layout.
pub trait Template: Send + Sync {
    fn variant(&self) -> Variant;

    /// Lays out an already-filtered view. `theme` must color headings, accent
    /// bars, and skill bars.
    fn layout(&self, view: &ResumeView<'_>, theme: &ThemeColor) -> Markup;

    fn render(&self, model: &ResumeModel, theme: &ThemeColor) -> Document {
        let view = ResumeView::new(model);
        let markup = html! {
            div class="cv-template" data-template=(self.variant().as_str()) {
                (self.layout(&view, theme))
            }
        };
        Document(markup.into_string())
    }
}

pub fn template_for(variant: Variant) -> &'static dyn Template {
    match variant {
        Variant::Modern => &modern::Modern,
        Variant::Classic => &classic::Classic,
        Variant::Minimal => &minimal::Minimal,
        Variant::Creative => &creative::Creative,
        Variant::Professional => &professional::Professional,
    }
}

pub fn render(model: &ResumeModel, variant: Variant, theme: &ThemeColor) -> Document {
    template_for(variant).render(model, theme)
}

#[cfg(test)]
mod tests;
