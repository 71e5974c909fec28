//! Standalone HTML export of a finalized resume.
//!
//! The exported page embeds everything it needs: the rendered fragment, the
//! stylesheet for the class-based layouts, and the photo as a data URI. It
//! loads nothing from the network.

use maud::{html, PreEscaped, DOCTYPE};
use serde::Serialize;

use crate::preview::controller::FinalizedResume;

/// Styles for the class-based parts of the templates. Everything else is inline.
const EXPORT_CSS: &str = r#"
body { margin: 0; padding: 0; font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; }
.template-modern { display: grid; grid-template-columns: 35% 65%; min-height: 100vh; }
.template-sidebar { color: white; padding: 40px 30px; }
.template-main { padding: 40px; background: white; }
.profile-img-container { width: 180px; height: 180px; margin: 0 auto 30px; border-radius: 50%; overflow: hidden; border: 5px solid rgba(255,255,255,0.2); box-shadow: 0 10px 30px rgba(0,0,0,0.3); }
.profile-img-container img { width: 100%; height: 100%; object-fit: cover; }
.template-name { font-size: 2rem; font-weight: 700; margin-bottom: 10px; text-align: center; }
.template-contact { margin: 20px 0; padding: 20px; background: rgba(255,255,255,0.1); border-radius: 10px; }
.contact-item { display: flex; align-items: center; gap: 10px; margin-bottom: 10px; font-size: 0.9rem; }
.template-section { margin-bottom: 30px; }
.template-section-title { font-size: 1.5rem; font-weight: 700; margin-bottom: 15px; padding-bottom: 10px; border-bottom: 3px solid; }
.sidebar-section-title { color: white; font-size: 1.3rem; font-weight: 700; margin: 25px 0 15px 0; padding-bottom: 10px; border-bottom: 2px solid rgba(255,255,255,0.3); }
.skill-item { margin-bottom: 15px; }
.skill-name { display: flex; justify-content: space-between; margin-bottom: 5px; font-size: 0.9rem; }
.skill-bar { height: 8px; background: rgba(255,255,255,0.2); border-radius: 10px; overflow: hidden; }
.mb-2 { margin-bottom: 0.5rem; }
.mb-3 { margin-bottom: 1rem; }
.mb-4 { margin-bottom: 1.5rem; }
@media (max-width: 768px) { .template-modern { grid-template-columns: 1fr; } }
@media print { body { background: white; } .template-modern { box-shadow: none; } }
"#;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportedResume {
    pub filename: String,
    pub html: String,
}

/// Wraps the finalized document in a complete HTML page.
pub fn standalone(finalized: &FinalizedResume) -> ExportedResume {
    let page = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Resume - " (finalized.full_name) }
                style { (PreEscaped(EXPORT_CSS)) }
            }
            body {
                // Already escaped by the renderer.
                (PreEscaped(finalized.document.as_str()))
            }
        }
    };

    ExportedResume {
        filename: export_filename(&finalized.full_name),
        html: page.into_string(),
    }
}

/// `Resume_<name>.html` with each whitespace run collapsed to `_`.
pub fn export_filename(full_name: &str) -> String {
    let name = full_name.split_whitespace().collect::<Vec<_>>().join("_");
    if name.is_empty() {
        "Resume.html".to_string()
    } else {
        format!("Resume_{name}.html")
    }
}
