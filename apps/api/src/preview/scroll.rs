//! Maps the focused form field to a scroll offset in the preview.
//!
//! The offsets are fixed fractions of the preview height, one per section.
//! They approximate where a section usually sits and do not follow the
//! rendered layout.

use serde::Serialize;

use crate::form::{Field, RepeatedSection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    Smooth,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScrollTarget {
    pub top: f64,
    pub behavior: ScrollBehavior,
}

pub fn scroll_fraction(field: Field) -> f64 {
    match field.section() {
        Some(RepeatedSection::Skills) => 0.10,
        Some(RepeatedSection::Experience) => 0.30,
        Some(RepeatedSection::Education) => 0.55,
        Some(RepeatedSection::Certifications) => 0.75,
        None if field == Field::Summary => 0.15,
        None => 0.0,
    }
}

/// Where to scroll a preview of `scroll_height` pixels when `field` gains focus.
pub fn scroll_target(field: Field, scroll_height: f64) -> ScrollTarget {
    let height = if scroll_height.is_finite() {
        scroll_height.max(0.0)
    } else {
        0.0
    };
    ScrollTarget {
        top: height * scroll_fraction(field),
        behavior: ScrollBehavior::Smooth,
    }
}
