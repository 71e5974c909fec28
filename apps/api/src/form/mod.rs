//! Form state: the server-side mirror of the client's resume form.
//!
//! Holds the raw string value of every input, including however many entries
//! the user has added to each repeated section. This is the editing boundary:
//! values that must never reach the Resume Model (out-of-range skill levels,
//! edits to a locked end date) are rejected here.

pub mod collector;
pub mod fields;

use std::collections::HashMap;

use thiserror::Error;

pub use collector::{collect, EditingSurface};
pub use fields::{Field, RepeatedSection, SkillPreset};

/// End date written when "currently working here" is checked.
pub const PRESENT: &str = "Present";

#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    #[error("field {0:?} is not part of a repeated section and takes no entry index")]
    UnexpectedEntry(Field),

    #[error("field {0:?} belongs to a repeated section and needs an entry index")]
    MissingEntry(Field),

    #[error("{section:?} entry {index} does not exist ({len} entries)")]
    EntryOutOfRange {
        section: RepeatedSection,
        index: usize,
        len: usize,
    },

    #[error("skill level '{0}' must be a whole number between 0 and 100")]
    InvalidSkillLevel(String),

    #[error("checkbox value '{0}' must be true or false")]
    InvalidCheckbox(String),

    #[error("field {0:?} is locked while 'currently working here' is checked")]
    FieldLocked(Field),
}

/// One entry of a repeated section.
#[derive(Debug, Clone, Default)]
struct FormEntry {
    values: HashMap<Field, String>,
    /// "Currently working here". Locks the end date to `PRESENT`.
    current: bool,
}

#[derive(Debug, Clone, Default)]
pub struct FormState {
    identity: HashMap<Field, String>,
    sections: HashMap<RepeatedSection, Vec<FormEntry>>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one field edit.
    ///
    /// Identity fields take `entry: None`; repeated-section fields need the
    /// index of an existing entry. On error the form is left unchanged.
    pub fn set_value(
        &mut self,
        field: Field,
        entry: Option<usize>,
        value: &str,
    ) -> Result<(), FormError> {
        let (section, index) = match (field.section(), entry) {
            (None, None) => {
                self.identity.insert(field, value.to_string());
                return Ok(());
            }
            (None, Some(_)) => return Err(FormError::UnexpectedEntry(field)),
            (Some(_), None) => return Err(FormError::MissingEntry(field)),
            (Some(section), Some(index)) => (section, index),
        };

        let entry = self.entry_mut(section, index)?;
        match field {
            Field::SkillLevel => {
                let level = parse_skill_level(value)?;
                entry.values.insert(field, level.to_string());
            }
            Field::ExpCurrent => {
                let current = parse_checkbox(value)?;
                if current {
                    entry.values.insert(Field::ExpEnd, PRESENT.to_string());
                } else if entry.current {
                    entry.values.insert(Field::ExpEnd, String::new());
                }
                entry.current = current;
            }
            Field::ExpEnd if entry.current => return Err(FormError::FieldLocked(field)),
            _ => {
                entry.values.insert(field, value.to_string());
            }
        }
        Ok(())
    }

    /// Appends a blank entry and returns its index.
    pub fn add_entry(&mut self, section: RepeatedSection) -> usize {
        let mut entry = FormEntry::default();
        if section == RepeatedSection::Skills {
            entry
                .values
                .insert(Field::SkillLevel, SkillPreset::default().level().to_string());
        }
        let entries = self.sections.entry(section).or_default();
        entries.push(entry);
        entries.len() - 1
    }

    /// Removes an entry; later entries shift down by one.
    pub fn remove_entry(&mut self, section: RepeatedSection, index: usize) -> Result<(), FormError> {
        let entries = self.sections.entry(section).or_default();
        if index >= entries.len() {
            return Err(FormError::EntryOutOfRange {
                section,
                index,
                len: entries.len(),
            });
        }
        entries.remove(index);
        Ok(())
    }

    fn entry_mut(
        &mut self,
        section: RepeatedSection,
        index: usize,
    ) -> Result<&mut FormEntry, FormError> {
        let entries = self.sections.entry(section).or_default();
        let len = entries.len();
        entries.get_mut(index).ok_or(FormError::EntryOutOfRange {
            section,
            index,
            len,
        })
    }
}

impl EditingSurface for FormState {
    fn identity_value(&self, field: Field) -> Option<&str> {
        self.identity.get(&field).map(String::as_str)
    }

    fn entry_count(&self, section: RepeatedSection) -> usize {
        self.sections.get(&section).map_or(0, Vec::len)
    }

    fn entry_value(&self, section: RepeatedSection, index: usize, field: Field) -> Option<&str> {
        let entry = self.sections.get(&section)?.get(index)?;
        if field == Field::ExpCurrent {
            return Some(if entry.current { "true" } else { "false" });
        }
        entry.values.get(&field).map(String::as_str)
    }
}

/// Accepts a whole number in 0..=100 or a preset name (`expert`, `advanced`, ...).
fn parse_skill_level(value: &str) -> Result<u8, FormError> {
    let v = value.trim();
    if let Some(preset) = SkillPreset::from_name(v) {
        return Ok(preset.level());
    }
    match v.parse::<u8>() {
        Ok(level) if level <= 100 => Ok(level),
        _ => Err(FormError::InvalidSkillLevel(value.to_string())),
    }
}

fn parse_checkbox(value: &str) -> Result<bool, FormError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "1" => Ok(true),
        "false" | "off" | "0" | "" => Ok(false),
        _ => Err(FormError::InvalidCheckbox(value.to_string())),
    }
}
