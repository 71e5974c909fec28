use serde::{Deserialize, Serialize};

/// Every editable field on the resume form, named as the client names its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FullName,
    JobTitle,
    Email,
    Phone,
    Location,
    Summary,
    Linkedin,
    Github,
    Portfolio,
    Twitter,

    ExpTitle,
    ExpCompany,
    ExpStart,
    ExpEnd,
    ExpDesc,
    /// "Currently working here" checkbox.
    ExpCurrent,

    EduDegree,
    EduSchool,
    EduYear,
    #[serde(rename = "eduGPA")]
    EduGpa,

    SkillName,
    SkillLevel,

    CertName,
    CertOrg,
}

/// The form sections whose entries the user can add and remove.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatedSection {
    Experience,
    Education,
    Skills,
    Certifications,
}

impl RepeatedSection {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepeatedSection::Experience => "experience",
            RepeatedSection::Education => "education",
            RepeatedSection::Skills => "skills",
            RepeatedSection::Certifications => "certifications",
        }
    }
}

impl Field {
    /// The repeated section this field belongs to, or `None` for identity fields.
    pub fn section(&self) -> Option<RepeatedSection> {
        use Field::*;
        match self {
            FullName | JobTitle | Email | Phone | Location | Summary | Linkedin | Github
            | Portfolio | Twitter => None,
            ExpTitle | ExpCompany | ExpStart | ExpEnd | ExpDesc | ExpCurrent => {
                Some(RepeatedSection::Experience)
            }
            EduDegree | EduSchool | EduYear | EduGpa => Some(RepeatedSection::Education),
            SkillName | SkillLevel => Some(RepeatedSection::Skills),
            CertName | CertOrg => Some(RepeatedSection::Certifications),
        }
    }

    /// Discrete controls (checkbox, select) whose changes render immediately
    /// instead of waiting out the debounce window.
    pub fn is_discrete(&self) -> bool {
        matches!(self, Field::ExpCurrent | Field::SkillLevel)
    }
}

/// Skill level choices offered by the form's level picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillPreset {
    Expert,
    #[default]
    Advanced,
    Intermediate,
    Beginner,
}

impl SkillPreset {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "expert" => Some(SkillPreset::Expert),
            "advanced" => Some(SkillPreset::Advanced),
            "intermediate" => Some(SkillPreset::Intermediate),
            "beginner" => Some(SkillPreset::Beginner),
            _ => None,
        }
    }

    pub fn level(&self) -> u8 {
        match self {
            SkillPreset::Expert => 90,
            SkillPreset::Advanced => 75,
            SkillPreset::Intermediate => 60,
            SkillPreset::Beginner => 40,
        }
    }
}
