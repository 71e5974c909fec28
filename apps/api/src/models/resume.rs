use serde::{Deserialize, Serialize};

use crate::photo::EmbeddedImage;

/// The normalized resume record passed through the whole preview pipeline.
///
/// Rebuilt from the form on every render tick. Every text field is at least an
/// empty string; the collector never leaves a key out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeModel {
    pub full_name: String,
    pub job_title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
    pub links: ProfileLinks,
    pub photo: Option<EmbeddedImage>,
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
    pub certifications: Vec<Certification>,
}

/// The four optional profile URLs. Each one is rendered independently.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileLinks {
    pub linkedin: String,
    pub github: String,
    pub portfolio: String,
    pub twitter: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub start: String,
    pub end: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub year: String,
    /// Blank when the user left the optional GPA empty.
    pub gpa: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Expected in 0..=100. Range is enforced where the form is edited, not here.
    pub level: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    /// Issuing organization and year, as one free-text line.
    pub issuer: String,
}

pub(crate) fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

impl Experience {
    /// An entry is shown only when it has a title or a company.
    pub fn is_present(&self) -> bool {
        !is_blank(&self.title) || !is_blank(&self.company)
    }
}

impl Education {
    /// An entry is shown only when it has a degree or a school.
    pub fn is_present(&self) -> bool {
        !is_blank(&self.degree) || !is_blank(&self.school)
    }
}

impl Skill {
    pub fn is_present(&self) -> bool {
        !is_blank(&self.name)
    }
}

impl Certification {
    pub fn is_present(&self) -> bool {
        !is_blank(&self.name)
    }
}

impl ProfileLinks {
    pub fn is_empty(&self) -> bool {
        is_blank(&self.linkedin)
            && is_blank(&self.github)
            && is_blank(&self.portfolio)
            && is_blank(&self.twitter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_present_with_title_only() {
        let exp = Experience {
            title: "Engineer".to_string(),
            ..Default::default()
        };
        assert!(exp.is_present());
    }

    #[test]
    fn test_experience_present_with_company_only() {
        let exp = Experience {
            company: "Analytical Engines Inc.".to_string(),
            ..Default::default()
        };
        assert!(exp.is_present());
    }

    #[test]
    fn test_experience_whitespace_only_is_absent() {
        let exp = Experience {
            title: "   ".to_string(),
            company: "\t".to_string(),
            description: "Did things".to_string(),
            ..Default::default()
        };
        assert!(!exp.is_present());
    }

    #[test]
    fn test_education_needs_degree_or_school() {
        let edu = Education {
            year: "2020".to_string(),
            gpa: "3.9".to_string(),
            ..Default::default()
        };
        assert!(!edu.is_present());

        let edu = Education {
            school: "Cambridge".to_string(),
            ..Default::default()
        };
        assert!(edu.is_present());
    }

    #[test]
    fn test_links_empty_only_when_all_blank() {
        let mut links = ProfileLinks::default();
        assert!(links.is_empty());
        links.twitter = "https://x.com/ada".to_string();
        assert!(!links.is_empty());
    }

    #[test]
    fn test_model_serializes_camel_case() {
        let model = ResumeModel {
            full_name: "Ada".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&model).unwrap();
        assert_eq!(json["fullName"], "Ada");
        assert!(json["photo"].is_null());
        assert!(json["experiences"].as_array().unwrap().is_empty());
    }
}
