//! Shared content rules for every template variant.
//!
//! `ResumeView` is built once per render and is the only thing a variant sees.
//! Section suppression, entry filtering, ordering, the photo fallback and the
//! text formatting of dates and grades are all decided here, so swapping the
//! variant can change how the resume looks but never what it says.

use std::borrow::Cow;

use crate::models::resume::{is_blank, Certification, Education, Experience, ResumeModel, Skill};
use crate::photo::placeholder_data_uri;

/// A named content group subject to suppression.
///
/// Every emitted section container carries `data-section="<marker>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Summary,
    Experience,
    Education,
    Skills,
    Certifications,
    Links,
}

impl Section {
    pub fn marker(&self) -> &'static str {
        match self {
            Section::Summary => "summary",
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Skills => "skills",
            Section::Certifications => "certifications",
            Section::Links => "links",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    Phone,
    Location,
}

impl ContactKind {
    pub fn label(&self) -> &'static str {
        match self {
            ContactKind::Email => "Email",
            ContactKind::Phone => "Phone",
            ContactKind::Location => "Location",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactItem<'a> {
    pub kind: ContactKind,
    pub value: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    LinkedIn,
    GitHub,
    Portfolio,
    Twitter,
}

impl LinkKind {
    pub fn label(&self) -> &'static str {
        match self {
            LinkKind::LinkedIn => "LinkedIn",
            LinkKind::GitHub => "GitHub",
            LinkKind::Portfolio => "Portfolio",
            LinkKind::Twitter => "Twitter",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkItem<'a> {
    pub kind: LinkKind,
    pub href: &'a str,
}

/// The filtered, ordered view of a resume that every variant renders from.
#[derive(Debug, Clone)]
pub struct ResumeView<'a> {
    pub full_name: &'a str,
    pub job_title: &'a str,
    /// Non-blank contact details, in email, phone, location order.
    pub contacts: Vec<ContactItem<'a>>,
    pub summary: Option<&'a str>,
    /// Non-blank profile links. Empty means the link block is suppressed.
    pub links: Vec<LinkItem<'a>>,
    pub experiences: Vec<&'a Experience>,
    pub education: Vec<&'a Education>,
    pub skills: Vec<&'a Skill>,
    pub certifications: Vec<&'a Certification>,
    /// The embedded photo, or the inline placeholder when there is none.
    pub photo_src: Cow<'a, str>,
}

impl<'a> ResumeView<'a> {
    pub fn new(model: &'a ResumeModel) -> Self {
        let contacts = [
            (ContactKind::Email, model.email.as_str()),
            (ContactKind::Phone, model.phone.as_str()),
            (ContactKind::Location, model.location.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !is_blank(value))
        .map(|(kind, value)| ContactItem { kind, value })
        .collect();

        let links = [
            (LinkKind::LinkedIn, model.links.linkedin.as_str()),
            (LinkKind::GitHub, model.links.github.as_str()),
            (LinkKind::Portfolio, model.links.portfolio.as_str()),
            (LinkKind::Twitter, model.links.twitter.as_str()),
        ]
        .into_iter()
        .filter(|(_, href)| !is_blank(href))
        .map(|(kind, href)| LinkItem { kind, href })
        .collect();

        let photo_src = match &model.photo {
            Some(photo) => Cow::Borrowed(photo.as_str()),
            None => Cow::Owned(placeholder_data_uri()),
        };

        ResumeView {
            full_name: &model.full_name,
            job_title: &model.job_title,
            contacts,
            summary: Some(model.summary.as_str()).filter(|s| !is_blank(s)),
            links,
            experiences: model.experiences.iter().filter(|e| e.is_present()).collect(),
            education: model.education.iter().filter(|e| e.is_present()).collect(),
            skills: model.skills.iter().filter(|s| s.is_present()).collect(),
            certifications: model
                .certifications
                .iter()
                .filter(|c| c.is_present())
                .collect(),
            photo_src,
        }
    }

    pub fn photo(&self) -> &str {
        &self.photo_src
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Text formatting shared by all variants
// ────────────────────────────────────────────────────────────────────────────

/// `"2020-01 - Present"`.
pub fn date_range(exp: &Experience) -> String {
    format!("{} - {}", exp.start, exp.end)
}

/// `"2019 | GPA: 3.8"`, or just the year when no GPA was given.
pub fn education_meta(edu: &Education) -> String {
    if is_blank(&edu.gpa) {
        edu.year.clone()
    } else {
        format!("{} | GPA: {}", edu.year, edu.gpa)
    }
}

/// Bar width in percent. Levels above 100 are drawn full rather than overflowing.
pub fn skill_percent(skill: &Skill) -> u8 {
    skill.level.min(100)
}

pub fn skill_label(skill: &Skill) -> String {
    format!("{}%", skill.level)
}

/// CSS for a bar filled to the skill's level in the theme color.
pub fn skill_fill_style(skill: &Skill, color: &str) -> String {
    format!(
        "width: {}%; height: 100%; background: {}; border-radius: 10px;",
        skill_percent(skill),
        color
    )
}
