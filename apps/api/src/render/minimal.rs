//! Minimal: light sans-serif single column, uppercase tracked headings,
//! entries on one line each. The theme color appears only as accents.

use maud::{html, Markup};

use crate::render::content::{
    date_range, education_meta, skill_fill_style, skill_label, ResumeView, Section,
};
use crate::render::Template;
use crate::selection::{ThemeColor, Variant};

pub struct Minimal;

impl Template for Minimal {
    fn variant(&self) -> Variant {
        Variant::Minimal
    }

    fn layout(&self, view: &ResumeView<'_>, theme: &ThemeColor) -> Markup {
        let h2 = format!(
            "font-size: 1.1rem; color: {}; font-weight: 600; margin-bottom: 12px; text-transform: uppercase; letter-spacing: 1px;",
            theme
        );

        html! {
            div style="max-width: 800px; margin: 0 auto; background: white; padding: 60px 50px; font-family: 'Helvetica Neue', Arial, sans-serif; line-height: 1.6;" {
                div style="display: flex; align-items: center; gap: 24px; margin-bottom: 40px;" {
                    img src=(view.photo()) alt="Profile"
                        style="width: 72px; height: 72px; border-radius: 50%; object-fit: cover; filter: grayscale(100%);";
                    div {
                        h1 style="margin: 0 0 5px 0; font-size: 2.8rem; color: #000; font-weight: 300; letter-spacing: -1px;" { (view.full_name) }
                        p style="margin: 0 0 15px 0; font-size: 1.1rem; color: #666;" { (view.job_title) }
                        @if !view.contacts.is_empty() {
                            div style="color: #666; font-size: 0.95rem;" {
                                @for (i, contact) in view.contacts.iter().enumerate() {
                                    @if i > 0 { " • " }
                                    (contact.value)
                                }
                            }
                        }
                        @if !view.links.is_empty() {
                            div style="margin-top: 8px; font-size: 0.9rem;" data-section=(Section::Links.marker()) {
                                @for link in &view.links {
                                    a href=(link.href) style=(format!("color: #000; text-decoration: none; margin-right: 15px; border-bottom: 1px solid {};", theme)) { (link.kind.label()) }
                                }
                            }
                        }
                    }
                }

                @if let Some(summary) = view.summary {
                    div style="margin-bottom: 35px;" data-section=(Section::Summary.marker()) {
                        h2 style=(h2) { "Summary" }
                        p style="margin: 0; color: #444;" { (summary) }
                    }
                }

                @if !view.experiences.is_empty() {
                    div style="margin-bottom: 35px;" data-section=(Section::Experience.marker()) {
                        h2 style=(h2) { "Experience" }
                        @for exp in &view.experiences {
                            div style="margin-bottom: 25px;" {
                                div style="display: flex; justify-content: space-between; margin-bottom: 5px;" {
                                    strong style="font-size: 1.05rem; color: #000;" { (exp.title) " - " (exp.company) }
                                    span style="color: #666; font-size: 0.9rem;" { (date_range(exp)) }
                                }
                                p style="margin: 0; color: #444; line-height: 1.7;" { (exp.description) }
                            }
                        }
                    }
                }

                @if !view.education.is_empty() {
                    div style="margin-bottom: 35px;" data-section=(Section::Education.marker()) {
                        h2 style=(h2) { "Education" }
                        @for edu in &view.education {
                            div style="margin-bottom: 15px; display: flex; justify-content: space-between;" {
                                strong style="color: #000;" { (edu.degree) " - " (edu.school) }
                                span style="color: #666; font-size: 0.9rem;" { (education_meta(edu)) }
                            }
                        }
                    }
                }

                @if !view.skills.is_empty() {
                    div style="margin-bottom: 35px;" data-section=(Section::Skills.marker()) {
                        h2 style=(h2) { "Skills" }
                        @for skill in &view.skills {
                            div style="display: grid; grid-template-columns: 180px 1fr 48px; align-items: center; gap: 12px; margin-bottom: 6px; color: #444;" {
                                span { (skill.name) }
                                div style="height: 2px; background: #eee;" {
                                    div style=(skill_fill_style(skill, theme.as_str())) {}
                                }
                                span style="color: #999; font-size: 0.85rem; text-align: right;" { (skill_label(skill)) }
                            }
                        }
                    }
                }

                @if !view.certifications.is_empty() {
                    div style="margin-bottom: 35px;" data-section=(Section::Certifications.marker()) {
                        h2 style=(h2) { "Certifications" }
                        @for cert in &view.certifications {
                            div style="margin-bottom: 8px;" {
                                strong { (cert.name) } " - " (cert.issuer)
                            }
                        }
                    }
                }
            }
        }
    }
}
