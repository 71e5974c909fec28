//! Professional: Times serif with uppercase ruled headings. Employer and
//! school names take the theme color.

use maud::{html, Markup};

use crate::render::content::{
    date_range, education_meta, skill_fill_style, skill_label, ResumeView, Section,
};
use crate::render::Template;
use crate::selection::{ThemeColor, Variant};

pub struct Professional;

fn heading_style(theme: &ThemeColor) -> String {
    format!(
        "font-size: 1.3rem; color: #1a1a1a; border-bottom: 2px solid {}; padding-bottom: 8px; margin-bottom: 15px; text-transform: uppercase; letter-spacing: 1px; font-weight: 700;",
        theme
    )
}

impl Template for Professional {
    fn variant(&self) -> Variant {
        Variant::Professional
    }

    fn layout(&self, view: &ResumeView<'_>, theme: &ThemeColor) -> Markup {
        let h2 = heading_style(theme);
        let accent = format!("color: {}; font-weight: 600;", theme);

        html! {
            div style="max-width: 850px; margin: 0 auto; background: white; padding: 50px; font-family: 'Times New Roman', Times, serif;" {
                div style=(format!("display: flex; align-items: center; gap: 30px; padding-bottom: 25px; margin-bottom: 30px; border-bottom: 4px double {};", theme)) {
                    img src=(view.photo()) alt="Profile"
                        style="width: 110px; height: 110px; object-fit: cover; border: 2px solid #1a1a1a;";
                    div {
                        h1 style="margin: 0; font-size: 2.4rem; color: #1a1a1a; text-transform: uppercase; letter-spacing: 2px;" { (view.full_name) }
                        p style=(format!("margin: 5px 0 10px 0; font-size: 1.15rem; color: {};", theme)) { (view.job_title) }
                        @if !view.contacts.is_empty() {
                            div style="color: #444; font-size: 0.95rem;" {
                                @for (i, contact) in view.contacts.iter().enumerate() {
                                    @if i > 0 { " | " }
                                    (contact.value)
                                }
                            }
                        }
                    }
                }

                @if let Some(summary) = view.summary {
                    div style="margin-bottom: 28px;" data-section=(Section::Summary.marker()) {
                        h2 style=(h2) { "Professional Summary" }
                        p style="margin: 0; color: #333; line-height: 1.7; text-align: justify;" { (summary) }
                    }
                }

                @if !view.experiences.is_empty() {
                    div style="margin-bottom: 28px;" data-section=(Section::Experience.marker()) {
                        h2 style=(h2) { "Professional Experience" }
                        @for exp in &view.experiences {
                            div style="margin-bottom: 20px;" {
                                div style="display: flex; justify-content: space-between; align-items: baseline;" {
                                    h4 style="margin: 0; font-size: 1.1rem; color: #1a1a1a;" { (exp.title) }
                                    span style="color: #666; font-size: 0.9rem;" { (date_range(exp)) }
                                }
                                p style=(format!("margin: 4px 0; {}", accent)) { (exp.company) }
                                p style="margin: 6px 0 0 0; color: #333; line-height: 1.6;" { (exp.description) }
                            }
                        }
                    }
                }

                @if !view.education.is_empty() {
                    div style="margin-bottom: 28px;" data-section=(Section::Education.marker()) {
                        h2 style=(h2) { "Education" }
                        @for edu in &view.education {
                            div style="margin-bottom: 14px;" {
                                div style="display: flex; justify-content: space-between; align-items: baseline;" {
                                    h4 style="margin: 0; font-size: 1.05rem; color: #1a1a1a;" { (edu.degree) }
                                    span style="color: #666; font-size: 0.9rem;" { (education_meta(edu)) }
                                }
                                p style=(format!("margin: 4px 0; {}", accent)) { (edu.school) }
                            }
                        }
                    }
                }

                @if !view.skills.is_empty() {
                    div style="margin-bottom: 28px;" data-section=(Section::Skills.marker()) {
                        h2 style=(h2) { "Skills" }
                        div style="display: grid; grid-template-columns: 1fr 1fr; gap: 8px 30px;" {
                            @for skill in &view.skills {
                                div {
                                    div style="display: flex; justify-content: space-between; font-size: 0.95rem; color: #1a1a1a;" {
                                        span { (skill.name) }
                                        span style="color: #666;" { (skill_label(skill)) }
                                    }
                                    div style="height: 5px; background: #e5e5e5; margin-top: 3px;" {
                                        div style=(skill_fill_style(skill, theme.as_str())) {}
                                    }
                                }
                            }
                        }
                    }
                }

                @if !view.certifications.is_empty() {
                    div style="margin-bottom: 28px;" data-section=(Section::Certifications.marker()) {
                        h2 style=(h2) { "Certifications" }
                        @for cert in &view.certifications {
                            div style="margin-bottom: 8px;" {
                                strong style="color: #1a1a1a;" { (cert.name) }
                                span style="color: #666;" { ", " (cert.issuer) }
                            }
                        }
                    }
                }

                @if !view.links.is_empty() {
                    div style="border-top: 1px solid #ccc; padding-top: 15px; text-align: center;" data-section=(Section::Links.marker()) {
                        @for (i, link) in view.links.iter().enumerate() {
                            @if i > 0 { " | " }
                            a href=(link.href) style=(format!("color: {}; text-decoration: none;", theme)) { (link.kind.label()) }
                        }
                    }
                }
            }
        }
    }
}
