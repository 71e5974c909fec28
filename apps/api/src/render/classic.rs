//! Classic: centered Georgia serif header with a ruled underline, then
//! stacked sections with grey-ruled headings.

use maud::{html, Markup};

use crate::render::content::{
    date_range, education_meta, skill_fill_style, skill_label, ResumeView, Section,
};
use crate::render::Template;
use crate::selection::{ThemeColor, Variant};

pub struct Classic;

fn heading_style(theme: &ThemeColor) -> String {
    format!(
        "color: {}; font-size: 1.5rem; border-bottom: 2px solid #bdc3c7; padding-bottom: 8px; margin-bottom: 15px;",
        theme
    )
}

impl Template for Classic {
    fn variant(&self) -> Variant {
        Variant::Classic
    }

    fn layout(&self, view: &ResumeView<'_>, theme: &ThemeColor) -> Markup {
        let h2 = heading_style(theme);

        html! {
            div style="max-width: 850px; margin: 0 auto; background: white; padding: 50px; font-family: Georgia, serif;" {
                div style=(format!("text-align: center; border-bottom: 3px solid {}; padding-bottom: 20px; margin-bottom: 30px;", theme)) {
                    img src=(view.photo()) alt="Profile"
                        style=(format!("width: 120px; height: 120px; border-radius: 50%; object-fit: cover; margin-bottom: 15px; border: 3px solid {};", theme));
                    h1 style="margin: 0 0 5px 0; font-size: 2.5rem; color: #2c3e50; font-weight: 700;" { (view.full_name) }
                    p style="margin: 0; font-size: 1.2rem; color: #7f8c8d; font-style: italic;" { (view.job_title) }
                    @if !view.contacts.is_empty() {
                        div style="margin-top: 15px; color: #555; font-size: 0.95rem;" {
                            @for contact in &view.contacts {
                                span style="margin: 0 15px;" { (contact.value) }
                            }
                        }
                    }
                }

                @if let Some(summary) = view.summary {
                    div style="margin-bottom: 30px;" data-section=(Section::Summary.marker()) {
                        h2 style=(h2) { "Professional Summary" }
                        p style="color: #555; line-height: 1.8; text-align: justify;" { (summary) }
                    }
                }

                @if !view.experiences.is_empty() {
                    div style="margin-bottom: 30px;" data-section=(Section::Experience.marker()) {
                        h2 style=(h2) { "Work Experience" }
                        @for exp in &view.experiences {
                            div style="margin-bottom: 20px;" {
                                div style="display: flex; justify-content: space-between; align-items: baseline;" {
                                    h4 style="margin: 0; font-size: 1.1rem; color: #2c3e50;" { (exp.title) }
                                    span style="color: #7f8c8d; font-size: 0.9rem;" { (date_range(exp)) }
                                }
                                p style="margin: 5px 0; color: #34495e; font-weight: 500;" { (exp.company) }
                                p style="margin: 8px 0 0 0; color: #555; line-height: 1.6;" { (exp.description) }
                            }
                        }
                    }
                }

                @if !view.education.is_empty() {
                    div style="margin-bottom: 30px;" data-section=(Section::Education.marker()) {
                        h2 style=(h2) { "Education" }
                        @for edu in &view.education {
                            div style="margin-bottom: 15px;" {
                                div style="display: flex; justify-content: space-between; align-items: baseline;" {
                                    h4 style="margin: 0; font-size: 1.05rem; color: #2c3e50;" { (edu.degree) }
                                    span style="color: #7f8c8d; font-size: 0.9rem;" { (education_meta(edu)) }
                                }
                                p style="margin: 5px 0; color: #34495e;" { (edu.school) }
                            }
                        }
                    }
                }

                @if !view.skills.is_empty() {
                    div style="margin-bottom: 30px;" data-section=(Section::Skills.marker()) {
                        h2 style=(h2) { "Skills" }
                        div style="display: grid; grid-template-columns: 1fr 1fr; gap: 10px 30px;" {
                            @for skill in &view.skills {
                                div {
                                    div style="display: flex; justify-content: space-between; font-size: 0.9rem; color: #2c3e50;" {
                                        span { (skill.name) }
                                        span style="color: #7f8c8d;" { (skill_label(skill)) }
                                    }
                                    div style="height: 6px; background: #ecf0f1; border-radius: 10px; overflow: hidden; margin-top: 4px;" {
                                        div style=(skill_fill_style(skill, theme.as_str())) {}
                                    }
                                }
                            }
                        }
                    }
                }

                @if !view.certifications.is_empty() {
                    div style="margin-bottom: 30px;" data-section=(Section::Certifications.marker()) {
                        h2 style=(h2) { "Certifications" }
                        @for cert in &view.certifications {
                            div style="margin-bottom: 10px;" {
                                strong style="color: #2c3e50;" { (cert.name) }
                                p style="margin: 3px 0 0 0; color: #7f8c8d; font-size: 0.9rem;" { (cert.issuer) }
                            }
                        }
                    }
                }

                @if !view.links.is_empty() {
                    div style="text-align: center; margin-top: 30px; padding-top: 20px; border-top: 2px solid #ecf0f1;" data-section=(Section::Links.marker()) {
                        @for link in &view.links {
                            a href=(link.href) style=(format!("color: {}; text-decoration: none; margin: 0 10px;", theme)) { (link.kind.label()) }
                        }
                    }
                }
            }
        }
    }
}
