//! Modern: two columns, a theme-colored sidebar (photo, contact, skills,
//! links, certifications) beside the main column (name, summary, experience,
//! education).

use maud::{html, Markup};

use crate::render::content::{
    date_range, education_meta, skill_fill_style, skill_label, ResumeView, Section,
};
use crate::render::Template;
use crate::selection::{ThemeColor, Variant};

pub struct Modern;

impl Template for Modern {
    fn variant(&self) -> Variant {
        Variant::Modern
    }

    fn layout(&self, view: &ResumeView<'_>, theme: &ThemeColor) -> Markup {
        let sidebar_bg = format!(
            "background: linear-gradient(180deg, {} 0%, #334155 100%);",
            theme
        );
        let title_style = format!("color: {0}; border-bottom-color: {0};", theme);

        html! {
            div class="template-modern" {
                div class="template-sidebar" style=(sidebar_bg) {
                    div class="profile-img-container" {
                        img src=(view.photo()) alt="Profile Photo";
                    }

                    @if !view.contacts.is_empty() {
                        div class="template-contact" {
                            @for contact in &view.contacts {
                                div class="contact-item" title=(contact.kind.label()) { span { (contact.value) } }
                            }
                        }
                    }

                    @if !view.skills.is_empty() {
                        div data-section=(Section::Skills.marker()) {
                            div class="sidebar-section-title" { "Skills" }
                            @for skill in &view.skills {
                                div class="skill-item" {
                                    div class="skill-name" {
                                        span { (skill.name) }
                                        span { (skill_label(skill)) }
                                    }
                                    div class="skill-bar" {
                                        div class="skill-progress" style=(skill_fill_style(skill, theme.as_str())) {}
                                    }
                                }
                            }
                        }
                    }

                    @if !view.links.is_empty() {
                        div data-section=(Section::Links.marker()) {
                            div class="sidebar-section-title" { "Links" }
                            @for link in &view.links {
                                div class="contact-item" {
                                    a href=(link.href) style="color: white; text-decoration: none;" { (link.kind.label()) }
                                }
                            }
                        }
                    }

                    @if !view.certifications.is_empty() {
                        div data-section=(Section::Certifications.marker()) {
                            div class="sidebar-section-title" { "Certifications" }
                            @for cert in &view.certifications {
                                div class="mb-2" {
                                    p style="margin: 0; color: white; font-weight: 500;" { (cert.name) }
                                    p style="margin: 0; color: rgba(255,255,255,0.7); font-size: 0.85rem;" { (cert.issuer) }
                                }
                            }
                        }
                    }
                }

                div class="template-main" {
                    div class="template-name" { (view.full_name) }
                    div style="text-align: center; color: #64748b; font-size: 1.2rem; margin-bottom: 30px;" {
                        (view.job_title)
                    }

                    @if let Some(summary) = view.summary {
                        div class="template-section" data-section=(Section::Summary.marker()) {
                            div class="template-section-title" style=(title_style) { "Professional Summary" }
                            p style="color: #475569; line-height: 1.6;" { (summary) }
                        }
                    }

                    @if !view.experiences.is_empty() {
                        div class="template-section" data-section=(Section::Experience.marker()) {
                            div class="template-section-title" style=(title_style) { "Work Experience" }
                            @for exp in &view.experiences {
                                div class="mb-4" {
                                    h4 style="color: #1e293b; font-size: 1.2rem; font-weight: 600; margin-bottom: 5px;" { (exp.title) }
                                    p style="color: #64748b; font-weight: 500; margin-bottom: 5px;" { (exp.company) }
                                    p style="color: #94a3b8; font-size: 0.9rem; margin-bottom: 10px;" { (date_range(exp)) }
                                    p style="color: #475569;" { (exp.description) }
                                }
                            }
                        }
                    }

                    @if !view.education.is_empty() {
                        div class="template-section" data-section=(Section::Education.marker()) {
                            div class="template-section-title" style=(title_style) { "Education" }
                            @for edu in &view.education {
                                div class="mb-3" {
                                    h4 style="color: #1e293b; font-size: 1.1rem; font-weight: 600; margin-bottom: 5px;" { (edu.degree) }
                                    p style="color: #64748b; margin-bottom: 3px;" { (edu.school) }
                                    p style="color: #94a3b8; font-size: 0.9rem;" { (education_meta(edu)) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
