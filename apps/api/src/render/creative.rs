//! Creative: gradient banner header with decorative circles, accent-bar
//! headings, and a two-column grid for education and certifications.

use maud::{html, Markup};

use crate::render::content::{
    date_range, education_meta, skill_label, skill_percent, ResumeView, Section,
};
use crate::render::Template;
use crate::selection::{ThemeColor, Variant};

pub struct Creative;

impl Template for Creative {
    fn variant(&self) -> Variant {
        Variant::Creative
    }

    fn layout(&self, view: &ResumeView<'_>, theme: &ThemeColor) -> Markup {
        let accent_bar = format!(
            "width: 6px; height: 30px; background: {}; border-radius: 3px;",
            theme
        );
        let h2_large = format!(
            "color: {}; font-size: 1.8rem; font-weight: 700; margin-bottom: 20px; display: flex; align-items: center; gap: 10px;",
            theme
        );
        let h2_small = format!(
            "color: {}; font-size: 1.5rem; font-weight: 700; margin-bottom: 20px;",
            theme
        );

        html! {
            div style="max-width: 900px; margin: 0 auto; background: white; padding: 0; font-family: 'Segoe UI', Arial, sans-serif;" {
                div style=(format!("background: linear-gradient(135deg, {} 0%, #6b21a8 100%); color: white; padding: 60px 50px; position: relative; overflow: hidden;", theme)) {
                    div style="position: absolute; top: -50px; right: -50px; width: 200px; height: 200px; background: rgba(255,255,255,0.1); border-radius: 50%;" {}
                    div style="position: absolute; bottom: -30px; left: -30px; width: 150px; height: 150px; background: rgba(255,255,255,0.1); border-radius: 50%;" {}
                    img src=(view.photo()) alt="Profile"
                        style="width: 120px; height: 120px; border-radius: 50%; object-fit: cover; border: 5px solid white; margin-bottom: 20px; box-shadow: 0 8px 20px rgba(0,0,0,0.3);";
                    h1 style="margin: 0; font-size: 3rem; font-weight: 800; position: relative; z-index: 1;" { (view.full_name) }
                    p style="margin: 10px 0 20px 0; font-size: 1.4rem; font-weight: 300; position: relative; z-index: 1;" { (view.job_title) }
                    @if !view.contacts.is_empty() {
                        div style="display: flex; gap: 20px; flex-wrap: wrap; position: relative; z-index: 1;" {
                            @for contact in &view.contacts {
                                span { (contact.value) }
                            }
                        }
                    }
                }

                div style="padding: 50px;" {
                    @if let Some(summary) = view.summary {
                        div style="margin-bottom: 40px;" data-section=(Section::Summary.marker()) {
                            h2 style=(h2_large) {
                                span style=(accent_bar) {}
                                "About Me"
                            }
                            p style="color: #444; line-height: 1.8; font-size: 1.05rem;" { (summary) }
                        }
                    }

                    @if !view.experiences.is_empty() {
                        div style="margin-bottom: 40px;" data-section=(Section::Experience.marker()) {
                            h2 style=(h2_large) {
                                span style=(accent_bar) {}
                                "Experience"
                            }
                            @for exp in &view.experiences {
                                div style=(format!("margin-bottom: 25px; padding-left: 20px; border-left: 4px solid {};", theme)) {
                                    h4 style=(format!("margin: 0; font-size: 1.2rem; color: {}; font-weight: 700;", theme)) { (exp.title) }
                                    p style="margin: 5px 0; color: #555; font-weight: 600;" { (exp.company) }
                                    p style="margin: 5px 0; color: #888; font-size: 0.9rem; font-style: italic;" { (date_range(exp)) }
                                    p style="margin: 10px 0 0 0; color: #444; line-height: 1.7;" { (exp.description) }
                                }
                            }
                        }
                    }

                    @if !view.education.is_empty() || !view.certifications.is_empty() {
                        div style="display: grid; grid-template-columns: 1fr 1fr; gap: 40px;" {
                            @if !view.education.is_empty() {
                                div data-section=(Section::Education.marker()) {
                                    h2 style=(h2_small) { "Education" }
                                    @for edu in &view.education {
                                        div style="margin-bottom: 20px;" {
                                            h4 style=(format!("margin: 0; font-size: 1.1rem; color: {}; font-weight: 700;", theme)) { (edu.degree) }
                                            p style="margin: 5px 0; color: #555; font-weight: 600;" { (edu.school) }
                                            p style="margin: 3px 0; color: #888; font-size: 0.9rem;" { (education_meta(edu)) }
                                        }
                                    }
                                }
                            }

                            @if !view.certifications.is_empty() {
                                div data-section=(Section::Certifications.marker()) {
                                    h2 style=(h2_small) { "Certifications" }
                                    @for cert in &view.certifications {
                                        div style="margin-bottom: 12px;" {
                                            strong style=(format!("color: {};", theme)) { "✓ " (cert.name) }
                                            p style="margin: 3px 0 0 0; color: #666; font-size: 0.9rem;" { (cert.issuer) }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    @if !view.skills.is_empty() {
                        div style="margin-top: 40px;" data-section=(Section::Skills.marker()) {
                            h2 style=(h2_small) { "Skills" }
                            div {
                                @for skill in &view.skills {
                                    // Pill whose background fills left-to-right up to the level.
                                    span style=(format!(
                                        "display: inline-block; background: linear-gradient(90deg, {0} {1}%, #e9d5ff {1}%); color: #1f1235; padding: 8px 16px; margin: 5px; border-radius: 20px; font-size: 0.9rem; font-weight: 500;",
                                        theme,
                                        skill_percent(skill)
                                    )) {
                                        (skill.name) " " (skill_label(skill))
                                    }
                                }
                            }
                        }
                    }

                    @if !view.links.is_empty() {
                        div style=(format!("margin-top: 40px; padding-top: 30px; border-top: 3px solid {};", theme)) data-section=(Section::Links.marker()) {
                            h3 style=(format!("color: {}; margin-bottom: 15px;", theme)) { "Connect With Me" }
                            div style="display: flex; gap: 20px; flex-wrap: wrap;" {
                                @for link in &view.links {
                                    a href=(link.href) style=(format!("color: {}; text-decoration: none; font-weight: 600;", theme)) { (link.kind.label()) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
