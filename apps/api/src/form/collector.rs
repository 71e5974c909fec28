//! Data collector. Assembles a `ResumeModel` from the current form values.
//!
//! Pure and uncached: every render tick calls `collect` again. Entries are
//! gathered positionally and nothing is filtered out here; deciding what is
//! shown is the renderer's job.

use crate::form::fields::{Field, RepeatedSection};
use crate::models::resume::{
    Certification, Education, Experience, ProfileLinks, ResumeModel, Skill,
};
use crate::photo::EmbeddedImage;

/// Read access to whatever holds the current form values.
pub trait EditingSurface {
    fn identity_value(&self, field: Field) -> Option<&str>;

    fn entry_count(&self, section: RepeatedSection) -> usize;

    fn entry_value(&self, section: RepeatedSection, index: usize, field: Field) -> Option<&str>;
}

/// Builds a fresh `ResumeModel`. Missing values become empty strings; a
/// skill level that cannot be read becomes 0.
pub fn collect<S: EditingSurface + ?Sized>(surface: &S, photo: Option<&EmbeddedImage>) -> ResumeModel {
    let id = |field: Field| surface.identity_value(field).unwrap_or_default().to_string();

    ResumeModel {
        full_name: id(Field::FullName),
        job_title: id(Field::JobTitle),
        email: id(Field::Email),
        phone: id(Field::Phone),
        location: id(Field::Location),
        summary: id(Field::Summary),
        links: ProfileLinks {
            linkedin: id(Field::Linkedin),
            github: id(Field::Github),
            portfolio: id(Field::Portfolio),
            twitter: id(Field::Twitter),
        },
        photo: photo.cloned(),
        experiences: entries(surface, RepeatedSection::Experience, |get| Experience {
            title: get(Field::ExpTitle),
            company: get(Field::ExpCompany),
            start: get(Field::ExpStart),
            end: get(Field::ExpEnd),
            description: get(Field::ExpDesc),
        }),
        education: entries(surface, RepeatedSection::Education, |get| Education {
            degree: get(Field::EduDegree),
            school: get(Field::EduSchool),
            year: get(Field::EduYear),
            gpa: get(Field::EduGpa),
        }),
        skills: entries(surface, RepeatedSection::Skills, |get| Skill {
            name: get(Field::SkillName),
            level: get(Field::SkillLevel).trim().parse().unwrap_or(0),
        }),
        certifications: entries(surface, RepeatedSection::Certifications, |get| {
            Certification {
                name: get(Field::CertName),
                issuer: get(Field::CertOrg),
            }
        }),
    }
}

/// Maps every entry of `section`, in form order, through `build`.
fn entries<S, T, F>(surface: &S, section: RepeatedSection, build: F) -> Vec<T>
where
    S: EditingSurface + ?Sized,
    F: Fn(&dyn Fn(Field) -> String) -> T,
{
    (0..surface.entry_count(section))
        .map(|index| {
            let get = |field: Field| {
                surface
                    .entry_value(section, index, field)
                    .unwrap_or_default()
                    .to_string()
            };
            build(&get)
        })
        .collect()
}
