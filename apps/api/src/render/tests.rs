use proptest::prelude::*;

use super::content::Section;
use super::*;
use crate::models::resume::{Certification, Education, Experience, ProfileLinks, Skill};
use crate::photo::{placeholder_data_uri, EmbeddedImage};

fn marker(section: Section) -> String {
    format!("data-section=\"{}\"", section.marker())
}

fn full_model() -> ResumeModel {
    ResumeModel {
        full_name: "Grace Hopper".to_string(),
        job_title: "Rear Admiral".to_string(),
        email: "grace@navy.mil".to_string(),
        phone: "555-0100".to_string(),
        location: "Arlington, VA".to_string(),
        summary: "Compiler pioneer.".to_string(),
        links: ProfileLinks {
            linkedin: "https://linkedin.com/in/grace".to_string(),
            github: "https://github.com/grace".to_string(),
            portfolio: "https://grace.dev".to_string(),
            twitter: "https://x.com/grace".to_string(),
        },
        photo: None,
        experiences: vec![
            Experience {
                title: "Programmer".to_string(),
                company: "Eckert-Mauchly".to_string(),
                start: "1949".to_string(),
                end: "1952".to_string(),
                description: "UNIVAC I".to_string(),
            },
            Experience {
                title: "Director".to_string(),
                company: "Remington Rand".to_string(),
                start: "1952".to_string(),
                end: "1966".to_string(),
                description: "FLOW-MATIC".to_string(),
            },
        ],
        education: vec![
            Education {
                degree: "PhD Mathematics".to_string(),
                school: "Yale".to_string(),
                year: "1934".to_string(),
                gpa: "4.0".to_string(),
            },
            Education {
                degree: "BA Mathematics".to_string(),
                school: "Vassar College".to_string(),
                year: "1928".to_string(),
                gpa: String::new(),
            },
        ],
        skills: vec![
            Skill {
                name: "COBOL".to_string(),
                level: 95,
            },
            Skill {
                name: "Assembly".to_string(),
                level: 80,
            },
        ],
        certifications: vec![
            Certification {
                name: "Naval Reserve".to_string(),
                issuer: "US Navy, 1943".to_string(),
            },
            Certification {
                name: "Computer Sciences Man of the Year".to_string(),
                issuer: "DPMA, 1969".to_string(),
            },
        ],
    }
}

fn ada_model() -> ResumeModel {
    ResumeModel {
        full_name: "Ada Lovelace".to_string(),
        experiences: vec![Experience {
            title: "Engineer".to_string(),
            company: "Analytical Engines Inc.".to_string(),
            start: "2020-01".to_string(),
            end: "Present".to_string(),
            description: String::new(),
        }],
        ..Default::default()
    }
}

fn theme() -> ThemeColor {
    ThemeColor::default()
}

#[test]
fn test_full_model_emits_every_section_in_every_variant() {
    let model = full_model();
    for variant in Variant::ALL {
        let html = render(&model, variant, &theme()).into_string();
        for section in [
            Section::Summary,
            Section::Experience,
            Section::Education,
            Section::Skills,
            Section::Certifications,
            Section::Links,
        ] {
            assert!(
                html.contains(&marker(section)),
                "{variant} is missing {section:?}"
            );
        }
    }
}

#[test]
fn test_empty_sections_are_suppressed_in_every_variant() {
    let model = ResumeModel {
        summary: "  \n ".to_string(),
        experiences: vec![Experience::default(), Experience::default()],
        skills: vec![Skill {
            name: "   ".to_string(),
            level: 75,
        }],
        ..full_model()
    };
    let model = ResumeModel {
        education: vec![],
        certifications: vec![],
        links: ProfileLinks::default(),
        ..model
    };

    for variant in Variant::ALL {
        let html = render(&model, variant, &theme()).into_string();
        for section in [
            Section::Summary,
            Section::Experience,
            Section::Education,
            Section::Skills,
            Section::Certifications,
            Section::Links,
        ] {
            assert!(
                !html.contains(&marker(section)),
                "{variant} rendered suppressed {section:?}"
            );
        }
    }
}

#[test]
fn test_minimal_single_experience_example() {
    let html = render(&ada_model(), Variant::Minimal, &theme()).into_string();
    assert!(html.contains("Ada Lovelace"));
    assert!(html.contains("Engineer - Analytical Engines Inc."));
    assert!(html.contains("2020-01 - Present"));
    assert!(html.contains(&marker(Section::Experience)));
    for section in [
        Section::Education,
        Section::Skills,
        Section::Certifications,
        Section::Summary,
        Section::Links,
    ] {
        assert!(!html.contains(&marker(section)));
    }
}

#[test]
fn test_entry_order_preserved_in_every_variant() {
    let model = full_model();
    for variant in Variant::ALL {
        let html = render(&model, variant, &theme()).into_string();
        let first = html.find("Eckert-Mauchly").unwrap();
        let second = html.find("Remington Rand").unwrap();
        assert!(first < second, "{variant} reordered experience");

        let cobol = html.find("COBOL").unwrap();
        let asm = html.find("Assembly").unwrap();
        assert!(cobol < asm, "{variant} reordered skills");

        let yale = html.find("Yale").unwrap();
        let vassar = html.find("Vassar College").unwrap();
        assert!(yale < vassar, "{variant} reordered education");

        let navy = html.find("Naval Reserve").unwrap();
        let dpma = html.find("Computer Sciences Man of the Year").unwrap();
        assert!(navy < dpma, "{variant} reordered certifications");
    }
}

#[test]
fn test_every_variant_shows_the_same_content() {
    let model = full_model();
    let needles = [
        "Grace Hopper",
        "Rear Admiral",
        "grace@navy.mil",
        "555-0100",
        "Arlington, VA",
        "Compiler pioneer.",
        "Programmer",
        "UNIVAC I",
        "1949 - 1952",
        "PhD Mathematics",
        "Yale",
        "1934 | GPA: 4.0",
        "COBOL",
        "95%",
        "Naval Reserve",
        "US Navy, 1943",
        "https://github.com/grace",
        "https://x.com/grace",
    ];
    for variant in Variant::ALL {
        let html = render(&model, variant, &theme()).into_string();
        for needle in needles {
            assert!(html.contains(needle), "{variant} is missing {needle:?}");
        }
    }
}

#[test]
fn test_rendering_is_deterministic() {
    let model = full_model();
    for variant in Variant::ALL {
        let a = render(&model, variant, &theme());
        let b = render(&model, variant, &theme());
        assert_eq!(a, b);
    }
}

#[test]
fn test_empty_model_renders_in_every_variant() {
    let model = ResumeModel::default();
    for variant in Variant::ALL {
        let html = render(&model, variant, &theme()).into_string();
        assert!(html.starts_with("<div class=\"cv-template\""));
        assert!(html.contains(&format!("data-template=\"{}\"", variant.as_str())));
        assert!(html.contains(&placeholder_data_uri()));
        assert!(!html.contains("data-section"));
    }
}

#[test]
fn test_theme_color_reaches_every_variant() {
    let model = full_model();
    let color = ThemeColor::parse("#A1B2C3").unwrap();
    for variant in Variant::ALL {
        let html = render(&model, variant, &color).into_string();
        assert!(html.contains("#a1b2c3"), "{variant} ignored the theme color");
    }
}

#[test]
fn test_uploaded_photo_replaces_placeholder() {
    let png = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 13];
    let model = ResumeModel {
        photo: Some(EmbeddedImage::from_upload(&png, 1024).unwrap()),
        ..ada_model()
    };
    for variant in Variant::ALL {
        let html = render(&model, variant, &theme()).into_string();
        assert!(html.contains("src=\"data:image/png;base64,"));
        assert!(!html.contains(&placeholder_data_uri()));
    }
}

#[test]
fn test_out_of_range_skill_level_is_drawn_full() {
    let model = ResumeModel {
        skills: vec![Skill {
            name: "Overflow".to_string(),
            level: 255,
        }],
        ..Default::default()
    };
    for variant in Variant::ALL {
        let html = render(&model, variant, &theme()).into_string();
        assert!(html.contains("255%"));
        assert!(!html.contains("width: 255%"));
    }
}

#[test]
fn test_user_text_is_escaped() {
    let model = ResumeModel {
        full_name: "<script>alert(1)</script>".to_string(),
        summary: "Tom & Jerry \"quoted\"".to_string(),
        links: ProfileLinks {
            github: "\"><img onerror=x>".to_string(),
            ..Default::default()
        },
        ..Default::default()
    };
    for variant in Variant::ALL {
        let html = render(&model, variant, &theme()).into_string();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("Tom &amp; Jerry"));
        assert!(!html.contains("<img onerror"));
    }
}

#[test]
fn test_template_for_matches_variant() {
    for variant in Variant::ALL {
        assert_eq!(template_for(variant).variant(), variant);
    }
}

fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), Just("   ".to_string()), "[a-zA-Z<>&\" ]{1,12}"]
}

fn arb_model() -> impl Strategy<Value = ResumeModel> {
    (
        arb_text(),
        arb_text(),
        prop::collection::vec((arb_text(), arb_text()), 0..4),
        prop::collection::vec((arb_text(), any::<u8>()), 0..4),
    )
        .prop_map(|(full_name, summary, exps, skills)| ResumeModel {
            full_name,
            summary,
            experiences: exps
                .into_iter()
                .map(|(title, company)| Experience {
                    title,
                    company,
                    ..Default::default()
                })
                .collect(),
            skills: skills
                .into_iter()
                .map(|(name, level)| Skill { name, level })
                .collect(),
            ..Default::default()
        })
}

fn arb_variant() -> impl Strategy<Value = Variant> {
    prop::sample::select(Variant::ALL.to_vec())
}

/// Model whose entries carry unique numbered tokens, so their positions in
/// the output can be compared.
fn numbered_model(counts: [usize; 4]) -> ResumeModel {
    ResumeModel {
        experiences: (0..counts[0])
            .map(|i| Experience {
                company: format!("Employer{i}Z"),
                ..Default::default()
            })
            .collect(),
        education: (0..counts[1])
            .map(|i| Education {
                school: format!("School{i}Z"),
                ..Default::default()
            })
            .collect(),
        skills: (0..counts[2])
            .map(|i| Skill {
                name: format!("Skill{i}Z"),
                level: 50,
            })
            .collect(),
        certifications: (0..counts[3])
            .map(|i| Certification {
                name: format!("Cert{i}Z"),
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    }
}

fn in_input_order(html: &str, prefix: &str, count: usize) -> bool {
    let positions: Vec<Option<usize>> = (0..count)
        .map(|i| html.find(&format!("{prefix}{i}Z")))
        .collect();
    positions.iter().all(Option::is_some) && positions.windows(2).all(|w| w[0] < w[1])
}

proptest! {
    #[test]
    fn prop_entries_keep_input_order(
        counts in prop::array::uniform4(0usize..6),
        variant in arb_variant(),
    ) {
        let html = render(&numbered_model(counts), variant, &theme()).into_string();
        prop_assert!(in_input_order(&html, "Employer", counts[0]));
        prop_assert!(in_input_order(&html, "School", counts[1]));
        prop_assert!(in_input_order(&html, "Skill", counts[2]));
        prop_assert!(in_input_order(&html, "Cert", counts[3]));
    }

    #[test]
    fn prop_section_marker_iff_present_entries(model in arb_model(), variant in arb_variant()) {
        let html = render(&model, variant, &theme()).into_string();
        let has_exp = model.experiences.iter().any(|e| e.is_present());
        let has_skill = model.skills.iter().any(|s| s.is_present());
        let has_summary = !model.summary.trim().is_empty();
        prop_assert_eq!(html.contains(&marker(Section::Experience)), has_exp);
        prop_assert_eq!(html.contains(&marker(Section::Skills)), has_skill);
        prop_assert_eq!(html.contains(&marker(Section::Summary)), has_summary);
    }

    #[test]
    fn prop_render_is_pure(model in arb_model(), variant in arb_variant()) {
        prop_assert_eq!(
            render(&model, variant, &theme()),
            render(&model, variant, &theme())
        );
    }
}
