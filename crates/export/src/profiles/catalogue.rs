//! The fixed registry of nine ATS profiles.
//!
//! Flag rationale worth keeping straight: `taleo` models a legacy parser
//! (compact layout, no bold/italic, 70-char lines, 10pt); `workday` models a
//! semantic-aware parser (bold ok, italic not). `personio` and `softgarden`
//! are DACH-region profiles with German headings and `DD.MM.YYYY` dates.

use once_cell::sync::Lazy;

use super::{AtsProfile, ProfileFeatures, SectionHeadings};
use crate::dates::DateStyle;

fn english_headings() -> SectionHeadings {
    SectionHeadings {
        summary: "Professional Summary".to_string(),
        experience: "Professional Experience".to_string(),
        education: "Education".to_string(),
        skills: "Technical Skills".to_string(),
        certifications: "Certifications".to_string(),
        languages: "Languages".to_string(),
        projects: "Notable Projects".to_string(),
    }
}

fn german_headings() -> SectionHeadings {
    SectionHeadings {
        summary: "Berufsprofil".to_string(),
        experience: "Berufserfahrung".to_string(),
        education: "Ausbildung".to_string(),
        skills: "Technische Kenntnisse".to_string(),
        certifications: "Zertifizierungen".to_string(),
        languages: "Sprachen".to_string(),
        projects: "Ausgewählte Projekte".to_string(),
    }
}

/// Standard feature set most modern parsers tolerate: bullets, bold,
/// headers; italics off unless a profile opts in.
fn default_features(font: &str) -> ProfileFeatures {
    ProfileFeatures {
        allow_bullet_points: true,
        allow_bold_text: true,
        allow_italic_text: false,
        allow_section_headers: true,
        max_line_length: None,
        preferred_font: font.to_string(),
        font_size: 11.0,
        compact_layout: None,
    }
}

fn universal() -> AtsProfile {
    AtsProfile {
        id: "universal".to_string(),
        name: "Universal".to_string(),
        description: "General purpose format. Compatible with most ATS systems.".to_string(),
        doc_url: None,
        region: None,
        date_format: DateStyle::MonthNameYyyy,
        section_headings: english_headings(),
        features: default_features("Arial"),
    }
}

fn greenhouse() -> AtsProfile {
    AtsProfile {
        id: "greenhouse".to_string(),
        name: "Greenhouse".to_string(),
        description: "Modern ATS popular with tech companies. Handles formatting well.".to_string(),
        doc_url: Some(
            "https://support.greenhouse.io/hc/en-us/articles/360052218132".to_string(),
        ),
        region: None,
        date_format: DateStyle::MonthNameYyyy,
        section_headings: english_headings(),
        features: ProfileFeatures {
            allow_italic_text: true,
            ..default_features("Arial")
        },
    }
}

fn lever() -> AtsProfile {
    AtsProfile {
        id: "lever".to_string(),
        name: "Lever".to_string(),
        description: "Modern startup ATS. Single-column layout, no tables.".to_string(),
        doc_url: Some("https://help.lever.co/hc/en-us/articles/20087345054749".to_string()),
        region: None,
        date_format: DateStyle::MonthNameYyyy,
        section_headings: english_headings(),
        features: ProfileFeatures {
            allow_italic_text: true,
            ..default_features("Calibri")
        },
    }
}

fn workday() -> AtsProfile {
    AtsProfile {
        id: "workday".to_string(),
        name: "Workday".to_string(),
        description: "Enterprise ATS with AI/semantic parsing. Handles modern formatting."
            .to_string(),
        doc_url: Some(
            "https://www.workday.com/en-us/topics/hr/applicant-tracking-system.html".to_string(),
        ),
        region: None,
        date_format: DateStyle::MmSlashYyyy,
        section_headings: english_headings(),
        features: default_features("Arial"),
    }
}

fn taleo() -> AtsProfile {
    AtsProfile {
        id: "taleo".to_string(),
        name: "Taleo (Oracle)".to_string(),
        description: "Legacy enterprise system. Conservative formatting recommended.".to_string(),
        doc_url: Some(
            "https://docs.oracle.com/en/cloud/saas/taleo-enterprise/23b/otcug/c-plaintextresumeparsingmobile.html"
                .to_string(),
        ),
        region: None,
        date_format: DateStyle::MmSlashYyyy,
        section_headings: english_headings(),
        features: ProfileFeatures {
            allow_bold_text: false,
            max_line_length: Some(70),
            font_size: 10.0,
            compact_layout: Some(true),
            ..default_features("Arial")
        },
    }
}

fn icims() -> AtsProfile {
    AtsProfile {
        id: "icims".to_string(),
        name: "iCIMS".to_string(),
        description: "Mid-market ATS. Prefers .docx style simplicity.".to_string(),
        doc_url: Some("https://www.icims.com/blog/what-is-cv-resume-parsing/".to_string()),
        region: None,
        date_format: DateStyle::MonthNameYyyy,
        section_headings: english_headings(),
        features: default_features("Arial"),
    }
}

fn personio() -> AtsProfile {
    AtsProfile {
        id: "personio".to_string(),
        name: "Personio".to_string(),
        description: "DACH region ATS. German headings, DD.MM.YYYY dates.".to_string(),
        doc_url: Some(
            "https://support.personio.de/hc/en-us/articles/360010193018".to_string(),
        ),
        region: Some("DACH".to_string()),
        date_format: DateStyle::DdDotMmDotYyyy,
        section_headings: german_headings(),
        features: ProfileFeatures {
            allow_italic_text: true,
            ..default_features("Arial")
        },
    }
}

fn successfactors() -> AtsProfile {
    AtsProfile {
        id: "successfactors".to_string(),
        name: "SAP SuccessFactors".to_string(),
        description: "Enterprise HR suite with modern parsing capabilities.".to_string(),
        doc_url: None,
        region: Some("Global".to_string()),
        date_format: DateStyle::MmSlashYyyy,
        section_headings: english_headings(),
        features: default_features("Arial"),
    }
}

fn softgarden() -> AtsProfile {
    AtsProfile {
        id: "softgarden".to_string(),
        name: "Softgarden".to_string(),
        description: "Modern German ATS. German headings, European date format.".to_string(),
        doc_url: None,
        region: Some("DACH".to_string()),
        date_format: DateStyle::DdDotMmDotYyyy,
        section_headings: german_headings(),
        features: ProfileFeatures {
            allow_italic_text: true,
            ..default_features("Calibri")
        },
    }
}

/// Registration order is the enumeration order for bulk exports.
static CATALOGUE: Lazy<Vec<AtsProfile>> = Lazy::new(|| {
    vec![
        universal(),
        greenhouse(),
        lever(),
        workday(),
        taleo(),
        icims(),
        personio(),
        successfactors(),
        softgarden(),
    ]
});

/// Exact-id lookup, falling back to `universal`. Never fails.
pub fn get_ats_profile(id: &str) -> &'static AtsProfile {
    CATALOGUE
        .iter()
        .find(|p| p.id == id)
        .unwrap_or(&CATALOGUE[0])
}

/// All profile ids in registration order.
pub fn profile_ids() -> Vec<&'static str> {
    CATALOGUE.iter().map(|p| p.id.as_str()).collect()
}

/// The full catalogue in registration order.
pub fn all_profiles() -> &'static [AtsProfile] {
    &CATALOGUE
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
