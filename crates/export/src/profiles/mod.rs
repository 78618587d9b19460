//! ATS profiles — named configurations describing how a target applicant
//! tracking system prefers content to be formatted.
//!
//! A profile governs typography, date style, and section vocabulary only. It
//! never filters or reorders CV content (the PDF encoder merely reserves
//! less whitespace under `compact_layout`). Profile lookup is total: unknown
//! ids fall back to the `universal` profile.

mod catalogue;

pub use catalogue::{all_profiles, get_ats_profile, profile_ids};

use serde::{Deserialize, Serialize};

use crate::dates::DateStyle;

/// The seven section titles a profile supplies. English by default,
/// German for the DACH-region profiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionHeadings {
    pub summary: String,
    pub experience: String,
    pub education: String,
    pub skills: String,
    pub certifications: String,
    pub languages: String,
    pub projects: String,
}

/// Formatting tolerances of one ATS. These flags are the only mechanism
/// encoders use to vary output — there is no per-encoder special-casing of
/// profile identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileFeatures {
    pub allow_bullet_points: bool,
    pub allow_bold_text: bool,
    pub allow_italic_text: bool,
    pub allow_section_headers: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_line_length: Option<u32>,
    pub preferred_font: String,
    pub font_size: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compact_layout: Option<bool>,
}

/// One named ATS configuration from the fixed catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsProfile {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    pub date_format: DateStyle,
    pub section_headings: SectionHeadings,
    pub features: ProfileFeatures,
}

impl AtsProfile {
    /// True when the profile prefers the compact (reduced-whitespace) PDF layout.
    pub fn is_compact(&self) -> bool {
        self.features.compact_layout.unwrap_or(false)
    }
}
