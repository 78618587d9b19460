//! Canonical CV data model — the single format-agnostic representation every
//! encoder consumes.
//!
//! All list orderings are display-significant: encoders must preserve them
//! verbatim (the skill-category grouping in [`crate::skills`] is the only
//! permitted regrouping). Wire names are camelCase so the JSON artifact
//! round-trips against data authored for the web front-end.

use serde::{Deserialize, Serialize};

/// Contact block rendered at the top of every document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// One role. Dates are `YYYY-MM`, `YYYY`, or the sentinel `present`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub company: String,
    pub position: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    /// Bullet points, in display order.
    pub highlights: Vec<String>,
    /// Skill names associated with the role.
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub area: String,
    pub start_date: String,
    pub end_date: String,
    pub highlights: Vec<String>,
}

/// Category is a free-form string — encoders group by whatever categories
/// are present, not a fixed enum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillEntry {
    pub name: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationEntry {
    pub name: String,
    pub issuer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub technologies: Vec<String>,
}

/// `level_number` (1–6) drives UI dot indicators only; document encoders
/// render the free-text `level` label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageEntry {
    pub name: String,
    pub level: String,
    pub level_number: u8,
}

/// Root value passed to every encoder. Immutable per render call; encoders
/// are pure readers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvData {
    pub personal: PersonalInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<SkillEntry>,
    pub certifications: Vec<CertificationEntry>,
    pub projects: Vec<ProjectEntry>,
    pub languages: Vec<LanguageEntry>,
}
