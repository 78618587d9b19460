//! Document plan — the ordered, format-independent section sequence built
//! once from `CvData` and rendered by every document encoder.
//!
//! Section order, the contact/link line joining, the skills grouping, and
//! the first-4 projects cap live here exactly once; encoders are stateless
//! renderers over the block list. Text in the plan is raw — each encoder
//! sanitizes at emission (the JSON encoder bypasses the plan entirely).

use serde::{Deserialize, Serialize};

use crate::dates::{format_date_range, DateStyle};
use crate::models::CvData;
use crate::profiles::SectionHeadings;
use crate::skills::group_skills_by_category;

/// Only the first 4 projects are rendered when projects are included.
pub const PROJECT_LIMIT: usize = 4;

/// Which logical section a heading introduces. Lets renderers key
/// section-specific spacing without string-matching titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionKind {
    Summary,
    Experience,
    Education,
    Skills,
    Certifications,
    Languages,
    Projects,
}

/// One renderable block. Variants carry fully joined display strings so the
/// five renderers never re-derive content selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    /// Name, professional title, `a | b | c` contact line, optional link
    /// line with `https://` stripped.
    Header {
        name: String,
        title: String,
        contact_line: String,
        links_line: Option<String>,
    },
    SectionHeading { kind: SectionKind, title: String },
    Summary { text: String },
    ExperienceItem {
        position: String,
        /// `Company | Location`
        company_line: String,
        date_range: String,
        highlights: Vec<String>,
    },
    EducationItem {
        degree: String,
        /// `Institution | Area`
        institution_line: String,
        date_range: String,
        highlights: Vec<String>,
    },
    SkillsGroup { category: String, names: Vec<String> },
    /// `Name - Issuer`
    Certification { text: String },
    /// `English (Fluent), German (B2)`
    Languages { line: String },
    ProjectItem {
        name: String,
        description: String,
        /// Joined `, ` technology list; `None` when the project lists none.
        technologies: Option<String>,
    },
}

/// Per-render parameters: heading vocabulary, date style, projects toggle.
#[derive(Debug, Clone)]
pub struct PlanOptions<'a> {
    pub headings: &'a SectionHeadings,
    pub date_style: DateStyle,
    pub include_projects: bool,
}

/// The ordered block sequence for one render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentPlan {
    pub blocks: Vec<Block>,
}

impl DocumentPlan {
    /// Builds the canonical section sequence: header, summary, experience,
    /// education, skills, certifications, languages, projects. Optional
    /// sections are omitted when their source list is empty.
    pub fn build(cv: &CvData, opts: &PlanOptions<'_>) -> Self {
        let headings = opts.headings;
        let mut blocks = Vec::new();

        blocks.push(header_block(cv));

        if let Some(summary) = &cv.summary {
            blocks.push(Block::SectionHeading {
                kind: SectionKind::Summary,
                title: headings.summary.clone(),
            });
            blocks.push(Block::Summary {
                text: summary.clone(),
            });
        }

        blocks.push(Block::SectionHeading {
            kind: SectionKind::Experience,
            title: headings.experience.clone(),
        });
        for exp in &cv.experience {
            blocks.push(Block::ExperienceItem {
                position: exp.position.clone(),
                company_line: format!("{} | {}", exp.company, exp.location),
                date_range: format_date_range(&exp.start_date, &exp.end_date, opts.date_style),
                highlights: exp.highlights.clone(),
            });
        }

        blocks.push(Block::SectionHeading {
            kind: SectionKind::Education,
            title: headings.education.clone(),
        });
        for edu in &cv.education {
            blocks.push(Block::EducationItem {
                degree: edu.degree.clone(),
                institution_line: format!("{} | {}", edu.institution, edu.area),
                date_range: format_date_range(&edu.start_date, &edu.end_date, opts.date_style),
                highlights: edu.highlights.clone(),
            });
        }

        blocks.push(Block::SectionHeading {
            kind: SectionKind::Skills,
            title: headings.skills.clone(),
        });
        for (category, names) in group_skills_by_category(&cv.skills) {
            blocks.push(Block::SkillsGroup { category, names });
        }

        if !cv.certifications.is_empty() {
            blocks.push(Block::SectionHeading {
                kind: SectionKind::Certifications,
                title: headings.certifications.clone(),
            });
            for cert in &cv.certifications {
                blocks.push(Block::Certification {
                    text: format!("{} - {}", cert.name, cert.issuer),
                });
            }
        }

        if !cv.languages.is_empty() {
            blocks.push(Block::SectionHeading {
                kind: SectionKind::Languages,
                title: headings.languages.clone(),
            });
            let line = cv
                .languages
                .iter()
                .map(|l| format!("{} ({})", l.name, l.level))
                .collect::<Vec<_>>()
                .join(", ");
            blocks.push(Block::Languages { line });
        }

        if opts.include_projects && !cv.projects.is_empty() {
            blocks.push(Block::SectionHeading {
                kind: SectionKind::Projects,
                title: headings.projects.clone(),
            });
            for project in cv.projects.iter().take(PROJECT_LIMIT) {
                let technologies = if project.technologies.is_empty() {
                    None
                } else {
                    Some(project.technologies.join(", "))
                };
                blocks.push(Block::ProjectItem {
                    name: project.name.clone(),
                    description: project.description.clone(),
                    technologies,
                });
            }
        }

        DocumentPlan { blocks }
    }
}

fn header_block(cv: &CvData) -> Block {
    let personal = &cv.personal;
    let contact_line = [&personal.email, &personal.phone, &personal.location]
        .iter()
        .filter(|s| !s.is_empty())
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(" | ");

    let mut links: Vec<String> = Vec::new();
    if let Some(linkedin) = &personal.linkedin {
        links.push(strip_scheme(linkedin));
    }
    if let Some(github) = &personal.github {
        links.push(strip_scheme(github));
    }
    let links_line = if links.is_empty() {
        None
    } else {
        Some(links.join(" | "))
    };

    Block::Header {
        name: personal.name.clone(),
        title: personal.title.clone(),
        contact_line,
        links_line,
    }
}

fn strip_scheme(url: &str) -> String {
    url.trim_start_matches("https://").to_string()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
