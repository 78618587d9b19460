//! Plain-text encoder — UTF-8 lines with `=`-bannered section headers.
//!
//! No ATS profile is consulted: headings are the fixed English set and dates
//! always render `MM/YYYY`. The output string is also the payload for the
//! caller's copy-to-clipboard operation.

use crate::dates::DateStyle;
use crate::models::CvData;
use crate::plan::{Block, DocumentPlan, PlanOptions};
use crate::profiles::get_ats_profile;
use crate::sanitize::ascii_sanitize;

/// Renders the CV as plain text. Projects are always included (first 4).
pub fn generate_plain_text(cv: &CvData) -> String {
    let opts = PlanOptions {
        headings: &get_ats_profile("universal").section_headings,
        date_style: DateStyle::MmSlashYyyy,
        include_projects: true,
    };
    let plan = DocumentPlan::build(cv, &opts);

    let mut lines: Vec<String> = Vec::new();
    let mut push = |text: &str| lines.push(ascii_sanitize(text));

    for block in &plan.blocks {
        match block {
            Block::Header {
                name,
                title,
                contact_line,
                links_line,
            } => {
                push(&name.to_uppercase());
                push(title);
                push("");
                push(contact_line);
                if let Some(links) = links_line {
                    push(links);
                }
            }
            Block::SectionHeading { title, .. } => {
                let border = "=".repeat(title.chars().count() + 4);
                push("");
                push(&border);
                push(&format!("  {}", title.to_uppercase()));
                push(&border);
                push("");
            }
            Block::Summary { text } => push(text),
            Block::ExperienceItem {
                position,
                company_line,
                date_range,
                highlights,
            } => {
                push(position);
                push(&format!("{company_line} | {date_range}"));
                push("");
                for highlight in highlights {
                    push(&format!("  * {highlight}"));
                }
                push("");
            }
            Block::EducationItem {
                degree,
                institution_line,
                date_range,
                highlights,
            } => {
                push(degree);
                push(&format!("{institution_line} | {date_range}"));
                for highlight in highlights {
                    push(&format!("  * {highlight}"));
                }
                push("");
            }
            Block::SkillsGroup { category, names } => {
                push(&format!("{category}: {}", names.join(", ")));
            }
            Block::Certification { text } => push(&format!("  * {text}")),
            Block::Languages { line } => push(line),
            Block::ProjectItem {
                name,
                description,
                technologies,
            } => {
                push(name);
                push(&format!("  {description}"));
                if let Some(tech) = technologies {
                    push(&format!("  Technologies: {tech}"));
                }
                push("");
            }
        }
    }

    lines.join("\n")
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
