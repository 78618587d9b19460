//! DOCX encoder — styled paragraph assembly via the `docx-rs` crate.
//!
//! Deliberately profile-free: downstream DOCX consumers are assumed to be
//! rich-capable, so headings are the fixed English set, styling is always
//! applied, and dates render `MMMM YYYY`. Highlights use native list-bullet
//! numbering (not literal glyphs); date ranges sit on a right-aligned tab
//! stop at the content edge.

use std::io::Cursor;

use docx_rs::{
    AbstractNumbering, AlignmentType, Docx, IndentLevel, Level, LevelJc, LevelText, LineSpacing,
    NumberFormat, Numbering, NumberingId, PageMargin, Paragraph, Run, Start, Tab, TabValueType,
};

use crate::dates::DateStyle;
use crate::errors::{ExportError, Result};
use crate::models::CvData;
use crate::plan::{Block, DocumentPlan, PlanOptions};
use crate::profiles::get_ats_profile;
use crate::sanitize::ascii_sanitize;

/// Bullet list definition shared by every highlight paragraph.
const BULLET_NUMBERING_ID: usize = 1;

/// Letter page (12240 twips) minus two 0.5" margins.
const RIGHT_TAB_POS: usize = 10800;

// Half-point run sizes, matching the established document look.
const SIZE_NAME: usize = 36;
const SIZE_HEADING: usize = 24;
const SIZE_BODY: usize = 22;
const SIZE_SMALL: usize = 20;

/// Renders the CV as a DOCX blob. Projects included (first 4).
pub fn generate_docx(cv: &CvData) -> Result<Vec<u8>> {
    let opts = PlanOptions {
        headings: &get_ats_profile("universal").section_headings,
        date_style: DateStyle::MonthNameYyyy,
        include_projects: true,
    };
    let plan = DocumentPlan::build(cv, &opts);

    let mut docx = Docx::new()
        .page_margin(
            PageMargin::new()
                .top(720)
                .bottom(720)
                .left(720)
                .right(720),
        )
        .add_abstract_numbering(
            AbstractNumbering::new(BULLET_NUMBERING_ID).add_level(
                Level::new(
                    0,
                    Start::new(1),
                    NumberFormat::new("bullet"),
                    LevelText::new("•"),
                    LevelJc::new("left"),
                ),
            ),
        )
        .add_numbering(Numbering::new(BULLET_NUMBERING_ID, BULLET_NUMBERING_ID));

    for block in &plan.blocks {
        for paragraph in render_block(block) {
            docx = docx.add_paragraph(paragraph);
        }
    }

    let mut cursor = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut cursor)
        .map_err(|e| ExportError::Docx(e.to_string()))?;
    Ok(cursor.into_inner())
}

fn render_block(block: &Block) -> Vec<Paragraph> {
    match block {
        Block::Header {
            name,
            title,
            contact_line,
            links_line,
        } => {
            let mut paragraphs = vec![
                centered(name, SIZE_NAME, true).line_spacing(LineSpacing::new().after(100)),
                centered(title, SIZE_HEADING, false).line_spacing(LineSpacing::new().after(100)),
                centered(contact_line, SIZE_SMALL, false)
                    .line_spacing(LineSpacing::new().after(50)),
            ];
            if let Some(links) = links_line {
                paragraphs.push(
                    centered(links, SIZE_SMALL, false)
                        .line_spacing(LineSpacing::new().after(200)),
                );
            }
            paragraphs
        }
        Block::SectionHeading { title, .. } => vec![section_header(title)],
        Block::Summary { text } => vec![body_paragraph(text, SIZE_BODY)
            .line_spacing(LineSpacing::new().after(200))],
        Block::ExperienceItem {
            position,
            company_line,
            date_range,
            highlights,
        } => {
            let mut paragraphs = vec![
                title_line(position),
                dated_line(company_line, date_range),
            ];
            paragraphs.extend(highlights.iter().map(|h| bullet_point(h)));
            paragraphs
        }
        Block::EducationItem {
            degree,
            institution_line,
            date_range,
            highlights,
        } => {
            let mut paragraphs = vec![
                title_line(degree),
                dated_line(institution_line, date_range),
            ];
            paragraphs.extend(highlights.iter().map(|h| bullet_point(h)));
            paragraphs
        }
        Block::SkillsGroup { category, names } => vec![Paragraph::new()
            .add_run(
                Run::new()
                    .add_text(format!("{}: ", ascii_sanitize(category)))
                    .bold()
                    .size(SIZE_BODY),
            )
            .add_run(
                Run::new()
                    .add_text(ascii_sanitize(&names.join(", ")))
                    .size(SIZE_BODY),
            )
            .line_spacing(LineSpacing::new().after(100))],
        Block::Certification { text } => vec![bullet_point(text)],
        Block::Languages { line } => vec![body_paragraph(line, SIZE_BODY)
            .line_spacing(LineSpacing::new().after(100))],
        Block::ProjectItem {
            name,
            description,
            technologies,
        } => {
            let mut paragraphs = vec![
                Paragraph::new()
                    .add_run(
                        Run::new()
                            .add_text(ascii_sanitize(name))
                            .bold()
                            .size(SIZE_HEADING),
                    )
                    .line_spacing(LineSpacing::new().before(150).after(50)),
                body_paragraph(description, SIZE_BODY)
                    .line_spacing(LineSpacing::new().after(50)),
            ];
            if let Some(tech) = technologies {
                paragraphs.push(
                    Paragraph::new()
                        .add_run(
                            Run::new()
                                .add_text("Technologies: ")
                                .italic()
                                .size(SIZE_SMALL),
                        )
                        .add_run(
                            Run::new()
                                .add_text(ascii_sanitize(tech))
                                .italic()
                                .size(SIZE_SMALL),
                        )
                        .line_spacing(LineSpacing::new().after(100)),
                );
            }
            paragraphs
        }
    }
}

fn centered(text: &str, size: usize, bold: bool) -> Paragraph {
    let mut run = Run::new().add_text(ascii_sanitize(text)).size(size);
    if bold {
        run = run.bold();
    }
    Paragraph::new()
        .add_run(run)
        .align(AlignmentType::Center)
}

fn section_header(title: &str) -> Paragraph {
    Paragraph::new()
        .add_run(
            Run::new()
                .add_text(ascii_sanitize(&title.to_uppercase()))
                .bold()
                .size(SIZE_HEADING),
        )
        .line_spacing(LineSpacing::new().before(300).after(100))
}

fn title_line(text: &str) -> Paragraph {
    Paragraph::new()
        .add_run(
            Run::new()
                .add_text(ascii_sanitize(text))
                .bold()
                .size(SIZE_HEADING),
        )
        .line_spacing(LineSpacing::new().before(200).after(50))
}

/// `Company | Location` on the left, date range on a right tab stop.
fn dated_line(left: &str, date_range: &str) -> Paragraph {
    Paragraph::new()
        .add_tab(Tab::new().val(TabValueType::Right).pos(RIGHT_TAB_POS))
        .add_run(Run::new().add_text(ascii_sanitize(left)).size(SIZE_BODY))
        .add_run(
            Run::new()
                .add_tab()
                .add_text(ascii_sanitize(date_range))
                .size(SIZE_BODY),
        )
        .line_spacing(LineSpacing::new().after(100))
}

fn body_paragraph(text: &str, size: usize) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(ascii_sanitize(text)).size(size))
}

fn bullet_point(text: &str) -> Paragraph {
    Paragraph::new()
        .add_run(Run::new().add_text(ascii_sanitize(text)).size(SIZE_BODY))
        .numbering(NumberingId::new(BULLET_NUMBERING_ID), IndentLevel::new(0))
        .line_spacing(LineSpacing::new().after(100))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CvData, ExperienceEntry, PersonalInfo, ProjectEntry, SkillEntry};
    use std::io::Read;

    fn make_cv() -> CvData {
        CvData {
            personal: PersonalInfo {
                name: "Ivan Kokalović".to_string(),
                title: "Backend Developer".to_string(),
                email: "ivan@example.com".to_string(),
                phone: "+49 152".to_string(),
                location: "Leipzig".to_string(),
                linkedin: Some("https://linkedin.com/in/ivan".to_string()),
                github: None,
                website: None,
            },
            summary: Some("Summary.".to_string()),
            experience: vec![ExperienceEntry {
                company: "Acme".to_string(),
                position: "Engineer".to_string(),
                location: "Berlin".to_string(),
                start_date: "2021-03".to_string(),
                end_date: "present".to_string(),
                highlights: vec!["Shipped the thing".to_string()],
                skills: vec![],
            }],
            education: vec![],
            skills: vec![SkillEntry {
                name: "Rust".to_string(),
                category: "Languages".to_string(),
            }],
            certifications: vec![],
            projects: (1..=6)
                .map(|i| ProjectEntry {
                    name: format!("Project {i}"),
                    description: "Desc".to_string(),
                    url: None,
                    technologies: vec!["Rust".to_string()],
                })
                .collect(),
            languages: vec![],
        }
    }

    fn document_xml(bytes: &[u8]) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap();
        let mut entry = archive.by_name("word/document.xml").unwrap();
        let mut content = String::new();
        entry.read_to_string(&mut content).unwrap();
        content
    }

    #[test]
    fn test_output_is_ooxml_package() {
        let bytes = generate_docx(&make_cv()).unwrap();
        assert_eq!(&bytes[0..2], b"PK");
        let archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let names: Vec<&str> = archive.file_names().collect();
        assert!(names.contains(&"word/document.xml"));
        assert!(names.contains(&"word/numbering.xml"));
    }

    #[test]
    fn test_fixed_english_headings_uppercased() {
        let xml = document_xml(&generate_docx(&make_cv()).unwrap());
        assert!(xml.contains("PROFESSIONAL EXPERIENCE"));
        assert!(xml.contains("TECHNICAL SKILLS"));
    }

    #[test]
    fn test_dates_month_name_style() {
        let xml = document_xml(&generate_docx(&make_cv()).unwrap());
        assert!(xml.contains("March 2021 - Present"));
    }

    #[test]
    fn test_highlights_use_native_numbering() {
        let xml = document_xml(&generate_docx(&make_cv()).unwrap());
        // Highlight paragraph references the bullet numbering definition
        // rather than embedding a literal glyph.
        assert!(xml.contains("numId"));
        assert!(xml.contains("Shipped the thing"));
        assert!(!xml.contains("• Shipped the thing"));
    }

    #[test]
    fn test_projects_capped_at_four() {
        let xml = document_xml(&generate_docx(&make_cv()).unwrap());
        assert!(xml.contains("Project 4"));
        assert!(!xml.contains("Project 5"));
    }

    #[test]
    fn test_text_sanitized() {
        let xml = document_xml(&generate_docx(&make_cv()).unwrap());
        assert!(xml.contains("Ivan Kokalovic"));
        assert!(!xml.contains("Kokalović"));
    }
}
