//! ODT encoder — assembles an OpenDocument Text container by hand.
//!
//! An ODT file is a ZIP archive whose first entry must be an *uncompressed*
//! `mimetype` member (readers identify the container by sniffing it), plus a
//! manifest, document metadata, named styles, and the content body. Bullets
//! are literal `• `-prefixed paragraphs in the Bullet style — ODT readers
//! render them fine without native list semantics. All human text is ASCII-
//! sanitized and then XML-escaped.

use std::io::{Cursor, Write};

use chrono::Utc;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::dates::DateStyle;
use crate::errors::Result;
use crate::models::CvData;
use crate::plan::{Block, DocumentPlan, PlanOptions};
use crate::profiles::get_ats_profile;
use crate::sanitize::ascii_sanitize;

const ODT_MIMETYPE: &str = "application/vnd.oasis.opendocument.text";

/// Renders the CV as an ODT blob. English headings, `MMMM YYYY` dates,
/// projects included (first 4).
pub fn generate_odt(cv: &CvData) -> Result<Vec<u8>> {
    let opts = PlanOptions {
        headings: &get_ats_profile("universal").section_headings,
        date_style: DateStyle::MonthNameYyyy,
        include_projects: true,
    };
    let plan = DocumentPlan::build(cv, &opts);

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

    // mimetype: first entry, Stored, so byte 30 onward of the archive is the
    // literal media type.
    zip.start_file(
        "mimetype",
        FileOptions::default().compression_method(CompressionMethod::Stored),
    )?;
    zip.write_all(ODT_MIMETYPE.as_bytes())?;

    let deflated = FileOptions::default();
    zip.start_file("META-INF/manifest.xml", deflated)?;
    zip.write_all(manifest_xml().as_bytes())?;

    zip.start_file("meta.xml", deflated)?;
    zip.write_all(meta_xml(cv).as_bytes())?;

    zip.start_file("styles.xml", deflated)?;
    zip.write_all(styles_xml().as_bytes())?;

    zip.start_file("content.xml", deflated)?;
    zip.write_all(content_xml(&plan).as_bytes())?;

    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}

/// Escapes the five XML reserved characters, after ASCII sanitization.
fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in ascii_sanitize(text).chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

fn manifest_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<manifest:manifest xmlns:manifest="urn:oasis:names:tc:opendocument:xmlns:manifest:1.0" manifest:version="1.2">
  <manifest:file-entry manifest:full-path="/" manifest:media-type="{ODT_MIMETYPE}"/>
  <manifest:file-entry manifest:full-path="content.xml" manifest:media-type="text/xml"/>
  <manifest:file-entry manifest:full-path="styles.xml" manifest:media-type="text/xml"/>
  <manifest:file-entry manifest:full-path="meta.xml" manifest:media-type="text/xml"/>
</manifest:manifest>"#
    )
}

fn meta_xml(cv: &CvData) -> String {
    let now = Utc::now().to_rfc3339();
    let name = escape_xml(&cv.personal.name);
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<office:document-meta xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0"
    xmlns:meta="urn:oasis:names:tc:opendocument:xmlns:meta:1.0"
    xmlns:dc="http://purl.org/dc/elements/1.1/"
    office:version="1.2">
  <office:meta>
    <dc:title>CV - {name}</dc:title>
    <dc:creator>{name}</dc:creator>
    <dc:description>Curriculum Vitae</dc:description>
    <meta:creation-date>{now}</meta:creation-date>
    <dc:date>{now}</dc:date>
  </office:meta>
</office:document-meta>"#
    )
}

/// Named paragraph/text styles and the A4 page layout. Style names are
/// referenced from `content_xml` and nowhere else.
fn styles_xml() -> String {
    r#"<?xml version="1.0" encoding="UTF-8"?>
<office:document-styles xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0"
    xmlns:style="urn:oasis:names:tc:opendocument:xmlns:style:1.0"
    xmlns:fo="urn:oasis:names:tc:opendocument:xmlns:xsl-fo-compatible:1.0"
    xmlns:text="urn:oasis:names:tc:opendocument:xmlns:text:1.0"
    office:version="1.2">
  <office:styles>
    <style:style style:name="Standard" style:family="paragraph" style:class="text">
      <style:paragraph-properties fo:margin-top="0mm" fo:margin-bottom="2mm"/>
      <style:text-properties fo:font-size="11pt" fo:font-family="Arial"/>
    </style:style>
    <style:style style:name="Heading" style:family="paragraph" style:parent-style-name="Standard" style:class="text">
      <style:paragraph-properties fo:margin-top="5mm" fo:margin-bottom="2mm" fo:border-bottom="0.5pt solid #CCCCCC"/>
      <style:text-properties fo:font-size="12pt" fo:font-weight="bold"/>
    </style:style>
    <style:style style:name="Title" style:family="paragraph" style:parent-style-name="Standard" style:class="text">
      <style:paragraph-properties fo:text-align="center" fo:margin-bottom="3mm"/>
      <style:text-properties fo:font-size="18pt" fo:font-weight="bold"/>
    </style:style>
    <style:style style:name="Subtitle" style:family="paragraph" style:parent-style-name="Standard" style:class="text">
      <style:paragraph-properties fo:text-align="center" fo:margin-bottom="2mm"/>
      <style:text-properties fo:font-size="12pt"/>
    </style:style>
    <style:style style:name="Contact" style:family="paragraph" style:parent-style-name="Standard" style:class="text">
      <style:paragraph-properties fo:text-align="center" fo:margin-bottom="1mm"/>
      <style:text-properties fo:font-size="10pt"/>
    </style:style>
    <style:style style:name="JobTitle" style:family="paragraph" style:parent-style-name="Standard" style:class="text">
      <style:paragraph-properties fo:margin-top="3mm"/>
      <style:text-properties fo:font-size="11pt" fo:font-weight="bold"/>
    </style:style>
    <style:style style:name="Company" style:family="paragraph" style:parent-style-name="Standard" style:class="text">
      <style:text-properties fo:font-size="11pt"/>
    </style:style>
    <style:style style:name="Bullet" style:family="paragraph" style:parent-style-name="Standard" style:class="text">
      <style:paragraph-properties fo:margin-left="5mm"/>
      <style:text-properties fo:font-size="10pt"/>
    </style:style>
    <style:style style:name="Bold" style:family="text">
      <style:text-properties fo:font-weight="bold"/>
    </style:style>
  </office:styles>
  <office:automatic-styles>
    <style:page-layout style:name="pm1">
      <style:page-layout-properties fo:page-width="210mm" fo:page-height="297mm" fo:margin-top="15mm" fo:margin-bottom="15mm" fo:margin-left="15mm" fo:margin-right="15mm"/>
    </style:page-layout>
  </office:automatic-styles>
  <office:master-styles>
    <style:master-page style:name="Standard" style:page-layout-name="pm1"/>
  </office:master-styles>
</office:document-styles>"#
        .to_string()
}

fn content_xml(plan: &DocumentPlan) -> String {
    let mut paragraphs: Vec<String> = Vec::new();

    let para = |text: &str, style: &str| {
        format!(r#"<text:p text:style-name="{style}">{}</text:p>"#, escape_xml(text))
    };
    let bullet = |text: &str| {
        format!(
            r#"<text:p text:style-name="Bullet">• {}</text:p>"#,
            escape_xml(text)
        )
    };

    for block in &plan.blocks {
        match block {
            Block::Header {
                name,
                title,
                contact_line,
                links_line,
            } => {
                paragraphs.push(para(name, "Title"));
                paragraphs.push(para(title, "Subtitle"));
                paragraphs.push(para(contact_line, "Contact"));
                if let Some(links) = links_line {
                    paragraphs.push(para(links, "Contact"));
                }
            }
            Block::SectionHeading { title, .. } => {
                paragraphs.push(para(&title.to_uppercase(), "Heading"));
            }
            Block::Summary { text } => paragraphs.push(para(text, "Standard")),
            Block::ExperienceItem {
                position,
                company_line,
                date_range,
                highlights,
            } => {
                paragraphs.push(para(position, "JobTitle"));
                paragraphs.push(para(&format!("{company_line} | {date_range}"), "Company"));
                for highlight in highlights {
                    paragraphs.push(bullet(highlight));
                }
            }
            Block::EducationItem {
                degree,
                institution_line,
                date_range,
                highlights,
            } => {
                paragraphs.push(para(degree, "JobTitle"));
                paragraphs.push(para(
                    &format!("{institution_line} | {date_range}"),
                    "Company",
                ));
                for highlight in highlights {
                    paragraphs.push(bullet(highlight));
                }
            }
            Block::SkillsGroup { category, names } => {
                paragraphs.push(format!(
                    r#"<text:p text:style-name="Standard"><text:span text:style-name="Bold">{}:</text:span> {}</text:p>"#,
                    escape_xml(category),
                    escape_xml(&names.join(", "))
                ));
            }
            Block::Certification { text } => paragraphs.push(bullet(text)),
            Block::Languages { line } => paragraphs.push(para(line, "Standard")),
            Block::ProjectItem {
                name,
                description,
                technologies,
            } => {
                paragraphs.push(para(name, "JobTitle"));
                paragraphs.push(para(description, "Company"));
                if let Some(tech) = technologies {
                    paragraphs.push(para(&format!("Technologies: {tech}"), "Standard"));
                }
            }
        }
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<office:document-content xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0"
    xmlns:text="urn:oasis:names:tc:opendocument:xmlns:text:1.0"
    xmlns:style="urn:oasis:names:tc:opendocument:xmlns:style:1.0"
    office:version="1.2">
  <office:body>
    <office:text>
      {}
    </office:text>
  </office:body>
</office:document-content>"#,
        paragraphs.join("\n      ")
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CvData, ExperienceEntry, PersonalInfo, SkillEntry};
    use std::io::Read;

    fn make_cv() -> CvData {
        CvData {
            personal: PersonalInfo {
                name: "Ivan Kokalović".to_string(),
                title: "R&D <Engineer>".to_string(),
                email: "ivan@example.com".to_string(),
                phone: "+49 152".to_string(),
                location: "Leipzig".to_string(),
                linkedin: None,
                github: None,
                website: None,
            },
            summary: Some("Builds \u{201C}reliable\u{201D} systems".to_string()),
            experience: vec![ExperienceEntry {
                company: "Acme".to_string(),
                position: "Engineer".to_string(),
                location: "Berlin".to_string(),
                start_date: "2021-03".to_string(),
                end_date: "present".to_string(),
                highlights: vec!["Cut costs by 40%".to_string()],
                skills: vec![],
            }],
            education: vec![],
            skills: vec![SkillEntry {
                name: "Rust".to_string(),
                category: "Languages".to_string(),
            }],
            certifications: vec![],
            projects: vec![],
            languages: vec![],
        }
    }

    fn read_entry(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap();
        let mut entry = archive.by_name(name).unwrap();
        let mut content = String::new();
        entry.read_to_string(&mut content).unwrap();
        content
    }

    #[test]
    fn test_mimetype_first_entry_stored() {
        let bytes = generate_odt(&make_cv()).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes.clone())).unwrap();
        let first = archive.by_index(0).unwrap();
        assert_eq!(first.name(), "mimetype");
        assert_eq!(first.compression(), CompressionMethod::Stored);
        drop(first);
        assert_eq!(read_entry(&bytes, "mimetype"), ODT_MIMETYPE);
    }

    #[test]
    fn test_container_has_required_members() {
        let bytes = generate_odt(&make_cv()).unwrap();
        let archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let names: Vec<&str> = archive.file_names().collect();
        for required in [
            "mimetype",
            "META-INF/manifest.xml",
            "meta.xml",
            "styles.xml",
            "content.xml",
        ] {
            assert!(names.contains(&required), "missing {required}");
        }
    }

    #[test]
    fn test_content_escaped_and_sanitized() {
        let bytes = generate_odt(&make_cv()).unwrap();
        let content = read_entry(&bytes, "content.xml");
        // '&' and '<' escaped after sanitization.
        assert!(content.contains("R&amp;D &lt;Engineer&gt;"));
        // Curly quotes normalized before escaping.
        assert!(content.contains("Builds &quot;reliable&quot; systems"));
        assert!(!content.contains('\u{201C}'));
    }

    #[test]
    fn test_bullet_glyph_survives_packaging() {
        let bytes = generate_odt(&make_cv()).unwrap();
        let content = read_entry(&bytes, "content.xml");
        assert!(content.contains("• Cut costs by 40%"));
    }

    #[test]
    fn test_meta_carries_title_and_creator() {
        let bytes = generate_odt(&make_cv()).unwrap();
        let meta = read_entry(&bytes, "meta.xml");
        assert!(meta.contains("<dc:title>CV - Ivan Kokalovic</dc:title>"));
        assert!(meta.contains("<dc:creator>Ivan Kokalovic</dc:creator>"));
    }

    #[test]
    fn test_skill_category_bold_span() {
        let bytes = generate_odt(&make_cv()).unwrap();
        let content = read_entry(&bytes, "content.xml");
        assert!(content
            .contains(r#"<text:span text:style-name="Bold">Languages:</text:span> Rust"#));
    }
}
