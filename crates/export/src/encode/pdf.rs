//! PDF encoder — profile-driven typography over a top-down cursor.
//!
//! Renders onto A4 pages with the builtin Helvetica family. A vertical
//! cursor (mm from the page top) advances monotonically; before a block of
//! known height is drawn, `ensure_space` inserts a page break if the block
//! would cross the bottom margin. Style requests pass through capability
//! negotiation: a profile that disallows bold or italic gets normal weight
//! silently. Wrap counts and centering/right-alignment offsets come from the
//! static Helvetica metric tables in [`crate::layout`].

use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Rgb,
};
use tracing::debug;

use crate::errors::{ExportError, Result};
use crate::layout::{text_width_mm, wrap_to_width, FontStyle};
use crate::models::CvData;
use crate::plan::{Block, DocumentPlan, PlanOptions};
use crate::profiles::{get_ats_profile, AtsProfile};
use crate::sanitize::ascii_sanitize;

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;

/// PDF render parameters.
#[derive(Debug, Clone)]
pub struct PdfOptions {
    /// Catalogue id; `None` or an unknown id resolves to `universal`.
    pub ats_profile_id: Option<String>,
    pub include_projects: bool,
}

impl Default for PdfOptions {
    fn default() -> Self {
        Self {
            ats_profile_id: None,
            include_projects: true,
        }
    }
}

/// Renders the CV as a PDF blob using the given profile's typography.
pub fn generate_pdf(cv: &CvData, opts: &PdfOptions) -> Result<Vec<u8>> {
    let (bytes, pages) = render_document(cv, opts)?;
    debug!(pages, "rendered PDF");
    Ok(bytes)
}

/// Downgrades a style request the profile does not allow. Silent by design:
/// the caller keeps asking for the logical style, the profile decides what
/// actually renders.
fn negotiate(requested: FontStyle, profile: &AtsProfile) -> FontStyle {
    match requested {
        FontStyle::Bold if !profile.features.allow_bold_text => FontStyle::Regular,
        FontStyle::Oblique if !profile.features.allow_italic_text => FontStyle::Regular,
        other => other,
    }
}

fn bullet_prefix(profile: &AtsProfile) -> &'static str {
    if profile.features.allow_bullet_points {
        "• "
    } else {
        "- "
    }
}

#[derive(Debug, Clone, Copy)]
enum Align {
    Left,
    Center,
    Right,
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    oblique: IndirectFontRef,
}

impl Fonts {
    fn get(&self, style: FontStyle) -> &IndirectFontRef {
        match style {
            FontStyle::Regular => &self.regular,
            FontStyle::Bold => &self.bold,
            FontStyle::Oblique => &self.oblique,
        }
    }
}

/// Cursor state for one render. `y` is measured from the page top and only
/// ever grows (page breaks reset it to the top margin of a fresh page).
struct Cursor<'a> {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    fonts: Fonts,
    profile: &'a AtsProfile,
    margin: f32,
    y: f32,
    pages: usize,
}

impl<'a> Cursor<'a> {
    fn new(profile: &'a AtsProfile, title: &str) -> Result<Self> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        let fonts = Fonts {
            regular: add_font(&doc, BuiltinFont::Helvetica)?,
            bold: add_font(&doc, BuiltinFont::HelveticaBold)?,
            oblique: add_font(&doc, BuiltinFont::HelveticaOblique)?,
        };
        let layer = doc.get_page(page).get_layer(layer);
        let margin = if profile.is_compact() { 12.0 } else { 15.0 };
        Ok(Self {
            doc,
            layer,
            fonts,
            profile,
            margin,
            y: margin,
            pages: 1,
        })
    }

    fn content_width(&self) -> f32 {
        PAGE_WIDTH - self.margin * 2.0
    }

    fn body_size(&self) -> f32 {
        self.profile.features.font_size
    }

    /// Inserts a page break when `needed` mm would cross the bottom margin.
    fn ensure_space(&mut self, needed: f32) {
        if self.y + needed > PAGE_HEIGHT - self.margin {
            let (page, layer) = self
                .doc
                .add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = self.margin;
            self.pages += 1;
        }
    }

    /// Draws one sanitized text run at the current cursor line. Does not
    /// advance the cursor — vertical spacing stays explicit at the call
    /// sites, mirroring the block-height bookkeeping.
    fn text(&self, text: &str, x: f32, size: f32, requested: FontStyle, align: Align) {
        let clean = ascii_sanitize(text);
        let style = negotiate(requested, self.profile);
        let width = text_width_mm(&clean, style, size);
        let draw_x = match align {
            Align::Left => x,
            Align::Center => (PAGE_WIDTH - width) / 2.0,
            Align::Right => PAGE_WIDTH - self.margin - width,
        };
        self.layer.use_text(
            clean,
            size,
            Mm(draw_x),
            Mm(PAGE_HEIGHT - self.y),
            self.fonts.get(style),
        );
    }

    /// Draws pre-wrapped lines left-aligned at `x`, advancing `line_height`
    /// per line.
    fn text_lines(&mut self, lines: &[String], x: f32, size: f32, style: FontStyle, line_height: f32) {
        for line in lines {
            self.text(line, x, size, style, Align::Left);
            self.y += line_height;
        }
    }

    /// Light gray horizontal rule across the content width.
    fn hairline(&self, thickness: f32) {
        self.layer
            .set_outline_color(Color::Rgb(Rgb::new(0.78, 0.78, 0.78, None)));
        self.layer.set_outline_thickness(thickness);
        let y = Mm(PAGE_HEIGHT - self.y);
        self.layer.add_line(Line {
            points: vec![
                (Point::new(Mm(self.margin), y), false),
                (Point::new(Mm(PAGE_WIDTH - self.margin), y), false),
            ],
            is_closed: false,
        });
    }

    fn section_header(&mut self, title: &str) {
        if !self.profile.features.allow_section_headers {
            return;
        }
        let compact = self.profile.is_compact();
        self.ensure_space(15.0);
        self.y += if compact { 2.0 } else { 3.0 };
        self.text(
            &title.to_uppercase(),
            self.margin,
            self.body_size() + 2.0,
            FontStyle::Bold,
            Align::Left,
        );
        self.y += if compact { 4.0 } else { 5.0 };
        self.hairline(0.5);
        self.y += if compact { 3.0 } else { 4.0 };
    }
}

fn add_font(doc: &PdfDocumentReference, font: BuiltinFont) -> Result<IndirectFontRef> {
    doc.add_builtin_font(font)
        .map_err(|e| ExportError::Pdf(e.to_string()))
}

/// Full render; returns the byte blob and the page count (the count is what
/// the pagination tests observe).
fn render_document(cv: &CvData, opts: &PdfOptions) -> Result<(Vec<u8>, usize)> {
    let profile = get_ats_profile(opts.ats_profile_id.as_deref().unwrap_or("universal"));
    debug!(profile = %profile.id, "rendering PDF");

    let plan = DocumentPlan::build(
        cv,
        &PlanOptions {
            headings: &profile.section_headings,
            date_style: profile.date_format,
            include_projects: opts.include_projects,
        },
    );

    let title = format!("CV - {}", ascii_sanitize(&cv.personal.name));
    let mut cur = Cursor::new(profile, &title)?;
    let size = cur.body_size();
    let compact = profile.is_compact();
    let bullet = bullet_prefix(profile);

    for block in &plan.blocks {
        match block {
            Block::Header {
                name,
                title,
                contact_line,
                links_line,
            } => {
                cur.text(name, cur.margin, 18.0, FontStyle::Bold, Align::Center);
                cur.y += 6.0;
                cur.text(title, cur.margin, size, FontStyle::Regular, Align::Center);
                cur.y += 5.0;
                cur.text(contact_line, cur.margin, size, FontStyle::Regular, Align::Center);
                cur.y += 4.0;
                if let Some(links) = links_line {
                    cur.text(links, cur.margin, size, FontStyle::Regular, Align::Center);
                    cur.y += 2.0;
                }
                cur.y += 3.0;
                cur.hairline(0.3);
                cur.y += 6.0;
            }
            Block::SectionHeading { title, .. } => cur.section_header(title),
            Block::Summary { text } => {
                let line_height = if compact { 4.0 } else { 4.5 };
                let lines = wrap_to_width(
                    &ascii_sanitize(text),
                    FontStyle::Regular,
                    size,
                    cur.content_width(),
                );
                cur.text_lines(&lines, cur.margin, size, FontStyle::Regular, line_height);
                cur.y += 2.0;
            }
            Block::ExperienceItem {
                position,
                company_line,
                date_range,
                highlights,
            } => {
                cur.ensure_space(30.0);
                cur.text(position, cur.margin, size, FontStyle::Bold, Align::Left);
                // Date range right-aligned on the position line.
                cur.text(date_range, cur.margin, size, FontStyle::Regular, Align::Right);
                cur.y += 4.0;
                cur.text(company_line, cur.margin, size, FontStyle::Regular, Align::Left);
                cur.y += 5.0;

                for highlight in highlights {
                    cur.ensure_space(8.0);
                    let lines = wrap_to_width(
                        &ascii_sanitize(&format!("{bullet}{highlight}")),
                        FontStyle::Regular,
                        size,
                        cur.content_width() - 5.0,
                    );
                    cur.text_lines(&lines, cur.margin + 3.0, size, FontStyle::Regular, 4.0);
                    cur.y += 1.0;
                }
                cur.y += 3.0;
            }
            Block::EducationItem {
                degree,
                institution_line,
                date_range,
                highlights,
            } => {
                cur.ensure_space(20.0);
                cur.text(degree, cur.margin, size, FontStyle::Bold, Align::Left);
                cur.text(date_range, cur.margin, size, FontStyle::Regular, Align::Right);
                cur.y += 4.0;
                cur.text(institution_line, cur.margin, size, FontStyle::Regular, Align::Left);
                cur.y += 5.0;

                for highlight in highlights {
                    let lines = wrap_to_width(
                        &ascii_sanitize(&format!("{bullet}{highlight}")),
                        FontStyle::Regular,
                        size,
                        cur.content_width() - 5.0,
                    );
                    cur.text_lines(&lines, cur.margin + 3.0, size, FontStyle::Regular, 4.0);
                }
                cur.y += 3.0;
            }
            Block::SkillsGroup { category, names } => {
                cur.ensure_space(10.0);
                let label = format!("{category}: ");
                cur.text(&label, cur.margin, size, FontStyle::Bold, Align::Left);

                // Label width under the *rendered* style — after negotiation
                // a disallowed bold label measures as regular.
                let label_style = negotiate(FontStyle::Bold, profile);
                let label_width = text_width_mm(&ascii_sanitize(&label), label_style, size);

                let skills_text = ascii_sanitize(&names.join(", "));
                let list_width = text_width_mm(&skills_text, FontStyle::Regular, size);
                let lines = wrap_to_width(
                    &skills_text,
                    FontStyle::Regular,
                    size,
                    cur.content_width() - 30.0,
                );

                if lines.len() == 1 && list_width < cur.content_width() - label_width - 5.0 {
                    // Fits beside the label.
                    cur.text(
                        &skills_text,
                        cur.margin + label_width,
                        size,
                        FontStyle::Regular,
                        Align::Left,
                    );
                    cur.y += 5.0;
                } else {
                    // Wraps onto indented continuation lines below the label.
                    cur.y += 4.0;
                    cur.text_lines(&lines, cur.margin + 3.0, size, FontStyle::Regular, 4.0);
                    cur.y += 1.0;
                }
            }
            Block::Certification { text } => {
                cur.ensure_space(8.0);
                cur.text(
                    &format!("{bullet}{text}"),
                    cur.margin,
                    size,
                    FontStyle::Regular,
                    Align::Left,
                );
                cur.y += 5.0;
            }
            Block::Languages { line } => {
                cur.text(line, cur.margin, size, FontStyle::Regular, Align::Left);
                cur.y += 5.0;
            }
            Block::ProjectItem {
                name,
                description,
                technologies,
            } => {
                cur.ensure_space(15.0);
                cur.text(name, cur.margin, size, FontStyle::Bold, Align::Left);
                cur.y += 4.0;
                let lines = wrap_to_width(
                    &ascii_sanitize(description),
                    FontStyle::Regular,
                    size,
                    cur.content_width() - 3.0,
                );
                cur.text_lines(&lines, cur.margin + 3.0, size, FontStyle::Regular, 4.0);
                cur.y += 1.0;
                if let Some(tech) = technologies {
                    cur.text(
                        &format!("Technologies: {tech}"),
                        cur.margin + 3.0,
                        size,
                        FontStyle::Oblique,
                        Align::Left,
                    );
                    cur.y += 5.0;
                }
                cur.y += 2.0;
            }
        }
    }

    let pages = cur.pages;
    let bytes = cur
        .doc
        .save_to_bytes()
        .map_err(|e| ExportError::Pdf(e.to_string()))?;
    Ok((bytes, pages))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
