//! Export orchestration — single artifacts and ZIP bundles.
//!
//! Every entry point returns an [`Artifact`]: the rendered bytes plus the
//! download filename and MIME type derived from the candidate's name.
//! Bundle builders fan the per-format encoders out over `spawn_blocking`
//! workers and fail the whole bundle if any format fails; a partial archive
//! is never produced.

use std::io::{Cursor, Write};

use tokio::task::JoinHandle;
use tracing::{debug, info};
use zip::write::FileOptions;
use zip::ZipWriter;

use crate::encode::{
    generate_docx, generate_json, generate_odt, generate_pdf, generate_plain_text, PdfOptions,
};
use crate::errors::{ExportError, Result};
use crate::models::CvData;
use crate::profiles::profile_ids;
use crate::sanitize::ascii_sanitize;

/// One finished export: bytes plus the metadata a download needs.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

const MIME_PDF: &str = "application/pdf";
const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
const MIME_ODT: &str = "application/vnd.oasis.opendocument.text";
const MIME_TEXT: &str = "text/plain";
const MIME_JSON: &str = "application/json";
const MIME_ZIP: &str = "application/zip";

/// Filename-safe form of the candidate's name: ASCII-folded, spaces
/// replaced with underscores (`Ivan Kokalović` → `Ivan_Kokalovic`).
fn safe_name(cv: &CvData) -> String {
    ascii_sanitize(&cv.personal.name).replace(' ', "_")
}

pub fn export_pdf(cv: &CvData, opts: &PdfOptions) -> Result<Artifact> {
    let profile_id = opts.ats_profile_id.as_deref().unwrap_or("universal");
    let bytes = generate_pdf(cv, opts)?;
    Ok(Artifact {
        filename: format!("{}_CV_{}.pdf", safe_name(cv), profile_id),
        content_type: MIME_PDF,
        bytes,
    })
}

pub fn export_docx(cv: &CvData) -> Result<Artifact> {
    Ok(Artifact {
        filename: format!("{}_CV.docx", safe_name(cv)),
        content_type: MIME_DOCX,
        bytes: generate_docx(cv)?,
    })
}

pub fn export_odt(cv: &CvData) -> Result<Artifact> {
    Ok(Artifact {
        filename: format!("{}_CV.odt", safe_name(cv)),
        content_type: MIME_ODT,
        bytes: generate_odt(cv)?,
    })
}

pub fn export_text(cv: &CvData) -> Artifact {
    Artifact {
        filename: format!("{}_CV.txt", safe_name(cv)),
        content_type: MIME_TEXT,
        bytes: generate_plain_text(cv).into_bytes(),
    }
}

pub fn export_json(cv: &CvData) -> Result<Artifact> {
    Ok(Artifact {
        filename: format!("{}_CV.json", safe_name(cv)),
        content_type: MIME_JSON,
        bytes: generate_json(cv)?.into_bytes(),
    })
}

/// Renders all five formats in parallel and packs them into one ZIP.
///
/// The PDF member is always the `universal` profile with projects included,
/// so the member name set is fixed; the other formats are profile-free by
/// design. Callers wanting a profile-specific PDF use [`export_pdf`].
pub async fn export_all_formats(cv: &CvData) -> Result<Artifact> {
    info!(name = %cv.personal.name, "building all-formats bundle");

    let handles: Vec<JoinHandle<Result<Artifact>>> = vec![
        spawn_export({
            let cv = cv.clone();
            move || export_pdf(&cv, &PdfOptions::default())
        }),
        spawn_export({
            let cv = cv.clone();
            move || export_docx(&cv)
        }),
        spawn_export({
            let cv = cv.clone();
            move || export_odt(&cv)
        }),
        spawn_export({
            let cv = cv.clone();
            move || Ok(export_text(&cv))
        }),
        spawn_export({
            let cv = cv.clone();
            move || export_json(&cv)
        }),
    ];

    let mut artifacts = Vec::with_capacity(handles.len());
    for handle in handles {
        artifacts.push(join_export(handle).await?);
    }

    let bytes = pack_zip(&artifacts)?;
    Ok(Artifact {
        filename: format!("{}_CV_All_Formats.zip", safe_name(cv)),
        content_type: MIME_ZIP,
        bytes,
    })
}

/// Renders one PDF per catalogue profile in parallel and packs them into
/// one ZIP. Member names carry the profile id, so the nine PDFs never
/// collide.
pub async fn export_all_ats_pdfs(cv: &CvData, include_projects: bool) -> Result<Artifact> {
    info!(name = %cv.personal.name, "building per-profile PDF bundle");

    let handles: Vec<JoinHandle<Result<Artifact>>> = profile_ids()
        .into_iter()
        .map(|id| {
            let cv = cv.clone();
            let opts = PdfOptions {
                ats_profile_id: Some(id.to_string()),
                include_projects,
            };
            spawn_export(move || export_pdf(&cv, &opts))
        })
        .collect();

    let mut artifacts = Vec::with_capacity(handles.len());
    for handle in handles {
        artifacts.push(join_export(handle).await?);
    }

    let bytes = pack_zip(&artifacts)?;
    Ok(Artifact {
        filename: format!("{}_CV_ATS_PDFs.zip", safe_name(cv)),
        content_type: MIME_ZIP,
        bytes,
    })
}

fn spawn_export<F>(f: F) -> JoinHandle<Result<Artifact>>
where
    F: FnOnce() -> Result<Artifact> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
}

async fn join_export(handle: JoinHandle<Result<Artifact>>) -> Result<Artifact> {
    handle
        .await
        .map_err(|e| ExportError::Task(e.to_string()))?
}

fn pack_zip(artifacts: &[Artifact]) -> Result<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default().compression_method(zip::CompressionMethod::Deflated);
    for artifact in artifacts {
        debug!(member = %artifact.filename, size = artifact.bytes.len(), "adding bundle member");
        writer.start_file(&artifact.filename, options)?;
        writer.write_all(&artifact.bytes)?;
    }
    Ok(writer.finish()?.into_inner())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
