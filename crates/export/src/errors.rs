//! Export error taxonomy.
//!
//! Unknown profile ids are not an error (lookup falls back to `universal`);
//! everything else propagates loudly — no retry, no degraded artifact, and a
//! bulk operation fails whole rather than producing a partial bundle.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    /// PDF assembly failure (builtin font registration, byte serialization).
    #[error("PDF generation error: {0}")]
    Pdf(String),

    /// DOCX assembly failure from the document packaging library.
    #[error("DOCX generation error: {0}")]
    Docx(String),

    /// ZIP container failure (ODT packaging or bundle archives).
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// A concurrently spawned encoder task panicked or was cancelled.
    #[error("export task failed: {0}")]
    Task(String),
}

pub type Result<T> = std::result::Result<T, ExportError>;
