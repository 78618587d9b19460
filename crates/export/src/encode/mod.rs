//! The five format encoders. Each is an independent pure function over
//! `CvData` (plus an ATS profile where the format honors one) producing a
//! self-contained artifact; none depends on another.

pub mod docx;
pub mod json;
pub mod odt;
pub mod pdf;
pub mod text;

pub use docx::generate_docx;
pub use json::generate_json;
pub use odt::generate_odt;
pub use pdf::{generate_pdf, PdfOptions};
pub use text::generate_plain_text;
