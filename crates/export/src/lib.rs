//! cv-export — multi-format CV export pipeline.
//!
//! A canonical [`models::CvData`] document is compiled once into an ordered
//! [`plan::DocumentPlan`] and rendered by five stateless encoders (PDF,
//! DOCX, ODT, plain text, JSON). PDF rendering is parameterized by an ATS
//! profile from the built-in [`profiles`] catalogue; [`bundle`] packs
//! artifacts into downloadable ZIPs.

pub mod bundle;
pub mod dates;
pub mod encode;
pub mod errors;
pub mod layout;
pub mod models;
pub mod plan;
pub mod profiles;
pub mod sanitize;
pub mod skills;

pub use bundle::{
    export_all_ats_pdfs, export_all_formats, export_docx, export_json, export_odt, export_pdf,
    export_text, Artifact,
};
pub use encode::{
    generate_docx, generate_json, generate_odt, generate_pdf, generate_plain_text, PdfOptions,
};
pub use errors::{ExportError, Result};
pub use models::CvData;
pub use profiles::{all_profiles, get_ats_profile, profile_ids, AtsProfile};
