//! End-to-end pipeline test: deserialize a CV from its JSON wire form,
//! export every artifact, and write them to disk the way a download
//! handler would.

use std::fs;
use std::io::Cursor;

use cv_export::{
    export_all_ats_pdfs, export_all_formats, export_pdf, generate_json, CvData, PdfOptions,
};

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

const FIXTURE: &str = r#"{
  "personal": {
    "name": "Ivan Kokalović",
    "title": "Backend Developer & Infrastructure Engineer",
    "email": "ivan@example.com",
    "phone": "+49 152 0000000",
    "location": "Leipzig, Germany",
    "linkedin": "https://linkedin.com/in/ivan",
    "github": "https://github.com/ivan"
  },
  "summary": "Backend and infrastructure engineer with seven years of experience.",
  "experience": [
    {
      "company": "Acme GmbH",
      "position": "Senior Engineer",
      "location": "Berlin",
      "startDate": "2021-03",
      "endDate": "present",
      "highlights": ["Led migration to infrastructure-as-code across three teams"],
      "skills": ["Terraform", "Rust"]
    }
  ],
  "education": [
    {
      "institution": "TU Somewhere",
      "degree": "B.Sc.",
      "area": "Computer Science",
      "startDate": "2013-10",
      "endDate": "2017-09",
      "highlights": []
    }
  ],
  "skills": [
    {"name": "Rust", "category": "Languages"},
    {"name": "Terraform", "category": "Infrastructure"}
  ],
  "certifications": [
    {"name": "CKA", "issuer": "CNCF"}
  ],
  "projects": [
    {
      "name": "Homelab",
      "description": "Self-hosted services on bare metal",
      "technologies": ["NixOS", "Kubernetes"]
    }
  ],
  "languages": [
    {"name": "English", "level": "Fluent", "levelNumber": 5},
    {"name": "German", "level": "B2", "levelNumber": 4}
  ]
}"#;

fn fixture_cv() -> CvData {
    serde_json::from_str(FIXTURE).expect("fixture parses")
}

#[tokio::test]
async fn test_full_export_writes_all_artifacts_to_disk() {
    init_tracing();
    let cv = fixture_cv();
    let dir = tempfile::tempdir().unwrap();

    let bundle = export_all_formats(&cv).await.unwrap();
    let path = dir.path().join(&bundle.filename);
    fs::write(&path, &bundle.bytes).unwrap();

    let written = fs::read(&path).unwrap();
    let archive = zip::ZipArchive::new(Cursor::new(written)).unwrap();
    assert_eq!(archive.len(), 5);
}

#[tokio::test]
async fn test_ats_pdf_bundle_round_trips_through_disk() {
    init_tracing();
    let cv = fixture_cv();
    let dir = tempfile::tempdir().unwrap();

    let bundle = export_all_ats_pdfs(&cv, true).await.unwrap();
    let path = dir.path().join(&bundle.filename);
    fs::write(&path, &bundle.bytes).unwrap();

    let written = fs::read(&path).unwrap();
    let mut archive = zip::ZipArchive::new(Cursor::new(written)).unwrap();
    assert_eq!(archive.len(), 9);

    // Every member is itself a valid PDF.
    for i in 0..archive.len() {
        use std::io::Read;
        let mut entry = archive.by_index(i).unwrap();
        let mut head = [0u8; 5];
        entry.read_exact(&mut head).unwrap();
        assert_eq!(&head, b"%PDF-", "member {} is not a PDF", entry.name());
    }
}

#[test]
fn test_json_artifact_round_trips_the_fixture() {
    let cv = fixture_cv();
    let json = generate_json(&cv).unwrap();
    let parsed: CvData = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, cv);
}

#[test]
fn test_per_profile_pdfs_differ() {
    let cv = fixture_cv();
    let universal = export_pdf(&cv, &PdfOptions::default()).unwrap();
    let taleo = export_pdf(
        &cv,
        &PdfOptions {
            ats_profile_id: Some("taleo".to_string()),
            include_projects: true,
        },
    )
    .unwrap();
    // Different typography and margins must yield different documents.
    assert_ne!(universal.bytes, taleo.bytes);
    assert_ne!(universal.filename, taleo.filename);
}
