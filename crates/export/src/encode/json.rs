//! JSON encoder — the lossless, round-trippable path.
//!
//! Serializes `CvData` verbatim: pretty-printed with 2-space indentation,
//! declared key order, no ATS profile, no ASCII sanitization.

use crate::errors::Result;
use crate::models::CvData;

pub fn generate_json(cv: &CvData) -> Result<String> {
    Ok(serde_json::to_string_pretty(cv)?)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
