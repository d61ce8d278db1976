//! Build-artifact manifest: the `{"files": [{"Url": ...}]}` document served
//! per device, plus the flashable-suffix filter.

use anyhow::{Context, Result};
use serde::Deserialize;

/// Suffixes of flashable update images. Matched literally against the end of
/// the URL, no dot required, exactly as the consuming flash tooling expects.
const FLASHABLE_SUFFIXES: [&str; 2] = ["swu", "uuu"];

/// Manifest for one device build. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
pub struct Manifest {
    pub files: Vec<FileEntry>,
}

/// One entry of the manifest's file list. Carries more fields upstream
/// (size, checksum); only the URL matters here.
#[derive(Debug, Deserialize)]
pub struct FileEntry {
    #[serde(rename = "Url")]
    pub url: String,
}

impl Manifest {
    /// Parse a manifest from a JSON response body.
    pub fn parse(body: &str) -> Result<Self> {
        serde_json::from_str(body).context("parse manifest JSON")
    }

    /// URLs of flashable entries, in manifest order.
    pub fn flashable_urls(&self) -> Vec<&str> {
        self.files
            .iter()
            .map(|f| f.url.as_str())
            .filter(|u| is_flashable(u))
            .collect()
    }
}

/// True if the URL names a flashable update image (ends in "swu" or "uuu").
pub fn is_flashable(url: &str) -> bool {
    FLASHABLE_SUFFIXES.iter().any(|s| url.ends_with(s))
}
