//! CLI for the swulist manifest helper.

use anyhow::Result;
use clap::Parser;

use crate::fetch;

/// Prints flashable update artifact URLs (.swu/.uuu) from a device build
/// manifest, space-joined on one line, for consumption by a shell pipeline.
#[derive(Debug, Parser)]
#[command(name = "swulist")]
#[command(about = "Print flashable artifact URLs from a device build manifest", long_about = None)]
pub struct Cli {
    /// Base URL of the build output server.
    pub url: String,

    /// Device path segment appended to the base URL (e.g. "karo-imx8mm").
    pub device_path: String,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        Cli::parse().run()
    }

    pub fn run(&self) -> Result<()> {
        println!("{}", self.output_line()?);
        Ok(())
    }

    /// Fetches the manifest and returns the space-joined flashable URLs.
    /// Empty when nothing matches; the trailing newline is added by `run`.
    pub fn output_line(&self) -> Result<String> {
        let manifest_url = fetch::manifest_url(&self.url, &self.device_path)?;
        tracing::debug!("fetching manifest from {}", manifest_url);

        let manifest = fetch::fetch_manifest(manifest_url.as_str())?;
        tracing::debug!(
            "manifest has {} file(s), {} flashable",
            manifest.files.len(),
            manifest.flashable_urls().len()
        );

        Ok(manifest.flashable_urls().join(" "))
    }
}
