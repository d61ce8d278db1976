//! Manifest retrieval: URL construction and the single blocking HTTP GET.
//!
//! Uses the curl crate (libcurl) for the transfer, following redirects. One
//! request per invocation; the handle is dropped once the body is read.

use anyhow::{Context, Result};
use std::time::Duration;
use thiserror::Error;
use url::Url;

use crate::manifest::Manifest;

/// Failure classes of the manifest transfer itself. Network-level curl errors
/// are attached as anyhow context instead; nothing here is retried.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Response status outside 2xx.
    #[error("GET {url} returned HTTP {code}")]
    Http { url: String, code: u32 },
    /// Response body was not valid UTF-8.
    #[error("response body is not valid UTF-8")]
    BodyNotUtf8(#[from] std::string::FromUtf8Error),
}

/// Builds the manifest URL from the base URL and the device path segment.
///
/// A trailing slash is enforced on both parts (appended only when absent),
/// then the device segment is resolved against the base per RFC 3986 — an
/// absolute device segment replaces the base entirely.
pub fn manifest_url(base: &str, device_path: &str) -> Result<Url> {
    let base = Url::parse(&ensure_trailing_slash(base))
        .with_context(|| format!("invalid base URL: {base}"))?;
    base.join(&ensure_trailing_slash(device_path))
        .with_context(|| format!("invalid device path segment: {device_path}"))
}

fn ensure_trailing_slash(s: &str) -> String {
    if s.ends_with('/') {
        s.to_string()
    } else {
        format!("{s}/")
    }
}

/// Fetches and parses the manifest at `url`.
pub fn fetch_manifest(url: &str) -> Result<Manifest> {
    let body = fetch_body(url)?;
    Manifest::parse(&body)
}

/// Performs the GET and returns the body decoded as UTF-8.
///
/// Follows redirects. Fixed connect/total timeouts so a hung endpoint cannot
/// stall the surrounding CI job. Fails on any status outside 2xx.
pub fn fetch_body(url: &str) -> Result<String> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).context("invalid URL")?;
    easy.follow_location(true)?;
    easy.connect_timeout(Duration::from_secs(15))?;
    easy.timeout(Duration::from_secs(30))?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer
            .perform()
            .with_context(|| format!("GET {url} failed"))?;
    }

    let code = easy.response_code().context("no response code")?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Http {
            url: url.to_string(),
            code,
        }
        .into());
    }

    String::from_utf8(body).map_err(|e| FetchError::BodyNotUtf8(e).into())
}
