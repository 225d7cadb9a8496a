//! `canurl unescape` – percent-decode URLs.

use anyhow::{Context, Result};
use canurl_core::{unescape, unescape_unreserved};

use super::inputs;

pub fn run_unescape(urls: Vec<String>, unreserved: bool) -> Result<()> {
    for url in inputs(urls)? {
        let decoded = if unreserved {
            unescape_unreserved(url.as_str())
        } else {
            unescape(url.as_str())
        };
        println!("{}", decoded.with_context(|| format!("unescape {url}"))?);
    }
    Ok(())
}
