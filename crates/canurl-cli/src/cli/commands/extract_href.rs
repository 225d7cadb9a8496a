//! `canurl extract-href` – cleaned anchor links of an HTML document.

use anyhow::Result;
use canurl_core::Canonicalizer;
use std::path::Path;

use super::read_text;

/// Prints `url<TAB>text` per anchor, or a JSON array with `json`.
pub fn run_extract_href(
    canon: &Canonicalizer,
    path: Option<&Path>,
    host: Option<&str>,
    json: bool,
) -> Result<()> {
    let html = read_text(path)?;
    let anchors = canon.extract_href(&html, host);
    if json {
        println!("{}", serde_json::to_string_pretty(&anchors)?);
    } else {
        for a in &anchors {
            println!("{}\t{}", a.url, a.text.trim());
        }
    }
    Ok(())
}
