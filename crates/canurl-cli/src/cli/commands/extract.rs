//! `canurl extract` – cleaned URLs found in free text.

use anyhow::Result;
use canurl_core::Canonicalizer;
use std::path::Path;

use super::read_text;

pub fn run_extract(canon: &Canonicalizer, path: Option<&Path>) -> Result<()> {
    let text = read_text(path)?;
    let mut found = 0usize;
    for url in canon.extract(&text) {
        println!("{url}");
        found += 1;
    }
    tracing::debug!("extract: {} urls from {} bytes", found, text.len());
    Ok(())
}
