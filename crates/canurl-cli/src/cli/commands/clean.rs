//! `canurl clean` – full canonicalization.

use anyhow::{Context, Result};
use canurl_core::{Canonicalizer, CleanOptions};

use super::inputs;

pub fn run_clean(
    canon: &Canonicalizer,
    urls: Vec<String>,
    host: Option<String>,
    keep_trailing_slash: bool,
) -> Result<()> {
    let opts = CleanOptions {
        host,
        remove_trailing_slash: !keep_trailing_slash,
    };
    for url in inputs(urls)? {
        let cleaned = canon
            .clean(url.as_str(), &opts)
            .with_context(|| format!("clean {url}"))?;
        println!("{cleaned}");
    }
    Ok(())
}
