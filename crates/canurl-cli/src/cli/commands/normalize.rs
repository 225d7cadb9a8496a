//! `canurl normalize` – structural normalization without rules.

use anyhow::{Context, Result};
use canurl_core::{normalize, CleanOptions};

use super::inputs;

pub fn run_normalize(urls: Vec<String>, keep_trailing_slash: bool) -> Result<()> {
    let opts = CleanOptions {
        remove_trailing_slash: !keep_trailing_slash,
        ..CleanOptions::default()
    };
    for url in inputs(urls)? {
        let normalized = normalize(url.as_str(), &opts).with_context(|| format!("normalize {url}"))?;
        println!("{normalized}");
    }
    Ok(())
}
