//! `canurl valid` – public-suffix validity per URL.

use anyhow::{bail, Result};
use canurl_core::Canonicalizer;

use super::inputs;

/// Prints `valid` or `invalid` per URL; fails if any URL is invalid.
pub fn run_valid(canon: &Canonicalizer, urls: Vec<String>) -> Result<()> {
    let mut invalid = 0usize;
    for url in inputs(urls)? {
        if canon.valid(Some(url.as_str())) {
            println!("valid\t{url}");
        } else {
            println!("invalid\t{url}");
            invalid += 1;
        }
    }
    if invalid > 0 {
        bail!("{invalid} invalid URL(s)");
    }
    Ok(())
}
