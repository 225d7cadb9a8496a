//! `canurl hash` – dedup fingerprints.

use anyhow::{Context, Result};
use canurl_core::{Canonicalizer, HashAlgorithm, HashOptions};

use super::inputs;

/// Prints `fingerprint  url`, like `sha256sum`.
pub fn run_hash(canon: &Canonicalizer, urls: Vec<String>, clean: bool, md5: bool) -> Result<()> {
    let algorithm = if md5 {
        HashAlgorithm::Md5
    } else {
        HashAlgorithm::Sha256
    };
    let opts = HashOptions { clean, algorithm };
    for url in inputs(urls)? {
        let digest = canon.hash(&url, &opts).with_context(|| format!("hash {url}"))?;
        println!("{}  {}", digest, url);
    }
    Ok(())
}
