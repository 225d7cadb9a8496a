//! CLI command handlers. Each command is in its own file.

mod clean;
mod escape;
mod extract;
mod extract_href;
mod hash;
mod normalize;
mod rules_path;
mod unescape;
mod valid;

pub use clean::run_clean;
pub use escape::run_escape;
pub use extract::run_extract;
pub use extract_href::run_extract_href;
pub use hash::run_hash;
pub use normalize::run_normalize;
pub use rules_path::run_rules_path;
pub use unescape::run_unescape;
pub use valid::run_valid;

use anyhow::{Context, Result};
use std::io::{self, Read};
use std::path::Path;

/// Whole text of `path`, or of stdin when no path is given.
fn read_text(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) => std::fs::read_to_string(p).with_context(|| format!("read {}", p.display())),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("read stdin")?;
            Ok(buf)
        }
    }
}

/// `args` as given, or the non-blank lines of stdin when there are none.
fn inputs(args: Vec<String>) -> Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args);
    }
    Ok(read_text(None)?
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect())
}
