//! `canurl rules-path` – where rules are read from.

use anyhow::Result;
use canurl_core::config;
use std::path::Path;

pub fn run_rules_path(rules: Option<&Path>) -> Result<()> {
    match rules {
        Some(path) => println!("{}", path.display()),
        None => println!("{}", config::rules_path()?.display()),
    }
    Ok(())
}
