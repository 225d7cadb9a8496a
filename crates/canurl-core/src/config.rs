//! Rule data loading.
//!
//! Rules live in `~/.config/canurl/rules.toml`. On first use the built-in rule
//! file is written there so it can be edited. Any parse or pattern error is
//! returned to the caller; a partial rule set is never produced.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::rules::RuleSet;

/// Rule file shipped with the library.
pub const EMBEDDED_RULES: &str = include_str!("../data/rules.toml");

/// On-disk rule file layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Query keys removed from every URL.
    #[serde(default)]
    pub all: Vec<String>,
    /// Regex patterns removed from the raw URL string, applied in order.
    #[serde(default)]
    pub all_regex: Vec<String>,
    /// Host suffix -> query keys removed when the host ends with that suffix.
    #[serde(default)]
    pub hosts: BTreeMap<String, Vec<String>>,
}

pub fn rules_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("canurl")?;
    Ok(xdg_dirs.place_config_file("rules.toml")?)
}

/// Parses rule TOML and compiles it.
pub fn parse_rules(data: &str) -> Result<RuleSet> {
    let cfg: RulesConfig = toml::from_str(data).context("parse rules TOML")?;
    RuleSet::compile(&cfg)
}

/// The built-in rule set.
pub fn embedded() -> Result<RuleSet> {
    parse_rules(EMBEDDED_RULES).context("built-in rules")
}

/// Loads rules from an explicit file.
pub fn load_from(path: &Path) -> Result<RuleSet> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read rules {}", path.display()))?;
    let rules = parse_rules(&data).with_context(|| format!("load rules {}", path.display()))?;
    tracing::debug!(
        "loaded rules from {}: {} strip patterns, {} global keys, {} host rules",
        path.display(),
        rules.strip_patterns(),
        rules.global_keys(),
        rules.host_rules().len()
    );
    Ok(rules)
}

/// Load rules from the config dir, creating the default file if none exists.
pub fn load_or_init() -> Result<RuleSet> {
    let path = rules_path()?;
    if !path.exists() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, EMBEDDED_RULES)?;
        tracing::info!("created default rules at {}", path.display());
        return embedded();
    }
    load_from(&path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn embedded_rules_compile() {
        let rules = embedded().unwrap();
        assert!(rules.is_global_key("utm_source"));
        assert!(rules.is_host_key("www.youtube.com", "feature"));
        assert!(rules.strip_patterns() > 0);
    }

    #[test]
    fn rules_toml_custom_values() {
        let toml = r#"
            all = ["a", "b"]
            all_regex = ["x+"]

            [hosts]
            "example.com" = ["ref"]
        "#;
        let cfg: RulesConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.all, ["a", "b"]);
        assert_eq!(cfg.all_regex, ["x+"]);
        assert_eq!(cfg.hosts["example.com"], ["ref"]);
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let cfg: RulesConfig = toml::from_str("all = [\"a\"]").unwrap();
        assert!(cfg.all_regex.is_empty());
        assert!(cfg.hosts.is_empty());
    }

    #[test]
    fn rules_toml_roundtrip() {
        let cfg: RulesConfig = toml::from_str(EMBEDDED_RULES).unwrap();
        let text = toml::to_string_pretty(&cfg).unwrap();
        let parsed: RulesConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn load_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"all = [\"sid\"]\n[hosts]\n\"example.org\" = [\"x\"]\n")
            .unwrap();
        f.flush().unwrap();
        let rules = load_from(f.path()).unwrap();
        assert!(rules.is_global_key("sid"));
        assert!(rules.is_host_key("example.org", "x"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"all = \"not a list\"\n").unwrap();
        f.flush().unwrap();
        assert!(load_from(f.path()).is_err());

        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"all_regex = [\"[\"]\n").unwrap();
        f.flush().unwrap();
        assert!(load_from(f.path()).is_err());
    }
}
