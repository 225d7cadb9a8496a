//! Compiled canonicalization rules.
//!
//! A `RuleSet` is built once from a [`RulesConfig`] and never mutated; every
//! strip pattern is compiled up front so a bad pattern fails at startup rather
//! than silently under-canonicalizing later.

use std::collections::HashSet;

use anyhow::{Context, Result};
use regex::Regex;

use crate::config::RulesConfig;

/// Query keys removed when the host ends with `suffix`.
#[derive(Debug, Clone)]
pub struct HostRule {
    pub suffix: String,
    pub keys: HashSet<String>,
}

#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    strip: Vec<Regex>,
    global_keys: HashSet<String>,
    host_rules: Vec<HostRule>,
}

impl RuleSet {
    pub fn compile(cfg: &RulesConfig) -> Result<Self> {
        let strip = cfg
            .all_regex
            .iter()
            .map(|p| Regex::new(p).with_context(|| format!("invalid strip pattern: {p}")))
            .collect::<Result<Vec<_>>>()?;

        let host_rules = cfg
            .hosts
            .iter()
            .map(|(suffix, keys)| HostRule {
                suffix: suffix.to_ascii_lowercase(),
                keys: keys.iter().cloned().collect(),
            })
            .collect();

        Ok(Self {
            strip,
            global_keys: cfg.all.iter().cloned().collect(),
            host_rules,
        })
    }

    /// Removes every match of every strip pattern, in order.
    pub fn strip(&self, raw: &str) -> String {
        let mut out = raw.to_string();
        for rgx in &self.strip {
            let replaced = rgx.replace_all(&out, "").into_owned();
            out = replaced;
        }
        out
    }

    pub fn is_global_key(&self, key: &str) -> bool {
        self.global_keys.contains(key)
    }

    /// True if any host rule matching `host` lists `key`.
    pub fn is_host_key(&self, host: &str, key: &str) -> bool {
        self.host_rules
            .iter()
            .any(|r| host.ends_with(&r.suffix) && r.keys.contains(key))
    }

    pub fn strip_patterns(&self) -> usize {
        self.strip.len()
    }

    pub fn global_keys(&self) -> usize {
        self.global_keys.len()
    }

    pub fn host_rules(&self) -> &[HostRule] {
        &self.host_rules
    }
}
