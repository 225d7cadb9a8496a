//! Shared fixtures: a small rule set with one entry of each kind.

use canurl_core::config::parse_rules;
use canurl_core::Canonicalizer;

pub const RULES: &str = r#"
all = ["utm_source", "utm_medium", "utm_campaign", "fbclid"]
all_regex = ['(?i);jsessionid=[0-9a-z]+']

[hosts]
"example.com" = ["ref"]
"youtube.com" = ["feature"]
"#;

pub fn canonicalizer() -> Canonicalizer {
    Canonicalizer::new(parse_rules(RULES).expect("fixture rules compile"))
}
