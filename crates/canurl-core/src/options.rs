//! Per-call options for parsing, normalizing, cleaning and hashing.

/// Options accepted by `parse`, `normalize` and the clean pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanOptions {
    /// Host adopted by relative inputs that carry neither scheme nor host
    /// (e.g. `href="/about"` on a page of that host).
    pub host: Option<String>,
    /// Strip one trailing `/` from non-root paths.
    pub remove_trailing_slash: bool,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            host: None,
            remove_trailing_slash: true,
        }
    }
}

impl CleanOptions {
    pub fn with_host(host: impl Into<String>) -> Self {
        Self {
            host: Some(host.into()),
            ..Self::default()
        }
    }
}

/// Digest behind a fingerprint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HashAlgorithm {
    /// First 16 bytes of SHA-256.
    #[default]
    Sha256,
    /// Full MD5, for dedup stores already keyed by postrank-uri's `hash`.
    Md5,
}

/// Options for `Canonicalizer::hash`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HashOptions {
    /// Hash the cleaned form instead of the raw input.
    pub clean: bool,
    pub algorithm: HashAlgorithm,
}
