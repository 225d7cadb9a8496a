//! Rule-driven canonicalization and the public clean pipeline.
//!
//! `clean` = `unescape_unreserved` -> `c14n` -> `normalize`. Within `c14n` the
//! order is fixed: strip patterns on the raw string, parse, resolve embedded
//! URLs, drop global then host-scoped query keys, then host-specific rewrites.

mod embedded;
mod site;

use crate::config;
use crate::domain;
use crate::error::UriError;
use crate::escape::unescape_unreserved;
use crate::hash::fingerprint_with;
use crate::normalize::normalize;
use crate::options::{CleanOptions, HashOptions};
use crate::rules::RuleSet;
use crate::uri::{parse, ToUri, Uri};

use embedded::{embedded_key, MAX_EMBED_DEPTH};

/// Canonicalization engine over an immutable rule set. Cheap to share across
/// threads by reference.
#[derive(Debug, Clone)]
pub struct Canonicalizer {
    rules: RuleSet,
}

impl Canonicalizer {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Engine over the built-in rule file.
    pub fn with_embedded_rules() -> anyhow::Result<Self> {
        Ok(Self::new(config::embedded()?))
    }

    /// Canonical string form of `uri`.
    ///
    /// ```
    /// use canurl_core::{Canonicalizer, CleanOptions};
    ///
    /// let canon = Canonicalizer::with_embedded_rules()?;
    /// let url = canon.clean("HTTP://Example.com/a/?utm_source=feed#top", &CleanOptions::default())?;
    /// assert_eq!(url, "http://example.com/a");
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn clean<U: ToUri>(&self, uri: U, opts: &CleanOptions) -> Result<String, UriError> {
        self.clean_uri(uri, opts).map(|u| u.to_string())
    }

    /// Canonical structured form of `uri`.
    pub fn clean_uri<U: ToUri>(&self, uri: U, opts: &CleanOptions) -> Result<Uri, UriError> {
        self.clean_at(uri, opts, 0)
    }

    fn clean_at<U: ToUri>(&self, uri: U, opts: &CleanOptions, depth: usize) -> Result<Uri, UriError> {
        let unescaped = unescape_unreserved(uri)?;
        let canonical = self.c14n_at(&unescaped, opts, depth)?;
        normalize(canonical, opts)
    }

    /// Applies the rule set to a raw URI string.
    pub fn c14n(&self, uri: &str, opts: &CleanOptions) -> Result<Uri, UriError> {
        self.c14n_at(uri, opts, 0)
    }

    fn c14n_at(&self, uri: &str, opts: &CleanOptions, depth: usize) -> Result<Uri, UriError> {
        let stripped = self.rules.strip(uri);
        let parsed = parse(stripped.as_str(), opts)?;
        let mut u = self.embedded_at(parsed, depth)?;
        self.remove_query_keys(&mut u);
        site::rewrite(&mut u);
        Ok(u)
    }

    /// Replaces a known wrapper URL with the cleaned URL it carries. URIs that
    /// match no wrapper, or whose target parameter is absent or empty, come
    /// back unchanged.
    pub fn embedded(&self, uri: Uri) -> Result<Uri, UriError> {
        self.embedded_at(uri, 0)
    }

    fn embedded_at(&self, uri: Uri, depth: usize) -> Result<Uri, UriError> {
        let Some(key) = uri
            .host
            .as_deref()
            .and_then(|host| embedded_key(host, &uri.path))
        else {
            return Ok(uri);
        };
        let Some(target) = uri.query_value(key).filter(|v| !v.is_empty()) else {
            return Ok(uri);
        };
        if depth >= MAX_EMBED_DEPTH {
            tracing::debug!("embedded URL nesting limit reached, keeping {}", uri);
            return Ok(uri);
        }
        self.clean_at(target.as_str(), &CleanOptions::default(), depth + 1)
    }

    fn remove_query_keys(&self, uri: &mut Uri) {
        let host = uri.host.as_deref();
        let Some(params) = uri.query.as_mut() else {
            return;
        };
        params.retain(|p| {
            let key = p.decoded_key();
            !self.rules.is_global_key(&key)
                && !host.is_some_and(|h| self.rules.is_host_key(h, &key))
        });
    }

    /// True if `uri` cleans to a URI whose host sits under a known public
    /// suffix. `None` and anything unparseable are invalid.
    pub fn valid(&self, uri: Option<&str>) -> bool {
        let Some(uri) = uri else {
            return false;
        };
        match self.clean_uri(uri, &CleanOptions::default()) {
            Ok(cleaned) => cleaned.host.as_deref().is_some_and(domain::is_valid_host),
            Err(err) => {
                tracing::debug!("not a valid URI {:?}: {}", uri, err);
                false
            }
        }
    }

    /// Dedup fingerprint of the raw input, or of its cleaned form with
    /// `opts.clean`.
    pub fn hash(&self, uri: &str, opts: &HashOptions) -> Result<String, UriError> {
        if opts.clean {
            let cleaned = self.clean(uri, &CleanOptions::default())?;
            Ok(fingerprint_with(&cleaned, opts.algorithm))
        } else {
            Ok(fingerprint_with(uri, opts.algorithm))
        }
    }
}
