//! URL extraction from free text and HTML anchors.
//!
//! Extraction never fails: candidates with an unrecognized public suffix,
//! anchors with an empty `href` and anything the clean pipeline rejects are
//! skipped and the scan continues.

use std::sync::LazyLock;

use scraper::{Html, Selector};
use serde::Serialize;

use crate::c14n::Canonicalizer;
use crate::domain::has_public_suffix;
use crate::grammar::{grammar, UrlMatches};
use crate::options::CleanOptions;

static ANCHORS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("anchor selector parses"));

/// A cleaned, absolute link and the text of the anchor carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Anchor {
    pub url: String,
    pub text: String,
}

/// Lazy sequence of cleaned URLs found in a text, in order of appearance.
/// Duplicates are kept. A clone scans on independently from the same point.
#[derive(Debug, Clone)]
pub struct Extracted<'c, 't> {
    canon: &'c Canonicalizer,
    matches: UrlMatches<'static, 't>,
}

impl Iterator for Extracted<'_, '_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        for m in self.matches.by_ref() {
            if !has_public_suffix(m.domain) {
                tracing::debug!("skipping {:?}: unknown public suffix", m.url);
                continue;
            }
            match self.canon.clean(m.url, &CleanOptions::default()) {
                Ok(url) => return Some(url),
                Err(err) => {
                    tracing::debug!("skipping {:?}: {}", m.url, err);
                }
            }
        }
        None
    }
}

impl Canonicalizer {
    /// Cleaned URLs found in `text`.
    ///
    /// ```
    /// use canurl_core::Canonicalizer;
    ///
    /// let canon = Canonicalizer::with_embedded_rules()?;
    /// let urls: Vec<String> = canon.extract("see http://example.com/a. next").collect();
    /// assert_eq!(urls, ["http://example.com/a"]);
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn extract<'c, 't>(&'c self, text: &'t str) -> Extracted<'c, 't> {
        Extracted {
            canon: self,
            matches: grammar().matches(text),
        }
    }

    /// Absolute links of every `<a href>` in `html`. Relative hrefs resolve
    /// against `host` when given and are dropped otherwise.
    pub fn extract_href(&self, html: &str, host: Option<&str>) -> Vec<Anchor> {
        let document = Html::parse_document(html);
        let opts = CleanOptions {
            host: host.map(str::to_string),
            ..CleanOptions::default()
        };

        let mut anchors = Vec::new();
        for element in document.select(&ANCHORS) {
            let Some(href) = element.value().attr("href").map(str::trim) else {
                continue;
            };
            if href.is_empty() {
                continue;
            }
            let url = match self.clean_uri(href, &opts) {
                Ok(url) => url,
                Err(err) => {
                    tracing::debug!("skipping anchor {:?}: {}", href, err);
                    continue;
                }
            };
            if !url.is_absolute() {
                continue;
            }
            anchors.push(Anchor {
                url: url.to_string(),
                text: element.text().collect::<String>(),
            });
        }
        anchors
    }
}
