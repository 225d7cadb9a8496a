//! Wrapper URLs that carry their real target in a query parameter.

/// Query key holding the embedded URL when `matches(host, path)` holds.
pub(super) struct EmbeddedRule {
    pub(super) matches: fn(&str, &str) -> bool,
    pub(super) key: &'static str,
}

pub(super) const EMBEDDED_RULES: &[EmbeddedRule] = &[
    EmbeddedRule {
        matches: google_news_redirect,
        key: "url",
    },
    EmbeddedRule {
        matches: xfruits,
        key: "url",
    },
    EmbeddedRule {
        matches: myspace_share,
        key: "u",
    },
];

/// Nesting limit for wrappers inside wrappers.
pub(super) const MAX_EMBED_DEPTH: usize = 5;

fn google_news_redirect(host: &str, path: &str) -> bool {
    host == "news.google.com" && path == "/news/url"
}

fn xfruits(host: &str, _path: &str) -> bool {
    host == "xfruits.com"
}

fn myspace_share(host: &str, path: &str) -> bool {
    host.contains("myspace.com") && path.contains("PostTo")
}

/// Key of the first rule matching `host` and `path`.
pub(super) fn embedded_key(host: &str, path: &str) -> Option<&'static str> {
    EMBEDDED_RULES
        .iter()
        .find(|rule| (rule.matches)(host, path))
        .map(|rule| rule.key)
}
