//! Structural parsing with repair heuristics for scheme- or host-less input.

use super::{canonical, split::split, ToUri, Uri};
use crate::error::UriError;
use crate::grammar;
use crate::options::CleanOptions;

/// Schemes that legitimately have no host.
const NON_NETWORK_SCHEMES: [&str; 3] = ["javascript", "mailto", "xmpp"];

/// Parses `uri` into components. A `Uri` is returned unchanged.
///
/// String input is repaired before normalization:
/// - `example.com:8080/x` (read as scheme `example.com`) is re-parsed as
///   `http://example.com:8080/x`;
/// - a relative reference adopts `opts.host` when one is given;
/// - otherwise a leading `example.com/...` path segment is promoted to host;
/// - a host without a scheme gets `http`.
pub fn parse<U: ToUri>(uri: U, opts: &CleanOptions) -> Result<Uri, UriError> {
    uri.to_uri(opts)
}

pub(super) fn parse_str(input: &str, opts: &CleanOptions) -> Result<Uri, UriError> {
    parse_repaired(input, opts, false)
}

fn parse_repaired(input: &str, opts: &CleanOptions, reparsed: bool) -> Result<Uri, UriError> {
    let mut uri = split(input)?;

    if uri.host.is_none() && !has_non_network_scheme(&uri) {
        if uri.scheme.is_some() {
            if !reparsed {
                return parse_repaired(&format!("http://{input}"), opts, true);
            }
        } else if let Some(host) = &opts.host {
            uri.host = Some(host.clone());
        } else {
            promote_domain_segment(&mut uri);
        }
    }

    if uri.host.is_some() && uri.scheme.is_none() {
        uri.scheme = Some("http".to_string());
    }

    canonical::canonicalize(uri)
}

fn has_non_network_scheme(uri: &Uri) -> bool {
    uri.scheme
        .as_deref()
        .is_some_and(|s| NON_NETWORK_SCHEMES.iter().any(|n| s.eq_ignore_ascii_case(n)))
}

/// Moves a leading domain-shaped path segment into the host.
fn promote_domain_segment(uri: &mut Uri) {
    let mut parts: Vec<&str> = uri.path.split(['/', ':']).collect();
    while parts.last() == Some(&"") {
        parts.pop();
    }
    let Some(first) = parts.first() else {
        return;
    };
    if !grammar::is_domain(first) {
        return;
    }
    let host = first.to_string();
    let path = format!("/{}", parts[1..].join("/"));
    uri.host = Some(host);
    uri.path = path;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_default(s: &str) -> Uri {
        parse(s, &CleanOptions::default()).unwrap()
    }

    #[test]
    fn absolute_uri_is_normalized() {
        let uri = parse_default("HTTP://Example.COM:80/a/../b?x=%2f#F");
        assert_eq!(uri.to_string(), "http://example.com/b?x=%2F#F");
    }

    #[test]
    fn structured_value_is_returned_unchanged() {
        let uri = Uri {
            path: "odd".to_string(),
            ..Uri::default()
        };
        assert_eq!(parse(uri.clone(), &CleanOptions::default()).unwrap(), uri);
    }

    #[test]
    fn schemeless_domain_becomes_http() {
        assert_eq!(
            parse_default("example.com/path").to_string(),
            "http://example.com/path"
        );
        assert_eq!(parse_default("example.com").to_string(), "http://example.com/");
    }

    #[test]
    fn domain_with_port_is_reparsed() {
        let uri = parse_default("example.com:8080/path");
        assert_eq!(uri.host.as_deref(), Some("example.com"));
        assert_eq!(uri.port, Some(8080));
        assert_eq!(uri.path, "/path");
    }

    #[test]
    fn non_network_schemes_are_left_alone() {
        let uri = parse_default("mailto:someone@example.com");
        assert_eq!(uri.scheme.as_deref(), Some("mailto"));
        assert!(uri.host.is_none());
        assert_eq!(uri.to_string(), "mailto:someone@example.com");

        let uri = parse_default("JavaScript:void(0)");
        assert_eq!(uri.to_string(), "javascript:void(0)");
    }

    #[test]
    fn relative_path_adopts_host_override() {
        let opts = CleanOptions::with_host("example.com");
        let uri = parse("/about?x=1", &opts).unwrap();
        assert_eq!(uri.to_string(), "http://example.com/about?x=1");
    }

    #[test]
    fn relative_path_without_host_stays_relative() {
        let uri = parse_default("/about");
        assert!(!uri.is_absolute());
        assert!(uri.host.is_none());
        assert_eq!(uri.path, "/about");
    }

    #[test]
    fn non_domain_first_segment_is_not_promoted() {
        let uri = parse_default("not a url");
        assert!(uri.host.is_none());
        assert_eq!(uri.path, "not a url");
    }

    #[test]
    fn relative_path_with_host_override_is_malformed() {
        let opts = CleanOptions::with_host("example.com");
        assert!(parse("about.html", &opts).is_err());
    }

    #[test]
    fn international_host_is_punycoded() {
        let uri = parse_default("http://café.example/");
        assert_eq!(uri.host.as_deref(), Some("xn--caf-dma.example"));
    }
}
