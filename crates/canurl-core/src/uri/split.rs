//! Lenient RFC 3986 reference splitting (appendix B), with no validation
//! beyond scheme syntax and a numeric port.

use std::sync::LazyLock;

use regex::Regex;

use super::{split_query, Uri};
use crate::error::UriError;

static REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^(?:([^:/?#]+):)?(?://([^/?#]*))?([^?#]*)(?:\?([^#]*))?(?:#(.*))?$")
        .expect("URI reference pattern compiles")
});

static SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*$").expect("scheme pattern compiles"));

pub(super) fn split(input: &str) -> Result<Uri, UriError> {
    let malformed = || UriError::MalformedUri(input.to_string());
    let caps = REFERENCE.captures(input).ok_or_else(malformed)?;

    let scheme = caps.get(1).map(|m| m.as_str());
    if scheme.is_some_and(|s| !SCHEME.is_match(s)) {
        return Err(malformed());
    }

    let (userinfo, host, port) = match caps.get(2) {
        Some(authority) => split_authority(authority.as_str()).ok_or_else(malformed)?,
        None => (None, None, None),
    };

    Ok(Uri {
        scheme: scheme.map(str::to_string),
        userinfo,
        host,
        port,
        path: caps.get(3).map_or("", |m| m.as_str()).to_string(),
        query: caps.get(4).map(|m| split_query(m.as_str())),
        fragment: caps.get(5).map(|m| m.as_str().to_string()),
    })
}

type Authority = (Option<String>, Option<String>, Option<u16>);

fn split_authority(authority: &str) -> Option<Authority> {
    let (userinfo, host_port) = match authority.rsplit_once('@') {
        Some((userinfo, rest)) => (Some(userinfo.to_string()), rest),
        None => (None, authority),
    };

    let (host, port) = if host_port.starts_with('[') {
        let end = host_port.find(']')?;
        let rest = &host_port[end + 1..];
        let port = if rest.is_empty() {
            None
        } else {
            Some(rest.strip_prefix(':')?)
        };
        (&host_port[..=end], port)
    } else {
        match host_port.rsplit_once(':') {
            Some((host, port)) => (host, Some(port)),
            None => (host_port, None),
        }
    };

    let port = match port {
        Some(p) if !p.is_empty() => Some(p.parse::<u16>().ok()?),
        _ => None,
    };
    Some((userinfo, Some(host.to_string()), port))
}
