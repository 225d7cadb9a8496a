//! Final structural normalization, delegated to the `url` crate for URIs that
//! carry a host: scheme/host casing, IDNA, default ports, dot segments and
//! percent-encoding of characters that may not appear raw.
//!
//! Bytes the WHATWG parser would strip or reinterpret (controls, spaces, `\`)
//! are percent-encoded in path, query and fragment before it sees them.

use url::Url;

use super::{split_query, Uri};
use crate::error::UriError;
use crate::escape::{encode_unsafe, uppercase_escapes};

pub(super) fn canonicalize(mut uri: Uri) -> Result<Uri, UriError> {
    if let Some(scheme) = uri.scheme.as_mut() {
        scheme.make_ascii_lowercase();
    }

    if uri.host.is_none() {
        uri.path = uppercase_escapes(&uri.path);
        return Ok(uri);
    }

    if !uri.path.is_empty() && !uri.path.starts_with('/') {
        return Err(UriError::MalformedUri(format!(
            "relative path with an authority: {uri}"
        )));
    }

    encode_components(&mut uri);
    let serialized = uri.to_string();
    let parsed =
        Url::parse(&serialized).map_err(|e| UriError::MalformedUri(format!("{serialized}: {e}")))?;
    Ok(from_url(&parsed))
}

fn encode_components(uri: &mut Uri) {
    uri.path = encode_unsafe(&uri.path);
    if let Some(params) = uri.query.as_mut() {
        for p in params.iter_mut() {
            p.key = encode_unsafe(&p.key);
            if let Some(value) = p.value.as_mut() {
                *value = encode_unsafe(value);
            }
        }
    }
    if let Some(fragment) = uri.fragment.as_mut() {
        *fragment = encode_unsafe(fragment);
    }
}

fn from_url(url: &Url) -> Uri {
    let userinfo = match (url.username(), url.password()) {
        ("", None) => None,
        (user, None) => Some(user.to_string()),
        (user, Some(password)) => Some(format!("{user}:{password}")),
    };
    // `file:///x` has an authority with an empty host.
    let host = url
        .host_str()
        .map(str::to_ascii_lowercase)
        .or_else(|| url.has_authority().then(String::new));

    Uri {
        scheme: Some(url.scheme().to_string()),
        userinfo,
        host,
        port: url.port(),
        path: uppercase_escapes(url.path()),
        query: url.query().map(|q| split_query(&uppercase_escapes(q))),
        fragment: url.fragment().map(str::to_string),
    }
}
