//! Structural canonicalization: slashes, empty query, fragment.

use crate::error::UriError;
use crate::options::CleanOptions;
use crate::uri::{parse, ToUri, Uri};

/// Collapses `//` runs in the path, strips one trailing `/` (unless the path is
/// the root or `opts.remove_trailing_slash` is off), drops an empty query and
/// always drops the fragment.
pub fn normalize<U: ToUri>(uri: U, opts: &CleanOptions) -> Result<Uri, UriError> {
    let mut u = parse(uri, opts)?;
    u.path = squeeze_slashes(&u.path);
    if u.path.len() != 1 && opts.remove_trailing_slash {
        if let Some(stripped) = u.path.strip_suffix('/') {
            u.path = stripped.to_string();
        }
    }
    if u.query.as_ref().is_some_and(Vec::is_empty) {
        u.query = None;
    }
    u.fragment = None;
    Ok(u)
}

fn squeeze_slashes(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut prev_slash = false;
    for c in path.chars() {
        if c == '/' {
            if !prev_slash {
                out.push(c);
            }
            prev_slash = true;
        } else {
            out.push(c);
            prev_slash = false;
        }
    }
    out
}
