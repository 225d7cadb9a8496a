//! Host-specific structural rewrites, applied after query-key removal.

use std::sync::LazyLock;

use regex::Regex;

use crate::uri::Uri;

static TUMBLR_POST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/post/[0-9]+/").expect("tumblr post pattern compiles"));

pub(super) fn rewrite(uri: &mut Uri) {
    let Some(host) = uri.host.as_deref() else {
        return;
    };
    if host == "twitter.com" || host == "mobile.twitter.com" {
        twitter_hash_bang(uri);
    } else if host.ends_with("tumblr.com") {
        tumblr_post_slug(uri);
    }
}

/// `twitter.com/#!/user/status/1` -> `twitter.com/user/status/1`.
fn twitter_hash_bang(uri: &mut Uri) {
    let Some(rest) = uri.fragment.as_deref().and_then(|f| f.strip_prefix('!')) else {
        return;
    };
    uri.path = if rest.starts_with('/') {
        rest.to_string()
    } else {
        format!("/{rest}")
    };
    uri.fragment = None;
}

/// `/post/123/some-slug` -> `/post/123/`.
fn tumblr_post_slug(uri: &mut Uri) {
    if let Some(m) = TUMBLR_POST.find(&uri.path) {
        let end = m.end();
        uri.path.truncate(end);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uri(host: &str, path: &str, fragment: Option<&str>) -> Uri {
        Uri {
            scheme: Some("http".to_string()),
            host: Some(host.to_string()),
            path: path.to_string(),
            fragment: fragment.map(str::to_string),
            ..Uri::default()
        }
    }

    #[test]
    fn twitter_hash_bang_moves_to_path() {
        let mut u = uri("twitter.com", "/", Some("!/user/status/1"));
        rewrite(&mut u);
        assert_eq!(u.path, "/user/status/1");
        assert!(u.fragment.is_none());

        let mut u = uri("mobile.twitter.com", "/", Some("!user"));
        rewrite(&mut u);
        assert_eq!(u.path, "/user");
    }

    #[test]
    fn twitter_plain_fragment_untouched() {
        let mut u = uri("twitter.com", "/a", Some("top"));
        rewrite(&mut u);
        assert_eq!(u.path, "/a");
        assert_eq!(u.fragment.as_deref(), Some("top"));

        let mut u = uri("api.twitter.com", "/", Some("!/x"));
        rewrite(&mut u);
        assert_eq!(u.path, "/");
    }

    #[test]
    fn tumblr_slug_is_dropped() {
        let mut u = uri("staff.tumblr.com", "/post/123456/some-slug", None);
        rewrite(&mut u);
        assert_eq!(u.path, "/post/123456/");

        let mut u = uri("staff.tumblr.com", "/post/123456/slug/more", None);
        rewrite(&mut u);
        assert_eq!(u.path, "/post/123456/");
    }

    #[test]
    fn tumblr_without_post_id_untouched() {
        let mut u = uri("staff.tumblr.com", "/post/123456", None);
        rewrite(&mut u);
        assert_eq!(u.path, "/post/123456");

        let mut u = uri("staff.tumblr.com", "/tagged/rust", None);
        rewrite(&mut u);
        assert_eq!(u.path, "/tagged/rust");
    }
}
