//! Integration test: the public pipeline end to end over a fixture rule set.

mod common;

use canurl_core::{
    escape, normalize, unescape, unescape_unreserved, Canonicalizer, CleanOptions, HashOptions,
};

fn clean(s: &str) -> String {
    common::canonicalizer()
        .clean(s, &CleanOptions::default())
        .unwrap()
}

#[test]
fn clean_is_idempotent() {
    let inputs = [
        "http://example.com/foo/",
        "HTTPS://WWW.Example.COM:443/a//b/?b=2&utm_source=x&a=1#frag",
        "example.com:8080/path?ref=home",
        "http://example.com/a%2Fb?q=%41%2B",
        "http://news.google.com/news/url?url=http%3A%2F%2Fexample.org%2Fx%2F",
        "http://staff.tumblr.com/post/42/slug",
    ];
    for raw in inputs {
        let once = clean(raw);
        assert_eq!(clean(&once), once, "clean not idempotent for {raw}");
    }
}

#[test]
fn global_and_host_keys_removed_order_kept() {
    assert_eq!(
        clean("http://m.example.com/p?z=1&ref=nav&utm_campaign=c&a=2&fbclid=x&m=3"),
        "http://m.example.com/p?z=1&a=2&m=3"
    );
    // host-scoped keys only apply under their suffix
    assert_eq!(
        clean("http://example.org/p?ref=nav&utm_medium=m"),
        "http://example.org/p?ref=nav"
    );
}

#[test]
fn trailing_slash_and_root() {
    assert_eq!(clean("http://example.com/foo/"), "http://example.com/foo");
    assert_eq!(clean("http://example.com/"), "http://example.com/");
    assert_eq!(clean("http://example.com"), "http://example.com/");
}

#[test]
fn fragment_always_dropped() {
    assert_eq!(clean("http://example.com/a#frag"), "http://example.com/a");
    assert_eq!(
        normalize("http://example.com/a?#x", &CleanOptions::default())
            .unwrap()
            .to_string(),
        "http://example.com/a"
    );
}

#[test]
fn reserved_escapes_survive_unescape_unreserved() {
    assert_eq!(
        unescape_unreserved("http://example.com/a%2Fb").unwrap(),
        "http://example.com/a%2Fb"
    );
    assert_eq!(
        unescape_unreserved("http://example.com/a%41b").unwrap(),
        "http://example.com/aAb"
    );
    assert_eq!(
        unescape("http://example.com/a%2Fb?q=a+b").unwrap(),
        "http://example.com/a/b?q=a b"
    );
}

#[test]
fn escape_encodes_all_but_unreserved() {
    let text = "a b/c?d=é";
    assert_eq!(escape(text), "a%20b%2Fc%3Fd%3D%C3%A9");
}

#[test]
fn embedded_url_resolves() {
    assert_eq!(
        clean("http://news.google.com/news/url?url=http%3A%2F%2Fexample.com%2Fx"),
        "http://example.com/x"
    );
    assert_eq!(
        clean("http://www.myspace.com/Modules/PostTo/Pages/?u=http%3A%2F%2Fexample.org%2Fy%3Futm_source%3Dz"),
        "http://example.org/y"
    );
}

#[test]
fn site_rewrites() {
    assert_eq!(
        clean("http://twitter.com/#!/someone/status/12345"),
        "http://twitter.com/someone/status/12345"
    );
    assert_eq!(
        clean("http://staff.tumblr.com/post/42/slug"),
        "http://staff.tumblr.com/post/42"
    );
}

#[test]
fn strip_patterns_applied() {
    assert_eq!(
        clean("http://example.org/shop;JSESSIONID=0a1b2c?item=1"),
        "http://example.org/shop?item=1"
    );
}

#[test]
fn extraction_boundaries() {
    let canon = common::canonicalizer();
    let urls: Vec<String> = canon.extract("see http://example.com/a. next").collect();
    assert_eq!(urls, ["http://example.com/a"]);

    let urls: Vec<String> = canon.extract("not a url: foo.notarealtld").collect();
    assert!(urls.is_empty());

    let urls: Vec<String> = canon
        .extract("(via https://Example.org/x?utm_source=tw&id=9!) and www.example.com/y/")
        .collect();
    assert_eq!(urls, ["https://example.org/x?id=9", "http://www.example.com/y"]);
}

#[test]
fn extract_href_skips_bad_anchors() {
    let html = r#"<html><body>
        <a href="/rel/">relative</a>
        <a href="http://exa mple.com:70000/">broken</a>
        <a href="">empty</a>
        <a href="https://example.org/story/?ref=x&fbclid=1">story</a>
    </body></html>"#;
    let anchors = common::canonicalizer().extract_href(html, Some("example.com"));
    let urls: Vec<&str> = anchors.iter().map(|a| a.url.as_str()).collect();
    assert_eq!(urls, ["http://example.com/rel", "https://example.org/story?ref=x"]);
    assert_eq!(anchors[1].text, "story");
}

#[test]
fn validity() {
    let canon = common::canonicalizer();
    assert!(!canon.valid(None));
    assert!(!canon.valid(Some("not a url")));
    assert!(canon.valid(Some("http://example.com")));
    assert!(canon.valid(Some("http://xn--caf-dma.fr/")));
    assert!(!canon.valid(Some("http://localhost/")));
}

#[test]
fn hash_dedups_equivalent_urls() {
    let canon = common::canonicalizer();
    let opts = HashOptions {
        clean: true,
        ..HashOptions::default()
    };
    let a = canon.hash("http://Example.com/a/?utm_source=x#top", &opts).unwrap();
    let b = canon.hash("example.com/a", &opts).unwrap();
    assert_eq!(a, b);

    let raw_a = canon.hash("http://Example.com/a/", &HashOptions::default()).unwrap();
    let raw_b = canon.hash("example.com/a", &HashOptions::default()).unwrap();
    assert_ne!(raw_a, raw_b);
}

#[test]
fn builtin_rules_leave_unrelated_hosts_alone() {
    let canon = Canonicalizer::with_embedded_rules().unwrap();
    let opts = CleanOptions::default();
    for url in [
        "https://www.netflix.com/watch/1?t=60",
        "https://www.dropbox.com/x?s=1&t=2",
        "https://www.box.com/p?t=9",
    ] {
        assert_eq!(canon.clean(url, &opts).unwrap(), url);
    }
    assert_eq!(
        canon.clean("https://twitter.com/u/status/1?s=20&t=abc", &opts).unwrap(),
        "https://twitter.com/u/status/1"
    );
}
