//! URL-recognition grammar for free text.
//!
//! The pattern is composed from named pieces so each can be read (and tested)
//! on its own. Extraction boundaries depend on every character class here:
//! e.g. a sentence-ending period is not a valid path ending, so
//! `see http://example.com/a. next` matches `http://example.com/a`.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

/// Character before a URL: nothing, a dot, anything that is not part of a word
/// or an attribute/email context, start of text, or a colon.
const PRECEDING_CHARS: &str = r#"(?:|\.|[^\-/"':!=A-Z0-9_@＠]|^|:)"#;

const PROTOCOL: &str = r"https?://";

const DOMAIN: &str = r"\b(?:[a-z0-9\-]{1,63}\.)+[a-z]{2,63}(?::[0-9]+)?";

const GENERAL_PATH_CHARS: &str = r"[a-z0-9!*';:=+,$/%#\[\]\-_~]";

const PATH_ENDING_CHARS: &str = r"[a-z0-9=_#/+\-]";

const QUERY_CHARS: &str = r"[a-z0-9!*'();:&=+$/%#\[\]\-_.,~]";

const QUERY_ENDING_CHARS: &str = r"[a-z0-9_&=#/]";

/// Balanced parentheses inside a path: `/Primer_(film)`, `/S(dfd346)/`.
fn balanced_parens() -> String {
    format!(r"(?:\({GENERAL_PATH_CHARS}+\))")
}

/// One unit of path: a parenthesised run, `@user/`, a `.`/`,` that is followed
/// by more path, or a plain run.
fn path_chars() -> String {
    let parens = balanced_parens();
    format!(
        "(?:{parens}|@{GENERAL_PATH_CHARS}+/|[.,]{GENERAL_PATH_CHARS}+|{GENERAL_PATH_CHARS}+)"
    )
}

fn path_ending() -> String {
    format!("(?:{PATH_ENDING_CHARS}|{})", balanced_parens())
}

fn valid_url_pattern() -> String {
    let path_chars = path_chars();
    let ending = path_ending();
    format!(
        concat!(
            "(?i)",
            "(?P<before>{preceding})",
            "(?P<url>",
            "(?P<protocol>{protocol})?",
            "(?P<domain>{domain})",
            "(?P<path>/(?:{path}+{ending}|{path}+{ending}?|{ending})?)?",
            r"(?P<query>\?{query}*{query_end})?",
            ")"
        ),
        preceding = PRECEDING_CHARS,
        protocol = PROTOCOL,
        domain = DOMAIN,
        path = path_chars,
        ending = ending,
        query = QUERY_CHARS,
        query_end = QUERY_ENDING_CHARS,
    )
}

static GRAMMAR: LazyLock<UrlGrammar> =
    LazyLock::new(|| UrlGrammar::compile().expect("URL grammar compiles"));

/// Process-wide compiled grammar.
pub fn grammar() -> &'static UrlGrammar {
    &GRAMMAR
}

/// True if `s` is, in its entirety, a domain (optionally with `:port`).
pub fn is_domain(s: &str) -> bool {
    GRAMMAR.domain.is_match(s)
}

/// Compiled URL-recognition grammar.
#[derive(Debug)]
pub struct UrlGrammar {
    valid_url: Regex,
    domain: Regex,
}

/// One grammar match with its captured spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMatch<'t> {
    pub before: &'t str,
    pub url: &'t str,
    pub protocol: Option<&'t str>,
    pub domain: &'t str,
    pub path: Option<&'t str>,
    pub query: Option<&'t str>,
    /// Byte range of the whole match (preceding character included).
    pub span: Range<usize>,
}

impl UrlGrammar {
    pub fn compile() -> Result<Self, regex::Error> {
        Ok(Self {
            valid_url: Regex::new(&valid_url_pattern())?,
            domain: Regex::new(&format!("^(?i:{DOMAIN})$"))?,
        })
    }

    /// First match starting at or after byte offset `start`.
    pub fn find_at<'t>(&self, text: &'t str, start: usize) -> Option<UrlMatch<'t>> {
        let caps = self.valid_url.captures_at(text, start)?;
        let whole = caps.get(0)?;
        let text_of = |name: &str| caps.name(name).map(|m| m.as_str());
        Some(UrlMatch {
            before: text_of("before").unwrap_or(""),
            url: text_of("url")?,
            protocol: text_of("protocol"),
            domain: text_of("domain")?,
            path: text_of("path"),
            query: text_of("query"),
            span: whole.range(),
        })
    }

    /// All matches in order of appearance.
    pub fn matches<'g, 't>(&'g self, text: &'t str) -> UrlMatches<'g, 't> {
        UrlMatches {
            grammar: self,
            text,
            pos: 0,
        }
    }
}

/// Iterator over successive, non-overlapping grammar matches.
#[derive(Debug, Clone)]
pub struct UrlMatches<'g, 't> {
    grammar: &'g UrlGrammar,
    text: &'t str,
    pos: usize,
}

impl<'g, 't> Iterator for UrlMatches<'g, 't> {
    type Item = UrlMatch<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos > self.text.len() {
            return None;
        }
        let m = self.grammar.find_at(self.text, self.pos)?;
        // A match always contains a domain, so it is never empty.
        self.pos = m.span.end.max(self.pos + 1);
        Some(m)
    }
}
