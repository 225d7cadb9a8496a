//! Percent-encoding and decoding.
//!
//! Decoding comes in two flavours: `unescape` decodes every `%XX`, while
//! `unescape_unreserved` leaves escapes of RFC 3986 reserved characters alone
//! so that decoding never turns e.g. `%2F` inside a segment into a delimiter.

use std::collections::HashSet;
use std::sync::LazyLock;

use url::form_urlencoded;

use crate::error::UriError;
use crate::options::CleanOptions;
use crate::uri::ToUri;

/// RFC 3986 section 2.2 reserved characters, plus `%` itself.
pub const RESERVED_CHARS: &str = ":/?#[]@!$&'()*+,;=%";

/// Upper-case percent forms of `RESERVED_CHARS` (`:` -> `%3A`).
pub static ENCODED_RESERVED_CHARS: LazyLock<HashSet<String>> = LazyLock::new(|| {
    RESERVED_CHARS
        .bytes()
        .map(|b| format!("%{b:02X}"))
        .collect()
});

/// True if `code` (a `%XX` triplet, any hex case) encodes a reserved character.
pub fn is_reserved_escape(code: &str) -> bool {
    ENCODED_RESERVED_CHARS.contains(&code.to_ascii_uppercase())
}

/// Percent-encodes every byte outside `[A-Za-z0-9_.-]` as upper-case `%XX`.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for b in text.bytes() {
        match b {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_' | b'.' | b'-' => out.push(b as char),
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}

/// Parses `uri`, turns `+` into space inside the query and decodes every
/// percent escape of the serialized form.
pub fn unescape<U: ToUri>(uri: U) -> Result<String, UriError> {
    decode_uri(uri, |_| false)
}

/// Like [`unescape`], but escapes of reserved characters stay encoded, as do
/// escapes of bytes a URL parser would drop or rewrite (see [`is_unsafe_byte`]).
pub fn unescape_unreserved<U: ToUri>(uri: U) -> Result<String, UriError> {
    decode_uri(uri, |code| is_reserved_escape(code) || is_unsafe_escape(code))
}

/// C0 controls, space, DEL and `\`. A URL parser strips tabs and newlines,
/// trims trailing spaces and reads `\` as `/`, so these only survive encoded.
pub fn is_unsafe_byte(b: u8) -> bool {
    b <= b' ' || b == 0x7F || b == b'\\'
}

fn is_unsafe_escape(code: &str) -> bool {
    code.strip_prefix('%')
        .and_then(|hex| u8::from_str_radix(hex, 16).ok())
        .is_some_and(is_unsafe_byte)
}

/// Percent-encodes every unsafe byte of `s`, leaving everything else as is.
pub(crate) fn encode_unsafe(s: &str) -> String {
    if !s.bytes().any(is_unsafe_byte) {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        if c.is_ascii() && is_unsafe_byte(c as u8) {
            out.push_str(&format!("%{:02X}", c as u32));
        } else {
            out.push(c);
        }
    }
    out
}

fn decode_uri<U: ToUri>(uri: U, keep_encoded: fn(&str) -> bool) -> Result<String, UriError> {
    let mut parsed = uri.to_uri(&CleanOptions::default())?;
    if let Some(params) = parsed.query.as_mut() {
        for param in params.iter_mut() {
            param.key = param.key.replace('+', " ");
            if let Some(value) = param.value.as_mut() {
                *value = value.replace('+', " ");
            }
        }
    }

    let serialized = parsed.to_string();
    let decoded = percent_decode(serialized.as_bytes(), |code| {
        std::str::from_utf8(code).is_ok_and(keep_encoded)
    });
    String::from_utf8(decoded).map_err(|_| UriError::InvalidEncoding(serialized))
}

/// Decodes a single form component (`+` is a space). Invalid UTF-8 is replaced.
/// `raw` holds no `&`; a leading `=` makes the whole of it the pair's value.
pub(crate) fn decode_form_component(raw: &str) -> String {
    let pair = format!("={raw}");
    form_urlencoded::parse(pair.as_bytes())
        .next()
        .map(|(_, value)| value.into_owned())
        .unwrap_or_default()
}

/// Upper-cases the hex digits of every well-formed `%xx` escape.
pub(crate) fn uppercase_escapes(s: &str) -> String {
    if !s.contains('%') {
        return s.to_string();
    }
    let mut out = s.as_bytes().to_vec();
    let mut i = 0;
    while i + 2 < out.len() {
        if out[i] == b'%' && out[i + 1].is_ascii_hexdigit() && out[i + 2].is_ascii_hexdigit() {
            out[i + 1].make_ascii_uppercase();
            out[i + 2].make_ascii_uppercase();
            i += 3;
        } else {
            i += 1;
        }
    }
    String::from_utf8(out).unwrap_or_else(|_| s.to_string())
}

fn percent_decode(input: &[u8], keep_encoded: impl Fn(&[u8]) -> bool) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    let mut i = 0;
    while i < input.len() {
        if input[i] == b'%' && i + 2 < input.len() {
            if let (Some(high), Some(low)) = (hex_digit(input[i + 1]), hex_digit(input[i + 2])) {
                let code = &input[i..i + 3];
                if keep_encoded(code) {
                    out.extend_from_slice(code);
                } else {
                    out.push(high << 4 | low);
                }
                i += 3;
                continue;
            }
        }
        out.push(input[i]);
        i += 1;
    }
    out
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
