//! Structured URI value and the structural parser.
//!
//! `Uri` is owned per call. Query parameters keep their raw (still
//! percent-encoded) text so that parameters the rule engine leaves alone
//! serialize exactly as they came in.

mod canonical;
mod parse;
mod split;

use std::fmt;

use crate::error::UriError;
use crate::escape::decode_form_component;
use crate::options::CleanOptions;

pub use parse::parse;

/// One `key[=value]` pair of a query string, as raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParam {
    pub key: String,
    pub value: Option<String>,
}

impl QueryParam {
    /// Key with `+` and percent escapes decoded.
    pub fn decoded_key(&self) -> String {
        decode_form_component(&self.key)
    }

    /// Value with `+` and percent escapes decoded; `None` for a bare key.
    pub fn decoded_value(&self) -> Option<String> {
        self.value.as_deref().map(decode_form_component)
    }
}

/// Components of a URI reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Uri {
    pub scheme: Option<String>,
    pub userinfo: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub path: String,
    /// `None` when the URI has no `?`; `Some(vec![])` for a bare `?`.
    pub query: Option<Vec<QueryParam>>,
    pub fragment: Option<String>,
}

impl Uri {
    /// A URI is absolute when it names a scheme.
    pub fn is_absolute(&self) -> bool {
        self.scheme.is_some()
    }

    pub fn query_string(&self) -> Option<String> {
        self.query.as_ref().map(|params| {
            params
                .iter()
                .map(|p| match &p.value {
                    Some(v) => format!("{}={}", p.key, v),
                    None => p.key.clone(),
                })
                .collect::<Vec<_>>()
                .join("&")
        })
    }

    /// Decoded value of `key`. With repeated keys the last occurrence wins.
    pub fn query_value(&self, key: &str) -> Option<String> {
        self.query
            .as_ref()?
            .iter()
            .rev()
            .find(|p| p.decoded_key() == key)
            .and_then(QueryParam::decoded_value)
    }
}

pub(crate) fn split_query(query: &str) -> Vec<QueryParam> {
    if query.is_empty() {
        return Vec::new();
    }
    query
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some((k, v)) => QueryParam {
                key: k.to_string(),
                value: Some(v.to_string()),
            },
            None => QueryParam {
                key: pair.to_string(),
                value: None,
            },
        })
        .collect()
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(scheme) = &self.scheme {
            write!(f, "{scheme}:")?;
        }
        if let Some(host) = &self.host {
            f.write_str("//")?;
            if let Some(userinfo) = &self.userinfo {
                write!(f, "{userinfo}@")?;
            }
            f.write_str(host)?;
            if let Some(port) = self.port {
                write!(f, ":{port}")?;
            }
        }
        f.write_str(&self.path)?;
        if let Some(query) = self.query_string() {
            write!(f, "?{query}")?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}

/// Conversion into a parsed `Uri`. Already-structured values pass through
/// untouched, so every entry point accepts either form.
pub trait ToUri {
    fn to_uri(self, opts: &CleanOptions) -> Result<Uri, UriError>;
}

impl ToUri for Uri {
    fn to_uri(self, _opts: &CleanOptions) -> Result<Uri, UriError> {
        Ok(self)
    }
}

impl ToUri for &Uri {
    fn to_uri(self, _opts: &CleanOptions) -> Result<Uri, UriError> {
        Ok(self.clone())
    }
}

impl ToUri for &str {
    fn to_uri(self, opts: &CleanOptions) -> Result<Uri, UriError> {
        parse::parse_str(self, opts)
    }
}

impl ToUri for &String {
    fn to_uri(self, opts: &CleanOptions) -> Result<Uri, UriError> {
        parse::parse_str(self, opts)
    }
}

impl ToUri for String {
    fn to_uri(self, opts: &CleanOptions) -> Result<Uri, UriError> {
        parse::parse_str(&self, opts)
    }
}
