//! URL extraction, escaping and canonicalization.
//!
//! The entry point is [`Canonicalizer`], built from an immutable [`RuleSet`]
//! (see [`config`] for loading one). Free functions cover the rule-independent
//! steps: [`escape`], [`unescape`], [`unescape_unreserved`], [`normalize`] and
//! [`parse`].

pub mod c14n;
pub mod config;
pub mod domain;
pub mod error;
pub mod escape;
pub mod extract;
pub mod grammar;
pub mod hash;
pub mod logging;
pub mod normalize;
pub mod options;
pub mod rules;
pub mod uri;

pub use c14n::Canonicalizer;
pub use config::RulesConfig;
pub use error::UriError;
pub use escape::{escape, unescape, unescape_unreserved};
pub use extract::{Anchor, Extracted};
pub use grammar::grammar;
pub use normalize::normalize;
pub use options::{CleanOptions, HashAlgorithm, HashOptions};
pub use rules::RuleSet;
pub use uri::{parse, QueryParam, ToUri, Uri};
