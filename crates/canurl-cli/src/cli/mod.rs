//! CLI for the canurl URL canonicalizer.

mod commands;

use anyhow::Result;
use canurl_core::{config, Canonicalizer};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use commands::{
    run_clean, run_escape, run_extract, run_extract_href, run_hash, run_normalize,
    run_rules_path, run_unescape, run_valid,
};

/// Top-level CLI for the canurl URL canonicalizer.
#[derive(Debug, Parser)]
#[command(name = "canurl")]
#[command(about = "canurl: extract and canonicalize URLs for deduplication", long_about = None)]
pub struct Cli {
    /// Rule file to use instead of ~/.config/canurl/rules.toml.
    #[arg(long, global = true, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print cleaned URLs found in free text, one per line.
    Extract {
        /// Text file to scan (stdin if omitted).
        path: Option<PathBuf>,
    },

    /// Print cleaned absolute links of every anchor in an HTML document.
    ExtractHref {
        /// HTML file to scan (stdin if omitted).
        path: Option<PathBuf>,

        /// Host used to resolve relative hrefs.
        #[arg(long)]
        host: Option<String>,

        /// Print a JSON array of {url, text} objects.
        #[arg(long)]
        json: bool,
    },

    /// Canonicalize URLs (one per line on stdin if none are given).
    Clean {
        urls: Vec<String>,

        /// Host used for relative references.
        #[arg(long)]
        host: Option<String>,

        /// Keep a trailing slash on the path.
        #[arg(long)]
        keep_trailing_slash: bool,
    },

    /// Structural normalization only: no rules, no decoding.
    Normalize {
        urls: Vec<String>,

        /// Keep a trailing slash on the path.
        #[arg(long)]
        keep_trailing_slash: bool,
    },

    /// Percent-encode text.
    Escape { texts: Vec<String> },

    /// Percent-decode URLs.
    Unescape {
        urls: Vec<String>,

        /// Leave escapes of reserved characters (%2F, %3F, ...) encoded.
        #[arg(long)]
        unreserved: bool,
    },

    /// Print a dedup fingerprint for each URL.
    Hash {
        urls: Vec<String>,

        /// Fingerprint the cleaned form instead of the raw input.
        #[arg(long)]
        clean: bool,

        /// Use MD5 instead of truncated SHA-256.
        #[arg(long)]
        md5: bool,
    },

    /// Report whether each URL has a host under a known public suffix.
    Valid { urls: Vec<String> },

    /// Print the rule file location.
    RulesPath,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let rules = cli.rules.as_deref();

        match cli.command {
            CliCommand::Extract { path } => run_extract(&load(rules)?, path.as_deref())?,
            CliCommand::ExtractHref { path, host, json } => {
                run_extract_href(&load(rules)?, path.as_deref(), host.as_deref(), json)?;
            }
            CliCommand::Clean {
                urls,
                host,
                keep_trailing_slash,
            } => run_clean(&load(rules)?, urls, host, keep_trailing_slash)?,
            CliCommand::Normalize {
                urls,
                keep_trailing_slash,
            } => run_normalize(urls, keep_trailing_slash)?,
            CliCommand::Escape { texts } => run_escape(texts)?,
            CliCommand::Unescape { urls, unreserved } => run_unescape(urls, unreserved)?,
            CliCommand::Hash { urls, clean, md5 } => run_hash(&load(rules)?, urls, clean, md5)?,
            CliCommand::Valid { urls } => run_valid(&load(rules)?, urls)?,
            CliCommand::RulesPath => run_rules_path(rules)?,
        }

        Ok(())
    }
}

/// Rules from `--rules` if given, else the config dir (created on first use).
fn load(rules: Option<&Path>) -> Result<Canonicalizer> {
    let set = match rules {
        Some(path) => config::load_from(path)?,
        None => config::load_or_init()?,
    };
    Ok(Canonicalizer::new(set))
}

#[cfg(test)]
mod tests;
