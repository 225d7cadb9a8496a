//! Public Suffix List checks for candidate domains and hosts.

use psl::{List, Psl};

/// True if `domain` (an optional `:port` is ignored) has a registrable domain
/// under a suffix the Public Suffix List actually lists. Unknown TLDs and bare
/// suffixes (`com`, `co.uk`) are rejected.
pub fn has_public_suffix(domain: &str) -> bool {
    let host = strip_port(domain).trim_end_matches('.').to_ascii_lowercase();
    if host.is_empty() {
        return false;
    }
    match List.domain(host.as_bytes()) {
        Some(registrable) => registrable.suffix().is_known(),
        None => false,
    }
}

/// Host check used by validation: the host as given (punycode after
/// normalization) or its IDNA-decoded Unicode form must pass
/// [`has_public_suffix`].
pub fn is_valid_host(host: &str) -> bool {
    if has_public_suffix(host) {
        return true;
    }
    let (unicode, result) = idna::domain_to_unicode(host);
    result.is_ok() && unicode != host && has_public_suffix(&unicode)
}

fn strip_port(domain: &str) -> &str {
    match domain.rsplit_once(':') {
        Some((host, port)) if port.bytes().all(|b| b.is_ascii_digit()) => host,
        _ => domain,
    }
}
