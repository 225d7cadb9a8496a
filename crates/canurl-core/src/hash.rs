//! Fingerprints for URL dedup keys.

use md5::Md5;
use sha2::{Digest, Sha256};

use crate::options::HashAlgorithm;

/// Digest bytes kept in a fingerprint (128 bits).
const FINGERPRINT_LEN: usize = 16;

/// Truncated SHA-256 of `text` as lowercase hex. Equal inputs give equal
/// fingerprints; the value is stable across runs and platforms.
pub fn fingerprint(text: &str) -> String {
    let digest = Sha256::digest(text.as_bytes());
    hex::encode(&digest[..FINGERPRINT_LEN])
}

/// Fingerprint of `text` under `algorithm`, as lowercase hex. Both digests
/// are 128 bits wide.
pub fn fingerprint_with(text: &str, algorithm: HashAlgorithm) -> String {
    match algorithm {
        HashAlgorithm::Sha256 => fingerprint(text),
        HashAlgorithm::Md5 => hex::encode(Md5::digest(text.as_bytes())),
    }
}
