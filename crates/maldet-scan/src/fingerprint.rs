//! Scan ids.

use maldet_core::constants::DEFAULT_SCHEME_PREFIX;

/// blake3 hex digest of the canonical form of `url`.
///
/// Canonical form: trimmed, lower-cased, `http://` prepended when the
/// string has no `://`.
pub fn url_fingerprint(url: &str) -> String {
    let lowered = url.trim().to_lowercase();
    let canonical = if lowered.contains("://") {
        lowered
    } else {
        format!("{DEFAULT_SCHEME_PREFIX}{lowered}")
    };
    blake3::hash(canonical.as_bytes()).to_hex().to_string()
}
