//! Lexical feature extraction.

use std::sync::LazyLock;

use maldet_core::{DomainSplitter, FeatureSet};
use regex::Regex;

use crate::suffix::SuffixList;
use crate::url::{is_ipv4_literal, normalize_scheme, strip_scheme, UrlParts};

/// Unicode decimal digits (`Nd`).
static RE_DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d").expect("digit regex"));

static RE_HEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-Fa-f]+$").expect("hex regex"));

/// Extract features using the embedded public suffix list.
pub fn extract_lexical_features(url: &str) -> FeatureSet {
    extract_with(url, SuffixList::embedded())
}

/// Extract features, decomposing the host with `splitter`.
///
/// Length and character counts over the whole URL use the original input;
/// `.`/`-`/`/`/`@` counts use the scheme-normalized string after its first `://`.
pub fn extract_with(url: &str, splitter: &dyn DomainSplitter) -> FeatureSet {
    let normalized = normalize_scheme(url);
    let parts = UrlParts::parse(&normalized);
    let domain = splitter.split(&parts.host);
    let url_no_scheme = strip_scheme(&normalized);
    let lowered = url.to_lowercase();

    let features = FeatureSet {
        len_url: char_len(url),
        len_host: char_len(&parts.host),
        len_path: char_len(&parts.path),
        len_query: char_len(&parts.query),
        count_dots: count_char(url_no_scheme, '.'),
        count_hyphens: count_char(url_no_scheme, '-'),
        count_slashes: count_char(url_no_scheme, '/'),
        count_digits: RE_DIGIT.find_iter(url).count() as u64,
        count_punct: url.chars().filter(|c| !c.is_ascii_alphanumeric()).count() as u64,
        has_at: url_no_scheme.contains('@'),
        has_ip_host: is_ipv4_literal(&parts.host),
        subdomain_len: char_len(&domain.subdomain),
        sld_len: char_len(&domain.domain),
        tld_len: char_len(&domain.suffix),
        num_tokens_host: non_empty_segments(&parts.host, '.'),
        path_depth: non_empty_segments(&parts.path, '/'),
        has_hex_path: is_hex_path(&parts.path),
        has_login: lowered.contains("login"),
        has_secure: lowered.contains("secure"),
        has_verify: lowered.contains("verify"),
    };

    tracing::trace!(url = %url, host = %parts.host, "features extracted");
    features
}

fn char_len(s: &str) -> u64 {
    s.chars().count() as u64
}

fn count_char(s: &str, needle: char) -> u64 {
    s.chars().filter(|&c| c == needle).count() as u64
}

fn non_empty_segments(s: &str, sep: char) -> u64 {
    s.split(sep).filter(|seg| !seg.is_empty()).count() as u64
}

/// Non-empty path whose `/`-stripped form is entirely hex digits.
fn is_hex_path(path: &str) -> bool {
    !path.is_empty() && RE_HEX.is_match(&path.replace('/', ""))
}
