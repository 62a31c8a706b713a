use std::borrow::Cow;
use std::sync::LazyLock;

use maldet_core::constants::DEFAULT_SCHEME_PREFIX;
use regex::Regex;

/// `scheme://` prefix: a letter, then letters, digits, `+`, `.`, or `-`.
static RE_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.\-]*://").expect("scheme regex"));

/// RFC 3986 appendix B component split.
static RE_COMPONENTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^(?:([^:/?#]+):)?(?://([^/?#]*))?([^?#]*)(?:\?([^#]*))?(?:#(.*))?$")
        .expect("component regex")
});

/// Schemes whose last path segment may carry `;params`.
const PARAM_SCHEMES: &[&str] = &[
    "", "ftp", "hdl", "prospero", "http", "imap", "https", "shttp", "rtsp", "rtsps", "rtspu",
    "sip", "sips", "mms", "sftp", "tel",
];

/// Whether `url` starts with a `scheme://` prefix.
pub fn has_scheme(url: &str) -> bool {
    RE_SCHEME.is_match(url)
}

/// Prepend `http://` when `url` has no scheme prefix.
pub fn normalize_scheme(url: &str) -> Cow<'_, str> {
    if has_scheme(url) {
        Cow::Borrowed(url)
    } else {
        Cow::Owned(format!("{DEFAULT_SCHEME_PREFIX}{url}"))
    }
}

/// Everything after the first `://`, or the whole string if there is none.
pub fn strip_scheme(url: &str) -> &str {
    url.split_once("://").map_or(url, |(_, rest)| rest)
}

/// Structural components of a URL. Missing parts are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlParts {
    pub scheme: String,
    /// Lower-cased host without userinfo, port, or IPv6 brackets.
    pub host: String,
    pub port: String,
    pub path: String,
    pub params: String,
    pub query: String,
    pub fragment: String,
}

impl UrlParts {
    /// Split a URL into components. Never fails; unparsable pieces are empty.
    pub fn parse(url: &str) -> Self {
        let cleaned = sanitize(url);
        let Some(caps) = RE_COMPONENTS.captures(&cleaned) else {
            return Self::default();
        };
        let group = |i: usize| caps.get(i).map_or("", |m| m.as_str());

        let scheme = group(1).to_ascii_lowercase();
        let (host, port) = split_authority(group(2));
        let (path, params) = if PARAM_SCHEMES.contains(&scheme.as_str()) {
            split_params(group(3))
        } else {
            (group(3), "")
        };

        Self {
            scheme,
            host,
            port: port.to_string(),
            path: path.to_string(),
            params: params.to_string(),
            query: group(4).to_string(),
            fragment: group(5).to_string(),
        }
    }
}

/// Strip leading control characters and spaces, drop tab/CR/LF anywhere.
/// Trailing spaces stay part of the last component.
fn sanitize(url: &str) -> Cow<'_, str> {
    let trimmed = url.trim_start_matches(|c: char| c <= ' ');
    if trimmed.contains(['\t', '\r', '\n']) {
        Cow::Owned(trimmed.chars().filter(|c| !matches!(c, '\t' | '\r' | '\n')).collect())
    } else {
        Cow::Borrowed(trimmed)
    }
}

/// Host and port from `user:pass@host:port`. Host is lower-cased.
fn split_authority(authority: &str) -> (String, &str) {
    let hostinfo = authority.rsplit_once('@').map_or(authority, |(_, h)| h);
    let (host, port) = match hostinfo.split_once('[') {
        Some((_, bracketed)) => {
            let (inner, rest) = bracketed.split_once(']').unwrap_or((bracketed, ""));
            (inner, rest.strip_prefix(':').unwrap_or(""))
        }
        None => hostinfo.split_once(':').unwrap_or((hostinfo, "")),
    };
    (host.to_lowercase(), port)
}

/// Cut `;params` off the last path segment.
fn split_params(path: &str) -> (&str, &str) {
    let search_from = path.rfind('/').unwrap_or(0);
    match path[search_from..].find(';') {
        Some(i) => {
            let at = search_from + i;
            (&path[..at], &path[at + 1..])
        }
        None => (path, ""),
    }
}
