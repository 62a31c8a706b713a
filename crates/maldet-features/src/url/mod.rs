//! URL structural parsing.

pub mod ip;
pub mod parse;

pub use ip::is_ipv4_literal;
pub use parse::{has_scheme, normalize_scheme, strip_scheme, UrlParts};
