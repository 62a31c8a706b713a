//! Public suffix list and the default `DomainSplitter`.

pub mod list;

pub use list::{Rule, SuffixList};
