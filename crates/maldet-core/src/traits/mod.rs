pub mod domain_splitter;

pub use domain_splitter::{DomainParts, DomainSplitter};
