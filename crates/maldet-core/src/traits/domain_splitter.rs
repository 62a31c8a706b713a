//! DomainSplitter trait.
//!
//! Public-suffix decomposition depends on an external, regularly updated
//! dataset. Feature extraction takes the splitter as a parameter so the
//! scoring core can be tested against a fixed list.

/// A host split into its public-suffix parts.
///
/// For `a.b.example.co.uk`: subdomain `a.b`, domain `example`, suffix `co.uk`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainParts {
    pub subdomain: String,
    pub domain: String,
    pub suffix: String,
}

impl DomainParts {
    /// Parts for a host that has no suffix decomposition (IP literals, bare labels).
    pub fn bare(host: &str) -> Self {
        Self {
            subdomain: String::new(),
            domain: host.to_string(),
            suffix: String::new(),
        }
    }
}

/// Splits a lower-cased host into subdomain, registrable label, and suffix.
///
/// Implementations must be total: an empty or unrecognised host yields
/// empty parts rather than an error.
pub trait DomainSplitter: Send + Sync {
    fn split(&self, host: &str) -> DomainParts;
}

impl<T: DomainSplitter + ?Sized> DomainSplitter for &T {
    fn split(&self, host: &str) -> DomainParts {
        (**self).split(host)
    }
}

impl<T: DomainSplitter + ?Sized> DomainSplitter for std::sync::Arc<T> {
    fn split(&self, host: &str) -> DomainParts {
        (**self).split(host)
    }
}
