use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::LazyLock;

use maldet_core::errors::SuffixListError;
use maldet_core::tracing::events;
use maldet_core::{DomainParts, DomainSplitter};

use crate::url::is_ipv4_literal;

/// ICANN section of the Public Suffix List, compiled into the binary.
const EMBEDDED_LIST: &str = include_str!("../../data/public_suffix_list.dat");

const PRIVATE_SECTION_MARKER: &str = "===BEGIN PRIVATE DOMAINS===";

static EMBEDDED: LazyLock<SuffixList> = LazyLock::new(|| SuffixList::parse(EMBEDDED_LIST));

/// Kind of a public suffix rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// `co.uk`
    Normal,
    /// `!www.ck`, stored under `www.ck`
    Exception,
}

/// Public suffix list with longest-match lookup.
///
/// Only the ICANN section is used unless `include_private` was requested,
/// matching common registrable-domain tooling.
#[derive(Debug, Clone, Default)]
pub struct SuffixList {
    rules: HashMap<String, Rule>,
    /// Parents of `*.` rules: `*.ck` is stored as `ck`.
    wildcards: HashSet<String>,
}

impl SuffixList {
    /// The embedded list, built once per process.
    pub fn embedded() -> &'static SuffixList {
        &EMBEDDED
    }

    /// Parse list text, ICANN section only.
    pub fn parse(text: &str) -> Self {
        Self::parse_with(text, false)
    }

    /// Parse list text, optionally keeping the private-domains section.
    pub fn parse_with(text: &str, include_private: bool) -> Self {
        let mut list = Self::default();
        for line in text.lines() {
            let line = line.trim();
            if line.contains(PRIVATE_SECTION_MARKER) && !include_private {
                break;
            }
            if line.is_empty() || line.starts_with("//") {
                continue;
            }
            let Some(token) = line.split_whitespace().next() else {
                continue;
            };
            list.insert(&token.to_lowercase());
        }
        list
    }

    /// Load a list from disk. A missing file or a file without rules is an error.
    pub fn from_file(path: &Path) -> Result<Self, SuffixListError> {
        let text = std::fs::read_to_string(path).map_err(|e| SuffixListError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let list = Self::parse(&text);
        if list.is_empty() {
            return Err(SuffixListError::Empty {
                path: path.display().to_string(),
            });
        }
        events::suffix_list_loaded(&path.display().to_string(), list.len());
        Ok(list)
    }

    fn insert(&mut self, rule: &str) {
        if let Some(name) = rule.strip_prefix('!') {
            self.rules.insert(name.to_string(), Rule::Exception);
        } else if let Some(parent) = rule.strip_prefix("*.") {
            self.wildcards.insert(parent.to_string());
        } else {
            self.rules.entry(rule.to_string()).or_insert(Rule::Normal);
        }
    }

    /// Number of rules, wildcards included.
    pub fn len(&self) -> usize {
        self.rules.len() + self.wildcards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of trailing labels that form the public suffix, or 0 if no rule matches.
    fn suffix_label_count(&self, labels: &[&str]) -> usize {
        for start in 0..labels.len() {
            let candidate = labels[start..].join(".");
            let remaining = labels.len() - start;
            match self.rules.get(&candidate) {
                Some(Rule::Exception) => return remaining - 1,
                Some(Rule::Normal) => return remaining,
                None => {}
            }
            if remaining > 1 && self.wildcards.contains(&labels[start + 1..].join(".")) {
                return remaining;
            }
        }
        0
    }
}

impl DomainSplitter for SuffixList {
    fn split(&self, host: &str) -> DomainParts {
        // Fully qualified names carry a trailing root dot.
        let host = host.trim_end_matches('.');
        if host.is_empty() {
            return DomainParts::default();
        }
        if is_ipv4_literal(host) || host.contains(':') {
            return DomainParts::bare(host);
        }

        let labels: Vec<&str> = host.split('.').collect();
        let suffix_len = self.suffix_label_count(&labels);
        let split_at = labels.len() - suffix_len;
        let suffix = labels[split_at..].join(".");
        if split_at == 0 {
            return DomainParts {
                suffix,
                ..Default::default()
            };
        }

        DomainParts {
            subdomain: labels[..split_at - 1].join("."),
            domain: labels[split_at - 1].to_string(),
            suffix,
        }
    }
}
