use std::fmt;

/// The fixed set of lexical features, in extraction order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feature {
    LenUrl,
    LenHost,
    LenPath,
    LenQuery,
    CountDots,
    CountHyphens,
    CountSlashes,
    CountDigits,
    CountPunct,
    HasAt,
    HasIpHost,
    SubdomainLen,
    SldLen,
    TldLen,
    NumTokensHost,
    PathDepth,
    HasHexPath,
    HasLogin,
    HasSecure,
    HasVerify,
}

impl Feature {
    pub const COUNT: usize = 20;

    pub const ALL: [Feature; Self::COUNT] = [
        Feature::LenUrl,
        Feature::LenHost,
        Feature::LenPath,
        Feature::LenQuery,
        Feature::CountDots,
        Feature::CountHyphens,
        Feature::CountSlashes,
        Feature::CountDigits,
        Feature::CountPunct,
        Feature::HasAt,
        Feature::HasIpHost,
        Feature::SubdomainLen,
        Feature::SldLen,
        Feature::TldLen,
        Feature::NumTokensHost,
        Feature::PathDepth,
        Feature::HasHexPath,
        Feature::HasLogin,
        Feature::HasSecure,
        Feature::HasVerify,
    ];

    /// Wire name of the feature.
    pub fn name(self) -> &'static str {
        match self {
            Feature::LenUrl => "len_url",
            Feature::LenHost => "len_host",
            Feature::LenPath => "len_path",
            Feature::LenQuery => "len_query",
            Feature::CountDots => "count_dots",
            Feature::CountHyphens => "count_hyphens",
            Feature::CountSlashes => "count_slashes",
            Feature::CountDigits => "count_digits",
            Feature::CountPunct => "count_punct",
            Feature::HasAt => "has_at",
            Feature::HasIpHost => "has_ip_host",
            Feature::SubdomainLen => "subdomain_len",
            Feature::SldLen => "sld_len",
            Feature::TldLen => "tld_len",
            Feature::NumTokensHost => "num_tokens_host",
            Feature::PathDepth => "path_depth",
            Feature::HasHexPath => "has_hex_path",
            Feature::HasLogin => "has_login",
            Feature::HasSecure => "has_secure",
            Feature::HasVerify => "has_verify",
        }
    }

    /// Resolve a wire name. Unknown names return `None`.
    pub fn from_name(name: &str) -> Option<Feature> {
        Self::ALL.iter().copied().find(|f| f.name() == name)
    }

    /// Whether the scorer treats this feature as a 0/1 flag.
    pub fn is_flag(self) -> bool {
        matches!(
            self,
            Feature::HasIpHost
                | Feature::HasAt
                | Feature::HasLogin
                | Feature::HasVerify
                | Feature::HasSecure
                | Feature::HasHexPath
        )
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single extracted feature value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureValue {
    Count(u64),
    Flag(bool),
}

impl FeatureValue {
    /// Coerce to a number: flags become exactly 0.0 or 1.0, counts are cast.
    pub fn as_f64(self) -> f64 {
        match self {
            FeatureValue::Count(n) => n as f64,
            FeatureValue::Flag(true) => 1.0,
            FeatureValue::Flag(false) => 0.0,
        }
    }

    /// Truthiness, nonzero counts are true.
    pub fn is_set(self) -> bool {
        match self {
            FeatureValue::Count(n) => n != 0,
            FeatureValue::Flag(b) => b,
        }
    }
}
