use serde::{Deserialize, Serialize};

use super::feature::{Feature, FeatureValue};

/// Lexical features of one URL.
///
/// Field names are the wire names. Flags serialize as `0`/`1` so the JSON
/// form is a flat mapping of feature name to number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSet {
    pub len_url: u64,
    pub len_host: u64,
    pub len_path: u64,
    pub len_query: u64,
    pub count_dots: u64,
    pub count_hyphens: u64,
    pub count_slashes: u64,
    pub count_digits: u64,
    pub count_punct: u64,
    #[serde(with = "flag")]
    pub has_at: bool,
    #[serde(with = "flag")]
    pub has_ip_host: bool,
    pub subdomain_len: u64,
    pub sld_len: u64,
    pub tld_len: u64,
    pub num_tokens_host: u64,
    pub path_depth: u64,
    #[serde(with = "flag")]
    pub has_hex_path: bool,
    #[serde(with = "flag")]
    pub has_login: bool,
    #[serde(with = "flag")]
    pub has_secure: bool,
    #[serde(with = "flag")]
    pub has_verify: bool,
}

impl FeatureSet {
    /// Value of a single feature.
    pub fn value(&self, feature: Feature) -> FeatureValue {
        use FeatureValue::{Count, Flag};
        match feature {
            Feature::LenUrl => Count(self.len_url),
            Feature::LenHost => Count(self.len_host),
            Feature::LenPath => Count(self.len_path),
            Feature::LenQuery => Count(self.len_query),
            Feature::CountDots => Count(self.count_dots),
            Feature::CountHyphens => Count(self.count_hyphens),
            Feature::CountSlashes => Count(self.count_slashes),
            Feature::CountDigits => Count(self.count_digits),
            Feature::CountPunct => Count(self.count_punct),
            Feature::HasAt => Flag(self.has_at),
            Feature::HasIpHost => Flag(self.has_ip_host),
            Feature::SubdomainLen => Count(self.subdomain_len),
            Feature::SldLen => Count(self.sld_len),
            Feature::TldLen => Count(self.tld_len),
            Feature::NumTokensHost => Count(self.num_tokens_host),
            Feature::PathDepth => Count(self.path_depth),
            Feature::HasHexPath => Flag(self.has_hex_path),
            Feature::HasLogin => Flag(self.has_login),
            Feature::HasSecure => Flag(self.has_secure),
            Feature::HasVerify => Flag(self.has_verify),
        }
    }

    /// Look up a feature by wire name. Unknown names return `None`.
    pub fn get(&self, name: &str) -> Option<FeatureValue> {
        Feature::from_name(name).map(|f| self.value(f))
    }

    /// All features in extraction order.
    pub fn iter(&self) -> impl Iterator<Item = (Feature, FeatureValue)> + '_ {
        Feature::ALL.iter().map(move |&f| (f, self.value(f)))
    }

    pub fn len(&self) -> usize {
        Feature::COUNT
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Serialize `bool` as `0`/`1`; accept either integers or booleans back.
mod flag {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*value))
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(u64),
        Bool(bool),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        Ok(match Raw::deserialize(deserializer)? {
            Raw::Int(n) => n != 0,
            Raw::Bool(b) => b,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_has_every_feature_as_number() {
        let set = FeatureSet {
            has_ip_host: true,
            len_url: 12,
            ..Default::default()
        };
        let json = serde_json::to_value(&set).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), Feature::COUNT);
        for f in Feature::ALL {
            assert!(obj[f.name()].is_u64(), "{} should be an integer", f);
        }
        assert_eq!(obj["has_ip_host"], 1);
        assert_eq!(obj["has_at"], 0);
        assert_eq!(obj["len_url"], 12);
    }

    #[test]
    fn get_by_name() {
        let set = FeatureSet {
            path_depth: 3,
            has_login: true,
            ..Default::default()
        };
        assert_eq!(set.get("path_depth"), Some(FeatureValue::Count(3)));
        assert_eq!(set.get("has_login"), Some(FeatureValue::Flag(true)));
        assert_eq!(set.get("nonexistent_feature"), None);
    }

    #[test]
    fn flags_deserialize_from_int_or_bool() {
        let mut json = serde_json::to_value(FeatureSet::default()).unwrap();
        json["has_at"] = serde_json::json!(true);
        json["has_login"] = serde_json::json!(1);
        let set: FeatureSet = serde_json::from_value(json).unwrap();
        assert!(set.has_at);
        assert!(set.has_login);
    }
}
