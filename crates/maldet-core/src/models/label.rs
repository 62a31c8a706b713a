use serde::{Deserialize, Serialize};

/// Binary verdict. Serialized as the integer 0 (benign) or 1 (malicious).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Label {
    Benign,
    Malicious,
}

impl Label {
    /// `Malicious` iff `score >= threshold`.
    pub fn from_score(score: f64, threshold: f64) -> Self {
        if score >= threshold {
            Label::Malicious
        } else {
            Label::Benign
        }
    }

    pub fn as_u8(self) -> u8 {
        match self {
            Label::Benign => 0,
            Label::Malicious => 1,
        }
    }

    /// Upper-case display word used by human-readable summaries.
    pub fn verdict(self) -> &'static str {
        match self {
            Label::Benign => "BENIGN",
            Label::Malicious => "MALICIOUS",
        }
    }
}

impl From<Label> for u8 {
    fn from(label: Label) -> u8 {
        label.as_u8()
    }
}

impl TryFrom<u8> for Label {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Label::Benign),
            1 => Ok(Label::Malicious),
            other => Err(format!("label must be 0 or 1, got {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_inclusive() {
        assert_eq!(Label::from_score(2.5, 2.5), Label::Malicious);
        assert_eq!(Label::from_score(2.4999, 2.5), Label::Benign);
    }

    #[test]
    fn serializes_as_integer() {
        assert_eq!(serde_json::to_string(&Label::Malicious).unwrap(), "1");
        assert_eq!(serde_json::from_str::<Label>("0").unwrap(), Label::Benign);
        assert!(serde_json::from_str::<Label>("2").is_err());
    }
}
