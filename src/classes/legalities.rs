//! PtcgLegalities

use crate::classes::base::JsonObject;
use serde::{Serialize, Serializer};

/// Status of a card or set in one play format
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PtcgLegality {
    Legal,
    Banned,
    /// Any other status string, kept verbatim
    Other(String),
}

impl PtcgLegality {
    pub fn parse(status: &str) -> Self {
        match status {
            "Legal" => PtcgLegality::Legal,
            "Banned" => PtcgLegality::Banned,
            other => PtcgLegality::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PtcgLegality::Legal => "Legal",
            PtcgLegality::Banned => "Banned",
            PtcgLegality::Other(status) => status,
        }
    }
}

impl Serialize for PtcgLegality {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// PtcgLegalities
///
/// Legality of a card (or of a whole set) in the three sanctioned formats.
/// A format the source does not mention is `None`, which is not the same
/// as being banned in it.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PtcgLegalities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlimited: Option<PtcgLegality>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard: Option<PtcgLegality>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expanded: Option<PtcgLegality>,
}

impl PtcgLegalities {
    pub const FORMATS: [&'static str; 3] = ["unlimited", "standard", "expanded"];

    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, format: &str) -> Option<&PtcgLegality> {
        match format {
            "unlimited" => self.unlimited.as_ref(),
            "standard" => self.standard.as_ref(),
            "expanded" => self.expanded.as_ref(),
            _ => None,
        }
    }

    pub fn set(&mut self, format: &str, legality: PtcgLegality) -> bool {
        let slot = match format {
            "unlimited" => &mut self.unlimited,
            "standard" => &mut self.standard,
            "expanded" => &mut self.expanded,
            _ => return false,
        };
        *slot = Some(legality);
        true
    }

    /// Get all legal formats
    pub fn get_legal_formats(&self) -> Vec<&'static str> {
        Self::FORMATS
            .into_iter()
            .filter(|format| self.get(format) == Some(&PtcgLegality::Legal))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.unlimited.is_none() && self.standard.is_none() && self.expanded.is_none()
    }
}

impl JsonObject for PtcgLegalities {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_verbatim() {
        assert_eq!(PtcgLegality::parse("Legal"), PtcgLegality::Legal);
        assert_eq!(PtcgLegality::parse("Banned"), PtcgLegality::Banned);
        assert_eq!(PtcgLegality::parse("Restricted").as_str(), "Restricted");
    }

    #[test]
    fn test_legal_formats() {
        let mut legalities = PtcgLegalities::new();
        assert!(legalities.is_empty());
        assert!(legalities.set("unlimited", PtcgLegality::Legal));
        assert!(legalities.set("expanded", PtcgLegality::Banned));
        assert!(!legalities.set("modern", PtcgLegality::Legal));

        assert_eq!(legalities.get_legal_formats(), vec!["unlimited"]);
        assert_eq!(legalities.get("standard"), None);
    }

    #[test]
    fn test_serialization_omits_absent_formats() {
        let mut legalities = PtcgLegalities::new();
        legalities.set("unlimited", PtcgLegality::Legal);
        let json = legalities.to_json_string().unwrap();
        assert_eq!(json, r#"{"unlimited":"Legal"}"#);
    }
}
