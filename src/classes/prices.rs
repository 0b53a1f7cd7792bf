use crate::classes::base::{skip_if_empty_optional_string, JsonObject};
use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// A single market price. `Unknown` is distinct from a known zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PriceValue {
    Known(f64),
    #[default]
    Unknown,
}

impl PriceValue {
    pub fn is_known(&self) -> bool {
        matches!(self, PriceValue::Known(_))
    }

    /// Known price or `None`
    pub fn known(&self) -> Option<f64> {
        match self {
            PriceValue::Known(v) => Some(*v),
            PriceValue::Unknown => None,
        }
    }
}

impl From<Option<f64>> for PriceValue {
    fn from(value: Option<f64>) -> Self {
        value.map_or(PriceValue::Unknown, PriceValue::Known)
    }
}

// Unknown renders as null so that a re-read maps it back to Unknown
impl Serialize for PriceValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PriceValue::Known(v) => serializer.serialize_f64(*v),
            PriceValue::Unknown => serializer.serialize_none(),
        }
    }
}

/// Price range of one print variant (holofoil, reverseHolofoil, normal, ...)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PtcgPriceRange {
    pub low: PriceValue,
    pub mid: PriceValue,
    pub high: PriceValue,
    pub market: PriceValue,
    pub direct_low: PriceValue,
}

impl PtcgPriceRange {
    pub fn has_price_data(&self) -> bool {
        self.items().iter().any(|(_, v)| v.is_known())
    }

    /// All price items in declaration order
    pub fn items(&self) -> [(&'static str, PriceValue); 5] {
        [
            ("low", self.low),
            ("mid", self.mid),
            ("high", self.high),
            ("market", self.market),
            ("directLow", self.direct_low),
        ]
    }
}

/// One entry of a pricing block.
///
/// tcgplayer reports a range per print variant, cardmarket reports flat
/// metrics (`trendPrice`, `avg30`, ...) as bare numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PtcgPriceEntry {
    Range(PtcgPriceRange),
    Point(PriceValue),
}

impl PtcgPriceEntry {
    pub fn has_price_data(&self) -> bool {
        match self {
            PtcgPriceEntry::Range(range) => range.has_price_data(),
            PtcgPriceEntry::Point(value) => value.is_known(),
        }
    }
}

/// Market data snapshot from a single price source
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PtcgPricingBlock {
    #[serde(skip_serializing_if = "skip_if_empty_optional_string")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "skip_if_empty_optional_string")]
    pub updated_at: Option<String>,

    /// Variant name to price entry, in source order
    pub prices: IndexMap<String, PtcgPriceEntry>,
}

impl PtcgPricingBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Price range for a print variant, if the block has one
    pub fn variant(&self, name: &str) -> Option<&PtcgPriceRange> {
        match self.prices.get(name) {
            Some(PtcgPriceEntry::Range(range)) => Some(range),
            _ => None,
        }
    }

    pub fn variant_names(&self) -> Vec<&str> {
        self.prices.keys().map(String::as_str).collect()
    }

    pub fn has_price_data(&self) -> bool {
        self.prices.values().any(PtcgPriceEntry::has_price_data)
    }

    /// Market price of a variant, `Unknown` when the variant is missing
    pub fn market_price(&self, name: &str) -> PriceValue {
        self.variant(name).map_or(PriceValue::Unknown, |range| range.market)
    }
}

impl JsonObject for PtcgPricingBlock {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_is_not_zero() {
        assert_ne!(PriceValue::Unknown, PriceValue::Known(0.0));
        assert_eq!(PriceValue::from(None), PriceValue::Unknown);
        assert_eq!(PriceValue::Known(0.0).known(), Some(0.0));
    }

    #[test]
    fn test_price_value_serialization() {
        assert_eq!(serde_json::to_value(PriceValue::Unknown).unwrap(), json!(null));
        assert_eq!(serde_json::to_value(PriceValue::Known(1.5)).unwrap(), json!(1.5));
    }

    #[test]
    fn test_pricing_block_lookup() {
        let mut block = PtcgPricingBlock::new();
        block.prices.insert(
            "holofoil".to_string(),
            PtcgPriceEntry::Range(PtcgPriceRange {
                market: PriceValue::Known(2.25),
                ..Default::default()
            }),
        );
        block
            .prices
            .insert("trendPrice".to_string(), PtcgPriceEntry::Point(PriceValue::Known(1.0)));

        assert_eq!(block.market_price("holofoil"), PriceValue::Known(2.25));
        assert_eq!(block.market_price("reverseHolofoil"), PriceValue::Unknown);
        assert!(block.variant("trendPrice").is_none());
        assert_eq!(block.variant_names(), vec!["holofoil", "trendPrice"]);
        assert!(block.has_price_data());
    }

    #[test]
    fn test_empty_range_has_no_price_data() {
        assert!(!PtcgPriceRange::default().has_price_data());
    }

    #[test]
    fn test_block_json_shape() {
        let mut block = PtcgPricingBlock::new();
        block.updated_at = Some("2024/01/05".to_string());
        block
            .prices
            .insert("normal".to_string(), PtcgPriceEntry::Range(PtcgPriceRange::default()));

        let value = block.to_json_value().unwrap();
        assert_eq!(value["updatedAt"], json!("2024/01/05"));
        assert!(value.get("url").is_none());
        assert_eq!(value["prices"]["normal"]["directLow"], json!(null));
    }
}
