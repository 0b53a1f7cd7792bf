use crate::classes::base::{skip_if_empty_optional_string, JsonObject};
use serde::Serialize;

/// Image URLs of a card (`small`/`large`) or a set (`symbol`/`logo`)
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PtcgImages {
    #[serde(skip_serializing_if = "skip_if_empty_optional_string")]
    pub small: Option<String>,

    #[serde(skip_serializing_if = "skip_if_empty_optional_string")]
    pub large: Option<String>,

    #[serde(skip_serializing_if = "skip_if_empty_optional_string")]
    pub symbol: Option<String>,

    #[serde(skip_serializing_if = "skip_if_empty_optional_string")]
    pub logo: Option<String>,
}

impl PtcgImages {
    pub const KEYS: [&'static str; 4] = ["small", "large", "symbol", "logo"];

    pub fn new() -> Self {
        Self::default()
    }

    pub fn slot_mut(&mut self, key: &str) -> Option<&mut Option<String>> {
        match key {
            "small" => Some(&mut self.small),
            "large" => Some(&mut self.large),
            "symbol" => Some(&mut self.symbol),
            "logo" => Some(&mut self.logo),
            _ => None,
        }
    }

    /// Largest image available, preferring card art over set art
    pub fn best(&self) -> Option<&str> {
        self.large
            .as_deref()
            .or(self.small.as_deref())
            .or(self.logo.as_deref())
            .or(self.symbol.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.best().is_none()
    }
}

impl JsonObject for PtcgImages {}
