use crate::classes::base::{skip_if_empty_optional_string, JsonObject};
use crate::classes::images::PtcgImages;
use crate::classes::legalities::PtcgLegalities;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Date format used by the catalog API (`2020/08/14`)
pub const RELEASE_DATE_FORMAT: &str = "%Y/%m/%d";
/// Timestamp format used by the catalog API (`2020/08/14 09:35:00`)
pub const UPDATED_AT_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// PTCG Set Object, the expansion a card was printed in
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PtcgSetObject {
    pub id: String,

    pub name: String,

    pub series: String,

    pub printed_total: u32,

    pub total: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub legalities: Option<PtcgLegalities>,

    #[serde(skip_serializing_if = "skip_if_empty_optional_string")]
    pub ptcgo_code: Option<String>,

    #[serde(skip_serializing_if = "skip_if_empty_optional_string")]
    pub release_date: Option<String>,

    #[serde(skip_serializing_if = "skip_if_empty_optional_string")]
    pub updated_at: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<PtcgImages>,
}

impl PtcgSetObject {
    pub fn new(id: String, name: String, series: String, printed_total: u32, total: u32) -> Self {
        Self {
            id,
            name,
            series,
            printed_total,
            total,
            ..Default::default()
        }
    }

    /// Number of secret cards (numbered past the printed total)
    pub fn secret_count(&self) -> u32 {
        self.total.saturating_sub(self.printed_total)
    }

    pub fn release_date_parsed(&self) -> Option<NaiveDate> {
        self.release_date.as_deref().and_then(parse_api_date)
    }

    pub fn updated_at_parsed(&self) -> Option<NaiveDateTime> {
        self.updated_at.as_deref().and_then(parse_api_timestamp)
    }
}

impl JsonObject for PtcgSetObject {}

/// Parse a catalog date, accepting the ISO dash form as well
pub fn parse_api_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, RELEASE_DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d"))
        .ok()
}

/// Parse a catalog timestamp; a bare date is also accepted
pub fn parse_api_timestamp(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, UPDATED_AT_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()
        .or_else(|| parse_api_date(value).and_then(|date| date.and_hms_opt(0, 0, 0)))
}
