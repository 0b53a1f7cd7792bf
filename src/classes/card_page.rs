use crate::classes::base::JsonObject;
use crate::classes::card::PtcgCardObject;
use serde::Serialize;

/// One page of a card-list response.
///
/// `count` always equals `cards.len()`; build it through [`PtcgCardPage::new`]
/// or the normalizer rather than by hand.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PtcgCardPage {
    #[serde(rename = "data")]
    cards: Vec<PtcgCardObject>,

    pub page: u32,

    pub page_size: u32,

    count: u32,

    pub total_count: u32,
}

impl PtcgCardPage {
    pub fn new(page: u32, page_size: u32, total_count: u32, cards: Vec<PtcgCardObject>) -> Self {
        let count = u32::try_from(cards.len()).unwrap_or(u32::MAX);
        Self {
            cards,
            page,
            page_size,
            count,
            total_count,
        }
    }

    pub fn cards(&self) -> &[PtcgCardObject] {
        &self.cards
    }

    pub fn into_cards(self) -> Vec<PtcgCardObject> {
        self.cards
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn get(&self, id: &str) -> Option<&PtcgCardObject> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// Whether a later page exists according to `totalCount`
    pub fn has_next_page(&self) -> bool {
        u64::from(self.page) * u64::from(self.page_size) < u64::from(self.total_count)
    }
}

impl JsonObject for PtcgCardPage {}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: &str) -> PtcgCardObject {
        PtcgCardObject {
            id: id.to_string(),
            name: "Pikachu".to_string(),
            supertype: "Pokémon".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_count_tracks_cards() {
        let page = PtcgCardPage::new(1, 2, 10, vec![card("a"), card("b")]);
        assert_eq!(page.count(), 2);
        assert_eq!(page.cards().len(), 2);
        assert_eq!(page.get("b").map(|c| c.id.as_str()), Some("b"));
        assert!(page.get("c").is_none());
    }

    #[test]
    fn test_has_next_page() {
        assert!(PtcgCardPage::new(1, 2, 10, vec![]).has_next_page());
        assert!(!PtcgCardPage::new(5, 2, 10, vec![]).has_next_page());
    }

    #[test]
    fn test_json_uses_data_key() {
        let value = PtcgCardPage::new(1, 250, 1, vec![card("x")])
            .to_json_value()
            .unwrap();
        assert_eq!(value["data"][0]["id"], "x");
        assert_eq!(value["pageSize"], 250);
        assert_eq!(value["totalCount"], 1);
        assert_eq!(value["count"], 1);
    }
}
