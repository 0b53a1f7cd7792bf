use ptcg_rust::*;
use serde_json::{json, Value};

const CARDS_PAGE: &str = include_str!("fixtures/cards_page.json");

mod comprehensive_card_page_tests {
    use super::*;

    fn renormalize(page: &PtcgCardPage) -> NormalizedPage {
        let rendered = page.to_json_value().unwrap();
        normalize(&rendered).unwrap()
    }

    /// Normalizing the rendered page gives the same page back
    #[test]
    fn test_idempotence_on_fixture() -> anyhow::Result<()> {
        let raw: Value = serde_json::from_str(CARDS_PAGE)?;
        let first = normalize(&raw)?;
        let second = normalize(&first.page.to_json_value()?)?;
        assert_eq!(second.page, first.page);
        assert!(second.skipped.is_empty());
        Ok(())
    }

    /// Holds also when the first pass skipped cards and coerced values
    #[test]
    fn test_idempotence_after_cleanup() {
        let raw = json!({
            "page": "1", "pageSize": 4, "count": 4, "totalCount": "9",
            "data": [
                {
                    "id": "base1-58",
                    "name": "Pikachu",
                    "supertype": "Pokémon",
                    "subtypes": ["Basic", "Basic"],
                    "hp": 40,
                    "evolvesFrom": "",
                    "attacks": [{"name": "Gnaw", "cost": ["Colorless"], "damage": 10}],
                    "retreatCost": ["Colorless"],
                    "convertedRetreatCost": 3,
                    "number": 58,
                    "set": {
                        "id": "base1", "name": "Base", "series": "Base",
                        "printedTotal": "102", "total": 102.0,
                        "legalities": {"unlimited": "Legal", "standard": "Not Legal"}
                    },
                    "legalities": {},
                    "tcgplayer": {
                        "prices": {
                            "normal": {"low": "0.10", "mid": "n/a", "market": 0},
                            "1stEditionNormal": null
                        }
                    },
                    "cardmarket": {"prices": {"trendPrice": "x", "avg1": 2}}
                },
                {"id": "", "name": "Nobody", "supertype": "Pokémon"},
                {"id": "base1-58", "name": "Dupe", "supertype": "Pokémon",
                 "set": {"id": "base1", "name": "Base", "series": "Base", "printedTotal": 102, "total": 102}},
                null
            ]
        });

        let first = normalize(&raw).unwrap();
        assert_eq!(first.page.count(), 1);
        assert_eq!(first.skipped.len(), 3);

        let second = renormalize(&first.page);
        assert_eq!(second.page, first.page);
        assert!(second.skipped.is_empty());

        // the declared retreat cost survives, so its warning does too
        assert_eq!(
            second.warnings,
            vec![ConsistencyWarning {
                card_id: Some("base1-58".to_string()),
                path: "data[0].convertedRetreatCost".to_string(),
                kind: WarningKind::RetreatCostMismatch { declared: 3, derived: 1 },
            }]
        );
    }

    #[test]
    fn test_rendered_shape() {
        let raw: Value = serde_json::from_str(CARDS_PAGE).unwrap();
        let rendered = normalize(&raw).unwrap().page.to_json_value().unwrap();

        assert_eq!(rendered["count"], 3);
        assert_eq!(rendered["pageSize"], 3);
        let venusaur = &rendered["data"][0];
        assert_eq!(venusaur["convertedRetreatCost"], 4);
        assert_eq!(venusaur["attacks"][1]["convertedEnergyCost"], 4);
        assert_eq!(venusaur["set"]["printedTotal"], 146);
        assert_eq!(venusaur["tcgplayer"]["prices"]["holofoil"]["directLow"], Value::Null);
        assert_eq!(venusaur["cardmarket"]["prices"]["germanProLow"], 0.0);
        // keys that were never part of the model are dropped
        assert!(venusaur.get("rules").is_none());
        assert!(venusaur.get("evolvesTo").is_none());

        let mega = &rendered["data"][1];
        assert_eq!(mega["abilities"][0]["name"], "Mega Evolution Rule");
        assert_eq!(mega["abilities"][0]["type"], "Ability");
        assert_eq!(mega["resistances"][0]["type"], "Water");
        assert_eq!(mega["resistances"][0]["value"], "-20");
    }

    #[test]
    fn test_page_navigation() {
        let raw: Value = serde_json::from_str(CARDS_PAGE).unwrap();
        let page = normalize(&raw).unwrap().into_page();
        assert!(page.has_next_page());
        let names: Vec<String> = page.into_cards().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Venusaur-EX", "M Venusaur-EX", "Shauna"]);
    }
}
