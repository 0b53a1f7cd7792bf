use ptcg_rust::*;
use serde_json::{json, Value};

mod comprehensive_prices_tests {
    use super::*;

    fn page_with_prices(prices: Value) -> NormalizedPage {
        normalize(&json!({
            "page": 1, "pageSize": 1, "count": 1, "totalCount": 1,
            "data": [{
                "id": "sv1-1",
                "name": "Pineco",
                "supertype": "Pokémon",
                "set": {"id": "sv1", "name": "Scarlet & Violet", "series": "Scarlet & Violet",
                        "printedTotal": 198, "total": 258},
                "tcgplayer": {
                    "url": "https://prices.pokemontcg.io/tcgplayer/sv1-1",
                    "updatedAt": "2024/05/13",
                    "prices": prices
                }
            }]
        }))
        .unwrap()
    }

    fn holofoil(result: &NormalizedPage) -> PtcgPriceRange {
        *result.page.cards()[0]
            .tcgplayer
            .as_ref()
            .unwrap()
            .variant("holofoil")
            .unwrap()
    }

    /// null, absent and non-numeric prices are Unknown, never zero
    #[test]
    fn test_unknown_sentinel() {
        let result = page_with_prices(json!({
            "holofoil": {"low": null, "mid": "call", "high": true, "market": 0}
        }));
        let range = holofoil(&result);

        assert_eq!(range.low, PriceValue::Unknown);
        assert_eq!(range.mid, PriceValue::Unknown);
        assert_eq!(range.high, PriceValue::Unknown);
        assert_eq!(range.direct_low, PriceValue::Unknown);
        assert_eq!(range.market, PriceValue::Known(0.0));
        let known: Vec<_> = range.items().into_iter().filter(|(_, v)| v.is_known()).collect();
        assert_eq!(known, vec![("market", PriceValue::Known(0.0))]);
    }

    /// Only present non-numeric values are reported
    #[test]
    fn test_non_numeric_prices_warn() {
        let result = page_with_prices(json!({
            "holofoil": {"low": null, "mid": "call", "high": true}
        }));
        let kinds: Vec<_> = result.warnings.iter().map(|w| w.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                WarningKind::NonNumericPrice("call".to_string()),
                WarningKind::NonNumericPrice("true".to_string()),
            ]
        );
        // price problems never skip the card
        assert!(result.skipped.is_empty());
    }

    #[test]
    fn test_variant_order_preserved() {
        let result = page_with_prices(json!({
            "reverseHolofoil": {"market": 1.0},
            "normal": {"market": 0.5},
            "holofoil": {"market": 3.0}
        }));
        let block = result.page.cards()[0].tcgplayer.as_ref().unwrap();
        assert_eq!(block.variant_names(), vec!["reverseHolofoil", "normal", "holofoil"]);
        assert_eq!(block.market_price("normal"), PriceValue::Known(0.5));
    }

    #[test]
    fn test_direct_low_uniform_across_variants() {
        let result = page_with_prices(json!({
            "holofoil": {"directLow": 1.75},
            "reverseHolofoil": {"directLow": null}
        }));
        let block = result.page.cards()[0].tcgplayer.as_ref().unwrap();
        assert_eq!(block.variant("holofoil").unwrap().direct_low, PriceValue::Known(1.75));
        assert_eq!(block.variant("reverseHolofoil").unwrap().direct_low, PriceValue::Unknown);
    }

    #[test]
    fn test_missing_pricing_blocks() {
        let result = normalize(&json!({
            "page": 1, "pageSize": 1, "count": 1, "totalCount": 1,
            "data": [{
                "id": "sv1-1", "name": "Pineco", "supertype": "Pokémon",
                "set": {"id": "sv1", "name": "Scarlet & Violet", "series": "Scarlet & Violet",
                        "printedTotal": 198, "total": 258},
                "tcgplayer": null
            }]
        }))
        .unwrap();
        let card = &result.page.cards()[0];
        assert!(card.tcgplayer.is_none());
        assert!(card.cardmarket.is_none());
        assert!(!card.has_market_data());
    }
}
