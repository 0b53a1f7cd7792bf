use super::errors::WarningKind;
use super::fields::{child_path, coerce_price, describe, CardContext, JsonMap};
use crate::classes::prices::{PriceValue, PtcgPriceEntry, PtcgPriceRange, PtcgPricingBlock};
use crate::classes::set::parse_api_timestamp;
use serde_json::Value;

/// Normalize a `tcgplayer` / `cardmarket` block
pub fn normalize_pricing_block(obj: &JsonMap, path: &str, ctx: &mut CardContext) -> PtcgPricingBlock {
    let mut block = PtcgPricingBlock::new();

    block.url = ctx.optional_string(obj, "url", path);
    if let Some(url) = &block.url {
        ctx.check_url(url, child_path(path, "url"));
    }

    block.updated_at = ctx.optional_string(obj, "updatedAt", path);
    if let Some(updated_at) = &block.updated_at {
        if parse_api_timestamp(updated_at).is_none() {
            ctx.warn(
                child_path(path, "updatedAt"),
                WarningKind::MalformedDate(updated_at.clone()),
            );
        }
    }

    let prices_path = child_path(path, "prices");
    if let Some(prices) = ctx.object(obj, "prices", path) {
        for (variant, value) in prices {
            let variant_path = child_path(&prices_path, variant);
            let entry = match value {
                Value::Object(range) => PtcgPriceEntry::Range(normalize_range(range, &variant_path, ctx)),
                other => PtcgPriceEntry::Point(price_leaf(Some(other), variant_path, ctx)),
            };
            block.prices.insert(variant.clone(), entry);
        }
    }

    block
}

fn normalize_range(obj: &JsonMap, path: &str, ctx: &mut CardContext) -> PtcgPriceRange {
    let mut leaf = |key: &str| price_leaf(obj.get(key), child_path(path, key), ctx);
    PtcgPriceRange {
        low: leaf("low"),
        mid: leaf("mid"),
        high: leaf("high"),
        market: leaf("market"),
        direct_low: leaf("directLow"),
    }
}

fn price_leaf(value: Option<&Value>, path: String, ctx: &mut CardContext) -> PriceValue {
    let (price, non_numeric) = coerce_price(value);
    if non_numeric {
        let raw = value.map(describe).unwrap_or_default();
        ctx.warn(path, WarningKind::NonNumericPrice(raw));
    }
    price
}

/// Read an optional pricing block field of a card
pub fn optional_pricing_block(
    obj: &JsonMap,
    key: &str,
    parent: &str,
    ctx: &mut CardContext,
) -> Option<PtcgPricingBlock> {
    let block = ctx.object(obj, key, parent)?;
    Some(normalize_pricing_block(block, &child_path(parent, key), ctx))
}
