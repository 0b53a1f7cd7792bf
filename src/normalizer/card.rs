use super::errors::{ValidationReason, WarningKind};
use super::fields::{child_path, CardContext, JsonMap};
use super::prices::optional_pricing_block;
use super::set::{normalize_images, normalize_legalities, normalize_set};
use crate::classes::card::{PtcgAbility, PtcgAttack, PtcgCardObject, PtcgTypeModifier};
use indexmap::IndexSet;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static HP_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").expect("valid hp pattern"));

/// Normalize one element of `data`.
///
/// Returns `None` when the card has validation errors; they are left in `ctx`.
pub fn normalize_card(value: &Value, path: &str, ctx: &mut CardContext) -> Option<PtcgCardObject> {
    let obj = match value {
        Value::Object(map) => map,
        _ => {
            ctx.error(path.to_string(), ValidationReason::TypeMismatch);
            return None;
        }
    };

    let id = ctx.required_string(obj, "id", path);
    if let Some(id) = &id {
        if id.trim().is_empty() {
            ctx.error(child_path(path, "id"), ValidationReason::EmptyValue);
        }
        ctx.card_id = Some(id.clone());
    }
    let name = ctx.required_string(obj, "name", path);
    let supertype = ctx.required_string(obj, "supertype", path);

    let subtypes: IndexSet<String> = ctx.string_list(obj, "subtypes", path).into_iter().collect();
    let types: IndexSet<String> = ctx.string_list(obj, "types", path).into_iter().collect();
    let level = ctx.optional_text(obj, "level", path);
    let hp = normalize_hp(obj, path, ctx);
    let evolves_from = ctx.optional_string(obj, "evolvesFrom", path);

    let abilities: Vec<PtcgAbility> = ctx
        .object_list(obj, "abilities", path)
        .into_iter()
        .filter_map(|(item_path, ability)| normalize_ability(ability, &item_path, ctx))
        .collect();
    let attacks: Vec<PtcgAttack> = ctx
        .object_list(obj, "attacks", path)
        .into_iter()
        .filter_map(|(item_path, attack)| normalize_attack(attack, &item_path, ctx))
        .collect();
    let weaknesses = normalize_type_modifiers(obj, "weaknesses", path, ctx);
    let resistances = normalize_type_modifiers(obj, "resistances", path, ctx);

    let retreat_cost = ctx.string_list(obj, "retreatCost", path);
    let converted_retreat_cost = cross_check_cost(
        ctx.optional_u32(obj, "convertedRetreatCost", path),
        retreat_cost.len(),
        child_path(path, "convertedRetreatCost"),
        ctx,
        |declared, derived| WarningKind::RetreatCostMismatch { declared, derived },
    );

    let set = match ctx.object(obj, "set", path) {
        Some(set) => normalize_set(set, &child_path(path, "set"), ctx),
        None => {
            if !obj.get("set").is_some_and(|v| !v.is_null()) {
                ctx.error(child_path(path, "set"), ValidationReason::MissingField);
            }
            None
        }
    };

    let number = ctx.optional_text(obj, "number", path);
    let artist = ctx.optional_string(obj, "artist", path);
    let rarity = ctx.optional_string(obj, "rarity", path);
    let national_pokedex_numbers = ctx.integer_list(obj, "nationalPokedexNumbers", path);
    let legalities = ctx
        .object(obj, "legalities", path)
        .map(|l| normalize_legalities(l, &child_path(path, "legalities"), ctx));
    let images = ctx
        .object(obj, "images", path)
        .map(|i| normalize_images(i, &child_path(path, "images"), ctx));
    let tcgplayer = optional_pricing_block(obj, "tcgplayer", path, ctx);
    let cardmarket = optional_pricing_block(obj, "cardmarket", path, ctx);

    if !ctx.is_valid() {
        return None;
    }

    Some(PtcgCardObject {
        id: id?,
        name: name?,
        supertype: supertype?,
        subtypes,
        level,
        hp,
        types,
        evolves_from,
        abilities,
        attacks,
        weaknesses,
        resistances,
        retreat_cost,
        converted_retreat_cost,
        set: set?,
        number,
        artist,
        rarity,
        national_pokedex_numbers,
        legalities,
        images,
        tcgplayer,
        cardmarket,
    })
}

/// `hp` is a string of digits; a bare JSON integer is accepted
fn normalize_hp(obj: &JsonMap, path: &str, ctx: &mut CardContext) -> Option<String> {
    let hp = ctx.optional_text(obj, "hp", path)?;
    if HP_PATTERN.is_match(&hp) {
        Some(hp)
    } else {
        ctx.error(
            child_path(path, "hp"),
            ValidationReason::InvalidValue(format!("hp `{}` is not numeric", hp)),
        );
        None
    }
}

fn normalize_ability(obj: &JsonMap, path: &str, ctx: &mut CardContext) -> Option<PtcgAbility> {
    let name = ctx.required_string(obj, "name", path);
    let text = ctx.optional_string(obj, "text", path);
    let type_ = ctx.optional_string(obj, "type", path);
    Some(PtcgAbility {
        name: name?,
        text,
        type_,
    })
}

fn normalize_attack(obj: &JsonMap, path: &str, ctx: &mut CardContext) -> Option<PtcgAttack> {
    let name = ctx.required_string(obj, "name", path);
    let cost = ctx.string_list(obj, "cost", path);
    let converted_energy_cost = cross_check_cost(
        ctx.optional_u32(obj, "convertedEnergyCost", path),
        cost.len(),
        child_path(path, "convertedEnergyCost"),
        ctx,
        |declared, derived| WarningKind::EnergyCostMismatch { declared, derived },
    );
    let damage = ctx.optional_text(obj, "damage", path);
    let text = ctx.optional_string(obj, "text", path);
    Some(PtcgAttack {
        name: name?,
        cost,
        converted_energy_cost,
        damage,
        text,
    })
}

fn normalize_type_modifiers(
    obj: &JsonMap,
    key: &str,
    path: &str,
    ctx: &mut CardContext,
) -> Vec<PtcgTypeModifier> {
    ctx.object_list(obj, key, path)
        .into_iter()
        .filter_map(|(item_path, item)| {
            let type_ = ctx.required_string(item, "type", &item_path);
            let value = ctx.required_string(item, "value", &item_path);
            Some(PtcgTypeModifier {
                type_: type_?,
                value: value?,
            })
        })
        .collect()
}

/// Keep the declared converted cost, warning when it disagrees with the cost array.
/// An absent declaration takes the array length.
fn cross_check_cost(
    declared: Option<u32>,
    cost_len: usize,
    path: String,
    ctx: &mut CardContext,
    mismatch: impl FnOnce(u32, u32) -> WarningKind,
) -> u32 {
    let derived = u32::try_from(cost_len).unwrap_or(u32::MAX);
    match declared {
        Some(declared) if declared != derived => {
            ctx.warn(path, mismatch(declared, derived));
            declared
        }
        Some(declared) => declared,
        None => derived,
    }
}
