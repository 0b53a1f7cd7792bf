use crate::classes::base::{
    skip_if_empty_optional_string, skip_if_empty_set, skip_if_empty_vec, JsonObject,
};
use crate::classes::images::PtcgImages;
use crate::classes::legalities::PtcgLegalities;
use crate::classes::prices::PtcgPricingBlock;
use crate::classes::set::PtcgSetObject;
use indexmap::IndexSet;
use serde::Serialize;

/// `supertype` value of Pokémon cards, as opposed to Trainer and Energy
pub const POKEMON_SUPERTYPE: &str = "Pokémon";

/// Ability printed on a Pokémon card
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PtcgAbility {
    pub name: String,

    #[serde(skip_serializing_if = "skip_if_empty_optional_string")]
    pub text: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "skip_if_empty_optional_string")]
    pub type_: Option<String>,
}

/// Attack printed on a Pokémon card
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PtcgAttack {
    pub name: String,

    #[serde(skip_serializing_if = "skip_if_empty_vec")]
    pub cost: Vec<String>,

    /// As declared by the source; may disagree with `cost.len()`
    pub converted_energy_cost: u32,

    #[serde(skip_serializing_if = "skip_if_empty_optional_string")]
    pub damage: Option<String>,

    #[serde(skip_serializing_if = "skip_if_empty_optional_string")]
    pub text: Option<String>,
}

impl PtcgAttack {
    pub fn is_cost_consistent(&self) -> bool {
        self.converted_energy_cost as usize == self.cost.len()
    }
}

/// Weakness or resistance against an energy type, e.g. `{Fighting, ×2}`
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PtcgTypeModifier {
    #[serde(rename = "type")]
    pub type_: String,

    pub value: String,
}

pub type PtcgWeakness = PtcgTypeModifier;
pub type PtcgResistance = PtcgTypeModifier;

/// PTCG Singular Card Object
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PtcgCardObject {
    pub id: String,

    pub name: String,

    pub supertype: String,

    #[serde(skip_serializing_if = "skip_if_empty_set")]
    pub subtypes: IndexSet<String>,

    #[serde(skip_serializing_if = "skip_if_empty_optional_string")]
    pub level: Option<String>,

    /// Digits only when present
    #[serde(skip_serializing_if = "skip_if_empty_optional_string")]
    pub hp: Option<String>,

    #[serde(skip_serializing_if = "skip_if_empty_set")]
    pub types: IndexSet<String>,

    #[serde(skip_serializing_if = "skip_if_empty_optional_string")]
    pub evolves_from: Option<String>,

    #[serde(skip_serializing_if = "skip_if_empty_vec")]
    pub abilities: Vec<PtcgAbility>,

    #[serde(skip_serializing_if = "skip_if_empty_vec")]
    pub attacks: Vec<PtcgAttack>,

    #[serde(skip_serializing_if = "skip_if_empty_vec")]
    pub weaknesses: Vec<PtcgWeakness>,

    #[serde(skip_serializing_if = "skip_if_empty_vec")]
    pub resistances: Vec<PtcgResistance>,

    #[serde(skip_serializing_if = "skip_if_empty_vec")]
    pub retreat_cost: Vec<String>,

    /// As declared by the source; may disagree with `retreat_cost.len()`
    pub converted_retreat_cost: u32,

    pub set: PtcgSetObject,

    #[serde(skip_serializing_if = "skip_if_empty_optional_string")]
    pub number: Option<String>,

    #[serde(skip_serializing_if = "skip_if_empty_optional_string")]
    pub artist: Option<String>,

    #[serde(skip_serializing_if = "skip_if_empty_optional_string")]
    pub rarity: Option<String>,

    #[serde(skip_serializing_if = "skip_if_empty_vec")]
    pub national_pokedex_numbers: Vec<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub legalities: Option<PtcgLegalities>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<PtcgImages>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tcgplayer: Option<PtcgPricingBlock>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cardmarket: Option<PtcgPricingBlock>,
}

impl PtcgCardObject {
    pub fn new(id: String, name: String, supertype: String, set: PtcgSetObject) -> Self {
        Self {
            id,
            name,
            supertype,
            set,
            ..Default::default()
        }
    }

    pub fn is_pokemon(&self) -> bool {
        self.supertype == POKEMON_SUPERTYPE
    }

    /// Hit points as a number, if the card has any
    pub fn hp_value(&self) -> Option<u32> {
        self.hp.as_deref().and_then(|hp| hp.parse().ok())
    }

    pub fn is_retreat_cost_consistent(&self) -> bool {
        self.converted_retreat_cost as usize == self.retreat_cost.len()
    }

    pub fn has_market_data(&self) -> bool {
        self.tcgplayer.as_ref().is_some_and(PtcgPricingBlock::has_price_data)
            || self.cardmarket.as_ref().is_some_and(PtcgPricingBlock::has_price_data)
    }
}

impl JsonObject for PtcgCardObject {}
