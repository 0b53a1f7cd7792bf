//! Validated data structures for the Pokémon TCG card-catalog API.
//!
//! [`normalize`] turns an untrusted `/cards` list response into a
//! [`PtcgCardPage`]; cards that fail validation are reported, not fatal.

pub mod classes;
pub mod normalizer;
pub mod providers;
pub mod settings;

pub use classes::{
    JsonObject, PriceValue, PtcgAbility, PtcgAttack, PtcgCardObject, PtcgCardPage, PtcgImages,
    PtcgLegalities, PtcgLegality, PtcgPriceEntry, PtcgPriceRange, PtcgPricingBlock,
    PtcgSetObject, PtcgTypeModifier,
};
pub use normalizer::{
    normalize, normalize_str, ConsistencyWarning, NormalizedPage, SchemaError, SchemaErrorKind,
    SchemaErrors, SkippedCard, ValidationError, ValidationReason, WarningKind,
};
pub use providers::{CardQuery, PokemonTcgProvider, ProviderError};
pub use settings::{PtcgConfig, SettingsError};
