// Classes Module - Validated value objects for the card-catalog API
pub mod base;
pub mod card;
pub mod card_page;
pub mod images;
pub mod legalities;
pub mod prices;
pub mod set;

// Re-export main types
pub use base::JsonObject;
pub use card::{PtcgAbility, PtcgAttack, PtcgCardObject, PtcgResistance, PtcgTypeModifier, PtcgWeakness};
pub use card_page::PtcgCardPage;
pub use images::PtcgImages;
pub use legalities::{PtcgLegalities, PtcgLegality};
pub use prices::{PriceValue, PtcgPriceEntry, PtcgPriceRange, PtcgPricingBlock};
pub use set::PtcgSetObject;
