use super::errors::WarningKind;
use super::fields::{child_path, CardContext, JsonMap};
use crate::classes::images::PtcgImages;
use crate::classes::legalities::{PtcgLegalities, PtcgLegality};
use crate::classes::set::{parse_api_date, parse_api_timestamp, PtcgSetObject};

/// Normalize the `set` object embedded in a card
pub fn normalize_set(obj: &JsonMap, path: &str, ctx: &mut CardContext) -> Option<PtcgSetObject> {
    let id = ctx.required_string(obj, "id", path);
    let name = ctx.required_string(obj, "name", path);
    let series = ctx.required_string(obj, "series", path);
    let printed_total = ctx.required_u32(obj, "printedTotal", path);
    let total = ctx.required_u32(obj, "total", path);

    let legalities = ctx
        .object(obj, "legalities", path)
        .map(|l| normalize_legalities(l, &child_path(path, "legalities"), ctx));
    let images = ctx
        .object(obj, "images", path)
        .map(|i| normalize_images(i, &child_path(path, "images"), ctx));

    let ptcgo_code = ctx.optional_string(obj, "ptcgoCode", path);

    let release_date = ctx.optional_string(obj, "releaseDate", path);
    if let Some(date) = &release_date {
        if parse_api_date(date).is_none() {
            ctx.warn(child_path(path, "releaseDate"), WarningKind::MalformedDate(date.clone()));
        }
    }
    let updated_at = ctx.optional_string(obj, "updatedAt", path);
    if let Some(timestamp) = &updated_at {
        if parse_api_timestamp(timestamp).is_none() {
            ctx.warn(child_path(path, "updatedAt"), WarningKind::MalformedDate(timestamp.clone()));
        }
    }

    let (id, name, series, printed_total, total) = (id?, name?, series?, printed_total?, total?);
    if total < printed_total {
        ctx.warn(
            child_path(path, "total"),
            WarningKind::SetTotalBelowPrinted {
                printed_total,
                total,
            },
        );
    }

    Some(PtcgSetObject {
        id,
        name,
        series,
        printed_total,
        total,
        legalities,
        ptcgo_code,
        release_date,
        updated_at,
        images,
    })
}

/// Known formats are kept, unknown keys are ignored
pub fn normalize_legalities(obj: &JsonMap, path: &str, ctx: &mut CardContext) -> PtcgLegalities {
    let mut legalities = PtcgLegalities::new();
    for format in PtcgLegalities::FORMATS {
        if let Some(status) = ctx.optional_string(obj, format, path) {
            legalities.set(format, PtcgLegality::parse(&status));
        }
    }
    legalities
}

pub fn normalize_images(obj: &JsonMap, path: &str, ctx: &mut CardContext) -> PtcgImages {
    let mut images = PtcgImages::new();
    for key in PtcgImages::KEYS {
        let value = ctx.optional_string(obj, key, path);
        if let Some(url) = &value {
            ctx.check_url(url, child_path(path, key));
        }
        if let Some(slot) = images.slot_mut(key) {
            *slot = value;
        }
    }
    images
}
