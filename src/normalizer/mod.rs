/// Normalizer module - validates raw card-list JSON into PTCG value objects
pub mod card;
pub mod errors;
pub mod fields;
pub mod prices;
pub mod set;

pub use errors::{
    ConsistencyWarning, SchemaError, SchemaErrorKind, SchemaErrors, SkippedCard, ValidationError,
    ValidationReason, WarningKind,
};

use crate::classes::card::PtcgCardObject;
use crate::classes::card_page::PtcgCardPage;
use fields::{coerce_u32, index_path, CardContext, IntegerError};
use log::{debug, info, warn};
use rustc_hash::FxHashSet;
use serde_json::Value;

/// Result of a successful normalization: the page plus everything that was
/// dropped or looked suspicious along the way
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedPage {
    pub page: PtcgCardPage,
    pub skipped: Vec<SkippedCard>,
    pub warnings: Vec<ConsistencyWarning>,
}

impl NormalizedPage {
    /// No card was skipped and nothing was flagged
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.warnings.is_empty()
    }

    pub fn warnings_for<'a>(&'a self, card_id: &'a str) -> impl Iterator<Item = &'a ConsistencyWarning> {
        self.warnings
            .iter()
            .filter(move |w| w.card_id.as_deref() == Some(card_id))
    }

    /// Warnings about the envelope rather than a card
    pub fn page_warnings(&self) -> impl Iterator<Item = &ConsistencyWarning> {
        self.warnings.iter().filter(|w| w.card_id.is_none())
    }

    pub fn into_page(self) -> PtcgCardPage {
        self.page
    }
}

/// Validate and normalize one card-list response.
///
/// Envelope problems are fatal and all reported together. Card problems
/// never are: an invalid card lands in `skipped`, an inconsistent one is
/// kept and annotated in `warnings`. The function is pure.
pub fn normalize(raw: &Value) -> Result<NormalizedPage, SchemaErrors> {
    let root = match raw {
        Value::Object(map) => map,
        _ => {
            return Err(SchemaErrors::new(vec![SchemaError::new(
                SchemaErrorKind::TypeMismatch,
                "$",
            )]))
        }
    };

    let mut schema_errors = Vec::new();
    let mut envelope_field = |key: &str, min: u32| -> Option<u32> {
        let kind = match root.get(key).filter(|v| !v.is_null()).map(coerce_u32) {
            None => SchemaErrorKind::MissingField,
            Some(Ok(n)) if n >= min => return Some(n),
            Some(Ok(_)) | Some(Err(IntegerError::OutOfRange)) => SchemaErrorKind::OutOfRange,
            Some(Err(IntegerError::NotNumeric)) => SchemaErrorKind::TypeMismatch,
        };
        schema_errors.push(SchemaError::new(kind, key));
        None
    };
    let page = envelope_field("page", 1);
    let page_size = envelope_field("pageSize", 1);
    let count = envelope_field("count", 0);
    let total_count = envelope_field("totalCount", 0);

    let data = match root.get("data") {
        Some(Value::Array(items)) => Some(items),
        None | Some(Value::Null) => {
            schema_errors.push(SchemaError::new(SchemaErrorKind::MissingField, "data"));
            None
        }
        Some(_) => {
            schema_errors.push(SchemaError::new(SchemaErrorKind::TypeMismatch, "data"));
            None
        }
    };

    let (page, page_size, declared_count, total_count, data) =
        match (page, page_size, count, total_count, data) {
            (Some(p), Some(s), Some(c), Some(t), Some(d)) if schema_errors.is_empty() => (p, s, c, t, d),
            _ => {
                warn!("Rejecting card list response: {} schema error(s)", schema_errors.len());
                return Err(SchemaErrors::new(schema_errors));
            }
        };

    let mut cards: Vec<PtcgCardObject> = Vec::with_capacity(data.len());
    let mut skipped = Vec::new();
    let mut warnings = Vec::new();
    let mut seen_ids: FxHashSet<String> = FxHashSet::default();

    for (index, item) in data.iter().enumerate() {
        let path = index_path("data", index);
        let mut ctx = CardContext::new();
        match card::normalize_card(item, &path, &mut ctx) {
            Some(card) if !seen_ids.insert(card.id.clone()) => {
                skipped.push(SkippedCard {
                    index,
                    id: Some(card.id),
                    errors: vec![ValidationError::new(
                        fields::child_path(&path, "id"),
                        ValidationReason::DuplicateId,
                    )],
                });
            }
            Some(card) => {
                warnings.append(&mut ctx.warnings);
                cards.push(card);
            }
            None => {
                skipped.push(SkippedCard {
                    index,
                    id: ctx.card_id,
                    errors: ctx.errors,
                });
            }
        }
    }

    for card in &skipped {
        debug!(
            "Skipped card {} ({}): {}",
            card.index,
            card.id.as_deref().unwrap_or("<no id>"),
            card.errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    let actual = u32::try_from(data.len()).unwrap_or(u32::MAX);
    if declared_count != actual {
        warnings.push(page_warning("count", WarningKind::CountMismatch {
            declared: declared_count,
            actual,
        }));
    }

    let page = PtcgCardPage::new(page, page_size, total_count, cards);
    if page.count() > page_size {
        warnings.push(page_warning("pageSize", WarningKind::CountExceedsPageSize {
            count: page.count(),
            page_size,
        }));
    }
    if page.count() > total_count {
        warnings.push(page_warning("totalCount", WarningKind::CountExceedsTotal {
            count: page.count(),
            total_count,
        }));
    }

    for warning in &warnings {
        debug!("{}", warning);
    }
    info!(
        "Normalized page {}: {} cards, {} skipped, {} warnings",
        page.page,
        page.count(),
        skipped.len(),
        warnings.len()
    );

    Ok(NormalizedPage {
        page,
        skipped,
        warnings,
    })
}

/// Parse and normalize a response body
pub fn normalize_str(body: &str) -> Result<NormalizedPage, SchemaErrors> {
    match serde_json::from_str::<Value>(body) {
        Ok(raw) => normalize(&raw),
        Err(e) => {
            warn!("Card list response is not JSON: {}", e);
            Err(SchemaErrors::new(vec![SchemaError::new(
                SchemaErrorKind::TypeMismatch,
                "$",
            )]))
        }
    }
}

fn page_warning(path: &str, kind: WarningKind) -> ConsistencyWarning {
    ConsistencyWarning {
        card_id: None,
        path: path.to_string(),
        kind,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal_card(id: &str) -> Value {
        json!({
            "id": id,
            "name": "Pikachu",
            "supertype": "Pokémon",
            "set": {"id": "base1", "name": "Base", "series": "Base", "printedTotal": 102, "total": 102}
        })
    }

    #[test]
    fn test_root_must_be_object() {
        let err = normalize(&json!([1, 2])).unwrap_err();
        assert!(err.contains(SchemaErrorKind::TypeMismatch, "$"));
    }

    #[test]
    fn test_all_envelope_errors_collected() {
        let err = normalize(&json!({"page": 0, "pageSize": "ten", "count": -1, "data": {}})).unwrap_err();
        assert_eq!(
            err.errors(),
            &[
                SchemaError::new(SchemaErrorKind::OutOfRange, "page"),
                SchemaError::new(SchemaErrorKind::TypeMismatch, "pageSize"),
                SchemaError::new(SchemaErrorKind::OutOfRange, "count"),
                SchemaError::new(SchemaErrorKind::MissingField, "totalCount"),
                SchemaError::new(SchemaErrorKind::TypeMismatch, "data"),
            ]
        );
    }

    #[test]
    fn test_numeric_strings_coerce() {
        let result = normalize(&json!({
            "page": "1", "pageSize": 2.0, "count": "1", "totalCount": 1,
            "data": [minimal_card("a")]
        }))
        .unwrap();
        assert_eq!(result.page.page_size, 2);
        assert!(result.is_clean());
    }

    #[test]
    fn test_duplicate_ids_skip_later_cards() {
        let result = normalize(&json!({
            "page": 1, "pageSize": 3, "count": 3, "totalCount": 3,
            "data": [minimal_card("a"), minimal_card("b"), minimal_card("a")]
        }))
        .unwrap();
        assert_eq!(result.page.count(), 2);
        assert_eq!(result.skipped.len(), 1);
        assert_eq!(result.skipped[0].index, 2);
        assert_eq!(result.skipped[0].errors[0].reason, ValidationReason::DuplicateId);
    }

    #[test]
    fn test_envelope_warnings() {
        let result = normalize(&json!({
            "page": 1, "pageSize": 1, "count": 5, "totalCount": 1,
            "data": [minimal_card("a"), minimal_card("b")]
        }))
        .unwrap();
        let kinds: Vec<_> = result.page_warnings().map(|w| w.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                WarningKind::CountMismatch { declared: 5, actual: 2 },
                WarningKind::CountExceedsPageSize { count: 2, page_size: 1 },
                WarningKind::CountExceedsTotal { count: 2, total_count: 1 },
            ]
        );
    }

    #[test]
    fn test_normalize_str() {
        assert!(normalize_str("{not json").is_err());
        let body = r#"{"page":1,"pageSize":250,"count":0,"totalCount":0,"data":[]}"#;
        assert_eq!(normalize_str(body).unwrap().page.count(), 0);
    }
}
