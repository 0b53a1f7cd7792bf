//! Typed field access over untrusted JSON objects.
//!
//! Every accessor records what went wrong at the field's full path and
//! returns `None` instead of failing, so that one pass reports all problems
//! of a card.

use super::errors::{ConsistencyWarning, ValidationError, ValidationReason, WarningKind};
use crate::classes::prices::PriceValue;
use serde_json::{Map, Value};

pub type JsonMap = Map<String, Value>;

/// Why a value could not become an integer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerError {
    NotNumeric,
    OutOfRange,
}

/// Coerce integers, integral floats and numeric strings to `u32`
pub fn coerce_u32(value: &Value) -> Result<u32, IntegerError> {
    match value {
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                u32::try_from(u).map_err(|_| IntegerError::OutOfRange)
            } else if n.as_i64().is_some() {
                Err(IntegerError::OutOfRange)
            } else {
                n.as_f64().map_or(Err(IntegerError::NotNumeric), float_to_u32)
            }
        }
        Value::String(s) => {
            let trimmed = s.trim();
            if let Ok(i) = trimmed.parse::<i64>() {
                u32::try_from(i).map_err(|_| IntegerError::OutOfRange)
            } else {
                trimmed
                    .parse::<f64>()
                    .map_err(|_| IntegerError::NotNumeric)
                    .and_then(float_to_u32)
            }
        }
        _ => Err(IntegerError::NotNumeric),
    }
}

fn float_to_u32(f: f64) -> Result<u32, IntegerError> {
    if !f.is_finite() || f.fract() != 0.0 {
        Err(IntegerError::NotNumeric)
    } else if f < 0.0 || f > f64::from(u32::MAX) {
        Err(IntegerError::OutOfRange)
    } else {
        Ok(f as u32)
    }
}

/// Coerce a price leaf. The flag is set when a value was present but not numeric.
pub fn coerce_price(value: Option<&Value>) -> (PriceValue, bool) {
    match value {
        None | Some(Value::Null) => (PriceValue::Unknown, false),
        Some(Value::Number(n)) => (n.as_f64().into(), false),
        Some(Value::String(s)) => match s.trim().parse::<f64>() {
            Ok(f) if f.is_finite() => (PriceValue::Known(f), false),
            _ => (PriceValue::Unknown, true),
        },
        Some(_) => (PriceValue::Unknown, true),
    }
}

pub fn child_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}

pub fn index_path(parent: &str, index: usize) -> String {
    format!("{}[{}]", parent, index)
}

/// Short rendering of a JSON value for warning messages
pub fn describe(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Errors and warnings collected while normalizing one card
#[derive(Debug, Default)]
pub struct CardContext {
    pub card_id: Option<String>,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ConsistencyWarning>,
}

impl CardContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, path: String, reason: ValidationReason) {
        self.errors.push(ValidationError::new(path, reason));
    }

    pub fn warn(&mut self, path: String, kind: WarningKind) {
        self.warnings.push(ConsistencyWarning {
            card_id: self.card_id.clone(),
            path,
            kind,
        });
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Present, non-null field value
    fn present<'v>(obj: &'v JsonMap, key: &str) -> Option<&'v Value> {
        obj.get(key).filter(|v| !v.is_null())
    }

    pub fn required_string(&mut self, obj: &JsonMap, key: &str, parent: &str) -> Option<String> {
        let path = child_path(parent, key);
        match Self::present(obj, key) {
            None => {
                self.error(path, ValidationReason::MissingField);
                None
            }
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => {
                self.error(path, ValidationReason::TypeMismatch);
                None
            }
        }
    }

    /// Optional string; empty strings read as absent
    pub fn optional_string(&mut self, obj: &JsonMap, key: &str, parent: &str) -> Option<String> {
        match Self::present(obj, key) {
            None => None,
            Some(Value::String(s)) if s.is_empty() => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => {
                self.error(child_path(parent, key), ValidationReason::TypeMismatch);
                None
            }
        }
    }

    /// Optional free text that the API sometimes sends as a bare number.
    /// Integral numbers render without a fraction, so `60.0` reads as `"60"`.
    pub fn optional_text(&mut self, obj: &JsonMap, key: &str, parent: &str) -> Option<String> {
        if let Some(value) = Self::present(obj, key).filter(|v| v.is_number()) {
            return Some(coerce_u32(value).map_or_else(|_| value.to_string(), |n| n.to_string()));
        }
        self.optional_string(obj, key, parent)
    }

    pub fn required_u32(&mut self, obj: &JsonMap, key: &str, parent: &str) -> Option<u32> {
        let path = child_path(parent, key);
        match Self::present(obj, key) {
            None => {
                self.error(path, ValidationReason::MissingField);
                None
            }
            Some(value) => self.integer_at(value, path),
        }
    }

    pub fn optional_u32(&mut self, obj: &JsonMap, key: &str, parent: &str) -> Option<u32> {
        Self::present(obj, key).and_then(|value| self.integer_at(value, child_path(parent, key)))
    }

    fn integer_at(&mut self, value: &Value, path: String) -> Option<u32> {
        match coerce_u32(value) {
            Ok(n) => Some(n),
            Err(IntegerError::NotNumeric) => {
                self.error(path, ValidationReason::TypeMismatch);
                None
            }
            Err(IntegerError::OutOfRange) => {
                self.error(path, ValidationReason::OutOfRange);
                None
            }
        }
    }

    /// Optional nested object
    pub fn object<'v>(&mut self, obj: &'v JsonMap, key: &str, parent: &str) -> Option<&'v JsonMap> {
        match Self::present(obj, key) {
            None => None,
            Some(Value::Object(map)) => Some(map),
            Some(_) => {
                self.error(child_path(parent, key), ValidationReason::TypeMismatch);
                None
            }
        }
    }

    /// Optional array; absent reads as empty
    pub fn array<'v>(&mut self, obj: &'v JsonMap, key: &str, parent: &str) -> &'v [Value] {
        match Self::present(obj, key) {
            None => &[],
            Some(Value::Array(items)) => items.as_slice(),
            Some(_) => {
                self.error(child_path(parent, key), ValidationReason::TypeMismatch);
                &[]
            }
        }
    }

    pub fn string_list(&mut self, obj: &JsonMap, key: &str, parent: &str) -> Vec<String> {
        let path = child_path(parent, key);
        let mut out = Vec::new();
        for (i, item) in self.array(obj, key, parent).iter().enumerate() {
            match item {
                Value::String(s) => out.push(s.clone()),
                _ => self.error(index_path(&path, i), ValidationReason::TypeMismatch),
            }
        }
        out
    }

    pub fn integer_list(&mut self, obj: &JsonMap, key: &str, parent: &str) -> Vec<u32> {
        let path = child_path(parent, key);
        let mut out = Vec::new();
        for (i, item) in self.array(obj, key, parent).iter().enumerate() {
            if let Some(n) = self.integer_at(item, index_path(&path, i)) {
                out.push(n);
            }
        }
        out
    }

    /// Array elements that must each be objects; yields each with its path
    pub fn object_list<'v>(
        &mut self,
        obj: &'v JsonMap,
        key: &str,
        parent: &str,
    ) -> Vec<(String, &'v JsonMap)> {
        let path = child_path(parent, key);
        let mut out = Vec::new();
        for (i, item) in self.array(obj, key, parent).iter().enumerate() {
            let item_path = index_path(&path, i);
            match item {
                Value::Object(map) => out.push((item_path, map)),
                _ => self.error(item_path, ValidationReason::TypeMismatch),
            }
        }
        out
    }

    pub fn check_url(&mut self, url: &str, path: String) {
        if url::Url::parse(url).is_err() {
            self.warn(path, WarningKind::MalformedUrl(url.to_string()));
        }
    }
}
