use serde::Serialize;

/// Base trait for all PTCG value objects that render back to the API shape
pub trait JsonObject {
    /// Convert to JSON string
    fn to_json_string(&self) -> Result<String, serde_json::Error>
    where
        Self: Serialize,
    {
        serde_json::to_string(self)
    }

    /// Convert to JSON value
    fn to_json_value(&self) -> Result<serde_json::Value, serde_json::Error>
    where
        Self: Serialize,
    {
        serde_json::to_value(self)
    }
}

/// Serializer predicate that skips empty vectors
#[inline]
pub fn skip_if_empty_vec<T>(value: &Vec<T>) -> bool {
    value.is_empty()
}

/// Serializer predicate that skips empty set-like collections
#[inline]
pub fn skip_if_empty_set<T>(value: &indexmap::IndexSet<T>) -> bool {
    value.is_empty()
}

/// Serializer predicate that skips empty optional strings
#[inline]
pub fn skip_if_empty_optional_string(value: &Option<String>) -> bool {
    match value {
        Some(s) => s.is_empty(),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexSet;

    #[test]
    fn test_skip_helpers() {
        assert!(skip_if_empty_vec::<String>(&Vec::new()));
        assert!(!skip_if_empty_vec(&vec![1]));
        assert!(skip_if_empty_set::<String>(&IndexSet::new()));
        assert!(skip_if_empty_optional_string(&None));
        assert!(skip_if_empty_optional_string(&Some(String::new())));
        assert!(!skip_if_empty_optional_string(&Some("Lightning".to_string())));
    }
}
