use std::fmt;
use thiserror::Error;

/// Why a page-level field was rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaErrorKind {
    #[error("missing-field")]
    MissingField,
    #[error("type-mismatch")]
    TypeMismatch,
    #[error("out-of-range")]
    OutOfRange,
}

/// A fatal problem with the response envelope; no page can be built
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at `{path}`")]
pub struct SchemaError {
    pub kind: SchemaErrorKind,
    pub path: String,
}

impl SchemaError {
    pub fn new(kind: SchemaErrorKind, path: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
        }
    }
}

/// Every schema error found in one response, in field order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaErrors(Vec<SchemaError>);

impl SchemaErrors {
    pub(crate) fn new(errors: Vec<SchemaError>) -> Self {
        Self(errors)
    }

    pub fn errors(&self) -> &[SchemaError] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<SchemaError> {
        self.0
    }

    pub fn contains(&self, kind: SchemaErrorKind, path: &str) -> bool {
        self.0.iter().any(|e| e.kind == kind && e.path == path)
    }
}

impl fmt::Display for SchemaErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid card list response: ")?;
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaErrors {}

/// Why a card field was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationReason {
    #[error("missing-field")]
    MissingField,
    #[error("type-mismatch")]
    TypeMismatch,
    #[error("empty-value")]
    EmptyValue,
    #[error("out-of-range")]
    OutOfRange,
    #[error("invalid-value: {0}")]
    InvalidValue(String),
    #[error("duplicate-id")]
    DuplicateId,
}

/// A per-card problem that excludes the card from the page
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{reason} at `{path}`")]
pub struct ValidationError {
    pub path: String,
    pub reason: ValidationReason,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, reason: ValidationReason) -> Self {
        Self {
            path: path.into(),
            reason,
        }
    }
}

/// A card that was left out of the page, with everything wrong with it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedCard {
    /// Position in the source `data` array
    pub index: usize,
    pub id: Option<String>,
    pub errors: Vec<ValidationError>,
}

/// Anomaly that does not change the normalized value
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WarningKind {
    #[error("convertedRetreatCost is {declared} but retreatCost has {derived} entries")]
    RetreatCostMismatch { declared: u32, derived: u32 },
    #[error("convertedEnergyCost is {declared} but cost has {derived} entries")]
    EnergyCostMismatch { declared: u32, derived: u32 },
    #[error("count is {declared} but data has {actual} entries")]
    CountMismatch { declared: u32, actual: u32 },
    #[error("{count} cards exceed pageSize {page_size}")]
    CountExceedsPageSize { count: u32, page_size: u32 },
    #[error("{count} cards exceed totalCount {total_count}")]
    CountExceedsTotal { count: u32, total_count: u32 },
    #[error("total {total} is below printedTotal {printed_total}")]
    SetTotalBelowPrinted { printed_total: u32, total: u32 },
    #[error("malformed date `{0}`")]
    MalformedDate(String),
    #[error("malformed url `{0}`")]
    MalformedUrl(String),
    #[error("non-numeric price `{0}` treated as unknown")]
    NonNumericPrice(String),
}

/// Non-fatal warning attached to a card (or to the page when `card_id` is None)
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{kind} at `{path}`")]
pub struct ConsistencyWarning {
    pub card_id: Option<String>,
    pub path: String,
    pub kind: WarningKind,
}
