//! Record abstraction — the engine's view of one list item.
//!
//! A record is an opaque mapping of field names to primitive values. The
//! engine never sees concrete dataset types; it reads fields by name through
//! the [`Record`] trait and the caller declares which fields participate in
//! search and filtering via [`QuerySpec`](crate::query::QuerySpec).

/// A primitive field value: text, number, or flag.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Flag(bool),
}

impl FieldValue {
    /// The value as display text — the form used for substring search and
    /// categorical comparison.
    pub fn as_text(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Flag(b) => b.to_string(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<u32> for FieldValue {
    fn from(n: u32) -> Self {
        FieldValue::Number(n as f64)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Flag(b)
    }
}

/// One queryable list item.
///
/// Implementors return `None` for field names they do not carry; the engine
/// treats an absent field as an empty string for search matching and as
/// never-matching for categorical filtering.
pub trait Record {
    fn field(&self, name: &str) -> Option<FieldValue>;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
