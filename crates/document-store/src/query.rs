use serde_json::{Map, Value};

/// Builder for constructing document queries.
///
/// Filters are equality matches on top-level document fields; all filters
/// must match. Results come back in insertion order.
#[derive(Debug, Clone, Default)]
pub struct DocumentQuery {
    /// Top-level field equality filters.
    pub filters: Map<String, Value>,

    /// Maximum number of documents to return.
    pub limit: Option<usize>,
}

impl DocumentQuery {
    /// Creates a new query matching every document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a query returning at most `limit` documents.
    pub fn limited(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Default::default()
        }
    }

    /// Requires `field` to equal `value`.
    pub fn field_eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.insert(field.into(), value.into());
        self
    }

    /// Limits the number of results.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Returns true if the document satisfies every filter.
    pub fn matches(&self, document: &Value) -> bool {
        self.filters
            .iter()
            .all(|(field, expected)| document.get(field) == Some(expected))
    }

    /// Returns the filters as a JSON object, suitable for containment checks.
    pub fn filter_document(&self) -> Value {
        Value::Object(self.filters.clone())
    }
}
