//! Loosely-typed renderer responses.
//!
//! Renderer versions disagree on which diagnostic fields they emit and in what
//! shape, so the response is kept as a raw JSON object and every accessor
//! tolerates absent or oddly-shaped fields.

use serde_json::{Map, Value};

/// Key holding the rendered markup.
pub const RENDERED_HTML_KEY: &str = "renderedHTML";
/// Synthetic warning attached when the body could not be decoded as JSON.
pub const NON_JSON_WARNING: &str = "renderer returned non-JSON response; parsing HTML only";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderResponse {
    fields: Map<String, Value>,
}

impl RenderResponse {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Decode a response body that must be a JSON object.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Map<String, Value>>(body).map(Self::new)
    }

    /// Wrap a body that is not JSON as rendered markup with a parse notice.
    pub fn from_markup(body: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert(RENDERED_HTML_KEY.to_string(), Value::String(body.into()));
        fields.insert(
            "warnings".to_string(),
            Value::Array(vec![Value::String(NON_JSON_WARNING.to_string())]),
        );
        Self { fields }
    }

    /// Top-level field, `None` when absent.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Field of a nested mapping. A section that is not an object reads as empty.
    pub fn section_field(&self, section: &str, key: &str) -> Option<&Value> {
        self.fields
            .get(section)
            .and_then(Value::as_object)
            .and_then(|inner| inner.get(key))
    }

    /// Rendered markup, only when present as a non-empty string.
    pub fn rendered_html(&self) -> Option<&str> {
        self.fields
            .get(RENDERED_HTML_KEY)
            .and_then(Value::as_str)
            .filter(|html| !html.is_empty())
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl From<Map<String, Value>> for RenderResponse {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}
