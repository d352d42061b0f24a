use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::resume::normalizer::normalize;
use crate::resume::schema::SectionKey;
use crate::resume::ResumeError;

/// A normalized resume.
///
/// The only ways to obtain one are `normalize` and deserialization (which
/// normalizes), so every instance satisfies the schema invariants: all
/// fourteen sections exist, every list item has an `id` and a boolean
/// `visible`, and every `url` is a `{label, href}` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct ResumeDocument(Map<String, Value>);

static EMPTY_MAP: LazyLock<Map<String, Value>> = LazyLock::new(Map::new);

impl ResumeDocument {
    /// Wraps a map that has already been through the repair pass.
    pub(crate) fn from_repaired(map: Map<String, Value>) -> Self {
        Self(map)
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    pub fn basics(&self) -> &Map<String, Value> {
        self.object("basics")
    }

    pub fn sections(&self) -> &Map<String, Value> {
        self.object("sections")
    }

    /// A `basics` field as text, `None` when absent or not a string.
    pub fn basic_str(&self, field: &str) -> Option<&str> {
        self.basics().get(field).and_then(Value::as_str)
    }

    pub fn section(&self, key: SectionKey) -> &Map<String, Value> {
        self.sections()
            .get(key.as_str())
            .and_then(Value::as_object)
            .unwrap_or(&*EMPTY_MAP)
    }

    /// Items of a list-bearing section; empty for `summary` and `custom`.
    pub fn items(&self, key: SectionKey) -> &[Value] {
        if !key.has_items() {
            return &[];
        }
        self.section(key)
            .get("items")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Rich-text content of the summary section.
    pub fn summary_content(&self) -> &str {
        self.section(SectionKey::Summary)
            .get("content")
            .and_then(Value::as_str)
            .unwrap_or("")
    }

    fn object(&self, key: &str) -> &Map<String, Value> {
        self.0
            .get(key)
            .and_then(Value::as_object)
            .unwrap_or(&*EMPTY_MAP)
    }
}

impl TryFrom<Value> for ResumeDocument {
    type Error = ResumeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        normalize(&value)
    }
}

impl From<ResumeDocument> for Value {
    fn from(doc: ResumeDocument) -> Self {
        doc.into_value()
    }
}

/// A string field of an item, or `""` when absent or not a string.
pub fn str_field<'a>(item: &'a Value, field: &str) -> &'a str {
    item.get(field).and_then(Value::as_str).unwrap_or("")
}

/// The `href` of a `url` field. Tolerates the legacy bare-string form.
pub fn url_href(item: &Value) -> String {
    match item.get("url") {
        Some(Value::Object(url)) => url
            .get("href")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string(),
        Some(Value::String(href)) => href.clone(),
        _ => String::new(),
    }
}
