use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A raw JSON value as it appeared in a measurement document.
///
/// Values are kept untouched until they are rendered into a CSV cell, so numbers keep the textual
/// form the benchmark wrote them with.
///
/// A field missing from the document is absent, while an explicit `null` is kept as a value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Scalar(Option<Value>);

impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::new)
    }
}

impl Scalar {
    pub fn new(value: Value) -> Self {
        Self(Some(value))
    }

    /// Whether this value counts as present when choosing between fallback sources.
    ///
    /// Absent, `null`, `""`, `[]` and `{}` are all treated as missing. Zero and `false` are
    /// present values.
    pub fn is_present(&self) -> bool {
        match &self.0 {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(a)) => !a.is_empty(),
            Some(Value::Object(o)) => !o.is_empty(),
            Some(Value::Number(_)) | Some(Value::Bool(_)) => true,
        }
    }

    /// Whether this value is set for fallback chains that skip falsy values.
    ///
    /// Stricter than [Scalar::is_present]: numeric zero and `false` are missing as well.
    pub fn is_truthy(&self) -> bool {
        match &self.0 {
            Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
            Some(Value::Bool(b)) => *b,
            _ => self.is_present(),
        }
    }

    /// Whether the field was left out of the document entirely.
    pub fn is_absent(&self) -> bool {
        self.0.is_none()
    }

    /// Whether the field was left out or explicitly `null`.
    pub fn is_absent_or_null(&self) -> bool {
        matches!(self.0, None | Some(Value::Null))
    }

    /// Render the value as the text of a CSV cell. Missing values render as an empty string.
    pub fn render(&self) -> String {
        match &self.0 {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            // Nested structures are not expected in a cell, keep them readable as compact JSON
            Some(other) => other.to_string(),
        }
    }
}

impl From<Value> for Scalar {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

/// Pick the first truthy value out of an ordered list of sources, see [Scalar::is_truthy].
pub fn first_truthy<'a, I>(sources: I) -> Scalar
where
    I: IntoIterator<Item = &'a Scalar>,
{
    sources
        .into_iter()
        .find(|s| s.is_truthy())
        .cloned()
        .unwrap_or_default()
}
