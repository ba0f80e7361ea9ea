//! Selectable options shown in a picker column.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Display field used when none is configured.
pub const DEFAULT_VALUE_KEY: &str = "text";

/// A record option: named fields plus an optional disabled flag.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OptionRecord {
    /// Whether this option can be selected
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
    /// Remaining fields, including the display field
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// A single selectable entry.
///
/// Deserializes from a bare scalar (`"vip"`, `1990`) or from a map
/// (`{ text: "vip", disabled: true }`). Any map is a record; a `disabled`
/// entry that is not a boolean stays an ordinary field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged, from = "Value")]
pub enum PickerOption {
    /// Record with a display field and an optional disabled flag
    Record(OptionRecord),
    /// Plain scalar value
    Scalar(Value),
}

impl PickerOption {
    /// Create a record option whose `key` field holds `value`.
    #[must_use]
    pub fn record(key: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut fields = Map::new();
        fields.insert(key.into(), value.into());
        Self::Record(OptionRecord {
            disabled: false,
            fields,
        })
    }

    /// Set disabled state. Only records carry the flag; no-op on a scalar.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        if let Self::Record(record) = &mut self {
            record.disabled = disabled;
        }
        self
    }

    /// Add or replace a field on a record option.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        if let Self::Record(record) = &mut self {
            record.fields.insert(name.into(), value.into());
        }
        self
    }

    /// Whether this option is disabled.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        match self {
            Self::Record(record) => record.disabled,
            Self::Scalar(_) => false,
        }
    }

    /// The value this option is compared by: the scalar itself, or the
    /// record's `value_key` field. `None` for a record without that field.
    #[must_use]
    pub fn key(&self, value_key: &str) -> Option<&Value> {
        match self {
            Self::Record(record) => record.fields.get(value_key),
            Self::Scalar(value) => Some(value),
        }
    }

    /// Whether this option's key equals `value`.
    #[must_use]
    pub fn matches(&self, value_key: &str, value: &Value) -> bool {
        self.key(value_key) == Some(value)
    }

    /// Text a host would display for this option.
    #[must_use]
    pub fn label(&self, value_key: &str) -> String {
        match self.key(value_key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        }
    }
}

impl From<Value> for PickerOption {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(mut fields) => {
                let disabled = match fields.remove("disabled") {
                    Some(Value::Bool(flag)) => flag,
                    Some(other) => {
                        fields.insert("disabled".to_string(), other);
                        false
                    }
                    None => false,
                };
                Self::Record(OptionRecord { disabled, fields })
            }
            scalar => Self::Scalar(scalar),
        }
    }
}

impl From<&str> for PickerOption {
    fn from(value: &str) -> Self {
        Self::Scalar(Value::from(value))
    }
}

impl From<String> for PickerOption {
    fn from(value: String) -> Self {
        Self::Scalar(Value::from(value))
    }
}

impl From<i64> for PickerOption {
    fn from(value: i64) -> Self {
        Self::Scalar(Value::from(value))
    }
}

impl From<i32> for PickerOption {
    fn from(value: i32) -> Self {
        Self::Scalar(Value::from(value))
    }
}

impl From<OptionRecord> for PickerOption {
    fn from(record: OptionRecord) -> Self {
        Self::Record(record)
    }
}
