//! Declarative picker configuration.
//!
//! A [`PickerConfig`] can be built in code or loaded from YAML or JSON.
//! Every field has a default, so `{}` (or an empty YAML document) is a valid
//! configuration describing a picker with no columns.
//!
//! ```yaml
//! show_toolbar: true
//! title: Membership
//! columns:
//!   - class_name: column1
//!     values: [vip, normal]
//!   - class_name: column2
//!     values: ["1990", "1991", "1992"]
//!     default_index: 1
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::option::{PickerOption, DEFAULT_VALUE_KEY};
use crate::picker_column::{DEFAULT_ITEM_HEIGHT, DEFAULT_VISIBLE_ITEM_COUNT};

/// One column's configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ColumnConfig {
    /// Options in selection order
    #[serde(default)]
    pub values: Vec<PickerOption>,
    /// Addressing tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    /// Initially selected index
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_index: Option<usize>,
}

impl ColumnConfig {
    /// Create a column configuration from its options.
    #[must_use]
    pub fn new(values: impl IntoIterator<Item = impl Into<PickerOption>>) -> Self {
        Self {
            values: values.into_iter().map(Into::into).collect(),
            class_name: None,
            default_index: None,
        }
    }

    /// Set the addressing tag.
    #[must_use]
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Set the initially selected index.
    #[must_use]
    pub const fn default_index(mut self, index: usize) -> Self {
        self.default_index = Some(index);
        self
    }
}

/// Picker configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Column definitions; absent or `null` means no columns
    pub columns: Option<Vec<ColumnConfig>>,
    /// Record field used as an option's key
    pub value_key: String,
    /// Whether the cancel/confirm toolbar is shown
    pub show_toolbar: bool,
    /// Toolbar title
    pub title: Option<String>,
    /// Confirm button text
    pub confirm_button_text: String,
    /// Cancel button text
    pub cancel_button_text: String,
    /// Row height in pixels
    pub item_height: f32,
    /// Rows visible per column
    pub visible_item_count: usize,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            columns: None,
            value_key: DEFAULT_VALUE_KEY.to_string(),
            show_toolbar: false,
            title: None,
            confirm_button_text: "Confirm".to_string(),
            cancel_button_text: "Cancel".to_string(),
            item_height: DEFAULT_ITEM_HEIGHT,
            visible_item_count: DEFAULT_VISIBLE_ITEM_COUNT,
        }
    }
}

impl PickerConfig {
    /// Parse and validate a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to unit, not to a map.
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml_ng::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Check geometry fields.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.item_height.is_finite() || self.item_height <= 0.0 {
            return Err(ConfigError::invalid(
                "item_height",
                format!("must be a positive number, got {}", self.item_height),
            ));
        }
        if self.visible_item_count == 0 {
            return Err(ConfigError::invalid(
                "visible_item_count",
                "must be at least 1",
            ));
        }
        if self.value_key.is_empty() {
            return Err(ConfigError::invalid("value_key", "must not be empty"));
        }
        Ok(())
    }

    /// Column definitions, empty when absent.
    #[must_use]
    pub fn column_configs(&self) -> &[ColumnConfig] {
        self.columns.as_deref().unwrap_or_default()
    }
}
