//! Scroll-wheel picker widgets.
//!
//! - [`PickerColumn`]: one scrollable list of options with a single selection
//! - [`Picker`]: several columns addressed by position, with change, cancel
//!   and confirm notifications
//! - [`PickerConfig`]: declarative configuration loadable from YAML or JSON

pub mod config;
pub mod error;
pub mod option;
pub mod picker;
pub mod picker_column;

pub use config::{ColumnConfig, PickerConfig};
pub use error::ConfigError;
pub use option::{OptionRecord, PickerOption, DEFAULT_VALUE_KEY};
pub use picker::{Picker, PickerEvent, ToolbarAction, TOOLBAR_BUTTON_WIDTH, TOOLBAR_HEIGHT};
pub use picker_column::{
    ColumnChanged, PickerColumn, DEFAULT_ITEM_HEIGHT, DEFAULT_VISIBLE_ITEM_COUNT,
};
