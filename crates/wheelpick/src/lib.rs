//! wheelpick: multi-column scroll-wheel picker widgets.
//!
//! ```
//! use wheelpick::prelude::*;
//!
//! let mut picker = Picker::new().columns([
//!     ColumnConfig::new(["vip", "normal"]),
//!     ColumnConfig::new(["1990", "1991", "1992"]),
//! ]);
//!
//! picker.set_values(["normal", "1992"]);
//! assert_eq!(picker.indexes(), vec![Some(1), Some(2)]);
//! ```

pub use wheelpick_core::*;
pub use wheelpick_widgets as widgets;

/// Everything needed to build and drive a picker.
pub mod prelude {
    pub use wheelpick_core::{Constraints, Event, Key, MouseButton, Point, Rect, Size, Widget};
    pub use wheelpick_widgets::{
        ColumnConfig, ConfigError, Picker, PickerColumn, PickerConfig, PickerEvent, PickerOption,
        ToolbarAction,
    };
}
