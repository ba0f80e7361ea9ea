//! Multi-column scroll-wheel picker.
//!
//! A [`Picker`] owns its [`PickerColumn`]s and addresses them by zero-based
//! position. Reads at an out-of-range position return `None`; writes there
//! are ignored. Every call that changes a column's selection emits exactly
//! one [`PickerEvent::Change`] to the picker's subscribers before it returns.

use log::{debug, trace};
use serde_json::Value;
use std::any::Any;
use std::fmt;
use wheelpick_core::{
    Constraints, Event, Key, LayoutResult, Point, PressPhase, PressSource, Rect, Size, TypeId,
    Widget,
};

use crate::config::{ColumnConfig, PickerConfig};
use crate::option::{PickerOption, DEFAULT_VALUE_KEY};
use crate::picker_column::{
    ColumnChanged, PickerColumn, DEFAULT_ITEM_HEIGHT, DEFAULT_VISIBLE_ITEM_COUNT,
};

/// Toolbar height in pixels.
pub const TOOLBAR_HEIGHT: f32 = 44.0;

/// Width of each toolbar button in pixels.
pub const TOOLBAR_BUTTON_WIDTH: f32 = 64.0;

/// Notification raised by a picker.
#[derive(Debug, Clone, PartialEq)]
pub enum PickerEvent {
    /// A column's selection changed
    Change {
        /// Aggregate values after the change
        values: Vec<Option<PickerOption>>,
        /// Position of the column that changed
        column: usize,
    },
    /// The cancel button was activated
    Cancel {
        /// Aggregate values at activation
        values: Vec<Option<PickerOption>>,
    },
    /// The confirm button was activated
    Confirm {
        /// Aggregate values at activation
        values: Vec<Option<PickerOption>>,
    },
}

impl PickerEvent {
    /// Event name: `change`, `cancel` or `confirm`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Change { .. } => "change",
            Self::Cancel { .. } => "cancel",
            Self::Confirm { .. } => "confirm",
        }
    }

    /// Aggregate values carried by the event.
    #[must_use]
    pub fn values(&self) -> &[Option<PickerOption>] {
        match self {
            Self::Change { values, .. } | Self::Cancel { values } | Self::Confirm { values } => {
                values
            }
        }
    }
}

/// Toolbar buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    /// Dismiss without accepting
    Cancel,
    /// Accept the current values
    Confirm,
}

type Subscriber = Box<dyn FnMut(&PickerEvent) + Send + Sync>;

/// Multi-column picker widget.
pub struct Picker {
    /// Owned columns, in display order
    columns: Vec<PickerColumn>,
    /// Record field used as an option's key
    value_key: String,
    /// Whether the cancel/confirm toolbar is shown
    show_toolbar: bool,
    /// Toolbar title
    title: Option<String>,
    /// Confirm button text
    confirm_button_text: String,
    /// Cancel button text
    cancel_button_text: String,
    /// Row height shared by all columns
    item_height: f32,
    /// Visible rows shared by all columns
    visible_item_count: usize,
    /// Column receiving keyboard input
    focused_column: usize,
    /// Test ID
    test_id_value: Option<String>,
    /// Cached bounds
    bounds: Rect,
    /// Toolbar button pressed but not yet released, with the contact holding it
    pressed_action: Option<(ToolbarAction, PressSource)>,
    /// Event subscribers, in registration order
    subscribers: Vec<Subscriber>,
}

impl fmt::Debug for Picker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Picker")
            .field("columns", &self.columns)
            .field("value_key", &self.value_key)
            .field("show_toolbar", &self.show_toolbar)
            .field("title", &self.title)
            .field("item_height", &self.item_height)
            .field("visible_item_count", &self.visible_item_count)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

impl Default for Picker {
    fn default() -> Self {
        Self::new()
    }
}

impl Picker {
    /// Create a picker with no columns.
    #[must_use]
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
            value_key: DEFAULT_VALUE_KEY.to_string(),
            show_toolbar: false,
            title: None,
            confirm_button_text: "Confirm".to_string(),
            cancel_button_text: "Cancel".to_string(),
            item_height: DEFAULT_ITEM_HEIGHT,
            visible_item_count: DEFAULT_VISIBLE_ITEM_COUNT,
            focused_column: 0,
            test_id_value: None,
            bounds: Rect::default(),
            pressed_action: None,
            subscribers: Vec::new(),
        }
    }

    /// Build a picker from a configuration.
    #[must_use]
    pub fn from_config(config: &PickerConfig) -> Self {
        let mut picker = Self::new()
            .value_key(config.value_key.clone())
            .item_height(config.item_height)
            .visible_item_count(config.visible_item_count)
            .show_toolbar(config.show_toolbar)
            .confirm_button_text(config.confirm_button_text.clone())
            .cancel_button_text(config.cancel_button_text.clone())
            .columns(config.column_configs().iter().cloned());
        picker.title.clone_from(&config.title);
        picker
    }

    /// Append columns built from configurations.
    #[must_use]
    pub fn columns(mut self, configs: impl IntoIterator<Item = ColumnConfig>) -> Self {
        for config in configs {
            let mut column = PickerColumn::new(config.values).value_key(self.value_key.clone());
            if let Some(class_name) = config.class_name {
                column = column.class_name(class_name);
            }
            if let Some(index) = config.default_index {
                column = column.default_index(index);
            }
            self = self.column(column);
        }
        self
    }

    /// Append a column.
    ///
    /// The picker's `value_key`, `item_height` and `visible_item_count`
    /// replace the column's own settings.
    #[must_use]
    pub fn column(mut self, mut column: PickerColumn) -> Self {
        column.set_value_key(&self.value_key);
        column.set_geometry(self.item_height, self.visible_item_count);
        self.columns.push(column);
        self
    }

    /// Set the record field used as an option's key, for every column.
    #[must_use]
    pub fn value_key(mut self, key: impl Into<String>) -> Self {
        self.value_key = key.into();
        for column in &mut self.columns {
            column.set_value_key(&self.value_key);
        }
        self
    }

    /// Show or hide the cancel/confirm toolbar.
    #[must_use]
    pub const fn show_toolbar(mut self, show: bool) -> Self {
        self.show_toolbar = show;
        self
    }

    /// Set toolbar title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set confirm button text.
    #[must_use]
    pub fn confirm_button_text(mut self, text: impl Into<String>) -> Self {
        self.confirm_button_text = text.into();
        self
    }

    /// Set cancel button text.
    #[must_use]
    pub fn cancel_button_text(mut self, text: impl Into<String>) -> Self {
        self.cancel_button_text = text.into();
        self
    }

    /// Set row height for every column.
    #[must_use]
    pub fn item_height(mut self, height: f32) -> Self {
        self.item_height = height.max(1.0);
        self.sync_geometry();
        self
    }

    /// Set visible row count for every column.
    #[must_use]
    pub fn visible_item_count(mut self, count: usize) -> Self {
        self.visible_item_count = count.max(1);
        self.sync_geometry();
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Register a subscriber for every emitted event.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&PickerEvent) + Send + Sync + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Number of columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// All columns.
    #[must_use]
    pub fn get_columns(&self) -> &[PickerColumn] {
        &self.columns
    }

    /// Column at `pos`.
    #[must_use]
    pub fn get_column(&self, pos: usize) -> Option<&PickerColumn> {
        self.columns.get(pos)
    }

    /// First column tagged `class_name`.
    #[must_use]
    pub fn column_by_class(&self, class_name: &str) -> Option<&PickerColumn> {
        self.column_position(class_name).map(|pos| &self.columns[pos])
    }

    /// Position of the first column tagged `class_name`.
    #[must_use]
    pub fn column_position(&self, class_name: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| c.get_class_name() == Some(class_name))
    }

    /// Whether the toolbar is shown.
    #[must_use]
    pub const fn has_toolbar(&self) -> bool {
        self.show_toolbar
    }

    /// Toolbar title.
    #[must_use]
    pub fn get_title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Confirm button text.
    #[must_use]
    pub fn get_confirm_button_text(&self) -> &str {
        &self.confirm_button_text
    }

    /// Cancel button text.
    #[must_use]
    pub fn get_cancel_button_text(&self) -> &str {
        &self.cancel_button_text
    }

    /// Column receiving keyboard input.
    #[must_use]
    pub const fn focused_column(&self) -> usize {
        self.focused_column
    }

    // =========================================================================
    // Position-addressed operations
    // =========================================================================

    /// Options of the column at `pos`.
    #[must_use]
    pub fn column_values(&self, pos: usize) -> Option<&[PickerOption]> {
        self.columns.get(pos).map(PickerColumn::options)
    }

    /// Replace the options of the column at `pos`.
    /// Returns whether that column's selected option changed.
    pub fn set_column_values(
        &mut self,
        pos: usize,
        values: impl IntoIterator<Item = impl Into<PickerOption>>,
    ) -> bool {
        self.update_column(pos, |column| column.set_options(values))
    }

    /// Selected option of the column at `pos`.
    #[must_use]
    pub fn column_value(&self, pos: usize) -> Option<&PickerOption> {
        self.columns.get(pos).and_then(PickerColumn::current_value)
    }

    /// Select the option matching `value` in the column at `pos`.
    /// Returns whether the selection changed.
    pub fn set_column_value(&mut self, pos: usize, value: impl Into<Value>) -> bool {
        self.update_column(pos, |column| column.set_value(value))
    }

    /// Selected index of the column at `pos`.
    #[must_use]
    pub fn column_index(&self, pos: usize) -> Option<usize> {
        self.columns.get(pos).and_then(PickerColumn::index)
    }

    /// Select `index` in the column at `pos`.
    /// Returns whether the selection changed.
    pub fn set_column_index(&mut self, pos: usize, index: usize) -> bool {
        self.update_column(pos, |column| column.set_index(index))
    }

    /// Selected option of every column, in column order.
    #[must_use]
    pub fn values(&self) -> Vec<Option<PickerOption>> {
        self.columns
            .iter()
            .map(|c| c.current_value().cloned())
            .collect()
    }

    /// Apply `values` positionally with [`Self::set_column_value`].
    /// Extra entries are ignored. Returns how many columns changed.
    pub fn set_values(&mut self, values: impl IntoIterator<Item = impl Into<Value>>) -> usize {
        let mut changed = 0;
        for (pos, value) in values.into_iter().take(self.columns.len()).enumerate() {
            if self.set_column_value(pos, value) {
                changed += 1;
            }
        }
        changed
    }

    /// Selected index of every column, in column order.
    #[must_use]
    pub fn indexes(&self) -> Vec<Option<usize>> {
        self.columns.iter().map(PickerColumn::index).collect()
    }

    /// Apply `indexes` positionally with [`Self::set_column_index`].
    /// Extra entries are ignored. Returns how many columns changed.
    pub fn set_indexes(&mut self, indexes: impl IntoIterator<Item = usize>) -> usize {
        let mut changed = 0;
        for (pos, index) in indexes.into_iter().take(self.columns.len()).enumerate() {
            if self.set_column_index(pos, index) {
                changed += 1;
            }
        }
        changed
    }

    // =========================================================================
    // Toolbar
    // =========================================================================

    /// Activate the cancel button. No-op without a toolbar.
    pub fn cancel(&mut self) -> bool {
        self.activate(ToolbarAction::Cancel).is_some()
    }

    /// Activate the confirm button. No-op without a toolbar.
    pub fn confirm(&mut self) -> bool {
        self.activate(ToolbarAction::Confirm).is_some()
    }

    /// Area of a toolbar button after layout; `None` without a toolbar.
    #[must_use]
    pub fn toolbar_button_rect(&self, action: ToolbarAction) -> Option<Rect> {
        if !self.show_toolbar {
            return None;
        }
        let (toolbar, _) = self.bounds.split_top(TOOLBAR_HEIGHT);
        let width = TOOLBAR_BUTTON_WIDTH.min(toolbar.width / 2.0);
        let x = match action {
            ToolbarAction::Cancel => toolbar.x,
            ToolbarAction::Confirm => toolbar.x + toolbar.width - width,
        };
        Some(Rect::new(x, toolbar.y, width, toolbar.height))
    }

    /// Toolbar button under `point`, if any.
    #[must_use]
    pub fn toolbar_action_at(&self, point: &Point) -> Option<ToolbarAction> {
        [ToolbarAction::Cancel, ToolbarAction::Confirm]
            .into_iter()
            .find(|&action| {
                self.toolbar_button_rect(action)
                    .is_some_and(|rect| rect.contains_point(point))
            })
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn update_column(&mut self, pos: usize, f: impl FnOnce(&mut PickerColumn) -> bool) -> bool {
        let Some(column) = self.columns.get_mut(pos) else {
            trace!("column {pos} out of range ({} columns)", self.columns.len());
            return false;
        };
        if !f(column) {
            return false;
        }
        self.emit_change(pos);
        true
    }

    fn emit_change(&mut self, column: usize) -> PickerEvent {
        let event = PickerEvent::Change {
            values: self.values(),
            column,
        };
        self.emit(&event);
        event
    }

    fn activate(&mut self, action: ToolbarAction) -> Option<PickerEvent> {
        if !self.show_toolbar {
            trace!("{action:?} ignored: toolbar hidden");
            return None;
        }
        let values = self.values();
        let event = match action {
            ToolbarAction::Cancel => PickerEvent::Cancel { values },
            ToolbarAction::Confirm => PickerEvent::Confirm { values },
        };
        self.emit(&event);
        Some(event)
    }

    fn emit(&mut self, event: &PickerEvent) {
        debug!("picker emits {}", event.name());
        for subscriber in &mut self.subscribers {
            subscriber(event);
        }
    }

    fn sync_geometry(&mut self) {
        for column in &mut self.columns {
            column.set_geometry(self.item_height, self.visible_item_count);
        }
    }

    fn toolbar_event(&mut self, event: &Event) -> Option<Option<PickerEvent>> {
        let phase = event.press_phase()?;
        let source = event.press_source()?;
        if let PressPhase::Start(position) = phase {
            let action = self.toolbar_action_at(&position)?;
            self.pressed_action = Some((action, source));
            return Some(None);
        }

        let (pressed, _) = self.pressed_action.filter(|&(_, owner)| owner == source)?;
        match phase {
            PressPhase::End(position) => {
                self.pressed_action = None;
                if self.toolbar_action_at(&position) == Some(pressed) {
                    Some(self.activate(pressed))
                } else {
                    Some(None)
                }
            }
            PressPhase::Cancel => {
                self.pressed_action = None;
                Some(None)
            }
            PressPhase::Move(_) | PressPhase::Start(_) => Some(None),
        }
    }

    fn key_event(&mut self, key: Key) -> Option<PickerEvent> {
        match key {
            Key::Escape => self.activate(ToolbarAction::Cancel),
            Key::Enter => self.activate(ToolbarAction::Confirm),
            Key::Left => {
                self.focused_column = self.focused_column.saturating_sub(1);
                None
            }
            Key::Right => {
                if self.focused_column + 1 < self.columns.len() {
                    self.focused_column += 1;
                }
                None
            }
            _ => {
                let pos = self.focused_column;
                let column = self.columns.get_mut(pos)?;
                let message = column.event(&Event::KeyDown { key })?;
                message.downcast::<ColumnChanged>().ok()?;
                Some(self.emit_change(pos))
            }
        }
    }
}

impl Widget for Picker {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let toolbar = if self.show_toolbar { TOOLBAR_HEIGHT } else { 0.0 };
        let height = self
            .item_height
            .mul_add(self.visible_item_count as f32, toolbar);
        constraints.constrain(Size::new(constraints.max_finite_width(), height))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        let body = if self.show_toolbar {
            bounds.split_top(TOOLBAR_HEIGHT).1
        } else {
            bounds
        };
        let rects = body.split_columns(self.columns.len());
        for (column, rect) in self.columns.iter_mut().zip(rects) {
            column.layout(rect);
        }
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        if let Event::KeyDown { key } = event {
            return self
                .key_event(*key)
                .map(|e| Box::new(e) as Box<dyn Any + Send>);
        }

        if let Some(outcome) = self.toolbar_event(event) {
            return outcome.map(|e| Box::new(e) as Box<dyn Any + Send>);
        }

        let changed: Vec<usize> = self
            .columns
            .iter_mut()
            .enumerate()
            .filter_map(|(pos, column)| {
                let message = column.event(event)?;
                message.downcast::<ColumnChanged>().ok().map(|_| pos)
            })
            .collect();

        // One change per column; the host receives the last one.
        let mut last = None;
        for pos in changed {
            self.focused_column = pos;
            last = Some(self.emit_change(pos));
        }
        last.map(|e| Box::new(e) as Box<dyn Any + Send>)
    }

    fn is_interactive(&self) -> bool {
        self.show_toolbar || self.columns.iter().any(|c| c.is_interactive())
    }

    fn is_focusable(&self) -> bool {
        self.is_interactive()
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
