//! Scroll-wheel column: one list of options with a single selection.
//!
//! The selection never rests on a disabled option while an enabled one
//! exists. Requests that would land on a disabled option resolve to the
//! nearest enabled option, scanning toward higher indices first and then
//! toward lower ones. Requests that cannot be honored leave the selection
//! untouched.

use log::{debug, trace};
use serde_json::Value;
use std::any::Any;
use wheelpick_core::{
    Constraints, DragTracker, DragUpdate, Event, Key, LayoutResult, Rect, Size, TypeId, Widget,
};

use crate::option::{PickerOption, DEFAULT_VALUE_KEY};

/// Default row height in pixels.
pub const DEFAULT_ITEM_HEIGHT: f32 = 44.0;

/// Default number of rows visible at once.
pub const DEFAULT_VISIBLE_ITEM_COUNT: usize = 5;

/// Message emitted when the column's selection changes through input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnChanged {
    /// The newly selected index
    pub index: usize,
}

/// A single scrollable column of options.
#[derive(Debug, Clone)]
pub struct PickerColumn {
    /// Options in selection order
    options: Vec<PickerOption>,
    /// Selected position, `None` iff there are no options
    current_index: Option<usize>,
    /// Record field compared against requested values
    value_key: String,
    /// Row height used for drag resolution
    item_height: f32,
    /// Rows visible at once
    visible_item_count: usize,
    /// Addressing tag
    class_name: Option<String>,
    /// Test ID
    test_id_value: Option<String>,
    /// Cached bounds
    bounds: Rect,
    /// In-flight press
    drag: DragTracker,
}

impl Default for PickerColumn {
    fn default() -> Self {
        Self::new(Vec::<PickerOption>::new())
    }
}

impl PickerColumn {
    /// Create a column selecting the first enabled option.
    #[must_use]
    pub fn new(options: impl IntoIterator<Item = impl Into<PickerOption>>) -> Self {
        let mut column = Self {
            options: options.into_iter().map(Into::into).collect(),
            current_index: None,
            value_key: DEFAULT_VALUE_KEY.to_string(),
            item_height: DEFAULT_ITEM_HEIGHT,
            visible_item_count: DEFAULT_VISIBLE_ITEM_COUNT,
            class_name: None,
            test_id_value: None,
            bounds: Rect::default(),
            drag: DragTracker::new(),
        };
        column.current_index = column.fallback_index();
        column
    }

    /// Start on the option matching `value`, if present and enabled.
    ///
    /// Matching uses the key in effect at the time of the call, so set
    /// [`Self::value_key`] first.
    #[must_use]
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.set_value(value);
        self
    }

    /// Start on `index`, resolved to the nearest enabled option.
    #[must_use]
    pub fn default_index(mut self, index: usize) -> Self {
        self.set_index(index);
        self
    }

    /// Set the record field used as an option's key.
    ///
    /// The current selection is kept; a [`Self::value`] applied earlier was
    /// matched against the previous key.
    #[must_use]
    pub fn value_key(mut self, key: impl Into<String>) -> Self {
        self.value_key = key.into();
        self
    }

    /// Set row height.
    #[must_use]
    pub fn item_height(mut self, height: f32) -> Self {
        self.item_height = height.max(1.0);
        self
    }

    /// Set number of visible rows.
    #[must_use]
    pub fn visible_item_count(mut self, count: usize) -> Self {
        self.visible_item_count = count.max(1);
        self
    }

    /// Set the addressing tag.
    #[must_use]
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// All options.
    #[must_use]
    pub fn options(&self) -> &[PickerOption] {
        &self.options
    }

    /// Option count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Check if empty (no options).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Selected index.
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        self.current_index
    }

    /// Selected option.
    #[must_use]
    pub fn current_value(&self) -> Option<&PickerOption> {
        self.current_index.and_then(|i| self.options.get(i))
    }

    /// Record field used as an option's key.
    #[must_use]
    pub fn get_value_key(&self) -> &str {
        &self.value_key
    }

    /// Row height.
    #[must_use]
    pub const fn get_item_height(&self) -> f32 {
        self.item_height
    }

    /// Visible row count.
    #[must_use]
    pub const fn get_visible_item_count(&self) -> usize {
        self.visible_item_count
    }

    /// Addressing tag.
    #[must_use]
    pub fn get_class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    /// Whether a press is being dragged.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Vertical translation a host applies to the option list so the
    /// selected row sits in the middle of the viewport, including any
    /// in-flight drag offset.
    #[must_use]
    pub fn scroll_offset(&self) -> f32 {
        let base = self.item_height * (self.visible_item_count as f32 - 1.0) / 2.0;
        let selected = self.current_index.unwrap_or(0) as f32 * self.item_height;
        let dragged = self.drag.active().map_or(0.0, |d| d.offset().y);
        base - selected + dragged
    }

    /// Replace the options.
    ///
    /// Keeps the previous selection if its key is still present on an
    /// enabled option, otherwise falls back to the first enabled option.
    /// Returns whether the selected option changed.
    pub fn set_options(
        &mut self,
        options: impl IntoIterator<Item = impl Into<PickerOption>>,
    ) -> bool {
        let previous = self.current_value().cloned();
        let previous_key = previous
            .as_ref()
            .and_then(|opt| opt.key(&self.value_key))
            .cloned();

        self.options = options.into_iter().map(Into::into).collect();
        self.drag.reset();

        let preserved = previous_key.and_then(|key| {
            self.options
                .iter()
                .position(|opt| !opt.is_disabled() && opt.matches(&self.value_key, &key))
        });
        self.current_index = preserved.or_else(|| self.fallback_index());

        let changed = previous.as_ref() != self.current_value();
        debug!(
            "column options replaced: {} options, index {:?}, changed {}",
            self.options.len(),
            self.current_index,
            changed
        );
        changed
    }

    /// Select the first option whose key equals `value`.
    ///
    /// No-op when no option matches or the first match is disabled.
    /// Returns whether the selection changed.
    pub fn set_value(&mut self, value: impl Into<Value>) -> bool {
        let value = value.into();
        match self
            .options
            .iter()
            .position(|opt| opt.matches(&self.value_key, &value))
        {
            Some(index) if !self.options[index].is_disabled() => self.select(index),
            Some(index) => {
                trace!("set_value: option {index} matching {value} is disabled");
                false
            }
            None => {
                trace!("set_value: no option matches {value}");
                false
            }
        }
    }

    /// Select `index`, resolving a disabled target to the nearest enabled
    /// option. Out-of-range indices are ignored.
    /// Returns whether the selection changed.
    pub fn set_index(&mut self, index: usize) -> bool {
        if index >= self.options.len() {
            trace!("set_index: {index} out of range ({} options)", self.options.len());
            return false;
        }
        match self.nearest_enabled(index) {
            Some(resolved) => self.select(resolved),
            None => {
                trace!("set_index: every option is disabled");
                false
            }
        }
    }

    /// Apply a released drag of `delta` pixels along the column.
    ///
    /// Dragging upward (negative delta) advances the selection. The target
    /// is clamped to the option range and resolved like [`Self::set_index`].
    /// Returns whether the selection changed.
    pub fn resolve_drag(&mut self, delta: f32) -> bool {
        let Some(current) = self.current_index else {
            return false;
        };
        if !delta.is_finite() {
            trace!("resolve_drag: ignoring non-finite delta");
            return false;
        }
        let last = self.options.len() - 1;
        let steps = (delta / self.item_height).round();
        let candidate = (current as f32 - steps).clamp(0.0, last as f32) as usize;
        if candidate == current {
            return false;
        }
        match self.nearest_enabled(candidate) {
            Some(resolved) => self.select(resolved),
            None => false,
        }
    }

    /// Move to the next enabled option below the current one.
    pub fn select_next(&mut self) -> bool {
        let start = self.current_index.map_or(0, |i| i + 1);
        match (start..self.options.len()).find(|&i| self.is_enabled(i)) {
            Some(index) => self.select(index),
            None => false,
        }
    }

    /// Move to the previous enabled option above the current one.
    pub fn select_previous(&mut self) -> bool {
        let end = self.current_index.unwrap_or(0);
        match (0..end).rev().find(|&i| self.is_enabled(i)) {
            Some(index) => self.select(index),
            None => false,
        }
    }

    /// Move to the first enabled option.
    pub fn select_first(&mut self) -> bool {
        match (0..self.options.len()).find(|&i| self.is_enabled(i)) {
            Some(index) => self.select(index),
            None => false,
        }
    }

    /// Move to the last enabled option.
    pub fn select_last(&mut self) -> bool {
        match (0..self.options.len()).rev().find(|&i| self.is_enabled(i)) {
            Some(index) => self.select(index),
            None => false,
        }
    }

    pub(crate) fn set_value_key(&mut self, key: &str) {
        key.clone_into(&mut self.value_key);
    }

    pub(crate) fn set_geometry(&mut self, item_height: f32, visible_item_count: usize) {
        self.item_height = item_height.max(1.0);
        self.visible_item_count = visible_item_count.max(1);
    }

    fn is_enabled(&self, index: usize) -> bool {
        self.options.get(index).is_some_and(|opt| !opt.is_disabled())
    }

    /// Nearest enabled option at or after `index`, else before it.
    fn nearest_enabled(&self, index: usize) -> Option<usize> {
        (index..self.options.len())
            .find(|&i| self.is_enabled(i))
            .or_else(|| (0..index).rev().find(|&i| self.is_enabled(i)))
    }

    /// First enabled option; index 0 when all are disabled; `None` when empty.
    fn fallback_index(&self) -> Option<usize> {
        if self.options.is_empty() {
            None
        } else {
            self.nearest_enabled(0).or(Some(0))
        }
    }

    fn select(&mut self, index: usize) -> bool {
        if self.current_index == Some(index) {
            return false;
        }
        debug!("column index {:?} -> {index}", self.current_index);
        self.current_index = Some(index);
        true
    }
}

impl Widget for PickerColumn {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let height = self.item_height * self.visible_item_count as f32;
        constraints.constrain(Size::new(constraints.max_finite_width(), height))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        let changed = match event {
            Event::KeyDown { key: Key::Down } => self.select_next(),
            Event::KeyDown { key: Key::Up } => self.select_previous(),
            Event::KeyDown { key: Key::Home } => self.select_first(),
            Event::KeyDown { key: Key::End } => self.select_last(),
            Event::FocusOut => {
                self.drag.reset();
                false
            }
            _ => match self.drag.process(event, &self.bounds) {
                Some(DragUpdate::Released(offset)) => self.resolve_drag(offset.y),
                _ => false,
            },
        };

        if changed {
            self.current_index
                .map(|index| Box::new(ColumnChanged { index }) as Box<dyn Any + Send>)
        } else {
            None
        }
    }

    fn is_interactive(&self) -> bool {
        !self.options.is_empty()
    }

    fn is_focusable(&self) -> bool {
        !self.options.is_empty()
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
