//! End-to-end tests for the picker and its columns.

use proptest::prelude::*;
use serde_json::json;
use std::sync::{Arc, Mutex};
use wheelpick::prelude::*;
use wheelpick::TouchId;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn membership_picker() -> Picker {
    Picker::new().columns([
        ColumnConfig::new(["vip", "normal"]).class_name("column1"),
        ColumnConfig::new(["1990", "1991", "1992", "1993", "1994", "1995"]).class_name("column2"),
    ])
}

fn record_events(picker: &mut Picker) -> Arc<Mutex<Vec<PickerEvent>>> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    picker.subscribe(move |event| sink.lock().unwrap().push(event.clone()));
    events
}

// =============================================================================
// Configuration-driven construction
// =============================================================================

#[test]
fn test_picker_from_yaml() {
    init_logging();
    let config = PickerConfig::from_yaml(
        r#"
show_toolbar: true
title: Membership
confirm_button_text: OK
columns:
  - class_name: tier
    values: [vip, normal]
  - class_name: year
    values: ["1990", "1991", "1992"]
    default_index: 2
"#,
    )
    .expect("valid config");

    let mut picker = Picker::from_config(&config);
    assert_eq!(picker.column_count(), 2);
    assert_eq!(picker.get_confirm_button_text(), "OK");
    assert_eq!(picker.column_position("year"), Some(1));
    assert_eq!(picker.column_value(1), Some(&PickerOption::from("1992")));

    let events = record_events(&mut picker);
    assert!(picker.confirm());
    let events = events.lock().unwrap();
    assert_eq!(
        *events,
        vec![PickerEvent::Confirm {
            values: vec![
                Some(PickerOption::from("vip")),
                Some(PickerOption::from("1992")),
            ],
        }]
    );
}

#[test]
fn test_picker_from_json_with_disabled_records() {
    init_logging();
    let config = PickerConfig::from_json(
        r#"{
            "columns": [{
                "values": [
                    {"text": "1", "disabled": true},
                    {"text": "2"},
                    {"text": "3", "disabled": true},
                    {"text": "4", "disabled": true}
                ]
            }]
        }"#,
    )
    .expect("valid config");

    let mut picker = Picker::from_config(&config);
    assert_eq!(picker.column_index(0), Some(1));
    assert!(!picker.set_column_index(0, 3));
    assert_eq!(picker.column_index(0), Some(1));
    assert!(!picker.set_column_value(0, "3"));
    assert_eq!(
        picker.column_value(0).map(|o| o.label("text")),
        Some("2".to_string())
    );
}

#[test]
fn test_record_with_unusual_disabled_field_is_selectable() {
    let config = PickerConfig::from_json(
        r#"{"columns": [{"values": [{"text": "1"}, {"text": "3", "disabled": "yes"}]}]}"#,
    )
    .expect("valid config");
    let mut picker = Picker::from_config(&config);
    assert!(picker.set_column_value(0, "3"));
    assert_eq!(picker.column_index(0), Some(1));
}

#[test]
fn test_empty_picker_with_toolbar_emits_cancel_once() {
    init_logging();
    let config = PickerConfig::from_yaml("show_toolbar: true\n").expect("valid config");
    let mut picker = Picker::from_config(&config);
    picker.layout(Rect::new(0.0, 0.0, 320.0, 264.0));
    assert_eq!(picker.column_count(), 0);

    let events = record_events(&mut picker);
    let cancel = picker
        .toolbar_button_rect(ToolbarAction::Cancel)
        .expect("toolbar shown");
    let center = Point::new(cancel.x + cancel.width / 2.0, cancel.y + cancel.height / 2.0);
    picker.event(&Event::MouseDown {
        position: center,
        button: MouseButton::Left,
    });
    picker.event(&Event::MouseUp {
        position: center,
        button: MouseButton::Left,
    });

    let events = events.lock().unwrap();
    assert_eq!(*events, vec![PickerEvent::Cancel { values: vec![] }]);
}

#[test]
fn test_invalid_config_is_reported() {
    let err = PickerConfig::from_yaml("item_height: -3\n").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
}

// =============================================================================
// Gesture-driven selection
// =============================================================================

#[test]
fn test_drag_column_through_picker() {
    init_logging();
    let mut picker = membership_picker();
    let size = picker.measure(Constraints::loose(Size::new(320.0, 600.0)));
    picker.layout(Rect::new(0.0, 0.0, size.width, size.height));
    let events = record_events(&mut picker);

    let start = Point::new(240.0, 110.0);
    picker.event(&Event::TouchStart {
        id: TouchId(1),
        position: start,
    });
    picker.event(&Event::TouchMove {
        id: TouchId(1),
        position: Point::new(240.0, 60.0),
    });
    assert_eq!(picker.column_index(1), Some(0));
    picker.event(&Event::TouchEnd {
        id: TouchId(1),
        position: Point::new(240.0, 10.0),
    });

    assert_eq!(picker.column_index(1), Some(2));
    let events = events.lock().unwrap();
    assert_eq!(events.len(), 1);
    assert!(matches!(&events[0], PickerEvent::Change { column: 1, .. }));
    assert_eq!(events[0].values()[1], Some(PickerOption::from("1992")));
}

#[test]
fn test_overshooting_drag_clamps() {
    let mut picker = membership_picker();
    picker.layout(Rect::new(0.0, 0.0, 320.0, 220.0));

    for (from, to, expected) in [(200.0, -5000.0, 5), (10.0, 5000.0, 0)] {
        picker.event(&Event::MouseDown {
            position: Point::new(240.0, from),
            button: MouseButton::Left,
        });
        picker.event(&Event::MouseUp {
            position: Point::new(240.0, to),
            button: MouseButton::Left,
        });
        assert_eq!(picker.column_index(1), Some(expected));
    }
}

#[test]
fn test_set_column_values_keeps_aggregate_length() {
    let mut picker = membership_picker();
    picker.set_column_values(1, [json!({"text": "a"}), json!({"text": "b"})]);
    assert_eq!(picker.values().len(), 2);
    assert_eq!(picker.column_values(1).map(<[_]>::len), Some(2));
    assert!(picker.set_column_value(1, "b"));
    assert_eq!(picker.column_index(1), Some(1));
}

// =============================================================================
// Property tests
// =============================================================================

fn option_strategy() -> impl Strategy<Value = PickerOption> {
    (0u8..6, any::<bool>())
        .prop_map(|(n, disabled)| PickerOption::record("text", n.to_string()).disabled(disabled))
}

proptest! {
    #[test]
    fn prop_set_value_law(
        options in prop::collection::vec(option_strategy(), 0..8),
        target in 0u8..8,
    ) {
        let mut picker = Picker::new().columns([ColumnConfig::new(options.clone())]);
        let before = picker.column_value(0).cloned();
        let target = json!(target.to_string());

        picker.set_column_value(0, target.clone());

        let first = options.iter().find(|o| o.matches("text", &target));
        match first {
            Some(opt) if !opt.is_disabled() => {
                prop_assert_eq!(picker.column_value(0), Some(opt));
            }
            _ => prop_assert_eq!(picker.column_value(0).cloned(), before),
        }
    }

    #[test]
    fn prop_selection_never_on_disabled_when_enabled_exists(
        options in prop::collection::vec(option_strategy(), 1..8),
        ops in prop::collection::vec((0u8..3, -400.0f32..400.0, 0usize..10), 0..20),
    ) {
        let mut column = PickerColumn::new(options.clone());
        for (kind, delta, index) in ops {
            match kind {
                0 => { column.resolve_drag(delta); }
                1 => { column.set_index(index); }
                _ => { column.set_value(index.to_string()); }
            }
        }
        let any_enabled = options.iter().any(|o| !o.is_disabled());
        let index = column.index().expect("non-empty column has a selection");
        prop_assert!(index < options.len());
        if any_enabled {
            prop_assert!(!options[index].is_disabled());
        }
    }

    #[test]
    fn prop_zero_drag_is_identity(
        options in prop::collection::vec(option_strategy(), 0..8),
        start in 0usize..8,
    ) {
        let mut column = PickerColumn::new(options);
        column.set_index(start);
        let before = column.index();
        prop_assert!(!column.resolve_drag(0.0));
        prop_assert_eq!(column.index(), before);
    }

    #[test]
    fn prop_set_indexes_reflects_options(
        a in 0usize..2,
        b in 0usize..6,
        extra in prop::collection::vec(0usize..10, 0..3),
    ) {
        let mut picker = membership_picker();
        let mut indexes = vec![a, b];
        indexes.extend(extra);
        picker.set_indexes(indexes);
        prop_assert_eq!(picker.indexes(), vec![Some(a), Some(b)]);
        prop_assert_eq!(
            picker.column_value(1),
            picker.column_values(1).and_then(|v| v.get(b))
        );
    }

    #[test]
    fn prop_out_of_range_position_is_inert(pos in 2usize..50, value in "[a-z]{1,4}") {
        let mut picker = membership_picker();
        let before = picker.values();
        let events = record_events(&mut picker);

        prop_assert!(picker.column_values(pos).is_none());
        prop_assert!(picker.column_value(pos).is_none());
        prop_assert!(picker.column_index(pos).is_none());
        prop_assert!(!picker.set_column_value(pos, value.as_str()));
        prop_assert!(!picker.set_column_index(pos, 0));
        prop_assert!(!picker.set_column_values(pos, [value.as_str()]));

        prop_assert_eq!(picker.values(), before);
        prop_assert_eq!(picker.column_count(), 2);
        prop_assert!(events.lock().unwrap().is_empty());
    }

    #[test]
    fn prop_one_change_event_per_changed_call(
        calls in prop::collection::vec((0usize..3, 0usize..7), 0..15),
    ) {
        let mut picker = membership_picker();
        let events = record_events(&mut picker);
        let mut expected = 0;
        for (pos, index) in calls {
            if picker.set_column_index(pos, index) {
                expected += 1;
            }
        }
        prop_assert_eq!(events.lock().unwrap().len(), expected);
    }
}
