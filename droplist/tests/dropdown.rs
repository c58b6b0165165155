use std::cell::RefCell;
use std::rc::Rc;

use droplist::{
    Buffer, DisplayState, Dropdown, DropdownConfig, Event, EventResult, Key, Modifiers,
    MouseButton, PointerListeners, Rect, SelectOption, Target, WidthTag,
};

// Layout with the default `Md` width at the origin:
//   trigger rows 0..3, summary text on row 1 from column 2, caret at column 25
//   panel from row 3; list rows start at row 4 (single) or row 6 (multi)
const TEXT_X: u16 = 2;
const CARET_X: u16 = 25;
const SINGLE_LIST_Y: u16 = 4;
const MULTI_LIST_Y: u16 = 6;
const BUTTON_Y: u16 = 4;

type Calls = Rc<RefCell<Vec<Vec<String>>>>;

fn red_blue() -> Vec<SelectOption> {
    vec![
        SelectOption::new("Red", "red"),
        SelectOption::new("Blue", "blue"),
    ]
}

fn generated(count: usize) -> Vec<SelectOption> {
    (1..=count)
        .map(|i| SelectOption::new(format!("Option {i}"), format!("option{i}")))
        .collect()
}

fn dropdown(config: DropdownConfig, options: Vec<SelectOption>) -> (Dropdown, Calls) {
    let calls: Calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    let dropdown = Dropdown::new(config, options, move |selected| {
        sink.borrow_mut()
            .push(selected.iter().map(|o| o.value().to_string()).collect());
    });
    (dropdown, calls)
}

fn frame(dropdown: &mut Dropdown) -> Buffer {
    let mut buf = Buffer::new(40, 40);
    dropdown.render(&mut buf, Rect::new(0, 0, 40, 40));
    buf
}

fn click(x: u16, y: u16) -> Event {
    Event::Click {
        x,
        y,
        button: MouseButton::Left,
    }
}

fn key(key: Key) -> Event {
    Event::Key {
        key,
        modifiers: Modifiers::default(),
    }
}

fn selected_values(dropdown: &Dropdown) -> Vec<&str> {
    dropdown.selected().iter().map(SelectOption::value).collect()
}

// ============================================================================
// Trigger
// ============================================================================

#[test]
fn test_closed_shows_placeholder_and_caret() {
    let (mut dd, _) = dropdown(DropdownConfig::new(), red_blue());
    let buf = frame(&mut dd);

    assert_eq!(buf.row_text(TEXT_X, 1, 9), "Select...");
    assert_eq!(buf.get(CARET_X, 1).unwrap().symbol, '▾');
    assert_eq!(dd.display_state(), DisplayState::Closed);
}

#[test]
fn test_trigger_click_toggles_open() {
    let (mut dd, calls) = dropdown(DropdownConfig::new(), red_blue());
    frame(&mut dd);

    assert_eq!(dd.handle_event(&click(5, 1)), EventResult::Consumed);
    assert!(dd.is_open());

    let buf = frame(&mut dd);
    assert_eq!(buf.get(CARET_X, 1).unwrap().symbol, '▴');
    assert_eq!(buf.row_text(TEXT_X, SINGLE_LIST_Y, 3), "Red");
    assert_eq!(buf.row_text(TEXT_X, SINGLE_LIST_Y + 1, 4), "Blue");

    dd.handle_event(&click(5, 1));
    assert!(!dd.is_open());
    assert!(calls.borrow().is_empty(), "opening doesn't notify");
}

#[test]
fn test_summary_is_truncated_to_trigger_width() {
    let options = vec![SelectOption::new("Really really long label", "long")];
    let (mut dd, _) = dropdown(DropdownConfig::new().width(WidthTag::Sm), options);
    dd.toggle_index(0);

    let buf = frame(&mut dd);
    // Sm is 16 wide: 12 columns of content, 10 for text.
    assert_eq!(buf.row_text(TEXT_X, 1, 10), "Really re…");
}

#[test]
fn test_custom_placeholder() {
    let (mut dd, _) = dropdown(DropdownConfig::new().placeholder("Pick one"), red_blue());
    assert_eq!(dd.display_text(), "Pick one");
    let buf = frame(&mut dd);
    assert_eq!(buf.row_text(TEXT_X, 1, 8), "Pick one");
}

// ============================================================================
// Row clicks
// ============================================================================

#[test]
fn test_single_select_row_clicks() {
    let (mut dd, calls) = dropdown(DropdownConfig::new(), red_blue());
    dd.open();
    frame(&mut dd);

    dd.handle_event(&click(4, SINGLE_LIST_Y));
    assert_eq!(selected_values(&dd), vec!["red"]);

    dd.handle_event(&click(4, SINGLE_LIST_Y + 1));
    assert_eq!(selected_values(&dd), vec!["blue"]);

    dd.handle_event(&click(4, SINGLE_LIST_Y + 1));
    assert!(dd.selected().is_empty());

    assert!(dd.is_open(), "row clicks keep the panel open");
    assert_eq!(calls.borrow().len(), 3);
}

#[test]
fn test_multi_select_row_clicks() {
    let (mut dd, calls) = dropdown(DropdownConfig::new().multi_select(true), red_blue());
    dd.open();
    frame(&mut dd);

    dd.handle_event(&click(4, MULTI_LIST_Y));
    dd.handle_event(&click(4, MULTI_LIST_Y + 1));
    assert_eq!(selected_values(&dd), vec!["red", "blue"]);

    dd.handle_event(&click(4, MULTI_LIST_Y));
    assert_eq!(selected_values(&dd), vec!["blue"]);

    assert_eq!(
        *calls.borrow(),
        vec![
            vec!["red".to_string()],
            vec!["red".to_string(), "blue".to_string()],
            vec!["blue".to_string()],
        ]
    );
}

#[test]
fn test_selected_row_shows_check() {
    let (mut dd, _) = dropdown(DropdownConfig::new(), red_blue());
    dd.open();
    dd.toggle_index(1);

    let buf = frame(&mut dd);
    assert_eq!(buf.get(CARET_X, SINGLE_LIST_Y).unwrap().symbol, ' ');
    assert_eq!(buf.get(CARET_X, SINGLE_LIST_Y + 1).unwrap().symbol, '✓');
    assert_eq!(buf.row_text(TEXT_X, 1, 4), "Blue");
}

#[test]
fn test_clicks_inside_panel_are_consumed_without_change() {
    let (mut dd, calls) = dropdown(DropdownConfig::new(), red_blue());
    dd.open();
    frame(&mut dd);

    // Below the two rows, still inside the list viewport.
    assert_eq!(dd.hit_test(4, SINGLE_LIST_Y + 4), Some(Target::List));
    assert_eq!(
        dd.handle_event(&click(4, SINGLE_LIST_Y + 4)),
        EventResult::Consumed
    );
    assert!(calls.borrow().is_empty());
}

#[test]
fn test_stale_panel_hits_ignored_when_closed() {
    let (mut dd, calls) = dropdown(DropdownConfig::new(), red_blue());
    dd.open();
    frame(&mut dd);
    dd.close();

    assert_eq!(dd.hit_test(4, SINGLE_LIST_Y), None);
    assert_eq!(
        dd.handle_event(&click(4, SINGLE_LIST_Y)),
        EventResult::Ignored
    );
    assert!(calls.borrow().is_empty());
}

// ============================================================================
// Select all
// ============================================================================

#[test]
fn test_select_all_button() {
    let (mut dd, calls) = dropdown(DropdownConfig::new().multi_select(true), generated(200));
    dd.open();
    let buf = frame(&mut dd);
    assert_eq!(buf.row_text(TEXT_X + 1, BUTTON_Y, 10), "Select all");

    dd.handle_event(&click(TEXT_X + 1, BUTTON_Y));
    assert_eq!(dd.selected().len(), 200);

    let buf = frame(&mut dd);
    assert_eq!(buf.row_text(TEXT_X + 1, BUTTON_Y, 12), "Deselect all");
    let summary = dd.summary().unwrap();
    assert_eq!(summary.split(", ").count(), 50);

    dd.handle_event(&click(TEXT_X + 1, BUTTON_Y));
    assert!(dd.selected().is_empty());
    assert_eq!(calls.borrow().len(), 2);
}

#[test]
fn test_single_select_has_no_select_all() {
    let (mut dd, _) = dropdown(DropdownConfig::new(), generated(20));
    dd.open();
    let buf = frame(&mut dd);
    assert_eq!(buf.row_text(TEXT_X, SINGLE_LIST_Y, 8), "Option 1");
    assert_ne!(dd.hit_test(TEXT_X + 1, BUTTON_Y), Some(Target::SelectAll));
}

// ============================================================================
// Virtualization
// ============================================================================

#[test]
fn test_only_visible_rows_are_rendered() {
    let (mut dd, _) = dropdown(DropdownConfig::new().multi_select(true), generated(10_000));
    dd.open();
    let buf = frame(&mut dd);

    let viewport = dd.config().viewport_height();
    for i in 0..viewport {
        let expected = format!("Option {}", i + 1);
        let width = expected.len() as u16;
        assert_eq!(buf.row_text(TEXT_X, MULTI_LIST_Y + i, width), expected);
    }

    let rows: Vec<usize> = (0..40)
        .filter_map(|y| match dd.hit_test(TEXT_X, y) {
            Some(Target::Row(index)) => Some(index),
            _ => None,
        })
        .collect();
    assert_eq!(rows, (0..viewport as usize).collect::<Vec<_>>());
}

#[test]
fn test_scroll_moves_visible_window() {
    let (mut dd, calls) = dropdown(DropdownConfig::new().multi_select(true), generated(10_000));
    dd.open();
    frame(&mut dd);

    let scroll = Event::Scroll {
        x: 4,
        y: MULTI_LIST_Y + 2,
        delta_y: 3,
    };
    assert_eq!(dd.handle_event(&scroll), EventResult::Consumed);
    assert_eq!(dd.list().scroll_top(), 3);

    let buf = frame(&mut dd);
    assert_eq!(buf.row_text(TEXT_X, MULTI_LIST_Y, 8), "Option 4");

    dd.handle_event(&click(4, MULTI_LIST_Y));
    assert_eq!(*calls.borrow(), vec![vec!["option4".to_string()]]);
}

#[test]
fn test_scroll_outside_list_is_ignored() {
    let (mut dd, _) = dropdown(DropdownConfig::new(), generated(100));
    dd.open();
    frame(&mut dd);

    let scroll = Event::Scroll {
        x: 39,
        y: 39,
        delta_y: 1,
    };
    assert_eq!(dd.handle_event(&scroll), EventResult::Ignored);
    assert_eq!(dd.list().scroll_top(), 0);
}

#[test]
fn test_keys_scroll_while_open() {
    let (mut dd, _) = dropdown(DropdownConfig::new(), generated(100));
    assert_eq!(dd.handle_event(&key(Key::Down)), EventResult::Ignored);

    dd.open();
    frame(&mut dd);
    dd.handle_event(&key(Key::PageDown));
    assert_eq!(dd.list().scroll_top(), 8);
    dd.handle_event(&key(Key::Up));
    assert_eq!(dd.list().scroll_top(), 7);
    dd.handle_event(&key(Key::End));
    assert_eq!(dd.list().scroll_top(), 92);
    dd.handle_event(&key(Key::Home));
    assert_eq!(dd.list().scroll_top(), 0);
}

#[test]
fn test_taller_rows() {
    let (mut dd, _) = dropdown(DropdownConfig::new().row_height(2), generated(100));
    dd.open();
    let buf = frame(&mut dd);

    // Two cells per row: labels on every other line.
    assert_eq!(buf.row_text(TEXT_X, SINGLE_LIST_Y, 8), "Option 1");
    assert_eq!(buf.row_text(TEXT_X, SINGLE_LIST_Y + 2, 8), "Option 2");
    assert_eq!(dd.hit_test(TEXT_X, SINGLE_LIST_Y + 1), Some(Target::Row(0)));
    assert_eq!(dd.hit_test(TEXT_X, SINGLE_LIST_Y + 7), Some(Target::Row(3)));
}

// ============================================================================
// Outside-click dismissal
// ============================================================================

#[test]
fn test_outside_click_closes_without_touching_selection() {
    let listeners = PointerListeners::new();
    let (mut dd, calls) = dropdown(DropdownConfig::new().multi_select(true), red_blue());
    dd.mount(&listeners);
    dd.open();
    dd.toggle_index(0);
    frame(&mut dd);

    let inside = click(4, MULTI_LIST_Y).pointer().unwrap();
    listeners.dispatch(&inside);
    assert!(dd.is_open());

    let outside = click(35, 35).pointer().unwrap();
    listeners.dispatch(&outside);
    assert!(!dd.is_open());
    assert_eq!(selected_values(&dd), vec!["red"]);
    assert_eq!(calls.borrow().len(), 1);
}

#[test]
fn test_panel_press_right_after_opening_keeps_it_open() {
    let listeners = PointerListeners::new();
    let (mut dd, _) = dropdown(DropdownConfig::new(), red_blue());
    dd.mount(&listeners);
    frame(&mut dd);

    // Open and press on the panel with no frame drawn in between.
    let open = click(TEXT_X, 1);
    listeners.dispatch(&open.pointer().unwrap());
    dd.handle_event(&open);
    assert!(dd.is_open());

    listeners.dispatch(&click(TEXT_X, SINGLE_LIST_Y).pointer().unwrap());
    assert!(dd.is_open());
    assert!(dd.contains(TEXT_X, SINGLE_LIST_Y));

    // Once closed, the panel's area no longer belongs to the widget.
    dd.close();
    assert!(!dd.contains(TEXT_X, SINGLE_LIST_Y));
    assert!(dd.contains(TEXT_X, 1));
}

#[test]
fn test_hover_cleared_after_outside_dismissal() {
    let listeners = PointerListeners::new();
    let palette = DropdownConfig::new().palette;
    let (mut dd, _) = dropdown(DropdownConfig::new(), red_blue());
    dd.mount(&listeners);
    dd.open();
    frame(&mut dd);

    dd.handle_event(&Event::MouseMove {
        x: TEXT_X,
        y: SINGLE_LIST_Y,
    });
    let buf = frame(&mut dd);
    assert_eq!(buf.get(TEXT_X, SINGLE_LIST_Y).unwrap().bg, palette.hover);

    listeners.dispatch(&click(35, 35).pointer().unwrap());
    assert!(!dd.is_open());

    dd.handle_event(&click(TEXT_X, 1));
    let buf = frame(&mut dd);
    assert_eq!(buf.get(TEXT_X, SINGLE_LIST_Y).unwrap().bg, palette.surface);
}

#[test]
fn test_reopen_keeps_selection() {
    let listeners = PointerListeners::new();
    let (mut dd, _) = dropdown(DropdownConfig::new().multi_select(true), red_blue());
    dd.mount(&listeners);
    dd.open();
    frame(&mut dd);
    dd.handle_event(&click(4, MULTI_LIST_Y + 1));

    listeners.dispatch(&click(39, 0).pointer().unwrap());
    assert!(!dd.is_open());

    dd.handle_event(&click(5, 1));
    assert!(dd.is_open());
    let buf = frame(&mut dd);
    assert_eq!(buf.get(CARET_X, MULTI_LIST_Y + 1).unwrap().symbol, '✓');
    assert_eq!(selected_values(&dd), vec!["blue"]);
}

#[test]
fn test_escape_closes() {
    let (mut dd, _) = dropdown(DropdownConfig::new(), red_blue());
    dd.open();
    assert_eq!(dd.handle_event(&key(Key::Escape)), EventResult::Consumed);
    assert!(!dd.is_open());
}

#[test]
fn test_unmount_releases_listener() {
    let listeners = PointerListeners::new();
    let (mut dd, _) = dropdown(DropdownConfig::new(), red_blue());

    dd.mount(&listeners);
    assert!(dd.is_mounted());
    assert_eq!(listeners.len(), 1);

    dd.mount(&listeners);
    assert_eq!(listeners.len(), 1, "remounting replaces the listener");

    dd.unmount();
    assert!(listeners.is_empty());
}

#[test]
fn test_drop_while_open_releases_listener() {
    let listeners = PointerListeners::new();
    {
        let (mut dd, _) = dropdown(DropdownConfig::new(), red_blue());
        dd.mount(&listeners);
        dd.open();
        frame(&mut dd);
        assert_eq!(listeners.len(), 1);
    }
    assert!(listeners.is_empty());
    listeners.dispatch(&click(0, 0).pointer().unwrap());
}

#[test]
fn test_instances_are_independent() {
    let listeners = PointerListeners::new();
    let (mut left, _) = dropdown(DropdownConfig::new(), red_blue());
    let (mut right, _) = dropdown(DropdownConfig::new(), red_blue());
    left.mount(&listeners);
    right.mount(&listeners);

    let mut buf = Buffer::new(80, 40);
    left.open();
    left.render(&mut buf, Rect::new(0, 0, 30, 40));
    right.render(&mut buf, Rect::new(40, 0, 30, 40));
    left.toggle_index(0);

    // Pressing the right trigger closes the left panel, then opens the right.
    let press = click(45, 1);
    listeners.dispatch(&press.pointer().unwrap());
    right.handle_event(&press);

    assert!(!left.is_open());
    assert!(right.is_open());
    assert_eq!(selected_values(&left), vec!["red"]);
    assert!(right.selected().is_empty());
}
