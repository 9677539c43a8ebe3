use super::helpers::{
    char_key, deleted, find_cell, formatter, key, left_click, render_to_string, source, TERM_H, TERM_W,
};
use crossterm::event::{KeyCode, KeyModifiers, MouseEvent, MouseEventKind};
use minitodo::ui::components::{HistoryDialog, MenuState};
use minitodo::ui::core::{Action, Component};

fn render(dialog: &mut HistoryDialog) -> String {
    render_to_string(TERM_W, TERM_H, |f, area| dialog.render(f, area))
}

#[test]
fn test_one_row_per_task_in_order() {
    let tasks = vec![deleted("Buy milk", 9), deleted("Call mom", 8), deleted("Pay rent", 7)];
    let (_tx, rx) = source(tasks.clone());
    let dialog = HistoryDialog::new(rx, formatter());

    assert_eq!(dialog.row_count(), 3);
    let titles: Vec<&str> = dialog.rows().iter().map(|row| row.task().title.as_str()).collect();
    assert_eq!(titles, vec!["Buy milk", "Call mom", "Pay rent"]);
    assert!(dialog.rows().iter().all(|row| row.menu_state() == MenuState::Closed));
}

#[test]
fn test_rendered_rows_follow_sequence_order() {
    let (_tx, rx) = source(vec![deleted("Zebra", 9), deleted("Apple", 8)]);
    let mut dialog = HistoryDialog::new(rx, formatter());

    let screen = render(&mut dialog);
    let (_, zebra_row) = find_cell(&screen, "Zebra").unwrap();
    let (_, apple_row) = find_cell(&screen, "Apple").unwrap();
    assert!(zebra_row < apple_row);
    assert!(screen.contains("History"));
}

#[test]
fn test_empty_history_renders_placeholder_and_dismisses() {
    let (_tx, rx) = source(Vec::new());
    let mut dialog = HistoryDialog::new(rx, formatter());

    assert_eq!(dialog.row_count(), 0);
    let screen = render(&mut dialog);
    assert!(screen.contains("History"));
    assert!(screen.contains("No deleted tasks"));

    // Opening a menu on an empty list does nothing
    assert_eq!(dialog.handle_key_events(key(KeyCode::Enter)), Action::None);
    assert_eq!(dialog.open_row(), None);

    assert_eq!(dialog.handle_key_events(key(KeyCode::Esc)), Action::HideHistory);
}

#[test]
fn test_buy_milk_recover_scenario() {
    let task = deleted("Buy milk", 9);
    let (_tx, rx) = source(vec![task.clone()]);
    let mut dialog = HistoryDialog::new(rx, formatter());

    let screen = render(&mut dialog);
    assert!(screen.contains("Buy milk"));
    assert!(screen.contains("deleted 2025-03-14 09:30"));

    assert_eq!(dialog.handle_key_events(key(KeyCode::Enter)), Action::None);
    assert_eq!(dialog.open_row(), Some(0));

    assert_eq!(dialog.handle_key_events(char_key('r')), Action::UndoDelete(task));
    assert_eq!(dialog.open_row(), None);
}

#[test]
fn test_delete_forever_from_keyboard() {
    let first = deleted("Buy milk", 9);
    let second = deleted("Old report", 8);
    let (_tx, rx) = source(vec![first, second.clone()]);
    let mut dialog = HistoryDialog::new(rx, formatter());

    dialog.handle_key_events(char_key('j'));
    assert_eq!(dialog.selected_index(), 1);
    dialog.handle_key_events(char_key('m'));
    assert_eq!(dialog.open_row(), Some(1));

    assert_eq!(dialog.handle_key_events(char_key('d')), Action::DeleteForever(second));
    assert_eq!(dialog.open_row(), None);
}

#[test]
fn test_open_menu_captures_escape() {
    let (_tx, rx) = source(vec![deleted("Buy milk", 9)]);
    let mut dialog = HistoryDialog::new(rx, formatter());

    dialog.handle_key_events(key(KeyCode::Enter));
    assert_eq!(dialog.handle_key_events(key(KeyCode::Esc)), Action::None);
    assert_eq!(dialog.open_row(), None);

    assert_eq!(dialog.handle_key_events(key(KeyCode::Esc)), Action::HideHistory);
}

#[test]
fn test_navigation_is_clamped() {
    let (_tx, rx) = source(vec![deleted("One", 9), deleted("Two", 8), deleted("Three", 7)]);
    let mut dialog = HistoryDialog::new(rx, formatter());

    dialog.handle_key_events(key(KeyCode::Up));
    assert_eq!(dialog.selected_index(), 0);

    for _ in 0..5 {
        dialog.handle_key_events(key(KeyCode::Down));
    }
    assert_eq!(dialog.selected_index(), 2);

    dialog.handle_key_events(key(KeyCode::Home));
    assert_eq!(dialog.selected_index(), 0);
    dialog.handle_key_events(key(KeyCode::End));
    assert_eq!(dialog.selected_index(), 2);
}

#[test]
fn test_refresh_picks_up_new_snapshot() {
    let (tx, rx) = source(vec![deleted("Buy milk", 9)]);
    let mut dialog = HistoryDialog::new(rx, formatter());
    assert!(!dialog.refresh());

    tx.send_replace(vec![deleted("Pay rent", 10), deleted("Buy milk", 9)]);
    assert!(dialog.refresh());
    assert_eq!(dialog.row_count(), 2);
    assert_eq!(dialog.rows()[0].task().title, "Pay rent");

    assert!(!dialog.refresh());
}

#[test]
fn test_refresh_rebuilds_rows_closed_and_clamps_selection() {
    let (tx, rx) = source(vec![deleted("One", 9), deleted("Two", 8)]);
    let mut dialog = HistoryDialog::new(rx, formatter());

    dialog.handle_key_events(char_key('j'));
    dialog.handle_key_events(key(KeyCode::Enter));
    assert_eq!(dialog.open_row(), Some(1));

    tx.send_replace(vec![deleted("One", 9)]);
    assert!(dialog.refresh());
    assert_eq!(dialog.open_row(), None);
    assert_eq!(dialog.selected_index(), 0);
}

#[test]
fn test_refresh_after_store_dropped_keeps_rows() {
    let (tx, rx) = source(vec![deleted("Buy milk", 9)]);
    let mut dialog = HistoryDialog::new(rx, formatter());
    drop(tx);

    assert!(!dialog.refresh());
    assert_eq!(dialog.row_count(), 1);
}

#[test]
fn test_mouse_trigger_and_recover() {
    let task = deleted("Buy milk", 9);
    let (_tx, rx) = source(vec![task.clone()]);
    let mut dialog = HistoryDialog::new(rx, formatter());

    let screen = render(&mut dialog);
    let (column, row) = find_cell(&screen, "⋮").unwrap();
    assert_eq!(dialog.handle_mouse_events(left_click(column, row)), Action::None);
    assert_eq!(dialog.open_row(), Some(0));

    let screen = render(&mut dialog);
    let (column, row) = find_cell(&screen, "Recover").unwrap();
    assert_eq!(dialog.handle_mouse_events(left_click(column, row)), Action::UndoDelete(task));
    assert_eq!(dialog.open_row(), None);
}

#[test]
fn test_mouse_delete_forever() {
    let task = deleted("Buy milk", 9);
    let (_tx, rx) = source(vec![task.clone()]);
    let mut dialog = HistoryDialog::new(rx, formatter());

    let screen = render(&mut dialog);
    let (column, row) = find_cell(&screen, "⋮").unwrap();
    dialog.handle_mouse_events(left_click(column, row));

    let screen = render(&mut dialog);
    let (column, row) = find_cell(&screen, "✗ Delete").unwrap();
    assert_eq!(dialog.handle_mouse_events(left_click(column, row)), Action::DeleteForever(task));
}

#[test]
fn test_click_outside_menu_only_closes_menu() {
    let (_tx, rx) = source(vec![deleted("Buy milk", 9), deleted("Pay rent", 8)]);
    let mut dialog = HistoryDialog::new(rx, formatter());

    dialog.handle_key_events(key(KeyCode::Enter));
    render(&mut dialog);

    // Inside the dialog, away from the menu
    assert_eq!(dialog.handle_mouse_events(left_click(20, 15)), Action::None);
    assert_eq!(dialog.open_row(), None);

    // Outside the dialog entirely
    dialog.handle_key_events(key(KeyCode::Enter));
    render(&mut dialog);
    assert_eq!(dialog.handle_mouse_events(left_click(0, 0)), Action::None);
    assert_eq!(dialog.open_row(), None);
}

#[test]
fn test_backdrop_click_dismisses_dialog() {
    let (_tx, rx) = source(vec![deleted("Buy milk", 9)]);
    let mut dialog = HistoryDialog::new(rx, formatter());
    render(&mut dialog);

    assert_eq!(dialog.handle_mouse_events(left_click(0, 0)), Action::HideHistory);
    // Clicking inside the dialog is not a dismissal
    assert_eq!(dialog.handle_mouse_events(left_click(40, 12)), Action::None);
}

#[test]
fn test_mouse_wheel_moves_selection() {
    let (_tx, rx) = source(vec![deleted("One", 9), deleted("Two", 8)]);
    let mut dialog = HistoryDialog::new(rx, formatter());

    let wheel = |kind| MouseEvent {
        kind,
        column: 40,
        row: 10,
        modifiers: KeyModifiers::NONE,
    };

    dialog.handle_mouse_events(wheel(MouseEventKind::ScrollDown));
    assert_eq!(dialog.selected_index(), 1);
    dialog.handle_mouse_events(wheel(MouseEventKind::ScrollUp));
    assert_eq!(dialog.selected_index(), 0);
}

#[test]
fn test_open_menu_is_rendered_with_both_actions() {
    let (_tx, rx) = source(vec![deleted("Buy milk", 9)]);
    let mut dialog = HistoryDialog::new(rx, formatter());

    let closed = render(&mut dialog);
    assert!(!closed.contains("↶ Recover"));

    dialog.handle_key_events(key(KeyCode::Enter));
    let open = render(&mut dialog);
    assert!(open.contains("↶ Recover"));
    assert!(open.contains("✗ Delete"));
}

#[test]
fn test_selection_scrolls_into_view() {
    let tasks: Vec<_> = (0..10).map(|i| deleted(&format!("Task number {}", i), i)).collect();
    let (_tx, rx) = source(tasks);
    let mut dialog = HistoryDialog::new(rx, formatter());

    let top = render(&mut dialog);
    assert!(top.contains("Task number 0"));
    assert!(!top.contains("Task number 9"));

    dialog.handle_key_events(key(KeyCode::End));
    let bottom = render(&mut dialog);
    assert!(bottom.contains("Task number 9"));
    assert!(!bottom.contains("Task number 0"));
}

#[test]
fn test_dismiss_emits_single_hide_history() {
    let (_tx, rx) = source(vec![deleted("Buy milk", 9)]);
    let dialog = HistoryDialog::new(rx, formatter());
    assert_eq!(dialog.dismiss(), Action::HideHistory);
    assert_eq!(dialog.row_count(), 1);
}

#[test]
fn test_click_after_shrinking_refresh_hits_nothing() {
    let (tx, rx) = source(vec![deleted("One", 9), deleted("Two", 8), deleted("Three", 7)]);
    let mut dialog = HistoryDialog::new(rx, formatter());

    let screen = render(&mut dialog);
    let (_, last_row) = find_cell(&screen, "Three").unwrap();
    let (trigger_column, _) = find_cell(&screen, "⋮").unwrap();

    tx.send_replace(vec![deleted("One", 9)]);
    assert!(dialog.refresh());

    // Geometry of the previous frame no longer applies
    assert_eq!(dialog.handle_mouse_events(left_click(trigger_column, last_row)), Action::None);
    assert_eq!(dialog.open_row(), None);
    assert_eq!(dialog.handle_mouse_events(left_click(20, last_row)), Action::None);
    assert_eq!(dialog.selected_index(), 0);

    // The next frame restores hit-testing for the remaining row
    let screen = render(&mut dialog);
    let (column, row) = find_cell(&screen, "⋮").unwrap();
    dialog.handle_mouse_events(left_click(column, row));
    assert_eq!(dialog.open_row(), Some(0));
}
