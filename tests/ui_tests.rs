// Key and mouse handling plus a rendering smoke test on a TestBackend

mod common;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, Terminal};
use tokenexplorer::explorer::PLACEHOLDER;
use tokenexplorer::ui::app::{App, FocusedPane};
use tokenexplorer::{Explorer, Inspection};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn screen(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_focus_cycles_through_panes() {
    assert_eq!(FocusedPane::Input.next(), FocusedPane::Segments);
    assert_eq!(FocusedPane::Segments.next(), FocusedPane::Bits);
    assert_eq!(FocusedPane::Bits.next(), FocusedPane::Input);
    assert_eq!(FocusedPane::Input.prev(), FocusedPane::Bits);

    let tok = common::tokenizer();
    let mut app = App::new(Explorer::new(&tok, common::SAMPLE));
    app.handle_key_event(key(KeyCode::Tab));
    assert_eq!(app.focused_pane, FocusedPane::Segments);
    app.handle_key_event(key(KeyCode::BackTab));
    assert_eq!(app.focused_pane, FocusedPane::Input);
}

#[test]
fn test_typing_retokenizes_and_resets_inspection() {
    let tok = common::tokenizer();
    let mut app = App::new(Explorer::new(&tok, "Test"));
    app.explorer.click_token(0);

    app.handle_key_event(key(KeyCode::Char('y')));
    assert_eq!(app.explorer.input(), "Testy");
    assert_eq!(app.explorer.tokens(), &[258, 121]);
    assert_eq!(app.explorer.inspection(), Inspection::Idle);

    app.handle_key_event(key(KeyCode::Backspace));
    assert_eq!(app.explorer.input(), "Test");
    // 'q' is text while the input is focused
    app.handle_key_event(key(KeyCode::Char('q')));
    assert!(!app.should_quit);
    assert_eq!(app.explorer.input(), "Testq");
}

#[test]
fn test_segment_keys_move_cursor_and_toggle() {
    let tok = common::tokenizer();
    let mut app = App::new(Explorer::new(&tok, common::SAMPLE));
    app.handle_key_event(key(KeyCode::Enter));
    assert_eq!(app.focused_pane, FocusedPane::Segments);

    app.handle_key_event(key(KeyCode::Right));
    app.handle_key_event(key(KeyCode::Right));
    app.handle_key_event(key(KeyCode::Enter));
    assert_eq!(app.explorer.selected(), Some(2));

    app.handle_key_event(key(KeyCode::Char(' ')));
    assert_eq!(app.explorer.selected(), None);

    app.handle_key_event(key(KeyCode::End));
    assert_eq!(app.chip_cursor, 4);
    app.handle_key_event(key(KeyCode::Right));
    assert_eq!(app.chip_cursor, 4);

    app.handle_key_event(key(KeyCode::Char('q')));
    assert!(app.should_quit);
}

#[test]
fn test_bit_keys_navigate_grid_and_flip() {
    let tok = common::tokenizer();
    let mut app = App::new(Explorer::new(&tok, common::SAMPLE));
    app.focused_pane = FocusedPane::Bits;

    for _ in 0..3 {
        app.handle_key_event(key(KeyCode::Down));
        app.handle_key_event(key(KeyCode::Right));
    }
    assert_eq!(app.bit_cursor, 15);
    app.handle_key_event(key(KeyCode::Down));
    assert_eq!(app.bit_cursor, 15);

    app.handle_key_event(key(KeyCode::Enter));
    assert_eq!(app.explorer.bits().token(), 1);

    // Top-left bit would give 0x8001, outside the vocabulary.
    app.bit_cursor = 0;
    app.handle_key_event(key(KeyCode::Enter));
    assert_eq!(app.explorer.bits().token(), 1);
}

#[test]
fn test_escape_quits_from_input() {
    let tok = common::tokenizer();
    let mut app = App::new(Explorer::new(&tok, common::SAMPLE));
    app.handle_key_event(key(KeyCode::Esc));
    assert!(app.should_quit);
}

#[test]
fn test_render_shows_segments_and_placeholder() {
    let tok = common::tokenizer();
    let mut app = App::new(Explorer::new(&tok, common::SAMPLE));
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();

    terminal.draw(|f| app.render(f)).unwrap();
    let text = screen(&terminal);
    assert!(text.contains(PLACEHOLDER));
    assert!(text.contains("0000000000000000"));
    assert!(text.contains(" woo"));
    assert!(text.contains("5 tokens"));
}

#[test]
fn test_mouse_clicks_hit_chips_and_cells() {
    let tok = common::tokenizer();
    let mut app = App::new(Explorer::new(&tok, common::SAMPLE));
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();

    // First chip sits at the top-left of the segments pane interior.
    app.handle_mouse_event(click(2, 4));
    assert_eq!(app.focused_pane, FocusedPane::Segments);
    assert_eq!(app.explorer.selected(), Some(0));

    terminal.draw(|f| app.render(f)).unwrap();
    assert!(screen(&terminal).contains("Test (258)"));

    // Bottom-right cell of the grid is the least significant bit.
    app.handle_mouse_event(click(53, 26));
    assert_eq!(app.focused_pane, FocusedPane::Bits);
    assert_eq!(app.bit_cursor, 15);
    assert_eq!(app.explorer.bits().token(), 259);
}
