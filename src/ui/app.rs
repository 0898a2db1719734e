//! Main TUI application state and logic

use super::layout::{Hit, HitMap};
use super::panes::{self, bits::GRID_SIDE};
use crate::explorer::{Explorer, BITS};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Input,
    Segments,
    Bits,
}

impl FocusedPane {
    /// Move focus down the screen (input -> segments -> bits -> input)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Input => FocusedPane::Segments,
            FocusedPane::Segments => FocusedPane::Bits,
            FocusedPane::Bits => FocusedPane::Input,
        }
    }

    /// Move focus up the screen
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Input => FocusedPane::Bits,
            FocusedPane::Segments => FocusedPane::Input,
            FocusedPane::Bits => FocusedPane::Segments,
        }
    }
}

/// The main application state
pub struct App<'t> {
    pub explorer: Explorer<'t>,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Chip under the keyboard cursor in the segments pane
    pub chip_cursor: usize,

    /// Grid cell under the keyboard cursor, 0 = most significant bit
    pub bit_cursor: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Clickable areas from the last rendered frame
    hits: HitMap,
}

impl<'t> App<'t> {
    pub fn new(explorer: Explorer<'t>) -> Self {
        App {
            explorer,
            focused_pane: FocusedPane::Input,
            chip_cursor: 0,
            bit_cursor: 0,
            should_quit: false,
            hits: HitMap::default(),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
                Event::Mouse(mouse) => self.handle_mouse_event(mouse),
                _ => {}
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(panes::bits::pane_height(3)),
                Constraint::Length(1),
            ])
            .split(size);

        self.hits.clear();

        panes::render_input_pane(
            frame,
            chunks[0],
            self.explorer.input(),
            self.focused_pane == FocusedPane::Input,
            &mut self.hits,
        );

        panes::render_segments_pane(
            frame,
            chunks[1],
            &self.explorer,
            self.chip_cursor,
            self.focused_pane == FocusedPane::Segments,
            &mut self.hits,
        );

        panes::render_bits_pane(
            frame,
            chunks[2],
            &self.explorer,
            self.bit_cursor,
            self.focused_pane == FocusedPane::Bits,
            &mut self.hits,
        );

        panes::render_status_bar(
            frame,
            chunks[3],
            self.explorer.tokenizer().encoding().name(),
            self.explorer.tokens().len(),
            self.explorer.input().chars().count(),
            self.focused_pane,
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
                return;
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
                return;
            }
            _ => {}
        }

        match self.focused_pane {
            FocusedPane::Input => self.handle_input_key(key),
            FocusedPane::Segments => self.handle_segments_key(key),
            FocusedPane::Bits => self.handle_bits_key(key),
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let mut text = self.explorer.input().to_string();
                text.push(c);
                self.set_input(text);
            }
            KeyCode::Backspace => {
                let mut text = self.explorer.input().to_string();
                if text.pop().is_some() {
                    self.set_input(text);
                }
            }
            KeyCode::Enter => {
                self.focused_pane = FocusedPane::Segments;
            }
            _ => {}
        }
    }

    fn handle_segments_key(&mut self, key: KeyEvent) {
        let count = self.explorer.tokens().len();
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.chip_cursor = self.chip_cursor.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.chip_cursor + 1 < count {
                    self.chip_cursor += 1;
                }
            }
            KeyCode::Home => {
                self.chip_cursor = 0;
            }
            KeyCode::End => {
                self.chip_cursor = count.saturating_sub(1);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.explorer.click_token(self.chip_cursor);
            }
            _ => {}
        }
    }

    fn handle_bits_key(&mut self, key: KeyEvent) {
        let (row, col) = (self.bit_cursor / GRID_SIDE, self.bit_cursor % GRID_SIDE);
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Left if col > 0 => self.bit_cursor -= 1,
            KeyCode::Right if col + 1 < GRID_SIDE => self.bit_cursor += 1,
            KeyCode::Up if row > 0 => self.bit_cursor -= GRID_SIDE,
            KeyCode::Down if self.bit_cursor + GRID_SIDE < BITS => self.bit_cursor += GRID_SIDE,
            KeyCode::Enter | KeyCode::Char(' ') => {
                // A flip that lands outside the vocabulary is dropped silently.
                self.explorer.click_bit(self.bit_cursor);
            }
            _ => {}
        }
    }

    /// Handle mouse events against the areas recorded by the last render
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        match self.hits.hit(mouse.column, mouse.row) {
            Some(Hit::Input) => {
                self.focused_pane = FocusedPane::Input;
            }
            Some(Hit::Chip(index)) => {
                self.focused_pane = FocusedPane::Segments;
                self.chip_cursor = index;
                self.explorer.click_token(index);
            }
            Some(Hit::Bit(index)) => {
                self.focused_pane = FocusedPane::Bits;
                self.bit_cursor = index;
                self.explorer.click_bit(index);
            }
            None => {}
        }
    }

    fn set_input(&mut self, text: String) {
        self.explorer.set_input(text);
        let count = self.explorer.tokens().len();
        self.chip_cursor = self.chip_cursor.min(count.saturating_sub(1));
    }
}
