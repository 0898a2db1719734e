//! Stateless render functions for each visible pane.
//!
//! - [`input`]: the text field being tokenized
//! - [`segments`]: one clickable chip per token
//! - [`bits`]: the current label and the 4×4 bit grid
//! - [`status`]: encoding, counts and key hints
//!
//! Panes that draw clickable elements record them in the frame's
//! [`HitMap`](crate::ui::layout::HitMap).

pub mod bits;
pub mod input;
pub mod segments;
pub mod status;

pub use bits::render_bits_pane;
pub use input::render_input_pane;
pub use segments::render_segments_pane;
pub use status::render_status_bar;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders};

/// Replaces characters a terminal cell cannot show with visible stand-ins.
pub fn visible(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\n' => '⏎',
            '\r' => '␍',
            '\t' => '⇥',
            c if c.is_control() => '�',
            c => c,
        })
        .collect()
}

fn pane_block(title: String, focused: bool) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused {
            DEFAULT_THEME.border_focused
        } else {
            DEFAULT_THEME.border_normal
        }))
}
