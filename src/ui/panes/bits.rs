//! Current label and the 4×4 grid of token bits, most significant bit first,
//! row-major.

use super::{pane_block, visible};
use crate::explorer::{Explorer, BITS};
use crate::ui::layout::{Hit, HitMap};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

pub const GRID_SIDE: usize = 4;

const MAX_CELL_WIDTH: u16 = 12;

/// Height the pane needs for a grid with `cell_height`-row cells: borders,
/// the label line, one spacer row and the grid itself.
pub fn pane_height(cell_height: u16) -> u16 {
    2 + 1 + 1 + GRID_SIDE as u16 * cell_height
}

pub fn render_bits_pane(
    frame: &mut Frame,
    area: Rect,
    explorer: &Explorer,
    cursor: usize,
    focused: bool,
    hits: &mut HitMap,
) {
    let block = pane_block(" Binary Representation ".to_string(), focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let bits = explorer.bits();
    let label = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("{} ", bits),
            Style::default().fg(DEFAULT_THEME.number),
        ),
        Span::styled(visible(&explorer.label()), Style::default().fg(DEFAULT_THEME.fg)),
    ]));
    frame.render_widget(label, Rect { height: 1, ..inner });

    let grid_top = inner.y + 2;
    let grid_height = (inner.y + inner.height).saturating_sub(grid_top);
    let cell_w = (inner.width / GRID_SIDE as u16).min(MAX_CELL_WIDTH);
    // Terminal cells are about twice as tall as they are wide.
    let cell_h = (grid_height / GRID_SIDE as u16).min(cell_w / 2).max(1);
    if cell_w < 2 || grid_height < GRID_SIDE as u16 {
        return;
    }
    let grid_left = inner.x + (inner.width - cell_w * GRID_SIDE as u16) / 2;

    for index in 0..BITS {
        let row = (index / GRID_SIDE) as u16;
        let col = (index % GRID_SIDE) as u16;
        // One column of spacing between cells.
        let cell = Rect {
            x: grid_left + col * cell_w,
            y: grid_top + row * cell_h,
            width: cell_w - 1,
            height: cell_h,
        };

        let on = bits.get(index);
        let bg = if on { DEFAULT_THEME.primary } else { DEFAULT_THEME.bit_off };
        frame.render_widget(Block::default().style(Style::default().bg(bg)), cell);

        let is_cursor = focused && index == cursor;
        let digit = if on { "1" } else { "0" };
        let text = if is_cursor { format!("[{digit}]") } else { digit.to_string() };
        let mut style = Style::default().bg(bg).fg(if on { Color::Black } else { DEFAULT_THEME.comment });
        if is_cursor {
            style = style
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD);
        }
        let middle = Rect {
            y: cell.y + cell.height / 2,
            height: 1,
            ..cell
        };
        frame.render_widget(
            Paragraph::new(text).style(style).alignment(Alignment::Center),
            middle,
        );
        hits.push(cell, Hit::Bit(index));
    }
}
