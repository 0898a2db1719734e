//! Segment chips: one per token, showing the decoded text, or the token
//! number while the chip is selected.

use super::{pane_block, visible};
use crate::explorer::Explorer;
use crate::ui::layout::{layout_chips, scroll_for, Hit, HitMap, CHIP_PAD};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Content width of chip `index`. Sized for whichever of the segment and the
/// token number is wider so selecting a chip does not reflow the row.
fn chip_content_width(explorer: &Explorer, index: usize) -> u16 {
    let segment = Line::from(visible(&explorer.segments()[index])).width();
    let number = explorer.tokens()[index].to_string().len();
    segment.max(number) as u16
}

pub fn render_segments_pane(
    frame: &mut Frame,
    area: Rect,
    explorer: &Explorer,
    cursor: usize,
    focused: bool,
    hits: &mut HitMap,
) {
    let count = explorer.tokens().len();
    let title = format!(
        " Word Segments ({} token{}) ",
        count,
        if count == 1 { "" } else { "s" }
    );
    let block = pane_block(title, focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if count == 0 {
        let empty = Paragraph::new(Span::styled(
            "Type some text to tokenize it",
            Style::default().fg(DEFAULT_THEME.comment),
        ));
        frame.render_widget(empty, inner);
        return;
    }
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let widths: Vec<u16> = (0..count)
        .map(|i| chip_content_width(explorer, i))
        .collect();
    let slots = layout_chips(&widths, inner.width);

    let cursor = cursor.min(count - 1);
    let first_row = scroll_for(slots[cursor].row, inner.height as usize);
    let selected = explorer.selected();

    for (index, slot) in slots.iter().enumerate() {
        if slot.row < first_row || slot.row - first_row >= inner.height as usize {
            continue;
        }
        let chip = Rect {
            x: inner.x + slot.x,
            y: inner.y + (slot.row - first_row) as u16,
            width: slot.width,
            height: 1,
        };

        let is_selected = selected == Some(index);
        let mut style = if is_selected {
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().bg(DEFAULT_THEME.chip_bg).fg(DEFAULT_THEME.fg)
        };
        if focused && index == cursor {
            style = style.add_modifier(Modifier::UNDERLINED);
            if !is_selected {
                style = style.fg(DEFAULT_THEME.secondary);
            }
        }

        let text = visible(&explorer.chip_text(index));
        let pad = " ".repeat(CHIP_PAD as usize);
        let paragraph = Paragraph::new(Line::from(format!("{pad}{text}{pad}")))
            .style(style)
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, chip);
        hits.push(chip, Hit::Chip(index));
    }
}
