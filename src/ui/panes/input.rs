//! Input field rendering

use super::{pane_block, visible};
use crate::ui::layout::{Hit, HitMap};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame,
};

/// Render the text field. The view scrolls horizontally so the end of the
/// text, where typing happens, stays visible.
pub fn render_input_pane(
    frame: &mut Frame,
    area: Rect,
    input: &str,
    focused: bool,
    hits: &mut HitMap,
) {
    let block = pane_block(" Text ".to_string(), focused);
    let inner = block.inner(area);
    hits.push(area, Hit::Input);

    let line = Line::from(visible(input));
    let text_width = line.width() as u16;
    let offset = text_width.saturating_sub(inner.width.saturating_sub(1));

    let paragraph = Paragraph::new(line)
        .style(Style::default().fg(DEFAULT_THEME.fg))
        .scroll((0, offset))
        .block(block);
    frame.render_widget(paragraph, area);

    if focused && inner.width > 0 && inner.height > 0 {
        let cursor_x = inner.x + (text_width - offset).min(inner.width - 1);
        frame.set_cursor_position((cursor_x, inner.y));
    }
}
