//! Status bar rendering with encoding, counts and keybindings

use crate::ui::app::FocusedPane;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    encoding: &str,
    token_count: usize,
    char_count: usize,
    focused: FocusedPane,
) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let bar = Style::default().bg(DEFAULT_THEME.status_bg);
    let sep_style = bar.fg(DEFAULT_THEME.comment);

    let left_spans = vec![
        Span::styled(
            format!(" {} ", encoding),
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" | ", sep_style),
        Span::styled(
            format!("{} tokens · {} chars ", token_count, char_count),
            bar.fg(DEFAULT_THEME.fg),
        ),
    ];
    frame.render_widget(
        Paragraph::new(Line::from(left_spans))
            .style(bar)
            .alignment(Alignment::Left),
        layout[0],
    );

    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = bar.fg(DEFAULT_THEME.fg);

    let hints: &[(&str, &str)] = match focused {
        FocusedPane::Input => &[("type", "edit"), ("⇥", "focus"), ("esc", "quit")],
        FocusedPane::Segments => &[
            ("←/→", "move"),
            ("↵/⎵", "toggle"),
            ("⇥", "focus"),
            ("q", "quit"),
        ],
        FocusedPane::Bits => &[
            ("←↑↓→", "move"),
            ("↵/⎵", "flip"),
            ("⇥", "focus"),
            ("q", "quit"),
        ],
    };

    let mut right_spans = Vec::with_capacity(hints.len() * 3);
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            right_spans.push(Span::styled("│", sep_style));
        }
        right_spans.push(Span::styled(format!(" {} ", key), key_style));
        right_spans.push(Span::styled(format!(" {} ", desc), desc_style));
    }

    frame.render_widget(
        Paragraph::new(Line::from(right_spans))
            .style(bar)
            .alignment(Alignment::Right),
        layout[1],
    );
}
