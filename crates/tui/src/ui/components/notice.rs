use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::{
    app::form::Notice,
    ui::{components::centered_box, theme::Theme},
};

/// Modal shown while a rejected submission blocks the form.
pub fn render(frame: &mut Frame<'_>, area: Rect, notice: Option<&Notice>) {
    let Some(notice) = notice else {
        return;
    };
    let theme = Theme::default();
    let width = (notice.message.chars().count() as u16 + 6).clamp(30, 60);
    let rect = centered_box(width, 6, area);

    let block = Block::default()
        .title(Span::styled(
            " Cannot save ",
            Style::default().fg(theme.error),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.error));

    let lines = vec![
        Line::from(Span::styled(
            notice.message.as_str(),
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Esc", Style::default().fg(theme.accent)),
            Span::styled(" close", Style::default().fg(theme.dim)),
        ]),
    ];

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        rect,
    );
}
