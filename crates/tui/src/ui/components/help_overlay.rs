use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::{
    app::AppState,
    ui::{components::centered_rect, theme::Theme},
};

const BINDINGS: &[(&str, &str)] = &[
    ("Tab / Shift+Tab", "move between form fields and the table"),
    ("Enter", "add or save the record (form), edit the row (table)"),
    ("Space / ← →", "switch between Income and Expense"),
    ("Esc", "close a notice, cancel an edit, leave the form"),
    ("↑ ↓ / j k", "select a row"),
    ("e", "edit the selected row"),
    ("d / Delete", "delete the selected row"),
    ("f / Ctrl+F", "cycle filter: All, Income, Expense"),
    ("n", "new record"),
    ("?", "toggle this help (table only)"),
    ("q / Ctrl+C", "quit"),
];

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    if !state.help {
        return;
    }

    let theme = Theme::default();
    let popup = centered_rect(70, 60, area);

    let lines = BINDINGS
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(format!("{key:<18}"), Style::default().fg(theme.accent)),
                Span::raw(*action),
            ])
        })
        .collect::<Vec<_>>();

    let block = Block::default()
        .title(" Keybinds ")
        .title_bottom(Line::from(vec![
            Span::styled(" Esc", Style::default().fg(theme.accent)),
            Span::styled(" close ", Style::default().fg(theme.dim)),
        ]))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.accent));

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
