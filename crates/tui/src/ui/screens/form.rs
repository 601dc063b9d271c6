use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use ledger::{DraftField, MAX_NAME_LEN, RecordKind};

use crate::{
    app::{AppState, Focus},
    ui::{components::card::Card, theme::Theme},
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();
    let form = &state.form;
    let title = if form.editing.is_some() {
        "Edit record"
    } else {
        "New record"
    };
    let focused_field = match state.focus {
        Focus::Form(field) => Some(field),
        Focus::Table => None,
    };

    let card = Card::new(title, &theme).focused(focused_field.is_some());
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(MAX_NAME_LEN as u16 + 8),
            Constraint::Length(20),
            Constraint::Length(18),
            Constraint::Length(18),
            Constraint::Min(0),
        ])
        .split(inner);

    let draft = &form.draft;
    render_input(
        frame,
        columns[0],
        "Name",
        &draft.name,
        focused_field == Some(DraftField::Name),
        &theme,
    );
    render_kind(
        frame,
        columns[1],
        draft.kind,
        focused_field == Some(DraftField::Kind),
        &theme,
    );
    render_input(
        frame,
        columns[2],
        "Value",
        &draft.value,
        focused_field == Some(DraftField::Value),
        &theme,
    );
    render_input(
        frame,
        columns[3],
        "Date",
        &draft.date,
        focused_field == Some(DraftField::Date),
        &theme,
    );

    let action = if form.editing.is_some() {
        "[ Save ]"
    } else {
        "[ Add ]"
    };
    let action_style = if form.is_blocked() {
        Style::default().fg(theme.dim)
    } else {
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD)
    };
    frame.render_widget(
        Paragraph::new(vec![Line::from(""), Line::from(Span::styled(action, action_style))]),
        columns[4],
    );
}

/// Label on the first line, value (with a cursor when focused) on the second.
fn render_input(
    frame: &mut Frame<'_>,
    area: Rect,
    label: &str,
    value: &str,
    focused: bool,
    theme: &Theme,
) {
    let cursor = if focused { "│" } else { "" };
    let style = if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.text_muted)
    };

    let lines = vec![
        Line::from(Span::styled(label.to_string(), Style::default().fg(theme.dim))),
        Line::from(Span::styled(format!("{value}{cursor}"), style)),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_kind(frame: &mut Frame<'_>, area: Rect, kind: RecordKind, focused: bool, theme: &Theme) {
    let option = |candidate: RecordKind| {
        let selected = candidate == kind;
        let style = match (selected, focused) {
            (true, true) => Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
            (true, false) => Style::default().fg(theme.text),
            (false, _) => Style::default().fg(theme.dim),
        };
        let marker = if selected { "●" } else { "○" };
        Span::styled(format!("{marker} {}", candidate.label()), style)
    };

    let lines = vec![
        Line::from(Span::styled("Type", Style::default().fg(theme.dim))),
        Line::from(vec![
            option(RecordKind::Income),
            Span::raw(" "),
            option(RecordKind::Expense),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}
