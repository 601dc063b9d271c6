use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState},
};

use ledger::RecordKind;

use crate::{
    app::{AppState, Focus},
    ui::{
        components::{card::Card, money::styled_amount},
        theme::Theme,
    },
};

const EMPTY_MESSAGE: &str = "Add your records using the form above!";

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();
    let title = format!("Records · {}", state.records.filter);
    let focused = state.focus == Focus::Table;
    let card = Card::new(&title, &theme).focused(focused);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let visible = state.records.visible(&state.ledger);
    if visible.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                EMPTY_MESSAGE,
                Style::default().fg(theme.dim),
            )))
            .alignment(Alignment::Center),
            inner,
        );
        return;
    }

    let editing = state.form.editing;
    let rows = visible
        .iter()
        .map(|record| {
            let color = match record.kind {
                RecordKind::Income => theme.positive,
                RecordKind::Expense => theme.negative,
            };
            let mut name = record.name.clone();
            if editing == Some(record.id) {
                name.push_str(" ✎");
            }
            Row::new(vec![
                Cell::from(name),
                Cell::from(record.kind.label()),
                Cell::from(styled_amount(record.value, color)),
                Cell::from(record.display_date()),
            ])
        })
        .collect::<Vec<_>>();

    let header = Row::new(vec!["Name", "Type", "Value", "Date"]).style(
        Style::default()
            .fg(theme.text_muted)
            .add_modifier(Modifier::BOLD),
    );

    let widths = [
        Constraint::Min(22),
        Constraint::Length(9),
        Constraint::Length(16),
        Constraint::Length(12),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .row_highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");

    let mut table_state = TableState::default();
    if focused {
        table_state.select(Some(state.records.selected));
    }
    frame.render_stateful_widget(table, inner, &mut table_state);
}
