use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::{
    app::AppState,
    ui::{
        components::{
            card::StatCard,
            money::{styled_amount, styled_amount_bold},
        },
        theme::Theme,
    },
};

/// Income, expenses and net side by side.
pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let totals = state.totals;
    StatCard::new("Income", styled_amount(totals.income, theme.positive), &theme)
        .render(frame, columns[0]);
    StatCard::new("Expenses", styled_amount(totals.expense, theme.negative), &theme)
        .render(frame, columns[1]);
    StatCard::new("Net", styled_amount_bold(totals.net, &theme), &theme).render(frame, columns[2]);
}
