pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::Paragraph,
};

use ledger::DraftField;

use crate::app::{AppState, Focus};

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};
pub use theme::Theme;

pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let area = frame.area();
    let theme = Theme::default();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Totals
            Constraint::Length(4), // Form
            Constraint::Min(3),    // Records
            Constraint::Length(1), // Bottom bar
        ])
        .split(area);

    screens::totals::render(frame, layout[0], state);
    screens::form::render(frame, layout[1], state);
    screens::records::render(frame, layout[2], state);
    render_bottom_bar(frame, layout[3], state, &theme);

    components::help_overlay::render(frame, area, state);
    components::notice::render(frame, area, state.form.notice());
    components::toast::render(frame, area, state.toast.as_ref());
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    use components::hints;

    let table_focused = state.focus == Focus::Table;
    let context = if state.form.is_blocked() {
        hints::notice_hints()
    } else {
        match state.focus {
            Focus::Table => hints::table_hints(),
            Focus::Form(DraftField::Kind) => {
                let mut list = hints::kind_hints();
                list.extend(hints::form_hints(state.form.editing.is_some()));
                list
            }
            Focus::Form(_) => hints::form_hints(state.form.editing.is_some()),
        }
    };

    let mut parts = hints::hints_to_spans(&context, theme);
    parts.push(hints::hint_separator(theme));
    parts.extend(hints::hints_to_spans(
        &hints::global_hints(table_focused),
        theme,
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
