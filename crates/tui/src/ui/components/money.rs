use ledger::MoneyCents;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

use crate::ui::theme::Theme;

/// Semantic color for an amount: positive green, negative red, zero neutral.
pub fn amount_color(amount: MoneyCents, theme: &Theme) -> Color {
    match amount.cents() {
        c if c > 0 => theme.positive,
        c if c < 0 => theme.negative,
        _ => theme.text,
    }
}

/// A currency-formatted amount in the given color.
#[must_use]
pub fn styled_amount(amount: MoneyCents, color: Color) -> Span<'static> {
    Span::styled(amount.to_currency_string(), Style::default().fg(color))
}

/// Bold variant for totals; colored by the amount's own sign.
#[must_use]
pub fn styled_amount_bold(amount: MoneyCents, theme: &Theme) -> Span<'static> {
    Span::styled(
        amount.to_currency_string(),
        Style::default()
            .fg(amount_color(amount, theme))
            .add_modifier(Modifier::BOLD),
    )
}
