use ratatui::{style::Style, text::Span};

use crate::ui::theme::Theme;

/// A keyboard hint consisting of a key and its action.
#[derive(Debug, Clone)]
pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
}

impl KeyHint {
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

/// Converts a list of key hints into styled spans for rendering.
pub fn hints_to_spans(hints: &[KeyHint], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(hint.key, Style::default().fg(theme.accent)));
        spans.push(Span::raw(format!(" {}", hint.action)));
    }

    spans
}

pub fn hint_separator(theme: &Theme) -> Span<'static> {
    Span::styled("  │  ", Style::default().fg(theme.border))
}

pub fn form_hints(editing: bool) -> Vec<KeyHint> {
    vec![
        KeyHint::new("Tab", "next"),
        KeyHint::new("Enter", if editing { "save" } else { "add" }),
        KeyHint::new("Esc", if editing { "cancel edit" } else { "table" }),
    ]
}

pub fn kind_hints() -> Vec<KeyHint> {
    vec![KeyHint::new("Space", "switch type")]
}

pub fn table_hints() -> Vec<KeyHint> {
    vec![
        KeyHint::new("↑↓", "select"),
        KeyHint::new("e", "edit"),
        KeyHint::new("d", "delete"),
        KeyHint::new("f", "filter"),
        KeyHint::new("n", "new"),
        KeyHint::new("?", "help"),
    ]
}

pub fn notice_hints() -> Vec<KeyHint> {
    vec![KeyHint::new("Esc", "close")]
}

pub fn global_hints(table_focused: bool) -> Vec<KeyHint> {
    let mut hints = vec![KeyHint::new("Ctrl+F", "filter")];
    if table_focused {
        hints.push(KeyHint::new("q", "quit"));
    } else {
        hints.push(KeyHint::new("Ctrl+C", "quit"));
    }
    hints
}
