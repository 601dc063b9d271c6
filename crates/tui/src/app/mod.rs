mod events;
pub mod form;
pub mod records;

use std::time::{Duration, Instant};

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use crossterm::event::{Event, KeyEvent, KeyEventKind};
use ledger::{DraftField, Ledger, LedgerError, RecordFilter, Totals};

use crate::{
    error::{AppError, Result},
    ui::{
        self,
        keymap::{AppAction, map_key},
    },
};

use form::FormState;
use records::RecordsState;

/// How long a confirmation toast stays on screen.
pub const TOAST_TIMEOUT: Duration = Duration::from_secs(2);

pub const INCOMPLETE_MESSAGE: &str = "Please fill in all fields!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Form(DraftField),
    Table,
}

impl Focus {
    /// Name → Type → Value → Date → Table → Name.
    pub fn next(self) -> Self {
        match self {
            Self::Form(DraftField::Name) => Self::Form(DraftField::Kind),
            Self::Form(DraftField::Kind) => Self::Form(DraftField::Value),
            Self::Form(DraftField::Value) => Self::Form(DraftField::Date),
            Self::Form(DraftField::Date) => Self::Table,
            Self::Table => Self::Form(DraftField::Name),
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Form(DraftField::Name) => Self::Table,
            Self::Form(DraftField::Kind) => Self::Form(DraftField::Name),
            Self::Form(DraftField::Value) => Self::Form(DraftField::Kind),
            Self::Form(DraftField::Date) => Self::Form(DraftField::Value),
            Self::Table => Self::Form(DraftField::Date),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct ToastState {
    pub message: String,
    pub level: ToastLevel,
    pub expires_at: Instant,
}

#[derive(Debug)]
pub struct AppState {
    pub ledger: Ledger,
    /// Re-derived after every mutation of `ledger`.
    pub totals: Totals,
    pub form: FormState,
    pub records: RecordsState,
    pub focus: Focus,
    pub help: bool,
    pub toast: Option<ToastState>,
    timezone: Tz,
}

impl AppState {
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.timezone).date_naive()
    }

    /// Earliest moment something on screen has to change by itself.
    pub fn next_deadline(&self) -> Option<Instant> {
        let notice = self.form.pending_dismiss().map(|d| d.deadline);
        let toast = self.toast.as_ref().map(|t| t.expires_at);
        match (notice, toast) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn tick(&mut self, now: Instant) {
        if self.form.expire_due(now) {
            tracing::debug!("notice dismissed by timeout");
        }
        if self.toast.as_ref().is_some_and(|t| t.expires_at <= now) {
            self.toast = None;
        }
    }

    fn show_toast(&mut self, message: impl Into<String>, level: ToastLevel, now: Instant) {
        self.toast = Some(ToastState {
            message: message.into(),
            level,
            expires_at: now + TOAST_TIMEOUT,
        });
    }

    fn after_mutation(&mut self) {
        self.totals = self.ledger.totals();
        self.records.clamp(&self.ledger);
    }
}

pub struct App {
    pub state: AppState,
    should_quit: bool,
}

impl App {
    pub fn new(ledger: Ledger, timezone: Tz, filter: RecordFilter) -> Self {
        let today = Utc::now().with_timezone(&timezone).date_naive();
        let state = AppState {
            totals: ledger.totals(),
            ledger,
            form: FormState::new(today),
            records: RecordsState::new(filter),
            focus: Focus::Form(DraftField::Name),
            help: false,
            toast: None,
            timezone,
        };

        Self {
            state,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        let result = self.event_loop(&mut terminal).await;
        self.state.form.dismiss();
        ui::restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let mut events = events::spawn_reader();

        while !self.should_quit() {
            terminal
                .draw(|frame| ui::render(frame, &self.state))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            let deadline = self.state.next_deadline();
            tokio::select! {
                event = events.recv() => match event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        self.handle_key(key, Instant::now());
                    }
                    Some(Ok(_)) => {}
                    Some(Err(err)) => return Err(err.into()),
                    None => break,
                },
                () = events::sleep_until(deadline) => self.state.tick(Instant::now()),
            }
        }

        Ok(())
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        self.state.tick(now);
        self.handle_action(map_key(key), now);
    }

    fn handle_action(&mut self, action: AppAction, now: Instant) {
        if action == AppAction::Quit {
            self.should_quit = true;
            return;
        }

        if self.state.help {
            if matches!(action, AppAction::Cancel | AppAction::Input('?')) {
                self.state.help = false;
            }
            return;
        }

        // A blocked form only listens for the dismissal.
        if self.state.form.is_blocked() {
            if action == AppAction::Cancel {
                self.state.form.dismiss();
            }
            return;
        }

        match action {
            AppAction::Cancel => self.cancel(),
            AppAction::NextField => self.state.focus = self.state.focus.next(),
            AppAction::PrevField => self.state.focus = self.state.focus.prev(),
            AppAction::CycleFilter => self.cycle_filter(now),
            AppAction::Submit => match self.state.focus {
                Focus::Form(_) => self.submit(now),
                Focus::Table => self.begin_edit_selected(),
            },
            AppAction::Backspace => {
                if let Focus::Form(field) = self.state.focus {
                    self.state.form.backspace(field);
                }
            }
            AppAction::Delete => {
                if self.state.focus == Focus::Table {
                    self.delete_selected(now);
                }
            }
            AppAction::Up | AppAction::Down | AppAction::Left | AppAction::Right => {
                self.navigate(action);
            }
            AppAction::Input(ch) => match self.state.focus {
                Focus::Form(field) => self.state.form.input(field, ch),
                Focus::Table => self.table_command(ch, now),
            },
            AppAction::Quit | AppAction::None => {}
        }
    }

    fn navigate(&mut self, action: AppAction) {
        match (self.state.focus, action) {
            (Focus::Table, AppAction::Up) => self.state.records.select_prev(),
            (Focus::Table, AppAction::Down) => self.state.records.select_next(&self.state.ledger),
            (Focus::Form(DraftField::Kind), _) => {
                self.state.form.draft.kind = self.state.form.draft.kind.toggled();
            }
            _ => {}
        }
    }

    fn table_command(&mut self, ch: char, now: Instant) {
        match ch {
            'q' | 'Q' => self.should_quit = true,
            'j' => self.state.records.select_next(&self.state.ledger),
            'k' => self.state.records.select_prev(),
            'e' | 'E' => self.begin_edit_selected(),
            'd' | 'D' => self.delete_selected(now),
            'f' | 'F' => self.cycle_filter(now),
            'n' | 'N' | 'a' | 'A' => {
                if self.state.form.editing.is_some() {
                    let today = self.state.today();
                    self.state.form.reset(today);
                }
                self.state.focus = Focus::Form(DraftField::Name);
            }
            '?' => self.state.help = true,
            _ => {}
        }
    }

    fn cancel(&mut self) {
        if self.state.form.editing.is_some() {
            let today = self.state.today();
            self.state.form.reset(today);
            tracing::debug!("edit cancelled");
        } else if let Focus::Form(_) = self.state.focus {
            self.state.focus = Focus::Table;
        }
    }

    fn cycle_filter(&mut self, now: Instant) {
        self.state.records.cycle_filter(&self.state.ledger);
        let message = format!("Showing: {}", self.state.records.filter);
        self.state.show_toast(message, ToastLevel::Info, now);
    }

    /// Adds the draft as a new record, or replaces the record being edited.
    fn submit(&mut self, now: Instant) {
        let input = match self.state.form.draft.validate() {
            Ok(input) => input,
            Err(err) => {
                tracing::debug!("draft rejected: {err}");
                self.state.form.block(notice_message(&err), now);
                return;
            }
        };

        let result = match self.state.form.editing {
            Some(id) => self
                .state
                .ledger
                .update(id, input)
                .map(|()| (id, "Record updated")),
            None => self.state.ledger.add(input).map(|id| (id, "Record added")),
        };

        match result {
            Ok((id, message)) => {
                let today = self.state.today();
                self.state.form.reset(today);
                self.state.after_mutation();
                self.state.records.select_id(&self.state.ledger, id);
                self.state.focus = Focus::Form(DraftField::Name);
                self.state.show_toast(message, ToastLevel::Success, now);
            }
            Err(err) => {
                self.state.form.block(notice_message(&err), now);
            }
        }
    }

    fn begin_edit_selected(&mut self) {
        let Some(id) = self.state.records.selected_id(&self.state.ledger) else {
            return;
        };
        if let Some(record) = self.state.ledger.get(id) {
            self.state.form.begin_edit(record);
            self.state.focus = Focus::Form(DraftField::Name);
        }
    }

    fn delete_selected(&mut self, now: Instant) {
        let Some(id) = self.state.records.selected_id(&self.state.ledger) else {
            return;
        };

        match self.state.ledger.delete(id) {
            Ok(record) => {
                if self.state.form.editing == Some(id) {
                    let today = self.state.today();
                    self.state.form.reset(today);
                }
                self.state.after_mutation();
                self.state.show_toast(
                    format!("Deleted \"{}\"", record.name),
                    ToastLevel::Success,
                    now,
                );
            }
            Err(err) => self.state.show_toast(err.to_string(), ToastLevel::Error, now),
        }
    }
}

fn notice_message(err: &LedgerError) -> String {
    match err {
        LedgerError::Incomplete(_) => INCOMPLETE_MESSAGE.to_string(),
        other => other.to_string(),
    }
}
