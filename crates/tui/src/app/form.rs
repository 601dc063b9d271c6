//! Record form: the draft being typed, the edit marker and the blocking notice.
//!
//! The form is either `Idle` (accepting input) or `Blocked` behind a notice
//! after a rejected submission. A blocked form returns to `Idle` when the
//! notice is dismissed, or when its [`ScheduledDismiss`] comes due. Every
//! notice gets its own schedule, so a deadline armed for an older notice can
//! never clear a newer one.

use std::time::{Duration, Instant};

use chrono::NaiveDate;
use ledger::{Draft, DraftField, Record, RecordId};

/// How long a rejected submission blocks the form.
pub const NOTICE_TIMEOUT: Duration = Duration::from_secs(5);

/// Maximum length of the date field (`YYYY-MM-DD`).
const DATE_INPUT_LEN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledDismiss {
    generation: u64,
    pub deadline: Instant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub dismiss: ScheduledDismiss,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Blocked(Notice),
}

#[derive(Debug)]
pub struct FormState {
    pub draft: Draft,
    /// Record being edited; `None` while creating.
    pub editing: Option<RecordId>,
    pub phase: FormPhase,
    generation: u64,
}

impl FormState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            draft: Draft::blank(today),
            editing: None,
            phase: FormPhase::Idle,
            generation: 0,
        }
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self.phase, FormPhase::Blocked(_))
    }

    pub fn notice(&self) -> Option<&Notice> {
        match &self.phase {
            FormPhase::Blocked(notice) => Some(notice),
            FormPhase::Idle => None,
        }
    }

    pub fn pending_dismiss(&self) -> Option<ScheduledDismiss> {
        self.notice().map(|notice| notice.dismiss)
    }

    /// Loads a value copy of `record` and marks it as being edited.
    pub fn begin_edit(&mut self, record: &Record) {
        self.draft = Draft::from_record(record);
        self.editing = Some(record.id);
    }

    /// Blank draft, no edit in progress.
    pub fn reset(&mut self, today: NaiveDate) {
        self.draft = Draft::blank(today);
        self.editing = None;
    }

    /// Blocks the form behind `message`, replacing any notice already shown.
    pub fn block(&mut self, message: impl Into<String>, now: Instant) -> ScheduledDismiss {
        self.generation += 1;
        let dismiss = ScheduledDismiss {
            generation: self.generation,
            deadline: now + NOTICE_TIMEOUT,
        };
        self.phase = FormPhase::Blocked(Notice {
            message: message.into(),
            dismiss,
        });
        dismiss
    }

    /// Cancels the pending dismissal and unblocks immediately.
    pub fn dismiss(&mut self) {
        self.phase = FormPhase::Idle;
    }

    /// Applies `schedule` only if it still belongs to the notice on screen.
    pub fn expire(&mut self, schedule: ScheduledDismiss) -> bool {
        if self.pending_dismiss() == Some(schedule) {
            self.phase = FormPhase::Idle;
            return true;
        }
        false
    }

    /// Expires the current notice if its deadline has passed.
    pub fn expire_due(&mut self, now: Instant) -> bool {
        match self.pending_dismiss() {
            Some(schedule) if schedule.deadline <= now => self.expire(schedule),
            _ => false,
        }
    }

    /// Types `ch` into `field`, keeping each field to the characters it
    /// accepts.
    pub fn input(&mut self, field: DraftField, ch: char) {
        match field {
            DraftField::Name => self.draft.push_name_char(ch),
            DraftField::Kind => {
                if ch == ' ' {
                    self.draft.kind = self.draft.kind.toggled();
                }
            }
            DraftField::Value => {
                if ch.is_ascii_digit() || matches!(ch, '.' | ',' | '-' | '+') {
                    self.draft.value.push(ch);
                }
            }
            DraftField::Date => {
                if (ch.is_ascii_digit() || ch == '-')
                    && self.draft.date.chars().count() < DATE_INPUT_LEN
                {
                    self.draft.date.push(ch);
                }
            }
        }
    }

    pub fn backspace(&mut self, field: DraftField) {
        match field {
            DraftField::Name => {
                self.draft.name.pop();
            }
            DraftField::Kind => {}
            DraftField::Value => {
                self.draft.value.pop();
            }
            DraftField::Date => {
                self.draft.date.pop();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use ledger::{MoneyCents, RecordKind};

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
    }

    #[test]
    fn notice_expires_after_timeout() {
        let mut form = FormState::new(today());
        let start = Instant::now();
        form.block("Please fill in all fields!", start);

        assert!(form.is_blocked());
        assert!(!form.expire_due(start + Duration::from_secs(4)));
        assert!(form.is_blocked());
        assert!(form.expire_due(start + NOTICE_TIMEOUT));
        assert_eq!(form.phase, FormPhase::Idle);
    }

    #[test]
    fn stale_schedule_does_not_clear_newer_notice() {
        let mut form = FormState::new(today());
        let start = Instant::now();
        let first = form.block("first", start);
        form.dismiss();
        let second = form.block("second", start + Duration::from_secs(3));

        assert!(!form.expire(first));
        assert_eq!(form.notice().map(|n| n.message.as_str()), Some("second"));
        assert!(!form.expire_due(first.deadline));
        assert!(form.expire(second));
        assert!(!form.is_blocked());
    }

    #[test]
    fn dismiss_cancels_pending_schedule() {
        let mut form = FormState::new(today());
        let schedule = form.block("oops", Instant::now());
        form.dismiss();

        assert_eq!(form.pending_dismiss(), None);
        assert!(!form.expire(schedule));
    }

    #[test]
    fn edit_then_reset() {
        let mut form = FormState::new(today());
        let record = Record {
            id: RecordId::new(),
            name: "Coffee".to_string(),
            kind: RecordKind::Expense,
            value: MoneyCents::new(450),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };

        form.begin_edit(&record);
        assert_eq!(form.editing, Some(record.id));
        assert_eq!(form.draft.name, "Coffee");

        form.draft.name.push('!');
        assert_eq!(record.name, "Coffee");

        form.reset(today());
        assert_eq!(form.editing, None);
        assert_eq!(form.draft, Draft::blank(today()));
    }

    #[test]
    fn fields_accept_only_their_characters() {
        let mut form = FormState::new(today());
        form.draft.date.clear();
        for ch in "1a2.5x".chars() {
            form.input(DraftField::Value, ch);
        }
        for ch in "2024-01-05-99".chars() {
            form.input(DraftField::Date, ch);
        }
        form.input(DraftField::Kind, ' ');

        assert_eq!(form.draft.value, "12.5");
        assert_eq!(form.draft.date, "2024-01-05");
        assert_eq!(form.draft.kind, RecordKind::Expense);

        form.backspace(DraftField::Value);
        assert_eq!(form.draft.value, "12.");
    }
}
