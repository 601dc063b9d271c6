use ledger::{Ledger, Record, RecordFilter, RecordId};

/// Table view over the ledger: active filter and selected row.
///
/// `selected` is a position in the *visible* rows. It is only ever turned into
/// a [`RecordId`] through the same filtered view, so edit and delete hit the
/// record on screen whatever the filter.
#[derive(Debug, Default)]
pub struct RecordsState {
    pub filter: RecordFilter,
    pub selected: usize,
}

impl RecordsState {
    pub fn new(filter: RecordFilter) -> Self {
        Self {
            filter,
            selected: 0,
        }
    }

    pub fn visible<'a>(&self, ledger: &'a Ledger) -> Vec<&'a Record> {
        ledger.filtered(self.filter).collect()
    }

    pub fn selected_id(&self, ledger: &Ledger) -> Option<RecordId> {
        ledger
            .filtered(self.filter)
            .nth(self.selected)
            .map(|record| record.id)
    }

    /// Moves the selection onto `id` if it is visible.
    pub fn select_id(&mut self, ledger: &Ledger, id: RecordId) {
        if let Some(row) = ledger.filtered(self.filter).position(|record| record.id == id) {
            self.selected = row;
        }
    }

    pub fn select_next(&mut self, ledger: &Ledger) {
        let len = ledger.filtered(self.filter).count();
        if len == 0 {
            return;
        }
        self.selected = (self.selected + 1).min(len - 1);
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn cycle_filter(&mut self, ledger: &Ledger) {
        self.filter = self.filter.next();
        self.selected = 0;
        self.clamp(ledger);
    }

    /// Keeps the selection inside the visible rows after the view changed.
    pub fn clamp(&mut self, ledger: &Ledger) {
        let len = ledger.filtered(self.filter).count();
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}
