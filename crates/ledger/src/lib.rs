//! Personal finance ledger: records, totals and their persistence.
//!
//! [`Ledger`] owns the ordered record sequence and mirrors it to a
//! [`LedgerStore`] on every mutation. The new sequence is saved first and only
//! then replaces the in-memory one, so after any call the two are equal: a
//! failed save leaves both untouched.

pub use draft::{Draft, DraftField};
pub use error::LedgerError;
pub use filter::RecordFilter;
pub use money::{CURRENCY_SYMBOL, MoneyCents};
pub use record::{MAX_NAME_LEN, Record, RecordId, RecordInput, RecordKind};
pub use store::{JsonFileStore, LedgerStore, MemoryStore};
pub use totals::Totals;

pub mod codec;
mod draft;
mod error;
mod filter;
mod money;
mod record;
mod store;
mod totals;

type ResultLedger<T> = Result<T, LedgerError>;

pub struct Ledger {
    records: Vec<Record>,
    store: Box<dyn LedgerStore>,
}

impl Ledger {
    /// Rehydrates the sequence from `store`.
    pub fn open(store: impl LedgerStore + 'static) -> ResultLedger<Self> {
        let records = store.load()?;
        tracing::info!("ledger opened with {} records", records.len());
        Ok(Self {
            records,
            store: Box::new(store),
        })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Current index of `id` in the unfiltered sequence.
    pub fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|record| record.id == id)
    }

    /// Records matching `filter`, in sequence order.
    pub fn filtered(&self, filter: RecordFilter) -> impl Iterator<Item = &Record> + '_ {
        self.records
            .iter()
            .filter(move |record| filter.matches(record))
    }

    pub fn totals(&self) -> Totals {
        Totals::from_records(&self.records)
    }

    /// Appends a new record at the end of the sequence.
    pub fn add(&mut self, input: RecordInput) -> ResultLedger<RecordId> {
        let id = RecordId::new();
        let mut next = self.records.clone();
        next.push(Record::from_input(id, input));
        self.commit(next)?;
        tracing::debug!("added record {id}");
        Ok(id)
    }

    /// Replaces the record `id` in place; its id and position are kept.
    pub fn update(&mut self, id: RecordId, input: RecordInput) -> ResultLedger<()> {
        let index = self.position(id).ok_or(LedgerError::RecordNotFound(id))?;
        let mut next = self.records.clone();
        next[index] = Record::from_input(id, input);
        self.commit(next)?;
        tracing::debug!("updated record {id} at {index}");
        Ok(())
    }

    /// Removes the record `id`; later records shift down by one.
    pub fn delete(&mut self, id: RecordId) -> ResultLedger<Record> {
        let index = self.position(id).ok_or(LedgerError::RecordNotFound(id))?;
        let mut next = self.records.clone();
        let removed = next.remove(index);
        self.commit(next)?;
        tracing::debug!("deleted record {id} from {index}");
        Ok(removed)
    }

    fn commit(&mut self, next: Vec<Record>) -> ResultLedger<()> {
        if let Err(err) = self.store.save(&next) {
            tracing::error!("failed to save ledger: {err}");
            return Err(err);
        }
        self.records = next;
        Ok(())
    }
}

impl std::fmt::Debug for Ledger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ledger")
            .field("records", &self.records)
            .finish_non_exhaustive()
    }
}
