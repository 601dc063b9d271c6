//! Persistence for the record sequence.
//!
//! A [`LedgerStore`] holds the whole sequence in one slot: [`load`] reads it
//! once at startup and [`save`] overwrites it after every mutation. The
//! [`Ledger`](crate::Ledger) never touches storage any other way, so the
//! backend can change without touching the editing logic.
//!
//! [`load`]: LedgerStore::load
//! [`save`]: LedgerStore::save

use std::{
    ffi::OsString,
    fs,
    io::ErrorKind,
    path::PathBuf,
    sync::{Arc, Mutex, MutexGuard},
};

use crate::{LedgerError, Record, codec};

pub trait LedgerStore {
    /// Reads the stored sequence. An absent or corrupt slot yields an empty
    /// sequence.
    fn load(&self) -> Result<Vec<Record>, LedgerError>;

    /// Replaces the stored sequence with `records`.
    fn save(&mut self, records: &[Record]) -> Result<(), LedgerError>;
}

impl<T: LedgerStore + ?Sized> LedgerStore for Box<T> {
    fn load(&self) -> Result<Vec<Record>, LedgerError> {
        (**self).load()
    }

    fn save(&mut self, records: &[Record]) -> Result<(), LedgerError> {
        (**self).save(records)
    }
}

/// Records stored as a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn sibling(&self, suffix: &str) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(suffix);
        PathBuf::from(name)
    }

    /// Moves an unreadable payload out of the way so the next save cannot
    /// overwrite it.
    fn quarantine(&self) -> Result<PathBuf, LedgerError> {
        let target = self.sibling(".corrupt");
        fs::rename(&self.path, &target)?;
        Ok(target)
    }

    /// Copies a payload that lost elements on decode next to the ledger,
    /// without replacing an earlier copy.
    fn keep_rejected(&self) -> Result<PathBuf, LedgerError> {
        let mut target = self.sibling(".rejected");
        let mut n = 1;
        while target.exists() {
            target = self.sibling(&format!(".rejected.{n}"));
            n += 1;
        }
        fs::copy(&self.path, &target)?;
        Ok(target)
    }
}

impl LedgerStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Record>, LedgerError> {
        let payload = match fs::read_to_string(&self.path) {
            Ok(payload) => payload,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!("no ledger at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };

        match codec::decode(&payload) {
            Ok(decoded) => {
                tracing::debug!(
                    "loaded {} records from {} ({} dropped)",
                    decoded.records.len(),
                    self.path.display(),
                    decoded.rejected
                );
                if decoded.rejected > 0 {
                    let kept = self.keep_rejected()?;
                    tracing::warn!(
                        "{} stored records could not be read, original payload kept at {}",
                        decoded.rejected,
                        kept.display()
                    );
                }
                Ok(decoded.records)
            }
            Err(err) => {
                let moved = self.quarantine()?;
                tracing::error!(
                    "ledger at {} is unreadable ({err}), moved to {} and starting empty",
                    self.path.display(),
                    moved.display()
                );
                Ok(Vec::new())
            }
        }
    }

    fn save(&mut self, records: &[Record]) -> Result<(), LedgerError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let payload = codec::encode(records)?;
        let tmp = self.sibling(".tmp");
        fs::write(&tmp, payload)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!("saved {} records to {}", records.len(), self.path.display());
        Ok(())
    }
}

/// Records stored as JSON text in a shared in-memory slot.
///
/// Clones share the slot, so a test can keep one handle and hand the other to
/// a [`Ledger`](crate::Ledger).
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose slot already holds `payload`.
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(payload.into()))),
        }
    }

    /// The raw text currently in the slot.
    pub fn payload(&self) -> Result<Option<String>, LedgerError> {
        Ok(self.lock()?.clone())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Option<String>>, LedgerError> {
        self.slot
            .lock()
            .map_err(|_| LedgerError::Storage("memory slot poisoned".to_string()))
    }
}

impl LedgerStore for MemoryStore {
    fn load(&self) -> Result<Vec<Record>, LedgerError> {
        let slot = self.lock()?;
        let Some(payload) = slot.as_deref() else {
            return Ok(Vec::new());
        };

        match codec::decode(payload) {
            Ok(decoded) => Ok(decoded.records),
            Err(err) => {
                tracing::error!("memory ledger is unreadable ({err}), starting empty");
                Ok(Vec::new())
            }
        }
    }

    fn save(&mut self, records: &[Record]) -> Result<(), LedgerError> {
        let payload = codec::encode(records)?;
        *self.lock()? = Some(payload);
        Ok(())
    }
}
