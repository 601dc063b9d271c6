use std::{fmt, str::FromStr};

use crate::{LedgerError, Record, RecordKind};

/// Which records the table shows. Never affects which record an edit or a
/// delete addresses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RecordFilter {
    #[default]
    All,
    Only(RecordKind),
}

impl RecordFilter {
    pub fn matches(self, record: &Record) -> bool {
        match self {
            Self::All => true,
            Self::Only(kind) => record.kind == kind,
        }
    }

    /// `All → Income → Expense → All`.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Only(RecordKind::Income),
            Self::Only(RecordKind::Income) => Self::Only(RecordKind::Expense),
            Self::Only(RecordKind::Expense) => Self::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(kind) => kind.label(),
        }
    }
}

impl fmt::Display for RecordFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RecordFilter {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        RecordKind::try_from(trimmed).map(Self::Only)
    }
}
