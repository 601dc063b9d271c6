//! Ledger records.
//!
//! A [`Record`] is one entry of the ledger: a named income or expense with an
//! amount and a calendar date. Records are identified by a stable
//! [`RecordId`] assigned when they are created, so edits and deletes never
//! depend on where a record happens to be displayed.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::{LedgerError, MoneyCents};

/// Maximum record name length, in characters.
pub const MAX_NAME_LEN: usize = 20;

/// Date format used for input and storage (`2024-01-05`).
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Date format used in the table (`05/01/2024`).
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    #[default]
    Income,
    Expense,
}

impl RecordKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }

    /// The other kind; the form's two-valued selector flips between them.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Income => Self::Expense,
            Self::Expense => Self::Income,
        }
    }
}

impl TryFrom<&str> for RecordKind {
    type Error = LedgerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "income" | "entrada" => Ok(Self::Income),
            "expense" | "saída" | "saida" => Ok(Self::Expense),
            other => Err(LedgerError::Storage(format!("unknown record type: {other}"))),
        }
    }
}

/// Validated field values for a new or replaced record.
///
/// Produced by [`Draft::validate`](crate::Draft::validate); the ledger assigns
/// or keeps the [`RecordId`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordInput {
    pub name: String,
    pub kind: RecordKind,
    pub value: MoneyCents,
    pub date: NaiveDate,
}

impl RecordInput {
    /// Builds an input, trimming the name and enforcing its length.
    pub fn new(
        name: &str,
        kind: RecordKind,
        value: MoneyCents,
        date: NaiveDate,
    ) -> Result<Self, LedgerError> {
        Ok(Self {
            name: validate_name(name)?,
            kind,
            value,
            date,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub id: RecordId,
    pub name: String,
    pub kind: RecordKind,
    pub value: MoneyCents,
    pub date: NaiveDate,
}

impl Record {
    pub(crate) fn from_input(id: RecordId, input: RecordInput) -> Self {
        Self {
            id,
            name: input.name,
            kind: input.kind,
            value: input.value,
            date: input.date,
        }
    }

    pub fn display_date(&self) -> String {
        self.date.format(DISPLAY_DATE_FORMAT).to_string()
    }
}

pub(crate) fn validate_name(name: &str) -> Result<String, LedgerError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::InvalidName("name is empty".to_string()));
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(LedgerError::InvalidName(format!(
            "name is longer than {MAX_NAME_LEN} characters"
        )));
    }
    Ok(trimmed.to_string())
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, LedgerError> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, INPUT_DATE_FORMAT).map_err(|_| {
        LedgerError::InvalidDate(format!("\"{trimmed}\" is not a YYYY-MM-DD date"))
    })
}
