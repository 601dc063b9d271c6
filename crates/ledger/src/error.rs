//! The module contains the errors the ledger can throw.
//!
//! The errors are:
//!
//! - [`Incomplete`] thrown when a [`Draft`] is submitted with blank fields.
//! - [`RecordNotFound`] thrown when an edit or delete addresses a missing record.
//! - [`InvalidName`], [`InvalidAmount`], [`InvalidDate`] thrown when a field
//!   does not parse.
//!
//!  [`Incomplete`]: LedgerError::Incomplete
//!  [`RecordNotFound`]: LedgerError::RecordNotFound
//!  [`InvalidName`]: LedgerError::InvalidName
//!  [`InvalidAmount`]: LedgerError::InvalidAmount
//!  [`InvalidDate`]: LedgerError::InvalidDate
//!  [`Draft`]: super::draft::Draft
use thiserror::Error;

use crate::{DraftField, RecordId};

/// Ledger custom errors.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Incomplete form: {}", field_list(.0))]
    Incomplete(Vec<DraftField>),
    #[error("Invalid name: {0}")]
    InvalidName(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("\"{0}\" record not found!")]
    RecordNotFound(RecordId),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl PartialEq for LedgerError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Incomplete(a), Self::Incomplete(b)) => a == b,
            (Self::InvalidName(a), Self::InvalidName(b)) => a == b,
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            (Self::InvalidDate(a), Self::InvalidDate(b)) => a == b,
            (Self::RecordNotFound(a), Self::RecordNotFound(b)) => a == b,
            (Self::Storage(a), Self::Storage(b)) => a == b,
            (Self::Io(a), Self::Io(b)) => a.kind() == b.kind(),
            (Self::Json(a), Self::Json(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}

fn field_list(fields: &[DraftField]) -> String {
    fields
        .iter()
        .map(|field| field.label())
        .collect::<Vec<_>>()
        .join(", ")
}
