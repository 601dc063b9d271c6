//! In-progress form state for creating or editing a record.

use chrono::NaiveDate;

use crate::{
    LedgerError, MoneyCents, Record, RecordInput, RecordKind,
    record::{INPUT_DATE_FORMAT, MAX_NAME_LEN, parse_date, validate_name},
};

/// A text field of the record form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DraftField {
    Name,
    Kind,
    Value,
    Date,
}

impl DraftField {
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Kind => "type",
            Self::Value => "value",
            Self::Date => "date",
        }
    }
}

/// Raw form input. Nothing here is validated until [`Draft::validate`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub kind: RecordKind,
    pub value: String,
    pub date: String,
}

impl Draft {
    /// An empty draft: blank text, `Income` selected, date set to `today`.
    #[must_use]
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            name: String::new(),
            kind: RecordKind::Income,
            value: String::new(),
            date: today.format(INPUT_DATE_FORMAT).to_string(),
        }
    }

    /// Value copy of a stored record, ready to be edited.
    #[must_use]
    pub fn from_record(record: &Record) -> Self {
        Self {
            name: record.name.clone(),
            kind: record.kind,
            value: record.value.to_string(),
            date: record.date.format(INPUT_DATE_FORMAT).to_string(),
        }
    }

    /// Required text fields that are blank after trimming, in form order.
    pub fn blank_fields(&self) -> Vec<DraftField> {
        [
            (DraftField::Name, &self.name),
            (DraftField::Value, &self.value),
            (DraftField::Date, &self.date),
        ]
        .into_iter()
        .filter(|(_, text)| text.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    /// Appends a character to the name, ignoring input past the length limit.
    pub fn push_name_char(&mut self, ch: char) {
        if self.name.chars().count() < MAX_NAME_LEN {
            self.name.push(ch);
        }
    }

    /// Checks completeness first, then parses every field.
    pub fn validate(&self) -> Result<RecordInput, LedgerError> {
        let blank = self.blank_fields();
        if !blank.is_empty() {
            return Err(LedgerError::Incomplete(blank));
        }

        let name = validate_name(&self.name)?;
        let value: MoneyCents = self.value.parse()?;
        let date = parse_date(&self.date)?;

        Ok(RecordInput {
            name,
            kind: self.kind,
            value,
            date,
        })
    }
}
