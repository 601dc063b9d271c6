//! JSON payload stored in the ledger slot.
//!
//! The slot holds a single array of objects:
//!
//! ```json
//! [{ "id": "…", "name": "Coffee", "type": "expense", "value": "4.50", "date": "2024-01-01" }]
//! ```
//!
//! `value` and `date` are written as text. Reading is lenient so payloads
//! written by older versions still load: `type` accepts the `entrada`/`saída`
//! labels, `value` may be a JSON number, and a missing `id` gets a fresh one.
//! Elements that still fail validation are dropped one by one.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    LedgerError, MoneyCents, Record, RecordId, RecordKind,
    record::{INPUT_DATE_FORMAT, parse_date, validate_name},
};

#[derive(Serialize)]
struct StoredRecord<'a> {
    id: RecordId,
    name: &'a str,
    #[serde(rename = "type")]
    kind: RecordKind,
    value: String,
    date: String,
}

#[derive(Deserialize)]
struct RawRecord {
    #[serde(default)]
    id: Option<Uuid>,
    #[serde(default)]
    name: Option<String>,
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    value: Option<RawValue>,
    #[serde(default)]
    date: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Text(String),
    Number(serde_json::Number),
}

impl RawValue {
    fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(number) => number.to_string(),
        }
    }
}

/// Result of reading a payload: the records that validated, plus how many
/// elements were dropped.
#[derive(Debug, Default)]
pub struct Decoded {
    pub records: Vec<Record>,
    pub rejected: usize,
}

pub fn encode(records: &[Record]) -> Result<String, LedgerError> {
    let stored: Vec<StoredRecord<'_>> = records
        .iter()
        .map(|record| StoredRecord {
            id: record.id,
            name: &record.name,
            kind: record.kind,
            value: record.value.to_string(),
            date: record.date.format(INPUT_DATE_FORMAT).to_string(),
        })
        .collect();
    Ok(serde_json::to_string_pretty(&stored)?)
}

/// Fails only when the payload is not a JSON array at all.
pub fn decode(payload: &str) -> Result<Decoded, LedgerError> {
    let elements: Vec<serde_json::Value> = serde_json::from_str(payload)?;
    let mut decoded = Decoded::default();
    let mut seen = HashSet::new();

    for (index, element) in elements.into_iter().enumerate() {
        match decode_element(element) {
            Ok(mut record) => {
                if !seen.insert(record.id) {
                    tracing::warn!("record #{index} repeats id {}, assigning a new one", record.id);
                    record.id = RecordId::new();
                    seen.insert(record.id);
                }
                decoded.records.push(record);
            }
            Err(err) => {
                tracing::warn!("dropping stored record #{index}: {err}");
                decoded.rejected += 1;
            }
        }
    }

    Ok(decoded)
}

fn decode_element(element: serde_json::Value) -> Result<Record, LedgerError> {
    let raw: RawRecord = serde_json::from_value(element)?;
    let missing = |field: &str| LedgerError::Storage(format!("missing field `{field}`"));

    let name = validate_name(raw.name.as_deref().ok_or_else(|| missing("name"))?)?;
    let kind = RecordKind::try_from(raw.kind.as_deref().ok_or_else(|| missing("type"))?)?;
    let value: MoneyCents = raw.value.ok_or_else(|| missing("value"))?.into_text().parse()?;
    let date = parse_date(raw.date.as_deref().ok_or_else(|| missing("date"))?)?;

    Ok(Record {
        id: raw.id.map(RecordId::from_uuid).unwrap_or_default(),
        name,
        kind,
        value,
        date,
    })
}
