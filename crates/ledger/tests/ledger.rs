use chrono::NaiveDate;

use ledger::{
    Draft, DraftField, JsonFileStore, Ledger, LedgerError, LedgerStore, MemoryStore, MoneyCents,
    Record, RecordFilter, RecordId, RecordInput, RecordKind,
};
use uuid::Uuid;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn input(name: &str, kind: RecordKind, value: &str, on: NaiveDate) -> RecordInput {
    RecordInput::new(name, kind, value.parse().unwrap(), on).unwrap()
}

fn ledger_with_memory() -> (Ledger, MemoryStore) {
    let store = MemoryStore::new();
    let ledger = Ledger::open(store.clone()).unwrap();
    (ledger, store)
}

fn stored_records(store: &MemoryStore) -> Vec<Record> {
    store.load().unwrap()
}

fn names(records: &[Record]) -> Vec<&str> {
    records.iter().map(|r| r.name.as_str()).collect()
}

fn file_store_path() -> std::path::PathBuf {
    let root = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../target/test_stores");
    std::fs::create_dir_all(&root).unwrap();
    root.join(format!("ledger_{}.json", Uuid::new_v4()))
}

/// A store whose writes always fail.
struct BrokenStore;

impl LedgerStore for BrokenStore {
    fn load(&self) -> Result<Vec<Record>, LedgerError> {
        Ok(Vec::new())
    }

    fn save(&mut self, _records: &[Record]) -> Result<(), LedgerError> {
        Err(LedgerError::Storage("disk full".to_string()))
    }
}

#[test]
fn add_appends_and_persists() {
    let (mut ledger, store) = ledger_with_memory();

    let coffee = ledger
        .add(input("Coffee", RecordKind::Expense, "4.50", date(2024, 1, 1)))
        .unwrap();
    let salary = ledger
        .add(input("Salary", RecordKind::Income, "2000", date(2024, 1, 5)))
        .unwrap();

    assert_eq!(ledger.len(), 2);
    assert_eq!(ledger.records()[1].id, salary);
    assert_eq!(ledger.position(coffee), Some(0));
    assert_eq!(stored_records(&store), ledger.records());

    let totals = ledger.totals();
    assert_eq!(totals.income.to_currency_string(), "R$ 2000.00");
    assert_eq!(totals.expense.to_currency_string(), "R$ 4.50");
    assert_eq!(totals.net.to_currency_string(), "R$ 1995.50");
}

#[test]
fn update_replaces_only_target() {
    let (mut ledger, store) = ledger_with_memory();
    let a = ledger.add(input("A", RecordKind::Income, "1", date(2024, 1, 1))).unwrap();
    let b = ledger.add(input("B", RecordKind::Expense, "2", date(2024, 1, 2))).unwrap();
    let c = ledger.add(input("C", RecordKind::Income, "3", date(2024, 1, 3))).unwrap();
    let before = ledger.records().to_vec();

    ledger
        .update(b, input("B2", RecordKind::Income, "20", date(2024, 2, 2)))
        .unwrap();

    assert_eq!(ledger.len(), 3);
    assert_eq!(names(ledger.records()), vec!["A", "B2", "C"]);
    assert_eq!(ledger.records()[0], before[0]);
    assert_eq!(ledger.records()[2], before[2]);
    let updated = ledger.get(b).unwrap();
    assert_eq!(updated.kind, RecordKind::Income);
    assert_eq!(updated.value, MoneyCents::new(2000));
    assert_eq!(ledger.position(a), Some(0));
    assert_eq!(ledger.position(c), Some(2));
    assert_eq!(stored_records(&store), ledger.records());
}

#[test]
fn delete_shifts_later_records_down() {
    let (mut ledger, store) = ledger_with_memory();
    let a = ledger.add(input("A", RecordKind::Income, "1", date(2024, 1, 1))).unwrap();
    let b = ledger.add(input("B", RecordKind::Expense, "2", date(2024, 1, 2))).unwrap();
    let c = ledger.add(input("C", RecordKind::Income, "3", date(2024, 1, 3))).unwrap();

    let removed = ledger.delete(a).unwrap();

    assert_eq!(removed.name, "A");
    assert_eq!(names(ledger.records()), vec!["B", "C"]);
    assert_eq!(ledger.position(b), Some(0));
    assert_eq!(ledger.position(c), Some(1));
    assert!(ledger.get(a).is_none());
    assert_eq!(stored_records(&store), ledger.records());
}

#[test]
fn missing_ids_are_rejected_without_side_effects() {
    let (mut ledger, store) = ledger_with_memory();
    ledger.add(input("A", RecordKind::Income, "1", date(2024, 1, 1))).unwrap();
    let ghost = RecordId::new();

    assert_eq!(ledger.delete(ghost), Err(LedgerError::RecordNotFound(ghost)));
    assert_eq!(
        ledger.update(ghost, input("X", RecordKind::Income, "1", date(2024, 1, 1))),
        Err(LedgerError::RecordNotFound(ghost))
    );
    assert_eq!(ledger.len(), 1);
    assert_eq!(stored_records(&store), ledger.records());
}

#[test]
fn filter_keeps_relative_order() {
    let (mut ledger, _store) = ledger_with_memory();
    for (name, kind) in [
        ("i1", RecordKind::Income),
        ("e1", RecordKind::Expense),
        ("i2", RecordKind::Income),
        ("e2", RecordKind::Expense),
        ("i3", RecordKind::Income),
    ] {
        ledger.add(input(name, kind, "1", date(2024, 1, 1))).unwrap();
    }

    let income: Vec<_> = ledger
        .filtered(RecordFilter::Only(RecordKind::Income))
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(income, vec!["i1", "i2", "i3"]);

    let expense: Vec<_> = ledger
        .filtered(RecordFilter::Only(RecordKind::Expense))
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(expense, vec!["e1", "e2"]);

    let all: Vec<_> = ledger.filtered(RecordFilter::All).cloned().collect();
    assert_eq!(all, ledger.records());
}

#[test]
fn failed_save_leaves_memory_unchanged() {
    let mut ledger = Ledger::open(BrokenStore).unwrap();

    let err = ledger
        .add(input("A", RecordKind::Income, "1", date(2024, 1, 1)))
        .unwrap_err();

    assert_eq!(err, LedgerError::Storage("disk full".to_string()));
    assert!(ledger.is_empty());
}

#[test]
fn draft_with_blank_field_never_reaches_the_ledger() {
    let (mut ledger, store) = ledger_with_memory();
    let mut draft = Draft::blank(date(2024, 1, 5));
    draft.name = "Salary".to_string();

    let err = draft.validate().unwrap_err();
    assert_eq!(err, LedgerError::Incomplete(vec![DraftField::Value]));
    assert!(ledger.is_empty());
    assert_eq!(store.payload().unwrap(), None);

    draft.value = "2000".to_string();
    ledger.add(draft.validate().unwrap()).unwrap();
    assert_eq!(ledger.len(), 1);
}

#[test]
fn memory_store_reopens_with_same_records() {
    let (mut ledger, store) = ledger_with_memory();
    ledger.add(input("A", RecordKind::Income, "1.10", date(2024, 1, 1))).unwrap();
    ledger.add(input("B", RecordKind::Expense, "-2", date(2024, 1, 2))).unwrap();

    let reopened = Ledger::open(store).unwrap();
    assert_eq!(reopened.records(), ledger.records());
}

#[test]
fn corrupt_memory_slot_opens_empty() {
    let ledger = Ledger::open(MemoryStore::with_payload("[{oops")).unwrap();
    assert!(ledger.is_empty());
}

#[test]
fn file_store_round_trips_and_starts_empty_when_missing() {
    let path = file_store_path();
    assert!(!path.exists());

    let mut ledger = Ledger::open(JsonFileStore::new(&path)).unwrap();
    assert!(ledger.is_empty());

    let id = ledger
        .add(input("Coffee", RecordKind::Expense, "4.50", date(2024, 1, 1)))
        .unwrap();
    ledger
        .add(input("Salary", RecordKind::Income, "2000", date(2024, 1, 5)))
        .unwrap();
    ledger.delete(id).unwrap();

    let reopened = Ledger::open(JsonFileStore::new(&path)).unwrap();
    assert_eq!(reopened.records(), ledger.records());
    assert_eq!(names(reopened.records()), vec!["Salary"]);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn file_store_moves_corrupt_payload_aside() {
    let path = file_store_path();
    std::fs::write(&path, "definitely not json").unwrap();

    let ledger = Ledger::open(JsonFileStore::new(&path)).unwrap();
    assert!(ledger.is_empty());
    assert!(!path.exists());

    let moved = std::path::PathBuf::from(format!("{}.corrupt", path.display()));
    assert_eq!(
        std::fs::read_to_string(&moved).unwrap(),
        "definitely not json"
    );

    std::fs::remove_file(&moved).unwrap();
}

#[test]
fn file_store_loads_legacy_payload() {
    let path = file_store_path();
    std::fs::write(
        &path,
        r#"[{"name":"Coffee","type":"saída","value":"4.50","date":"2024-01-01"}]"#,
    )
    .unwrap();

    let ledger = Ledger::open(JsonFileStore::new(&path)).unwrap();
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.totals().expense, MoneyCents::new(450));

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn huge_amounts_do_not_break_totals() {
    let (mut ledger, store) = ledger_with_memory();
    let huge = "90000000000000000";

    ledger.add(input("A", RecordKind::Income, huge, date(2024, 1, 1))).unwrap();
    ledger.add(input("B", RecordKind::Income, huge, date(2024, 1, 2))).unwrap();
    assert_eq!(ledger.totals().income, MoneyCents::MAX);

    let reopened = Ledger::open(store).unwrap();
    assert_eq!(reopened.totals().net, MoneyCents::MAX);

    let (mut ledger, _) = ledger_with_memory();
    ledger.add(input("In", RecordKind::Income, huge, date(2024, 1, 1))).unwrap();
    ledger
        .add(input("Out", RecordKind::Expense, &format!("-{huge}"), date(2024, 1, 2)))
        .unwrap();
    let totals = ledger.totals();
    assert_eq!(totals.income, MoneyCents::new(9_000_000_000_000_000_000));
    assert_eq!(totals.net, MoneyCents::MAX);
}

#[test]
fn file_store_keeps_payload_with_unreadable_records() {
    let path = file_store_path();
    let payload = r#"[{"name":"Rent","type":"saída","value":"1200.505","date":"2024-01-01"},{"name":"Coffee","type":"saída","value":"4.50","date":"2024-01-02"}]"#;
    std::fs::write(&path, payload).unwrap();

    let mut ledger = Ledger::open(JsonFileStore::new(&path)).unwrap();
    assert_eq!(names(ledger.records()), vec!["Coffee"]);
    ledger
        .add(input("Salary", RecordKind::Income, "2000", date(2024, 1, 5)))
        .unwrap();

    let kept = std::path::PathBuf::from(format!("{}.rejected", path.display()));
    assert_eq!(std::fs::read_to_string(&kept).unwrap(), payload);
    assert!(!std::fs::read_to_string(&path).unwrap().contains("Rent"));

    // A second unreadable load must not replace the first copy.
    std::fs::write(&path, r#"[{"name":"Bad","type":"income","value":"x","date":"2024-01-01"}]"#)
        .unwrap();
    Ledger::open(JsonFileStore::new(&path)).unwrap();
    let second = std::path::PathBuf::from(format!("{}.rejected.1", path.display()));
    assert_eq!(std::fs::read_to_string(&kept).unwrap(), payload);
    assert!(std::fs::read_to_string(&second).unwrap().contains("Bad"));

    for file in [&path, &kept, &second] {
        std::fs::remove_file(file).unwrap();
    }
}
