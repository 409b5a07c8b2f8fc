use recdiff::{KeyType, Record, RecordDiff};

#[derive(Record)]
#[record(schema = "ledger_entry", table = "ledger")]
struct LedgerEntry {
    #[record(column = "entry_id")]
    id: u64,
    #[record(property = "Memo")]
    description: Option<String>,
    amount_cents: i64,
    posted_on: chrono::NaiveDate,
    #[record(skip)]
    scratch: Vec<u8>,
}

fn main() {
    let date = chrono::NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
    let a = LedgerEntry {
        id: 1,
        description: None,
        amount_cents: 100,
        posted_on: date,
        scratch: Vec::new(),
    };
    let b = LedgerEntry {
        id: 1,
        description: Some("refund".into()),
        amount_cents: -100,
        posted_on: date,
        scratch: vec![0],
    };
    let comparator = RecordDiff::with_labels(&a, &b, "before", "after").unwrap();
    let diff = comparator.diff_as(KeyType::Property).unwrap();
    assert_eq!(diff.fields().collect::<Vec<_>>(), vec!["Memo", "AmountCents"]);
}
