use chrono::NaiveDate;
use facturier::store::*;
use rust_decimal_macros::dec;

fn main() {
    let mut store = MemoryStore::new();

    let created = store
        .create(&RecordDraft {
            owner_ref: Some("user-1".into()),
            contract_ref: Some("contract-9".into()),
            number: Some("2024-001".into()),
            kind: Some("facture".into()),
            status: Some("EN_ATTENTE".into()),
            total_ttc: Some(dec!(239.000)),
            due_date: NaiveDate::from_ymd_opt(2024, 7, 15),
            ..RecordDraft::default()
        })
        .expect("create");
    println!("created {} ({} / {})", created.id, created.kind, created.status);

    // Invalid input is rejected with every violated rule listed.
    let err = store.create(&RecordDraft::default()).unwrap_err();
    println!("rejected draft: {err}");

    for record in store.list() {
        println!(
            "{} {} — {} TTC, due {}",
            record.number, record.status, record.total_ttc, record.due_date
        );
    }
}
