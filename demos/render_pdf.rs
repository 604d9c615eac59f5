use chrono::NaiveDate;
use facturier::core::*;
use facturier::pdf;
use rust_decimal_macros::dec;

fn main() {
    let mut builder = DocumentBuilder::new(
        DocumentKind::Invoice,
        "2024-042",
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
    )
    .issuer(
        PartyBuilder::new("E-Tafakna SARL", "Tunis, Tunisie", "1234567/A/M/000")
            .phone("+216 71 000 000")
            .email("contact@e-tafakna.com")
            .bank_ref("TN59 1000 6035 0000 0000 1234")
            .build(),
    )
    .client(PartyBuilder::new("Client SA", "Sfax, Tunisie", "7654321/B/N/000").build())
    .per_line_vat(true);

    // Enough rows to demonstrate pagination with repeated table headers.
    for i in 1..=40 {
        builder = builder.add_item(LineItem::new(
            format!("Prestation {i}"),
            i % 5 + 1,
            dec!(49.900),
            if i % 3 == 0 { VatRate::Reduced } else { VatRate::Standard },
        ));
    }

    let doc = builder.build().expect("document should be valid");
    let bytes = pdf::render(&doc).expect("render");
    let filename = pdf::artifact_filename(&doc);
    std::fs::write(&filename, &bytes).expect("write PDF");
    println!("Written {} ({} bytes)", filename, bytes.len());
}
