use chrono::NaiveDate;
use facturier::core::*;
use rust_decimal_macros::dec;

fn main() {
    let doc = DocumentBuilder::new(
        DocumentKind::Invoice,
        "2024-001",
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
    )
    .delivery_date(NaiveDate::from_ymd_opt(2024, 6, 20).unwrap())
    .issuer(
        PartyBuilder::new("E-Tafakna SARL", "Tunis, Tunisie", "1234567/A/M/000")
            .phone("+216 71 000 000")
            .email("contact@e-tafakna.com")
            .bank_ref("TN59 1000 6035 0000 0000 1234")
            .build(),
    )
    .client(PartyBuilder::new("Client SA", "Sfax, Tunisie", "7654321/B/N/000").build())
    .add_item(LineItem::new("Développement web", 40, dec!(85), VatRate::Standard))
    .add_item(LineItem::new("Hébergement (mensuel)", 1, dec!(49.900), VatRate::Standard))
    .fiscal_stamp(true, dec!(1.000))
    .build()
    .expect("document should be valid");

    let totals = compute_totals(&doc.items, &doc.settings);
    let currency = currency_info(&doc.currency).unwrap();

    println!("{} {}", doc.kind.title(), doc.number);
    println!("Date:    {}", doc.issue_date);
    println!("Émetteur: {}", doc.issuer.name);
    println!("Client:   {}", doc.client.name);
    println!("---");
    for (i, item) in doc.items.iter().enumerate() {
        println!(
            "  {}. {} — {} × {} = {}",
            i + 1,
            item.description,
            item.quantity,
            currency.format_amount(item.unit_price),
            currency.format_amount(item.line_total_ht()),
        );
    }
    println!("---");
    println!("Total HT:      {}", currency.format_amount(totals.total_ht));
    println!("TVA:           {}", currency.format_amount(totals.total_vat));
    println!("Timbre Fiscal: {}", currency.format_amount(totals.fiscal_stamp));
    println!("Total TTC:     {}", currency.format_amount(totals.total_ttc));
    println!("En lettres:    {}", amount_in_words(totals.total_ttc, currency));
}
