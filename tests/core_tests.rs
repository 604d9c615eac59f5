use chrono::NaiveDate;
use facturier::core::*;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn issuer() -> PartyInfo {
    PartyBuilder::new("E-Tafakna SARL", "Tunis, Tunisie", "1234567/A/M/000")
        .phone("+216 71 000 000")
        .email("contact@e-tafakna.com")
        .bank_ref("TN59 1000 6035 0000 0000 1234")
        .build()
}

fn client() -> PartyInfo {
    PartyBuilder::new("Client SA", "Sfax, Tunisie", "7654321/B/N/000").build()
}

// --- Totals scenarios ---

#[test]
fn consulting_invoice_totals() {
    let doc = DocumentBuilder::new(DocumentKind::Invoice, "2024-001", date(2024, 6, 15))
        .issuer(issuer())
        .client(client())
        .add_item(LineItem::new("Consulting", 2, dec!(100), VatRate::Standard))
        .fiscal_stamp(true, dec!(1.00))
        .build()
        .unwrap();

    let totals = compute_totals(&doc.items, &doc.settings);
    assert_eq!(totals.total_ht, dec!(200.00));
    assert_eq!(totals.total_vat, dec!(38.00));
    assert_eq!(totals.fiscal_stamp, dec!(1.00));
    assert_eq!(totals.total_ttc, dec!(239.00));
}

#[test]
fn quote_with_mixed_line_rates() {
    let doc = DocumentBuilder::new(DocumentKind::Quote, "D-2024-007", date(2024, 6, 15))
        .issuer(issuer())
        .client(client())
        .per_line_vat(true)
        .fiscal_stamp(false, dec!(0))
        .add_item(LineItem::new("Livres", 3, dec!(29.99), VatRate::Reduced))
        .add_item(LineItem::new("Logiciel", 1, dec!(199), VatRate::Standard))
        .build()
        .unwrap();

    let totals = compute_totals(&doc.items, &doc.settings);
    // 89.97 @ 7% = 6.2979, 199 @ 19% = 37.81 — full precision retained
    assert_eq!(totals.total_ht, dec!(288.97));
    assert_eq!(totals.total_vat, dec!(44.1079));
    assert_eq!(totals.total_ttc, dec!(333.0779));
}

#[test]
fn recomputation_is_reproducible() {
    let doc = DocumentBuilder::new(DocumentKind::Invoice, "2024-002", date(2024, 6, 15))
        .issuer(issuer())
        .client(client())
        .add_item(LineItem::new("Maintenance", 7, dec!(33.333), VatRate::Intermediate))
        .build()
        .unwrap();

    let first = compute_totals(&doc.items, &doc.settings);
    let second = compute_totals(&doc.items, &doc.settings);
    assert_eq!(first, second);
}

#[test]
fn delivery_date_is_optional() {
    let doc = DocumentBuilder::new(DocumentKind::Invoice, "2024-003", date(2024, 6, 15))
        .delivery_date(date(2024, 6, 20))
        .issuer(issuer())
        .client(client())
        .add_item(LineItem::new("Transport", 1, dec!(75), VatRate::Standard))
        .build()
        .unwrap();
    assert_eq!(doc.delivery_date, Some(date(2024, 6, 20)));
}

// --- Validation at build time ---

#[test]
fn unsupported_currency_is_rejected() {
    let result = DocumentBuilder::new(DocumentKind::Invoice, "2024-004", date(2024, 6, 15))
        .currency("GBP")
        .issuer(issuer())
        .client(client())
        .add_item(LineItem::new("Consulting", 1, dec!(100), VatRate::Standard))
        .build();

    let err = result.unwrap_err().to_string();
    assert!(err.contains("currency"), "unexpected error: {err}");
}

#[test]
fn all_item_violations_reported_together() {
    let result = DocumentBuilder::new(DocumentKind::Invoice, "2024-005", date(2024, 6, 15))
        .issuer(issuer())
        .client(client())
        .add_item(LineItem::new("", 0, dec!(10), VatRate::Standard))
        .add_item(LineItem::new("Ok", 1, dec!(-3), VatRate::Standard))
        .build();

    let err = result.unwrap_err().to_string();
    assert!(err.contains("items[0].description"));
    assert!(err.contains("items[0].quantity"));
    assert!(err.contains("items[1].unit_price"));
}

#[test]
fn missing_party_fields_reported() {
    let anonymous = PartyBuilder::new("", "", "").build();
    let result = DocumentBuilder::new(DocumentKind::Invoice, "2024-006", date(2024, 6, 15))
        .issuer(issuer())
        .client(anonymous)
        .add_item(LineItem::new("Consulting", 1, dec!(100), VatRate::Standard))
        .build();

    let err = result.unwrap_err().to_string();
    assert!(err.contains("client.name"));
    assert!(err.contains("client.address"));
    assert!(err.contains("client.tax_id"));
}

// --- Amount in words ---

#[test]
fn ttc_amount_in_words_for_dinars() {
    let tnd = currency_info("TND").unwrap();
    // 39.500 TND
    assert_eq!(
        amount_in_words(dec!(39.5), tnd),
        "trente-neuf dinars et 500 millimes"
    );
    // ≥ 100 falls back to digits, by contract
    assert_eq!(
        amount_in_words(dec!(239.00), tnd),
        "239 dinars et 0 millimes"
    );
}

// --- Document serde ---

#[test]
fn document_json_roundtrip() {
    let doc = DocumentBuilder::new(DocumentKind::Quote, "D-2024-001", date(2024, 6, 15))
        .currency("EUR")
        .issuer(issuer())
        .client(client())
        .add_item(LineItem::new("Audit", 2, dec!(450), VatRate::Standard))
        .build()
        .unwrap();

    let json = serde_json::to_string(&doc).unwrap();
    let parsed: InvoiceDocument = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, doc);
    assert_eq!(
        compute_totals(&parsed.items, &parsed.settings),
        compute_totals(&doc.items, &doc.settings)
    );
}
