#![cfg(feature = "pdf")]

use chrono::NaiveDate;
use facturier::core::*;
use facturier::pdf::{self, layout};
use lopdf::Document;
use lopdf::content::Content;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn builder(item_count: usize) -> DocumentBuilder {
    let mut b = DocumentBuilder::new(DocumentKind::Invoice, "2024-001", date(2024, 6, 15))
        .issuer(
            PartyBuilder::new("E-Tafakna SARL", "Tunis, Tunisie", "1234567/A/M/000")
                .phone("+216 71 000 000")
                .email("contact@e-tafakna.com")
                .bank_ref("TN59 1000 6035 0000 0000 1234")
                .build(),
        )
        .client(PartyBuilder::new("Client SA", "Sfax, Tunisie", "7654321/B/N/000").build());
    for i in 1..=item_count {
        b = b.add_item(LineItem::new(
            format!("Ligne {i}"),
            1,
            dec!(10),
            VatRate::Standard,
        ));
    }
    b
}

/// Per-page text, WinAnsi bytes decoded as Latin-1, Tj strings joined by '\n'.
fn page_texts(bytes: &[u8]) -> Vec<String> {
    let doc = Document::load_mem(bytes).expect("composed PDF should parse");
    doc.get_pages()
        .values()
        .map(|&page_id| {
            let content_bytes = doc.get_page_content(page_id).expect("page content");
            let content = Content::decode(&content_bytes).expect("content stream");
            let mut text = String::new();
            for op in &content.operations {
                if op.operator == "Tj" {
                    if let Some(lopdf::Object::String(s, _)) = op.operands.first() {
                        // WinAnsi: the euro sign sits at 0x80, the rest we
                        // need is plain Latin-1.
                        text.extend(s.iter().map(|&b| match b {
                            0x80 => '€',
                            b => b as char,
                        }));
                        text.push('\n');
                    }
                }
            }
            text
        })
        .collect()
}

#[test]
fn single_page_invoice_layout() {
    let doc = builder(2).build().unwrap();
    let bytes = pdf::render(&doc).unwrap();
    let pages = page_texts(&bytes);

    assert_eq!(pages.len(), 1);
    let text = &pages[0];
    assert!(text.contains("FACTURE"));
    assert!(text.contains("Émetteur:"));
    assert!(text.contains("Client SA"));
    assert!(text.contains("Facture N°: 2024-001"));
    assert!(text.contains("Date: 2024-06-15"));
    assert!(text.contains("Description"));
    assert!(text.contains("Ligne 1"));
    assert!(text.contains("Ligne 2"));
    assert!(text.contains("Total HT: 20.000 TND"));
    assert!(text.contains("Timbre Fiscal: 1.000 TND"));
    assert!(text.contains("Total TTC: 24.800 TND"));
    assert!(text.contains("Montant en lettres: vingt-quatre dinars et 800 millimes"));
}

#[test]
fn pagination_repeats_header_and_keeps_row_order() {
    let k = layout::rows_per_page();
    let n = 2 * k + 3;
    let doc = builder(n).build().unwrap();
    let bytes = pdf::render(&doc).unwrap();
    let pages = page_texts(&bytes);

    // ceil(N/K) table pages, each with exactly one header row
    assert_eq!(pages.len(), n.div_ceil(k));
    for page in &pages {
        assert_eq!(page.matches("Description").count(), 1);
    }

    // all N rows present, in original order
    let all = pages.join("");
    let mut last_pos = 0;
    for i in 1..=n {
        let needle = format!("Ligne {i}\n");
        let pos = all[last_pos..]
            .find(&needle)
            .unwrap_or_else(|| panic!("row {i} missing or out of order"));
        last_pos += pos + needle.len();
    }
}

#[test]
fn totals_move_to_extra_page_without_header_when_last_page_is_full() {
    let k = layout::rows_per_page();
    let doc = builder(k).build().unwrap();
    let bytes = pdf::render(&doc).unwrap();
    let pages = page_texts(&bytes);

    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].matches("Description").count(), 1);
    assert_eq!(pages[1].matches("Description").count(), 0);
    assert!(pages[1].contains("Total TTC:"));
    // emitted exactly once
    assert!(!pages[0].contains("Total TTC:"));
}

#[test]
fn vat_column_follows_per_line_setting() {
    let with_col = builder(1).per_line_vat(true).build().unwrap();
    let text = page_texts(&pdf::render(&with_col).unwrap()).join("");
    assert!(text.contains("TVA %"));
    assert!(text.contains("19%"));

    let without_col = builder(1).per_line_vat(false).build().unwrap();
    let text = page_texts(&pdf::render(&without_col).unwrap()).join("");
    assert!(!text.contains("TVA %"));
}

#[test]
fn disabled_vat_and_stamp_lines_are_omitted() {
    let doc = builder(1)
        .vat_enabled(false)
        .fiscal_stamp(false, dec!(0))
        .build()
        .unwrap();
    let text = page_texts(&pdf::render(&doc).unwrap()).join("");
    assert!(text.contains("Total HT:"));
    assert!(!text.contains("TVA:"));
    assert!(!text.contains("Timbre Fiscal:"));
    assert!(text.contains("Total TTC: 10.000 TND"));
}

#[test]
fn euro_document_formats_two_decimals() {
    let doc = builder(1).currency("EUR").build().unwrap();
    let text = page_texts(&pdf::render(&doc).unwrap()).join("");
    assert!(text.contains("Total HT: 10.00 €"));
    assert!(text.contains("centimes"));
}

#[test]
fn invalid_document_produces_no_artifact() {
    let doc = builder(0)
        .add_item(LineItem::new("", 1, dec!(10), VatRate::Standard))
        .build_unchecked()
        .unwrap();
    let err = pdf::render(&doc).unwrap_err();
    assert!(matches!(err, FacturierError::Validation(_)));
}

#[test]
fn quote_uses_devis_title() {
    let doc = DocumentBuilder::new(DocumentKind::Quote, "D-2024-001", date(2024, 6, 15))
        .issuer(PartyBuilder::new("E-Tafakna SARL", "Tunis", "1234567/A/M/000").build())
        .client(PartyBuilder::new("Client SA", "Sfax", "7654321/B/N/000").build())
        .add_item(LineItem::new("Audit", 1, dec!(500), VatRate::Standard))
        .build()
        .unwrap();
    let text = page_texts(&pdf::render(&doc).unwrap()).join("");
    assert!(text.contains("DEVIS"));
    assert!(text.contains("Devis N°: D-2024-001"));
}

#[test]
fn artifact_filename_convention() {
    let doc = builder(1).build().unwrap();
    assert_eq!(
        pdf::artifact_filename(&doc),
        "invoice_2024-001_2024-06-15.pdf"
    );
}
