use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, StringFormat, dictionary};

use crate::core::{
    CurrencyInfo, FacturierError, InvoiceDocument, LineItem, Totals, amount_in_words,
    compute_totals, currency_info, effective_vat_rate, validate_document,
};
use crate::core::validation_failure;

use super::layout::{self, MARGIN, PAGE_HEIGHT, PAGE_WIDTH, PagePlan, TABLE_TOP};

// Column baselines of the item table.
const INDEX_X: f32 = MARGIN;
const DESC_X: f32 = 65.0;
const QTY_X: f32 = 330.0;
const PRICE_X: f32 = 380.0;
const VAT_X: f32 = 455.0;
const TOTAL_X: f32 = 500.0;

// Totals block label column.
const TOTALS_X: f32 = 380.0;

const BODY_SIZE: f32 = 10.0;
const LINE_STEP: f32 = 12.0;

/// Validate, compute totals, and compose in one call.
pub fn render(document: &InvoiceDocument) -> Result<Vec<u8>, FacturierError> {
    let totals = compute_totals(&document.items, &document.settings);
    compose(document, &totals)
}

/// Compose the finished PDF for a document and its totals.
///
/// Pure function: no I/O, no side effects. A document with validation errors
/// is rejected up front — no partial artifact is ever produced.
pub fn compose(document: &InvoiceDocument, totals: &Totals) -> Result<Vec<u8>, FacturierError> {
    let errors = validate_document(document);
    if !errors.is_empty() {
        return Err(validation_failure(&errors));
    }
    // Validation guarantees the currency is in the supported table.
    let currency = currency_info(&document.currency)
        .ok_or_else(|| FacturierError::Render("unsupported currency".into()))?;

    let plan = layout::plan_pages(document.items.len());
    let show_vat_col = document.settings.vat_enabled && document.settings.per_line_vat;

    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let regular_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let bold_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => Object::Reference(regular_id),
            "F2" => Object::Reference(bold_id),
        },
    });

    let mut page_ids = Vec::new();

    for (page_index, table_page) in plan.pages.iter().enumerate() {
        let mut page = PageContent::new();

        if page_index == 0 {
            draw_heading(&mut page, document);
            draw_parties(&mut page, document);
            draw_metadata(&mut page, document);
        }

        draw_table_header(&mut page, show_vat_col);
        for (on_page, item_index) in table_page.rows.clone().enumerate() {
            let item = &document.items[item_index];
            draw_row(
                &mut page,
                PagePlan::row_y(on_page),
                item_index,
                item,
                document,
                currency,
                show_vat_col,
            );
        }

        let is_last_table_page = page_index == plan.pages.len() - 1;
        if is_last_table_page && !plan.totals_on_extra_page {
            let y = PagePlan::row_y(table_page.rows.len()) - 10.0;
            draw_totals(&mut page, document, totals, currency, y);
        }

        page_ids.push(add_page(&mut doc, pages_id, resources_id, page)?);
    }

    if plan.totals_on_extra_page {
        let mut page = PageContent::new();
        draw_totals(&mut page, document, totals, currency, TABLE_TOP);
        page_ids.push(add_page(&mut doc, pages_id, resources_id, page)?);
    }

    let kids: Vec<Object> = page_ids.iter().map(|&id| Object::Reference(id)).collect();
    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", catalog_id);

    let mut output = Vec::new();
    doc.save_to(&mut output)
        .map_err(|e| FacturierError::Render(format!("failed to save PDF: {e}")))?;
    Ok(output)
}

/// Accumulates content-stream operations for one page.
struct PageContent {
    operations: Vec<Operation>,
}

impl PageContent {
    fn new() -> Self {
        Self {
            operations: Vec::new(),
        }
    }

    fn text(&mut self, font: &str, size: f32, x: f32, y: f32, text: &str) {
        self.operations.push(Operation::new("BT", vec![]));
        self.operations.push(Operation::new(
            "Tf",
            vec![Object::Name(font.as_bytes().to_vec()), size.into()],
        ));
        self.operations
            .push(Operation::new("Td", vec![x.into(), y.into()]));
        self.operations.push(Operation::new(
            "Tj",
            vec![Object::String(
                encode_winansi(text),
                StringFormat::Literal,
            )],
        ));
        self.operations.push(Operation::new("ET", vec![]));
    }

    fn rule(&mut self, x1: f32, y: f32, x2: f32) {
        self.operations
            .push(Operation::new("w", vec![0.5f32.into()]));
        self.operations
            .push(Operation::new("m", vec![x1.into(), y.into()]));
        self.operations
            .push(Operation::new("l", vec![x2.into(), y.into()]));
        self.operations.push(Operation::new("S", vec![]));
    }
}

fn add_page(
    doc: &mut Document,
    pages_id: lopdf::ObjectId,
    resources_id: lopdf::ObjectId,
    page: PageContent,
) -> Result<lopdf::ObjectId, FacturierError> {
    let content = Content {
        operations: page.operations,
    };
    let bytes = content
        .encode()
        .map_err(|e| FacturierError::Render(format!("failed to encode content: {e}")))?;
    let content_id = doc.add_object(Stream::new(dictionary! {}, bytes));
    Ok(doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => Object::Reference(pages_id),
        "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
        "Contents" => Object::Reference(content_id),
        "Resources" => Object::Reference(resources_id),
    }))
}

fn draw_heading(page: &mut PageContent, document: &InvoiceDocument) {
    page.text("F2", 18.0, MARGIN, 800.0, document.kind.title());
    page.rule(MARGIN, 792.0, PAGE_WIDTH - MARGIN);
}

fn draw_parties(page: &mut PageContent, document: &InvoiceDocument) {
    let issuer = &document.issuer;
    let mut y = 770.0;
    page.text("F2", BODY_SIZE, MARGIN, y, "Émetteur:");
    y -= LINE_STEP;
    page.text("F1", BODY_SIZE, MARGIN, y, &issuer.name);
    y -= LINE_STEP;
    page.text("F1", BODY_SIZE, MARGIN, y, &issuer.address);
    if let Some(phone) = &issuer.phone {
        y -= LINE_STEP;
        page.text("F1", BODY_SIZE, MARGIN, y, &format!("Téléphone: {phone}"));
    }
    if let Some(email) = &issuer.email {
        y -= LINE_STEP;
        page.text("F1", BODY_SIZE, MARGIN, y, &format!("Email: {email}"));
    }
    y -= LINE_STEP;
    page.text("F1", BODY_SIZE, MARGIN, y, &format!("MF: {}", issuer.tax_id));
    if let Some(bank_ref) = &issuer.bank_ref {
        y -= LINE_STEP;
        page.text("F1", BODY_SIZE, MARGIN, y, &format!("RIB: {bank_ref}"));
    }

    let client = &document.client;
    let client_x = 330.0;
    let mut y = 770.0;
    page.text("F2", BODY_SIZE, client_x, y, "Client:");
    y -= LINE_STEP;
    page.text("F1", BODY_SIZE, client_x, y, &client.name);
    y -= LINE_STEP;
    page.text("F1", BODY_SIZE, client_x, y, &client.address);
    y -= LINE_STEP;
    page.text("F1", BODY_SIZE, client_x, y, &format!("MF: {}", client.tax_id));
}

fn draw_metadata(page: &mut PageContent, document: &InvoiceDocument) {
    let mut y = 672.0;
    page.text(
        "F1",
        BODY_SIZE,
        MARGIN,
        y,
        &format!("{} N°: {}", document.kind.label(), document.number),
    );
    y -= LINE_STEP;
    page.text(
        "F1",
        BODY_SIZE,
        MARGIN,
        y,
        &format!("Date: {}", document.issue_date),
    );
    if let Some(delivery) = document.delivery_date {
        y -= LINE_STEP;
        page.text(
            "F1",
            BODY_SIZE,
            MARGIN,
            y,
            &format!("Date de livraison: {delivery}"),
        );
    }
}

fn draw_table_header(page: &mut PageContent, show_vat_col: bool) {
    page.text("F2", BODY_SIZE, INDEX_X, TABLE_TOP, "N°");
    page.text("F2", BODY_SIZE, DESC_X, TABLE_TOP, "Description");
    page.text("F2", BODY_SIZE, QTY_X, TABLE_TOP, "Qté");
    page.text("F2", BODY_SIZE, PRICE_X, TABLE_TOP, "Prix Unit. HT");
    if show_vat_col {
        page.text("F2", BODY_SIZE, VAT_X, TABLE_TOP, "TVA %");
    }
    page.text("F2", BODY_SIZE, TOTAL_X, TABLE_TOP, "Total HT");
    page.rule(MARGIN, TABLE_TOP - 5.0, PAGE_WIDTH - MARGIN);
}

fn draw_row(
    page: &mut PageContent,
    y: f32,
    item_index: usize,
    item: &LineItem,
    document: &InvoiceDocument,
    currency: &CurrencyInfo,
    show_vat_col: bool,
) {
    page.text("F1", BODY_SIZE, INDEX_X, y, &(item_index + 1).to_string());
    page.text("F1", BODY_SIZE, DESC_X, y, &clip(&item.description, 48));
    page.text("F1", BODY_SIZE, QTY_X, y, &item.quantity.to_string());
    page.text(
        "F1",
        BODY_SIZE,
        PRICE_X,
        y,
        &currency.format_amount(item.unit_price),
    );
    if show_vat_col {
        let rate = effective_vat_rate(item, &document.settings);
        page.text("F1", BODY_SIZE, VAT_X, y, &format!("{}%", u32::from(rate)));
    }
    page.text(
        "F1",
        BODY_SIZE,
        TOTAL_X,
        y,
        &currency.format_amount(item.line_total_ht()),
    );
}

fn draw_totals(
    page: &mut PageContent,
    document: &InvoiceDocument,
    totals: &Totals,
    currency: &CurrencyInfo,
    y_start: f32,
) {
    let mut y = y_start;
    page.text(
        "F1",
        BODY_SIZE,
        TOTALS_X,
        y,
        &format!("Total HT: {}", currency.format_amount(totals.total_ht)),
    );
    if document.settings.vat_enabled {
        y -= 14.0;
        page.text(
            "F1",
            BODY_SIZE,
            TOTALS_X,
            y,
            &format!("TVA: {}", currency.format_amount(totals.total_vat)),
        );
    }
    if document.settings.fiscal_stamp_enabled {
        y -= 14.0;
        page.text(
            "F1",
            BODY_SIZE,
            TOTALS_X,
            y,
            &format!(
                "Timbre Fiscal: {}",
                currency.format_amount(totals.fiscal_stamp)
            ),
        );
    }
    y -= 16.0;
    page.text(
        "F2",
        12.0,
        TOTALS_X,
        y,
        &format!("Total TTC: {}", currency.format_amount(totals.total_ttc)),
    );

    y -= 22.0;
    page.text(
        "F1",
        BODY_SIZE,
        MARGIN,
        y,
        &format!(
            "Montant en lettres: {}",
            amount_in_words(totals.total_ttc, currency)
        ),
    );
}

fn clip(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// Encode text for the WinAnsi (CP-1252) `Tj` operand. Characters outside
/// the code page (e.g. Arabic) degrade to '?'.
fn encode_winansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '€' => 0x80,
            '‚' => 0x82,
            '„' => 0x84,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '–' => 0x96,
            '—' => 0x97,
            'œ' => 0x9C,
            'Œ' => 0x8C,
            c if (c as u32) < 0x80 => c as u8,
            c if (0xA0..=0xFF).contains(&(c as u32)) => c as u8,
            _ => b'?',
        })
        .collect()
}
