//! Paginated PDF composition for invoices and quotes.
//!
//! The composer is a pure function of a document and its computed totals:
//! no I/O, no side effects, output is the finished PDF byte stream. A
//! document that fails validation is rejected before any bytes are produced.
//!
//! [`layout`] plans which item rows land on which page; [`compose`] draws
//! the plan with `lopdf`.

mod compose;
pub mod layout;

pub use compose::{compose, render};

use crate::core::InvoiceDocument;

/// Download file name for a rendered artifact:
/// `{kind}_{number-or-client}_{iso-date}.pdf`.
///
/// Falls back to the client name when the document number is blank.
pub fn artifact_filename(document: &InvoiceDocument) -> String {
    let stem = if document.number.trim().is_empty() {
        document.client.name.as_str()
    } else {
        document.number.as_str()
    };
    let stem: String = stem
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '-' } else { c })
        .collect();
    format!(
        "{}_{}_{}.pdf",
        document.kind.slug(),
        stem,
        document.issue_date
    )
}
