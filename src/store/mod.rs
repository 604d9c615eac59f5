//! Invoice record store — the persisted projection of rendered documents.
//!
//! Documents themselves are never stored; only a summary record (number,
//! kind, status, TTC total, due date, collection amounts) crosses this
//! boundary. Input arrives as a loose [`RecordDraft`] and is validated into
//! typed data before anything is written: every violated rule is reported,
//! not just the first, and a missing id is a distinct [`StoreError::NotFound`]
//! outcome so callers can tell "rejected input" from "nothing there".

#[cfg(feature = "client")]
pub mod client;
mod memory;
mod record;

pub use memory::*;
pub use record::*;

use thiserror::Error;

use crate::core::ValidationError;

/// Failure outcomes at the store boundary.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StoreError {
    /// No record with the given id.
    #[error("record not found")]
    NotFound,

    /// Input violated one or more validation rules (all listed).
    #[error("validation failed: {}", format_rules(.0))]
    Rejected(Vec<ValidationError>),
}

fn format_rules(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// CRUD interface over invoice records.
///
/// Simple last-write-wins semantics: no versioning and no ordering guarantee
/// between concurrent editors.
pub trait RecordStore {
    /// Validate and insert a new record. Requires an owner reference and a
    /// contract reference in addition to the common fields.
    fn create(&mut self, draft: &RecordDraft) -> Result<InvoiceRecord, StoreError>;

    /// All records, newest first.
    fn list(&self) -> Vec<InvoiceRecord>;

    fn get(&self, id: RecordId) -> Result<InvoiceRecord, StoreError>;

    /// Validate and replace the mutable fields of an existing record.
    /// Owner and contract references are not updatable.
    fn update(&mut self, id: RecordId, draft: &RecordDraft) -> Result<InvoiceRecord, StoreError>;

    fn delete(&mut self, id: RecordId) -> Result<(), StoreError>;
}
