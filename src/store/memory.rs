use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;

use super::record::*;
use super::{RecordStore, StoreError};

/// In-memory [`RecordStore`].
///
/// Backs tests and single-process deployments; a remote store is reached
/// through [`client`](super::client) instead. An insertion counter keeps
/// `list()` ordering stable even when created_at timestamps collide.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: HashMap<RecordId, (u64, InvoiceRecord)>,
    next_seq: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordStore for MemoryStore {
    fn create(&mut self, draft: &RecordDraft) -> Result<InvoiceRecord, StoreError> {
        let new = draft.validate_create().map_err(StoreError::Rejected)?;

        let record = InvoiceRecord {
            id: Uuid::new_v4(),
            owner_ref: new.owner_ref,
            contract_ref: new.contract_ref,
            number: new.number,
            kind: new.kind,
            status: new.status,
            total_ttc: new.total_ttc,
            due_date: new.due_date,
            amount_collected: new.amount_collected,
            amount_pending: new.amount_pending,
            amount_overdue: new.amount_overdue,
            created_at: Utc::now(),
        };
        let seq = self.next_seq;
        self.next_seq += 1;
        self.records.insert(record.id, (seq, record.clone()));
        Ok(record)
    }

    fn list(&self) -> Vec<InvoiceRecord> {
        let mut entries: Vec<&(u64, InvoiceRecord)> = self.records.values().collect();
        entries.sort_by(|a, b| b.0.cmp(&a.0));
        entries.into_iter().map(|(_, r)| r.clone()).collect()
    }

    fn get(&self, id: RecordId) -> Result<InvoiceRecord, StoreError> {
        self.records
            .get(&id)
            .map(|(_, r)| r.clone())
            .ok_or(StoreError::NotFound)
    }

    fn update(&mut self, id: RecordId, draft: &RecordDraft) -> Result<InvoiceRecord, StoreError> {
        let update = draft.validate_update().map_err(StoreError::Rejected)?;

        let (_, record) = self.records.get_mut(&id).ok_or(StoreError::NotFound)?;
        record.number = update.number;
        record.kind = update.kind;
        record.status = update.status;
        record.total_ttc = update.total_ttc;
        record.due_date = update.due_date;
        record.amount_collected = update.amount_collected;
        record.amount_pending = update.amount_pending;
        record.amount_overdue = update.amount_overdue;
        Ok(record.clone())
    }

    fn delete(&mut self, id: RecordId) -> Result<(), StoreError> {
        self.records
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }
}
