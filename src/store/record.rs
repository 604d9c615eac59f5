use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::ValidationError;

/// Record identifier.
pub type RecordId = Uuid;

/// Document kind of a stored record.
///
/// Wire values are "invoice" and "quote"; parsing is case-insensitive and
/// also accepts the legacy French values ("facture", "devis"/"devise").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Quote,
    Invoice,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Quote => "quote",
            Self::Invoice => "invoice",
        }
    }

    /// Parse a wire value, case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "quote" | "devis" | "devise" => Some(Self::Quote),
            "invoice" | "facture" => Some(Self::Invoice),
            _ => None,
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RecordKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RecordKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown document kind '{s}'")))
    }
}

/// Payment status of a stored record.
///
/// Wire values are "pending", "paid", "overdue", "cancelled"; parsing is
/// case-insensitive (Unicode lowercasing, so "PAYÉE" matches the legacy
/// French value "payée").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordStatus {
    Pending,
    Paid,
    Overdue,
    Cancelled,
}

impl RecordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Overdue => "overdue",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parse a wire value, case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "pending" | "en_attente" => Some(Self::Pending),
            "paid" | "payée" => Some(Self::Paid),
            "overdue" | "en_retard" => Some(Self::Overdue),
            "cancelled" | "annulée" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

impl std::fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RecordStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RecordStatus {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).ok_or_else(|| serde::de::Error::custom(format!("unknown status '{s}'")))
    }
}

/// Persisted invoice summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    pub id: RecordId,
    /// Owning user reference, fixed at creation.
    pub owner_ref: String,
    /// Contract reference, fixed at creation.
    pub contract_ref: String,
    pub number: String,
    pub kind: RecordKind,
    pub status: RecordStatus,
    pub total_ttc: Decimal,
    pub due_date: NaiveDate,
    /// Amount already collected ("encaissé").
    pub amount_collected: Decimal,
    /// Amount still pending ("en attente").
    pub amount_pending: Decimal,
    /// Amount overdue ("en retard").
    pub amount_overdue: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Loosely-typed input for create/update, as received from a client.
///
/// Unknown fields are rejected at deserialization; everything else is
/// checked by [`RecordDraft::validate_create`] / [`validate_update`],
/// which report every violated rule.
///
/// [`validate_update`]: RecordDraft::validate_update
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RecordDraft {
    pub owner_ref: Option<String>,
    pub contract_ref: Option<String>,
    pub number: Option<String>,
    pub kind: Option<String>,
    pub status: Option<String>,
    pub total_ttc: Option<Decimal>,
    pub due_date: Option<NaiveDate>,
    pub amount_collected: Option<Decimal>,
    pub amount_pending: Option<Decimal>,
    pub amount_overdue: Option<Decimal>,
}

/// Validated data for a new record.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRecord {
    pub owner_ref: String,
    pub contract_ref: String,
    pub number: String,
    pub kind: RecordKind,
    pub status: RecordStatus,
    pub total_ttc: Decimal,
    pub due_date: NaiveDate,
    pub amount_collected: Decimal,
    pub amount_pending: Decimal,
    pub amount_overdue: Decimal,
}

/// Validated replacement for an existing record's mutable fields.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordUpdate {
    pub number: String,
    pub kind: RecordKind,
    pub status: RecordStatus,
    pub total_ttc: Decimal,
    pub due_date: NaiveDate,
    pub amount_collected: Decimal,
    pub amount_pending: Decimal,
    pub amount_overdue: Decimal,
}

impl RecordDraft {
    /// Validate as input for `create`. Owner and contract references are
    /// mandatory here.
    pub fn validate_create(&self) -> Result<NewRecord, Vec<ValidationError>> {
        let mut errors = Vec::new();

        let owner_ref = required_text(&self.owner_ref, "owner_ref", &mut errors);
        let contract_ref = required_text(&self.contract_ref, "contract_ref", &mut errors);
        let common = self.validate_common(&mut errors);

        match (owner_ref, contract_ref, common) {
            (Some(owner_ref), Some(contract_ref), Some(c)) => Ok(NewRecord {
                owner_ref,
                contract_ref,
                number: c.number,
                kind: c.kind,
                status: c.status,
                total_ttc: c.total_ttc,
                due_date: c.due_date,
                amount_collected: c.amount_collected,
                amount_pending: c.amount_pending,
                amount_overdue: c.amount_overdue,
            }),
            _ => Err(errors),
        }
    }

    /// Validate as input for `update`. Owner and contract references are
    /// ignored; all other fields remain mandatory.
    pub fn validate_update(&self) -> Result<RecordUpdate, Vec<ValidationError>> {
        let mut errors = Vec::new();
        match self.validate_common(&mut errors) {
            Some(update) => Ok(update),
            None => Err(errors),
        }
    }

    fn validate_common(&self, errors: &mut Vec<ValidationError>) -> Option<RecordUpdate> {
        let number = required_text(&self.number, "number", errors);

        let kind = match self.kind.as_deref() {
            None => {
                errors.push(ValidationError::new("kind", "kind is required"));
                None
            }
            Some(raw) => {
                let parsed = RecordKind::parse(raw);
                if parsed.is_none() {
                    errors.push(ValidationError::new(
                        "kind",
                        "kind must be \"quote\" or \"invoice\" (case-insensitive)",
                    ));
                }
                parsed
            }
        };

        let status = match self.status.as_deref() {
            None => {
                errors.push(ValidationError::new("status", "status is required"));
                None
            }
            Some(raw) => {
                let parsed = RecordStatus::parse(raw);
                if parsed.is_none() {
                    errors.push(ValidationError::new(
                        "status",
                        "status must be \"pending\", \"paid\", \"overdue\" or \"cancelled\" (case-insensitive)",
                    ));
                }
                parsed
            }
        };

        let total_ttc = match self.total_ttc {
            None => {
                errors.push(ValidationError::new(
                    "total_ttc",
                    "total_ttc must be a non-negative number",
                ));
                None
            }
            Some(v) if v.is_sign_negative() => {
                errors.push(ValidationError::new(
                    "total_ttc",
                    "total_ttc must be a non-negative number",
                ));
                None
            }
            Some(v) => Some(v),
        };

        let due_date = self.due_date;
        if due_date.is_none() {
            errors.push(ValidationError::new("due_date", "due_date is required"));
        }

        // Absent amounts default to 0 — the only permitted defaulting.
        let amount_collected = optional_amount(self.amount_collected, "amount_collected", errors);
        let amount_pending = optional_amount(self.amount_pending, "amount_pending", errors);
        let amount_overdue = optional_amount(self.amount_overdue, "amount_overdue", errors);

        match (number, kind, status, total_ttc, due_date) {
            (Some(number), Some(kind), Some(status), Some(total_ttc), Some(due_date))
                if errors.is_empty() =>
            {
                Some(RecordUpdate {
                    number,
                    kind,
                    status,
                    total_ttc,
                    due_date,
                    amount_collected,
                    amount_pending,
                    amount_overdue,
                })
            }
            _ => None,
        }
    }
}

fn required_text(
    value: &Option<String>,
    field: &str,
    errors: &mut Vec<ValidationError>,
) -> Option<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Some(v.clone()),
        _ => {
            errors.push(ValidationError::new(field, format!("{field} is required")));
            None
        }
    }
}

fn optional_amount(
    value: Option<Decimal>,
    field: &str,
    errors: &mut Vec<ValidationError>,
) -> Decimal {
    match value {
        None => Decimal::ZERO,
        Some(v) if v.is_sign_negative() => {
            errors.push(ValidationError::new(
                field,
                format!("{field} must be a non-negative number"),
            ));
            Decimal::ZERO
        }
        Some(v) => v,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn draft() -> RecordDraft {
        RecordDraft {
            owner_ref: Some("user-1".into()),
            contract_ref: Some("contract-9".into()),
            number: Some("2024-001".into()),
            kind: Some("invoice".into()),
            status: Some("pending".into()),
            total_ttc: Some(dec!(239.00)),
            due_date: NaiveDate::from_ymd_opt(2024, 7, 15),
            ..RecordDraft::default()
        }
    }

    #[test]
    fn valid_create_draft() {
        let new = draft().validate_create().unwrap();
        assert_eq!(new.kind, RecordKind::Invoice);
        assert_eq!(new.status, RecordStatus::Pending);
        assert_eq!(new.amount_collected, Decimal::ZERO);
    }

    #[test]
    fn kind_and_status_parse_case_insensitively() {
        assert_eq!(RecordKind::parse("Invoice"), Some(RecordKind::Invoice));
        assert_eq!(RecordKind::parse("QUOTE"), Some(RecordKind::Quote));
        assert_eq!(RecordKind::parse("FACTURE"), Some(RecordKind::Invoice));
        assert_eq!(RecordKind::parse("devise"), Some(RecordKind::Quote));
        assert_eq!(RecordKind::parse("receipt"), None);

        assert_eq!(RecordStatus::parse("PAID"), Some(RecordStatus::Paid));
        assert_eq!(RecordStatus::parse("PAYÉE"), Some(RecordStatus::Paid));
        assert_eq!(RecordStatus::parse("En_Attente"), Some(RecordStatus::Pending));
        assert_eq!(RecordStatus::parse("ANNULÉE"), Some(RecordStatus::Cancelled));
        assert_eq!(RecordStatus::parse("done"), None);
    }

    #[test]
    fn create_requires_owner_and_contract() {
        let mut d = draft();
        d.owner_ref = None;
        d.contract_ref = Some("  ".into());
        let errors = d.validate_create().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["owner_ref", "contract_ref"]);

        // The same draft is fine as an update.
        assert!(d.validate_update().is_ok());
    }

    #[test]
    fn every_violation_is_reported() {
        let d = RecordDraft {
            kind: Some("receipt".into()),
            status: Some("done".into()),
            total_ttc: Some(dec!(-1)),
            amount_collected: Some(dec!(-5)),
            ..RecordDraft::default()
        };
        let errors = d.validate_create().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert!(fields.contains(&"owner_ref"));
        assert!(fields.contains(&"contract_ref"));
        assert!(fields.contains(&"number"));
        assert!(fields.contains(&"kind"));
        assert!(fields.contains(&"status"));
        assert!(fields.contains(&"total_ttc"));
        assert!(fields.contains(&"due_date"));
        assert!(fields.contains(&"amount_collected"));
        assert_eq!(errors.len(), 8);
    }

    #[test]
    fn amounts_default_to_zero_when_absent() {
        let update = draft().validate_update().unwrap();
        assert_eq!(update.amount_collected, Decimal::ZERO);
        assert_eq!(update.amount_pending, Decimal::ZERO);
        assert_eq!(update.amount_overdue, Decimal::ZERO);
    }

    #[test]
    fn draft_rejects_unknown_fields() {
        let json = r#"{"number":"2024-001","shape":"unexpected"}"#;
        assert!(serde_json::from_str::<RecordDraft>(json).is_err());
    }

    #[test]
    fn status_serializes_to_canonical_name() {
        assert_eq!(
            serde_json::to_string(&RecordStatus::Paid).unwrap(),
            "\"paid\""
        );
        let parsed: RecordStatus = serde_json::from_str("\"PAYÉE\"").unwrap();
        assert_eq!(parsed, RecordStatus::Paid);
    }
}
