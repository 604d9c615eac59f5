use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Invoice or quote — determines the document title and file-name slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Invoice,
    Quote,
}

impl DocumentKind {
    /// Title printed at the top of the rendered document.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Invoice => "FACTURE",
            Self::Quote => "DEVIS",
        }
    }

    /// Label used in running text ("Facture N°: …").
    pub fn label(&self) -> &'static str {
        match self {
            Self::Invoice => "Facture",
            Self::Quote => "Devis",
        }
    }

    /// Lowercase slug used in artifact file names.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Invoice => "invoice",
            Self::Quote => "quote",
        }
    }
}

/// Allowed VAT percentages. The rate set is closed — arbitrary percentages
/// are rejected at the input boundary, not clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum VatRate {
    /// 7% — reduced rate.
    Reduced,
    /// 12% — intermediate rate.
    Intermediate,
    /// 19% — standard rate.
    Standard,
}

impl VatRate {
    /// The rate as a whole-number percentage.
    pub fn percent(&self) -> Decimal {
        match self {
            Self::Reduced => Decimal::new(7, 0),
            Self::Intermediate => Decimal::new(12, 0),
            Self::Standard => Decimal::new(19, 0),
        }
    }

    /// Parse from a whole-number percentage.
    pub fn from_percent(percent: u32) -> Option<Self> {
        match percent {
            7 => Some(Self::Reduced),
            12 => Some(Self::Intermediate),
            19 => Some(Self::Standard),
            _ => None,
        }
    }

    /// All allowed rates, ascending.
    pub fn all() -> [Self; 3] {
        [Self::Reduced, Self::Intermediate, Self::Standard]
    }
}

impl From<VatRate> for u32 {
    fn from(rate: VatRate) -> u32 {
        match rate {
            VatRate::Reduced => 7,
            VatRate::Intermediate => 12,
            VatRate::Standard => 19,
        }
    }
}

impl TryFrom<u32> for VatRate {
    type Error = String;

    fn try_from(percent: u32) -> Result<Self, Self::Error> {
        Self::from_percent(percent).ok_or_else(|| format!("'{percent}' is not an allowed VAT rate"))
    }
}

/// One line of an invoice or quote.
///
/// The line total is always derived from quantity × unit price via
/// [`LineItem::line_total_ht`] — it is never stored, so it cannot drift from
/// its inputs when a document is re-edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Free-text description of the service or product.
    pub description: String,
    /// Invoiced quantity (whole units).
    pub quantity: u32,
    /// Net price per unit.
    pub unit_price: Decimal,
    /// VAT rate for this line. Only consulted when the document's
    /// [`DocumentSettings::per_line_vat`] is on.
    pub vat_rate: VatRate,
}

impl LineItem {
    pub fn new(
        description: impl Into<String>,
        quantity: u32,
        unit_price: Decimal,
        vat_rate: VatRate,
    ) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit_price,
            vat_rate,
        }
    }

    /// Net line total: quantity × unit price, full precision.
    pub fn line_total_ht(&self) -> Decimal {
        Decimal::from(self.quantity) * self.unit_price
    }
}

/// Per-document tax configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSettings {
    /// Apply VAT at all. Off ⇒ total VAT is zero regardless of line rates.
    pub vat_enabled: bool,
    /// Use each line's own rate. Off ⇒ every line is taxed at
    /// `default_vat_rate`.
    pub per_line_vat: bool,
    /// Document-wide rate used when `per_line_vat` is off.
    pub default_vat_rate: VatRate,
    /// Apply the fixed fiscal stamp once per document.
    pub fiscal_stamp_enabled: bool,
    /// Stamp amount (ignored when the stamp is disabled).
    pub fiscal_stamp_amount: Decimal,
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self {
            vat_enabled: true,
            per_line_vat: false,
            default_vat_rate: VatRate::Standard,
            fiscal_stamp_enabled: true,
            fiscal_stamp_amount: Decimal::new(100, 2), // 1.00
        }
    }
}

/// Issuer or client identity printed on the document. Free text; only
/// presence of name, address and tax id is validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartyInfo {
    pub name: String,
    pub address: String,
    /// Tax identifier (MF/SIRET).
    pub tax_id: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    /// Bank reference (RIB), usually only set on the issuer.
    pub bank_ref: Option<String>,
}

/// A complete invoice or quote as assembled by the editing UI.
///
/// This value is immutable once built: the calculator and the composer take
/// it by reference and never mutate it, so recomputation is reproducible.
/// It is consumed by the composer to produce the rendered artifact; only the
/// summarized [record projection](crate::store) is ever persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceDocument {
    pub kind: DocumentKind,
    /// Document number, e.g. "2024-001".
    pub number: String,
    pub issue_date: NaiveDate,
    pub delivery_date: Option<NaiveDate>,
    /// ISO 4217 code from the supported set (TND, EUR, USD, AED, SAR).
    pub currency: String,
    pub issuer: PartyInfo,
    pub client: PartyInfo,
    pub items: Vec<LineItem>,
    pub settings: DocumentSettings,
}
