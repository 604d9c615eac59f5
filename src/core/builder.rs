use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::{FacturierError, validation_failure};
use super::types::*;
use super::validation;

/// Builder for constructing valid documents.
///
/// ```
/// use facturier::core::*;
/// use rust_decimal_macros::dec;
/// use chrono::NaiveDate;
///
/// let doc = DocumentBuilder::new(DocumentKind::Invoice, "2024-001",
///         NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
///     .issuer(PartyBuilder::new("E-Tafakna SARL", "Tunis, Tunisie", "1234567/A/M/000")
///         .phone("+216 71 000 000")
///         .email("contact@e-tafakna.com")
///         .build())
///     .client(PartyBuilder::new("Client SA", "Sfax, Tunisie", "7654321/B/N/000").build())
///     .add_item(LineItem::new("Consulting", 2, dec!(100), VatRate::Standard))
///     .build();
/// ```
pub struct DocumentBuilder {
    kind: DocumentKind,
    number: String,
    issue_date: NaiveDate,
    delivery_date: Option<NaiveDate>,
    currency: String,
    issuer: Option<PartyInfo>,
    client: Option<PartyInfo>,
    items: Vec<LineItem>,
    settings: DocumentSettings,
}

impl DocumentBuilder {
    pub fn new(kind: DocumentKind, number: impl Into<String>, issue_date: NaiveDate) -> Self {
        Self {
            kind,
            number: number.into(),
            issue_date,
            delivery_date: None,
            currency: "TND".to_string(),
            issuer: None,
            client: None,
            items: Vec::new(),
            settings: DocumentSettings::default(),
        }
    }

    pub fn delivery_date(mut self, date: NaiveDate) -> Self {
        self.delivery_date = Some(date);
        self
    }

    pub fn currency(mut self, code: impl Into<String>) -> Self {
        self.currency = code.into();
        self
    }

    pub fn issuer(mut self, party: PartyInfo) -> Self {
        self.issuer = Some(party);
        self
    }

    pub fn client(mut self, party: PartyInfo) -> Self {
        self.client = Some(party);
        self
    }

    pub fn add_item(mut self, item: LineItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn settings(mut self, settings: DocumentSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn vat_enabled(mut self, enabled: bool) -> Self {
        self.settings.vat_enabled = enabled;
        self
    }

    pub fn per_line_vat(mut self, enabled: bool) -> Self {
        self.settings.per_line_vat = enabled;
        self
    }

    pub fn default_vat_rate(mut self, rate: VatRate) -> Self {
        self.settings.default_vat_rate = rate;
        self
    }

    pub fn fiscal_stamp(mut self, enabled: bool, amount: Decimal) -> Self {
        self.settings.fiscal_stamp_enabled = enabled;
        self.settings.fiscal_stamp_amount = amount;
        self
    }

    /// Build the document, running full validation.
    /// Returns all validation errors joined (not just the first).
    pub fn build(self) -> Result<InvoiceDocument, FacturierError> {
        let document = self.assemble()?;

        let errors = validation::validate_document(&document);
        if !errors.is_empty() {
            return Err(validation_failure(&errors));
        }

        Ok(document)
    }

    /// Build without validation — useful for tests or importing drafts that
    /// will be validated later.
    pub fn build_unchecked(self) -> Result<InvoiceDocument, FacturierError> {
        self.assemble()
    }

    fn assemble(self) -> Result<InvoiceDocument, FacturierError> {
        let issuer = self
            .issuer
            .ok_or_else(|| FacturierError::Builder("issuer is required".into()))?;
        let client = self
            .client
            .ok_or_else(|| FacturierError::Builder("client is required".into()))?;

        // Input limits to prevent abuse
        if self.items.len() > 10_000 {
            return Err(FacturierError::Builder(
                "document cannot have more than 10,000 line items".into(),
            ));
        }
        if self.number.len() > 200 {
            return Err(FacturierError::Builder(
                "document number cannot exceed 200 characters".into(),
            ));
        }

        Ok(InvoiceDocument {
            kind: self.kind,
            number: self.number,
            issue_date: self.issue_date,
            delivery_date: self.delivery_date,
            currency: self.currency,
            issuer,
            client,
            items: self.items,
            settings: self.settings,
        })
    }
}

/// Builder for [`PartyInfo`] (issuer or client).
pub struct PartyBuilder {
    name: String,
    address: String,
    tax_id: String,
    phone: Option<String>,
    email: Option<String>,
    bank_ref: Option<String>,
}

impl PartyBuilder {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        tax_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            tax_id: tax_id.into(),
            phone: None,
            email: None,
            bank_ref: None,
        }
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn bank_ref(mut self, bank_ref: impl Into<String>) -> Self {
        self.bank_ref = Some(bank_ref.into());
        self
    }

    pub fn build(self) -> PartyInfo {
        PartyInfo {
            name: self.name,
            address: self.address,
            tax_id: self.tax_id,
            phone: self.phone,
            email: self.email,
            bank_ref: self.bank_ref,
        }
    }
}
