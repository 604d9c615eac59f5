use super::error::ValidationError;
use super::types::*;

/// Validate a document before rendering or submission.
/// Returns all validation errors found (not just the first).
pub fn validate_document(document: &InvoiceDocument) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if document.number.trim().is_empty() {
        errors.push(ValidationError::new(
            "number",
            "document number must not be empty",
        ));
    }

    if document.currency.trim().is_empty() {
        errors.push(ValidationError::new(
            "currency",
            "currency code must not be empty",
        ));
    } else if !super::currencies::is_known_currency_code(&document.currency) {
        errors.push(ValidationError::new(
            "currency",
            format!("currency '{}' is not supported", document.currency),
        ));
    }

    validate_party(&document.issuer, "issuer", &mut errors);
    validate_party(&document.client, "client", &mut errors);

    if document.items.is_empty() {
        errors.push(ValidationError::new(
            "items",
            "document must have at least one line item",
        ));
    }

    for (i, item) in document.items.iter().enumerate() {
        validate_item(item, i, &mut errors);
    }

    if document.settings.fiscal_stamp_amount.is_sign_negative() {
        errors.push(ValidationError::new(
            "settings.fiscal_stamp_amount",
            "fiscal stamp amount must not be negative",
        ));
    }

    errors
}

fn validate_party(party: &PartyInfo, prefix: &str, errors: &mut Vec<ValidationError>) {
    if party.name.trim().is_empty() {
        errors.push(ValidationError::new(
            format!("{prefix}.name"),
            "name must not be empty",
        ));
    }
    if party.address.trim().is_empty() {
        errors.push(ValidationError::new(
            format!("{prefix}.address"),
            "address must not be empty",
        ));
    }
    if party.tax_id.trim().is_empty() {
        errors.push(ValidationError::new(
            format!("{prefix}.tax_id"),
            "tax identifier must not be empty",
        ));
    }
}

fn validate_item(item: &LineItem, index: usize, errors: &mut Vec<ValidationError>) {
    let prefix = format!("items[{index}]");

    if item.description.trim().is_empty() {
        errors.push(ValidationError::new(
            format!("{prefix}.description"),
            "line description must not be empty",
        ));
    }

    if item.quantity == 0 {
        errors.push(ValidationError::new(
            format!("{prefix}.quantity"),
            "quantity must be a positive integer",
        ));
    }

    if item.unit_price.is_sign_negative() {
        errors.push(ValidationError::new(
            format!("{prefix}.unit_price"),
            "unit price must not be negative",
        ));
    }
}
