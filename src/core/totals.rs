use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::{DocumentSettings, LineItem, VatRate};

/// Computed document totals.
///
/// All four values are derived from the item list and settings and keep full
/// precision — no rounding is applied mid-computation, so recomputing from
/// the same inputs always reproduces identical totals. Display rounding is
/// the presentation layer's job ([`CurrencyInfo::format_amount`]).
///
/// [`CurrencyInfo::format_amount`]: super::currencies::CurrencyInfo::format_amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of line totals, tax excluded.
    pub total_ht: Decimal,
    /// Sum of per-line VAT amounts; zero when VAT is disabled.
    pub total_vat: Decimal,
    /// Fixed stamp charge; zero when the stamp is disabled.
    pub fiscal_stamp: Decimal,
    /// total_ht + total_vat + fiscal_stamp.
    pub total_ttc: Decimal,
}

/// Rate actually applied to a line: the line's own rate when per-line VAT is
/// on, the document default otherwise.
pub fn effective_vat_rate(item: &LineItem, settings: &DocumentSettings) -> VatRate {
    if settings.per_line_vat {
        item.vat_rate
    } else {
        settings.default_vat_rate
    }
}

/// Compute document totals from the item list and settings.
///
/// Each line's product is computed before summation; VAT is accumulated per
/// line at the effective rate. An empty item list yields zero HT/VAT, so the
/// TTC total is just the fiscal stamp when enabled.
pub fn compute_totals(items: &[LineItem], settings: &DocumentSettings) -> Totals {
    let hundred = Decimal::new(100, 0);

    let total_ht: Decimal = items.iter().map(LineItem::line_total_ht).sum();

    let total_vat = if settings.vat_enabled {
        items
            .iter()
            .map(|item| {
                item.line_total_ht() * effective_vat_rate(item, settings).percent() / hundred
            })
            .sum()
    } else {
        Decimal::ZERO
    };

    let fiscal_stamp = if settings.fiscal_stamp_enabled {
        settings.fiscal_stamp_amount
    } else {
        Decimal::ZERO
    };

    Totals {
        total_ht,
        total_vat,
        fiscal_stamp,
        total_ttc: total_ht + total_vat + fiscal_stamp,
    }
}
