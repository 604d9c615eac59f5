//! Supported currencies and presentation formatting.
//!
//! The application works with a fixed currency set. Each entry carries the
//! display precision (3 decimals for the dinar, 2 elsewhere) and the unit
//! nouns used by the amount-in-words line.

use rust_decimal::Decimal;

/// Static description of a supported currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyInfo {
    /// ISO 4217 code.
    pub code: &'static str,
    /// Symbol or code suffix appended to formatted amounts.
    pub symbol: &'static str,
    /// French display name.
    pub name: &'static str,
    /// Display precision — 2 or 3 decimal places.
    pub decimal_places: u32,
    /// Main unit noun for the amount-in-words line ("dinars").
    pub unit_name: &'static str,
    /// Smallest sub-unit noun ("millimes", "centimes", "cents").
    pub subunit_name: &'static str,
}

impl CurrencyInfo {
    /// Render an amount at this currency's precision with its suffix,
    /// e.g. `200.000 TND` or `49.90 €`. Rounding is half-up and happens
    /// only here — stored totals keep full precision.
    pub fn format_amount(&self, amount: Decimal) -> String {
        let rounded = amount.round_dp_with_strategy(
            self.decimal_places,
            rust_decimal::RoundingStrategy::MidpointAwayFromZero,
        );
        format!(
            "{:.*} {}",
            self.decimal_places as usize,
            rounded,
            self.symbol
        )
    }

    /// 10^decimal_places — the number of sub-units per main unit.
    pub fn subunit_factor(&self) -> Decimal {
        match self.decimal_places {
            3 => Decimal::new(1000, 0),
            _ => Decimal::new(100, 0),
        }
    }
}

/// Supported currency set, sorted by code for binary search.
static CURRENCIES: &[CurrencyInfo] = &[
    CurrencyInfo {
        code: "AED",
        symbol: "AED",
        name: "Dirham UAE",
        decimal_places: 2,
        unit_name: "dirhams",
        subunit_name: "fils",
    },
    CurrencyInfo {
        code: "EUR",
        symbol: "€",
        name: "Euro",
        decimal_places: 2,
        unit_name: "euros",
        subunit_name: "centimes",
    },
    CurrencyInfo {
        code: "SAR",
        symbol: "SAR",
        name: "Riyal Saoudien",
        decimal_places: 2,
        unit_name: "riyals",
        subunit_name: "halalas",
    },
    CurrencyInfo {
        code: "TND",
        symbol: "TND",
        name: "Dinar Tunisien",
        decimal_places: 3,
        unit_name: "dinars",
        subunit_name: "millimes",
    },
    CurrencyInfo {
        code: "USD",
        symbol: "$",
        name: "Dollar US",
        decimal_places: 2,
        unit_name: "dollars",
        subunit_name: "cents",
    },
];

/// Look up a supported currency by ISO code.
pub fn currency_info(code: &str) -> Option<&'static CurrencyInfo> {
    CURRENCIES
        .binary_search_by(|c| c.code.cmp(code))
        .ok()
        .map(|i| &CURRENCIES[i])
}

/// Check whether `code` is in the supported currency set.
pub fn is_known_currency_code(code: &str) -> bool {
    currency_info(code).is_some()
}
