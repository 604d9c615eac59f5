//! French amount-in-words rendering.
//!
//! Deliberately partial: numbers 0–99 are spelled out with plain hyphen
//! joining (no "et" insertion, so 21 is "vingt-un"), and anything from 100
//! up falls back to the decimal digit string. Extending this to full French
//! number spelling is out of scope — the fallback is the documented contract.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use super::currencies::CurrencyInfo;

static ONES: [&str; 10] = [
    "", "un", "deux", "trois", "quatre", "cinq", "six", "sept", "huit", "neuf",
];
static TEENS: [&str; 10] = [
    "dix",
    "onze",
    "douze",
    "treize",
    "quatorze",
    "quinze",
    "seize",
    "dix-sept",
    "dix-huit",
    "dix-neuf",
];
static TENS: [&str; 10] = [
    "",
    "",
    "vingt",
    "trente",
    "quarante",
    "cinquante",
    "soixante",
    "soixante-dix",
    "quatre-vingt",
    "quatre-vingt-dix",
];

/// Spell a whole number in French words for values below 100; return the
/// digit string for anything larger.
pub fn french_words(n: u64) -> String {
    match n {
        0 => "zéro".to_string(),
        1..=9 => ONES[n as usize].to_string(),
        10..=19 => TEENS[(n - 10) as usize].to_string(),
        20..=99 => {
            let tens = TENS[(n / 10) as usize];
            match n % 10 {
                0 => tens.to_string(),
                unit => format!("{tens}-{}", ONES[unit as usize]),
            }
        }
        _ => n.to_string(),
    }
}

/// Render a monetary amount as words plus a sub-unit count, e.g.
/// "trente-neuf dinars et 500 millimes" for 39.5 TND.
///
/// The integer part goes through [`french_words`]; the fractional part is
/// rounded to an integer count of the currency's smallest sub-unit.
/// Negative amounts are rendered as their absolute value.
pub fn amount_in_words(amount: Decimal, currency: &CurrencyInfo) -> String {
    let amount = amount.abs();
    let whole = amount.trunc();
    let subunits = ((amount - whole) * currency.subunit_factor())
        .round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
        .to_u64()
        .unwrap_or(0);
    let whole = whole.to_u64().map(french_words).unwrap_or_else(|| {
        // Out of u64 range — the digit fallback still applies.
        whole.to_string()
    });

    format!(
        "{} {} et {} {}",
        whole, currency.unit_name, subunits, currency.subunit_name
    )
}
