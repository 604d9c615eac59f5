use chrono::{Datelike, NaiveDate};

use super::error::FacturierError;

/// Sequential per-year document number generator.
///
/// Produces numbers in the UI's default format `{year}-{sequential}`,
/// e.g. "2024-001", "2024-002", with an optional prefix for separate
/// invoice/quote sequences ("F-2024-001").
#[derive(Debug, Clone)]
pub struct NumberSequence {
    prefix: Option<String>,
    year: i32,
    next: u64,
    zero_pad: usize,
}

impl NumberSequence {
    /// Create a new sequence for `year`, starting at 1.
    pub fn new(year: i32) -> Self {
        Self {
            prefix: None,
            year,
            next: 1,
            zero_pad: 3,
        }
    }

    /// Prefix every number, e.g. "F-" for invoices, "D-" for quotes.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Continue from a known counter value (e.g. restored from the store).
    pub fn starting_at(mut self, next: u64) -> Self {
        self.next = next;
        self
    }

    /// Set zero-padding width (default 3, so "001").
    pub fn with_padding(mut self, width: usize) -> Self {
        self.zero_pad = width;
        self
    }

    fn format(&self, n: u64) -> String {
        format!(
            "{}{}-{:0>width$}",
            self.prefix.as_deref().unwrap_or(""),
            self.year,
            n,
            width = self.zero_pad
        )
    }

    /// Issue the next document number.
    pub fn next_number(&mut self) -> String {
        let n = self.next;
        self.next += 1;
        self.format(n)
    }

    /// Preview the next number without consuming it.
    pub fn peek(&self) -> String {
        self.format(self.next)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Move to a later year, resetting the counter to 1.
    pub fn advance_year(&mut self, new_year: i32) -> Result<(), FacturierError> {
        if new_year <= self.year {
            return Err(FacturierError::Numbering(format!(
                "new year {new_year} must be greater than current year {}",
                self.year
            )));
        }
        self.year = new_year;
        self.next = 1;
        Ok(())
    }

    /// Advance the year if `date` falls in a later one.
    /// Returns true if the year rolled over.
    pub fn auto_advance(&mut self, date: NaiveDate) -> bool {
        if date.year() > self.year {
            self.year = date.year();
            self.next = 1;
            true
        } else {
            false
        }
    }
}
