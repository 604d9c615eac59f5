//! # facturier
//!
//! Invoicing and quoting library: a typed document model with VAT/fiscal-stamp
//! totals, a French amount-in-words renderer, a paginated PDF composer, and a
//! validated invoice record store with an optional REST client.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//! Totals keep full precision; rounding happens only at presentation time.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use facturier::core::*;
//! use rust_decimal_macros::dec;
//!
//! let doc = DocumentBuilder::new(DocumentKind::Invoice, "2024-001",
//!         NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
//!     .issuer(PartyBuilder::new("E-Tafakna SARL", "Tunis, Tunisie", "1234567/A/M/000").build())
//!     .client(PartyBuilder::new("Client SA", "Sfax, Tunisie", "7654321/B/N/000").build())
//!     .add_item(LineItem::new("Consulting", 2, dec!(100), VatRate::Standard))
//!     .build()
//!     .unwrap();
//!
//! let totals = compute_totals(&doc.items, &doc.settings);
//! assert_eq!(totals.total_ttc, dec!(239.00));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Document model, totals, amount-in-words, validation, numbering |
//! | `pdf` | Paginated invoice/quote PDF composition |
//! | `store` | Invoice record store with boundary validation |
//! | `client` | Async REST client for a remote record store |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "pdf")]
pub mod pdf;

#[cfg(feature = "store")]
pub mod store;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
