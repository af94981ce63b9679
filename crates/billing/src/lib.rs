//! Billing statement module.
//!
//! Pricing and volume-credit rules for theater invoices, implemented purely
//! as deterministic domain logic (no IO, no HTTP, no storage). A statement
//! is a pure function of a catalog, an invoice, and a tariff.

pub mod currency;
pub mod invoice;
pub mod pricing;
pub mod statement;
pub mod tariff;

pub use currency::usd;
pub use invoice::{Invoice, Performance};
pub use pricing::{amount_for, credits_for};
pub use statement::{Statement, StatementLine, statement};
pub use tariff::Tariff;
