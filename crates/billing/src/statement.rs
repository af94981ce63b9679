use core::fmt::Write as _;

use serde::Serialize;
use tracing::debug;

use playbill_catalog::Catalog;
use playbill_core::BillingResult;

use crate::currency::usd;
use crate::invoice::Invoice;
use crate::pricing;
use crate::tariff::Tariff;

/// One detail row of a computed statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatementLine {
    /// Display name of the play.
    pub play: String,
    /// Charge in cents.
    pub amount: u64,
    pub audience: u32,
}

/// A fully computed statement: detail rows in invoice order plus totals.
///
/// Computation is all-or-nothing. Any lookup or pricing failure surfaces
/// before a `Statement` value exists, so rendering never emits partial
/// output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statement {
    pub customer: String,
    pub lines: Vec<StatementLine>,
    /// Total owed in cents.
    pub total_amount: u64,
    pub total_credits: u64,
}

impl Statement {
    /// Price every performance on the invoice and aggregate the totals.
    pub fn compute(invoice: &Invoice, catalog: &Catalog, tariff: &Tariff) -> BillingResult<Self> {
        let mut lines = Vec::with_capacity(invoice.performances.len());
        let mut total_amount = 0u64;
        let mut total_credits = 0u64;

        for performance in &invoice.performances {
            let play = catalog.resolve(&performance.play_id)?;
            let amount = pricing::amount_for(play, performance.audience, tariff)?;
            let credits = pricing::credits_for(play, performance.audience, tariff);
            debug!(
                play_id = %performance.play_id,
                play = %play.name,
                audience = performance.audience,
                amount,
                credits,
                "priced performance"
            );

            total_amount += amount;
            total_credits += credits;
            lines.push(StatementLine {
                play: play.name.clone(),
                amount,
                audience: performance.audience,
            });
        }

        Ok(Self {
            customer: invoice.customer.clone(),
            lines,
            total_amount,
            total_credits,
        })
    }

    /// Raw totals for programmatic consumers: `(total_amount, total_credits)`.
    pub fn totals(&self) -> (u64, u64) {
        (self.total_amount, self.total_credits)
    }

    /// Render the human-readable statement text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Statement for {}", self.customer);
        for line in &self.lines {
            let _ = writeln!(
                out,
                "  {}: {} ({} seats)",
                line.play,
                usd(line.amount),
                line.audience
            );
        }
        let _ = writeln!(out, "Amount owed is {}", usd(self.total_amount));
        let _ = writeln!(out, "You earned {} credits", self.total_credits);
        out
    }
}

/// Compute and render in one step.
pub fn statement(invoice: &Invoice, catalog: &Catalog, tariff: &Tariff) -> BillingResult<String> {
    Ok(Statement::compute(invoice, catalog, tariff)?.render())
}
