//! Per-performance pricing and volume-credit rules.

use playbill_catalog::{Play, PlayKind};
use playbill_core::BillingResult;

use crate::tariff::Tariff;

/// Charge, in cents, for one performance of `play` before the given audience.
///
/// Fails on a play kind outside the supported set; there is no default price.
pub fn amount_for(play: &Play, audience: u32, tariff: &Tariff) -> BillingResult<u64> {
    let kind: PlayKind = play.kind.parse()?;
    let amount = match kind {
        PlayKind::Tragedy => {
            let mut amount = tariff.tragedy_base;
            if audience > tariff.tragedy_audience_threshold {
                amount += tariff.tragedy_per_person
                    * u64::from(audience - tariff.tragedy_audience_threshold);
            }
            amount
        }
        PlayKind::Comedy => {
            let mut amount = tariff.comedy_base;
            if audience > tariff.comedy_audience_threshold {
                amount += tariff.comedy_over_base
                    + tariff.comedy_per_person
                        * u64::from(audience - tariff.comedy_audience_threshold);
            }
            amount + tariff.comedy_per_audience * u64::from(audience)
        }
    };
    Ok(amount)
}

/// Volume credits earned for one performance.
///
/// Credits accrue for any kind: the base term depends only on the audience,
/// and only the comedy bonus inspects the kind. An unsupported kind earns the
/// base term here but is still rejected by [`amount_for`] before a statement
/// is produced.
pub fn credits_for(play: &Play, audience: u32, tariff: &Tariff) -> u64 {
    let mut credits = u64::from(audience.saturating_sub(tariff.credit_threshold));
    if matches!(play.kind.parse(), Ok(PlayKind::Comedy)) {
        credits += u64::from(audience / tariff.comedy_credit_divisor);
    }
    credits
}
