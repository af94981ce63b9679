use serde::{Deserialize, Serialize};

/// Pricing and credit parameters. Amounts are in cents.
///
/// The tariff is passed explicitly into the pricing rules instead of living
/// in compile-time constants, so callers and tests can price against
/// alternate rate cards. `Default` is the house tariff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tariff {
    /// Flat amount charged for any tragedy.
    pub tragedy_base: u64,
    /// Audience size above which tragedies charge per extra person.
    pub tragedy_audience_threshold: u32,
    /// Per-person surcharge for tragedy audiences over the threshold.
    pub tragedy_per_person: u64,
    /// Flat amount charged for any comedy.
    pub comedy_base: u64,
    /// Audience size above which comedies charge the over-capacity terms.
    pub comedy_audience_threshold: u32,
    /// Flat over-capacity surcharge for comedies.
    pub comedy_over_base: u64,
    /// Per-person surcharge for comedy audiences over the threshold.
    pub comedy_per_person: u64,
    /// Per-seat amount charged for every comedy attendee, threshold or not.
    pub comedy_per_audience: u64,
    /// Audience size above which volume credits accrue one per person.
    pub credit_threshold: u32,
    /// Comedies earn one bonus credit per this many attendees. Must be
    /// nonzero.
    pub comedy_credit_divisor: u32,
}

impl Default for Tariff {
    fn default() -> Self {
        Self {
            tragedy_base: 40_000,
            tragedy_audience_threshold: 30,
            tragedy_per_person: 1_000,
            comedy_base: 30_000,
            comedy_audience_threshold: 20,
            comedy_over_base: 10_000,
            comedy_per_person: 500,
            comedy_per_audience: 300,
            credit_threshold: 30,
            comedy_credit_divisor: 5,
        }
    }
}
