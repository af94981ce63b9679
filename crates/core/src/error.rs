//! Billing error model.

use thiserror::Error;

/// Result type used across the billing domain.
pub type BillingResult<T> = Result<T, BillingError>;

/// Billing-level error.
///
/// Both variants indicate malformed input data, not recoverable runtime
/// conditions: callers are expected to let them propagate unchanged, with
/// the offending id or kind string intact for precise reporting.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BillingError {
    /// A performance references a play id absent from the catalog.
    #[error("unknown play: {0}")]
    UnknownPlay(String),

    /// A play carries a kind outside the supported set.
    #[error("unknown play kind: {0}")]
    UnknownKind(String),
}

impl BillingError {
    pub fn unknown_play(id: impl Into<String>) -> Self {
        Self::UnknownPlay(id.into())
    }

    pub fn unknown_kind(kind: impl Into<String>) -> Self {
        Self::UnknownKind(kind.into())
    }
}
