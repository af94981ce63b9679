use serde::{Deserialize, Serialize};

use playbill_core::PlayId;

/// One booked performance: a play reference plus the audience it drew.
///
/// The play id is a non-owning reference, resolved through the catalog when
/// the statement is computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performance {
    #[serde(rename = "playID")]
    pub play_id: PlayId,
    pub audience: u32,
}

impl Performance {
    pub fn new(play_id: impl Into<PlayId>, audience: u32) -> Self {
        Self {
            play_id: play_id.into(),
            audience,
        }
    }
}

/// A customer's invoice: an ordered run of performances.
///
/// Order is significant; it fixes the printed line order of the statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub customer: String,
    pub performances: Vec<Performance>,
}

impl Invoice {
    pub fn new(customer: impl Into<String>, performances: Vec<Performance>) -> Self {
        Self {
            customer: customer.into(),
            performances,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invoice_deserializes_from_wire_format() {
        let invoice: Invoice = serde_json::from_str(
            r#"{
                "customer": "BigCo",
                "performances": [
                    {"playID": "hamlet", "audience": 55}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(
            invoice,
            Invoice::new("BigCo", vec![Performance::new("hamlet", 55)])
        );
    }
}
