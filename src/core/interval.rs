use chrono::{DateTime, TimeDelta, Utc};
use serde::Deserialize;

use crate::quantity::rate::KilowattHourRate;

/// Length of one pricing window. Every interval in a feed spans exactly this.
pub const SLOT_LENGTH: TimeDelta = TimeDelta::minutes(30);

/// Unit price of energy during one half-hour window of the tariff day.
///
/// Deserializes straight from an entry of the Agile `results` array.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[must_use]
pub struct PriceInterval {
    /// Inclusive.
    pub valid_from: DateTime<Utc>,

    /// Exclusive: `valid_from + SLOT_LENGTH`.
    pub valid_to: DateTime<Utc>,

    #[serde(rename = "value_inc_vat")]
    pub unit_price: KilowattHourRate,
}

impl PriceInterval {
    pub fn new(valid_from: DateTime<Utc>, unit_price: KilowattHourRate) -> Self {
        Self { valid_from, valid_to: valid_from + SLOT_LENGTH, unit_price }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_deserialize_agile_entry() {
        let interval: PriceInterval = serde_json::from_str(
            r#"{
                "value_exc_vat": 21.07,
                "value_inc_vat": 22.12,
                "valid_from": "2023-09-01T00:00:00Z",
                "valid_to": "2023-09-01T00:30:00Z",
                "payment_method": null
            }"#,
        )
        .unwrap();
        assert_eq!(interval.valid_from, Utc.with_ymd_and_hms(2023, 9, 1, 0, 0, 0).unwrap());
        assert_eq!(interval.valid_to - interval.valid_from, SLOT_LENGTH);
        assert_eq!(interval.unit_price, KilowattHourRate(22.12));
    }
}
