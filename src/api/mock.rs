//! Synthetic price feed for running without network access.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use rand::Rng;

use crate::{
    api::price_feed::PriceFeed,
    core::{PlanError, PriceInterval, SLOT_LENGTH},
    quantity::rate::KilowattHourRate,
};

/// Number of half-hour slots in the synthetic day.
const SLOTS_PER_DAY: i32 = 48;

/// Generates a full day of plausible Agile-looking prices for a fixed
/// reference date: a base range with an occasional spike or a dip into
/// negative territory.
pub struct Mock;

#[async_trait]
impl PriceFeed for Mock {
    async fn fetch(&self) -> Result<Vec<PriceInterval>, PlanError> {
        let mut rng = rand::rng();
        let base_date = Utc.with_ymd_and_hms(2023, 9, 1, 0, 0, 0).unwrap();
        let feed = (0..SLOTS_PER_DAY)
            .map(|index| {
                let price: f64 = if index % 10 == 0 {
                    if rng.random_bool(0.5) {
                        rng.random_range(0.20..=0.30)
                    } else {
                        rng.random_range(-0.05..=0.0)
                    }
                } else {
                    rng.random_range(0.05..=0.20)
                };
                PriceInterval::new(
                    base_date + SLOT_LENGTH * index,
                    KilowattHourRate((price * 100.0).round() / 100.0),
                )
            })
            .collect();
        Ok(feed)
    }
}
