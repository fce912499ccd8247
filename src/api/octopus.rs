//! [Octopus Energy Agile](https://octopus.energy/smart/agile/) tariff client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;

use crate::{
    api::price_feed::PriceFeed,
    core::{PlanError, PriceInterval},
    prelude::*,
};

/// Everything needed to address one tariff. Passed in explicitly,
/// never held in module-level state.
pub struct Config {
    pub base_url: Url,
    pub api_key: String,
    pub product_id: String,
    pub tariff_id: String,
}

pub struct Api {
    client: reqwest::Client,
    unit_rates_url: Url,
    api_key: String,
    product_id: String,
}

impl Api {
    pub fn new(config: Config) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(Duration::from_secs(10)).build()?;
        let path = format!(
            "products/{}/electricity-tariffs/{}/standard-unit-rates/",
            config.product_id, config.tariff_id,
        );
        let unit_rates_url =
            config.base_url.join(&path).context("failed to build the unit rates URL")?;
        Ok(Self { client, unit_rates_url, api_key: config.api_key, product_id: config.product_id })
    }
}

#[async_trait]
impl PriceFeed for Api {
    /// Get the day's half-hourly unit rates.
    ///
    /// Timeouts, non-success statuses, and bodies that do not decode all
    /// surface as [`PlanError::FeedUnavailable`].
    #[instrument(skip_all, fields(product_id = %self.product_id))]
    async fn fetch(&self) -> Result<Vec<PriceInterval>, PlanError> {
        info!("fetching…");
        let intervals = self
            .client
            .get(self.unit_rates_url.clone())
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(PlanError::FeedUnavailable)?
            .error_for_status()
            .map_err(PlanError::FeedUnavailable)?
            .json::<UnitRates>()
            .await
            .map_err(PlanError::FeedUnavailable)?
            .results;
        let intervals = normalize(intervals);
        info!(n_intervals = intervals.len(), "fetched");
        Ok(intervals)
    }
}

/// The endpoint pages newest-first and pages may overlap; the planner wants
/// feed order with unique starts.
fn normalize(mut intervals: Vec<PriceInterval>) -> Vec<PriceInterval> {
    intervals.sort_unstable_by_key(|interval| interval.valid_from);
    intervals.dedup_by_key(|interval| interval.valid_from);
    intervals
}

#[derive(Deserialize)]
struct UnitRates {
    results: Vec<PriceInterval>,
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::quantity::rate::KilowattHourRate;

    fn test_config() -> Config {
        Config {
            base_url: Url::parse("https://api.octopus.energy/v1/").unwrap(),
            api_key: "sk_test".to_string(),
            product_id: "AGILE-FLEX-22-11-25".to_string(),
            tariff_id: "E-1R-AGILE-FLEX-22-11-25-A".to_string(),
        }
    }

    #[test]
    fn test_unit_rates_url() {
        let api = Api::new(test_config()).unwrap();
        assert_eq!(
            api.unit_rates_url.as_str(),
            "https://api.octopus.energy/v1/products/AGILE-FLEX-22-11-25/electricity-tariffs/E-1R-AGILE-FLEX-22-11-25-A/standard-unit-rates/",
        );
    }

    #[test]
    fn test_decode_results() {
        let body: UnitRates = serde_json::from_str(
            r#"{
                "count": 2,
                "next": null,
                "previous": null,
                "results": [
                    {"value_exc_vat": 21.07, "value_inc_vat": 22.12, "valid_from": "2023-09-01T00:30:00Z", "valid_to": "2023-09-01T01:00:00Z"},
                    {"value_exc_vat": -1.00, "value_inc_vat": -1.05, "valid_from": "2023-09-01T00:00:00Z", "valid_to": "2023-09-01T00:30:00Z"}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(body.results.len(), 2);
        assert_eq!(body.results[1].unit_price, KilowattHourRate(-1.05));
        assert_eq!(body.results[1].valid_from, Utc.with_ymd_and_hms(2023, 9, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_normalize_orders_and_dedupes() {
        let base = Utc.with_ymd_and_hms(2023, 9, 1, 0, 0, 0).unwrap();
        let later = PriceInterval::new(base + crate::core::SLOT_LENGTH, KilowattHourRate(22.12));
        let early = PriceInterval::new(base, KilowattHourRate(-1.05));
        let repeat = PriceInterval::new(base, KilowattHourRate(-1.05));
        let feed = normalize(vec![later.clone(), early.clone(), repeat]);
        assert_eq!(feed, [early, later]);
    }

    #[tokio::test]
    #[ignore = "makes the API request"]
    async fn test_fetch_ok() -> Result {
        let feed = Api::new(test_config())?.fetch().await?;
        assert!(!feed.is_empty());
        assert!(feed.iter().is_sorted_by_key(|interval| interval.valid_from));
        Ok(())
    }
}
