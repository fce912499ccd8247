use async_trait::async_trait;

use crate::core::{PlanError, PriceInterval};

/// Source of one day of half-hour unit prices.
///
/// Implementations return the intervals in ascending `valid_from` order,
/// with no two intervals sharing a start.
#[async_trait]
pub trait PriceFeed: Sync {
    async fn fetch(&self) -> Result<Vec<PriceInterval>, PlanError>;
}
