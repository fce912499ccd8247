use crate::quantity::power::Kilowatts;

/// Failures a planning run reports to the caller.
///
/// None of these are retried here. Retry and backoff, if wanted at all,
/// belong to the feed provider.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum PlanError {
    /// The tariff endpoint failed, returned a non-success status,
    /// or sent a body that does not decode.
    #[display("the price feed is unavailable: {_0}")]
    FeedUnavailable(reqwest::Error),

    /// Charger power must be strictly positive.
    #[display("invalid charger power: {_0}")]
    InvalidConfiguration(#[error(not(source))] Kilowatts),

    /// The provider produced an empty feed for the requested day.
    #[display("no price data is available")]
    NoPriceData,
}
