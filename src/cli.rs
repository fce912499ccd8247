use clap::{Parser, Subcommand};
use reqwest::Url;

use crate::{
    api::{Mock, Octopus, OctopusConfig, PriceFeed},
    prelude::*,
    quantity::{energy::KilowattHours, power::Kilowatts},
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fetch the day's unit rates and book the cheapest slots for the requested charge.
    #[clap(name = "plan")]
    Plan(Box<PlanArgs>),

    /// Fetch and print the day's unit rates without planning.
    #[clap(name = "rates")]
    Rates(Box<RatesArgs>),
}

#[derive(Parser)]
pub struct PlanArgs {
    /// Battery storage capacity in kilowatt-hours.
    #[clap(long = "battery-capacity-kwh", env = "BATTERY_CAPACITY_KWH")]
    pub battery_capacity: KilowattHours,

    /// Expected on-site generation in kilowatt-hours, subtracted from the capacity.
    #[clap(long = "solar-generation-kwh", default_value = "0.0", env = "SOLAR_GENERATION_KWH")]
    pub solar_generation: KilowattHours,

    /// Charger power rating in kilowatts.
    #[clap(long = "charger-power-kw", default_value = "7.0", env = "CHARGER_POWER_KW")]
    pub charger_power: Kilowatts,

    #[clap(flatten)]
    pub feed: FeedArgs,
}

#[derive(Parser)]
pub struct RatesArgs {
    #[clap(flatten)]
    pub feed: FeedArgs,
}

#[derive(Parser)]
pub struct FeedArgs {
    /// Use the synthetic price feed instead of the live tariff API.
    #[clap(long)]
    pub mock: bool,

    #[clap(flatten)]
    pub octopus: OctopusApiArgs,
}

impl FeedArgs {
    pub fn try_new_feed(&self) -> Result<Box<dyn PriceFeed>> {
        if self.mock {
            return Ok(Box::new(Mock));
        }
        let api_key = self
            .octopus
            .api_key
            .clone()
            .context("`--api-key` is required unless `--mock` is set")?;
        let config = OctopusConfig {
            base_url: self.octopus.base_url.clone(),
            api_key,
            product_id: self.octopus.product_id.clone(),
            tariff_id: self.octopus.tariff_id.clone(),
        };
        Ok(Box::new(Octopus::new(config)?))
    }
}

#[derive(Parser)]
pub struct OctopusApiArgs {
    /// Octopus API key.
    #[clap(long = "api-key", env = "OCTOPUS_API_KEY")]
    pub api_key: Option<String>,

    #[clap(
        long = "api-base-url",
        default_value = "https://api.octopus.energy/v1/",
        env = "OCTOPUS_API_BASE_URL"
    )]
    pub base_url: Url,

    #[clap(long = "product-id", default_value = "AGILE-FLEX-22-11-25", env = "OCTOPUS_PRODUCT_ID")]
    pub product_id: String,

    #[clap(
        long = "tariff-id",
        default_value = "E-1R-AGILE-FLEX-22-11-25-A",
        env = "OCTOPUS_TARIFF_ID"
    )]
    pub tariff_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plan_args() {
        let args = Args::try_parse_from([
            "octoplan",
            "plan",
            "--battery-capacity-kwh",
            "7.36",
            "--solar-generation-kwh",
            "1.2",
            "--charger-power-kw",
            "3.6",
            "--mock",
        ])
        .unwrap();
        let Command::Plan(args) = args.command else {
            panic!("expected the plan command");
        };
        assert_eq!(args.battery_capacity, KilowattHours(7.36));
        assert_eq!(args.solar_generation, KilowattHours(1.2));
        assert_eq!(args.charger_power, Kilowatts(3.6));
        assert!(args.feed.mock);
    }
}
