mod api;
mod cli;
mod core;
mod prelude;
mod quantity;
mod tables;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command},
    core::planner,
    prelude::*,
    tables::{build_plan_table, build_rates_table},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Plan(args) => {
            let required_energy = args.battery_capacity - args.solar_generation;
            info!(%required_energy, charger_power = %args.charger_power, "charge request");

            let feed = args.feed.try_new_feed()?.fetch().await?;
            let plan = planner::plan(&feed, required_energy, args.charger_power)?;
            println!("{}", build_plan_table(&planner::mark_selected(&feed, &plan)));
            info!(
                charge_time = %format!("{:.2} h", plan.required_duration.as_seconds_f64() / 3600.0),
                n_slots = plan.selected.len(),
                total_cost = %plan.total_cost,
                "planned",
            );
        }

        Command::Rates(args) => {
            let feed = args.feed.try_new_feed()?.fetch().await?;
            println!("{}", build_rates_table(&feed));
        }
    }

    Ok(())
}
