mod error;
mod interval;
pub mod planner;

pub use self::{
    error::PlanError,
    interval::{PriceInterval, SLOT_LENGTH},
    planner::ChargePlan,
};
