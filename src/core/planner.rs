//! Turns a day of priced half-hour intervals plus a charge requirement
//! into the cheapest set of intervals and the cost of using them.

use chrono::TimeDelta;
use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::{
    core::{error::PlanError, interval::{PriceInterval, SLOT_LENGTH}},
    prelude::*,
    quantity::{cost::Cost, energy::KilowattHours, power::Kilowatts},
};

/// Result of one planning run.
#[must_use]
pub struct ChargePlan {
    /// `required_energy / charger_power`, truncated to whole seconds.
    pub required_duration: TimeDelta,

    /// Cheapest intervals, in feed order. Not necessarily contiguous.
    pub selected: Vec<PriceInterval>,

    /// Cost of drawing the required energy during every selected interval.
    pub total_cost: Cost,
}

/// How long the charger has to run to deliver the required energy.
///
/// # Errors
///
/// Non-positive charger power is rejected before any division happens.
pub fn required_duration(
    required_energy: KilowattHours,
    charger_power: Kilowatts,
) -> Result<TimeDelta, PlanError> {
    if charger_power <= Kilowatts::ZERO {
        return Err(PlanError::InvalidConfiguration(charger_power));
    }
    Ok(required_energy / charger_power)
}

/// Number of half-hour slots to book for the duration.
///
/// Truncates: a 1.05-hour charge books 2 slots, with the remainder left
/// uncovered. Negative durations book nothing.
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub fn half_hour_slots(required_duration: TimeDelta) -> usize {
    (required_duration.num_seconds() / SLOT_LENGTH.num_seconds()).max(0) as usize
}

/// Pick the `slots` cheapest intervals from the feed.
///
/// This is an order-statistics selection, not a contiguous-window search:
/// the picked slots may be scattered across the day. Ties at the boundary
/// resolve by feed position, so a fixed feed always yields the same
/// selection, returned in feed order. Asking for more slots than the feed
/// holds returns the entire feed.
pub fn select_cheapest(feed: &[PriceInterval], slots: usize) -> Vec<PriceInterval> {
    feed.iter()
        .enumerate()
        .k_smallest_by_key(slots, |(index, interval)| {
            (OrderedFloat(interval.unit_price.0), *index)
        })
        .sorted_unstable_by_key(|(index, _)| *index)
        .map(|(_, interval)| interval.clone())
        .collect()
}

/// Cost of charging during every selected interval.
///
/// `unit_price` is pence-denominated, hence the division by 100.
/// `required_energy` acts as the average draw over each selected half-hour,
/// so the figure scales with the slot count rather than being split across
/// it. Good enough for ranking days, not a physical billing model.
pub fn total_cost(selected: &[PriceInterval], required_energy: KilowattHours) -> Cost {
    selected
        .iter()
        .map(|interval| required_energy * (interval.unit_price / 100.0) * 0.5)
        .fold(Cost::ZERO, |total, contribution| total + contribution)
}

/// Run the whole pipeline: derive the duration, pick the slots, price them.
///
/// # Errors
///
/// [`PlanError::InvalidConfiguration`] for non-positive charger power,
/// [`PlanError::NoPriceData`] when the feed is empty.
#[instrument(skip_all, fields(required_energy = %required_energy, charger_power = %charger_power))]
pub fn plan(
    feed: &[PriceInterval],
    required_energy: KilowattHours,
    charger_power: Kilowatts,
) -> Result<ChargePlan, PlanError> {
    let required_duration = required_duration(required_energy, charger_power)?;
    if feed.is_empty() {
        return Err(PlanError::NoPriceData);
    }
    let slots = half_hour_slots(required_duration);
    let selected = select_cheapest(feed, slots);
    let total_cost = total_cost(&selected, required_energy);
    debug!(slots, n_selected = selected.len(), %total_cost, "planned");
    Ok(ChargePlan { required_duration, selected, total_cost })
}

/// Flag every feed row with whether the plan booked it.
///
/// Keyed by exact `valid_from` equality, which is why a feed must never
/// contain two intervals with the same start.
pub fn mark_selected<'a>(
    feed: &'a [PriceInterval],
    plan: &ChargePlan,
) -> Vec<(&'a PriceInterval, bool)> {
    feed.iter()
        .map(|interval| {
            let booked =
                plan.selected.iter().any(|selected| selected.valid_from == interval.valid_from);
            (interval, booked)
        })
        .collect()
}
