use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::{core::PriceInterval, quantity::rate::KilowattHourRate};

pub fn build_rates_table(feed: &[PriceInterval]) -> Table {
    let median_rate = median_rate(feed.iter().map(|interval| interval.unit_price));
    let mut table = new_table(vec!["Start", "End", "Unit rate"]);
    for interval in feed {
        table.add_row(vec![
            Cell::new(interval.valid_from.format("%H:%M")),
            Cell::new(interval.valid_to.format("%H:%M")).add_attribute(Attribute::Dim),
            rate_cell(interval.unit_price, median_rate),
        ]);
    }
    table
}

pub fn build_plan_table(rows: &[(&PriceInterval, bool)]) -> Table {
    let median_rate = median_rate(rows.iter().map(|(interval, _)| interval.unit_price));
    let mut table = new_table(vec!["Start", "End", "Unit rate", "Charge"]);
    for (interval, booked) in rows {
        table.add_row(vec![
            Cell::new(interval.valid_from.format("%H:%M")),
            Cell::new(interval.valid_to.format("%H:%M")).add_attribute(Attribute::Dim),
            rate_cell(interval.unit_price, median_rate),
            if *booked {
                Cell::new("charge")
                    .set_alignment(CellAlignment::Center)
                    .fg(Color::Green)
                    .add_attribute(Attribute::Bold)
            } else {
                Cell::new("")
            },
        ]);
    }
    table
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table.set_header(header);
    table
}

fn rate_cell(rate: KilowattHourRate, median_rate: KilowattHourRate) -> Cell {
    Cell::new(rate).set_alignment(CellAlignment::Right).fg(if rate >= median_rate {
        Color::Red
    } else {
        Color::Green
    })
}

fn median_rate(rates: impl Iterator<Item = KilowattHourRate>) -> KilowattHourRate {
    let sorted: Vec<KilowattHourRate> =
        rates.sorted_unstable_by_key(|rate| OrderedFloat(rate.0)).collect();
    sorted.get(sorted.len() / 2).copied().unwrap_or(KilowattHourRate::ZERO)
}
